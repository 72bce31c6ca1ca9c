// Copyright 2025 Forecasting Technologies LTD.
//
// This file is part of Zeitgeist.
//
// Zeitgeist is free software: you can redistribute it and/or modify it
// under the terms of the GNU General Public License as published by the
// Free Software Foundation, either version 3 of the License, or (at
// your option) any later version.
//
// Zeitgeist is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Zeitgeist. If not, see <https://www.gnu.org/licenses/>.

//! Weighted juror draw.
//!
//! Activated stake is laid out as consecutive segments of a cumulative weight line. Each slot
//! derives its own index on that line from the term seed and picks the juror whose segment
//! contains it.

use alloc::vec::Vec;
use court_primitives::types::{DisputeId, SessionIndex};
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use scale_info::TypeInfo;
use sp_io::hashing::blake2_256;
use sp_runtime::RuntimeDebug;

/// The draw weight of `juror` occupies `[start, end)`.
#[derive(Clone, Decode, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo)]
pub struct ActivationSegment<AccountId> {
    pub juror: AccountId,
    pub start: u128,
    pub end: u128,
}

#[derive(Clone, Copy, Eq, PartialEq, RuntimeDebug)]
pub enum DrawError {
    /// No juror has activated any weight.
    NoEligibleJurors,
}

pub(crate) enum DrawOutcome {
    /// `slots` is the largest number of slots drawn for a single dispute.
    Drawn { disputes: u32, slots: u32 },
    /// Disputes are waiting, but nobody activated any weight.
    Stalled,
}

pub(crate) fn total_weight<AccountId>(segments: &[ActivationSegment<AccountId>]) -> u128 {
    segments.last().map(|segment| segment.end).unwrap_or(0)
}

/// The seed of a single slot. Slots of the same session, of different sessions and of different
/// disputes are drawn independently of each other.
pub(crate) fn slot_seed(
    seed: &[u8; 32],
    dispute_id: DisputeId,
    session: SessionIndex,
    slot: u32,
) -> [u8; 32] {
    (seed, dispute_id, session, slot).using_encoded(blake2_256)
}

/// Returns the owner of the segment which contains `index`.
pub(crate) fn juror_at<AccountId>(
    segments: &[ActivationSegment<AccountId>],
    index: u128,
) -> Option<&AccountId> {
    let position = segments.partition_point(|segment| segment.end <= index);
    segments
        .get(position)
        .filter(|segment| segment.start <= index && index < segment.end)
        .map(|segment| &segment.juror)
}

/// Draws a juror for each of the `slots` slots of `session` of `dispute_id`.
///
/// The result only depends on the arguments. A juror may be drawn for any number of slots.
pub(crate) fn draw_slots<AccountId: Clone>(
    segments: &[ActivationSegment<AccountId>],
    seed: &[u8; 32],
    dispute_id: DisputeId,
    session: SessionIndex,
    slots: u32,
) -> Result<Vec<AccountId>, DrawError> {
    let total = total_weight(segments);
    if total == 0 {
        return Err(DrawError::NoEligibleJurors);
    }
    (0..slots)
        .map(|slot| {
            let mut rng = ChaCha20Rng::from_seed(slot_seed(seed, dispute_id, session, slot));
            let index = rng.gen_range(0..total);
            juror_at(segments, index).cloned().ok_or(DrawError::NoEligibleJurors)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn segments(weights: &[(u8, u128)]) -> Vec<ActivationSegment<u8>> {
        let mut start = 0;
        weights
            .iter()
            .map(|(juror, weight)| {
                let segment = ActivationSegment { juror: *juror, start, end: start + weight };
                start += weight;
                segment
            })
            .collect()
    }

    #[test_case(0, Some(1))]
    #[test_case(2, Some(1))]
    #[test_case(3, Some(3))]
    #[test_case(9, Some(3))]
    #[test_case(10, None)]
    fn juror_at_skips_empty_segments(index: u128, expected: Option<u8>) {
        let segments = segments(&[(1, 3), (2, 0), (3, 7)]);
        assert_eq!(juror_at(&segments, index).copied(), expected);
    }

    #[test]
    fn draw_slots_fails_without_weight() {
        assert_eq!(
            draw_slots::<u8>(&[], &[7; 32], 0, 0, 3),
            Err(DrawError::NoEligibleJurors)
        );
        assert_eq!(
            draw_slots(&segments(&[(1, 0)]), &[7; 32], 0, 0, 3),
            Err(DrawError::NoEligibleJurors)
        );
    }

    #[test]
    fn draw_slots_is_deterministic() {
        let segments = segments(&[(1, 5), (2, 5), (3, 5)]);
        let first = draw_slots(&segments, &[42; 32], 3, 1, 15).unwrap();
        let second = draw_slots(&segments, &[42; 32], 3, 1, 15).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 15);
    }

    #[test]
    fn draw_slots_never_picks_jurors_without_weight() {
        let segments = segments(&[(1, 0), (2, 4), (3, 0), (4, 1)]);
        for dispute_id in 0..20 {
            let jurors = draw_slots(&segments, &[dispute_id as u8; 32], dispute_id, 0, 31).unwrap();
            assert!(jurors.iter().all(|juror| *juror == 2 || *juror == 4));
        }
    }

    #[test]
    fn single_juror_fills_every_slot() {
        let segments = segments(&[(9, 1)]);
        assert_eq!(draw_slots(&segments, &[1; 32], 0, 2, 7).unwrap(), vec![9; 7]);
    }

    #[test]
    fn draws_follow_stake_share() {
        let segments = segments(&[(1, 90), (2, 10)]);
        let jurors = draw_slots(&segments, &[5; 32], 0, 0, 1000).unwrap();
        let heavy = jurors.iter().filter(|juror| **juror == 1).count();
        assert!(heavy > 800, "drawn {} times", heavy);
    }
}
