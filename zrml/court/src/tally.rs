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

use alloc::{collections::BTreeMap, vec::Vec};
use court_primitives::types::Ruling;

/// Vote counts of a dispute, one vote per slot.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Tally {
    total: BTreeMap<Ruling, u32>,
    latest: BTreeMap<Ruling, u32>,
}

impl Tally {
    pub(crate) fn add(&mut self, ruling: Ruling, in_latest_session: bool) {
        let count = self.total.entry(ruling).or_default();
        *count = count.saturating_add(1);
        if in_latest_session {
            let count = self.latest.entry(ruling).or_default();
            *count = count.saturating_add(1);
        }
    }

    /// The ruling with the strictly highest count over all sessions.
    ///
    /// A tie is broken in favor of the tied ruling with the strictly highest count in the latest
    /// session. If that doesn't settle it, or if nobody voted, the result is `0`.
    pub(crate) fn winner(&self) -> Ruling {
        let Some(top) = self.total.values().max().copied() else {
            return 0;
        };
        let tied: Vec<Ruling> = self
            .total
            .iter()
            .filter(|(_, count)| **count == top)
            .map(|(ruling, _)| *ruling)
            .collect();
        if let [ruling] = tied[..] {
            return ruling;
        }
        let latest_count = |ruling: &Ruling| self.latest.get(ruling).copied().unwrap_or(0);
        let best = tied.iter().map(latest_count).max().unwrap_or(0);
        let mut leaders = tied.iter().filter(|ruling| latest_count(ruling) == best);
        match (leaders.next(), leaders.next()) {
            (Some(ruling), None) if best > 0 => *ruling,
            _ => 0,
        }
    }
}
