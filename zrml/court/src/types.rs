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

use crate::{BalanceOf, Config};
use core::marker::PhantomData;
use court_primitives::types::{Ruling, SessionIndex, TermIndex};
use frame_support::{
    traits::Get, BoundedVec, CloneNoBound, EqNoBound, PartialEqNoBound, RuntimeDebugNoBound,
};
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};
use sp_runtime::{
    traits::{AtLeast32BitUnsigned, Zero},
    Perbill, RuntimeDebug,
};

/// The phases of the court-wide clock. Each term runs through all of them in order.
#[derive(
    Clone, Copy, Decode, Default, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo,
)]
pub enum Period {
    /// Jurors activate stake for the draws of the current term.
    #[default]
    Activation,
    /// The activation snapshot is frozen and waits for the random seed.
    Draw,
    /// Drawn jurors vote on the sessions of the current term.
    Vote,
    /// Sessions of the current term may be appealed.
    Appeal,
    /// Stake of finished disputes is redistributed.
    Execution,
}

impl Period {
    pub fn next(self) -> Period {
        match self {
            Period::Activation => Period::Draw,
            Period::Draw => Period::Vote,
            Period::Vote => Period::Appeal,
            Period::Appeal => Period::Execution,
            Period::Execution => Period::Activation,
        }
    }
}

/// Minimum time which has to pass in each period before the clock may advance. A duration of zero
/// allows the clock to advance on any call.
#[derive(
    Clone,
    Copy,
    Decode,
    Default,
    Deserialize,
    Encode,
    Eq,
    MaxEncodedLen,
    PartialEq,
    RuntimeDebug,
    Serialize,
    TypeInfo,
)]
pub struct PeriodDurations<Moment> {
    pub activation: Moment,
    pub draw: Moment,
    pub vote: Moment,
    pub appeal: Moment,
    pub execution: Moment,
}

impl<Moment: Copy> PeriodDurations<Moment> {
    pub fn of(&self, period: Period) -> Moment {
        match period {
            Period::Activation => self.activation,
            Period::Draw => self.draw,
            Period::Vote => self.vote,
            Period::Appeal => self.appeal,
            Period::Execution => self.execution,
        }
    }

    pub fn map<F, N>(self, f: F) -> PeriodDurations<N>
    where
        F: Fn(Moment) -> N,
    {
        PeriodDurations {
            activation: f(self.activation),
            draw: f(self.draw),
            vote: f(self.vote),
            appeal: f(self.appeal),
            execution: f(self.execution),
        }
    }
}

/// Parameters of the court which governance may change at runtime.
#[derive(
    Clone, Decode, Default, Deserialize, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug,
    Serialize, TypeInfo,
)]
pub struct CourtParameters<Balance, Moment> {
    pub durations: PeriodDurations<Moment>,
    /// Fee paid for each slot of a dispute and paid out to the juror who votes with that slot.
    pub fee_per_juror: Balance,
    /// The smallest amount of stake which can be activated. Also the unit of draw weight.
    pub min_activated_token: Balance,
    /// Share of `min_activated_token` which each drawn slot locks and may lose.
    pub alpha: Perbill,
    /// Number of slots of the first session if the arbitrable application doesn't ask for more.
    pub default_slots: u32,
    /// Factor applied to the slot count of the appealed session.
    pub appeal_slot_multiplier: u32,
    /// Slots added after applying `appeal_slot_multiplier`.
    pub appeal_extra_slots: u32,
    /// Number of appeals a dispute may receive.
    pub max_appeals: u32,
}

impl<Balance, Moment> CourtParameters<Balance, Moment>
where
    Balance: AtLeast32BitUnsigned + Copy,
{
    /// The stake each drawn slot locks.
    pub fn stake_per_draw(&self) -> Balance {
        self.alpha.mul_floor(self.min_activated_token)
    }

    /// Slot count of the session which follows a session with `slots` slots.
    pub fn next_slots(&self, slots: u32) -> Option<u32> {
        slots.checked_mul(self.appeal_slot_multiplier)?.checked_add(self.appeal_extra_slots)
    }

    /// Checks that appeals strictly increase slot count and cost and that every bound fits into
    /// storage.
    pub fn is_valid(&self, max_appeals: u32, max_slots: u32) -> bool {
        let grows = self.appeal_slot_multiplier >= 2
            || (self.appeal_slot_multiplier == 1 && self.appeal_extra_slots >= 1);
        !self.fee_per_juror.is_zero()
            && !self.min_activated_token.is_zero()
            && self.default_slots >= 1
            && self.default_slots <= max_slots
            && grows
            && self.max_appeals <= max_appeals
    }

    /// Converts the balance and moment types, for example to build storage values from a genesis
    /// configuration.
    pub fn map<B, M, FB, FM>(self, balance: FB, moment: FM) -> CourtParameters<B, M>
    where
        FB: Fn(Balance) -> B,
        FM: Fn(Moment) -> M,
        Moment: Copy,
    {
        CourtParameters {
            durations: self.durations.map(moment),
            fee_per_juror: balance(self.fee_per_juror),
            min_activated_token: balance(self.min_activated_token),
            alpha: self.alpha,
            default_slots: self.default_slots,
            appeal_slot_multiplier: self.appeal_slot_multiplier,
            appeal_extra_slots: self.appeal_extra_slots,
            max_appeals: self.max_appeals,
        }
    }
}

/// A slot of a session and the juror it was drawn for.
#[derive(Clone, Decode, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo)]
pub struct DrawInfo<AccountId, Balance> {
    pub juror: AccountId,
    /// `None` until the juror votes with this slot.
    pub vote: Option<Ruling>,
    /// Stake locked for this slot. Lower than the dispute's stake per draw if the juror's
    /// activation ran out.
    pub locked: Balance,
}

#[derive(Clone, Copy, Decode, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo)]
pub struct SessionInfo {
    /// The term in which this session is drawn and voted on.
    pub term: TermIndex,
    pub slots: u32,
    pub drawn: bool,
    pub appealed: bool,
}

#[derive(Clone, Copy, Decode, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo)]
pub enum DisputeStatus {
    /// Still being voted on, or waiting for repartition.
    Open,
    /// Stake was redistributed and the ruling waits for delivery.
    Executable,
    /// The ruling was delivered to the arbitrable application.
    Executed,
}

/// Summary of a token repartition.
#[derive(Clone, Copy, Decode, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo)]
pub struct RepartitionOutcome<Balance> {
    pub ruling: Ruling,
    /// Stake forfeited by incoherent slots.
    pub penalty_pool: Balance,
    pub coherent_slots: u32,
    /// `penalty_pool / coherent_slots`, rounded down.
    pub reward_per_slot: Balance,
    /// The part of `penalty_pool` which couldn't be split evenly. It's credited to the treasury
    /// and never redistributed to jurors.
    pub dust: Balance,
}

/// Bound on the number of sessions of a dispute: the original trial plus `MaxAppeals` appeals.
pub struct MaxSessions<T>(PhantomData<T>);

impl<T: Config> Get<u32> for MaxSessions<T> {
    fn get() -> u32 {
        T::MaxAppeals::get().saturating_add(1)
    }
}

#[derive(
    CloneNoBound,
    Decode,
    Encode,
    EqNoBound,
    MaxEncodedLen,
    PartialEqNoBound,
    RuntimeDebugNoBound,
    TypeInfo,
)]
#[codec(mel_bound(T: Config))]
#[scale_info(skip_type_params(T))]
pub struct DisputeInfo<T: Config> {
    /// The account of the arbitrable application which receives the ruling.
    pub arbitrated: T::AccountId,
    /// Number of valid non-zero rulings.
    pub choices: u32,
    pub extra_data: BoundedVec<u8, T::MaxExtraDataLen>,
    /// Never empty. The last entry is the session which currently runs or ran last.
    pub sessions: BoundedVec<SessionInfo, MaxSessions<T>>,
    pub stake_per_draw: BalanceOf<T>,
    pub fee_per_juror: BalanceOf<T>,
    pub status: DisputeStatus,
    pub repartition: Option<RepartitionOutcome<BalanceOf<T>>>,
}

impl<T: Config> DisputeInfo<T> {
    pub fn latest_session_index(&self) -> SessionIndex {
        self.sessions.len().saturating_sub(1) as SessionIndex
    }

    pub fn latest_session(&self) -> Option<&SessionInfo> {
        self.sessions.last()
    }

    /// The session which runs in `term`, if any.
    pub fn session_in_term(&self, term: TermIndex) -> Option<(SessionIndex, &SessionInfo)> {
        self.sessions
            .iter()
            .enumerate()
            .rev()
            .find(|(_, session)| session.term == term)
            .map(|(index, session)| (index as SessionIndex, session))
    }

    pub fn appeals(&self) -> u32 {
        self.latest_session_index()
    }
}
