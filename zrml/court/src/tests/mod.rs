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

#![cfg(all(feature = "mock", test))]

mod create_dispute;
mod deposit;
mod set_parameters;
mod vote_ruling;

use crate::{
    mock::{
        ext_builder::{mock_parameters, ExtBuilder, ALICE, BOB, CHARLIE, DAVE, EVE, INITIAL_BALANCE},
        runtime::{Balances, Court, Runtime, RuntimeOrigin, System},
        types::{ArbitrableBehavior, MockArbitrable, MockDepositObserver, MockRandomness},
        utility,
    },
    ActivationSegments, Activations, CurrentPeriod, CurrentTerm, DisputeStatus, Disputes, DrawInfo,
    Draws, Error, Event, ExecutionLock, Jurors, NextDisputeId, Parameters, Period, TermDisputes,
};
use court_primitives::{
    constants::{
        mock::{FeePerJuror, MaxDrawsPerSession, MaxExtraDataLen, MinActivatedToken, StakeAlpha},
        BASE,
    },
    types::{AccountIdTest, Balance, DisputeId, Ruling, SessionIndex},
};
use frame_support::{
    assert_noop, assert_ok,
    traits::{Currency, Get},
    BoundedVec,
};
use sp_runtime::DispatchError;

/// Stake deposited by jurors in most tests.
const STAKE: Balance = 100 * BASE;
/// Enough to cover every slot a juror may be drawn for in a single term of the tests.
const ACTIVATION: Balance = 20 * BASE;

/// Utility struct for managing test accounts.
pub(crate) struct Account {
    id: AccountIdTest,
}

impl Account {
    pub(crate) fn new(id: AccountIdTest) -> Account {
        Account { id }
    }

    pub(crate) fn signed(&self) -> RuntimeOrigin {
        RuntimeOrigin::signed(self.id)
    }

    pub(crate) fn free_balance(&self) -> Balance {
        Balances::free_balance(&self.id)
    }

    /// Ledger entry of the account as `(balance, at_stake)`.
    pub(crate) fn stake(&self) -> (Balance, Balance) {
        Court::jurors(&self.id)
    }
}

fn stake_per_draw() -> Balance {
    StakeAlpha::get().mul_floor(MinActivatedToken::get())
}

fn fee_per_juror() -> Balance {
    FeePerJuror::get()
}

fn extra_data(slots: u32) -> BoundedVec<u8, MaxExtraDataLen> {
    slots.to_le_bytes().to_vec().try_into().unwrap()
}

fn slot_indices(slots: &[u32]) -> BoundedVec<u32, MaxDrawsPerSession> {
    slots.to_vec().try_into().unwrap()
}

fn deposit_and_activate(who: AccountIdTest, deposit: Balance, activation: Balance) {
    let account = Account::new(who);
    if deposit > 0 {
        assert_ok!(Court::deposit(account.signed(), deposit));
    }
    assert_ok!(Court::activate_tokens(account.signed(), activation));
}

fn create_dispute(arbitrated: AccountIdTest, slots: u32) -> DisputeId {
    let dispute_id = NextDisputeId::<Runtime>::get();
    assert_ok!(Court::create_dispute(
        RuntimeOrigin::signed(arbitrated),
        2,
        extra_data(slots),
        Balance::MAX,
    ));
    dispute_id
}

fn draws(dispute_id: DisputeId, session: SessionIndex) -> Vec<DrawInfo<AccountIdTest, Balance>> {
    Draws::<Runtime>::get(dispute_id, session).into_inner()
}

/// Casts the vote at position `i` of `rulings` with slot `i`. `None` abstains.
fn vote_slots(dispute_id: DisputeId, session: SessionIndex, rulings: &[Option<Ruling>]) {
    let draws = draws(dispute_id, session);
    assert_eq!(draws.len(), rulings.len());
    for (slot, ruling) in rulings.iter().enumerate() {
        if let Some(ruling) = ruling {
            assert_ok!(Court::vote_ruling(
                RuntimeOrigin::signed(draws[slot].juror),
                dispute_id,
                *ruling,
                slot_indices(&[slot as u32]),
            ));
        }
    }
}

/// Lets ALICE, BOB and CHARLIE activate stake, creates a dispute for EVE in the current term and
/// moves the clock to the vote period.
fn setup_drawn_dispute(slots: u32) -> DisputeId {
    for juror in [ALICE, BOB, CHARLIE] {
        deposit_and_activate(juror, STAKE, ACTIVATION);
    }
    let dispute_id = create_dispute(EVE, slots);
    utility::run_to_period(Period::Vote);
    dispute_id
}

/// Sum of the balances of all ledger entries.
fn ledger_total() -> Balance {
    Jurors::<Runtime>::iter().map(|(_, juror)| juror.balance).sum()
}
