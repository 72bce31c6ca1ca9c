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

use super::*;
use court_primitives::traits::TokenApprovalReceiver;

#[test]
fn deposit_moves_funds_into_the_ledger() {
    ExtBuilder::default().build().execute_with(|| {
        let alice = Account::new(ALICE);
        let court_balance = Balances::free_balance(Court::court_account());

        assert_ok!(Court::deposit(alice.signed(), STAKE));

        assert_eq!(alice.free_balance(), INITIAL_BALANCE - STAKE);
        assert_eq!(Balances::free_balance(Court::court_account()), court_balance + STAKE);
        assert_eq!(alice.stake(), (STAKE, 0));
        System::assert_last_event(
            Event::<Runtime>::StakeDeposited { who: ALICE, amount: STAKE }.into(),
        );
    });
}

#[test]
fn deposit_notifies_observer() {
    ExtBuilder::default().build().execute_with(|| {
        assert_ok!(Court::deposit(Account::new(BOB).signed(), STAKE));

        let calls = MockDepositObserver::calls();
        assert_eq!(calls.len(), 1);
        assert_eq!((calls[0].who, calls[0].amount), (BOB, STAKE));
        assert!(calls[0].data.is_empty());
    });
}

#[test]
fn deposit_stands_if_observer_fails() {
    ExtBuilder::default().build().execute_with(|| {
        MockDepositObserver::set_return_value(Err(DispatchError::Other("observer")));

        assert_ok!(Court::deposit(Account::new(ALICE).signed(), STAKE));

        assert_eq!(Court::jurors(&ALICE), (STAKE, 0));
        assert_eq!(MockDepositObserver::calls().len(), 1);
    });
}

#[test]
fn deposits_accumulate() {
    ExtBuilder::default().build().execute_with(|| {
        let alice = Account::new(ALICE);
        assert_ok!(Court::deposit(alice.signed(), STAKE));
        assert_ok!(Court::deposit(alice.signed(), 2 * STAKE));
        assert_eq!(alice.stake(), (3 * STAKE, 0));
    });
}

#[test]
fn deposit_fails_on_zero_amount() {
    ExtBuilder::default().build().execute_with(|| {
        assert_noop!(Court::deposit(Account::new(ALICE).signed(), 0), Error::<Runtime>::ZeroAmount);
    });
}

#[test]
fn deposit_fails_if_funds_are_missing() {
    ExtBuilder::default().build().execute_with(|| {
        let alice = Account::new(ALICE);
        assert!(Court::deposit(alice.signed(), INITIAL_BALANCE + 1).is_err());
        assert_eq!(alice.stake(), (0, 0));
        assert!(MockDepositObserver::calls().is_empty());
    });
}

#[test]
fn token_approval_deposits_stake_and_forwards_data() {
    ExtBuilder::default().build().execute_with(|| {
        assert_ok!(<Court as TokenApprovalReceiver>::on_token_approval(&CHARLIE, STAKE, b"data"));

        assert_eq!(Court::jurors(&CHARLIE), (STAKE, 0));
        assert_eq!(Account::new(CHARLIE).free_balance(), INITIAL_BALANCE - STAKE);
        let calls = MockDepositObserver::calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].data, b"data".to_vec());
    });
}
