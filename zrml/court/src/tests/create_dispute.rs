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
use crate::SessionInfo;
use court_primitives::{constants::DEFAULT_SLOTS, traits::ArbitratorApi};
use test_case::test_case;

#[test]
fn create_dispute_charges_fees_and_schedules_the_first_session() {
    ExtBuilder::default().build().execute_with(|| {
        let eve = Account::new(EVE);
        let cost = fee_per_juror() * DEFAULT_SLOTS as Balance;
        let court_balance = Balances::free_balance(Court::court_account());

        assert_ok!(Court::create_dispute(eve.signed(), 3, Default::default(), cost));

        assert_eq!(eve.free_balance(), INITIAL_BALANCE - cost);
        assert_eq!(Balances::free_balance(Court::court_account()), court_balance + cost);
        let dispute = Disputes::<Runtime>::get(0).unwrap();
        assert_eq!(dispute.arbitrated, EVE);
        assert_eq!(dispute.choices, 3);
        assert_eq!(
            dispute.sessions.into_inner(),
            vec![SessionInfo { term: 0, slots: DEFAULT_SLOTS, drawn: false, appealed: false }]
        );
        assert_eq!(dispute.stake_per_draw, stake_per_draw());
        assert_eq!(dispute.fee_per_juror, fee_per_juror());
        assert_eq!(dispute.status, DisputeStatus::Open);
        assert_eq!(TermDisputes::<Runtime>::get(0).into_inner(), vec![0]);
        assert_eq!(NextDisputeId::<Runtime>::get(), 1);
        System::assert_last_event(
            Event::<Runtime>::DisputeCreated {
                dispute_id: 0,
                arbitrated: EVE,
                choices: 3,
                slots: DEFAULT_SLOTS,
                term: 0,
                cost,
            }
            .into(),
        );
    });
}

#[test_case(vec![], DEFAULT_SLOTS; "empty")]
#[test_case(vec![5, 0, 0], DEFAULT_SLOTS; "too short")]
#[test_case(vec![0, 0, 0, 0], DEFAULT_SLOTS; "zero")]
#[test_case(vec![5, 0, 0, 0], 5; "five")]
#[test_case(vec![9, 0, 0, 0, 0xff, 0xff], 9; "trailing bytes are ignored")]
fn create_dispute_reads_slot_count_from_extra_data(bytes: Vec<u8>, expected: u32) {
    ExtBuilder::default().build().execute_with(|| {
        let extra_data: BoundedVec<u8, MaxExtraDataLen> = bytes.clone().try_into().unwrap();
        assert_eq!(
            Court::arbitration_cost(&bytes),
            Ok(fee_per_juror() * expected as Balance)
        );
        assert_ok!(Court::create_dispute(Account::new(EVE).signed(), 2, extra_data, Balance::MAX));
        let dispute = Disputes::<Runtime>::get(0).unwrap();
        assert_eq!(dispute.sessions[0].slots, expected);
        assert_eq!(dispute.extra_data.into_inner(), bytes);
        assert_eq!(
            Account::new(EVE).free_balance(),
            INITIAL_BALANCE - fee_per_juror() * expected as Balance
        );
    });
}

#[test]
fn create_dispute_after_activation_is_drawn_next_term() {
    ExtBuilder::default().build().execute_with(|| {
        utility::run_to_period(Period::Draw);
        let dispute_id = create_dispute(EVE, 3);
        assert_eq!(Disputes::<Runtime>::get(dispute_id).unwrap().sessions[0].term, 1);
        assert_eq!(TermDisputes::<Runtime>::get(1).into_inner(), vec![dispute_id]);
        assert!(TermDisputes::<Runtime>::get(0).is_empty());
    });
}

#[test]
fn create_dispute_fails_on_too_many_slots() {
    ExtBuilder::default().build().execute_with(|| {
        let slots = MaxDrawsPerSession::get() + 1;
        assert_noop!(
            Court::create_dispute(Account::new(EVE).signed(), 2, extra_data(slots), Balance::MAX),
            Error::<Runtime>::TooManySlots
        );
        assert_eq!(
            Court::arbitration_cost(&extra_data(slots)),
            Err(Error::<Runtime>::TooManySlots.into())
        );
    });
}

#[test_case(0)]
#[test_case(1)]
fn create_dispute_fails_on_invalid_choice_count(choices: u32) {
    ExtBuilder::default().build().execute_with(|| {
        assert_noop!(
            Court::create_dispute(Account::new(EVE).signed(), choices, extra_data(3), Balance::MAX),
            Error::<Runtime>::InvalidChoiceCount
        );
    });
}

#[test]
fn create_dispute_fails_if_cost_exceeds_max_fee() {
    ExtBuilder::default().build().execute_with(|| {
        let cost = Court::arbitration_cost(&extra_data(3)).unwrap();
        assert_noop!(
            Court::create_dispute(Account::new(EVE).signed(), 2, extra_data(3), cost - 1),
            Error::<Runtime>::PaymentMismatch
        );
    });
}

#[test]
fn create_dispute_charges_only_the_cost() {
    ExtBuilder::default().build().execute_with(|| {
        let cost = Court::arbitration_cost(&extra_data(4)).unwrap();
        assert_ok!(Court::create_dispute(Account::new(EVE).signed(), 2, extra_data(4), 10 * cost));
        assert_eq!(Account::new(EVE).free_balance(), INITIAL_BALANCE - cost);
    });
}

#[test]
fn create_dispute_fails_if_term_is_full() {
    ExtBuilder::default().build().execute_with(|| {
        let limit = <Runtime as crate::Config>::MaxDisputesPerTerm::get();
        for _ in 0..limit {
            create_dispute(EVE, 1);
        }
        assert_noop!(
            Court::create_dispute(Account::new(EVE).signed(), 2, extra_data(1), Balance::MAX),
            Error::<Runtime>::TooManyDisputes
        );
    });
}

#[test]
fn arbitrator_api_creates_disputes() {
    ExtBuilder::default().build().execute_with(|| {
        let cost = <Court as ArbitratorApi>::arbitration_cost(&[7, 0, 0, 0]).unwrap();
        assert_eq!(cost, 7 * fee_per_juror());

        let dispute_id =
            <Court as ArbitratorApi>::create_dispute(&DAVE, 4, &[7, 0, 0, 0], cost).unwrap();

        let dispute = Disputes::<Runtime>::get(dispute_id).unwrap();
        assert_eq!((dispute.arbitrated, dispute.choices), (DAVE, 4));
        assert_eq!(dispute.sessions[0].slots, 7);
        assert_eq!(<Court as ArbitratorApi>::current_ruling(dispute_id), Ok(0));
    });
}

#[test]
fn arbitrator_api_rejects_oversized_extra_data() {
    ExtBuilder::default().build().execute_with(|| {
        let extra_data = vec![1; MaxExtraDataLen::get() as usize + 1];
        assert_noop!(
            <Court as ArbitratorApi>::create_dispute(&DAVE, 2, &extra_data, Balance::MAX),
            Error::<Runtime>::ExtraDataTooLong
        );
    });
}
