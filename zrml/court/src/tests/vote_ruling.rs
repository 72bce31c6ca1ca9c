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

#[test]
fn vote_ruling_records_votes_and_pays_fees() {
    ExtBuilder::default().build().execute_with(|| {
        let dispute_id = setup_drawn_dispute(3);
        let juror = draws(dispute_id, 0)[0].juror;
        let slots: Vec<u32> = draws(dispute_id, 0)
            .iter()
            .enumerate()
            .filter(|(_, draw)| draw.juror == juror)
            .map(|(slot, _)| slot as u32)
            .collect();
        let free_balance = Account::new(juror).free_balance();

        assert_ok!(Court::vote_ruling(
            RuntimeOrigin::signed(juror),
            dispute_id,
            1,
            slot_indices(&slots)
        ));

        let reward = fee_per_juror() * slots.len() as Balance;
        assert_eq!(Account::new(juror).free_balance(), free_balance + reward);
        for (slot, draw) in draws(dispute_id, 0).iter().enumerate() {
            let expected = if slots.contains(&(slot as u32)) { Some(1) } else { None };
            assert_eq!(draw.vote, expected);
        }
        System::assert_last_event(
            Event::<Runtime>::VoteCast {
                dispute_id,
                session: 0,
                juror,
                ruling: 1,
                slots: slots.len() as u32,
                reward,
            }
            .into(),
        );
    });
}

#[test]
fn vote_ruling_accepts_refusal_to_arbitrate() {
    ExtBuilder::default().build().execute_with(|| {
        let dispute_id = setup_drawn_dispute(1);
        let juror = draws(dispute_id, 0)[0].juror;
        assert_ok!(Court::vote_ruling(
            RuntimeOrigin::signed(juror),
            dispute_id,
            0,
            slot_indices(&[0])
        ));
        assert_eq!(draws(dispute_id, 0)[0].vote, Some(0));
    });
}

#[test]
fn vote_ruling_fails_outside_vote_period() {
    ExtBuilder::default().build().execute_with(|| {
        deposit_and_activate(ALICE, STAKE, ACTIVATION);
        let dispute_id = create_dispute(EVE, 1);
        assert_noop!(
            Court::vote_ruling(Account::new(ALICE).signed(), dispute_id, 1, slot_indices(&[0])),
            Error::<Runtime>::InvalidPeriod
        );
        utility::run_to_period(Period::Appeal);
        assert_noop!(
            Court::vote_ruling(Account::new(ALICE).signed(), dispute_id, 1, slot_indices(&[0])),
            Error::<Runtime>::InvalidPeriod
        );
    });
}

#[test]
fn vote_ruling_fails_for_dispute_of_another_term() {
    ExtBuilder::default().build().execute_with(|| {
        deposit_and_activate(ALICE, STAKE, ACTIVATION);
        utility::run_to_period(Period::Draw);
        let dispute_id = create_dispute(EVE, 1);
        utility::run_to_period(Period::Vote);
        assert_noop!(
            Court::vote_ruling(Account::new(ALICE).signed(), dispute_id, 1, slot_indices(&[0])),
            Error::<Runtime>::InvalidPeriod
        );
    });
}

#[test]
fn vote_ruling_fails_on_foreign_slot() {
    ExtBuilder::default().build().execute_with(|| {
        let dispute_id = setup_drawn_dispute(3);
        assert_noop!(
            Court::vote_ruling(Account::new(DAVE).signed(), dispute_id, 1, slot_indices(&[0])),
            Error::<Runtime>::NotOwner
        );
    });
}

#[test]
fn vote_ruling_fails_on_second_vote() {
    ExtBuilder::default().build().execute_with(|| {
        let dispute_id = setup_drawn_dispute(3);
        let juror = Account::new(draws(dispute_id, 0)[0].juror);
        assert_ok!(Court::vote_ruling(juror.signed(), dispute_id, 1, slot_indices(&[0])));
        assert_noop!(
            Court::vote_ruling(juror.signed(), dispute_id, 2, slot_indices(&[0])),
            Error::<Runtime>::AlreadyVoted
        );
    });
}

#[test]
fn vote_ruling_fails_on_duplicate_slot() {
    ExtBuilder::default().build().execute_with(|| {
        let dispute_id = setup_drawn_dispute(3);
        let juror = Account::new(draws(dispute_id, 0)[0].juror);
        assert_noop!(
            Court::vote_ruling(juror.signed(), dispute_id, 1, slot_indices(&[0, 0])),
            Error::<Runtime>::AlreadyVoted
        );
    });
}

#[test]
fn vote_ruling_fails_on_slot_out_of_range() {
    ExtBuilder::default().build().execute_with(|| {
        let dispute_id = setup_drawn_dispute(3);
        let juror = Account::new(draws(dispute_id, 0)[0].juror);
        assert_noop!(
            Court::vote_ruling(juror.signed(), dispute_id, 1, slot_indices(&[3])),
            Error::<Runtime>::SlotOutOfRange
        );
    });
}

#[test]
fn vote_ruling_fails_on_invalid_ruling() {
    ExtBuilder::default().build().execute_with(|| {
        let dispute_id = setup_drawn_dispute(3);
        let juror = Account::new(draws(dispute_id, 0)[0].juror);
        assert_noop!(
            Court::vote_ruling(juror.signed(), dispute_id, 3, slot_indices(&[0])),
            Error::<Runtime>::InvalidRuling
        );
    });
}

#[test]
fn vote_ruling_fails_without_slots() {
    ExtBuilder::default().build().execute_with(|| {
        let dispute_id = setup_drawn_dispute(3);
        let juror = Account::new(draws(dispute_id, 0)[0].juror);
        assert_noop!(
            Court::vote_ruling(juror.signed(), dispute_id, 1, slot_indices(&[])),
            Error::<Runtime>::NoSlots
        );
    });
}

#[test]
fn vote_ruling_fails_on_unknown_dispute() {
    ExtBuilder::default().build().execute_with(|| {
        assert_noop!(
            Court::vote_ruling(Account::new(ALICE).signed(), 7, 1, slot_indices(&[0])),
            Error::<Runtime>::DisputeNotFound
        );
    });
}
