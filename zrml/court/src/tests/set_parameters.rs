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
use crate::CourtParameters;
use court_primitives::constants::mock::MaxAppeals;
use frame_support::dispatch::RawOrigin;
use test_case::test_case;

#[test]
fn set_parameters_applies_to_new_disputes_only() {
    ExtBuilder::default().build().execute_with(|| {
        let old_dispute = create_dispute(EVE, 3);
        let parameters = CourtParameters {
            fee_per_juror: 2 * fee_per_juror(),
            min_activated_token: 2 * MinActivatedToken::get(),
            ..Parameters::<Runtime>::get()
        };

        assert_ok!(Court::set_parameters(RawOrigin::Root.into(), parameters.clone()));

        assert_eq!(Parameters::<Runtime>::get(), parameters);
        System::assert_last_event(
            Event::<Runtime>::ParametersUpdated { parameters: parameters.clone() }.into(),
        );
        let new_dispute = create_dispute(EVE, 3);
        assert_eq!(Court::get_stake_per_draw(old_dispute), Ok(stake_per_draw()));
        assert_eq!(Court::get_stake_per_draw(new_dispute), Ok(2 * stake_per_draw()));
        assert_eq!(Court::arbitration_cost(&[]), Ok(6 * fee_per_juror()));
    });
}

#[test]
fn set_parameters_fails_on_bad_origin() {
    ExtBuilder::default().build().execute_with(|| {
        let parameters = Parameters::<Runtime>::get();
        assert_noop!(
            Court::set_parameters(Account::new(ALICE).signed(), parameters),
            DispatchError::BadOrigin
        );
    });
}

#[test_case(|p| p.fee_per_juror = 0; "zero fee")]
#[test_case(|p| p.min_activated_token = 0; "zero minimum activation")]
#[test_case(|p| p.default_slots = 0; "no slots")]
#[test_case(|p| p.default_slots = MaxDrawsPerSession::get() + 1; "too many slots")]
#[test_case(|p| { p.appeal_slot_multiplier = 1; p.appeal_extra_slots = 0; }; "appeals don't grow")]
#[test_case(|p| p.appeal_slot_multiplier = 0; "appeals shrink")]
#[test_case(|p| p.max_appeals = MaxAppeals::get() + 1; "too many appeals")]
fn set_parameters_fails_on_invalid_parameters(
    modify: fn(&mut CourtParameters<Balance, u64>),
) {
    ExtBuilder::default().build().execute_with(|| {
        let mut parameters = Parameters::<Runtime>::get();
        modify(&mut parameters);
        assert_noop!(
            Court::set_parameters(RawOrigin::Root.into(), parameters),
            Error::<Runtime>::InvalidParameters
        );
    });
}
