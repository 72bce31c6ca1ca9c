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

#![cfg(feature = "runtime-benchmarks")]

use crate::{
    BalanceOf, Call, Config, CourtParameters, CurrentPeriod, DisputeStatus, Disputes, Draws, Event,
    ExtraDataOf, NextDisputeId, Pallet, Parameters, Period, PeriodDurations, SlotIndicesOf,
};
use alloc::vec::Vec;
use court_primitives::types::DisputeId;
use frame_benchmarking::v2::*;
use frame_support::{
    assert_ok,
    dispatch::RawOrigin,
    traits::{Bounded, Currency, EnsureOrigin, Get},
};
use frame_system::Pallet as System;
use sp_runtime::{Perbill, SaturatedConversion};

fn unit<T: Config>() -> BalanceOf<T> {
    10_000_000_000u128.saturated_into()
}

// Zero durations let the clock advance on every call.
fn setup_court<T: Config>() {
    let unit = unit::<T>();
    Parameters::<T>::put(CourtParameters {
        durations: PeriodDurations::default(),
        fee_per_juror: unit / 100u32.into(),
        min_activated_token: unit,
        alpha: Perbill::from_percent(60),
        default_slots: 3,
        appeal_slot_multiplier: 2,
        appeal_extra_slots: 1,
        max_appeals: T::MaxAppeals::get(),
    });
    let minimum = T::Currency::minimum_balance();
    T::Currency::make_free_balance_be(&Pallet::<T>::court_account(), minimum);
    T::Currency::make_free_balance_be(&Pallet::<T>::treasury_account(), minimum);
}

fn funded_account<T: Config>(name: &'static str, index: u32) -> T::AccountId {
    let who: T::AccountId = account(name, index, 0);
    T::Currency::make_free_balance_be(&who, unit::<T>() * 1_000_000u32.into());
    who
}

// Deposits and activates enough stake to cover `slots` full slots.
fn activated_juror<T: Config>(index: u32, slots: u32) -> T::AccountId {
    let juror = funded_account::<T>("juror", index);
    let amount = unit::<T>() * slots.max(1).into();
    assert_ok!(Pallet::<T>::deposit(RawOrigin::Signed(juror.clone()).into(), amount));
    assert_ok!(Pallet::<T>::activate_tokens(RawOrigin::Signed(juror.clone()).into(), amount));
    juror
}

fn create_dispute_with_slots<T: Config>(creator: &T::AccountId, slots: u32) -> DisputeId {
    let dispute_id = NextDisputeId::<T>::get();
    let extra_data: ExtraDataOf<T> = slots.to_le_bytes().to_vec().try_into().unwrap();
    assert_ok!(Pallet::<T>::create_dispute(
        RawOrigin::Signed(creator.clone()).into(),
        2,
        extra_data,
        BalanceOf::<T>::max_value(),
    ));
    dispute_id
}

fn advance_period<T: Config>(caller: &T::AccountId) {
    assert_ok!(Pallet::<T>::pass_period(RawOrigin::Signed(caller.clone()).into()));
}

fn run_to_period<T: Config>(caller: &T::AccountId, period: Period) {
    while CurrentPeriod::<T>::get() != period {
        advance_period::<T>(caller);
    }
}

/// Returns a juror and a dispute with `slots` slots which were all drawn for that juror. The clock
/// is in the vote period afterwards.
fn drawn_dispute<T: Config>(slots: u32) -> (T::AccountId, DisputeId) {
    setup_court::<T>();
    let juror = activated_juror::<T>(0, slots);
    let creator = funded_account::<T>("creator", 0);
    let dispute_id = create_dispute_with_slots::<T>(&creator, slots);
    run_to_period::<T>(&juror, Period::Vote);
    (juror, dispute_id)
}

fn vote_all<T: Config>(juror: &T::AccountId, dispute_id: DisputeId, slots: u32) {
    let slot_indices: SlotIndicesOf<T> = (0..slots).collect::<Vec<_>>().try_into().unwrap();
    assert_ok!(Pallet::<T>::vote_ruling(
        RawOrigin::Signed(juror.clone()).into(),
        dispute_id,
        1,
        slot_indices
    ));
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn deposit() {
        setup_court::<T>();
        let caller = funded_account::<T>("caller", 0);
        let amount = unit::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), amount);

        assert_eq!(Pallet::<T>::jurors(&caller).0, amount);
    }

    #[benchmark]
    fn withdraw() {
        setup_court::<T>();
        let caller = funded_account::<T>("caller", 0);
        let amount = unit::<T>();
        assert_ok!(Pallet::<T>::deposit(RawOrigin::Signed(caller.clone()).into(), amount));

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), amount);

        let expected_event =
            <T as Config>::RuntimeEvent::from(Event::<T>::StakeWithdrawn { who: caller, amount });
        System::<T>::assert_last_event(expected_event.into());
    }

    #[benchmark]
    fn activate_tokens() {
        setup_court::<T>();
        for index in 1..T::MaxActivations::get() {
            activated_juror::<T>(index, 1);
        }
        let caller = funded_account::<T>("caller", 0);
        let amount = unit::<T>();
        assert_ok!(Pallet::<T>::deposit(RawOrigin::Signed(caller.clone()).into(), amount));

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), amount);

        assert_eq!(Pallet::<T>::jurors(&caller), (amount, amount));
    }

    #[benchmark]
    fn pass_period(
        d: Linear<1, { T::MaxDisputesPerTerm::get() }>,
        s: Linear<1, { T::MaxDrawsPerSession::get() }>,
    ) {
        setup_court::<T>();
        let caller = activated_juror::<T>(0, d.saturating_mul(s));
        let creator = funded_account::<T>("creator", 0);
        let dispute_ids: Vec<DisputeId> =
            (0..d).map(|_| create_dispute_with_slots::<T>(&creator, s)).collect();
        advance_period::<T>(&caller);
        assert_eq!(CurrentPeriod::<T>::get(), Period::Draw);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller));

        assert_eq!(CurrentPeriod::<T>::get(), Period::Vote);
        for dispute_id in dispute_ids {
            assert_eq!(Draws::<T>::get(dispute_id, 0).len(), s as usize);
        }
    }

    #[benchmark]
    fn create_dispute() {
        setup_court::<T>();
        let caller = funded_account::<T>("caller", 0);
        let slots = T::MaxDrawsPerSession::get();
        let extra_data: ExtraDataOf<T> = slots.to_le_bytes().to_vec().try_into().unwrap();

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), 2, extra_data, BalanceOf::<T>::max_value());

        assert!(Disputes::<T>::contains_key(0));
    }

    #[benchmark]
    fn vote_ruling(s: Linear<1, { T::MaxDrawsPerSession::get() }>) {
        let (juror, dispute_id) = drawn_dispute::<T>(s);
        let slot_indices: SlotIndicesOf<T> = (0..s).collect::<Vec<_>>().try_into().unwrap();

        #[extrinsic_call]
        _(RawOrigin::Signed(juror), dispute_id, 1, slot_indices);

        assert!(Draws::<T>::get(dispute_id, 0).iter().all(|draw| draw.vote == Some(1)));
    }

    #[benchmark]
    fn appeal() {
        let (juror, dispute_id) = drawn_dispute::<T>(3);
        run_to_period::<T>(&juror, Period::Appeal);
        let appellant = funded_account::<T>("appellant", 0);

        #[extrinsic_call]
        _(
            RawOrigin::Signed(appellant),
            dispute_id,
            Default::default(),
            BalanceOf::<T>::max_value(),
        );

        assert_eq!(Disputes::<T>::get(dispute_id).unwrap().sessions.len(), 2);
    }

    #[benchmark]
    fn one_shot_token_repartition(s: Linear<1, { T::MaxDrawsPerSession::get() }>) {
        let (juror, dispute_id) = drawn_dispute::<T>(s);
        // Half of the slots abstain and forfeit their stake.
        let voting = s.div_ceil(2);
        let slot_indices: SlotIndicesOf<T> = (0..voting).collect::<Vec<_>>().try_into().unwrap();
        assert_ok!(Pallet::<T>::vote_ruling(
            RawOrigin::Signed(juror.clone()).into(),
            dispute_id,
            1,
            slot_indices
        ));
        run_to_period::<T>(&juror, Period::Execution);

        #[extrinsic_call]
        _(RawOrigin::Signed(juror), dispute_id);

        assert_eq!(Disputes::<T>::get(dispute_id).unwrap().status, DisputeStatus::Executable);
    }

    #[benchmark]
    fn execute_ruling() {
        let (juror, dispute_id) = drawn_dispute::<T>(3);
        vote_all::<T>(&juror, dispute_id, 3);
        run_to_period::<T>(&juror, Period::Execution);
        assert_ok!(Pallet::<T>::one_shot_token_repartition(
            RawOrigin::Signed(juror.clone()).into(),
            dispute_id
        ));

        #[extrinsic_call]
        _(RawOrigin::Signed(juror), dispute_id);

        assert_eq!(Disputes::<T>::get(dispute_id).unwrap().status, DisputeStatus::Executed);
    }

    #[benchmark]
    fn set_parameters() -> Result<(), BenchmarkError> {
        setup_court::<T>();
        let origin =
            T::GovernanceOrigin::try_successful_origin().map_err(|_| BenchmarkError::Weightless)?;
        let parameters = CourtParameters { default_slots: 5, ..Parameters::<T>::get() };

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, parameters.clone());

        assert_eq!(Parameters::<T>::get(), parameters);
        Ok(())
    }

    impl_benchmark_test_suite!(
        Pallet,
        crate::mock::ext_builder::ExtBuilder::default().build(),
        crate::mock::runtime::Runtime
    );
}
