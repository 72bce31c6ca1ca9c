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

use crate::{
    mock::{
        ext_builder::ALICE,
        runtime::{Court, Runtime, RuntimeOrigin, Timestamp},
    },
    CurrentPeriod, LastPeriodChange, Parameters, Period,
};
use frame_support::assert_ok;

/// Moves the time to the end of the current period and advances the court clock.
pub fn pass_period() {
    elapse_current_period();
    assert_ok!(Court::pass_period(RuntimeOrigin::signed(ALICE)));
}

/// Advances the court clock until `period` is reached. Crosses into the next term if necessary.
pub fn run_to_period(period: Period) {
    for _ in 0..5 {
        if CurrentPeriod::<Runtime>::get() == period {
            return;
        }
        pass_period();
    }
    panic!("Court clock is stuck in {:?}", CurrentPeriod::<Runtime>::get());
}

/// Makes the current period last long enough to advance the clock.
pub fn elapse_current_period() {
    let period = CurrentPeriod::<Runtime>::get();
    let duration = Parameters::<Runtime>::get().durations.of(period);
    let end = LastPeriodChange::<Runtime>::get() + duration;
    Timestamp::set_timestamp(pallet_timestamp::Now::<Runtime>::get().max(end));
}
