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

use core::marker::PhantomData;
use frame_support::{traits::Get, weights::Weight};

pub trait WeightInfoZeitgeist {
    fn deposit() -> Weight;
    fn withdraw() -> Weight;
    fn activate_tokens() -> Weight;
    fn pass_period(d: u32, s: u32) -> Weight;
    fn create_dispute() -> Weight;
    fn vote_ruling(s: u32) -> Weight;
    fn appeal() -> Weight;
    fn one_shot_token_repartition(s: u32) -> Weight;
    fn execute_ruling() -> Weight;
    fn set_parameters() -> Weight;
}

/// Weight functions for zrml_court (zrml::court::weights)
pub struct WeightInfo<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfoZeitgeist for WeightInfo<T> {
    fn deposit() -> Weight {
        Weight::from_parts(48_210_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    fn withdraw() -> Weight {
        Weight::from_parts(47_300_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    fn activate_tokens() -> Weight {
        Weight::from_parts(31_840_000, 7_380)
            .saturating_add(T::DbWeight::get().reads(5))
            .saturating_add(T::DbWeight::get().writes(3))
    }
    // `d` disputes with up to `s` slots each are drawn.
    fn pass_period(d: u32, s: u32) -> Weight {
        Weight::from_parts(24_150_000, 9_810)
            .saturating_add(Weight::from_parts(6_420_000, 5_030).saturating_mul(d.into()))
            .saturating_add(Weight::from_parts(1_310_000, 80).saturating_mul(s.into()))
            .saturating_add(T::DbWeight::get().reads(7))
            .saturating_add(T::DbWeight::get().reads((2_u64).saturating_mul(d.into())))
            .saturating_add(T::DbWeight::get().writes(4))
            .saturating_add(T::DbWeight::get().writes((2_u64).saturating_mul(d.into())))
    }
    fn create_dispute() -> Weight {
        Weight::from_parts(52_900_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(6))
            .saturating_add(T::DbWeight::get().writes(5))
    }
    fn vote_ruling(s: u32) -> Weight {
        Weight::from_parts(41_020_000, 6_196)
            .saturating_add(Weight::from_parts(410_000, 0).saturating_mul(s.into()))
            .saturating_add(T::DbWeight::get().reads(5))
            .saturating_add(T::DbWeight::get().writes(3))
    }
    fn appeal() -> Weight {
        Weight::from_parts(55_700_000, 6_196)
            .saturating_add(T::DbWeight::get().reads(6))
            .saturating_add(T::DbWeight::get().writes(4))
    }
    fn one_shot_token_repartition(s: u32) -> Weight {
        Weight::from_parts(63_400_000, 8_730)
            .saturating_add(Weight::from_parts(15_900_000, 2_603).saturating_mul(s.into()))
            .saturating_add(T::DbWeight::get().reads(8))
            .saturating_add(T::DbWeight::get().reads((2_u64).saturating_mul(s.into())))
            .saturating_add(T::DbWeight::get().writes(6))
            .saturating_add(T::DbWeight::get().writes((2_u64).saturating_mul(s.into())))
    }
    fn execute_ruling() -> Weight {
        Weight::from_parts(22_480_000, 4_180)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    fn set_parameters() -> Weight {
        Weight::from_parts(9_870_000, 0).saturating_add(T::DbWeight::get().writes(1))
    }
}
