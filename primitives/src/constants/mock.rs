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

#![cfg(feature = "mock")]

pub use super::*;
use crate::types::{Balance, Moment};
use frame_support::{parameter_types, PalletId};
use sp_runtime::Perbill;

// Court
parameter_types! {
    pub const CourtPalletId: PalletId = COURT_PALLET_ID;
    pub const MaxActivations: u32 = 64;
    pub const MaxAppeals: u32 = 4;
    pub const MaxDisputesPerTerm: u32 = 16;
    pub const MaxDrawsPerSession: u32 = 64;
    pub const MaxExtraDataLen: u32 = 32;
    pub const MinActivatedToken: Balance = BASE;
    pub const PeriodDuration: Moment = MILLISECS_PER_HOUR;
    pub const FeePerJuror: Balance = CENT;
    // Chosen so that `StakePerDraw` is divisible by both two and three.
    pub const StakeAlpha: Perbill = Perbill::from_percent(60);
}

// Shared within tests
// Balance
parameter_types! {
    pub const ExistentialDeposit: u128 = CENT;
    pub const MaxLocks: u32 = 50;
    pub const MaxReserves: u32 = 50;
}

// Treasury
parameter_types! {
    pub const TreasuryPalletId: PalletId = PalletId(*b"zge/tsry");
}

// System
parameter_types! {
    pub const BlockHashCount: u64 = 250;
}

// Time
parameter_types! {
    pub const MinimumPeriod: u64 = MILLISECS_PER_BLOCK as u64 / 2;
}
