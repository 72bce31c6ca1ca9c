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

#[cfg(feature = "mock")]
pub mod mock;

use crate::types::{Balance, Moment};
use frame_support::PalletId;

// Definitions for currency
pub const BASE: u128 = 10_000_000_000;
pub const CENT: Balance = BASE / 100; // 100_000_000
pub const MILLI: Balance = CENT / 10; //  10_000_000

// Definitions for time
pub const MILLISECS_PER_BLOCK: u32 = 12000;
pub const MILLISECS_PER_HOUR: Moment = 60 * 60 * 1000;

// Court
/// Pallet identifier, used to derive the account which holds deposits and fees.
pub const COURT_PALLET_ID: PalletId = PalletId(*b"zge/cout");
/// Number of slots drawn for the first session of a dispute if the arbitrable application didn't
/// ask for a specific number.
pub const DEFAULT_SLOTS: u32 = 3;
