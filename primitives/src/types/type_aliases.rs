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

/// Balance of an account.
pub type Balance = u128;

/// An index to a block.
pub type BlockNumber = u64;

/// The dispute identifier type.
pub type DisputeId = u128;

/// A hash of some data used by the chain.
pub type Hash = sp_core::H256;

/// Time
pub type Moment = u64;

/// A ruling given by the court. `0` means the court refused to arbitrate.
pub type Ruling = u32;

/// Index of a voting session within a dispute. Session `0` is the original trial and session `k`
/// is the `k`-th appeal.
pub type SessionIndex = u32;

/// Index of a full `Activation` to `Execution` cycle of the court.
pub type TermIndex = u64;

// Tests

pub type AccountIdTest = u128;

#[cfg(feature = "std")]
pub type BlockTest<R> = frame_system::mocking::MockBlock<R>;
