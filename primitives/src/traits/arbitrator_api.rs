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

use sp_runtime::DispatchError;

/// The interface an arbitrator exposes to arbitrable applications.
pub trait ArbitratorApi {
    type AccountId;
    type Balance;
    type DisputeId;
    type Ruling;

    /// Opens a dispute with `choices` valid non-zero rulings on behalf of `who`.
    ///
    /// `who` pays `arbitration_cost(extra_data)` and receives the final ruling. The call fails if
    /// the cost exceeds `max_fee`.
    ///
    /// # Returns
    ///
    /// The identifier of the new dispute.
    fn create_dispute(
        who: &Self::AccountId,
        choices: u32,
        extra_data: &[u8],
        max_fee: Self::Balance,
    ) -> Result<Self::DisputeId, DispatchError>;

    /// The fee which has to be paid to open a dispute with the given `extra_data`.
    fn arbitration_cost(extra_data: &[u8]) -> Result<Self::Balance, DispatchError>;

    /// The fee which has to be paid to appeal the current session of `dispute_id`.
    fn appeal_cost(
        dispute_id: Self::DisputeId,
        extra_data: &[u8],
    ) -> Result<Self::Balance, DispatchError>;

    /// The ruling `dispute_id` would receive if it were executed now.
    fn current_ruling(dispute_id: Self::DisputeId) -> Result<Self::Ruling, DispatchError>;
}
