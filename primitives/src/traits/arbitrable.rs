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

use sp_runtime::DispatchResult;

/// Implemented by the application which opened a dispute and has to act on the court's final
/// ruling.
pub trait Arbitrable {
    type AccountId;
    type DisputeId;
    type Ruling;

    /// Delivers the final `ruling` of `dispute_id` to the application behind `arbitrated`.
    ///
    /// The court calls this exactly once per dispute. Returning an error reverts the delivery so
    /// that it may be attempted again.
    fn rule(
        arbitrated: &Self::AccountId,
        dispute_id: Self::DisputeId,
        ruling: Self::Ruling,
    ) -> DispatchResult;
}
