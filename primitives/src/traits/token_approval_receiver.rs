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

/// Receive hook of an approve-and-call token transfer.
///
/// A token which lets `from` approve `amount` for the implementor calls this hook in the same
/// transaction. The implementor may then pull the approved funds and book them.
pub trait TokenApprovalReceiver {
    type AccountId;
    type Balance;

    fn on_token_approval(
        from: &Self::AccountId,
        amount: Self::Balance,
        data: &[u8],
    ) -> DispatchResult;
}
