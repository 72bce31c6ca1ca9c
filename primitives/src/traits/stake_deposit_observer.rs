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

/// Notified after a stake deposit has been booked.
///
/// The ledger is already updated when this is called, so the result can't undo the deposit.
pub trait StakeDepositObserver<AccountId, Balance> {
    fn on_stake_deposited(who: &AccountId, amount: Balance, data: &[u8]) -> DispatchResult;
}

impl<AccountId, Balance> StakeDepositObserver<AccountId, Balance> for () {
    fn on_stake_deposited(_: &AccountId, _: Balance, _: &[u8]) -> DispatchResult {
        Ok(())
    }
}
