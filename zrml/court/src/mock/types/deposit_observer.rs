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

use core::cell::RefCell;
use court_primitives::{
    traits::StakeDepositObserver,
    types::{AccountIdTest, Balance},
};
use sp_runtime::DispatchResult;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositCall {
    pub who: AccountIdTest,
    pub amount: Balance,
    pub data: Vec<u8>,
}

pub struct MockDepositObserver;

impl MockDepositObserver {
    pub fn set_return_value(value: DispatchResult) {
        OBSERVER_RETURN_VALUE.with(|v| *v.borrow_mut() = value);
    }

    pub fn calls() -> Vec<DepositCall> {
        OBSERVER_CALL_DATA.with(|values| values.borrow().clone())
    }

    pub(crate) fn reset() {
        Self::set_return_value(Ok(()));
        OBSERVER_CALL_DATA.with(|values| values.borrow_mut().clear());
    }
}

impl StakeDepositObserver<AccountIdTest, Balance> for MockDepositObserver {
    fn on_stake_deposited(who: &AccountIdTest, amount: Balance, data: &[u8]) -> DispatchResult {
        OBSERVER_CALL_DATA.with(|values| {
            values.borrow_mut().push(DepositCall { who: *who, amount, data: data.to_vec() })
        });
        OBSERVER_RETURN_VALUE.with(|value| *value.borrow())
    }
}

thread_local! {
    static OBSERVER_CALL_DATA: RefCell<Vec<DepositCall>> = const { RefCell::new(vec![]) };
    static OBSERVER_RETURN_VALUE: RefCell<DispatchResult> = const { RefCell::new(Ok(())) };
}
