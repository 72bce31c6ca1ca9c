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

use crate::mock::runtime::{Court, RuntimeOrigin};
use core::cell::RefCell;
use court_primitives::{
    traits::Arbitrable,
    types::{AccountIdTest, DisputeId, Ruling},
};
use sp_runtime::{DispatchError, DispatchResult};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ArbitrableBehavior {
    /// Accept every ruling.
    Accept,
    /// Reject every ruling.
    Reject,
    /// Try to execute the ruling again from within `rule`.
    ReenterExecution,
    /// Try to repartition the dispute again from within `rule`.
    ReenterRepartition,
}

/// Arbitrable application which records the rulings it receives.
pub struct MockArbitrable;

impl MockArbitrable {
    pub fn set_behavior(behavior: ArbitrableBehavior) {
        ARBITRABLE_BEHAVIOR.with(|value| *value.borrow_mut() = behavior);
    }

    pub fn rulings() -> Vec<(AccountIdTest, DisputeId, Ruling)> {
        ARBITRABLE_RULINGS.with(|values| values.borrow().clone())
    }

    /// Result of the nested call made by the last reentering `rule`.
    pub fn reentry_result() -> Option<DispatchResult> {
        ARBITRABLE_REENTRY_RESULT.with(|value| *value.borrow())
    }

    pub(crate) fn reset() {
        Self::set_behavior(ArbitrableBehavior::Accept);
        ARBITRABLE_RULINGS.with(|values| values.borrow_mut().clear());
        ARBITRABLE_REENTRY_RESULT.with(|value| *value.borrow_mut() = None);
    }
}

impl Arbitrable for MockArbitrable {
    type AccountId = AccountIdTest;
    type DisputeId = DisputeId;
    type Ruling = Ruling;

    fn rule(arbitrated: &AccountIdTest, dispute_id: DisputeId, ruling: Ruling) -> DispatchResult {
        ARBITRABLE_RULINGS
            .with(|values| values.borrow_mut().push((*arbitrated, dispute_id, ruling)));

        let origin = RuntimeOrigin::signed(*arbitrated);
        let reentry_result = match ARBITRABLE_BEHAVIOR.with(|value| *value.borrow()) {
            ArbitrableBehavior::Accept => return Ok(()),
            ArbitrableBehavior::Reject => return Err(DispatchError::Other("ruling rejected")),
            ArbitrableBehavior::ReenterExecution => Court::execute_ruling(origin, dispute_id),
            ArbitrableBehavior::ReenterRepartition => {
                Court::one_shot_token_repartition(origin, dispute_id)
                    .map(|_| ())
                    .map_err(|error| error.error)
            }
        };
        ARBITRABLE_REENTRY_RESULT.with(|value| *value.borrow_mut() = Some(reentry_result));

        Ok(())
    }
}

thread_local! {
    static ARBITRABLE_BEHAVIOR: RefCell<ArbitrableBehavior> =
        const { RefCell::new(ArbitrableBehavior::Accept) };
    static ARBITRABLE_RULINGS: RefCell<Vec<(AccountIdTest, DisputeId, Ruling)>> =
        const { RefCell::new(vec![]) };
    static ARBITRABLE_REENTRY_RESULT: RefCell<Option<DispatchResult>> =
        const { RefCell::new(None) };
}
