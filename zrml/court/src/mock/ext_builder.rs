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

use crate::{
    mock::{
        runtime::{Court, Runtime, System},
        types::{MockArbitrable, MockDepositObserver, MockRandomness},
    },
    CourtParameters, PeriodDurations,
};
use court_primitives::{
    constants::{
        mock::{
            ExistentialDeposit, FeePerJuror, MaxAppeals, MinActivatedToken, PeriodDuration,
            StakeAlpha,
        },
        BASE, DEFAULT_SLOTS,
    },
    types::{AccountIdTest, Balance},
};
use sp_runtime::BuildStorage;

pub const ALICE: AccountIdTest = 0;
pub const BOB: AccountIdTest = 1;
pub const CHARLIE: AccountIdTest = 2;
pub const DAVE: AccountIdTest = 3;
pub const EVE: AccountIdTest = 4;

pub const INITIAL_BALANCE: Balance = 1_000 * BASE;

pub fn mock_parameters() -> CourtParameters<Balance, u64> {
    let duration = PeriodDuration::get();
    CourtParameters {
        durations: PeriodDurations {
            activation: duration,
            draw: duration,
            vote: duration,
            appeal: duration,
            execution: duration,
        },
        fee_per_juror: FeePerJuror::get(),
        min_activated_token: MinActivatedToken::get(),
        alpha: StakeAlpha::get(),
        default_slots: DEFAULT_SLOTS,
        appeal_slot_multiplier: 2,
        appeal_extra_slots: 1,
        max_appeals: MaxAppeals::get(),
    }
}

pub struct ExtBuilder {
    balances: Vec<(AccountIdTest, Balance)>,
    parameters: CourtParameters<Balance, u64>,
}

impl Default for ExtBuilder {
    fn default() -> Self {
        Self {
            balances: vec![
                (ALICE, INITIAL_BALANCE),
                (BOB, INITIAL_BALANCE),
                (CHARLIE, INITIAL_BALANCE),
                (DAVE, INITIAL_BALANCE),
                (EVE, INITIAL_BALANCE),
                (Court::court_account(), ExistentialDeposit::get()),
                (Court::treasury_account(), ExistentialDeposit::get()),
            ],
            parameters: mock_parameters(),
        }
    }
}

impl ExtBuilder {
    pub fn parameters(mut self, parameters: CourtParameters<Balance, u64>) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn build(self) -> sp_io::TestExternalities {
        let mut t = frame_system::GenesisConfig::<Runtime>::default().build_storage().unwrap();
        // see the logs in tests when using `RUST_LOG=debug cargo test -- --nocapture`
        let _ = env_logger::builder().is_test(true).try_init();

        pallet_balances::GenesisConfig::<Runtime> { balances: self.balances }
            .assimilate_storage(&mut t)
            .unwrap();
        crate::GenesisConfig::<Runtime> {
            parameters: self.parameters,
            _phantom: Default::default(),
        }
        .assimilate_storage(&mut t)
        .unwrap();

        MockArbitrable::reset();
        MockDepositObserver::reset();
        MockRandomness::reset();

        let mut test_ext: sp_io::TestExternalities = t.into();
        test_ext.execute_with(|| System::set_block_number(1));
        test_ext
    }
}
