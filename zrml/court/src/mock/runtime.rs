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

use crate as zrml_court;
use crate::{
    mock::types::{MockArbitrable, MockDepositObserver, MockRandomness},
    weights::WeightInfo,
};
use court_primitives::{
    constants::mock::{
        BlockHashCount, CourtPalletId, ExistentialDeposit, MaxActivations, MaxAppeals,
        MaxDisputesPerTerm, MaxDrawsPerSession, MaxExtraDataLen, MaxLocks, MaxReserves,
        MinimumPeriod, TreasuryPalletId,
    },
    types::{AccountIdTest, Balance, Hash, Moment},
};
use frame_support::{construct_runtime, traits::Everything};
use frame_system::{mocking::MockBlock, EnsureRoot};
use sp_runtime::traits::{BlakeTwo256, ConstU32, IdentityLookup};

construct_runtime! {
    pub enum Runtime {
        Court: zrml_court,
        Balances: pallet_balances,
        System: frame_system,
        Timestamp: pallet_timestamp,
    }
}

impl zrml_court::Config for Runtime {
    type Arbitrable = MockArbitrable;
    type Currency = Balances;
    type GovernanceOrigin = EnsureRoot<AccountIdTest>;
    type MaxAppeals = MaxAppeals;
    type MaxActivations = MaxActivations;
    type MaxDisputesPerTerm = MaxDisputesPerTerm;
    type MaxDrawsPerSession = MaxDrawsPerSession;
    type MaxExtraDataLen = MaxExtraDataLen;
    type PalletId = CourtPalletId;
    type Random = MockRandomness;
    type RuntimeEvent = RuntimeEvent;
    type StakeDepositObserver = MockDepositObserver;
    type Timestamp = Timestamp;
    type TreasuryPalletId = TreasuryPalletId;
    type WeightInfo = WeightInfo<Runtime>;
}

impl frame_system::Config for Runtime {
    type AccountData = pallet_balances::AccountData<Balance>;
    type AccountId = AccountIdTest;
    type BaseCallFilter = Everything;
    type Block = MockBlock<Runtime>;
    type BlockHashCount = BlockHashCount;
    type BlockLength = ();
    type BlockWeights = ();
    type RuntimeCall = RuntimeCall;
    type RuntimeTask = RuntimeTask;
    type DbWeight = ();
    type RuntimeEvent = RuntimeEvent;
    type Hash = Hash;
    type Hashing = BlakeTwo256;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Nonce = u64;
    type MaxConsumers = ConstU32<16>;
    type MultiBlockMigrator = ();
    type OnKilledAccount = ();
    type OnNewAccount = ();
    type RuntimeOrigin = RuntimeOrigin;
    type PalletInfo = PalletInfo;
    type PreInherents = ();
    type PostInherents = ();
    type PostTransactions = ();
    type SingleBlockMigrations = ();
    type SS58Prefix = ();
    type SystemWeightInfo = ();
    type Version = ();
    type OnSetCode = ();
}

impl pallet_balances::Config for Runtime {
    type AccountStore = System;
    type Balance = Balance;
    type DustRemoval = ();
    type FreezeIdentifier = ();
    type RuntimeHoldReason = ();
    type RuntimeEvent = RuntimeEvent;
    type ExistentialDeposit = ExistentialDeposit;
    type MaxFreezes = ();
    type MaxLocks = MaxLocks;
    type MaxReserves = MaxReserves;
    type ReserveIdentifier = [u8; 8];
    type RuntimeFreezeReason = ();
    type WeightInfo = ();
}

impl pallet_timestamp::Config for Runtime {
    type MinimumPeriod = MinimumPeriod;
    type Moment = Moment;
    type OnTimestampSet = ();
    type WeightInfo = ();
}
