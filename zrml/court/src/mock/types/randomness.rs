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

use crate::mock::runtime::System;
use core::cell::RefCell;
use court_primitives::types::{BlockNumber, Hash};
use frame_support::traits::Randomness;
use sp_runtime::traits::{BlakeTwo256, Hash as HashT};

/// Randomness which depends on the subject, the block number and a salt set by the test.
pub struct MockRandomness;

impl MockRandomness {
    /// If `false`, every request returns the zero hash.
    pub fn set_ready(ready: bool) {
        RANDOMNESS_READY.with(|value| *value.borrow_mut() = ready);
    }

    pub fn set_salt(salt: u64) {
        RANDOMNESS_SALT.with(|value| *value.borrow_mut() = salt);
    }

    pub(crate) fn reset() {
        Self::set_ready(true);
        Self::set_salt(0);
    }
}

impl Randomness<Hash, BlockNumber> for MockRandomness {
    fn random(subject: &[u8]) -> (Hash, BlockNumber) {
        let block_number = System::block_number();
        if !RANDOMNESS_READY.with(|value| *value.borrow()) {
            return (Hash::zero(), block_number);
        }
        let salt = RANDOMNESS_SALT.with(|value| *value.borrow());
        (BlakeTwo256::hash_of(&(subject, block_number, salt)), block_number)
    }
}

thread_local! {
    static RANDOMNESS_READY: RefCell<bool> = const { RefCell::new(true) };
    static RANDOMNESS_SALT: RefCell<u64> = const { RefCell::new(0) };
}
