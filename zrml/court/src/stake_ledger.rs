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

use crate::{BalanceOf, Config, Error, Jurors, Pallet};
use frame_support::ensure;
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::{
    traits::{AtLeast32BitUnsigned, Zero},
    ArithmeticError, DispatchError, DispatchResult, RuntimeDebug,
};

/// A ledger entry: the stake owned by an account and the part of it which is locked.
///
/// `at_stake <= balance` holds after every operation.
#[derive(
    Clone, Copy, Decode, Default, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo,
)]
pub struct JurorInfo<Balance> {
    pub balance: Balance,
    pub at_stake: Balance,
}

#[derive(Clone, Copy, Eq, PartialEq, RuntimeDebug)]
pub enum StakeLedgerError {
    /// The free part of the balance doesn't cover the amount.
    InsufficientBalance,
    /// The amount exceeds the locked part of the balance.
    OverUnlock,
    Overflow,
}

impl StakeLedgerError {
    pub(crate) fn into_dispatch_error<T: Config>(self) -> DispatchError {
        match self {
            StakeLedgerError::InsufficientBalance => Error::<T>::InsufficientBalance.into(),
            StakeLedgerError::OverUnlock => Error::<T>::OverUnlock.into(),
            StakeLedgerError::Overflow => ArithmeticError::Overflow.into(),
        }
    }
}

impl<Balance> JurorInfo<Balance>
where
    Balance: AtLeast32BitUnsigned + Copy,
{
    pub fn free(&self) -> Balance {
        self.balance.saturating_sub(self.at_stake)
    }

    pub fn is_empty(&self) -> bool {
        self.balance.is_zero() && self.at_stake.is_zero()
    }

    pub fn lock(&mut self, amount: Balance) -> Result<(), StakeLedgerError> {
        ensure!(amount <= self.free(), StakeLedgerError::InsufficientBalance);
        self.at_stake = self.at_stake.checked_add(&amount).ok_or(StakeLedgerError::Overflow)?;
        Ok(())
    }

    pub fn unlock(&mut self, amount: Balance) -> Result<(), StakeLedgerError> {
        self.at_stake = self.at_stake.checked_sub(&amount).ok_or(StakeLedgerError::OverUnlock)?;
        Ok(())
    }

    pub fn credit(&mut self, amount: Balance) -> Result<(), StakeLedgerError> {
        self.balance = self.balance.checked_add(&amount).ok_or(StakeLedgerError::Overflow)?;
        Ok(())
    }

    pub fn debit(&mut self, amount: Balance) -> Result<(), StakeLedgerError> {
        ensure!(amount <= self.free(), StakeLedgerError::InsufficientBalance);
        self.balance = self.balance.saturating_sub(amount);
        Ok(())
    }

    /// Unlocks `amount` and removes it from the balance.
    pub fn forfeit(&mut self, amount: Balance) -> Result<(), StakeLedgerError> {
        self.unlock(amount)?;
        self.debit(amount)
    }
}

// The only functions with write access to `Jurors`. Sums of balances over all entries only change
// through `deposit` and `withdraw`.
impl<T: Config> Pallet<T> {
    pub(crate) fn lock_stake(who: &T::AccountId, amount: BalanceOf<T>) -> DispatchResult {
        Self::mutate_juror(who, |juror| juror.lock(amount))
    }

    pub(crate) fn unlock_stake(who: &T::AccountId, amount: BalanceOf<T>) -> DispatchResult {
        Self::mutate_juror(who, |juror| juror.unlock(amount))
    }

    /// Moves `amount` of the locked stake of `from` to the free stake of `to`.
    pub(crate) fn transfer_stake(
        from: &T::AccountId,
        to: &T::AccountId,
        amount: BalanceOf<T>,
    ) -> DispatchResult {
        if from == to {
            return Self::unlock_stake(from, amount);
        }
        Self::mutate_juror(from, |juror| juror.forfeit(amount))?;
        Self::mutate_juror(to, |juror| juror.credit(amount))
    }

    /// Moves `amount` of the free stake of `from` to the free stake of `to`.
    pub(crate) fn pay_stake(
        from: &T::AccountId,
        to: &T::AccountId,
        amount: BalanceOf<T>,
    ) -> DispatchResult {
        if from == to {
            return Ok(());
        }
        Self::mutate_juror(from, |juror| juror.debit(amount))?;
        Self::mutate_juror(to, |juror| juror.credit(amount))
    }

    pub(crate) fn credit_stake(who: &T::AccountId, amount: BalanceOf<T>) -> DispatchResult {
        Self::mutate_juror(who, |juror| juror.credit(amount))
    }

    pub(crate) fn debit_stake(who: &T::AccountId, amount: BalanceOf<T>) -> DispatchResult {
        Self::mutate_juror(who, |juror| juror.debit(amount))
    }

    fn mutate_juror<F>(who: &T::AccountId, f: F) -> DispatchResult
    where
        F: FnOnce(&mut JurorInfo<BalanceOf<T>>) -> Result<(), StakeLedgerError>,
    {
        let mut juror = Jurors::<T>::get(who);
        f(&mut juror).map_err(|error| error.into_dispatch_error::<T>())?;
        if juror.is_empty() {
            Jurors::<T>::remove(who);
        } else {
            Jurors::<T>::insert(who, juror);
        }
        Ok(())
    }
}
