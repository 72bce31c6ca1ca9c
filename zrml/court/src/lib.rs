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

#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod benchmarking;
mod draw;
pub mod mock;
mod stake_ledger;
mod tally;
mod tests;
pub mod types;
pub mod weights;

pub use draw::{ActivationSegment, DrawError};
pub use pallet::*;
pub use stake_ledger::{JurorInfo, StakeLedgerError};
pub use types::*;

#[frame_support::pallet]
mod pallet {
    use crate::{
        draw::{self, ActivationSegment, DrawError, DrawOutcome},
        tally::Tally,
        weights::WeightInfoZeitgeist,
        CourtParameters, DisputeInfo, DisputeStatus, DrawInfo, JurorInfo, Period,
        RepartitionOutcome, SessionInfo,
    };
    use alloc::vec::Vec;
    use core::marker::PhantomData;
    use court_primitives::{
        traits::{Arbitrable, ArbitratorApi, StakeDepositObserver, TokenApprovalReceiver},
        types::{DisputeId, Ruling, SessionIndex, TermIndex},
    };
    use frame_support::{
        dispatch::DispatchResultWithPostInfo,
        ensure,
        pallet_prelude::{OptionQuery, StorageDoubleMap, StorageMap, StorageValue, ValueQuery},
        require_transactional,
        traits::{
            BuildGenesisConfig, Currency, EnsureOrigin, ExistenceRequirement, Get, IsType,
            Randomness, StorageVersion, Time,
        },
        transactional, Blake2_128Concat, BoundedVec, PalletId, Twox64Concat,
    };
    use frame_system::{
        ensure_signed,
        pallet_prelude::{BlockNumberFor, OriginFor},
    };
    use parity_scale_codec::Encode;
    use sp_runtime::{
        traits::{AccountIdConversion, CheckedAdd, CheckedDiv, CheckedMul, Saturating, Zero},
        ArithmeticError, DispatchError, DispatchResult, SaturatedConversion,
    };

    /// The current storage version.
    const STORAGE_VERSION: StorageVersion = StorageVersion::new(0);

    pub(crate) const LOG_TARGET: &str = "runtime::zrml-court";
    const DRAW_SUBJECT: &[u8] = b"zrml-court/draw";

    pub type BalanceOf<T> =
        <<T as Config>::Currency as Currency<<T as frame_system::Config>::AccountId>>::Balance;
    pub type MomentOf<T> = <<T as Config>::Timestamp as Time>::Moment;
    pub type CourtParametersOf<T> = CourtParameters<BalanceOf<T>, MomentOf<T>>;
    pub(crate) type AccountIdOf<T> = <T as frame_system::Config>::AccountId;
    pub(crate) type DrawsOf<T> = BoundedVec<
        DrawInfo<AccountIdOf<T>, BalanceOf<T>>,
        <T as Config>::MaxDrawsPerSession,
    >;
    pub(crate) type SegmentsOf<T> =
        BoundedVec<ActivationSegment<AccountIdOf<T>>, <T as Config>::MaxActivations>;
    pub(crate) type SlotIndicesOf<T> = BoundedVec<u32, <T as Config>::MaxDrawsPerSession>;
    pub(crate) type ExtraDataOf<T> = BoundedVec<u8, <T as Config>::MaxExtraDataLen>;

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Move `amount` from the free balance of the caller into the caller's court stake.
        ///
        /// The stake deposit observer is notified afterwards. The deposit stands even if the
        /// observer fails.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::deposit())]
        #[transactional]
        pub fn deposit(origin: OriginFor<T>, amount: BalanceOf<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_deposit(who, amount, &[])
        }

        /// Move `amount` of the caller's free court stake back to the caller's free balance.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::withdraw())]
        #[transactional]
        pub fn withdraw(origin: OriginFor<T>, amount: BalanceOf<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);

            Self::debit_stake(&who, amount)?;
            T::Currency::transfer(
                &Self::court_account(),
                &who,
                amount,
                ExistenceRequirement::AllowDeath,
            )?;

            Self::deposit_event(Event::StakeWithdrawn { who, amount });

            Ok(())
        }

        /// Lock `amount` of the caller's free stake for the draws of the current term.
        ///
        /// Each full `min_activated_token` of `amount` is one unit of draw weight. Whatever isn't
        /// locked by draws is released when the term's draw completes.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::activate_tokens())]
        #[transactional]
        pub fn activate_tokens(origin: OriginFor<T>, amount: BalanceOf<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_activate_tokens(who, amount)
        }

        /// Advance the court clock by one period if the current period has lasted long enough.
        ///
        /// Anyone may call this. Leaving `Draw` draws the jurors of all disputes scheduled for
        /// the current term.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::pass_period(
            T::MaxDisputesPerTerm::get(),
            T::MaxDrawsPerSession::get(),
        ))]
        #[transactional]
        pub fn pass_period(origin: OriginFor<T>) -> DispatchResultWithPostInfo {
            ensure_signed(origin)?;
            let (disputes, slots) = Self::do_pass_period()?;
            Ok(Some(T::WeightInfo::pass_period(disputes, slots)).into())
        }

        /// Open a dispute on behalf of the calling arbitrable application.
        ///
        /// # Arguments
        ///
        /// - `choices`: The number of valid non-zero rulings. Must be at least two.
        /// - `extra_data`: The first four bytes, read as little-endian `u32`, request the number
        ///   of slots of the first session. Zero or less than four bytes select the default.
        /// - `max_fee`: The most the caller is willing to pay. Only the actual cost is charged.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::create_dispute())]
        #[transactional]
        pub fn create_dispute(
            origin: OriginFor<T>,
            choices: u32,
            extra_data: ExtraDataOf<T>,
            max_fee: BalanceOf<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_create_dispute(who, choices, extra_data, max_fee)?;
            Ok(())
        }

        /// Vote `ruling` with the slots `slot_indices` of the current session of `dispute_id`.
        ///
        /// The caller must own every listed slot and none of them may have voted already. The fee
        /// of each slot is paid out to the caller.
        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::vote_ruling(slot_indices.len() as u32))]
        #[transactional]
        pub fn vote_ruling(
            origin: OriginFor<T>,
            dispute_id: DisputeId,
            ruling: Ruling,
            slot_indices: SlotIndicesOf<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_vote_ruling(who, dispute_id, ruling, &slot_indices)
        }

        /// Appeal the session of `dispute_id` which was voted on in the current term.
        ///
        /// The appeal opens a larger session in the next term.
        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::appeal())]
        #[transactional]
        pub fn appeal(
            origin: OriginFor<T>,
            dispute_id: DisputeId,
            _extra_data: ExtraDataOf<T>,
            max_fee: BalanceOf<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_appeal(who, dispute_id, max_fee)
        }

        /// Settle the stake of all slots of `dispute_id` in a single call.
        ///
        /// Incoherent slots (including slots which didn't vote) forfeit their locked stake.
        /// The forfeited stake is split evenly among the coherent slots.
        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::one_shot_token_repartition(
            MaxSessionsOf::<T>::get().saturating_mul(T::MaxDrawsPerSession::get()),
        ))]
        #[transactional]
        pub fn one_shot_token_repartition(
            origin: OriginFor<T>,
            dispute_id: DisputeId,
        ) -> DispatchResultWithPostInfo {
            ensure_signed(origin)?;
            let slots = Self::do_one_shot_token_repartition(dispute_id)?;
            Ok(Some(T::WeightInfo::one_shot_token_repartition(slots)).into())
        }

        /// Deliver the ruling of a repartitioned dispute to its arbitrable application.
        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::execute_ruling())]
        #[transactional]
        pub fn execute_ruling(origin: OriginFor<T>, dispute_id: DisputeId) -> DispatchResult {
            ensure_signed(origin)?;
            Self::do_execute_ruling(dispute_id)?;
            Ok(())
        }

        /// Replace the court parameters. Applies to disputes created afterwards; open disputes
        /// keep their stake per draw and fee per juror.
        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::set_parameters())]
        #[transactional]
        pub fn set_parameters(
            origin: OriginFor<T>,
            parameters: CourtParametersOf<T>,
        ) -> DispatchResult {
            T::GovernanceOrigin::ensure_origin(origin)?;
            ensure!(
                parameters.is_valid(T::MaxAppeals::get(), T::MaxDrawsPerSession::get()),
                Error::<T>::InvalidParameters
            );

            Parameters::<T>::put(parameters.clone());

            Self::deposit_event(Event::ParametersUpdated { parameters });

            Ok(())
        }
    }

    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// Receives the rulings of executed disputes.
        type Arbitrable: Arbitrable<
                AccountId = Self::AccountId,
                DisputeId = DisputeId,
                Ruling = Ruling,
            >;

        /// The currency which is deposited as stake and paid as fees.
        type Currency: Currency<Self::AccountId>;

        /// Origin which may change the court parameters.
        type GovernanceOrigin: EnsureOrigin<Self::RuntimeOrigin>;

        /// Upper bound on the number of appeals of a dispute.
        #[pallet::constant]
        type MaxAppeals: Get<u32>;

        /// Upper bound on the number of accounts which activate stake in a single term.
        #[pallet::constant]
        type MaxActivations: Get<u32>;

        /// Upper bound on the number of disputes which are drawn in a single term.
        #[pallet::constant]
        type MaxDisputesPerTerm: Get<u32>;

        /// Upper bound on the number of slots of a session.
        #[pallet::constant]
        type MaxDrawsPerSession: Get<u32>;

        #[pallet::constant]
        type MaxExtraDataLen: Get<u32>;

        /// Identifier of this pallet. Holds deposited stake and unpaid fees.
        #[pallet::constant]
        type PalletId: Get<PalletId>;

        /// Source of the seeds of juror draws.
        type Random: Randomness<Self::Hash, BlockNumberFor<Self>>;

        /// Event
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Notified after every stake deposit.
        type StakeDepositObserver: StakeDepositObserver<Self::AccountId, BalanceOf<Self>>;

        /// Time source of the court clock.
        type Timestamp: Time;

        /// Identifier of the account which receives dust and unpaid fees.
        #[pallet::constant]
        type TreasuryPalletId: Get<PalletId>;

        /// Weights generated by benchmarks
        type WeightInfo: WeightInfoZeitgeist;
    }

    pub(crate) type MaxSessionsOf<T> = crate::MaxSessions<T>;

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(PhantomData<T>);

    /// Court stake ledger. Entries without balance are removed.
    #[pallet::storage]
    pub type Jurors<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, JurorInfo<BalanceOf<T>>, ValueQuery>;

    #[pallet::storage]
    pub type Disputes<T: Config> =
        StorageMap<_, Twox64Concat, DisputeId, DisputeInfo<T>, OptionQuery>;

    /// Slots of each session of each dispute.
    #[pallet::storage]
    pub type Draws<T: Config> = StorageDoubleMap<
        _,
        Twox64Concat,
        DisputeId,
        Twox64Concat,
        SessionIndex,
        DrawsOf<T>,
        ValueQuery,
    >;

    #[pallet::storage]
    pub type NextDisputeId<T: Config> = StorageValue<_, DisputeId, ValueQuery>;

    #[pallet::storage]
    pub type Parameters<T: Config> = StorageValue<_, CourtParametersOf<T>, ValueQuery>;

    #[pallet::storage]
    pub type CurrentPeriod<T: Config> = StorageValue<_, Period, ValueQuery>;

    #[pallet::storage]
    pub type CurrentTerm<T: Config> = StorageValue<_, TermIndex, ValueQuery>;

    /// The moment at which the current period started.
    #[pallet::storage]
    pub type LastPeriodChange<T: Config> = StorageValue<_, MomentOf<T>, ValueQuery>;

    /// Activated stake of the current term which isn't locked by any slot yet.
    #[pallet::storage]
    pub type Activations<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, BalanceOf<T>, OptionQuery>;

    /// Draw weight of the current term in activation order.
    #[pallet::storage]
    pub type ActivationSegments<T: Config> = StorageValue<_, SegmentsOf<T>, ValueQuery>;

    /// Disputes whose latest session is drawn in a term.
    #[pallet::storage]
    pub type TermDisputes<T: Config> = StorageMap<
        _,
        Twox64Concat,
        TermIndex,
        BoundedVec<DisputeId, T::MaxDisputesPerTerm>,
        ValueQuery,
    >;

    /// Set while stake is being redistributed or a ruling is being delivered.
    #[pallet::storage]
    pub type ExecutionLock<T: Config> = StorageValue<_, bool, ValueQuery>;

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Court parameters with durations in the unit of `T::Timestamp`.
        pub parameters: CourtParameters<u128, u64>,
        #[serde(skip)]
        pub _phantom: PhantomData<T>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let parameters = self.parameters.clone().map(
                |balance| balance.saturated_into::<BalanceOf<T>>(),
                |duration| duration.saturated_into::<MomentOf<T>>(),
            );
            Parameters::<T>::put(parameters);
        }
    }

    #[pallet::event]
    #[pallet::generate_deposit(pub(crate) fn deposit_event)]
    pub enum Event<T>
    where
        T: Config,
    {
        StakeDeposited { who: T::AccountId, amount: BalanceOf<T> },
        StakeWithdrawn { who: T::AccountId, amount: BalanceOf<T> },
        TokensActivated {
            juror: T::AccountId,
            amount: BalanceOf<T>,
            weight: u128,
            term: TermIndex,
        },
        NewPeriod { period: Period, term: TermIndex },
        /// Disputes were scheduled for `term`, but nobody activated stake. The term starts over.
        DrawStalled { term: TermIndex },
        JurorsDrawn { dispute_id: DisputeId, session: SessionIndex, slots: u32 },
        DisputeCreated {
            dispute_id: DisputeId,
            arbitrated: T::AccountId,
            choices: u32,
            slots: u32,
            term: TermIndex,
            cost: BalanceOf<T>,
        },
        VoteCast {
            dispute_id: DisputeId,
            session: SessionIndex,
            juror: T::AccountId,
            ruling: Ruling,
            slots: u32,
            reward: BalanceOf<T>,
        },
        AppealRaised {
            dispute_id: DisputeId,
            appellant: T::AccountId,
            session: SessionIndex,
            slots: u32,
            term: TermIndex,
            cost: BalanceOf<T>,
        },
        TokensRepartitioned {
            dispute_id: DisputeId,
            outcome: RepartitionOutcome<BalanceOf<T>>,
        },
        RulingExecuted { dispute_id: DisputeId, ruling: Ruling },
        ParametersUpdated { parameters: CourtParametersOf<T> },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// The amount is lower than the minimum activation.
        ActivationBelowMinimum,
        /// The caller already activated stake in this term.
        AlreadyActivated,
        /// The session was already appealed.
        AlreadyAppealed,
        /// The dispute was already repartitioned or executed.
        AlreadyExecuted,
        /// One of the slots was already used to vote.
        AlreadyVoted,
        /// The dispute can't be appealed any further.
        AppealDepthExceeded,
        DisputeNotFound,
        ExtraDataTooLong,
        /// The free stake doesn't cover the amount.
        InsufficientBalance,
        /// A dispute needs at least two choices.
        InvalidChoiceCount,
        InvalidParameters,
        /// The operation isn't allowed in the current period, or the dispute isn't at the stage
        /// the operation needs.
        InvalidPeriod,
        /// The ruling is greater than the number of choices.
        InvalidRuling,
        /// No juror activated any weight.
        NoEligibleJurors,
        /// No slots were specified.
        NoSlots,
        /// The caller doesn't own one of the slots.
        NotOwner,
        /// The amount exceeds the locked stake.
        OverUnlock,
        /// The cost exceeds the maximum fee of the caller.
        PaymentMismatch,
        /// The current period hasn't lasted long enough.
        PeriodNotElapsed,
        /// The randomness source didn't provide a seed yet.
        RandomNumberNotReady,
        /// A repartition or execution is already in progress.
        ReentrancyBlocked,
        /// The ruling can't be executed before the stake is repartitioned.
        RulingNotRepartitioned,
        /// A slot index is out of range.
        SlotOutOfRange,
        /// The activation limit of the term was reached.
        TooManyActivations,
        /// The dispute limit of the term was reached.
        TooManyDisputes,
        /// The session would have more slots than allowed.
        TooManySlots,
        /// Storage is in an inconsistent state.
        Unexpected,
        ZeroAmount,
    }

    impl<T: Config> From<DrawError> for Error<T> {
        fn from(error: DrawError) -> Self {
            match error {
                DrawError::NoEligibleJurors => Error::<T>::NoEligibleJurors,
            }
        }
    }

    impl<T: Config> Pallet<T> {
        pub fn court_account() -> T::AccountId {
            T::PalletId::get().into_account_truncating()
        }

        /// Ledger entry which collects the forfeited stake of a dispute during repartition.
        pub fn pot_account(dispute_id: DisputeId) -> T::AccountId {
            T::PalletId::get().into_sub_account_truncating(dispute_id)
        }

        pub fn treasury_account() -> T::AccountId {
            T::TreasuryPalletId::get().into_account_truncating()
        }

        /// Returns the balance and the locked part of the balance of `who`.
        pub fn jurors(who: &T::AccountId) -> (BalanceOf<T>, BalanceOf<T>) {
            let juror = Jurors::<T>::get(who);
            (juror.balance, juror.at_stake)
        }

        /// Checks if `juror` was drawn for `slot` of the latest session of `dispute_id`.
        pub fn is_drawn(dispute_id: DisputeId, juror: &T::AccountId, slot: u32) -> bool {
            let Some(dispute) = Disputes::<T>::get(dispute_id) else {
                return false;
            };
            Draws::<T>::get(dispute_id, dispute.latest_session_index())
                .get(slot as usize)
                .map_or(false, |draw| draw.juror == *juror)
        }

        pub fn get_stake_per_draw(dispute_id: DisputeId) -> Result<BalanceOf<T>, DispatchError> {
            Ok(Self::dispute(dispute_id)?.stake_per_draw)
        }

        /// The fee for opening a dispute with `extra_data`.
        pub fn arbitration_cost(extra_data: &[u8]) -> Result<BalanceOf<T>, DispatchError> {
            let parameters = Parameters::<T>::get();
            let slots = Self::initial_slots(&parameters, extra_data)?;
            Self::cost_of(parameters.fee_per_juror, slots)
        }

        /// The fee for the next appeal of `dispute_id`.
        pub fn appeal_cost(
            dispute_id: DisputeId,
            _extra_data: &[u8],
        ) -> Result<BalanceOf<T>, DispatchError> {
            let dispute = Self::dispute(dispute_id)?;
            let slots = Self::next_session_slots(&dispute)?;
            Self::cost_of(dispute.fee_per_juror, slots)
        }

        /// The ruling the dispute would receive if it were repartitioned now.
        pub fn current_ruling(dispute_id: DisputeId) -> Result<Ruling, DispatchError> {
            let dispute = Self::dispute(dispute_id)?;
            if let Some(outcome) = dispute.repartition {
                return Ok(outcome.ruling);
            }
            Ok(Self::tally(&Self::session_draws(dispute_id, &dispute)).winner())
        }

        pub(crate) fn dispute(dispute_id: DisputeId) -> Result<DisputeInfo<T>, DispatchError> {
            Ok(Disputes::<T>::get(dispute_id).ok_or(Error::<T>::DisputeNotFound)?)
        }

        fn cost_of(fee: BalanceOf<T>, slots: u32) -> Result<BalanceOf<T>, DispatchError> {
            Ok(fee.checked_mul(&slots.into()).ok_or(ArithmeticError::Overflow)?)
        }

        // Slot count requested by an arbitrable application through `extra_data`.
        fn initial_slots(
            parameters: &CourtParametersOf<T>,
            extra_data: &[u8],
        ) -> Result<u32, DispatchError> {
            let requested = extra_data
                .get(..4)
                .and_then(|bytes| <[u8; 4]>::try_from(bytes).ok())
                .map(u32::from_le_bytes)
                .unwrap_or(0);
            let slots = if requested == 0 { parameters.default_slots } else { requested };
            ensure!(slots <= T::MaxDrawsPerSession::get(), Error::<T>::TooManySlots);
            Ok(slots)
        }

        fn next_session_slots(dispute: &DisputeInfo<T>) -> Result<u32, DispatchError> {
            let parameters = Parameters::<T>::get();
            let max_appeals = parameters.max_appeals.min(T::MaxAppeals::get());
            ensure!(dispute.appeals() < max_appeals, Error::<T>::AppealDepthExceeded);
            let latest = dispute.latest_session().ok_or(Error::<T>::Unexpected)?;
            let slots = parameters.next_slots(latest.slots).ok_or(ArithmeticError::Overflow)?;
            ensure!(slots <= T::MaxDrawsPerSession::get(), Error::<T>::TooManySlots);
            Ok(slots)
        }

        fn schedule(term: TermIndex, dispute_id: DisputeId) -> DispatchResult {
            TermDisputes::<T>::try_mutate(term, |dispute_ids| {
                dispute_ids
                    .try_push(dispute_id)
                    .map_err(|_| DispatchError::from(Error::<T>::TooManyDisputes))
            })
        }

        // Disputes created or appealed during activation are drawn in the current term; later on
        // the activation snapshot is already taken.
        fn next_draw_term() -> Result<TermIndex, DispatchError> {
            let term = CurrentTerm::<T>::get();
            if CurrentPeriod::<T>::get() == Period::Activation {
                return Ok(term);
            }
            Ok(term.checked_add(1).ok_or(ArithmeticError::Overflow)?)
        }

        fn with_execution_lock<R, F>(f: F) -> Result<R, DispatchError>
        where
            F: FnOnce() -> Result<R, DispatchError>,
        {
            ExecutionLock::<T>::put(true);
            let result = f();
            ExecutionLock::<T>::kill();
            result
        }

        #[require_transactional]
        pub(crate) fn do_deposit(
            who: T::AccountId,
            amount: BalanceOf<T>,
            data: &[u8],
        ) -> DispatchResult {
            ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);

            T::Currency::transfer(
                &who,
                &Self::court_account(),
                amount,
                ExistenceRequirement::AllowDeath,
            )?;
            Self::credit_stake(&who, amount)?;

            Self::deposit_event(Event::StakeDeposited { who: who.clone(), amount });

            if let Err(error) = T::StakeDepositObserver::on_stake_deposited(&who, amount, data) {
                log::warn!(
                    target: LOG_TARGET,
                    "Stake deposit observer failed for {:?}: {:?}",
                    who,
                    error,
                );
            }

            Ok(())
        }

        #[require_transactional]
        fn do_activate_tokens(who: T::AccountId, amount: BalanceOf<T>) -> DispatchResult {
            ensure!(CurrentPeriod::<T>::get() == Period::Activation, Error::<T>::InvalidPeriod);
            let min_activated_token = Parameters::<T>::get().min_activated_token;
            ensure!(amount >= min_activated_token, Error::<T>::ActivationBelowMinimum);
            ensure!(!Activations::<T>::contains_key(&who), Error::<T>::AlreadyActivated);
            let weight: u128 = amount
                .checked_div(&min_activated_token)
                .ok_or(ArithmeticError::DivisionByZero)?
                .saturated_into();

            Self::lock_stake(&who, amount)?;
            ActivationSegments::<T>::try_mutate(|segments| -> DispatchResult {
                let start = draw::total_weight(segments);
                let end = start.checked_add(weight).ok_or(ArithmeticError::Overflow)?;
                segments
                    .try_push(ActivationSegment { juror: who.clone(), start, end })
                    .map_err(|_| Error::<T>::TooManyActivations)?;
                Ok(())
            })?;
            Activations::<T>::insert(&who, amount);

            let term = CurrentTerm::<T>::get();
            Self::deposit_event(Event::TokensActivated { juror: who, amount, weight, term });

            Ok(())
        }

        #[require_transactional]
        pub(crate) fn do_pass_period() -> Result<(u32, u32), DispatchError> {
            let period = CurrentPeriod::<T>::get();
            let now = T::Timestamp::now();
            let elapsed = now.saturating_sub(LastPeriodChange::<T>::get());
            let duration = Parameters::<T>::get().durations.of(period);
            ensure!(elapsed >= duration, Error::<T>::PeriodNotElapsed);

            let mut term = CurrentTerm::<T>::get();
            let mut drawn = (0, 0);
            let next = match period {
                Period::Draw => match Self::draw_term(term)? {
                    DrawOutcome::Drawn { disputes, slots } => {
                        drawn = (disputes, slots);
                        Period::Vote
                    }
                    DrawOutcome::Stalled => {
                        log::warn!(
                            target: LOG_TARGET,
                            "Nobody activated stake for the disputes of term {:?}",
                            term,
                        );
                        Self::deposit_event(Event::DrawStalled { term });
                        Period::Activation
                    }
                },
                Period::Execution => {
                    term = term.checked_add(1).ok_or(ArithmeticError::Overflow)?;
                    CurrentTerm::<T>::put(term);
                    Period::Activation
                }
                _ => period.next(),
            };
            CurrentPeriod::<T>::put(next);
            LastPeriodChange::<T>::put(now);

            log::info!(target: LOG_TARGET, "Term {:?}: {:?} -> {:?}", term, period, next);
            Self::deposit_event(Event::NewPeriod { period: next, term });

            Ok(drawn)
        }

        fn term_seed(term: TermIndex) -> Result<[u8; 32], DispatchError> {
            let subject = (DRAW_SUBJECT, term).encode();
            let (random_hash, _) = T::Random::random(&subject);
            let mut seed = [0; 32];
            for (byte, el) in random_hash.as_ref().iter().copied().zip(seed.iter_mut()) {
                *el = byte
            }
            ensure!(seed != [0; 32], Error::<T>::RandomNumberNotReady);
            Ok(seed)
        }

        #[require_transactional]
        fn draw_term(term: TermIndex) -> Result<DrawOutcome, DispatchError> {
            let dispute_ids = TermDisputes::<T>::get(term);
            let segments = ActivationSegments::<T>::get();
            let mut slots = 0u32;
            if !dispute_ids.is_empty() {
                if draw::total_weight(&segments) == 0 {
                    return Ok(DrawOutcome::Stalled);
                }
                let seed = Self::term_seed(term)?;
                for dispute_id in dispute_ids.iter() {
                    let drawn = Self::draw_session(*dispute_id, &segments, &seed)?;
                    slots = slots.max(drawn);
                }
            }
            TermDisputes::<T>::remove(term);
            Self::release_activations()?;
            Ok(DrawOutcome::Drawn { disputes: dispute_ids.len() as u32, slots })
        }

        // Draws the latest session of `dispute_id` and locks the stake of every slot out of the
        // drawn juror's activation.
        fn draw_session(
            dispute_id: DisputeId,
            segments: &[ActivationSegment<T::AccountId>],
            seed: &[u8; 32],
        ) -> Result<u32, DispatchError> {
            let mut dispute = Self::dispute(dispute_id)?;
            let session_index = dispute.latest_session_index();
            let session = dispute.latest_session().copied().ok_or(Error::<T>::Unexpected)?;
            if session.drawn {
                return Ok(0);
            }

            let jurors =
                draw::draw_slots(segments, seed, dispute_id, session_index, session.slots)
                    .map_err(Error::<T>::from)?;
            let stake_per_draw = dispute.stake_per_draw;
            let mut draws = Vec::with_capacity(jurors.len());
            for juror in jurors {
                let locked = Activations::<T>::try_mutate(
                    &juror,
                    |remaining| -> Result<BalanceOf<T>, DispatchError> {
                        let remaining = remaining.as_mut().ok_or(Error::<T>::Unexpected)?;
                        let locked = (*remaining).min(stake_per_draw);
                        *remaining = remaining.saturating_sub(locked);
                        Ok(locked)
                    },
                )?;
                draws.push(DrawInfo { juror, vote: None, locked });
            }
            let slots = draws.len() as u32;
            let draws = DrawsOf::<T>::try_from(draws).map_err(|_| Error::<T>::TooManySlots)?;
            Draws::<T>::insert(dispute_id, session_index, draws);

            if let Some(session) = dispute.sessions.last_mut() {
                session.drawn = true;
            }
            Disputes::<T>::insert(dispute_id, dispute);

            log::debug!(
                target: LOG_TARGET,
                "Drew {} slots for session {} of dispute {}",
                slots,
                session_index,
                dispute_id,
            );
            Self::deposit_event(Event::JurorsDrawn { dispute_id, session: session_index, slots });

            Ok(slots)
        }

        // The activation snapshot of a term is consumed by its draw. Stake which wasn't locked by
        // any slot becomes free again.
        fn release_activations() -> DispatchResult {
            for (juror, remaining) in Activations::<T>::drain() {
                if !remaining.is_zero() {
                    Self::unlock_stake(&juror, remaining)?;
                }
            }
            ActivationSegments::<T>::kill();
            Ok(())
        }

        #[require_transactional]
        pub(crate) fn do_create_dispute(
            who: T::AccountId,
            choices: u32,
            extra_data: ExtraDataOf<T>,
            max_fee: BalanceOf<T>,
        ) -> Result<DisputeId, DispatchError> {
            ensure!(choices >= 2, Error::<T>::InvalidChoiceCount);
            let parameters = Parameters::<T>::get();
            let slots = Self::initial_slots(&parameters, &extra_data)?;
            let cost = Self::cost_of(parameters.fee_per_juror, slots)?;
            ensure!(cost <= max_fee, Error::<T>::PaymentMismatch);

            T::Currency::transfer(
                &who,
                &Self::court_account(),
                cost,
                ExistenceRequirement::AllowDeath,
            )?;

            let dispute_id = NextDisputeId::<T>::get();
            let next_dispute_id = dispute_id.checked_add(1).ok_or(ArithmeticError::Overflow)?;
            let term = Self::next_draw_term()?;
            let session = SessionInfo { term, slots, drawn: false, appealed: false };
            let sessions = BoundedVec::truncate_from(alloc::vec![session]);
            let dispute = DisputeInfo {
                arbitrated: who.clone(),
                choices,
                extra_data,
                sessions,
                stake_per_draw: parameters.stake_per_draw(),
                fee_per_juror: parameters.fee_per_juror,
                status: DisputeStatus::Open,
                repartition: None,
            };
            Self::schedule(term, dispute_id)?;
            Disputes::<T>::insert(dispute_id, dispute);
            NextDisputeId::<T>::put(next_dispute_id);

            Self::deposit_event(Event::DisputeCreated {
                dispute_id,
                arbitrated: who,
                choices,
                slots,
                term,
                cost,
            });

            Ok(dispute_id)
        }

        #[require_transactional]
        fn do_vote_ruling(
            who: T::AccountId,
            dispute_id: DisputeId,
            ruling: Ruling,
            slot_indices: &[u32],
        ) -> DispatchResult {
            let dispute = Self::dispute(dispute_id)?;
            ensure!(CurrentPeriod::<T>::get() == Period::Vote, Error::<T>::InvalidPeriod);
            let (session_index, session) = dispute
                .session_in_term(CurrentTerm::<T>::get())
                .map(|(index, session)| (index, *session))
                .ok_or(Error::<T>::InvalidPeriod)?;
            ensure!(session.drawn, Error::<T>::InvalidPeriod);
            ensure!(ruling <= dispute.choices, Error::<T>::InvalidRuling);
            ensure!(!slot_indices.is_empty(), Error::<T>::NoSlots);

            Draws::<T>::try_mutate(dispute_id, session_index, |draws| -> DispatchResult {
                for slot in slot_indices {
                    let draw =
                        draws.get_mut(*slot as usize).ok_or(Error::<T>::SlotOutOfRange)?;
                    ensure!(draw.juror == who, Error::<T>::NotOwner);
                    ensure!(draw.vote.is_none(), Error::<T>::AlreadyVoted);
                    draw.vote = Some(ruling);
                }
                Ok(())
            })?;

            let slots = slot_indices.len() as u32;
            let reward = Self::cost_of(dispute.fee_per_juror, slots)?;
            T::Currency::transfer(
                &Self::court_account(),
                &who,
                reward,
                ExistenceRequirement::AllowDeath,
            )?;

            Self::deposit_event(Event::VoteCast {
                dispute_id,
                session: session_index,
                juror: who,
                ruling,
                slots,
                reward,
            });

            Ok(())
        }

        #[require_transactional]
        pub(crate) fn do_appeal(
            who: T::AccountId,
            dispute_id: DisputeId,
            max_fee: BalanceOf<T>,
        ) -> DispatchResult {
            let mut dispute = Self::dispute(dispute_id)?;
            ensure!(CurrentPeriod::<T>::get() == Period::Appeal, Error::<T>::InvalidPeriod);
            let term = CurrentTerm::<T>::get();
            let (session_index, session) = dispute
                .session_in_term(term)
                .map(|(index, session)| (index, *session))
                .ok_or(Error::<T>::InvalidPeriod)?;
            ensure!(!session.appealed, Error::<T>::AlreadyAppealed);
            let slots = Self::next_session_slots(&dispute)?;
            let cost = Self::cost_of(dispute.fee_per_juror, slots)?;
            ensure!(cost <= max_fee, Error::<T>::PaymentMismatch);

            T::Currency::transfer(
                &who,
                &Self::court_account(),
                cost,
                ExistenceRequirement::AllowDeath,
            )?;

            let next_term = term.checked_add(1).ok_or(ArithmeticError::Overflow)?;
            if let Some(session) = dispute.sessions.get_mut(session_index as usize) {
                session.appealed = true;
            }
            dispute
                .sessions
                .try_push(SessionInfo { term: next_term, slots, drawn: false, appealed: false })
                .map_err(|_| Error::<T>::AppealDepthExceeded)?;
            let new_session = dispute.latest_session_index();
            Self::schedule(next_term, dispute_id)?;
            Disputes::<T>::insert(dispute_id, dispute);

            Self::deposit_event(Event::AppealRaised {
                dispute_id,
                appellant: who,
                session: new_session,
                slots,
                term: next_term,
                cost,
            });

            Ok(())
        }

        fn session_draws(dispute_id: DisputeId, dispute: &DisputeInfo<T>) -> Vec<DrawsOf<T>> {
            (0..dispute.sessions.len() as SessionIndex)
                .map(|session| Draws::<T>::get(dispute_id, session))
                .collect()
        }

        fn tally(session_draws: &[DrawsOf<T>]) -> Tally {
            let latest = session_draws.len().saturating_sub(1);
            let mut tally = Tally::default();
            for (index, draws) in session_draws.iter().enumerate() {
                for ruling in draws.iter().filter_map(|draw| draw.vote) {
                    tally.add(ruling, index == latest);
                }
            }
            tally
        }

        #[require_transactional]
        pub(crate) fn do_one_shot_token_repartition(
            dispute_id: DisputeId,
        ) -> Result<u32, DispatchError> {
            ensure!(!ExecutionLock::<T>::get(), Error::<T>::ReentrancyBlocked);
            let mut dispute = Self::dispute(dispute_id)?;
            ensure!(dispute.status == DisputeStatus::Open, Error::<T>::AlreadyExecuted);
            ensure!(CurrentPeriod::<T>::get() == Period::Execution, Error::<T>::InvalidPeriod);
            let latest = dispute.latest_session().copied().ok_or(Error::<T>::Unexpected)?;
            ensure!(
                latest.drawn && latest.term <= CurrentTerm::<T>::get(),
                Error::<T>::InvalidPeriod
            );

            Self::with_execution_lock(|| Self::repartition(dispute_id, &mut dispute))
        }

        // Returns the number of settled slots.
        fn repartition(
            dispute_id: DisputeId,
            dispute: &mut DisputeInfo<T>,
        ) -> Result<u32, DispatchError> {
            let session_draws = Self::session_draws(dispute_id, dispute);
            let ruling = Self::tally(&session_draws).winner();
            let pot = Self::pot_account(dispute_id);
            let treasury = Self::treasury_account();

            let mut penalty_pool = BalanceOf::<T>::zero();
            let mut coherent_slots = 0u32;
            let mut abstentions = 0u32;
            let mut settled = 0u32;
            for draw in session_draws.iter().flatten() {
                settled = settled.saturating_add(1);
                if draw.vote == Some(ruling) {
                    Self::unlock_stake(&draw.juror, draw.locked)?;
                    coherent_slots = coherent_slots.saturating_add(1);
                } else {
                    Self::transfer_stake(&draw.juror, &pot, draw.locked)?;
                    penalty_pool =
                        penalty_pool.checked_add(&draw.locked).ok_or(ArithmeticError::Overflow)?;
                    if draw.vote.is_none() {
                        abstentions = abstentions.saturating_add(1);
                    }
                }
            }

            let reward_per_slot =
                penalty_pool.checked_div(&coherent_slots.into()).unwrap_or_else(Zero::zero);
            if !reward_per_slot.is_zero() {
                let coherent = session_draws.iter().flatten().filter(|d| d.vote == Some(ruling));
                for draw in coherent {
                    Self::pay_stake(&pot, &draw.juror, reward_per_slot)?;
                }
            }
            let distributed = reward_per_slot.saturating_mul(coherent_slots.into());
            let dust = penalty_pool.saturating_sub(distributed);
            if !dust.is_zero() {
                Self::pay_stake(&pot, &treasury, dust)?;
            }

            let unpaid_fees = Self::cost_of(dispute.fee_per_juror, abstentions)?;
            if !unpaid_fees.is_zero() {
                T::Currency::transfer(
                    &Self::court_account(),
                    &treasury,
                    unpaid_fees,
                    ExistenceRequirement::AllowDeath,
                )?;
            }

            let outcome =
                RepartitionOutcome { ruling, penalty_pool, coherent_slots, reward_per_slot, dust };
            dispute.status = DisputeStatus::Executable;
            dispute.repartition = Some(outcome);
            Disputes::<T>::insert(dispute_id, &*dispute);

            log::debug!(
                target: LOG_TARGET,
                "Repartitioned dispute {}: {:?}",
                dispute_id,
                outcome,
            );
            Self::deposit_event(Event::TokensRepartitioned { dispute_id, outcome });

            Ok(settled)
        }

        #[require_transactional]
        pub(crate) fn do_execute_ruling(dispute_id: DisputeId) -> Result<Ruling, DispatchError> {
            ensure!(!ExecutionLock::<T>::get(), Error::<T>::ReentrancyBlocked);
            let mut dispute = Self::dispute(dispute_id)?;
            let ruling = match (dispute.status, dispute.repartition) {
                (DisputeStatus::Executed, _) => return Err(Error::<T>::AlreadyExecuted.into()),
                (DisputeStatus::Executable, Some(outcome)) => outcome.ruling,
                _ => return Err(Error::<T>::RulingNotRepartitioned.into()),
            };
            dispute.status = DisputeStatus::Executed;
            Disputes::<T>::insert(dispute_id, &dispute);

            Self::with_execution_lock(|| {
                T::Arbitrable::rule(&dispute.arbitrated, dispute_id, ruling)
            })?;

            Self::deposit_event(Event::RulingExecuted { dispute_id, ruling });

            Ok(ruling)
        }
    }

    impl<T: Config> ArbitratorApi for Pallet<T> {
        type AccountId = T::AccountId;
        type Balance = BalanceOf<T>;
        type DisputeId = DisputeId;
        type Ruling = Ruling;

        #[transactional]
        fn create_dispute(
            who: &Self::AccountId,
            choices: u32,
            extra_data: &[u8],
            max_fee: Self::Balance,
        ) -> Result<Self::DisputeId, DispatchError> {
            let extra_data = ExtraDataOf::<T>::try_from(extra_data.to_vec())
                .map_err(|_| Error::<T>::ExtraDataTooLong)?;
            Self::do_create_dispute(who.clone(), choices, extra_data, max_fee)
        }

        fn arbitration_cost(extra_data: &[u8]) -> Result<Self::Balance, DispatchError> {
            Self::arbitration_cost(extra_data)
        }

        fn appeal_cost(
            dispute_id: Self::DisputeId,
            extra_data: &[u8],
        ) -> Result<Self::Balance, DispatchError> {
            Self::appeal_cost(dispute_id, extra_data)
        }

        fn current_ruling(dispute_id: Self::DisputeId) -> Result<Self::Ruling, DispatchError> {
            Self::current_ruling(dispute_id)
        }
    }

    impl<T: Config> TokenApprovalReceiver for Pallet<T> {
        type AccountId = T::AccountId;
        type Balance = BalanceOf<T>;

        #[transactional]
        fn on_token_approval(
            from: &Self::AccountId,
            amount: Self::Balance,
            data: &[u8],
        ) -> DispatchResult {
            Self::do_deposit(from.clone(), amount, data)
        }
    }
}
