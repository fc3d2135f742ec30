//! Stellarcade Price Up/Down Contract
//!
//! Round-based price prediction. Time is cut into fixed-length rounds
//! starting at `round_start`; participants stake SEP-41 tokens on whether
//! the reference price goes up or down over a round. The oracle admits an
//! open price while the round runs and a close price once it has ended.
//! Finalizing a priced round pays the winning side its principal plus a
//! pro-rata share of the losing pool net of the protocol fee.
//!
//! ## Round Lifecycle
//! 1. Round `n` opens at `round_start + n * round_cycle_secs`. It is never
//!    created explicitly; an untouched round reads as empty.
//! 2. Oracle calls `set_price_index(.., is_open = true)` during the round.
//! 3. Participants call `stake_in` until `staking_cutoff_secs` before the end.
//! 4. After the end, oracle calls `set_price_index(.., n, is_open = false)`.
//! 5. Anyone calls `finalize(n)` (or `finalize_due`) exactly once.
//!
//! ## Payout
//! `fee = losing_pool * fee_per_mille / 1000` (rounded down). Each winner
//! receives `stake + stake * (losing_pool - fee) / winning_pool`, rounded
//! down. Equal prices are a push: every stake is refunded and no fee is
//! taken. The fee, rounding remainders and pools forfeited when nobody
//! backed the winning side accrue to the protocol balance.
//!
//! ## Bonus Draw
//! On its own cycle the admin draws `bonus_winner_count` distinct stakers
//! seen since the previous draw, using a caller-supplied seed. The draw only
//! selects and records winners.
//!
//! ## Storage Strategy
//! - `instance()`: Admin, Oracle, Token, Config, bonus epoch and sweep
//!   positions. Small fixed-size contract state.
//! - `persistent()`: per-round ledger, stakes, settlements, bonus pools and
//!   draws, plus the protocol balance. Rounds are never removed.
#![no_std]
#![allow(unexpected_cfgs)]

use soroban_sdk::{
    contract, contracterror, contractimpl, token::TokenClient, Address, BytesN, Env, Vec,
};

mod bonus;
mod events;
mod settlement;
mod storage;
mod types;

pub use types::{
    BonusDrawRecord, DataKey, Direction, GameConfig, Outcome, RoundData, Settlement, StakeEntry,
};

use events::{
    BonusCycleSet, BonusDrawn, BonusWinnerCountSet, FeeRatioSet, FeesWithdrawn, Initialized,
    OracleSet, PriceAdmitted, RoundFinalized, RoundScheduleSet, RoundVoided, Staked, WinnerPaid,
};
use shared::{round_bounds, round_number, PER_MILLE_DIVISOR};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Persistent storage TTL in ledgers (~30 days at 5 s/ledger).
pub const PERSISTENT_BUMP_LEDGERS: u32 = 518_400;

/// Upper bound on rounds inspected by a single `finalize_due` call.
pub const MAX_SWEEP_ROUNDS: u64 = 32;

// ---------------------------------------------------------------------------
// Error Types
// ---------------------------------------------------------------------------

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized       = 1,
    NotInitialized           = 2,
    Unauthorized             = 3,
    InvalidConfiguration     = 4,
    /// Stake amount is zero or negative.
    ZeroAmount               = 5,
    StakingWindowClosed      = 6,
    RoundAlreadyPriced       = 7,
    PriceAlreadySet          = 8,
    RoundNotYetEnded         = 9,
    RoundNotEligible         = 10,
    AlreadyFinalized         = 11,
    InsufficientParticipants = 12,
    /// `now` is before `round_start`; there is no current round.
    ScheduleNotStarted       = 13,
    /// Participant already holds a stake on the other side of this round.
    OppositeDirection        = 14,
    InvalidPrice             = 15,
    /// A bonus draw was already made in the current bonus cycle.
    BonusDrawNotDue          = 16,
    /// Both prices are in; the round must be finalized, not voided.
    RoundFullyPriced         = 17,
    InvalidAmount            = 18,
    InsufficientFees         = 19,
    Overflow                 = 20,
    /// Open prices are only admitted while staking is still open.
    OpenPriceWindowClosed    = 21,
}

// ---------------------------------------------------------------------------
// Contract
// ---------------------------------------------------------------------------

#[contract]
pub struct PriceUpDown;

#[contractimpl]
impl PriceUpDown {
    // -----------------------------------------------------------------------
    // init
    // -----------------------------------------------------------------------

    /// Initialize the game. May only be called once.
    ///
    /// `oracle` feeds prices alongside the admin. `token` is the SEP-41
    /// contract every stake and payout moves through.
    pub fn init(
        env: Env,
        admin: Address,
        oracle: Address,
        token: Address,
        config: GameConfig,
    ) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();
        validate_config(&config)?;

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::Oracle, &oracle);
        env.storage().instance().set(&DataKey::Token, &token);
        storage::set_config(&env, &config);
        storage::set_accrued_fees(&env, 0);

        Initialized { admin, oracle, token }.publish(&env);

        Ok(())
    }

    // -----------------------------------------------------------------------
    // configuration
    // -----------------------------------------------------------------------

    /// Set when round 0 opens, the round length and the staking cutoff.
    /// Applies to every round not yet finalized.
    pub fn set_round_schedule(
        env: Env,
        admin: Address,
        round_start: u64,
        round_cycle_secs: u64,
        staking_cutoff_secs: u64,
    ) -> Result<(), Error> {
        require_admin(&env, &admin)?;

        let mut config = storage::get_config(&env)?;
        config.round_start = round_start;
        config.round_cycle_secs = round_cycle_secs;
        config.staking_cutoff_secs = staking_cutoff_secs;
        validate_config(&config)?;
        storage::set_config(&env, &config);

        RoundScheduleSet {
            round_start,
            round_cycle_secs,
            staking_cutoff_secs,
        }
        .publish(&env);

        Ok(())
    }

    pub fn set_bonus_cycle(env: Env, admin: Address, bonus_cycle_secs: u64) -> Result<(), Error> {
        require_admin(&env, &admin)?;

        let mut config = storage::get_config(&env)?;
        config.bonus_cycle_secs = bonus_cycle_secs;
        validate_config(&config)?;
        storage::set_config(&env, &config);

        BonusCycleSet { bonus_cycle_secs }.publish(&env);

        Ok(())
    }

    pub fn set_bonus_winner_count(
        env: Env,
        admin: Address,
        bonus_winner_count: u32,
    ) -> Result<(), Error> {
        require_admin(&env, &admin)?;

        let mut config = storage::get_config(&env)?;
        config.bonus_winner_count = bonus_winner_count;
        validate_config(&config)?;
        storage::set_config(&env, &config);

        BonusWinnerCountSet { bonus_winner_count }.publish(&env);

        Ok(())
    }

    /// Set the protocol fee on losing pools, in parts-per-thousand.
    pub fn set_fee_ratio(env: Env, admin: Address, fee_per_mille: u32) -> Result<(), Error> {
        require_admin(&env, &admin)?;

        let mut config = storage::get_config(&env)?;
        config.fee_per_mille = fee_per_mille;
        validate_config(&config)?;
        storage::set_config(&env, &config);

        FeeRatioSet { fee_per_mille }.publish(&env);

        Ok(())
    }

    /// Rotate the price feeder. Admin only.
    pub fn set_oracle(env: Env, admin: Address, oracle: Address) -> Result<(), Error> {
        require_admin(&env, &admin)?;

        env.storage().instance().set(&DataKey::Oracle, &oracle);
        storage::bump_instance(&env);

        OracleSet { oracle }.publish(&env);

        Ok(())
    }

    // -----------------------------------------------------------------------
    // stake_in
    // -----------------------------------------------------------------------

    /// Stake `amount` tokens on `direction` in the round running now.
    ///
    /// Repeated stakes in the same direction accumulate. A stake on the
    /// opposite side of an existing one is rejected. The tokens stay in the
    /// contract until the round is finalized or voided.
    pub fn stake_in(
        env: Env,
        participant: Address,
        direction: Direction,
        amount: i128,
    ) -> Result<(), Error> {
        if amount <= 0 {
            return Err(Error::ZeroAmount);
        }

        let config = storage::get_config(&env)?;
        let now = env.ledger().timestamp();
        let round = current_round_number(&config, now)?;
        let (_, round_end) = bounds(&config, round)?;

        let mut data = storage::get_round(&env, round);
        if data.finalized {
            return Err(Error::AlreadyFinalized);
        }
        if data.close_price.is_some() {
            return Err(Error::RoundAlreadyPriced);
        }
        if now >= round_end.saturating_sub(config.staking_cutoff_secs) {
            return Err(Error::StakingWindowClosed);
        }

        participant.require_auth();

        let existing = storage::get_stake(&env, round, &participant);
        let entry = match existing {
            Some(ref prev) if prev.direction != direction => {
                return Err(Error::OppositeDirection);
            }
            Some(ref prev) => StakeEntry {
                direction,
                amount: prev.amount.checked_add(amount).ok_or(Error::Overflow)?,
            },
            None => StakeEntry { direction, amount },
        };

        match direction {
            Direction::Up => {
                data.up_pool = data.up_pool.checked_add(amount).ok_or(Error::Overflow)?;
            }
            Direction::Down => {
                data.down_pool = data.down_pool.checked_add(amount).ok_or(Error::Overflow)?;
            }
        }

        let token = storage::get_token(&env)?;
        TokenClient::new(&env, &token).transfer(
            &participant,
            env.current_contract_address(),
            &amount,
        );

        storage::set_round(&env, round, &data);
        storage::set_stake(&env, round, &participant, &entry);
        if existing.is_none() {
            let mut stakers = storage::get_stakers(&env, round);
            stakers.push_back(participant.clone());
            storage::set_stakers(&env, round, &stakers);
        }
        storage::enter_bonus_pool(&env, &participant);

        Staked {
            round,
            participant,
            direction,
            amount,
        }
        .publish(&env);

        Ok(())
    }

    // -----------------------------------------------------------------------
    // set_price_index
    // -----------------------------------------------------------------------

    /// Admit a price. Admin or oracle only.
    ///
    /// With `is_open` the price is the open price of the round running now
    /// and `round_number` is ignored (callers pass 0); it is only admitted
    /// before the staking cutoff. Otherwise it is the
    /// close price of `round_number`, which must have ended. Each slot is
    /// write-once; there is no correction path.
    pub fn set_price_index(
        env: Env,
        caller: Address,
        price: i128,
        round_number: u64,
        is_open: bool,
    ) -> Result<(), Error> {
        require_operator(&env, &caller)?;

        if price <= 0 {
            return Err(Error::InvalidPrice);
        }

        let config = storage::get_config(&env)?;
        let now = env.ledger().timestamp();

        let round = if is_open {
            current_round_number(&config, now)?
        } else {
            round_number
        };
        let mut data = storage::get_round(&env, round);

        if is_open {
            if data.finalized {
                return Err(Error::AlreadyFinalized);
            }
            let (_, round_end) = bounds(&config, round)?;
            if now >= round_end.saturating_sub(config.staking_cutoff_secs) {
                return Err(Error::OpenPriceWindowClosed);
            }
            if data.open_price.is_some() {
                return Err(Error::PriceAlreadySet);
            }
            data.open_price = Some(price);
        } else {
            let (_, round_end) = bounds(&config, round)?;
            if now < round_end {
                return Err(Error::RoundNotYetEnded);
            }
            if data.finalized {
                return Err(Error::AlreadyFinalized);
            }
            if data.close_price.is_some() {
                return Err(Error::PriceAlreadySet);
            }
            data.close_price = Some(price);
        }

        storage::set_round(&env, round, &data);

        PriceAdmitted {
            round,
            price,
            is_open,
        }
        .publish(&env);

        Ok(())
    }

    // -----------------------------------------------------------------------
    // finalize
    // -----------------------------------------------------------------------

    /// Settle a round and pay its winners. Anyone may call this; the outcome
    /// depends only on stored prices and stakes.
    ///
    /// Fails with `AlreadyFinalized` on replay, so a retried call can never
    /// pay twice.
    pub fn finalize(env: Env, round_number: u64) -> Result<Settlement, Error> {
        let config = storage::get_config(&env)?;
        let now = env.ledger().timestamp();
        let data = storage::get_round(&env, round_number);

        if data.finalized {
            return Err(Error::AlreadyFinalized);
        }
        let (open_price, close_price) = match (data.open_price, data.close_price) {
            (Some(open), Some(close)) => (open, close),
            _ => return Err(Error::RoundNotEligible),
        };
        let (_, round_end) = bounds(&config, round_number)?;
        if now < round_end {
            return Err(Error::RoundNotEligible);
        }

        let outcome = settlement::decide_outcome(open_price, close_price);
        settle(&env, round_number, data, outcome, config.fee_per_mille, now)
    }

    /// Finalize eligible ended rounds, inspecting at most
    /// `MAX_SWEEP_ROUNDS` rounds per call.
    ///
    /// Two positions are kept. The cursor is the lowest round that may still
    /// need settling; it moves past rounds that are finalized or ended
    /// without a single stake, and a staked round still waiting for a price
    /// holds it. The scan position is where the previous call stopped, so
    /// repeated calls walk past a held cursor and wrap back to it once they
    /// reach the current round. Returns the round numbers finalized by this
    /// call.
    pub fn finalize_due(env: Env) -> Result<Vec<u64>, Error> {
        let config = storage::get_config(&env)?;
        let now = env.ledger().timestamp();
        let mut finalized = Vec::new(&env);

        // Rounds strictly below `current` have ended.
        let current = match round_number(now, config.round_start, config.round_cycle_secs) {
            Some(n) => n,
            None => return Ok(finalized),
        };

        let mut cursor = storage::get_sweep_cursor(&env);
        let mut scan = storage::get_sweep_scan(&env).max(cursor);
        if scan >= current {
            scan = cursor;
        }
        let stop = current.min(scan.saturating_add(MAX_SWEEP_ROUNDS));
        let mut cursor_blocked = scan != cursor;

        for round in scan..stop {
            let data = storage::get_round(&env, round);

            let settled = match (data.finalized, data.open_price, data.close_price) {
                (true, _, _) => true,
                (false, Some(open), Some(close)) => {
                    let outcome = settlement::decide_outcome(open, close);
                    settle(&env, round, data, outcome, config.fee_per_mille, now)?;
                    finalized.push_back(round);
                    true
                }
                _ => data.total_staked().ok_or(Error::Overflow)? == 0,
            };

            if !settled {
                cursor_blocked = true;
            }
            if !cursor_blocked {
                cursor = round + 1;
            }
        }

        storage::set_sweep_cursor(&env, cursor);
        storage::set_sweep_scan(&env, stop);

        Ok(finalized)
    }

    // -----------------------------------------------------------------------
    // void_round
    // -----------------------------------------------------------------------

    /// Refund every stake of an ended round that is missing a price. Admin
    /// only. The round is marked finalized with outcome `Void`.
    pub fn void_round(env: Env, admin: Address, round_number: u64) -> Result<Settlement, Error> {
        require_admin(&env, &admin)?;

        let config = storage::get_config(&env)?;
        let now = env.ledger().timestamp();
        let data = storage::get_round(&env, round_number);

        if data.finalized {
            return Err(Error::AlreadyFinalized);
        }
        let (_, round_end) = bounds(&config, round_number)?;
        if now < round_end {
            return Err(Error::RoundNotYetEnded);
        }
        if data.open_price.is_some() && data.close_price.is_some() {
            return Err(Error::RoundFullyPriced);
        }

        let refunded = data.total_staked().ok_or(Error::Overflow)?;
        let record = settle(&env, round_number, data, Outcome::Void, 0, now)?;

        RoundVoided {
            round: round_number,
            refunded,
        }
        .publish(&env);

        Ok(record)
    }

    // -----------------------------------------------------------------------
    // bonus_draw
    // -----------------------------------------------------------------------

    /// Draw `bonus_winner_count` distinct stakers seen since the last draw.
    /// Admin only; at most one draw per bonus cycle.
    ///
    /// Winner `i` is derived from `sha256(seed || draw_id || i)`, so anyone
    /// holding the stored seed can re-derive the selection.
    pub fn bonus_draw(env: Env, admin: Address, seed: BytesN<32>) -> Result<Vec<Address>, Error> {
        require_admin(&env, &admin)?;

        let config = storage::get_config(&env)?;
        let now = env.ledger().timestamp();
        let cycle = round_number(now, config.round_start, config.bonus_cycle_secs)
            .ok_or(Error::ScheduleNotStarted)?;

        if let Some(last) = storage::get_last_bonus_cycle(&env) {
            if cycle <= last {
                return Err(Error::BonusDrawNotDue);
            }
        }

        let draw_id = storage::get_bonus_epoch(&env);
        let entrants = storage::get_bonus_pool(&env, draw_id);
        let winners =
            bonus::select_winners(&env, &seed, draw_id, &entrants, config.bonus_winner_count)?;

        let record = BonusDrawRecord {
            cycle,
            seed: seed.clone(),
            entrants: entrants.len(),
            winners: winners.clone(),
        };
        storage::set_bonus_draw(&env, draw_id, &record);
        storage::set_bonus_epoch(&env, draw_id.checked_add(1).ok_or(Error::Overflow)?);
        storage::set_last_bonus_cycle(&env, cycle);
        storage::bump_instance(&env);

        BonusDrawn {
            draw_id,
            cycle,
            seed,
            winners: winners.clone(),
        }
        .publish(&env);

        Ok(winners)
    }

    // -----------------------------------------------------------------------
    // withdraw_fees
    // -----------------------------------------------------------------------

    /// Transfer `amount` of the protocol balance to `to`. Admin only.
    pub fn withdraw_fees(env: Env, admin: Address, to: Address, amount: i128) -> Result<(), Error> {
        require_admin(&env, &admin)?;

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let accrued = storage::get_accrued_fees(&env);
        if amount > accrued {
            return Err(Error::InsufficientFees);
        }

        // Debit before the external transfer.
        let remaining = accrued.checked_sub(amount).ok_or(Error::Overflow)?;
        storage::set_accrued_fees(&env, remaining);

        let token = storage::get_token(&env)?;
        TokenClient::new(&env, &token).transfer(&env.current_contract_address(), &to, &amount);

        FeesWithdrawn { to, amount }.publish(&env);

        Ok(())
    }

    // -----------------------------------------------------------------------
    // read model
    // -----------------------------------------------------------------------

    pub fn get_config(env: Env) -> Result<GameConfig, Error> {
        storage::get_config(&env)
    }

    pub fn round_start(env: Env) -> Result<u64, Error> {
        Ok(storage::get_config(&env)?.round_start)
    }

    pub fn round_cycle(env: Env) -> Result<u64, Error> {
        Ok(storage::get_config(&env)?.round_cycle_secs)
    }

    pub fn staking_cutoff(env: Env) -> Result<u64, Error> {
        Ok(storage::get_config(&env)?.staking_cutoff_secs)
    }

    pub fn bonus_cycle(env: Env) -> Result<u64, Error> {
        Ok(storage::get_config(&env)?.bonus_cycle_secs)
    }

    pub fn bonus_winner_count(env: Env) -> Result<u32, Error> {
        Ok(storage::get_config(&env)?.bonus_winner_count)
    }

    pub fn fee_ratio(env: Env) -> Result<u32, Error> {
        Ok(storage::get_config(&env)?.fee_per_mille)
    }

    pub fn admin(env: Env) -> Result<Address, Error> {
        storage::get_admin(&env)
    }

    pub fn oracle(env: Env) -> Result<Address, Error> {
        storage::get_oracle(&env)
    }

    /// Round number at the current ledger time.
    pub fn current_round(env: Env) -> Result<u64, Error> {
        let config = storage::get_config(&env)?;
        current_round_number(&config, env.ledger().timestamp())
    }

    /// `(open_price, close_price, up_pool, down_pool, finalized)` of a round.
    pub fn get_round(env: Env, round_number: u64) -> RoundData {
        storage::get_round(&env, round_number)
    }

    pub fn get_stake(env: Env, round_number: u64, participant: Address) -> Option<StakeEntry> {
        storage::get_stake(&env, round_number, &participant)
    }

    pub fn get_stakers(env: Env, round_number: u64) -> Vec<Address> {
        storage::get_stakers(&env, round_number)
    }

    pub fn get_settlement(env: Env, round_number: u64) -> Option<Settlement> {
        storage::get_settlement(&env, round_number)
    }

    pub fn accrued_fees(env: Env) -> i128 {
        storage::get_accrued_fees(&env)
    }

    /// Distinct stakers eligible for the next bonus draw.
    pub fn bonus_pool(env: Env) -> Vec<Address> {
        storage::get_bonus_pool(&env, storage::get_bonus_epoch(&env))
    }

    pub fn get_bonus_draw(env: Env, draw_id: u32) -> Option<BonusDrawRecord> {
        storage::get_bonus_draw(&env, draw_id)
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Verify that `caller` is the stored admin and has signed the invocation.
fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
    let admin = storage::get_admin(env)?;
    caller.require_auth();
    if caller != &admin {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

/// Price feeders: the admin or the registered oracle.
fn require_operator(env: &Env, caller: &Address) -> Result<(), Error> {
    let admin = storage::get_admin(env)?;
    let oracle = storage::get_oracle(env)?;
    caller.require_auth();
    if caller != &admin && caller != &oracle {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

fn validate_config(config: &GameConfig) -> Result<(), Error> {
    if config.round_cycle_secs == 0
        || config.staking_cutoff_secs >= config.round_cycle_secs
        || config.bonus_cycle_secs == 0
        || config.bonus_winner_count == 0
        || config.fee_per_mille > PER_MILLE_DIVISOR
    {
        return Err(Error::InvalidConfiguration);
    }
    Ok(())
}

fn current_round_number(config: &GameConfig, now: u64) -> Result<u64, Error> {
    round_number(now, config.round_start, config.round_cycle_secs).ok_or(Error::ScheduleNotStarted)
}

fn bounds(config: &GameConfig, round: u64) -> Result<(u64, u64), Error> {
    round_bounds(config.round_start, config.round_cycle_secs, round).ok_or(Error::Overflow)
}

/// Pay out a round under `outcome` and freeze it.
///
/// All state (round, settlement record, protocol balance) is written before
/// the token transfers.
fn settle(
    env: &Env,
    round: u64,
    mut data: RoundData,
    outcome: Outcome,
    fee_per_mille: u32,
    now: u64,
) -> Result<Settlement, Error> {
    let split = settlement::split_pools(outcome, data.up_pool, data.down_pool, fee_per_mille)?;
    let total_staked = data.total_staked().ok_or(Error::Overflow)?;

    let stakers = storage::get_stakers(env, round);
    let mut payouts: Vec<(Address, i128)> = Vec::new(env);
    let mut paid_out = 0i128;

    for participant in stakers.iter() {
        let stake = storage::get_stake(env, round, &participant).ok_or(Error::Overflow)?;
        let amount = settlement::payout(&split, &stake)?;
        if amount > 0 {
            paid_out = paid_out.checked_add(amount).ok_or(Error::Overflow)?;
            payouts.push_back((participant, amount));
        }
    }

    let retained = total_staked.checked_sub(paid_out).ok_or(Error::Overflow)?;
    if retained < 0 {
        return Err(Error::Overflow);
    }

    let record = Settlement {
        outcome,
        winning_pool: split.winning_pool,
        losing_pool: split.losing_pool,
        fee: split.fee,
        dust: retained.checked_sub(split.fee).ok_or(Error::Overflow)?,
        paid_out,
        settled_at: now,
    };

    data.finalized = true;
    storage::set_round(env, round, &data);
    storage::set_settlement(env, round, &record);
    if retained > 0 {
        let accrued = storage::get_accrued_fees(env)
            .checked_add(retained)
            .ok_or(Error::Overflow)?;
        storage::set_accrued_fees(env, accrued);
    }

    if !payouts.is_empty() {
        let token = TokenClient::new(env, &storage::get_token(env)?);
        for (to, amount) in payouts.iter() {
            token.transfer(&env.current_contract_address(), &to, &amount);
            WinnerPaid { round, to, amount }.publish(env);
        }
    }

    RoundFinalized {
        round,
        outcome,
        paid_out,
        retained,
    }
    .publish(env);

    Ok(record)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
