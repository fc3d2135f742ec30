//! Storage keys and ledger records for the Price Up/Down contract.

use soroban_sdk::{contracttype, Address, BytesN, Vec};

/// Discriminants for all storage keys.
///
/// Instance keys: roles, token, config and cursors. One ledger entry.
/// Persistent keys: per-round and per-draw records, each with their own TTL.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    // --- instance() ---
    Admin,
    Oracle,
    Token,
    Config,
    /// Draw counter; the current bonus pool is `BonusPool(BonusEpoch)`.
    BonusEpoch,
    /// Bonus cycle index of the most recent draw.
    LastBonusCycle,
    /// Lowest round `finalize_due` still has to look at.
    SweepCursor,
    /// Round the next `finalize_due` call resumes scanning from.
    SweepScan,
    // --- persistent() ---
    /// Protocol balance: fees, rounding dust and forfeited pools.
    AccruedFees,
    Round(u64),
    Stake(u64, Address),
    /// Distinct stakers of a round in first-stake order.
    RoundStakers(u64),
    Settlement(u64),
    BonusPool(u32),
    BonusEntrant(u32, Address),
    BonusDraw(u32),
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Direction {
    Up = 0,
    Down = 1,
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Outcome {
    Up = 0,
    Down = 1,
    /// Open price equals close price; every stake is returned.
    Push = 2,
    /// A price never arrived; every stake is returned.
    Void = 3,
}

/// Operator-set parameters. All durations are in seconds.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameConfig {
    /// Unix timestamp at which round 0 opens.
    pub round_start: u64,
    pub round_cycle_secs: u64,
    /// Staking closes this many seconds before a round ends.
    pub staking_cutoff_secs: u64,
    pub bonus_cycle_secs: u64,
    pub bonus_winner_count: u32,
    /// Protocol fee on the losing pool, in parts-per-thousand.
    pub fee_per_mille: u32,
}

/// Per-round ledger entry. A round that was never written reads as `empty()`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundData {
    pub open_price: Option<i128>,
    pub close_price: Option<i128>,
    pub up_pool: i128,
    pub down_pool: i128,
    pub finalized: bool,
}

impl RoundData {
    pub fn empty() -> Self {
        RoundData {
            open_price: None,
            close_price: None,
            up_pool: 0,
            down_pool: 0,
            finalized: false,
        }
    }

    pub fn total_staked(&self) -> Option<i128> {
        self.up_pool.checked_add(self.down_pool)
    }
}

/// A participant's accumulated stake in one round.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeEntry {
    pub direction: Direction,
    pub amount: i128,
}

/// Audit record written once when a round is finalized or voided.
///
/// `paid_out + fee + dust == up_pool + down_pool` of the round.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Settlement {
    pub outcome: Outcome,
    pub winning_pool: i128,
    pub losing_pool: i128,
    pub fee: i128,
    /// Everything else the protocol kept: rounding remainder, or the whole
    /// distributable pool when nobody backed the winning side.
    pub dust: i128,
    pub paid_out: i128,
    pub settled_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BonusDrawRecord {
    /// Bonus cycle index the draw was made in.
    pub cycle: u64,
    pub seed: BytesN<32>,
    pub entrants: u32,
    pub winners: Vec<Address>,
}
