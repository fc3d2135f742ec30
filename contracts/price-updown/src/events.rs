use soroban_sdk::{contractevent, Address, BytesN, Vec};

use crate::types::{Direction, Outcome};

#[contractevent]
pub struct Initialized {
    pub admin: Address,
    pub oracle: Address,
    pub token: Address,
}

#[contractevent]
pub struct RoundScheduleSet {
    pub round_start: u64,
    pub round_cycle_secs: u64,
    pub staking_cutoff_secs: u64,
}

#[contractevent]
pub struct BonusCycleSet {
    pub bonus_cycle_secs: u64,
}

#[contractevent]
pub struct BonusWinnerCountSet {
    pub bonus_winner_count: u32,
}

#[contractevent]
pub struct FeeRatioSet {
    pub fee_per_mille: u32,
}

#[contractevent]
pub struct OracleSet {
    pub oracle: Address,
}

#[contractevent]
pub struct Staked {
    #[topic]
    pub round: u64,
    #[topic]
    pub participant: Address,
    pub direction: Direction,
    pub amount: i128,
}

#[contractevent]
pub struct PriceAdmitted {
    #[topic]
    pub round: u64,
    pub price: i128,
    pub is_open: bool,
}

#[contractevent]
pub struct WinnerPaid {
    #[topic]
    pub round: u64,
    #[topic]
    pub to: Address,
    pub amount: i128,
}

#[contractevent]
pub struct RoundFinalized {
    #[topic]
    pub round: u64,
    pub outcome: Outcome,
    pub paid_out: i128,
    pub retained: i128,
}

#[contractevent]
pub struct RoundVoided {
    #[topic]
    pub round: u64,
    pub refunded: i128,
}

#[contractevent]
pub struct BonusDrawn {
    #[topic]
    pub draw_id: u32,
    pub cycle: u64,
    pub seed: BytesN<32>,
    pub winners: Vec<Address>,
}

#[contractevent]
pub struct FeesWithdrawn {
    #[topic]
    pub to: Address,
    pub amount: i128,
}
