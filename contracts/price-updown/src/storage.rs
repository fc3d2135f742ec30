//! Typed accessors over instance and persistent storage.
//!
//! Every persistent write bumps the entry's TTL so round history and bonus
//! draws stay readable for auditing.

use soroban_sdk::{Address, Env, Vec};

use crate::types::{BonusDrawRecord, DataKey, GameConfig, RoundData, Settlement, StakeEntry};
use crate::{Error, PERSISTENT_BUMP_LEDGERS};

// ---------------------------------------------------------------------------
// Roles and config
// ---------------------------------------------------------------------------

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn get_admin(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::NotInitialized)
}

pub fn get_oracle(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Oracle)
        .ok_or(Error::NotInitialized)
}

pub fn get_token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(Error::NotInitialized)
}

pub fn get_config(env: &Env) -> Result<GameConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn set_config(env: &Env, config: &GameConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(PERSISTENT_BUMP_LEDGERS, PERSISTENT_BUMP_LEDGERS);
}

// ---------------------------------------------------------------------------
// Round ledger
// ---------------------------------------------------------------------------

pub fn get_round(env: &Env, round: u64) -> RoundData {
    env.storage()
        .persistent()
        .get(&DataKey::Round(round))
        .unwrap_or_else(RoundData::empty)
}

pub fn set_round(env: &Env, round: u64, data: &RoundData) {
    set_persistent(env, &DataKey::Round(round), data);
}

pub fn get_stake(env: &Env, round: u64, participant: &Address) -> Option<StakeEntry> {
    env.storage()
        .persistent()
        .get(&DataKey::Stake(round, participant.clone()))
}

pub fn set_stake(env: &Env, round: u64, participant: &Address, entry: &StakeEntry) {
    set_persistent(env, &DataKey::Stake(round, participant.clone()), entry);
}

pub fn get_stakers(env: &Env, round: u64) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::RoundStakers(round))
        .unwrap_or_else(|| Vec::new(env))
}

pub fn set_stakers(env: &Env, round: u64, stakers: &Vec<Address>) {
    set_persistent(env, &DataKey::RoundStakers(round), stakers);
}

pub fn get_settlement(env: &Env, round: u64) -> Option<Settlement> {
    env.storage().persistent().get(&DataKey::Settlement(round))
}

pub fn set_settlement(env: &Env, round: u64, settlement: &Settlement) {
    set_persistent(env, &DataKey::Settlement(round), settlement);
}

pub fn get_sweep_cursor(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::SweepCursor)
        .unwrap_or(0)
}

pub fn set_sweep_cursor(env: &Env, cursor: u64) {
    env.storage().instance().set(&DataKey::SweepCursor, &cursor);
}

pub fn get_sweep_scan(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::SweepScan)
        .unwrap_or(0)
}

pub fn set_sweep_scan(env: &Env, scan: u64) {
    env.storage().instance().set(&DataKey::SweepScan, &scan);
}

// ---------------------------------------------------------------------------
// Protocol balance
// ---------------------------------------------------------------------------

pub fn get_accrued_fees(env: &Env) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::AccruedFees)
        .unwrap_or(0)
}

pub fn set_accrued_fees(env: &Env, value: i128) {
    set_persistent(env, &DataKey::AccruedFees, &value);
}

// ---------------------------------------------------------------------------
// Bonus draw
// ---------------------------------------------------------------------------

pub fn get_bonus_epoch(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::BonusEpoch)
        .unwrap_or(0)
}

pub fn set_bonus_epoch(env: &Env, epoch: u32) {
    env.storage().instance().set(&DataKey::BonusEpoch, &epoch);
}

pub fn get_last_bonus_cycle(env: &Env) -> Option<u64> {
    env.storage().instance().get(&DataKey::LastBonusCycle)
}

pub fn set_last_bonus_cycle(env: &Env, cycle: u64) {
    env.storage().instance().set(&DataKey::LastBonusCycle, &cycle);
}

pub fn get_bonus_pool(env: &Env, epoch: u32) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::BonusPool(epoch))
        .unwrap_or_else(|| Vec::new(env))
}

/// Add `participant` to the current bonus pool unless already entered.
pub fn enter_bonus_pool(env: &Env, participant: &Address) {
    let epoch = get_bonus_epoch(env);
    let flag = DataKey::BonusEntrant(epoch, participant.clone());
    if env.storage().persistent().has(&flag) {
        return;
    }
    set_persistent(env, &flag, &());

    let mut pool = get_bonus_pool(env, epoch);
    pool.push_back(participant.clone());
    set_persistent(env, &DataKey::BonusPool(epoch), &pool);
}

pub fn get_bonus_draw(env: &Env, draw_id: u32) -> Option<BonusDrawRecord> {
    env.storage().persistent().get(&DataKey::BonusDraw(draw_id))
}

pub fn set_bonus_draw(env: &Env, draw_id: u32, record: &BonusDrawRecord) {
    set_persistent(env, &DataKey::BonusDraw(draw_id), record);
}

// ---------------------------------------------------------------------------
// Internal
// ---------------------------------------------------------------------------

/// Write a persistent entry and extend its TTL in one step.
fn set_persistent<V>(env: &Env, key: &DataKey, value: &V)
where
    V: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    env.storage().persistent().set(key, value);
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_BUMP_LEDGERS, PERSISTENT_BUMP_LEDGERS);
}
