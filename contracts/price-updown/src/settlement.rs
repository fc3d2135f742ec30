//! Settlement math for a priced round.
//!
//! Pure integer arithmetic over the round's pools; no storage access. The
//! contract computes a [`Split`] once per round and then asks [`payout`] for
//! each recorded stake.
//!
//! Rounding always goes down per participant. Whatever the winners do not
//! receive (fee, remainder, or the whole distributable pool when nobody
//! backed the winning side) is retained by the protocol, so
//! `sum(payouts) + retained == up_pool + down_pool`.

use shared::{calculate_fee, pro_rata_share};

use crate::types::{Direction, Outcome, StakeEntry};
use crate::Error;

pub fn decide_outcome(open_price: i128, close_price: i128) -> Outcome {
    if close_price > open_price {
        Outcome::Up
    } else if close_price < open_price {
        Outcome::Down
    } else {
        Outcome::Push
    }
}

/// Pool figures derived once per round.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Split {
    pub outcome: Outcome,
    pub winning_pool: i128,
    pub losing_pool: i128,
    pub fee: i128,
    /// Losing pool net of fee, shared pro-rata among winners.
    pub distributable: i128,
}

pub fn split_pools(
    outcome: Outcome,
    up_pool: i128,
    down_pool: i128,
    fee_per_mille: u32,
) -> Result<Split, Error> {
    let (winning_pool, losing_pool) = match outcome {
        Outcome::Up => (up_pool, down_pool),
        Outcome::Down => (down_pool, up_pool),
        Outcome::Push | Outcome::Void => {
            return Ok(Split {
                outcome,
                winning_pool: 0,
                losing_pool: 0,
                fee: 0,
                distributable: 0,
            })
        }
    };

    let fee = calculate_fee(losing_pool, fee_per_mille).map_err(|_| Error::Overflow)?;
    let distributable = losing_pool.checked_sub(fee).ok_or(Error::Overflow)?;

    Ok(Split {
        outcome,
        winning_pool,
        losing_pool,
        fee,
        distributable,
    })
}

/// Amount owed to the holder of `stake` under `split`.
pub fn payout(split: &Split, stake: &StakeEntry) -> Result<i128, Error> {
    let winning = match split.outcome {
        Outcome::Push | Outcome::Void => return Ok(stake.amount),
        Outcome::Up => Direction::Up,
        Outcome::Down => Direction::Down,
    };
    if stake.direction != winning {
        return Ok(0);
    }

    let share = pro_rata_share(stake.amount, split.winning_pool, split.distributable)
        .map_err(|_| Error::Overflow)?;
    stake.amount.checked_add(share).ok_or(Error::Overflow)
}
