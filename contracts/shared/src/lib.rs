//! Shared utilities and data structures for Stellarcade contracts.
//!
//! Round indexing, per-mille fee math, pro-rata shares and seeded bounded
//! draws. Everything here is pure integer arithmetic so game contracts can
//! settle value without rounding drift.
#![no_std]
#![allow(unexpected_cfgs)]

use soroban_sdk::{contracttype, Bytes, BytesN, Env};

/// Common math error codes used across all contracts.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum MathError {
    InvalidAmount = 1,
    InvalidRatio = 2,
    Overflow = 3,
    ZeroDivisor = 4,
}

/// Fee ratios are expressed in parts-per-thousand (e.g., 100 = 10%).
pub const PER_MILLE_DIVISOR: u32 = 1_000;

/// Helper to calculate a fee from an amount and a per-mille ratio.
///
/// Rounds down, so the fee never exceeds the exact fractional value.
pub fn calculate_fee(amount: i128, fee_per_mille: u32) -> Result<i128, MathError> {
    if amount < 0 {
        return Err(MathError::InvalidAmount);
    }
    if fee_per_mille > PER_MILLE_DIVISOR {
        return Err(MathError::InvalidRatio);
    }
    amount
        .checked_mul(fee_per_mille as i128)
        .and_then(|v| v.checked_div(PER_MILLE_DIVISOR as i128))
        .ok_or(MathError::Overflow)
}

/// `floor(stake * distributable / pool)`.
///
/// Summing this over every stake of a pool never exceeds `distributable`;
/// the caller accounts for the remainder.
pub fn pro_rata_share(stake: i128, pool: i128, distributable: i128) -> Result<i128, MathError> {
    if stake < 0 || distributable < 0 || stake > pool {
        return Err(MathError::InvalidAmount);
    }
    if pool == 0 {
        return Err(MathError::ZeroDivisor);
    }
    stake
        .checked_mul(distributable)
        .and_then(|v| v.checked_div(pool))
        .ok_or(MathError::Overflow)
}

/// Index of the fixed-length cycle containing `now`.
///
/// `None` before `start` or for a zero-length cycle.
pub fn round_number(now: u64, start: u64, cycle_secs: u64) -> Option<u64> {
    if cycle_secs == 0 {
        return None;
    }
    now.checked_sub(start).map(|elapsed| elapsed / cycle_secs)
}

/// `(start, end)` timestamps of cycle `n`; the end is exclusive.
pub fn round_bounds(start: u64, cycle_secs: u64, n: u64) -> Option<(u64, u64)> {
    let round_start = n.checked_mul(cycle_secs)?.checked_add(start)?;
    let round_end = round_start.checked_add(cycle_secs)?;
    Some((round_start, round_end))
}

/// Derive a value in `[0, bound)` from a seed and two counters.
///
/// Preimage: `seed (32 bytes) || draw_id (8 bytes BE) || step (4 bytes BE)`.
/// The first 8 bytes of the SHA-256 digest, read big-endian, are reduced
/// modulo `bound`.
pub fn derive_bounded(
    env: &Env,
    seed: &BytesN<32>,
    draw_id: u64,
    step: u32,
    bound: u64,
) -> Result<u64, MathError> {
    if bound == 0 {
        return Err(MathError::ZeroDivisor);
    }

    let mut preimage = [0u8; 44];
    preimage[..32].copy_from_slice(&seed.to_array());
    preimage[32..40].copy_from_slice(&draw_id.to_be_bytes());
    preimage[40..].copy_from_slice(&step.to_be_bytes());

    let digest: BytesN<32> = env.crypto().sha256(&Bytes::from_slice(env, &preimage)).into();
    let arr = digest.to_array();
    let raw = u64::from_be_bytes([arr[0], arr[1], arr[2], arr[3], arr[4], arr[5], arr[6], arr[7]]);
    Ok(raw % bound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_rounds_down() {
        // 10% of 25 is 2.5
        assert_eq!(calculate_fee(25, 100), Ok(2));
        assert_eq!(calculate_fee(20_000_000, 100), Ok(2_000_000));
        assert_eq!(calculate_fee(0, 100), Ok(0));
        assert_eq!(calculate_fee(1_000, 1_000), Ok(1_000));
    }

    #[test]
    fn test_fee_rejects_bad_inputs() {
        assert_eq!(calculate_fee(-1, 100), Err(MathError::InvalidAmount));
        assert_eq!(calculate_fee(100, 1_001), Err(MathError::InvalidRatio));
        assert_eq!(calculate_fee(i128::MAX, 1_000), Err(MathError::Overflow));
    }

    #[test]
    fn test_pro_rata_share_never_over_distributes() {
        // Three equal stakes splitting 10: 3 + 3 + 3, one unit of dust.
        let shares = [
            pro_rata_share(5, 15, 10).unwrap(),
            pro_rata_share(5, 15, 10).unwrap(),
            pro_rata_share(5, 15, 10).unwrap(),
        ];
        assert_eq!(shares, [3, 3, 3]);
        assert!(shares.iter().sum::<i128>() <= 10);

        assert_eq!(pro_rata_share(15, 15, 10), Ok(10));
        assert_eq!(pro_rata_share(0, 15, 10), Ok(0));
    }

    #[test]
    fn test_pro_rata_share_rejects_bad_inputs() {
        assert_eq!(pro_rata_share(1, 0, 10), Err(MathError::InvalidAmount));
        assert_eq!(pro_rata_share(0, 0, 10), Err(MathError::ZeroDivisor));
        assert_eq!(pro_rata_share(-1, 10, 10), Err(MathError::InvalidAmount));
    }

    #[test]
    fn test_round_number() {
        assert_eq!(round_number(1_000, 1_000, 240), Some(0));
        assert_eq!(round_number(1_239, 1_000, 240), Some(0));
        assert_eq!(round_number(1_240, 1_000, 240), Some(1));
        assert_eq!(round_number(999, 1_000, 240), None);
        assert_eq!(round_number(5_000, 1_000, 0), None);
    }

    #[test]
    fn test_round_bounds() {
        assert_eq!(round_bounds(1_000, 240, 0), Some((1_000, 1_240)));
        assert_eq!(round_bounds(1_000, 240, 3), Some((1_720, 1_960)));
        assert_eq!(round_bounds(1, u64::MAX, 1), None);
    }

    #[test]
    fn test_derive_bounded_in_range_and_deterministic() {
        let env = Env::default();
        let seed = BytesN::from_array(&env, &[7u8; 32]);

        for step in 0u32..16 {
            let a = derive_bounded(&env, &seed, 1, step, 5).unwrap();
            let b = derive_bounded(&env, &seed, 1, step, 5).unwrap();
            assert!(a < 5);
            assert_eq!(a, b);
        }
        assert_eq!(derive_bounded(&env, &seed, 1, 0, 0), Err(MathError::ZeroDivisor));
    }
}
