//! Seeded selection of bonus winners.
//!
//! A partial Fisher–Yates shuffle over the entrant list: step `i` swaps slot
//! `i` with a slot drawn from `[i, len)`, so the first `count` slots are a
//! uniform sample without replacement. Every step's draw is re-derivable
//! from the stored seed and draw id.

use shared::derive_bounded;
use soroban_sdk::{Address, BytesN, Env, Vec};

use crate::Error;

pub fn select_winners(
    env: &Env,
    seed: &BytesN<32>,
    draw_id: u32,
    entrants: &Vec<Address>,
    count: u32,
) -> Result<Vec<Address>, Error> {
    let len = entrants.len();
    if count > len {
        return Err(Error::InsufficientParticipants);
    }

    let mut slots = entrants.clone();
    let mut winners = Vec::new(env);

    for i in 0..count {
        let remaining = (len - i) as u64;
        let offset = derive_bounded(env, seed, draw_id as u64, i, remaining)
            .map_err(|_| Error::Overflow)?;
        let j = i + offset as u32;

        let picked = slots.get(j).ok_or(Error::Overflow)?;
        let current = slots.get(i).ok_or(Error::Overflow)?;
        slots.set(j, current);
        slots.set(i, picked.clone());
        winners.push_back(picked);
    }

    Ok(winners)
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::Address as _;

    fn entrants(env: &Env, n: u32) -> Vec<Address> {
        let mut v = Vec::new(env);
        for _ in 0..n {
            v.push_back(Address::generate(env));
        }
        v
    }

    #[test]
    fn test_winners_are_distinct_entrants() {
        let env = Env::default();
        let pool = entrants(&env, 10);
        let seed = BytesN::from_array(&env, &[3u8; 32]);

        let winners = select_winners(&env, &seed, 0, &pool, 4).unwrap();
        assert_eq!(winners.len(), 4);

        for i in 0..winners.len() {
            let w = winners.get_unchecked(i);
            assert!(pool.iter().any(|p| p == w));
            for j in (i + 1)..winners.len() {
                assert_ne!(w, winners.get_unchecked(j));
            }
        }
    }

    #[test]
    fn test_selection_is_deterministic_per_seed() {
        let env = Env::default();
        let pool = entrants(&env, 6);
        let seed = BytesN::from_array(&env, &[9u8; 32]);

        let first = select_winners(&env, &seed, 2, &pool, 3).unwrap();
        let second = select_winners(&env, &seed, 2, &pool, 3).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_whole_pool_drawn_when_count_equals_len() {
        let env = Env::default();
        let pool = entrants(&env, 3);
        let seed = BytesN::from_array(&env, &[1u8; 32]);

        let winners = select_winners(&env, &seed, 0, &pool, 3).unwrap();
        assert_eq!(winners.len(), 3);
        for p in pool.iter() {
            assert!(winners.iter().any(|w| w == p));
        }
    }

    #[test]
    fn test_count_above_pool_rejected() {
        let env = Env::default();
        let pool = entrants(&env, 2);
        let seed = BytesN::from_array(&env, &[0u8; 32]);

        assert_eq!(
            select_winners(&env, &seed, 0, &pool, 3),
            Err(Error::InsufficientParticipants)
        );
    }
}
