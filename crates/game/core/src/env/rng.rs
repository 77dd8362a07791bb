//! RNG oracle for deterministic random number generation.
//!
//! Damage variance and item selection draw from a trait-based RNG so that a
//! session replays identically given the same seed and the same commands.
//! Each roll derives its own seed from the game seed, the action nonce and a
//! per-roll context value (see [`compute_seed`]).

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Generate a random value in range [min, max] inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = u64::from(max - min) + 1;
        min + (u64::from(self.next_u32(seed)) % span) as u32
    }

    /// Pick an index in `0..len`. Returns `None` for an empty collection.
    fn pick_index(&self, seed: u64, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some((u64::from(self.next_u32(seed)) % len as u64) as usize)
    }
}

/// PCG random number generator (PCG-XSH-RR, 32-bit output from 64-bit state).
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// `state' = (state * multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::pcg_output(Self::pcg_step(seed))
    }
}

/// Roll contexts, so one action can make several independent draws.
pub mod context {
    pub const DAMAGE_ROLL: u32 = 0;
    pub const ITEM_PICK: u32 = 1;
}

/// Compute a deterministic per-roll seed.
///
/// * `game_seed` - Base seed fixed when the `Game` is created
/// * `nonce` - Action sequence number within the session
/// * `context` - Distinguishes multiple rolls in the same action
pub fn compute_seed(game_seed: u64, nonce: u64, context: u32) -> u64 {
    let mut hash = game_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= u64::from(context).wrapping_mul(0x85ebca6b);

    // avalanche
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pcg_is_deterministic() {
        let rng = PcgRng;
        assert_eq!(rng.next_u32(42), rng.next_u32(42));
        assert_ne!(rng.next_u32(42), rng.next_u32(43));
    }

    #[test]
    fn range_stays_inside_bounds() {
        let rng = PcgRng;
        for nonce in 0..500 {
            let roll = rng.range(compute_seed(7, nonce, context::DAMAGE_ROLL), 1, 10);
            assert!((1..=10).contains(&roll));
        }
    }

    #[test]
    fn range_covers_every_value() {
        let rng = PcgRng;
        let mut seen = [false; 10];
        for nonce in 0..1_000 {
            let roll = rng.range(compute_seed(99, nonce, context::DAMAGE_ROLL), 1, 10);
            seen[(roll - 1) as usize] = true;
        }
        assert!(seen.iter().all(|hit| *hit));
    }

    #[test]
    fn degenerate_range_returns_min() {
        assert_eq!(PcgRng.range(123, 4, 4), 4);
        assert_eq!(PcgRng.range(123, 9, 2), 9);
    }

    #[test]
    fn pick_index_handles_empty_collections() {
        assert_eq!(PcgRng.pick_index(5, 0), None);
        for seed in 0..100 {
            let idx = PcgRng.pick_index(seed, 5);
            assert!(matches!(idx, Some(i) if i < 5));
        }
    }

    #[test]
    fn contexts_produce_distinct_seeds() {
        assert_ne!(
            compute_seed(1, 1, context::DAMAGE_ROLL),
            compute_seed(1, 1, context::ITEM_PICK)
        );
    }
}
