//! Seeded context for reproducible runs.

use crate::context::{derive_seed, GameContext};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Context whose every stream is a pure function of the master seed.
///
/// - `rng()` is ChaCha8 seeded directly from the master seed
/// - `trial_rng(i)` is ChaCha8 seeded from `derive_seed(seed, i + 1)`, so
///   trial streams never coincide with the batch stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeededContext {
    /// Master seed for this run
    seed: u64,
}

impl SeededContext {
    /// Creates a new SeededContext with the given seed.
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
    
    /// Returns a context for a sibling run (e.g. the next seed in a sweep).
    pub fn offset(&self, offset: u64) -> Self {
        Self::new(self.seed.wrapping_add(offset))
    }
}

impl GameContext for SeededContext {
    fn rng(&self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.seed)
    }
    
    fn trial_rng(&self, index: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(derive_seed(self.seed, index.wrapping_add(1)))
    }
    
    fn seed(&self) -> u64 {
        self.seed
    }
}
