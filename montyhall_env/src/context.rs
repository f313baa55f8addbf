//! Core randomness context trait for the simulator.

use rand_chacha::ChaCha8Rng;

/// Source of random streams for games.
///
/// # Implementations
///
/// - **Seeded**: `SeededContext` - ChaCha8 streams derived from a master seed
/// - **Entropy**: `EntropyContext` - ChaCha8 streams seeded from the OS
///
/// # Streams
///
/// A batch played from one stream uses [`rng`](GameContext::rng). Runs that
/// spread trials across threads take one stream per trial from
/// [`trial_rng`](GameContext::trial_rng), so the result does not depend on
/// how trials are scheduled.
pub trait GameContext: Send + Sync {
    /// Returns a generator for a single-stream batch.
    fn rng(&self) -> ChaCha8Rng;
    
    /// Returns the generator for trial `index`.
    ///
    /// Seeded implementations must return the same stream for the same
    /// `(seed, index)` regardless of how many trials the run contains.
    fn trial_rng(&self, index: u64) -> ChaCha8Rng;
    
    /// Returns the context's seed (for logging/replay).
    ///
    /// Unseeded contexts return 0.
    fn seed(&self) -> u64;
}

/// Mixes a master seed with a salt into an independent sub-seed.
pub fn derive_seed(master: u64, salt: u64) -> u64 {
    master
        .wrapping_mul(0x9e3779b97f4a7c15) // Golden ratio prime
        .wrapping_add(salt.wrapping_mul(0x517cc1b727220a95))
}
