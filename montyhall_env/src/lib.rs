//! Monty Hall Environment Abstraction Layer
//!
//! Decides where randomness comes from, so the game logic never reaches for
//! a global generator.
//!
//! - **Seeded** ([`SeededContext`]): every stream derived from one 64-bit
//!   seed, so any run can be replayed from its seed number.
//! - **Entropy** ([`EntropyContext`]): fresh OS entropy for ad-hoc runs.
//!
//! # Example
//!
//! ```ignore
//! use montyhall_env::{GameContext, SeededContext};
//!
//! let ctx = SeededContext::new(42);
//! let mut rng = ctx.trial_rng(7);
//! let trial = montyhall_core::simulate_trial(&mut rng);
//! ```

mod context;
mod entropy_impl;
mod seeded;

pub use context::{derive_seed, GameContext};
pub use entropy_impl::EntropyContext;
pub use seeded::SeededContext;
