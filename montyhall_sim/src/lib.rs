//! Monty Hall Monte Carlo Harness
//!
//! Plays batches of trials on top of `montyhall_core`, judges them against
//! exact probabilities, and renders the results.
//!
//! # Core Principle: Seeded Streams
//!
//! All randomness comes from a [`GameContext`](montyhall_env::GameContext):
//! - **Batch**: one generator for a whole single-stream batch
//! - **Trial**: one generator per trial index, so parallel and sequential
//!   runs of the same seed produce the same rows
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────┐
//! │                    BatchRunner                     │
//! │   GameContext ──► trial_rng(i) ──► simulate_trial  │
//! │                          │                         │
//! │                   BatchResult (2n rows)            │
//! │                          │                         │
//! │                  ContingencyTable                  │
//! │            ┌─────────────┴────────────┐            │
//! │         Oracle                   TableRenderer     │
//! │   (exact probabilities)        (text / JSON)       │
//! └────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use montyhall_sim::{BatchRunner, RunConfig};
//! use montyhall_env::SeededContext;
//!
//! let result = BatchRunner::new(RunConfig::default())
//!     .with_trials(10_000)
//!     .run(&SeededContext::new(42))?;
//! assert!(result.passed);
//! ```

mod error;
mod exporter;
mod oracle;
pub mod report;
mod runner;

pub use error::SimError;
pub use exporter::SimExport;
pub use oracle::{Oracle, StrategyCheck, Verdict};
pub use report::{JsonRenderer, TableRenderer, TextRenderer};
pub use runner::{play_and_report, BatchRunner, RunConfig, RunMetrics, RunResult};
