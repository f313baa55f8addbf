//! Monty Hall Core - Game logic for the three-door puzzle
//!
//! A contestant picks one of three doors, one hiding a car and two hiding
//! goats. The host, who knows where the car is, opens a goat door the
//! contestant did not pick. The contestant then stays or switches.
//!
//! This crate holds the pure pieces of that game:
//! 1. **Setup**: a uniformly shuffled [`GameAssignment`]
//! 2. **Play**: pick, host reveal, decision, verdict ([`game`])
//! 3. **Aggregation**: trials and batches tabulated into a [`ContingencyTable`]
//!
//! Every function that needs randomness takes the generator as an argument,
//! so a seeded generator reproduces a run exactly.
//!
//! ```ignore
//! use montyhall_core::{play_n_games, Strategy};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let batch = play_n_games(10_000, &mut rng)?;
//! let table = batch.contingency().proportions();
//! println!("switch wins {:.2}", table.win_rate(Strategy::Switch));
//! ```

pub mod batch;
pub mod door;
pub mod error;
pub mod game;
pub mod stats;
pub mod trial;

// Re-export key types for convenience
pub use batch::{play_n_games, BatchResult, DEFAULT_TRIALS};
pub use door::{DoorContent, DoorPosition, GameAssignment, Outcome, Strategy};
pub use error::GameError;
pub use game::{change_door, change_door_flag, create_game, determine_winner, open_goat_door, select_door};
pub use stats::{ContingencyTable, OutcomeCounts, OutcomeProportions, ProportionTable};
pub use trial::{play_game, simulate_trial, Trial, TrialResult};
