//! Error types for the Monty Hall game model.

use thiserror::Error;

/// Errors raised when building game values from untrusted input.
///
/// Contract violations inside the game functions themselves (for example
/// switching away from the door the host just opened) are programming
/// errors and panic instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Door number outside 1..=3
    #[error("Invalid door: {0} (expected 1, 2 or 3)")]
    InvalidDoor(u8),
    
    /// Assignment does not hide exactly one car
    #[error("Malformed assignment: expected exactly one car, found {cars}")]
    MalformedAssignment { cars: usize },
    
    /// Host reveal that no legal game could produce
    #[error("Invalid reveal: door {opened} cannot be opened when door {pick} is picked")]
    InvalidReveal { pick: u8, opened: u8 },

    /// A batch needs at least one trial
    #[error("Batch size must be at least 1")]
    EmptyBatch,
}
