//! Error types for the simulator harness.

use montyhall_core::GameError;
use thiserror::Error;

/// Errors that can occur while running, rendering or exporting a batch.
#[derive(Debug, Error)]
pub enum SimError {
    /// Invalid game input (e.g. an empty batch)
    #[error("Game error: {0}")]
    Game(#[from] GameError),
    
    /// Writing a report or export failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    
    /// JSON rendering failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    
    /// Run configuration rejected before any trial was played
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl SimError {
    /// Creates a config error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
