//! Error types for game rules, agent configuration and snapshots.

use thiserror::Error;

/// Errors that can occur while playing or training.
#[derive(Error, Debug)]
pub enum NimError {
    #[error("Game already won")]
    GameAlreadyWon,

    #[error("Invalid pile {pile}")]
    InvalidPile { pile: i64, pile_count: usize },

    #[error("Invalid number of objects: cannot take {count} from pile {pile}")]
    InvalidCount { pile: usize, count: i64, available: u32 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Snapshot encoding failed: {0}")]
    Snapshot(#[from] bincode::Error),
}

/// Convenience Result type for Nim operations.
pub type Result<T> = std::result::Result<T, NimError>;
