//! # nim-rl
//!
//! The game of Nim and a tabular Q-learning agent that learns it by
//! self-play.
//!
//! ## Design Principles
//!
//! 1. **Live state, frozen keys**: the game mutates its piles in place; the
//!    Q-table is keyed by `StateKey`, a by-value snapshot of those piles.
//!
//! 2. **Injected randomness**: every random choice draws from a caller-owned
//!    `GameRng`, so a seed fully determines a training run.
//!
//! 3. **Errors, not panics**: illegal moves surface as `NimError` values so
//!    interactive front ends can re-prompt.
//!
//! ## Modules
//!
//! - `core`: players, actions, state keys, RNG
//! - `games`: the Nim state machine
//! - `agent`: Q-table, TD update rule, epsilon-greedy policy
//! - `training`: sequential self-play driver

pub mod error;
pub mod core;
pub mod games;
pub mod agent;
pub mod training;

// Re-export commonly used types
pub use crate::error::{NimError, Result};

pub use crate::core::{Action, ActionRecord, GameRng, PlayerId, PlayerMap, StateKey};

pub use crate::games::nim::{Nim, DEFAULT_PILES};

pub use crate::agent::{AgentConfig, AgentSnapshot, EpsilonGreedy, NimAgent, QTable};

pub use crate::training::{train, EpisodeOutcome, Trainer, TrainingConfig, TrainingReport};
