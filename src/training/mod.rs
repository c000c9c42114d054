//! Self-play training for the Q-learning agent.
//!
//! ## Overview
//!
//! - **TrainingConfig**: episode count, starting piles, seed, log interval
//! - **Trainer**: plays episodes sequentially, updating one shared agent
//! - **MoveMemory**: each player's last (state, action) within an episode
//! - **TrainingReport**: wins per seat, episode lengths, final table size
//!
//! ## Usage
//!
//! ```
//! use nim_rl::agent::AgentConfig;
//! use nim_rl::training::{Trainer, TrainingConfig};
//!
//! let config = TrainingConfig::default().with_episodes(100).with_seed(7);
//! let trainer = Trainer::new(AgentConfig::default(), config).unwrap();
//! let (agent, report) = trainer.run().unwrap();
//!
//! assert_eq!(report.episodes, 100);
//! assert!(!agent.q_table().is_empty());
//! ```

pub mod memory;
pub mod self_play;

pub use memory::{LastMove, MoveMemory};
pub use self_play::{train, EpisodeOutcome, Trainer, TrainingConfig, TrainingReport};
