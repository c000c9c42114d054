//! Tabular Q-learning agent for Nim.
//!
//! - `QTable`: sparse (state, action) -> value map, 0 for unseen pairs
//! - `NimAgent`: table + hyperparameters + TD update rule
//! - `EpsilonGreedy`: action selection with random tie-breaking
//! - `AgentSnapshot`: serializable copy of a trained agent
//!
//! ## Usage
//!
//! ```
//! use nim_rl::agent::{AgentConfig, NimAgent};
//! use nim_rl::core::{GameRng, StateKey};
//!
//! let agent = NimAgent::new(AgentConfig::default().with_epsilon(0.2)).unwrap();
//! let mut rng = GameRng::new(42);
//!
//! let state = StateKey::from_piles(&[1, 3, 5, 7]);
//! let action = agent.choose_action(&state, false, &mut rng);
//! assert!(action.is_some());
//! ```

pub mod config;
pub mod q_table;
pub mod policy;
pub mod learner;
pub mod snapshot;

pub use config::AgentConfig;
pub use q_table::{ActionValues, QTable};
pub use policy::EpsilonGreedy;
pub use learner::{NimAgent, LOSS_REWARD, NEUTRAL_REWARD, WIN_REWARD};
pub use snapshot::AgentSnapshot;
