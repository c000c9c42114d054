//! Core value types shared by the game, the agent and the trainer:
//! players, actions, state keys and the random source.

pub mod player;
pub mod action;
pub mod state;
pub mod rng;

pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use action::{Action, ActionRecord};
pub use state::StateKey;
pub use rng::GameRng;
