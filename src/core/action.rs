//! Action representation: which pile, and how many objects to remove.
//!
//! An action is only a request. Whether it is legal depends on the piles at
//! the moment it is applied, so legality is never cached on the action.

use serde::{Deserialize, Serialize};

use crate::error::{NimError, Result};

use super::player::PlayerId;

/// Remove `count` objects from pile `pile`.
///
/// ## Example
///
/// ```
/// use nim_rl::core::Action;
///
/// let take_all = Action::new(3, 7);
/// assert_eq!(take_all.pile, 3);
/// assert_eq!(take_all.count, 7);
/// assert_eq!(take_all.to_string(), "take 7 from pile 3");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action {
    /// 0-based pile index.
    pub pile: usize,

    /// Number of objects to remove.
    pub count: u32,
}

impl Action {
    /// Create a new action.
    #[must_use]
    pub const fn new(pile: usize, count: u32) -> Self {
        Self { pile, count }
    }

    /// Convert raw signed input (e.g. typed by a human) into an action.
    ///
    /// Negative pile indices fail with `InvalidPile`; counts below 1 fail
    /// with `InvalidCount`. Upper bounds are checked when the action is
    /// applied, since they depend on the current piles.
    pub fn from_signed(pile: i64, count: i64) -> Result<Self> {
        let pile_index = usize::try_from(pile).map_err(|_| NimError::InvalidPile {
            pile,
            pile_count: 0,
        })?;

        match u32::try_from(count) {
            Ok(c) if c >= 1 => Ok(Self::new(pile_index, c)),
            _ => Err(NimError::InvalidCount {
                pile: pile_index,
                count,
                available: 0,
            }),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "take {} from pile {}", self.count, self.pile)
    }
}

/// A recorded move with the player who made it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// 0-based position of the move within the game.
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, sequence: u32) -> Self {
        Self {
            player,
            action,
            sequence,
        }
    }
}
