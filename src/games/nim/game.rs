//! Nim game state machine.

use crate::core::{Action, ActionRecord, PlayerId, StateKey};
use crate::error::{NimError, Result};

/// Pile layout used when no other is given.
pub const DEFAULT_PILES: [u32; 4] = [1, 3, 5, 7];

/// A game of Nim in progress.
///
/// Piles are mutated in place by [`Nim::apply_move`]. Use
/// [`Nim::state_key`] to take an immutable snapshot for table lookups.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Nim {
    piles: Vec<u32>,
    player: PlayerId,
    winner: Option<PlayerId>,
    history: Vec<ActionRecord>,
}

impl Default for Nim {
    fn default() -> Self {
        Self::new()
    }
}

impl Nim {
    /// Start a game with the default `[1, 3, 5, 7]` piles.
    #[must_use]
    pub fn new() -> Self {
        Self::with_piles(DEFAULT_PILES.to_vec())
    }

    /// Start a game with caller-supplied piles. Player 0 moves first.
    ///
    /// A layout with no objects at all starts with no legal moves and no
    /// winner; callers check [`Nim::legal_actions`] before asking for a move.
    #[must_use]
    pub fn with_piles(piles: Vec<u32>) -> Self {
        Self {
            piles,
            player: PlayerId::FIRST,
            winner: None,
            history: Vec::new(),
        }
    }

    /// All legal actions for the given piles, in ascending (pile, count) order.
    ///
    /// ```
    /// use nim_rl::core::Action;
    /// use nim_rl::games::nim::Nim;
    ///
    /// let actions = Nim::available_actions(&[0, 2]);
    /// assert_eq!(actions, vec![Action::new(1, 1), Action::new(1, 2)]);
    /// assert!(Nim::available_actions(&[0, 0]).is_empty());
    /// ```
    #[must_use]
    pub fn available_actions(piles: &[u32]) -> Vec<Action> {
        piles
            .iter()
            .enumerate()
            .flat_map(|(pile, &size)| (1..=size).map(move |count| Action::new(pile, count)))
            .collect()
    }

    /// Legal actions for the current piles.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        Self::available_actions(&self.piles)
    }

    /// Whether `action` could be applied right now.
    #[must_use]
    pub fn is_legal(&self, action: Action) -> bool {
        self.check(action).is_ok()
    }

    fn check(&self, action: Action) -> Result<()> {
        if self.winner.is_some() {
            return Err(NimError::GameAlreadyWon);
        }

        let available = *self.piles.get(action.pile).ok_or(NimError::InvalidPile {
            pile: action.pile as i64,
            pile_count: self.piles.len(),
        })?;

        if action.count < 1 || action.count > available {
            return Err(NimError::InvalidCount {
                pile: action.pile,
                count: i64::from(action.count),
                available,
            });
        }

        Ok(())
    }

    /// Apply a move for the current player.
    ///
    /// Removes the objects, hands the turn to the other player, and if that
    /// emptied every pile records the mover as the winner.
    pub fn apply_move(&mut self, action: Action) -> Result<()> {
        self.check(action)?;

        let mover = self.player;
        self.piles[action.pile] -= action.count;
        self.history.push(ActionRecord::new(mover, action, self.history.len() as u32));
        self.player = mover.other();

        if self.piles.iter().all(|&p| p == 0) {
            self.winner = Some(mover);
        }

        Ok(())
    }

    /// Current pile counts.
    #[must_use]
    pub fn piles(&self) -> &[u32] {
        &self.piles
    }

    /// Immutable snapshot of the current piles.
    #[must_use]
    pub fn state_key(&self) -> StateKey {
        StateKey::from_piles(&self.piles)
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.player
    }

    /// The winner, once the last object has been taken.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Moves applied so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    #[must_use]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }
}

impl std::fmt::Display for Nim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Piles:")?;
        for (i, pile) in self.piles.iter().enumerate() {
            writeln!(f, "Pile {}: {}", i, pile)?;
        }
        Ok(())
    }
}
