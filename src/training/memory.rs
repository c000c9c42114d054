//! Per-player memory of the most recent move in an episode.
//!
//! A move's value is only known once the opponent has answered it (or the
//! game has ended), so the trainer keeps each player's last (state, action)
//! until the resulting state is available.

use crate::core::{Action, PlayerId, PlayerMap, StateKey};

/// A player's most recent decision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LastMove {
    /// Piles before the move.
    pub state: StateKey,

    /// The move made from `state`.
    pub action: Action,
}

/// Two-slot memory, empty at the start of every episode.
#[derive(Clone, Debug, Default)]
pub struct MoveMemory {
    slots: PlayerMap<Option<LastMove>>,
}

impl MoveMemory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember `player`'s move, replacing their previous one.
    pub fn record(&mut self, player: PlayerId, state: StateKey, action: Action) {
        self.slots[player] = Some(LastMove { state, action });
    }

    /// `player`'s last move in this episode, if they have moved.
    #[must_use]
    pub fn last(&self, player: PlayerId) -> Option<&LastMove> {
        self.slots[player].as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_starts_empty() {
        let memory = MoveMemory::new();
        assert!(memory.last(PlayerId::FIRST).is_none());
        assert!(memory.last(PlayerId::SECOND).is_none());
    }

    #[test]
    fn test_record_replaces_per_player() {
        let mut memory = MoveMemory::new();
        memory.record(PlayerId::FIRST, StateKey::from_piles(&[3]), Action::new(0, 1));
        memory.record(PlayerId::FIRST, StateKey::from_piles(&[1]), Action::new(0, 1));

        let last = memory.last(PlayerId::FIRST).unwrap();
        assert_eq!(last.state.piles(), &[1]);
        assert!(memory.last(PlayerId::SECOND).is_none());
    }
}
