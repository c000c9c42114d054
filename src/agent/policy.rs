//! Epsilon-greedy action selection over a Q-table.

use crate::core::{Action, GameRng, StateKey};
use crate::error::Result;
use crate::games::nim::Nim;

use super::config::{check_epsilon, AgentConfig};
use super::q_table::QTable;

/// Epsilon-greedy selection.
///
/// When exploring, picks a uniformly random legal action with probability
/// `epsilon`. Otherwise picks uniformly among all legal actions sharing the
/// highest Q-value, with unseen actions valued at `0.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EpsilonGreedy {
    epsilon: f64,
}

impl EpsilonGreedy {
    /// Create the policy. Fails unless `epsilon` lies in `[0, 1]`.
    pub fn new(epsilon: f64) -> Result<Self> {
        check_epsilon(epsilon)?;
        Ok(Self { epsilon })
    }

    /// Policy for a config that has already passed `AgentConfig::validate`.
    pub(crate) fn from_validated(config: &AgentConfig) -> Self {
        Self {
            epsilon: config.epsilon,
        }
    }

    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Select an action for `state`, or `None` if the piles are all empty.
    pub fn select(
        &self,
        table: &QTable,
        state: &StateKey,
        explore: bool,
        rng: &mut GameRng,
    ) -> Option<Action> {
        let actions = Nim::available_actions(state.piles());
        if actions.is_empty() {
            return None;
        }

        if explore && rng.gen_bool(self.epsilon) {
            return rng.choose(&actions).copied();
        }

        let best = Self::best_actions(table, state, &actions);
        rng.choose(&best).copied()
    }

    /// All actions in `actions` that share the highest value for `state`.
    #[must_use]
    pub fn best_actions(table: &QTable, state: &StateKey, actions: &[Action]) -> Vec<Action> {
        let scored: Vec<(Action, f64)> = actions
            .iter()
            .map(|&action| (action, table.get(state, action)))
            .collect();

        let max = scored
            .iter()
            .map(|&(_, q)| q)
            .fold(f64::NEG_INFINITY, f64::max);

        scored
            .into_iter()
            .filter(|&(_, q)| q == max)
            .map(|(action, _)| action)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(piles: &[u32]) -> StateKey {
        StateKey::from_piles(piles)
    }

    #[test]
    fn test_terminal_state_has_no_action() {
        let mut rng = GameRng::new(42);
        let policy = EpsilonGreedy::new(0.5).unwrap();
        let table = QTable::new();

        assert_eq!(policy.select(&table, &key(&[0, 0]), true, &mut rng), None);
        assert_eq!(policy.select(&table, &key(&[0, 0]), false, &mut rng), None);
    }

    #[test]
    fn test_best_actions_on_empty_table_are_all_actions() {
        let table = QTable::new();
        let state = key(&[1, 2]);
        let actions = Nim::available_actions(state.piles());

        assert_eq!(EpsilonGreedy::best_actions(&table, &state, &actions), actions);
    }

    #[test]
    fn test_best_actions_prefers_unseen_over_negative() {
        let mut table = QTable::new();
        let state = key(&[2]);
        table.set(&state, Action::new(0, 2), -1.0);

        let actions = Nim::available_actions(state.piles());
        assert_eq!(
            EpsilonGreedy::best_actions(&table, &state, &actions),
            vec![Action::new(0, 1)]
        );
    }

    #[test]
    fn test_zero_epsilon_never_explores() {
        let mut table = QTable::new();
        let state = key(&[3]);
        table.set(&state, Action::new(0, 2), 0.1);

        let policy = EpsilonGreedy::new(0.0).unwrap();
        let mut rng = GameRng::new(1);
        for _ in 0..200 {
            assert_eq!(policy.select(&table, &state, true, &mut rng), Some(Action::new(0, 2)));
        }
    }

    #[test]
    fn test_out_of_range_epsilon_is_rejected() {
        use crate::error::NimError;

        assert!(matches!(EpsilonGreedy::new(1.5), Err(NimError::InvalidConfig(_))));
        assert!(matches!(EpsilonGreedy::new(-0.01), Err(NimError::InvalidConfig(_))));
        assert!(EpsilonGreedy::new(f64::NAN).is_err());

        let policy = EpsilonGreedy::new(1.0).unwrap();
        assert_eq!(policy.epsilon(), 1.0);
        let mut rng = GameRng::new(3);
        let action = policy.select(&QTable::new(), &key(&[3]), true, &mut rng);
        assert!(matches!(action, Some(Action { pile: 0, count: 1..=3 })));
    }
}
