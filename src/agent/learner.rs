//! Tabular Q-learning agent.

use log::trace;

use crate::core::{Action, GameRng, StateKey};
use crate::error::Result;

use super::config::AgentConfig;
use super::policy::EpsilonGreedy;
use super::q_table::QTable;

/// Reward for the move that empties the board.
pub const LOSS_REWARD: f64 = -1.0;

/// Reward for the opponent's last move when the mover empties the board.
pub const WIN_REWARD: f64 = 1.0;

/// Reward for a move whose outcome is not yet decided.
pub const NEUTRAL_REWARD: f64 = 0.0;

/// Q-learning agent: a Q-table plus fixed hyperparameters.
#[derive(Clone, Debug, PartialEq)]
pub struct NimAgent {
    config: AgentConfig,
    q: QTable,
}

impl Default for NimAgent {
    fn default() -> Self {
        Self {
            config: AgentConfig::default(),
            q: QTable::new(),
        }
    }
}

impl NimAgent {
    /// Create an untrained agent. Fails if the hyperparameters are out of range.
    pub fn new(config: AgentConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            q: QTable::new(),
        })
    }

    /// Rebuild an agent from a previously learned table.
    pub fn with_table(config: AgentConfig, q: QTable) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, q })
    }

    #[must_use]
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    #[must_use]
    pub fn q_table(&self) -> &QTable {
        &self.q
    }

    /// Learned value of taking `action` in `state` (0 if never updated).
    #[must_use]
    pub fn get_q_value(&self, state: &StateKey, action: Action) -> f64 {
        self.q.get(state, action)
    }

    /// Best learned value available from `state` (0 if nothing recorded).
    #[must_use]
    pub fn best_future_reward(&self, state: &StateKey) -> f64 {
        self.q.best_value(state)
    }

    /// Move the stored estimate for (state, action) toward `reward + future`.
    pub fn update_q_value(
        &mut self,
        state: &StateKey,
        action: Action,
        old_q: f64,
        reward: f64,
        future: f64,
    ) {
        let target = reward + future;
        let value = old_q + self.config.alpha * (target - old_q);
        trace!("Q{} {}: {:.4} -> {:.4} (reward {})", state, action, old_q, value, reward);
        self.q.set(state, action, value);
    }

    /// One-step TD update of (old_state, action) after reaching `new_state`.
    pub fn update(
        &mut self,
        old_state: &StateKey,
        action: Action,
        new_state: &StateKey,
        reward: f64,
    ) {
        let old_q = self.get_q_value(old_state, action);
        let best_future = self.best_future_reward(new_state);
        self.update_q_value(old_state, action, old_q, reward, best_future);
    }

    /// Pick an action for `state`.
    ///
    /// With `explore` set, moves at random with probability epsilon; otherwise
    /// (and always when `explore` is false) picks uniformly among the
    /// highest-valued legal actions. Returns `None` when no move is legal.
    pub fn choose_action(
        &self,
        state: &StateKey,
        explore: bool,
        rng: &mut GameRng,
    ) -> Option<Action> {
        EpsilonGreedy::from_validated(&self.config).select(&self.q, state, explore, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(piles: &[u32]) -> StateKey {
        StateKey::from_piles(piles)
    }

    #[test]
    fn test_new_rejects_bad_config() {
        assert!(NimAgent::new(AgentConfig::default().with_alpha(0.0)).is_err());
        assert!(NimAgent::new(AgentConfig::default()).is_ok());
    }

    #[test]
    fn test_first_update_with_default_alpha() {
        let mut agent = NimAgent::default();
        let s = key(&[1, 3, 5, 7]);
        let s2 = key(&[1, 3, 5, 0]);
        let a = Action::new(3, 7);

        agent.update(&s, a, &s2, 1.0);

        assert_eq!(agent.get_q_value(&s, a), 0.5);
        assert_eq!(agent.q_table().len(), 1);
    }

    #[test]
    fn test_update_uses_best_future_value() {
        let mut agent = NimAgent::default();
        let s = key(&[2, 1]);
        let s2 = key(&[1, 1]);
        agent.update(&s2, Action::new(0, 1), &key(&[0, 1]), 1.0); // Q(s2) best = 0.5

        agent.update(&s, Action::new(0, 1), &s2, 0.0);

        // 0 + 0.5 * (0 + 0.5 - 0)
        assert_eq!(agent.get_q_value(&s, Action::new(0, 1)), 0.25);
    }

    #[test]
    fn test_repeated_updates_converge_toward_target() {
        let mut agent = NimAgent::default();
        let s = key(&[1]);
        let done = key(&[0]);
        let a = Action::new(0, 1);

        for _ in 0..30 {
            agent.update(&s, a, &done, LOSS_REWARD);
        }

        assert!((agent.get_q_value(&s, a) - LOSS_REWARD).abs() < 1e-6);
    }

    #[test]
    fn test_update_q_value_formula() {
        let mut agent = NimAgent::new(AgentConfig::default().with_alpha(0.25)).unwrap();
        let s = key(&[3]);
        let a = Action::new(0, 1);

        agent.update_q_value(&s, a, 0.2, 1.0, 0.4);

        // 0.2 + 0.25 * (1.4 - 0.2)
        assert!((agent.get_q_value(&s, a) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_choose_action_strict_maximum_is_deterministic() {
        let mut agent = NimAgent::default();
        let s = key(&[1, 3, 5, 7]);
        let best = Action::new(2, 4);
        agent.update(&s, best, &key(&[1, 3, 1, 7]), WIN_REWARD);

        let mut rng = GameRng::new(9);
        for _ in 0..100 {
            assert_eq!(agent.choose_action(&s, false, &mut rng), Some(best));
        }
    }
}
