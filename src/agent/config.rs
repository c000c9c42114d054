//! Q-learning hyperparameters.

use serde::{Deserialize, Serialize};

use crate::error::{NimError, Result};

/// Agent hyperparameters, fixed for the agent's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Learning rate in (0, 1] (default: 0.5).
    /// Fraction of the TD error applied on each update.
    pub alpha: f64,

    /// Exploration rate in [0, 1] (default: 0.1).
    /// Probability of a uniformly random move when exploring.
    pub epsilon: f64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            epsilon: 0.1,
        }
    }
}

impl AgentConfig {
    /// Set the learning rate.
    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the exploration rate.
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Check that both rates are in range.
    pub fn validate(&self) -> Result<()> {
        if !(self.alpha > 0.0 && self.alpha <= 1.0) {
            return Err(NimError::InvalidConfig(format!(
                "alpha must be in (0, 1], got {}",
                self.alpha
            )));
        }
        check_epsilon(self.epsilon)
    }
}

/// Exploration rates outside `[0, 1]` (or NaN) are rejected.
pub(crate) fn check_epsilon(epsilon: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&epsilon) {
        return Err(NimError::InvalidConfig(format!(
            "epsilon must be in [0, 1], got {}",
            epsilon
        )));
    }
    Ok(())
}
