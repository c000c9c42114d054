//! Sparse Q-value table.
//!
//! Maps a pile snapshot to the values of the actions tried from it. Reads
//! never insert, so unseen pairs cost nothing and report `0.0`. Entries are
//! only ever added or overwritten.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Action, StateKey};

/// Values of the actions recorded for one state.
pub type ActionValues = FxHashMap<Action, f64>;

/// Tabular Q-values keyed by (state, action).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QTable {
    values: FxHashMap<StateKey, ActionValues>,
    entries: usize,
}

impl QTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored value for (state, action), or `0.0` if never written.
    #[must_use]
    pub fn get(&self, state: &StateKey, action: Action) -> f64 {
        self.values
            .get(state)
            .and_then(|actions| actions.get(&action))
            .copied()
            .unwrap_or(0.0)
    }

    /// Highest stored value over the actions recorded for `state`.
    ///
    /// Returns `0.0` when the state has no entries. Only stored entries take
    /// part, so a state whose recorded values are all negative reports that
    /// negative maximum.
    #[must_use]
    pub fn best_value(&self, state: &StateKey) -> f64 {
        self.values
            .get(state)
            .and_then(|actions| actions.values().copied().reduce(f64::max))
            .unwrap_or(0.0)
    }

    /// Write the value for (state, action).
    pub fn set(&mut self, state: &StateKey, action: Action, value: f64) {
        let actions = self.values.entry(state.clone()).or_default();
        if actions.insert(action, value).is_none() {
            self.entries += 1;
        }
    }

    /// Recorded action values for a state, if any.
    #[must_use]
    pub fn actions_for(&self, state: &StateKey) -> Option<&ActionValues> {
        self.values.get(state)
    }

    /// Number of stored (state, action) entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Number of distinct states with at least one entry.
    #[must_use]
    pub fn state_count(&self) -> usize {
        self.values.len()
    }
}
