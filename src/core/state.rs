//! Immutable state keys.
//!
//! The live game mutates its piles in place, but the Q-table needs a stable
//! key for "the piles as they were". `StateKey` is that key: an ordered copy
//! of the pile counts taken by value at the moment of the snapshot.
//!
//! Pile order is significant. `[1, 3]` and `[3, 1]` are different states.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Ordered snapshot of pile counts.
///
/// SmallVec keeps up to 8 piles inline, which covers the standard
/// `[1, 3, 5, 7]` layout without a heap allocation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StateKey(SmallVec<[u32; 8]>);

impl StateKey {
    /// Snapshot the given piles.
    ///
    /// ```
    /// use nim_rl::core::StateKey;
    ///
    /// let mut piles = vec![1, 3, 5, 7];
    /// let key = StateKey::from_piles(&piles);
    /// piles[3] = 0;
    ///
    /// assert_eq!(key.piles(), &[1, 3, 5, 7]);
    /// ```
    #[must_use]
    pub fn from_piles(piles: &[u32]) -> Self {
        Self(SmallVec::from_slice(piles))
    }

    /// The pile counts in this snapshot.
    #[must_use]
    pub fn piles(&self) -> &[u32] {
        &self.0
    }

    /// True when every pile is empty.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.0.iter().all(|&p| p == 0)
    }
}

impl From<&[u32]> for StateKey {
    fn from(piles: &[u32]) -> Self {
        Self::from_piles(piles)
    }
}

impl std::fmt::Display for StateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0.as_slice())
    }
}
