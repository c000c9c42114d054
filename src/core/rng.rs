//! Deterministic random number generation for exploration and tie-breaking.
//!
//! Every random decision the agent makes (epsilon sampling, random
//! exploration, choosing among tied best actions) draws from a `GameRng`
//! passed in by the caller. Fixing the seed makes training reproducible.
//!
//! ```
//! use nim_rl::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//!
//! // Fork for an independent stream (e.g. interactive play after training)
//! let mut play_rng = rng.fork();
//!
//! let mut rng2 = GameRng::new(42);
//! let mut play_rng2 = rng2.fork();
//! let piles = [0, 1, 2, 3, 4, 5, 6, 7];
//! assert_eq!(play_rng.choose(&piles), play_rng2.choose(&piles));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded ChaCha8 RNG with deterministic forking.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG to create an independent, deterministic branch.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let offset = self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15);
        let fork_seed = self.seed.wrapping_add(offset);
        Self::new(fork_seed)
    }

    /// Generate a random boolean with given probability of true.
    ///
    /// `probability` must lie in `[0, 1]`.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Choose a uniformly random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}
