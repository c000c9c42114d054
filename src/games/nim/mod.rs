//! Nim: players alternately remove one or more objects from a single pile.
//!
//! - The game starts from `[1, 3, 5, 7]` unless another layout is given
//! - A move names a pile and a count between 1 and that pile's size
//! - The player who takes the last object wins (normal play)

mod game;

pub use game::{Nim, DEFAULT_PILES};
