//! Game implementations.

pub mod nim;
