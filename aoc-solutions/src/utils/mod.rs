//! Helpers shared by several puzzles

pub mod dp_cache;
pub mod grid;
pub mod math;
pub mod parse;
pub mod search;

#[cfg(test)]
pub(crate) mod testing;
