//! Puzzle solutions with automatic registration
//!
//! Every puzzle lives in `solutions::year_YYYY::day_N` as a `Solver` unit
//! struct deriving `AocSolver` and `AutoRegisterSolver`, so linking this
//! crate is enough to make it visible to `SolverRegistryBuilder::register_all_plugins`.

pub mod solutions;
pub mod utils;
