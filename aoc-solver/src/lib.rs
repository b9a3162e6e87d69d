//! Puzzle Solver Harness
//!
//! A small framework for day-sized puzzles: each puzzle parses its input once
//! and then answers one or more numbered parts from the parsed data.
//!
//! # Overview
//!
//! - [`AocParser`] turns raw input into the puzzle's shared data
//! - [`PartSolver<N>`] answers part `N`
//! - [`Solver`] dispatches a runtime part number, usually derived with
//!   `#[derive(AocSolver)]`
//! - [`DynSolver`] / [`SolverInstance`] erase the solver type and record timing
//! - [`SolverRegistryBuilder`] / [`SolverRegistry`] map (year, day) to solvers,
//!   fed by `#[derive(AutoRegisterSolver)]` plugins
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverRegistryBuilder};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Depths;
//!
//! impl AocParser for Depths {
//!     type SharedData<'a> = Vec<u32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.into())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Depths {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.windows(2).filter(|w| w[1] > w[0]).count().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Depths {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         shared
//!             .iter()
//!             .max()
//!             .map(|m| m.to_string())
//!             .ok_or_else(|| SolveError::no_solution("empty input"))
//!     }
//! }
//!
//! let registry = SolverRegistryBuilder::new()
//!     .register::<Depths>(2021, 1)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2021, 1, "1\n3\n2\n5").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "2");
//! assert_eq!(solver.solve(2).unwrap().answer, "5");
//! ```

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    BASE_YEAR, DAYS_PER_YEAR, FactoryInfo, MAX_YEARS, RegisterableSolver, SolverFactory,
    SolverFactoryStorage, SolverPlugin, SolverRegistry, SolverRegistryBuilder,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Used by the code `AutoRegisterSolver` expands to
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
