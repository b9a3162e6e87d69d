//! Error types for the CLI

use std::path::PathBuf;

use thiserror::Error;
use thiserror_ext::Arc as ArcDerive;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// The explicitly selected puzzle cannot run
    #[error("{0}")]
    Selection(#[from] aoc_solver::SolverError),
}

/// Failure of one puzzle part during a run
///
/// Input and parse failures happen once per day but are reported for every
/// selected part, hence the shared [`ArcExecutorError`].
#[derive(Error, Debug, ArcDerive)]
#[thiserror_ext(newtype(name = ArcExecutorError))]
pub enum ExecutorError {
    /// No input file for the puzzle
    #[error("No input for {year} day {day} at {}", path.display())]
    InputMissing { year: u16, day: u8, path: PathBuf },

    /// Input file exists but could not be read
    #[error("Reading input for {year} day {day} from {} failed: {source}", path.display())]
    InputRead {
        year: u16,
        day: u8,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parsing or solving failed
    #[error("{0}")]
    Solver(#[from] aoc_solver::SolverError),
}
