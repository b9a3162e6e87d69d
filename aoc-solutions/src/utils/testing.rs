//! Shortcuts for puzzle unit tests

use aoc_solver::{SolveError, Solver};

/// Parses `input` and runs `part`, panicking on any error.
pub fn solve_part<S: Solver>(input: &str, part: u8) -> String {
    let mut shared = S::parse(input).unwrap_or_else(|e| panic!("parse failed: {e}"));
    S::solve_part(&mut shared, part).unwrap_or_else(|e| panic!("part {part} failed: {e}"))
}

/// Parses `input` and runs `part`, returning the solve error.
pub fn solve_part_err<S: Solver>(input: &str, part: u8) -> SolveError {
    let mut shared = S::parse(input).unwrap_or_else(|e| panic!("parse failed: {e}"));
    match S::solve_part(&mut shared, part) {
        Ok(answer) => panic!("expected an error, got {answer}"),
        Err(e) => e,
    }
}
