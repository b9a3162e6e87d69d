use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::non_empty;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2018, day = 5, tags = ["stack"])]
pub struct Solver;

fn reacts(a: u8, b: u8) -> bool {
    a != b && a.eq_ignore_ascii_case(&b)
}

/// Length after every adjacent opposite-polarity pair has reacted,
/// skipping units of the `removed` type.
pub fn reduced_len(polymer: &[u8], removed: Option<u8>) -> usize {
    let mut stack: Vec<u8> = Vec::with_capacity(polymer.len());
    for &unit in polymer {
        if removed.is_some_and(|r| unit.eq_ignore_ascii_case(&r)) {
            continue;
        }
        match stack.last() {
            Some(&top) if reacts(top, unit) => {
                stack.pop();
            }
            _ => stack.push(unit),
        }
    }
    stack.len()
}

impl AocParser for Solver {
    type SharedData<'a> = &'a [u8];

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let polymer = non_empty(input)?;
        match polymer.bytes().find(|b| !b.is_ascii_alphabetic()) {
            Some(b) => Err(ParseError::InvalidFormat(format!("unexpected unit {:?}", b as char))),
            None => Ok(polymer.as_bytes()),
        }
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(reduced_len(shared, None).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let best = (b'a'..=b'z')
            .map(|unit| reduced_len(shared, Some(unit)))
            .min()
            .unwrap_or(0);
        Ok(best.to_string())
    }
}
