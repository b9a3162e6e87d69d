use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::{invalid, non_empty, number};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2016, day = 19, tags = ["josephus"])]
pub struct Solver;

/// Winning elf (1-based) when each elf takes from its left neighbour.
pub fn steal_left(elves: u64) -> u64 {
    let highest = 1u64 << (63 - elves.leading_zeros());
    2 * (elves - highest) + 1
}

/// Winning elf (1-based) when each elf takes from the elf directly across.
pub fn steal_across(elves: u64) -> u64 {
    let mut power = 1;
    while power * 3 <= elves {
        power *= 3;
    }
    if elves == power {
        elves
    } else if elves <= 2 * power {
        elves - power
    } else {
        2 * elves - 3 * power
    }
}

impl AocParser for Solver {
    type SharedData<'a> = u64;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let elves = number(non_empty(input)?).map_err(invalid)?;
        if elves == 0 {
            return Err(ParseError::InvalidFormat("at least one elf is needed".into()));
        }
        Ok(elves)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(steal_left(*shared).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(steal_across(*shared).to_string())
    }
}
