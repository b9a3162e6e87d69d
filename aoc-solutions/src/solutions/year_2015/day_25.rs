use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use anyhow::Context;
use regex::Regex;

use crate::utils::math::mod_pow;
use crate::utils::parse::{invalid, number};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2015, day = 25, tags = ["modular-arithmetic"])]
pub struct Solver;

const FIRST_CODE: u64 = 20151125;
const MULTIPLIER: u64 = 252533;
const MODULUS: u64 = 33554393;

/// Code at 1-based `(row, column)` of the diagonally filled grid.
pub fn code_at(row: u64, column: u64) -> u64 {
    let diagonal = row + column - 1;
    let index = diagonal * (diagonal - 1) / 2 + column - 1;
    FIRST_CODE * mod_pow(MULTIPLIER, index, MODULUS) % MODULUS
}

impl AocParser for Solver {
    type SharedData<'a> = (u64, u64);

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let parse = || -> anyhow::Result<(u64, u64)> {
            let re = Regex::new(r"row (\d+), column (\d+)")?;
            let caps = re.captures(input).context("expected `row R, column C`")?;
            Ok((number(&caps[1])?, number(&caps[2])?))
        };
        let (row, column) = parse().map_err(invalid)?;
        if row == 0 || column == 0 {
            return Err(ParseError::InvalidFormat("rows and columns start at 1".into()));
        }
        Ok((row, column))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (row, column) = *shared;
        Ok(code_at(row, column).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_part;

    #[test]
    fn test_grid_corner() {
        assert_eq!(code_at(1, 1), 20151125);
        assert_eq!(code_at(2, 1), 31916031);
        assert_eq!(code_at(1, 2), 18749137);
        assert_eq!(code_at(6, 6), 27995004);
    }

    #[test]
    fn test_sentence_input() {
        let input = "To continue, please consult the code grid in the manual.  Enter the code at row 4, column 2.";
        assert_eq!(solve_part::<Solver>(input, 1), "32451966");
    }
}
