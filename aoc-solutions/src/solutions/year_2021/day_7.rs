use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::{invalid, non_empty, separated};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 7, tags = ["optimization"])]
pub struct Solver;

/// Cheapest total over every candidate alignment position.
fn cheapest(crabs: &[i64], cost: impl Fn(i64) -> i64) -> Option<i64> {
    let (&lo, &hi) = (crabs.iter().min()?, crabs.iter().max()?);
    (lo..=hi)
        .map(|target| crabs.iter().map(|&c| cost((c - target).abs())).sum::<i64>())
        .min()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        separated(non_empty(input)?, ',').map_err(invalid)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        cheapest(shared, |d| d)
            .map(|fuel| fuel.to_string())
            .ok_or_else(|| SolveError::no_solution("no crabs"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        cheapest(shared, |d| d * (d + 1) / 2)
            .map(|fuel| fuel.to_string())
            .ok_or_else(|| SolveError::no_solution("no crabs"))
    }
}
