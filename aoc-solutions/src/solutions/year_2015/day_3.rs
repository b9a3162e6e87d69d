use std::collections::HashSet;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Direction, Point};
use crate::utils::parse::{invalid, non_empty};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 3, tags = ["grid", "set"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Direction>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        non_empty(input)?
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(Direction::from_char)
            .collect::<anyhow::Result<_>>()
            .map_err(invalid)
    }
}

fn deliver<'a>(moves: impl Iterator<Item = &'a Direction>, houses: &mut HashSet<Point>) {
    let mut pos = Point::ORIGIN;
    houses.insert(pos);
    for dir in moves {
        pos += dir.delta();
        houses.insert(pos);
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut houses = HashSet::new();
        deliver(shared.iter(), &mut houses);
        Ok(houses.len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut houses = HashSet::new();
        deliver(shared.iter().step_by(2), &mut houses);
        deliver(shared.iter().skip(1).step_by(2), &mut houses);
        Ok(houses.len().to_string())
    }
}
