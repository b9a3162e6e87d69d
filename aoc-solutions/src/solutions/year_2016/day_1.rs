use std::collections::HashSet;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use anyhow::bail;

use crate::utils::grid::{Direction, Point};
use crate::utils::parse::{invalid, non_empty, number};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2016, day = 1, tags = ["grid", "set"])]
pub struct Solver;

#[derive(Debug, Clone, Copy)]
pub enum Turn {
    Left,
    Right,
}

fn parse_step(token: &str) -> anyhow::Result<(Turn, i64)> {
    let turn = match token.chars().next() {
        Some('L') => Turn::Left,
        Some('R') => Turn::Right,
        _ => bail!("step {token:?} must start with L or R"),
    };
    Ok((turn, number(&token[1..])?))
}

/// Every unit step of the walk, starting north at the origin.
fn walk(steps: &[(Turn, i64)]) -> impl Iterator<Item = Point> + '_ {
    let mut facing = Direction::Up;
    let mut pos = Point::ORIGIN;
    steps.iter().flat_map(move |&(turn, blocks)| {
        facing = match turn {
            Turn::Left => facing.turn_left(),
            Turn::Right => facing.turn_right(),
        };
        let delta = facing.delta();
        let start = pos;
        pos = Point::new(pos.x + delta.x * blocks, pos.y + delta.y * blocks);
        (1..=blocks).map(move |i| Point::new(start.x + delta.x * i, start.y + delta.y * i))
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<(Turn, i64)>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        non_empty(input)?
            .split(',')
            .map(|t| parse_step(t.trim()))
            .collect::<anyhow::Result<_>>()
            .map_err(invalid)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let end = walk(shared).last().unwrap_or(Point::ORIGIN);
        Ok(end.manhattan(Point::ORIGIN).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut seen = HashSet::from([Point::ORIGIN]);
        walk(shared)
            .find(|&p| !seen.insert(p))
            .map(|p| p.manhattan(Point::ORIGIN).to_string())
            .ok_or_else(|| SolveError::no_solution("no location is visited twice"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::{solve_part, solve_part_err};

    #[test]
    fn test_final_distance() {
        assert_eq!(solve_part::<Solver>("R2, L3", 1), "5");
        assert_eq!(solve_part::<Solver>("R2, R2, R2", 1), "2");
        assert_eq!(solve_part::<Solver>("R5, L5, R5, R3", 1), "12");
    }

    #[test]
    fn test_first_revisit() {
        assert_eq!(solve_part::<Solver>("R8, R4, R4, R8", 2), "4");
    }

    #[test]
    fn test_no_revisit() {
        assert!(matches!(solve_part_err::<Solver>("R2, L3", 2), SolveError::NoSolution(_)));
    }
}
