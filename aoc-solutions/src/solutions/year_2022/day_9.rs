use std::collections::HashSet;

use anyhow::Context;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Direction, Point};
use crate::utils::parse::{lines_with, number};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 9, tags = ["grid", "simulation"])]
pub struct Solver;

fn motion(line: &str) -> anyhow::Result<(Direction, u32)> {
    let (dir, steps) = line.split_once(' ').context("expected `DIR STEPS`")?;
    let mut chars = dir.chars();
    let dir = match (chars.next(), chars.next()) {
        (Some(c), None) => Direction::from_char(c)?,
        _ => anyhow::bail!("bad direction {dir:?}"),
    };
    Ok((dir, number(steps)?))
}

/// Positions visited by the last of `knots` knots.
pub fn tail_visits(motions: &[(Direction, u32)], knots: usize) -> usize {
    let mut rope = vec![Point::ORIGIN; knots.max(1)];
    let mut visited = HashSet::from([Point::ORIGIN]);
    for &(dir, steps) in motions {
        for _ in 0..steps {
            rope[0] += dir.delta();
            for i in 1..rope.len() {
                let gap = rope[i - 1] - rope[i];
                if gap.x.abs() <= 1 && gap.y.abs() <= 1 {
                    break;
                }
                rope[i] += gap.signum();
            }
            if let Some(&tail) = rope.last() {
                visited.insert(tail);
            }
        }
    }
    visited.len()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<(Direction, u32)>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        lines_with(input, motion)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(tail_visits(shared, 2).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(tail_visits(shared, 10).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_part;

    const SMALL: &str = "R 4\nU 4\nL 3\nD 1\nR 4\nD 1\nL 5\nR 2\n";
    const LARGE: &str = "R 5\nU 8\nL 8\nD 3\nR 17\nD 10\nL 25\nU 20\n";

    #[test]
    fn test_short_rope() {
        assert_eq!(solve_part::<Solver>(SMALL, 1), "13");
    }

    #[test]
    fn test_long_rope() {
        assert_eq!(solve_part::<Solver>(SMALL, 2), "1");
        assert_eq!(solve_part::<Solver>(LARGE, 2), "36");
    }
}
