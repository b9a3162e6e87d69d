use std::collections::HashMap;

use anyhow::Context;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::{lines_with, number};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 1, tags = ["sorting"])]
pub struct Solver;

#[derive(Debug, Clone)]
pub struct Lists {
    left: Vec<u64>,
    right: Vec<u64>,
}

fn pair(line: &str) -> anyhow::Result<(u64, u64)> {
    let mut tokens = line.split_whitespace();
    let left = number(tokens.next().context("missing left id")?)?;
    let right = number(tokens.next().context("missing right id")?)?;
    if tokens.next().is_some() {
        anyhow::bail!("more than two ids");
    }
    Ok((left, right))
}

impl AocParser for Solver {
    type SharedData<'a> = Lists;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let (mut left, mut right): (Vec<_>, Vec<_>) = lines_with(input, pair)?.into_iter().unzip();
        left.sort_unstable();
        right.sort_unstable();
        Ok(Lists { left, right })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let distance: u64 = shared
            .left
            .iter()
            .zip(&shared.right)
            .map(|(a, b)| a.abs_diff(*b))
            .sum();
        Ok(distance.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut counts: HashMap<u64, u64> = HashMap::new();
        for &id in &shared.right {
            *counts.entry(id).or_default() += 1;
        }
        let similarity: u64 = shared
            .left
            .iter()
            .map(|id| id * counts.get(id).copied().unwrap_or(0))
            .sum();
        Ok(similarity.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_part;

    const EXAMPLE: &str = "3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n";

    #[test]
    fn test_total_distance() {
        assert_eq!(solve_part::<Solver>(EXAMPLE, 1), "11");
    }

    #[test]
    fn test_similarity_score() {
        assert_eq!(solve_part::<Solver>(EXAMPLE, 2), "31");
    }

    #[test]
    fn test_odd_line_rejected() {
        assert!(Solver::parse("3 4 5\n").is_err());
        assert!(Solver::parse("3\n").is_err());
    }
}
