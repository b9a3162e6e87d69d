use std::ops::RangeInclusive;

use anyhow::Context;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::parse::{invalid, non_empty, number};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2019, day = 4, tags = ["brute-force"])]
pub struct Solver;

fn digits(n: u32) -> Vec<u8> {
    n.to_string().bytes().collect()
}

/// Lengths of the runs of equal digits, or `None` if a digit decreases
fn runs(n: u32) -> Option<Vec<usize>> {
    let digits = digits(n);
    if digits.windows(2).any(|w| w[0] > w[1]) {
        return None;
    }
    Some(digits.iter().chunk_by(|&&d| d).into_iter().map(|(_, run)| run.count()).collect())
}

pub fn is_valid(n: u32) -> bool {
    runs(n).is_some_and(|r| r.iter().any(|&len| len >= 2))
}

/// Also requires a pair that is not part of a longer run
pub fn is_valid_strict(n: u32) -> bool {
    runs(n).is_some_and(|r| r.contains(&2))
}

fn parse_range(text: &str) -> anyhow::Result<RangeInclusive<u32>> {
    let (lo, hi) = text.split_once('-').context("expected `low-high`")?;
    Ok(number(lo)?..=number(hi)?)
}

impl AocParser for Solver {
    type SharedData<'a> = RangeInclusive<u32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_range(non_empty(input)?).map_err(invalid)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.clone().filter(|&n| is_valid(n)).count().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.clone().filter(|&n| is_valid_strict(n)).count().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_part;

    #[test]
    fn test_rules() {
        assert!(is_valid(111111));
        assert!(!is_valid(223450));
        assert!(!is_valid(123789));
    }

    #[test]
    fn test_strict_rules() {
        assert!(is_valid_strict(112233));
        assert!(!is_valid_strict(123444));
        assert!(is_valid_strict(111122));
    }

    #[test]
    fn test_range_count() {
        assert_eq!(solve_part::<Solver>("111110-111112", 1), "2");
        assert_eq!(solve_part::<Solver>("111110-111123", 2), "1");
    }
}
