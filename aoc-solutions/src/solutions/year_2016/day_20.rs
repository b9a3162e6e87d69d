use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use anyhow::{Context, ensure};

use crate::utils::parse::{lines_with, number};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2016, day = 20, tags = ["intervals"])]
pub struct Solver;

const MAX_ADDRESS: u64 = u32::MAX as u64;

/// Sorted, non-overlapping, non-adjacent blocked ranges (inclusive).
pub fn merge(mut ranges: Vec<(u64, u64)>) -> Vec<(u64, u64)> {
    ranges.sort_unstable();
    let mut merged: Vec<(u64, u64)> = Vec::with_capacity(ranges.len());
    for (lo, hi) in ranges {
        match merged.last_mut() {
            Some(last) if lo <= last.1 + 1 => last.1 = last.1.max(hi),
            _ => merged.push((lo, hi)),
        }
    }
    merged
}

/// Allowed addresses in `0..=max`, as inclusive gaps between blocked ranges.
pub fn allowed(blocked: &[(u64, u64)], max: u64) -> Vec<(u64, u64)> {
    let mut gaps = Vec::new();
    let mut next = 0u64;
    for &(lo, hi) in blocked {
        if lo > max {
            break;
        }
        if lo > next {
            gaps.push((next, lo - 1));
        }
        next = next.max(hi + 1);
    }
    if next <= max {
        gaps.push((next, max));
    }
    gaps
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<(u64, u64)>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let ranges = lines_with(input, |line| {
            let (lo, hi) = line.split_once('-').context("expected `lo-hi`")?;
            let (lo, hi): (u64, u64) = (number(lo)?, number(hi)?);
            ensure!(lo <= hi, "range {lo}-{hi} is reversed");
            Ok((lo, hi))
        })?;
        Ok(merge(ranges))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        allowed(shared, MAX_ADDRESS)
            .first()
            .map(|&(lo, _)| lo.to_string())
            .ok_or_else(|| SolveError::no_solution("every address is blocked"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let count: u64 = allowed(shared, MAX_ADDRESS)
            .iter()
            .map(|&(lo, hi)| hi - lo + 1)
            .sum();
        Ok(count.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_part_err;

    #[test]
    fn test_example_with_small_space() {
        let blocked = Solver::parse("5-8\n0-2\n4-7\n").unwrap();
        assert_eq!(blocked, vec![(0, 2), (4, 8)]);
        assert_eq!(allowed(&blocked, 9), vec![(3, 3), (9, 9)]);
    }

    #[test]
    fn test_gap_at_zero_and_adjacent_ranges() {
        let blocked = merge(vec![(3, 5), (6, 9), (1, 1)]);
        assert_eq!(blocked, vec![(1, 1), (3, 9)]);
        assert_eq!(allowed(&blocked, 9), vec![(0, 0), (2, 2)]);
    }

    #[test]
    fn test_fully_blocked() {
        assert!(matches!(
            solve_part_err::<Solver>("0-4294967295", 1),
            SolveError::NoSolution(_)
        ));
    }
}
