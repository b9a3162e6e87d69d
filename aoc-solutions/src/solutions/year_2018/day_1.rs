use std::collections::HashSet;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::{invalid, lines_with, number, separated};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2018, day = 1)]
pub struct Solver;

/// First running total reached twice while the changes repeat forever.
///
/// Returns `None` when the frequencies drift without ever repeating.
pub fn first_repeat(changes: &[i64]) -> Option<i64> {
    let totals: Vec<i64> = changes
        .iter()
        .scan(0, |freq, c| {
            *freq += c;
            Some(*freq)
        })
        .collect();
    let drift = totals.last().copied().unwrap_or(0);
    let spread = totals.iter().chain([&0]).max().unwrap_or(&0) - totals.iter().chain([&0]).min().unwrap_or(&0);
    // pass k only revisits pass-0 totals when k * |drift| <= spread
    let passes = if drift == 0 { 2 } else { (spread / drift.abs()) as usize + 2 };

    let mut seen = HashSet::from([0]);
    let mut freq = 0;
    for _ in 0..passes {
        for &c in changes {
            freq += c;
            if !seen.insert(freq) {
                return Some(freq);
            }
        }
    }
    None
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        // examples come comma separated on one line
        if !input.contains('\n') && input.contains(',') {
            return separated(input, ',').map_err(invalid);
        }
        lines_with(input, number)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        first_repeat(shared)
            .map(|f| f.to_string())
            .ok_or_else(|| SolveError::no_solution("frequency never repeats"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::{solve_part, solve_part_err};

    #[test]
    fn test_resulting_frequency() {
        assert_eq!(solve_part::<Solver>("+1, -2, +3, +1", 1), "3");
        assert_eq!(solve_part::<Solver>("+1\n+1\n-2\n", 1), "0");
    }

    #[test]
    fn test_first_repeat() {
        assert_eq!(solve_part::<Solver>("+1, -2, +3, +1", 2), "2");
        assert_eq!(solve_part::<Solver>("+1, -1", 2), "0");
        assert_eq!(solve_part::<Solver>("+3, +3, +4, -2, -4", 2), "10");
        assert_eq!(solve_part::<Solver>("-6, +3, +8, +5, -6", 2), "5");
        assert_eq!(solve_part::<Solver>("+7, +7, -2, -7, -4", 2), "14");
    }

    #[test]
    fn test_never_repeating() {
        assert!(matches!(solve_part_err::<Solver>("+1\n+1\n", 2), SolveError::NoSolution(_)));
    }
}
