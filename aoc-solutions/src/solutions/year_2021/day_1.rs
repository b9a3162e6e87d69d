use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::{lines_with, number};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 1, tags = ["sliding-window"])]
pub struct Solver;

/// Depth increases between readings `gap` apart.
///
/// Comparing sums of two overlapping windows of width `gap` reduces to
/// comparing their non-shared ends.
pub fn increases(depths: &[u32], gap: usize) -> usize {
    depths.windows(gap + 1).filter(|w| w[gap] > w[0]).count()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<u32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        lines_with(input, number)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(increases(shared, 1).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(increases(shared, 3).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_part;
    use proptest::prelude::*;

    const EXAMPLE: &str = "199\n200\n208\n210\n200\n207\n240\n269\n260\n263\n";

    #[test]
    fn test_single_readings() {
        assert_eq!(solve_part::<Solver>(EXAMPLE, 1), "7");
    }

    #[test]
    fn test_three_measurement_windows() {
        assert_eq!(solve_part::<Solver>(EXAMPLE, 2), "5");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10))]

        #[test]
        fn prop_window_shortcut_matches_sums(depths in prop::collection::vec(0u32..10_000, 0..60)) {
            let sums: Vec<u32> = depths.windows(3).map(|w| w.iter().sum()).collect();
            let expected = sums.windows(2).filter(|w| w[1] > w[0]).count();
            prop_assert_eq!(increases(&depths, 3), expected);
        }
    }
}
