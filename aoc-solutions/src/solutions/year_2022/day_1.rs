use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::{invalid, non_empty, number};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 1)]
pub struct Solver;

impl AocParser for Solver {
    /// Calories carried by each elf, largest first
    type SharedData<'a> = Vec<u64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let input = non_empty(input)?;
        let mut totals = input
            .split("\n\n")
            .map(|block| block.lines().map(number::<u64>).sum::<anyhow::Result<u64>>())
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(invalid)?;
        totals.sort_unstable_by(|a, b| b.cmp(a));
        Ok(totals)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared[0].to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if shared.len() < 3 {
            return Err(SolveError::no_solution(format!("only {} elves", shared.len())));
        }
        Ok(shared.iter().take(3).sum::<u64>().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::{solve_part, solve_part_err};

    const EXAMPLE: &str = "1000\n2000\n3000\n\n4000\n\n5000\n6000\n\n7000\n8000\n9000\n\n10000\n";

    #[test]
    fn test_top_elf() {
        assert_eq!(solve_part::<Solver>(EXAMPLE, 1), "24000");
    }

    #[test]
    fn test_top_three() {
        assert_eq!(solve_part::<Solver>(EXAMPLE, 2), "45000");
        assert!(matches!(solve_part_err::<Solver>("1\n\n2\n", 2), SolveError::NoSolution(_)));
    }
}
