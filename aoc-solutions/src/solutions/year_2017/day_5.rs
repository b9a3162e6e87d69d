use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::{lines_with, number};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2017, day = 5, tags = ["simulation"])]
pub struct Solver;

/// Steps until the pointer leaves the tape. Each used offset changes by
/// `adjust(offset)`.
pub fn escape_steps(tape: &[i64], adjust: impl Fn(i64) -> i64) -> u64 {
    let mut tape = tape.to_vec();
    let mut pc = 0i64;
    let mut steps = 0;
    while let Some(offset) = usize::try_from(pc).ok().and_then(|i| tape.get_mut(i)) {
        let jump = *offset;
        *offset += adjust(jump);
        pc += jump;
        steps += 1;
    }
    steps
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        lines_with(input, number)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(escape_steps(shared, |_| 1).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(escape_steps(shared, |jump| if jump >= 3 { -1 } else { 1 }).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_part;

    #[test]
    fn test_example() {
        let input = "0\n3\n0\n1\n-3\n";
        assert_eq!(solve_part::<Solver>(input, 1), "5");
        assert_eq!(solve_part::<Solver>(input, 2), "10");
    }
}
