use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::{invalid, non_empty, number};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2017, day = 17, tags = ["simulation"])]
pub struct Solver;

/// Value following the last inserted one after `inserts` rounds.
pub fn after_last(step: usize, inserts: usize) -> usize {
    let mut buffer = Vec::with_capacity(inserts + 1);
    buffer.push(0);
    let mut pos = 0;
    for value in 1..=inserts {
        pos = (pos + step) % buffer.len() + 1;
        buffer.insert(pos, value);
    }
    buffer[(pos + 1) % buffer.len()]
}

/// Value following `0` after `inserts` rounds.
///
/// `0` never moves from index 0, so only insertions at index 1 matter.
pub fn after_zero(step: usize, inserts: usize) -> usize {
    let mut pos = 0;
    let mut after = 0;
    for value in 1..=inserts {
        pos = (pos + step) % value + 1;
        if pos == 1 {
            after = value;
        }
    }
    after
}

impl AocParser for Solver {
    type SharedData<'a> = usize;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        number(non_empty(input)?).map_err(invalid)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(after_last(*shared, 2017).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(after_zero(*shared, 50_000_000).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_part;

    #[test]
    fn test_example() {
        assert_eq!(after_last(3, 3), 1);
        assert_eq!(after_last(3, 9), 5);
        assert_eq!(solve_part::<Solver>("3", 1), "638");
    }

    #[test]
    fn test_after_zero_matches_buffer() {
        // after 9 inserts with step 3: 0 9 5 7 2 4 3 8 6 1
        assert_eq!(after_zero(3, 9), 9);
        assert_eq!(after_zero(3, 3), 2);
    }
}
