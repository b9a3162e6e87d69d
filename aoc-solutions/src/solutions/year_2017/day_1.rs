use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::non_empty;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2017, day = 1, tags = ["ring"])]
pub struct Solver;

/// Sum of digits equal to the digit `offset` positions ahead, wrapping around.
pub fn captcha(digits: &[u32], offset: usize) -> u32 {
    let n = digits.len();
    (0..n)
        .filter(|&i| digits[i] == digits[(i + offset) % n])
        .map(|i| digits[i])
        .sum()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<u32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        non_empty(input)?
            .chars()
            .map(|c| {
                c.to_digit(10)
                    .ok_or_else(|| ParseError::InvalidFormat(format!("{c:?} is not a digit")))
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(captcha(shared, 1).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(captcha(shared, shared.len() / 2).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_part;

    #[test]
    fn test_next_digit() {
        for (input, expected) in [("1122", "3"), ("1111", "4"), ("1234", "0"), ("91212129", "9")] {
            assert_eq!(solve_part::<Solver>(input, 1), expected, "{input}");
        }
    }

    #[test]
    fn test_halfway_digit() {
        for (input, expected) in [
            ("1212", "6"),
            ("1221", "0"),
            ("123425", "4"),
            ("123123", "12"),
            ("12131415", "4"),
        ] {
            assert_eq!(solve_part::<Solver>(input, 2), expected, "{input}");
        }
    }
}
