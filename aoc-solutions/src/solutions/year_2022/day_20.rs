use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::{lines_with, number};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 20, tags = ["simulation"])]
pub struct Solver;

const DECRYPTION_KEY: i64 = 811_589_153;

/// Mixes `rounds` times and sums the values 1000, 2000 and 3000 after `0`.
pub fn grove_sum(numbers: &[i64], key: i64, rounds: usize) -> Option<i64> {
    let values: Vec<i64> = numbers.iter().map(|n| n * key).collect();
    // order[k] = original index of the value at position k
    let mut order: Vec<usize> = (0..values.len()).collect();
    let modulus = values.len() as i64 - 1;

    for _ in 0..rounds {
        for (original, &value) in values.iter().enumerate() {
            let pos = order.iter().position(|&o| o == original)?;
            order.remove(pos);
            if modulus == 0 {
                order.insert(pos, original);
                continue;
            }
            let target = (pos as i64 + value).rem_euclid(modulus) as usize;
            order.insert(target, original);
        }
    }

    let zero = values.iter().position(|&v| v == 0)?;
    let at = order.iter().position(|&o| o == zero)?;
    Some(
        [1000, 2000, 3000]
            .iter()
            .map(|offset| values[order[(at + offset) % order.len()]])
            .sum(),
    )
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        lines_with(input, number)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        grove_sum(shared, 1, 1)
            .map(|s| s.to_string())
            .ok_or_else(|| SolveError::no_solution("file contains no 0"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        grove_sum(shared, DECRYPTION_KEY, 10)
            .map(|s| s.to_string())
            .ok_or_else(|| SolveError::no_solution("file contains no 0"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::{solve_part, solve_part_err};

    const EXAMPLE: &str = "1\n2\n-3\n3\n-2\n0\n4\n";

    #[test]
    fn test_single_mix() {
        assert_eq!(solve_part::<Solver>(EXAMPLE, 1), "3");
    }

    #[test]
    fn test_decrypted_mix() {
        assert_eq!(solve_part::<Solver>(EXAMPLE, 2), "1623178306");
    }

    #[test]
    fn test_missing_zero() {
        assert!(matches!(solve_part_err::<Solver>("1\n2\n", 1), SolveError::NoSolution(_)));
    }
}
