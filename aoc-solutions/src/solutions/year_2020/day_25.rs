use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::math::mod_pow;
use crate::utils::parse::{lines_with, number};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2020, day = 25, tags = ["modular-arithmetic"])]
pub struct Solver;

const MODULUS: u64 = 20_201_227;
const SUBJECT: u64 = 7;

/// Smallest loop size that transforms [`SUBJECT`] into `public_key`.
pub fn loop_size(public_key: u64) -> Option<u64> {
    let mut value = 1;
    // the multiplicative group has MODULUS - 1 elements
    for size in 0..MODULUS {
        if value == public_key {
            return Some(size);
        }
        value = value * SUBJECT % MODULUS;
    }
    None
}

pub fn encryption_key(card: u64, door: u64) -> Option<u64> {
    loop_size(card).map(|size| mod_pow(door, size, MODULUS))
}

impl AocParser for Solver {
    type SharedData<'a> = (u64, u64);

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        match lines_with(input, number)?.as_slice() {
            &[card, door] => Ok((card, door)),
            keys => Err(ParseError::InvalidFormat(format!("expected 2 public keys, got {}", keys.len()))),
        }
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (card, door) = *shared;
        encryption_key(card, door)
            .map(|key| key.to_string())
            .ok_or_else(|| SolveError::no_solution(format!("{card} is not a power of {SUBJECT}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::{solve_part, solve_part_err};

    #[test]
    fn test_loop_sizes() {
        assert_eq!(loop_size(5764801), Some(8));
        assert_eq!(loop_size(17807724), Some(11));
    }

    #[test]
    fn test_key_agrees_from_both_sides() {
        assert_eq!(encryption_key(5764801, 17807724), Some(14897079));
        assert_eq!(encryption_key(17807724, 5764801), Some(14897079));
        assert_eq!(solve_part::<Solver>("5764801\n17807724\n", 1), "14897079");
    }

    #[test]
    fn test_key_outside_group() {
        assert!(matches!(solve_part_err::<Solver>("0\n1\n", 1), SolveError::NoSolution(_)));
    }
}
