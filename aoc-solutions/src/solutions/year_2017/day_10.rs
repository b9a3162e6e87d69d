use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::parse::{invalid, separated};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2017, day = 10, tags = ["ring", "hash"])]
pub struct Solver;

const SUFFIX: [u8; 5] = [17, 31, 73, 47, 23];
const ROUNDS: usize = 64;

/// Circular list of marks twisted by successive lengths.
#[derive(Debug, Clone)]
pub struct KnotRing {
    marks: Vec<u8>,
    pos: usize,
    skip: usize,
}

impl KnotRing {
    pub fn new(size: usize) -> Self {
        Self {
            marks: (0..size).map(|i| i as u8).collect(),
            pos: 0,
            skip: 0,
        }
    }

    pub fn round(&mut self, lengths: &[usize]) {
        let n = self.marks.len();
        for &len in lengths {
            for i in 0..len / 2 {
                self.marks.swap((self.pos + i) % n, (self.pos + len - 1 - i) % n);
            }
            self.pos = (self.pos + len + self.skip) % n;
            self.skip += 1;
        }
    }
}

/// Full 64-round knot hash as 32 lowercase hex digits.
pub fn knot_hash(text: &str) -> String {
    let lengths: Vec<usize> = text
        .bytes()
        .chain(SUFFIX)
        .map(usize::from)
        .collect();
    let mut ring = KnotRing::new(256);
    for _ in 0..ROUNDS {
        ring.round(&lengths);
    }
    ring.marks
        .chunks(16)
        .map(|block| block.iter().fold(0, |acc, b| acc ^ b))
        .map(|byte| format!("{byte:02x}"))
        .join("")
}

fn single_round_product(input: &str, size: usize) -> Result<u64, SolveError> {
    let lengths: Vec<usize> = separated(input, ',')
        .map_err(|e| SolveError::SolveFailed(invalid(e).into()))?;
    if let Some(&len) = lengths.iter().find(|&&len| len > size) {
        return Err(SolveError::no_solution(format!("length {len} exceeds ring size {size}")));
    }
    let mut ring = KnotRing::new(size);
    ring.round(&lengths);
    Ok(u64::from(ring.marks[0]) * u64::from(ring.marks[1]))
}

impl AocParser for Solver {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.trim())
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(single_round_product(shared, 256)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(knot_hash(shared))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_single_round() {
        assert_eq!(single_round_product("3,4,1,5", 5).unwrap(), 12);
        assert!(single_round_product("3,9", 5).is_err());
    }

    #[test]
    fn test_full_hash() {
        assert_eq!(knot_hash(""), "a2582a3a0e66e6e86e3812dcb672a272");
        assert_eq!(knot_hash("AoC 2017"), "33efeb34ea91902bb2f59c9920caa6cd");
        assert_eq!(knot_hash("1,2,3"), "3efbe78a8d82f29979031a4aa0b16a9d");
        assert_eq!(knot_hash("1,2,4"), "63960835bcdc130f0b66d7ff4f6a5a8e");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10))]

        #[test]
        fn prop_hash_is_32_hex_digits(text in "[ -~]{0,40}") {
            let hash = knot_hash(&text);
            prop_assert_eq!(hash.len(), 32);
            prop_assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }
}
