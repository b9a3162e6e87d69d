use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::dp_cache::{DpCache, HashMapBackend};
use crate::utils::parse::{invalid, non_empty, number};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 11, tags = ["dp"])]
pub struct Solver;

/// What one stone becomes after a single blink
pub fn blink(stone: u64) -> Vec<u64> {
    if stone == 0 {
        return vec![1];
    }
    let digits = stone.ilog10() + 1;
    if digits % 2 == 0 {
        let half = 10u64.pow(digits / 2);
        vec![stone / half, stone % half]
    } else {
        vec![stone * 2024]
    }
}

/// Stones after `blinks` blinks; `(stone, blinks)` pairs are memoized.
pub fn count_after(stones: &[u64], blinks: u32) -> u64 {
    let cache = DpCache::new(
        HashMapBackend::new(),
        |&(stone, left): &(u64, u32)| {
            if left == 0 {
                vec![]
            } else {
                blink(stone).into_iter().map(|s| (s, left - 1)).collect()
            }
        },
        |&(_, left): &(u64, u32), deps: Vec<u64>| if left == 0 { 1 } else { deps.iter().sum() },
    );
    stones.iter().map(|&s| cache.get(&(s, blinks))).sum()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<u64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        non_empty(input)?
            .split_whitespace()
            .map(number)
            .collect::<anyhow::Result<_>>()
            .map_err(invalid)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_after(shared, 25).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_after(shared, 75).to_string())
    }
}
