use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::{invalid, non_empty, separated};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 15, tags = ["simulation"])]
pub struct Solver;

const UNSEEN: u32 = u32::MAX;

/// The `turn`-th number spoken in the memory game.
pub fn spoken_at(start: &[u32], turn: usize) -> u32 {
    let Some((&first_last, prefix)) = start.split_last() else {
        return 0;
    };
    if turn <= start.len() {
        return start[turn.saturating_sub(1)];
    }

    // last_turn[n] = turn on which n was last spoken, before the current one
    let largest = start.iter().map(|&n| n as usize).max().unwrap_or(0);
    let mut last_turn = vec![UNSEEN; largest.max(turn) + 1];
    for (t, &n) in prefix.iter().enumerate() {
        last_turn[n as usize] = t as u32;
    }

    let mut current = first_last;
    for t in start.len() - 1..turn - 1 {
        let seen = std::mem::replace(&mut last_turn[current as usize], t as u32);
        current = if seen == UNSEEN { 0 } else { t as u32 - seen };
    }
    current
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<u32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        separated(non_empty(input)?, ',').map_err(invalid)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(spoken_at(shared, 2020).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(spoken_at(shared, 30_000_000).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_part;

    #[test]
    fn test_first_turns() {
        let spoken: Vec<_> = (1..=10).map(|t| spoken_at(&[0, 3, 6], t)).collect();
        assert_eq!(spoken, vec![0, 3, 6, 0, 3, 3, 1, 0, 4, 0]);
    }

    #[test]
    fn test_turn_2020() {
        assert_eq!(solve_part::<Solver>("0,3,6", 1), "436");
        assert_eq!(solve_part::<Solver>("1,3,2", 1), "1");
        assert_eq!(solve_part::<Solver>("3,2,1", 1), "438");
        assert_eq!(solve_part::<Solver>("3,1,2", 1), "1836");
    }

    #[test]
    fn test_turn_thirty_million() {
        assert_eq!(solve_part::<Solver>("0,3,6", 2), "175594");
    }
}
