use std::collections::VecDeque;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

use crate::utils::parse::{invalid, non_empty, number};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2018, day = 9, tags = ["simulation", "deque"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Game {
    pub players: usize,
    pub last_marble: usize,
}

/// Winning score. The circle is a deque whose front is the current marble.
pub fn high_score(game: Game) -> u64 {
    let mut scores = vec![0u64; game.players];
    let mut circle = VecDeque::with_capacity(game.last_marble + 1);
    circle.push_back(0usize);

    for marble in 1..=game.last_marble {
        if marble % 23 == 0 {
            circle.rotate_right(7 % circle.len());
            let removed = circle.pop_front().unwrap_or(0);
            scores[marble % game.players] += (marble + removed) as u64;
        } else {
            circle.rotate_left(2 % circle.len());
            circle.push_front(marble);
        }
    }
    scores.into_iter().max().unwrap_or(0)
}

impl AocParser for Solver {
    type SharedData<'a> = Game;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let re = Regex::new(r"(\d+) players; last marble is worth (\d+) points")
            .map_err(|e| ParseError::Other(e.to_string()))?;
        let caps = re
            .captures(non_empty(input)?)
            .ok_or_else(|| ParseError::InvalidFormat(input.trim().into()))?;
        let game = Game {
            players: number(&caps[1]).map_err(invalid)?,
            last_marble: number(&caps[2]).map_err(invalid)?,
        };
        if game.players == 0 {
            return Err(ParseError::InvalidFormat("a game needs at least one player".into()));
        }
        Ok(game)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(high_score(*shared).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let game = Game {
            last_marble: shared.last_marble * 100,
            ..*shared
        };
        Ok(high_score(game).to_string())
    }
}
