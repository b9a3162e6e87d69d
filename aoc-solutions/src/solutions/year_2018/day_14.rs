use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::non_empty;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2018, day = 14, tags = ["simulation"])]
pub struct Solver;

/// Scoreboard grown by two elves
#[derive(Debug, Clone)]
pub struct Scoreboard {
    scores: Vec<u8>,
    elves: [usize; 2],
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self {
            scores: vec![3, 7],
            elves: [0, 1],
        }
    }
}

impl Scoreboard {
    fn step(&mut self) {
        let [a, b] = self.elves;
        let sum = self.scores[a] + self.scores[b];
        if sum >= 10 {
            self.scores.push(sum / 10);
        }
        self.scores.push(sum % 10);
        let len = self.scores.len();
        self.elves = [
            (a + 1 + self.scores[a] as usize) % len,
            (b + 1 + self.scores[b] as usize) % len,
        ];
    }

    /// The ten scores following the first `skip` recipes
    pub fn ten_after(mut self, skip: usize) -> String {
        while self.scores.len() < skip + 10 {
            self.step();
        }
        self.scores[skip..skip + 10]
            .iter()
            .map(|d| char::from(b'0' + d))
            .collect()
    }

    /// Number of recipes to the left of the first appearance of `pattern`
    pub fn recipes_before(mut self, pattern: &[u8]) -> usize {
        let mut checked = 0;
        loop {
            while checked + pattern.len() <= self.scores.len() {
                if self.scores[checked..checked + pattern.len()] == *pattern {
                    return checked;
                }
                checked += 1;
            }
            self.step();
        }
    }
}

impl AocParser for Solver {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let digits = non_empty(input)?;
        if digits.bytes().all(|b| b.is_ascii_digit()) {
            Ok(digits)
        } else {
            Err(ParseError::InvalidFormat(format!("expected digits, got {digits:?}")))
        }
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let skip = shared
            .parse()
            .map_err(|e| SolveError::no_solution(format!("recipe count {shared:?}: {e}")))?;
        Ok(Scoreboard::default().ten_after(skip))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let pattern: Vec<u8> = shared.bytes().map(|b| b - b'0').collect();
        Ok(Scoreboard::default().recipes_before(&pattern).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_part;

    #[test]
    fn test_ten_after() {
        assert_eq!(solve_part::<Solver>("9", 1), "5158916779");
        assert_eq!(solve_part::<Solver>("5", 1), "0124515891");
        assert_eq!(solve_part::<Solver>("18", 1), "9251071085");
        assert_eq!(solve_part::<Solver>("2018", 1), "5941429882");
    }

    #[test]
    fn test_recipes_before() {
        assert_eq!(solve_part::<Solver>("51589", 2), "9");
        assert_eq!(solve_part::<Solver>("01245", 2), "5");
        assert_eq!(solve_part::<Solver>("92510", 2), "18");
        assert_eq!(solve_part::<Solver>("59414", 2), "2018");
    }
}
