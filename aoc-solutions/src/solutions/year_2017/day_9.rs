use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::non_empty;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2017, day = 9, tags = ["parser", "state-machine"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamStats {
    /// Sum of group depths
    pub score: u64,
    /// Non-cancelled characters inside garbage
    pub garbage: u64,
}

/// Scans a stream of `{}` groups and `<>` garbage with `!` cancellation.
pub fn scan(stream: &str) -> Result<StreamStats, ParseError> {
    let mut stats = StreamStats::default();
    let mut depth = 0u64;
    let mut in_garbage = false;
    let mut chars = stream.chars();
    while let Some(c) = chars.next() {
        match (in_garbage, c) {
            (_, '!') => {
                chars.next();
            }
            (true, '>') => in_garbage = false,
            (true, _) => stats.garbage += 1,
            (false, '<') => in_garbage = true,
            (false, '{') => {
                depth += 1;
                stats.score += depth;
            }
            (false, '}') => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| ParseError::InvalidFormat("unbalanced `}`".into()))?;
            }
            (false, _) => {}
        }
    }
    if in_garbage || depth != 0 {
        return Err(ParseError::MissingData("stream ends inside a group or garbage".into()));
    }
    Ok(stats)
}

impl AocParser for Solver {
    type SharedData<'a> = StreamStats;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        scan(non_empty(input)?)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.score.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.garbage.to_string())
    }
}
