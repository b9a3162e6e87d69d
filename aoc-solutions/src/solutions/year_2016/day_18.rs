use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::non_empty;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2016, day = 18, tags = ["cellular-automaton"])]
pub struct Solver;

/// Counts safe tiles over `rows` rows, the first being `first` (`true` = trap).
///
/// A tile is a trap exactly when its left and right neighbours differ;
/// walls beyond the edges are safe.
pub fn safe_tiles(first: &[bool], rows: usize) -> usize {
    let mut row = first.to_vec();
    let mut next = vec![false; row.len()];
    let mut safe = 0;
    for _ in 0..rows {
        safe += row.iter().filter(|&&trap| !trap).count();
        for (i, tile) in next.iter_mut().enumerate() {
            let left = i > 0 && row[i - 1];
            let right = row.get(i + 1).copied().unwrap_or(false);
            *tile = left != right;
        }
        std::mem::swap(&mut row, &mut next);
    }
    safe
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<bool>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        non_empty(input)?
            .chars()
            .map(|c| match c {
                '^' => Ok(true),
                '.' => Ok(false),
                _ => Err(ParseError::InvalidFormat(format!("unexpected tile {c:?}"))),
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(safe_tiles(shared, 40).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(safe_tiles(shared, 400_000).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_examples() {
        let small = Solver::parse("..^^.").unwrap();
        assert_eq!(safe_tiles(&small, 3), 6);
        let larger = Solver::parse(".^^.^.^^^^").unwrap();
        assert_eq!(safe_tiles(&larger, 10), 38);
    }
}
