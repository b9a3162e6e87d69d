use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::{invalid, non_empty, number};
use crate::utils::search::{SearchError, find_cycle};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2017, day = 6, tags = ["cycle"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    banks: Vec<u32>,
    cycle: Option<(usize, usize)>,
}

/// One reallocation round: empty the fullest bank (lowest index on ties)
/// and deal its blocks one by one to the following banks.
pub fn redistribute(banks: &[u32]) -> Vec<u32> {
    let mut next = banks.to_vec();
    let n = next.len();
    let Some((start, &blocks)) = banks
        .iter()
        .enumerate()
        .max_by(|(i, a), (j, b)| a.cmp(b).then(j.cmp(i)))
    else {
        return next;
    };
    next[start] = 0;
    let (whole, extra) = (blocks / n as u32, blocks as usize % n);
    for offset in 1..=n {
        next[(start + offset) % n] += whole + u32::from(offset <= extra);
    }
    next
}

fn cycle(shared: &mut SharedData) -> Result<(usize, usize), SearchError> {
    if let Some(found) = shared.cycle {
        return Ok(found);
    }
    let found = find_cycle(shared.banks.clone(), |b| redistribute(b), None)?;
    let result = (found.repeat_at, found.len());
    shared.cycle = Some(result);
    Ok(result)
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let banks = non_empty(input)?
            .split_whitespace()
            .map(number)
            .collect::<anyhow::Result<_>>()
            .map_err(invalid)?;
        Ok(SharedData { banks, cycle: None })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(cycle(shared)?.0.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(cycle(shared)?.1.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_part;

    #[test]
    fn test_redistribute_sequence() {
        assert_eq!(redistribute(&[0, 2, 7, 0]), vec![2, 4, 1, 2]);
        assert_eq!(redistribute(&[2, 4, 1, 2]), vec![3, 1, 2, 3]);
        assert_eq!(redistribute(&[3, 1, 2, 3]), vec![0, 2, 3, 4]);
    }

    #[test]
    fn test_example() {
        assert_eq!(solve_part::<Solver>("0 2 7 0", 1), "5");
        assert_eq!(solve_part::<Solver>("0\t2\t7\t0", 2), "4");
    }
}
