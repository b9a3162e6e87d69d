use anyhow::{Context, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use indexmap::IndexMap;

use crate::utils::parse::{invalid, non_empty, number};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 15, tags = ["hash"])]
pub struct Solver;

pub fn hash(step: &str) -> usize {
    step.bytes().fold(0, |acc, b| (acc + b as usize) * 17 % 256)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op<'a> {
    Remove(&'a str),
    Insert(&'a str, u32),
}

fn op(step: &str) -> anyhow::Result<Op<'_>> {
    if let Some(label) = step.strip_suffix('-') {
        return Ok(Op::Remove(label));
    }
    let (label, focal) = step.split_once('=').with_context(|| format!("bad step {step:?}"))?;
    if label.is_empty() {
        bail!("step {step:?} has no label");
    }
    Ok(Op::Insert(label, number(focal)?))
}

/// Total focusing power after running every step
pub fn focusing_power(steps: &[&str]) -> anyhow::Result<u64> {
    // insertion order within a box is lens order
    let mut boxes: Vec<IndexMap<&str, u32>> = vec![IndexMap::new(); 256];
    for step in steps {
        match op(step)? {
            Op::Remove(label) => {
                boxes[hash(label)].shift_remove(label);
            }
            Op::Insert(label, focal) => {
                boxes[hash(label)].insert(label, focal);
            }
        }
    }
    Ok(boxes
        .iter()
        .enumerate()
        .flat_map(|(b, lenses)| {
            lenses
                .values()
                .enumerate()
                .map(move |(slot, &focal)| ((b + 1) * (slot + 1)) as u64 * u64::from(focal))
        })
        .sum())
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let steps: Vec<&str> = non_empty(input)?.split(',').map(str::trim).collect();
        for step in &steps {
            op(step).map_err(invalid)?;
        }
        Ok(steps)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().map(|s| hash(s)).sum::<usize>().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        focusing_power(shared)
            .map(|p| p.to_string())
            .map_err(|e| SolveError::SolveFailed(e.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_part;

    const EXAMPLE: &str = "rn=1,cm-,qp=3,cm=2,qp-,pc=4,ot=9,ab=5,pc-,pc=6,ot=7";

    #[test]
    fn test_hash() {
        assert_eq!(hash("HASH"), 52);
        assert_eq!(hash("rn"), 0);
        assert_eq!(hash("qp"), 1);
        assert_eq!(solve_part::<Solver>(EXAMPLE, 1), "1320");
    }

    #[test]
    fn test_focusing_power() {
        assert_eq!(solve_part::<Solver>(EXAMPLE, 2), "145");
    }

    #[test]
    fn test_bad_step() {
        assert!(Solver::parse("rn=1,=4").is_err());
        assert!(Solver::parse("rn").is_err());
    }
}
