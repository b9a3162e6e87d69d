use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use anyhow::Context;
use regex::Regex;

use crate::utils::math::lcm;
use crate::utils::parse::{lines_with, number};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2016, day = 15, tags = ["modular-arithmetic"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disc {
    pub positions: u64,
    pub start: u64,
}

/// Earliest release time at which every disc is at position 0 when the
/// capsule reaches it (disc `i` is reached `i + 1` seconds after release).
///
/// Sieves one disc at a time, stepping by the lcm of the discs so far.
pub fn first_release(discs: &[Disc]) -> Option<u64> {
    let mut time = 0u64;
    let mut step = 1u64;
    for (i, disc) in discs.iter().enumerate() {
        let offset = disc.start + i as u64 + 1;
        let mut tries = 0;
        while (offset + time) % disc.positions != 0 {
            time += step;
            tries += 1;
            if tries > disc.positions {
                return None;
            }
        }
        step = lcm(step, disc.positions);
    }
    Some(time)
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Disc>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let re = Regex::new(r"has (\d+) positions; at time=0, it is at position (\d+)")
            .map_err(|e| ParseError::Other(e.to_string()))?;
        lines_with(input, |line| {
            let caps = re.captures(line).context("unrecognised disc")?;
            let positions: u64 = number(&caps[1])?;
            anyhow::ensure!(positions > 0, "a disc needs at least one position");
            Ok(Disc {
                positions,
                start: number(&caps[2])?,
            })
        })
    }
}

fn release(discs: &[Disc]) -> Result<String, SolveError> {
    first_release(discs)
        .map(|t| t.to_string())
        .ok_or_else(|| SolveError::no_solution("discs never align"))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        release(shared)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut discs = shared.clone();
        discs.push(Disc {
            positions: 11,
            start: 0,
        });
        release(&discs)
    }
}
