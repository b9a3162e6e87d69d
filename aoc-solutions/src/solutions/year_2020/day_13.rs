use anyhow::Context;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::math::lcm;
use crate::utils::parse::{invalid, number};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 13, tags = ["modular-arithmetic"])]
pub struct Solver;

#[derive(Debug, Clone)]
pub struct Schedule {
    pub earliest: u64,
    /// `(offset, id)` for every bus in service
    pub buses: Vec<(u64, u64)>,
}

fn parse_buses(line: &str) -> anyhow::Result<Vec<(u64, u64)>> {
    let mut buses = Vec::new();
    for (offset, token) in line.trim().split(',').enumerate() {
        if token == "x" {
            continue;
        }
        let id: u64 = number(token)?;
        if id == 0 {
            anyhow::bail!("bus id 0 at offset {offset}");
        }
        buses.push((offset as u64, id));
    }
    Ok(buses)
}

fn parse_schedule(input: &str) -> anyhow::Result<Schedule> {
    let mut lines = input.lines().filter(|l| !l.trim().is_empty());
    let earliest = number(lines.next().context("missing departure time")?)?;
    let buses = parse_buses(lines.next().context("missing bus list")?)?;
    Ok(Schedule { earliest, buses })
}

/// Earliest `t` where bus `i` departs at `t + offset_i` for every bus.
///
/// Sieves one bus at a time, stepping by the lcm of the buses aligned so far.
pub fn aligned_departure(buses: &[(u64, u64)]) -> Option<u64> {
    let mut time = 0u64;
    let mut step = 1u64;
    for &(offset, id) in buses {
        let mut tries = 0;
        while (time + offset) % id != 0 {
            time = time.checked_add(step)?;
            tries += 1;
            if tries > id {
                return None;
            }
        }
        step = lcm(step, id);
    }
    Some(time)
}

impl AocParser for Solver {
    type SharedData<'a> = Schedule;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let schedule = parse_schedule(input).map_err(invalid)?;
        if schedule.buses.is_empty() {
            return Err(ParseError::MissingData("no bus is in service".into()));
        }
        Ok(schedule)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (wait, id) = shared
            .buses
            .iter()
            .map(|&(_, id)| ((id - shared.earliest % id) % id, id))
            .min()
            .ok_or_else(|| SolveError::no_solution("no buses"))?;
        Ok((wait * id).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        aligned_departure(&shared.buses)
            .map(|t| t.to_string())
            .ok_or_else(|| SolveError::no_solution("bus offsets can never line up"))
    }
}
