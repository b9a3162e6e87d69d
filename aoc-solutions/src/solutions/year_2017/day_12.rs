use std::collections::HashSet;

use anyhow::Context;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::{lines_with, number, separated};
use crate::utils::search::bfs_distances;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2017, day = 12, tags = ["graph", "bfs"])]
pub struct Solver;

/// Adjacency lists indexed by program id
pub type Pipes = Vec<Vec<usize>>;

fn parse_line(line: &str) -> anyhow::Result<(usize, Vec<usize>)> {
    let (id, peers) = line.split_once("<->").context("missing `<->`")?;
    Ok((number(id)?, separated(peers, ',')?))
}

fn group(pipes: &Pipes, start: usize) -> HashSet<usize> {
    bfs_distances(start, |&p| pipes[p].iter().copied(), None)
        .into_keys()
        .collect()
}

impl AocParser for Solver {
    type SharedData<'a> = Pipes;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let entries = lines_with(input, parse_line)?;
        let mut pipes = vec![Vec::new(); entries.len()];
        for (id, peers) in entries {
            if id >= pipes.len() || peers.iter().any(|&p| p >= pipes.len()) {
                return Err(ParseError::InvalidFormat(format!("program {id} links outside the village")));
            }
            pipes[id] = peers;
        }
        if pipes.is_empty() {
            return Err(ParseError::MissingData("no programs".into()));
        }
        Ok(pipes)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(group(shared, 0).len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut seen = HashSet::new();
        let mut groups = 0;
        for id in 0..shared.len() {
            if !seen.contains(&id) {
                seen.extend(group(shared, id));
                groups += 1;
            }
        }
        Ok(groups.to_string())
    }
}
