use std::collections::HashMap;

use anyhow::Context;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

use crate::utils::parse::{invalid, number};
use crate::utils::search::bfs_distances;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 16, tags = ["graph", "bfs", "bitmask"])]
pub struct Solver;

const START: &str = "AA";

/// Valve network reduced to the start and the valves worth opening.
#[derive(Debug, Clone)]
pub struct Network {
    /// `flows[i]` for useful valve `i`
    flows: Vec<u32>,
    /// `dist[i][j]` in minutes; index `flows.len()` is the start
    dist: Vec<Vec<u32>>,
}

struct RawValve<'a> {
    name: &'a str,
    flow: u32,
    tunnels: Vec<&'a str>,
}

fn parse_valves(input: &str) -> anyhow::Result<Vec<RawValve<'_>>> {
    let re = Regex::new(r"^Valve (\w+) has flow rate=(\d+); tunnels? leads? to valves? (.+)$")?;
    input
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|line| {
            let caps = re.captures(line).with_context(|| format!("bad valve {line:?}"))?;
            let (Some(name), Some(flow), Some(tunnels)) = (caps.get(1), caps.get(2), caps.get(3)) else {
                anyhow::bail!("bad valve {line:?}");
            };
            Ok(RawValve {
                name: name.as_str(),
                flow: number(flow.as_str())?,
                tunnels: tunnels.as_str().split(", ").collect(),
            })
        })
        .collect()
}

impl Network {
    fn compress(valves: &[RawValve<'_>]) -> anyhow::Result<Network> {
        let by_name: HashMap<&str, &RawValve<'_>> = valves.iter().map(|v| (v.name, v)).collect();
        if let Some((from, to)) = valves
            .iter()
            .flat_map(|v| v.tunnels.iter().map(move |t| (v.name, *t)))
            .find(|(_, t)| !by_name.contains_key(t))
        {
            anyhow::bail!("tunnel from {from} leads to unknown valve {to}");
        }
        by_name.get(START).context("no starting valve AA")?;

        let mut useful: Vec<&RawValve<'_>> = valves.iter().filter(|v| v.flow > 0).collect();
        if useful.len() > 63 {
            anyhow::bail!("{} useful valves do not fit in a bitmask", useful.len());
        }
        let flows = useful.iter().map(|v| v.flow).collect();
        useful.extend(by_name.get(START).copied());

        let dist = useful
            .iter()
            .map(|from| {
                let reach = bfs_distances(from.name, |name| by_name[name].tunnels.clone(), None);
                useful
                    .iter()
                    .map(|to| reach.get(to.name).map_or(u32::MAX, |&d| d as u32))
                    .collect()
            })
            .collect();
        Ok(Network { flows, dist })
    }

    /// Best released pressure for every set of opened valves within `minutes`.
    pub fn best_by_opened(&self, minutes: u32) -> HashMap<u64, u32> {
        let mut best = HashMap::new();
        self.explore(self.flows.len(), minutes, 0, 0, &mut best);
        best
    }

    fn explore(&self, at: usize, left: u32, opened: u64, released: u32, best: &mut HashMap<u64, u32>) {
        let entry = best.entry(opened).or_insert(0);
        *entry = (*entry).max(released);
        for (next, &flow) in self.flows.iter().enumerate() {
            let travel = self.dist[at][next];
            if opened & (1 << next) != 0 || travel == u32::MAX || travel + 1 >= left {
                continue;
            }
            let left = left - travel - 1;
            self.explore(next, left, opened | 1 << next, released + flow * left, best);
        }
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Network;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let valves = parse_valves(input).map_err(invalid)?;
        Network::compress(&valves).map_err(invalid)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let best = shared.best_by_opened(30);
        Ok(best.values().max().copied().unwrap_or(0).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // you and the elephant open disjoint sets of valves
        let best: Vec<(u64, u32)> = shared.best_by_opened(26).into_iter().collect();
        let mut answer = 0;
        for (i, &(mine, a)) in best.iter().enumerate() {
            for &(theirs, b) in &best[i..] {
                if mine & theirs == 0 {
                    answer = answer.max(a + b);
                }
            }
        }
        Ok(answer.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_part;

    const EXAMPLE: &str = "\
Valve AA has flow rate=0; tunnels lead to valves DD, II, BB
Valve BB has flow rate=13; tunnels lead to valves CC, AA
Valve CC has flow rate=2; tunnels lead to valves DD, BB
Valve DD has flow rate=20; tunnels lead to valves CC, AA, EE
Valve EE has flow rate=3; tunnels lead to valves FF, DD
Valve FF has flow rate=0; tunnels lead to valves EE, GG
Valve GG has flow rate=0; tunnels lead to valves FF, HH
Valve HH has flow rate=22; tunnel leads to valve GG
Valve II has flow rate=0; tunnels lead to valves AA, JJ
Valve JJ has flow rate=21; tunnel leads to valve II
";

    #[test]
    fn test_alone() {
        assert_eq!(solve_part::<Solver>(EXAMPLE, 1), "1651");
    }

    #[test]
    fn test_with_elephant() {
        assert_eq!(solve_part::<Solver>(EXAMPLE, 2), "1707");
    }

    #[test]
    fn test_unknown_tunnel_rejected() {
        assert!(Solver::parse("Valve AA has flow rate=0; tunnel leads to valve ZZ\n").is_err());
    }

    #[test]
    fn test_distances_skip_broken_valves() {
        let network = Solver::parse(EXAMPLE).unwrap();
        // useful valves in input order: BB CC DD EE HH JJ, then AA
        assert_eq!(network.dist[6][4], 5);
        assert_eq!(network.dist[0][5], 3);
    }
}
