use std::collections::HashMap;

use anyhow::Context;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::lines_with;
use crate::utils::search::{bfs, bfs_distances};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2019, day = 6, tags = ["graph", "bfs"])]
pub struct Solver;

/// Orbit map keyed by object name
#[derive(Debug, Default)]
pub struct OrbitMap<'a> {
    parent: HashMap<&'a str, &'a str>,
    children: HashMap<&'a str, Vec<&'a str>>,
}

impl<'a> OrbitMap<'a> {
    fn neighbours(&self, object: &'a str) -> impl Iterator<Item = &'a str> + '_ {
        self.parent
            .get(object)
            .copied()
            .into_iter()
            .chain(self.children.get(object).into_iter().flatten().copied())
    }

    /// Sum of every object's depth below `COM`
    pub fn total_orbits(&self) -> usize {
        bfs_distances("COM", |&o| self.children.get(o).cloned().unwrap_or_default(), None)
            .values()
            .sum()
    }

    /// Orbital transfers between the objects `from` and `to` are orbiting
    pub fn transfers(&self, from: &str, to: &str) -> Result<usize, SolveError> {
        let start = *self
            .parent
            .get(from)
            .ok_or_else(|| SolveError::no_solution(format!("{from} is not orbiting anything")))?;
        let goal = *self
            .parent
            .get(to)
            .ok_or_else(|| SolveError::no_solution(format!("{to} is not orbiting anything")))?;
        Ok(bfs(start, |&o| self.neighbours(o).collect::<Vec<_>>(), |&o| o == goal)?)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = OrbitMap<'a>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let pairs = lines_with(input, |line| line.trim().split_once(')').context("expected `A)B`"))?;
        let mut map = OrbitMap::default();
        for (center, satellite) in pairs {
            if map.parent.insert(satellite, center).is_some() {
                return Err(ParseError::InvalidFormat(format!("{satellite} orbits twice")));
            }
            map.children.entry(center).or_default().push(satellite);
        }
        Ok(map)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.total_orbits().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.transfers("YOU", "SAN")?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::{solve_part, solve_part_err};

    const EXAMPLE: &str = "COM)B\nB)C\nC)D\nD)E\nE)F\nB)G\nG)H\nD)I\nE)J\nJ)K\nK)L\n";

    #[test]
    fn test_total_orbits() {
        assert_eq!(solve_part::<Solver>(EXAMPLE, 1), "42");
    }

    #[test]
    fn test_transfers() {
        let input = format!("{EXAMPLE}K)YOU\nI)SAN\n");
        assert_eq!(solve_part::<Solver>(&input, 2), "4");
    }

    #[test]
    fn test_missing_santa() {
        assert!(matches!(solve_part_err::<Solver>(EXAMPLE, 2), SolveError::NoSolution(_)));
    }
}
