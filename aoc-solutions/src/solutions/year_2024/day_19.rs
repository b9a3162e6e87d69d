use anyhow::Context;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::dp_cache::{DpCache, DpProblem, VecBackend};
use crate::utils::parse::invalid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 19, tags = ["dp", "strings"])]
pub struct Solver;

#[derive(Debug, Clone)]
pub struct Onsen<'a> {
    towels: Vec<&'a str>,
    designs: Vec<&'a str>,
}

/// Ways to build `design[i..]` from the towels; the empty suffix has one.
struct Arrangements<'a, 'b> {
    towels: &'b [&'a str],
    design: &'a str,
}

impl DpProblem<usize, u64> for Arrangements<'_, '_> {
    fn deps(&self, &i: &usize) -> Vec<usize> {
        let rest = &self.design[i..];
        self.towels
            .iter()
            .filter(|t| rest.starts_with(**t))
            .map(|t| i + t.len())
            .collect()
    }

    fn compute(&self, &i: &usize, deps: Vec<u64>) -> u64 {
        if i == self.design.len() { 1 } else { deps.iter().sum() }
    }
}

impl Onsen<'_> {
    pub fn arrangements(&self, design: &str) -> u64 {
        let cache = DpCache::with_problem(
            VecBackend::with_capacity(design.len() + 1),
            Arrangements {
                towels: &self.towels,
                design,
            },
        );
        cache.get(&0)
    }
}

fn parse_onsen(input: &str) -> anyhow::Result<Onsen<'_>> {
    let mut lines = input.lines().map(str::trim).filter(|l| !l.is_empty());
    let towels: Vec<&str> = lines
        .next()
        .context("missing towel patterns")?
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect();
    let designs: Vec<&str> = lines.collect();
    let colours = |s: &str| s.bytes().all(|b| b"wubrg".contains(&b));
    if let Some(bad) = towels.iter().chain(&designs).find(|s| !colours(s)) {
        anyhow::bail!("unknown stripe colour in {bad:?}");
    }
    Ok(Onsen { towels, designs })
}

impl AocParser for Solver {
    type SharedData<'a> = Onsen<'a>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_onsen(input).map_err(invalid)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let possible = shared
            .designs
            .iter()
            .filter(|d| shared.arrangements(d) > 0)
            .count();
        Ok(possible.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let ways: u64 = shared.designs.iter().map(|d| shared.arrangements(d)).sum();
        Ok(ways.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_part;

    const EXAMPLE: &str = "\
r, wr, b, g, bwu, rb, gb, br

brwrr
bggr
gbbr
rrbgbr
ubwu
bwurrg
brgr
bbrwb
";

    #[test]
    fn test_possible_designs() {
        assert_eq!(solve_part::<Solver>(EXAMPLE, 1), "6");
    }

    #[test]
    fn test_all_arrangements() {
        let onsen = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(onsen.arrangements("brwrr"), 2);
        assert_eq!(onsen.arrangements("rrbgbr"), 6);
        assert_eq!(onsen.arrangements("ubwu"), 0);
        assert_eq!(solve_part::<Solver>(EXAMPLE, 2), "16");
    }

    #[test]
    fn test_unknown_colour() {
        assert!(Solver::parse("r, x\n\nrr\n").is_err());
    }
}
