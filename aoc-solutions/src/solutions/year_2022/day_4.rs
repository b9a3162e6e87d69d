use std::ops::RangeInclusive;

use anyhow::Context;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::{lines_with, number};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 4, tags = ["intervals"])]
pub struct Solver;

type Sections = RangeInclusive<u32>;

fn sections(text: &str) -> anyhow::Result<Sections> {
    let (lo, hi) = text.split_once('-').context("expected `lo-hi`")?;
    Ok(number(lo)?..=number(hi)?)
}

fn pair(line: &str) -> anyhow::Result<(Sections, Sections)> {
    let (a, b) = line.split_once(',').context("expected two assignments")?;
    Ok((sections(a)?, sections(b)?))
}

pub fn fully_contains(a: &Sections, b: &Sections) -> bool {
    a.start() <= b.start() && b.end() <= a.end()
}

pub fn overlaps(a: &Sections, b: &Sections) -> bool {
    a.start() <= b.end() && b.start() <= a.end()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<(Sections, Sections)>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        lines_with(input, pair)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let count = shared
            .iter()
            .filter(|(a, b)| fully_contains(a, b) || fully_contains(b, a))
            .count();
        Ok(count.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|(a, b)| overlaps(a, b)).count().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_part;
    use proptest::prelude::*;

    const EXAMPLE: &str = "2-4,6-8\n2-3,4-5\n5-7,7-9\n2-8,3-7\n6-6,4-6\n2-6,4-8\n";

    #[test]
    fn test_containment() {
        assert_eq!(solve_part::<Solver>(EXAMPLE, 1), "2");
    }

    #[test]
    fn test_overlap() {
        assert_eq!(solve_part::<Solver>(EXAMPLE, 2), "4");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10))]

        #[test]
        fn prop_overlap_matches_shared_section(a in 0u32..20, la in 0u32..10, b in 0u32..20, lb in 0u32..10) {
            let (x, y) = (a..=a + la, b..=b + lb);
            let shared = x.clone().any(|s| y.contains(&s));
            prop_assert_eq!(overlaps(&x, &y), shared);
            if fully_contains(&x, &y) {
                prop_assert!(overlaps(&x, &y));
            }
        }
    }
}
