use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::parse::{lines_with, number};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 24, tags = ["combinatorics"])]
pub struct Solver;

/// Whether `weights` can be split into `groups` subsets that each sum to `target`.
fn splits_into(weights: &[u64], groups: usize, target: u64) -> bool {
    fn pick(weights: &[u64], used: &mut Vec<bool>, from: usize, remaining: u64, groups: usize, target: u64) -> bool {
        if remaining == 0 {
            let rest: Vec<u64> = weights
                .iter()
                .zip(used.iter())
                .filter(|(_, u)| !**u)
                .map(|(w, _)| *w)
                .collect();
            return splits_into(&rest, groups - 1, target);
        }
        for i in from..weights.len() {
            if !used[i] && weights[i] <= remaining {
                used[i] = true;
                let found = pick(weights, used, i + 1, remaining - weights[i], groups, target);
                used[i] = false;
                if found {
                    return true;
                }
            }
        }
        false
    }

    match groups {
        0 => weights.is_empty(),
        1 => weights.iter().sum::<u64>() == target,
        _ => pick(weights, &mut vec![false; weights.len()], 0, target, groups, target),
    }
}

/// Smallest product among the fewest packages that fill the first of `groups` equal groups.
pub fn best_entanglement(weights: &[u64], groups: u64) -> Option<u64> {
    let total: u64 = weights.iter().sum();
    if groups == 0 || total % groups != 0 {
        return None;
    }
    let target = total / groups;

    (1..=weights.len()).find_map(|size| {
        (0..weights.len())
            .combinations(size)
            .filter(|picked| picked.iter().map(|&i| weights[i]).sum::<u64>() == target)
            .filter(|picked| {
                let rest: Vec<u64> = (0..weights.len())
                    .filter(|i| !picked.contains(i))
                    .map(|i| weights[i])
                    .collect();
                splits_into(&rest, groups as usize - 1, target)
            })
            .map(|picked| picked.iter().map(|&i| weights[i]).product::<u64>())
            .min()
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<u64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        lines_with(input, number)
    }
}

fn solve_for(weights: &[u64], groups: u64) -> Result<String, SolveError> {
    best_entanglement(weights, groups)
        .map(|qe| qe.to_string())
        .ok_or_else(|| SolveError::no_solution(format!("packages cannot be split into {groups} equal groups")))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        solve_for(shared, 3)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        solve_for(shared, 4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::{solve_part, solve_part_err};

    const EXAMPLE: &str = "1\n2\n3\n4\n5\n7\n8\n9\n10\n11\n";

    #[test]
    fn test_example() {
        assert_eq!(solve_part::<Solver>(EXAMPLE, 1), "99");
        assert_eq!(solve_part::<Solver>(EXAMPLE, 2), "44");
    }

    #[test]
    fn test_indivisible_total_has_no_answer() {
        assert!(matches!(solve_part_err::<Solver>("1\n2\n4", 1), SolveError::NoSolution(_)));
    }

    #[test]
    fn test_divisible_but_unsplittable_has_no_answer() {
        // total 12, but 10 exceeds every group of 4
        assert_eq!(best_entanglement(&[1, 1, 10], 3), None);
        assert!(splits_into(&[2, 2, 2, 2], 2, 4));
    }
}
