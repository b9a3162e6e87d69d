use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::dp_cache::{DpCache, DpProblem, VecBackend};
use crate::utils::parse::{lines_with, number};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 10, tags = ["dp"])]
pub struct Solver;

/// Sorted joltages, starting with the outlet's 0
#[derive(Debug, Clone)]
pub struct Chain {
    joltages: Vec<u64>,
}

/// Number of ways to reach adapter `i` from the outlet
struct Arrangements<'a> {
    joltages: &'a [u64],
}

impl DpProblem<usize, u64> for Arrangements<'_> {
    fn deps(&self, &i: &usize) -> Vec<usize> {
        (i.saturating_sub(3)..i)
            .filter(|&j| self.joltages[i] - self.joltages[j] <= 3)
            .collect()
    }

    fn compute(&self, &i: &usize, deps: Vec<u64>) -> u64 {
        if i == 0 { 1 } else { deps.iter().sum() }
    }
}

impl Chain {
    fn gaps(&self) -> Result<[usize; 4], SolveError> {
        let mut counts = [0; 4];
        for w in self.joltages.windows(2) {
            let gap = (w[1] - w[0]) as usize;
            if !(1..=3).contains(&gap) {
                return Err(SolveError::no_solution(format!("gap of {gap} jolts between {} and {}", w[0], w[1])));
            }
            counts[gap] += 1;
        }
        // the device is always 3 higher than the last adapter
        counts[3] += 1;
        Ok(counts)
    }

    pub fn arrangements(&self) -> u64 {
        let cache = DpCache::with_problem(
            VecBackend::with_capacity(self.joltages.len()),
            Arrangements {
                joltages: &self.joltages,
            },
        );
        cache.get(&(self.joltages.len() - 1))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Chain;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut joltages: Vec<u64> = lines_with(input, number)?;
        joltages.push(0);
        joltages.sort_unstable();
        joltages.dedup();
        Ok(Chain { joltages })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let counts = shared.gaps()?;
        Ok((counts[1] * counts[3]).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared.gaps()?;
        Ok(shared.arrangements().to_string())
    }
}
