use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::dp_cache::{DpCache, HashMapBackend};
use crate::utils::parse::{lines_with, number};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2019, day = 1, tags = ["dp"])]
pub struct Solver;

pub fn fuel(mass: u64) -> u64 {
    (mass / 3).saturating_sub(2)
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<u64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        lines_with(input, number)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().map(|&m| fuel(m)).sum::<u64>().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // total(m) = fuel(m) + total(fuel(m)); modules share tails of the chain
        let total = DpCache::new(
            HashMapBackend::new(),
            |&mass: &u64| match fuel(mass) {
                0 => vec![],
                f => vec![f],
            },
            |&mass: &u64, deps: Vec<u64>| fuel(mass) + deps.first().copied().unwrap_or(0),
        );
        Ok(shared.iter().map(|m| total.get(m)).sum::<u64>().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_part;

    #[test]
    fn test_module_fuel() {
        assert_eq!(solve_part::<Solver>("12", 1), "2");
        assert_eq!(solve_part::<Solver>("14", 1), "2");
        assert_eq!(solve_part::<Solver>("1969", 1), "654");
        assert_eq!(solve_part::<Solver>("100756", 1), "33583");
        assert_eq!(fuel(2), 0);
    }

    #[test]
    fn test_fuel_for_fuel() {
        assert_eq!(solve_part::<Solver>("14", 2), "2");
        assert_eq!(solve_part::<Solver>("1969", 2), "966");
        assert_eq!(solve_part::<Solver>("100756", 2), "50346");
        assert_eq!(solve_part::<Solver>("1969\n100756\n", 2), "51312");
    }
}
