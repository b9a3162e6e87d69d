use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::{invalid, non_empty, separated};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 6, tags = ["simulation"])]
pub struct Solver;

/// Fish counted by days left on their timer
pub type School = [u64; 9];

pub fn population_after(mut school: School, days: usize) -> u64 {
    for _ in 0..days {
        school.rotate_left(1);
        // parents restart at 6, newborns appear at 8
        school[6] += school[8];
    }
    school.iter().sum()
}

impl AocParser for Solver {
    type SharedData<'a> = School;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let timers: Vec<usize> = separated(non_empty(input)?, ',').map_err(invalid)?;
        let mut school = [0; 9];
        for timer in timers {
            *school
                .get_mut(timer)
                .ok_or_else(|| ParseError::InvalidFormat(format!("timer {timer} is above 8")))? += 1;
        }
        Ok(school)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(population_after(*shared, 80).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(population_after(*shared, 256).to_string())
    }
}
