use anyhow::bail;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::lines_with;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2022, day = 25, tags = ["number-base"])]
pub struct Solver;

/// Balanced base five with digits `=-012`
pub fn from_snafu(text: &str) -> anyhow::Result<i64> {
    text.chars().try_fold(0i64, |acc, c| {
        let digit = match c {
            '2' => 2,
            '1' => 1,
            '0' => 0,
            '-' => -1,
            '=' => -2,
            _ => bail!("invalid SNAFU digit {c:?}"),
        };
        acc.checked_mul(5)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(|| anyhow::anyhow!("{text:?} overflows"))
    })
}

pub fn to_snafu(mut n: i64) -> String {
    if n == 0 {
        return "0".into();
    }
    let mut digits = Vec::new();
    while n != 0 {
        let (digit, carry) = match n.rem_euclid(5) {
            0 => ('0', 0),
            1 => ('1', 0),
            2 => ('2', 0),
            3 => ('=', 1),
            _ => ('-', 1),
        };
        digits.push(digit);
        n = n.div_euclid(5) + carry;
    }
    digits.iter().rev().collect()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        lines_with(input, |line| from_snafu(line.trim()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(to_snafu(shared.iter().sum()))
    }
}
