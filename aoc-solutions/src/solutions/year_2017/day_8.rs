use std::collections::HashMap;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use anyhow::{Context, bail};

use crate::utils::parse::{lines_with, number};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2017, day = 8, tags = ["register-machine"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmp {
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
}

impl Cmp {
    fn holds(self, lhs: i64, rhs: i64) -> bool {
        match self {
            Cmp::Lt => lhs < rhs,
            Cmp::Le => lhs <= rhs,
            Cmp::Gt => lhs > rhs,
            Cmp::Ge => lhs >= rhs,
            Cmp::Eq => lhs == rhs,
            Cmp::Ne => lhs != rhs,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instr<'a> {
    target: &'a str,
    delta: i64,
    cond_reg: &'a str,
    cmp: Cmp,
    cond_val: i64,
}

fn parse_instr(line: &str) -> anyhow::Result<Instr<'_>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [target, op, amount, "if", cond_reg, cmp, cond_val] = tokens[..] else {
        bail!("expected `reg inc|dec N if reg CMP N`");
    };
    let amount: i64 = number(amount)?;
    let delta = match op {
        "inc" => amount,
        "dec" => -amount,
        _ => bail!("unknown operation {op:?}"),
    };
    let cmp = match cmp {
        "<" => Cmp::Lt,
        "<=" => Cmp::Le,
        ">" => Cmp::Gt,
        ">=" => Cmp::Ge,
        "==" => Cmp::Eq,
        "!=" => Cmp::Ne,
        _ => bail!("unknown comparison {cmp:?}"),
    };
    Ok(Instr {
        target,
        delta,
        cond_reg,
        cmp,
        cond_val: number(cond_val).context("condition value")?,
    })
}

/// Runs every instruction once; returns (largest final value, largest value ever held).
pub fn run(program: &[Instr<'_>]) -> (i64, i64) {
    let mut regs: HashMap<&str, i64> = HashMap::new();
    let mut highest = 0;
    for instr in program {
        let current = regs.get(instr.cond_reg).copied().unwrap_or(0);
        if instr.cmp.holds(current, instr.cond_val) {
            let reg = regs.entry(instr.target).or_insert(0);
            *reg += instr.delta;
            highest = highest.max(*reg);
        }
    }
    (regs.values().copied().max().unwrap_or(0), highest)
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Instr<'a>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        lines_with(input, parse_instr)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(run(shared).0.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(run(shared).1.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_part;

    const EXAMPLE: &str = "\
b inc 5 if a > 1
a inc 1 if b < 5
c dec -10 if a >= 1
c inc -20 if c == 10
";

    #[test]
    fn test_example() {
        assert_eq!(solve_part::<Solver>(EXAMPLE, 1), "1");
        assert_eq!(solve_part::<Solver>(EXAMPLE, 2), "10");
    }

    #[test]
    fn test_rejects_unknown_comparison() {
        assert!(Solver::parse("a inc 1 if b <> 2").is_err());
    }
}
