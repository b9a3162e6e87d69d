use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use anyhow::{Context, anyhow, bail};

use crate::utils::parse::{lines_with, number};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 23, tags = ["register-machine"])]
pub struct Solver;

const STEP_LIMIT: usize = 10_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instr {
    Hlf(usize),
    Tpl(usize),
    Inc(usize),
    Jmp(i64),
    Jie(usize, i64),
    Jio(usize, i64),
}

fn register(token: &str) -> anyhow::Result<usize> {
    match token.trim() {
        "a" => Ok(0),
        "b" => Ok(1),
        other => bail!("unknown register {other:?}"),
    }
}

fn parse_instr(line: &str) -> anyhow::Result<Instr> {
    let (op, args) = line
        .split_once(' ')
        .ok_or_else(|| anyhow!("missing operand in {line:?}"))?;
    let conditional = |args: &str| -> anyhow::Result<(usize, i64)> {
        let (r, offset) = args.split_once(',').context("expected `r, offset`")?;
        Ok((register(r)?, number(offset)?))
    };
    Ok(match op {
        "hlf" => Instr::Hlf(register(args)?),
        "tpl" => Instr::Tpl(register(args)?),
        "inc" => Instr::Inc(register(args)?),
        "jmp" => Instr::Jmp(number(args)?),
        "jie" => {
            let (r, o) = conditional(args)?;
            Instr::Jie(r, o)
        }
        "jio" => {
            let (r, o) = conditional(args)?;
            Instr::Jio(r, o)
        }
        _ => bail!("unknown instruction {op:?}"),
    })
}

fn overflow(pc: i64) -> SolveError {
    SolveError::no_solution(format!("register overflow at instruction {pc}"))
}

/// Runs until the program counter leaves the program; returns registers `[a, b]`.
pub fn run(program: &[Instr], a: u64) -> Result<[u64; 2], SolveError> {
    let mut regs = [a, 0];
    let mut pc = 0i64;
    for _ in 0..STEP_LIMIT {
        let Some(&instr) = usize::try_from(pc).ok().and_then(|i| program.get(i)) else {
            return Ok(regs);
        };
        pc += match instr {
            Instr::Hlf(r) => {
                regs[r] /= 2;
                1
            }
            Instr::Tpl(r) => {
                regs[r] = regs[r].checked_mul(3).ok_or_else(|| overflow(pc))?;
                1
            }
            Instr::Inc(r) => {
                regs[r] = regs[r].checked_add(1).ok_or_else(|| overflow(pc))?;
                1
            }
            Instr::Jmp(o) => o,
            Instr::Jie(r, o) if regs[r] % 2 == 0 => o,
            Instr::Jio(r, o) if regs[r] == 1 => o,
            Instr::Jie(..) | Instr::Jio(..) => 1,
        };
    }
    Err(SolveError::no_solution(format!("program did not halt within {STEP_LIMIT} steps")))
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Instr>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        lines_with(input, parse_instr)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(run(shared, 0)?[1].to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(run(shared, 1)?[1].to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "inc a\njio a, +2\ntpl a\ninc a\n";

    #[test]
    fn test_example_registers() {
        let program = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(program[1], Instr::Jio(0, 2));
        assert_eq!(run(&program, 0).unwrap(), [2, 0]);
    }

    #[test]
    fn test_counts_b() {
        let program = Solver::parse("inc b\ntpl b\njie a, +2\ninc b\nhlf b").unwrap();
        assert_eq!(run(&program, 0).unwrap(), [0, 1]);
        assert_eq!(run(&program, 1).unwrap(), [1, 2]);
    }

    #[test]
    fn test_infinite_loop_is_reported() {
        let program = Solver::parse("jmp +0").unwrap();
        assert!(matches!(run(&program, 0), Err(SolveError::NoSolution(_))));
    }

    #[test]
    fn test_unbounded_growth_is_reported() {
        let program = Solver::parse("inc a\ntpl a\njmp -1\n").unwrap();
        assert!(matches!(run(&program, 0), Err(SolveError::NoSolution(_))));
    }
}
