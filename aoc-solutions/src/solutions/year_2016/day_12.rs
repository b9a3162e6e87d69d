use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use anyhow::{Context, bail};

use crate::utils::parse::{lines_with, number};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2016, day = 12, tags = ["register-machine"])]
pub struct Solver;

const STEP_LIMIT: u64 = 2_000_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Reg(usize),
    Val(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instr {
    Cpy(Operand, usize),
    Inc(usize),
    Dec(usize),
    Jnz(Operand, Operand),
}

fn register(token: &str) -> anyhow::Result<usize> {
    match token {
        "a" | "b" | "c" | "d" => Ok((token.as_bytes()[0] - b'a') as usize),
        _ => bail!("unknown register {token:?}"),
    }
}

fn operand(token: &str) -> anyhow::Result<Operand> {
    register(token)
        .map(Operand::Reg)
        .or_else(|_| number(token).map(Operand::Val))
}

fn parse_instr(line: &str) -> anyhow::Result<Instr> {
    let mut parts = line.split_whitespace();
    let op = parts.next().context("empty instruction")?;
    let mut arg = || parts.next().with_context(|| format!("`{op}` is missing an operand"));
    Ok(match op {
        "cpy" => Instr::Cpy(operand(arg()?)?, register(arg()?)?),
        "inc" => Instr::Inc(register(arg()?)?),
        "dec" => Instr::Dec(register(arg()?)?),
        "jnz" => Instr::Jnz(operand(arg()?)?, operand(arg()?)?),
        _ => bail!("unknown instruction {op:?}"),
    })
}

/// Executes the program until it jumps out of range; returns the registers.
pub fn execute(program: &[Instr], mut regs: [i64; 4]) -> Result<[i64; 4], SolveError> {
    let value = |regs: &[i64; 4], op: Operand| match op {
        Operand::Reg(r) => regs[r],
        Operand::Val(v) => v,
    };
    let mut pc = 0i64;
    for _ in 0..STEP_LIMIT {
        let Some(&instr) = usize::try_from(pc).ok().and_then(|i| program.get(i)) else {
            return Ok(regs);
        };
        match instr {
            Instr::Cpy(src, dst) => regs[dst] = value(&regs, src),
            Instr::Inc(r) => regs[r] += 1,
            Instr::Dec(r) => regs[r] -= 1,
            Instr::Jnz(cond, offset) if value(&regs, cond) != 0 => {
                pc += value(&regs, offset);
                continue;
            }
            Instr::Jnz(..) => {}
        }
        pc += 1;
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
        Ok(execute(shared, [0; 4])?[0].to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(execute(shared, [0, 0, 1, 0])?[0].to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_part;

    const EXAMPLE: &str = "cpy 41 a\ninc a\ninc a\ndec a\njnz a 2\ndec a\n";

    #[test]
    fn test_example() {
        assert_eq!(solve_part::<Solver>(EXAMPLE, 1), "42");
        assert_eq!(solve_part::<Solver>(EXAMPLE, 2), "42");
    }

    #[test]
    fn test_register_c_seeds_loop() {
        // a += 5 only when c starts non-zero
        let input = "jnz c 2\njnz 1 5\ncpy 5 b\ninc a\ndec b\njnz b -2";
        assert_eq!(solve_part::<Solver>(input, 1), "0");
        assert_eq!(solve_part::<Solver>(input, 2), "5");
    }

    #[test]
    fn test_copy_into_literal_rejected() {
        assert!(Solver::parse("cpy 1 2").is_err());
    }
}
