use anyhow::{Context, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::{lines_with, number};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 8, tags = ["vm"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Acc(i64),
    Jmp(i64),
    Nop(i64),
}

impl Op {
    fn parse(line: &str) -> anyhow::Result<Op> {
        let (name, arg) = line.split_once(' ').context("expected `op arg`")?;
        let arg = number(arg)?;
        Ok(match name {
            "acc" => Op::Acc(arg),
            "jmp" => Op::Jmp(arg),
            "nop" => Op::Nop(arg),
            _ => bail!("unknown operation {name:?}"),
        })
    }

    fn swapped(self) -> Option<Op> {
        match self {
            Op::Acc(_) => None,
            Op::Jmp(n) => Some(Op::Nop(n)),
            Op::Nop(n) => Some(Op::Jmp(n)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Accumulator just before an instruction would run a second time
    Looped(i64),
    /// Accumulator after jumping exactly past the last instruction
    Terminated(i64),
}

pub fn run(program: &[Op]) -> Outcome {
    let mut visited = vec![false; program.len()];
    let (mut pc, mut acc) = (0i64, 0i64);
    loop {
        if pc == program.len() as i64 {
            return Outcome::Terminated(acc);
        }
        let Some(seen) = usize::try_from(pc).ok().and_then(|i| visited.get_mut(i)) else {
            // jumping anywhere else never terminates normally
            return Outcome::Looped(acc);
        };
        if *seen {
            return Outcome::Looped(acc);
        }
        *seen = true;
        match program[pc as usize] {
            Op::Acc(n) => {
                acc += n;
                pc += 1;
            }
            Op::Jmp(n) => pc += n,
            Op::Nop(_) => pc += 1,
        }
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Op>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        lines_with(input, Op::parse)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        match run(shared) {
            Outcome::Looped(acc) => Ok(acc.to_string()),
            Outcome::Terminated(_) => Err(SolveError::no_solution("program terminates without looping")),
        }
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        for i in 0..shared.len() {
            let Some(fixed) = shared[i].swapped() else {
                continue;
            };
            let original = std::mem::replace(&mut shared[i], fixed);
            let outcome = run(shared);
            shared[i] = original;
            if let Outcome::Terminated(acc) = outcome {
                return Ok(acc.to_string());
            }
        }
        Err(SolveError::no_solution("no single swap makes the program terminate"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::{solve_part, solve_part_err};

    const EXAMPLE: &str = "\
nop +0
acc +1
jmp +4
acc +3
jmp -3
acc -99
acc +1
jmp -4
acc +6
";

    #[test]
    fn test_accumulator_before_loop() {
        assert_eq!(solve_part::<Solver>(EXAMPLE, 1), "5");
    }

    #[test]
    fn test_repaired_program() {
        assert_eq!(solve_part::<Solver>(EXAMPLE, 2), "8");
    }

    #[test]
    fn test_unrepairable_program() {
        assert!(matches!(
            solve_part_err::<Solver>("acc +1\njmp +0\nacc +1\njmp -1\n", 2),
            SolveError::NoSolution(_)
        ));
    }
}
