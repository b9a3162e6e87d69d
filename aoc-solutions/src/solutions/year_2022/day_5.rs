use anyhow::{Context, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

use crate::utils::parse::{invalid, number};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 5, tags = ["stack", "simulation"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub count: usize,
    pub from: usize,
    pub to: usize,
}

#[derive(Debug, Clone)]
pub struct Dock {
    /// Bottom crate first
    stacks: Vec<Vec<char>>,
    moves: Vec<Move>,
}

fn parse_drawing(drawing: &str) -> anyhow::Result<Vec<Vec<char>>> {
    let mut rows: Vec<&str> = drawing.lines().collect();
    let labels = rows.pop().context("missing stack labels")?;
    let count = labels.split_whitespace().count();
    let mut stacks = vec![Vec::new(); count];
    for row in rows.iter().rev() {
        for (i, crate_id) in row.chars().skip(1).step_by(4).enumerate() {
            if crate_id == ' ' {
                continue;
            }
            stacks
                .get_mut(i)
                .with_context(|| format!("crate {crate_id:?} has no stack"))?
                .push(crate_id);
        }
    }
    Ok(stacks)
}

fn parse_dock(input: &str) -> anyhow::Result<Dock> {
    let input = input.replace("\r\n", "\n");
    let (drawing, procedure) = input
        .split_once("\n\n")
        .context("expected a drawing and a procedure separated by a blank line")?;
    let stacks = parse_drawing(drawing)?;

    let re = Regex::new(r"^move (\d+) from (\d+) to (\d+)$")?;
    let mut moves = Vec::new();
    for line in procedure.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let caps = re.captures(line).with_context(|| format!("bad move {line:?}"))?;
        let (from, to): (usize, usize) = (number(&caps[2])?, number(&caps[3])?);
        if !(1..=stacks.len()).contains(&from) || !(1..=stacks.len()).contains(&to) {
            bail!("move {line:?} names a missing stack");
        }
        moves.push(Move {
            count: number(&caps[1])?,
            from: from - 1,
            to: to - 1,
        });
    }
    Ok(Dock { stacks, moves })
}

impl Dock {
    /// Top crates after running every move; `keep_order` lifts a whole
    /// batch at once instead of crate by crate.
    pub fn rearrange(&self, keep_order: bool) -> Result<String, SolveError> {
        let mut stacks = self.stacks.clone();
        for m in &self.moves {
            let source = &mut stacks[m.from];
            let Some(split) = source.len().checked_sub(m.count) else {
                return Err(SolveError::no_solution(format!(
                    "stack {} holds fewer than {} crates",
                    m.from + 1,
                    m.count
                )));
            };
            let mut lifted = source.split_off(split);
            if !keep_order {
                lifted.reverse();
            }
            stacks[m.to].extend(lifted);
        }
        Ok(stacks.iter().filter_map(|s| s.last()).collect())
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Dock;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_dock(input).map_err(invalid)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared.rearrange(false)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared.rearrange(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::{solve_part, solve_part_err};

    const EXAMPLE: &str = "    [D]    
[N] [C]    
[Z] [M] [P]
 1   2   3 

move 1 from 2 to 1
move 3 from 1 to 3
move 2 from 2 to 1
move 1 from 1 to 2
";

    #[test]
    fn test_crate_by_crate() {
        assert_eq!(solve_part::<Solver>(EXAMPLE, 1), "CMZ");
    }

    #[test]
    fn test_whole_batches() {
        assert_eq!(solve_part::<Solver>(EXAMPLE, 2), "MCD");
    }

    #[test]
    fn test_overdrawn_stack() {
        let input = "[A]\n 1 \n\nmove 2 from 1 to 1\n";
        assert!(matches!(solve_part_err::<Solver>(input, 1), SolveError::NoSolution(_)));
    }

    #[test]
    fn test_missing_stack_rejected() {
        assert!(Solver::parse("[A]\n 1 \n\nmove 1 from 1 to 4\n").is_err());
    }
}
