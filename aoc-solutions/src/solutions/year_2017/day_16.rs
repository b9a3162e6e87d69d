use anyhow::{Context, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::{invalid, non_empty, number};
use crate::utils::search::{SearchError, find_cycle};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2017, day = 16, tags = ["cycle", "permutation"])]
pub struct Solver;

const PROGRAMS: usize = 16;
const DANCES: usize = 1_000_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Spin(usize),
    Exchange(usize, usize),
    Partner(u8, u8),
}

impl Move {
    fn parse(token: &str) -> anyhow::Result<Move> {
        let mut chars = token.chars();
        let kind = chars.next().context("empty move")?;
        let args = chars.as_str();
        Ok(match kind {
            's' => Move::Spin(number(args)?),
            'x' => {
                let (a, b) = args.split_once('/').context("exchange needs two positions")?;
                Move::Exchange(number(a)?, number(b)?)
            }
            'p' => match args.as_bytes() {
                [a, b'/', b] => Move::Partner(*a, *b),
                _ => bail!("partner needs two names: {token:?}"),
            },
            _ => bail!("unknown move {token:?}"),
        })
    }
}

pub fn dance(line: &[u8], moves: &[Move]) -> Vec<u8> {
    let mut line = line.to_vec();
    for &m in moves {
        match m {
            Move::Spin(n) => {
                let n = n % line.len();
                line.rotate_right(n);
            }
            Move::Exchange(a, b) => line.swap(a, b),
            Move::Partner(a, b) => {
                let pa = line.iter().position(|&p| p == a);
                let pb = line.iter().position(|&p| p == b);
                if let (Some(pa), Some(pb)) = (pa, pb) {
                    line.swap(pa, pb);
                }
            }
        }
    }
    line
}

fn initial(size: usize) -> Vec<u8> {
    (b'a'..).take(size).collect()
}

/// Line-up after `rounds` full dances starting from `a..`
pub fn after_rounds(moves: &[Move], size: usize, rounds: usize) -> Result<String, SearchError> {
    let cycle = find_cycle(initial(size), |line| dance(line, moves), None)?;
    Ok(String::from_utf8_lossy(cycle.state_at(rounds)).into_owned())
}

fn validate(moves: &[Move], size: usize) -> Result<(), ParseError> {
    let names = initial(size);
    for m in moves {
        let ok = match *m {
            Move::Spin(_) => true,
            Move::Exchange(a, b) => a < size && b < size,
            Move::Partner(a, b) => names.contains(&a) && names.contains(&b),
        };
        if !ok {
            return Err(ParseError::InvalidFormat(format!("{m:?} does not fit {size} programs")));
        }
    }
    Ok(())
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Move>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let moves = non_empty(input)?
            .split(',')
            .map(|t| Move::parse(t.trim()))
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(invalid)?;
        validate(&moves, PROGRAMS)?;
        Ok(moves)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(after_rounds(shared, PROGRAMS, 1)?)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(after_rounds(shared, PROGRAMS, DANCES)?)
    }
}
