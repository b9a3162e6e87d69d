use std::cmp::Ordering;

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use nom::branch::alt;
use nom::character::complete::{char, u32 as integer};
use nom::combinator::{all_consuming, map};
use nom::multi::separated_list0;
use nom::sequence::delimited;
use nom::{IResult, Parser};

use crate::utils::parse::lines_with;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 13, tags = ["parser", "sorting"])]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Packet {
    Int(u32),
    List(Vec<Packet>),
}

impl Ord for Packet {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Packet::Int(a), Packet::Int(b)) => a.cmp(b),
            (Packet::List(a), Packet::List(b)) => a.cmp(b),
            (Packet::Int(a), Packet::List(b)) => std::slice::from_ref(&Packet::Int(*a)).cmp(b.as_slice()),
            (Packet::List(a), Packet::Int(b)) => a.as_slice().cmp(std::slice::from_ref(&Packet::Int(*b))),
        }
    }
}

impl PartialOrd for Packet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn packet(input: &str) -> IResult<&str, Packet> {
    alt((
        map(integer, Packet::Int),
        map(
            delimited(char('['), separated_list0(char(','), packet), char(']')),
            Packet::List,
        ),
    ))
    .parse(input)
}

impl std::str::FromStr for Packet {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        all_consuming(packet)
            .parse(s.trim())
            .map(|(_, p)| p)
            .map_err(|e| anyhow!("bad packet {s:?}: {e}"))
    }
}

fn divider(n: u32) -> Packet {
    Packet::List(vec![Packet::List(vec![Packet::Int(n)])])
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Packet>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let packets = lines_with(input, str::parse::<Packet>)?;
        if packets.len() % 2 != 0 {
            return Err(ParseError::MissingData("last pair is missing its right packet".into()));
        }
        Ok(packets)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: usize = shared
            .chunks(2)
            .enumerate()
            .filter(|(_, pair)| pair[0] < pair[1])
            .map(|(i, _)| i + 1)
            .sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // a divider's index is one plus the packets sorting before it
        let (two, six) = (divider(2), divider(6));
        let below_two = shared.iter().filter(|p| **p < two).count() + 1;
        let below_six = shared.iter().filter(|p| **p < six).count() + 2;
        Ok((below_two * below_six).to_string())
    }
}
