//! Property-based tests for part dispatch and range checking

use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver, SolverExt};
use proptest::prelude::*;

/// Solver whose answer echoes the part it was asked for
struct EchoSolver<const N: u8>;

impl<const N: u8> AocParser for EchoSolver<N> {
    type SharedData<'a> = ();

    fn parse(_input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(())
    }
}

impl<const N: u8> Solver for EchoSolver<N> {
    const PARTS: u8 = N;

    fn solve_part(_shared: &mut (), part: u8) -> Result<String, SolveError> {
        Ok(format!("part{part}"))
    }
}

fn checked(max_parts: u8, part: u8) -> Result<String, SolveError> {
    match max_parts {
        1 => EchoSolver::<1>::solve_part_checked_range(&mut (), part),
        2 => EchoSolver::<2>::solve_part_checked_range(&mut (), part),
        _ => EchoSolver::<3>::solve_part_checked_range(&mut (), part),
    }
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct NumberSolver;

impl AocParser for NumberSolver {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .filter(|l| !l.is_empty())
            .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.into())))
            .collect()
    }
}

impl PartSolver<1> for NumberSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for NumberSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().product::<i64>().to_string())
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(10))]

    #[test]
    fn prop_out_of_range_rejection(max_parts in 1u8..=3, part in 0u8..=255) {
        let result = checked(max_parts, part);

        if part == 0 || part > max_parts {
            match result {
                Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
                other => prop_assert!(false, "Expected PartOutOfRange, got {:?}", other),
            }
        } else {
            prop_assert_eq!(result.unwrap(), format!("part{part}"));
        }
    }

    #[test]
    fn prop_derived_dispatch_matches_part_solver(
        numbers in prop::collection::vec(-20i64..20, 1..6),
        part in 1u8..=2,
    ) {
        let input = numbers.iter().map(|n| n.to_string()).collect::<Vec<_>>().join("\n");
        let mut via_dispatch = NumberSolver::parse(&input).unwrap();
        let mut direct = NumberSolver::parse(&input).unwrap();

        let expected = match part {
            1 => <NumberSolver as PartSolver<1>>::solve(&mut direct),
            _ => <NumberSolver as PartSolver<2>>::solve(&mut direct),
        };

        prop_assert_eq!(
            NumberSolver::solve_part(&mut via_dispatch, part).unwrap(),
            expected.unwrap()
        );
    }

    #[test]
    fn prop_derived_dispatch_rejects_unknown_parts(part in prop_oneof![Just(0u8), 3u8..=255]) {
        let mut shared = NumberSolver::parse("1\n2").unwrap();
        match NumberSolver::solve_part(&mut shared, part) {
            Err(SolveError::PartNotImplemented(p)) => prop_assert_eq!(p, part),
            other => prop_assert!(false, "Expected PartNotImplemented, got {:?}", other),
        }
    }
}
