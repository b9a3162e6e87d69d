use std::collections::{HashMap, HashSet};

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Direction, Grid, Point};
use crate::utils::parse::invalid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 23, tags = ["simulation", "grid"])]
pub struct Solver;

const PROPOSALS: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];
const ROUND_LIMIT: usize = 100_000;

/// The three cells an elf checks before moving in `dir`
fn looks(elf: Point, dir: Direction) -> [Point; 3] {
    let ahead = elf + dir.delta();
    let side = dir.turn_right().delta();
    [ahead, ahead + side, ahead - side]
}

/// Runs one round starting with proposal `first`; returns whether any elf moved.
fn round(elves: &mut HashSet<Point>, first: usize) -> bool {
    let mut claims: HashMap<Point, Vec<Point>> = HashMap::new();
    for &elf in elves.iter() {
        if elf.neighbours8().iter().all(|n| !elves.contains(n)) {
            continue;
        }
        let target = (0..4)
            .map(|i| PROPOSALS[(first + i) % 4])
            .find(|&dir| looks(elf, dir).iter().all(|p| !elves.contains(p)));
        if let Some(dir) = target {
            claims.entry(elf + dir.delta()).or_default().push(elf);
        }
    }

    let mut moved = false;
    for (target, claimants) in claims {
        if let [elf] = claimants.as_slice() {
            elves.remove(elf);
            elves.insert(target);
            moved = true;
        }
    }
    moved
}

pub fn empty_after(mut elves: HashSet<Point>, rounds: usize) -> usize {
    for r in 0..rounds {
        round(&mut elves, r % 4);
    }
    let (min_x, max_x) = elves.iter().map(|p| p.x).fold((i64::MAX, i64::MIN), |(lo, hi), x| (lo.min(x), hi.max(x)));
    let (min_y, max_y) = elves.iter().map(|p| p.y).fold((i64::MAX, i64::MIN), |(lo, hi), y| (lo.min(y), hi.max(y)));
    ((max_x - min_x + 1) * (max_y - min_y + 1)) as usize - elves.len()
}

pub fn first_still_round(mut elves: HashSet<Point>) -> Option<usize> {
    (0..ROUND_LIMIT).find(|&r| !round(&mut elves, r % 4)).map(|r| r + 1)
}

impl AocParser for Solver {
    type SharedData<'a> = HashSet<Point>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let grid = Grid::parse(input, |c| match c {
            '#' => Ok(true),
            '.' => Ok(false),
            _ => anyhow::bail!("unexpected cell {c:?}"),
        })
        .map_err(invalid)?;
        let elves: HashSet<Point> = grid.points().filter(|&p| grid.get(p) == Some(&true)).collect();
        if elves.is_empty() {
            return Err(ParseError::MissingData("no elves on the map".into()));
        }
        Ok(elves)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(empty_after(shared.clone(), 10).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        first_still_round(shared.clone())
            .map(|r| r.to_string())
            .ok_or_else(|| SolveError::no_solution(format!("elves still moving after {ROUND_LIMIT} rounds")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_part;

    const EXAMPLE: &str = "\
....#..
..###.#
#...#.#
.#...##
#.###..
##.#.##
.#..#..
";

    #[test]
    fn test_small_spread() {
        let elves = Solver::parse(".....\n..##.\n..#..\n.....\n..##.\n.....\n").unwrap();
        // settles into a 5x6 box after three rounds
        assert_eq!(empty_after(elves.clone(), 3), 25);
        assert_eq!(first_still_round(elves), Some(4));
    }

    #[test]
    fn test_ten_rounds() {
        assert_eq!(solve_part::<Solver>(EXAMPLE, 1), "110");
    }

    #[test]
    fn test_still_round() {
        assert_eq!(solve_part::<Solver>(EXAMPLE, 2), "20");
    }
}
