use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::Grid;
use crate::utils::parse::invalid;
use crate::utils::search::find_cycle;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 14, tags = ["cycle", "grid"])]
pub struct Solver;

const SPIN_CYCLES: usize = 1_000_000_000;

/// Platform rows of `O` (round), `#` (cube) and `.` cells
pub type Platform = Vec<Vec<u8>>;

fn tilt_north(p: &mut Platform) {
    let (h, w) = (p.len(), p.first().map_or(0, Vec::len));
    for x in 0..w {
        let mut free = 0;
        for y in 0..h {
            match p[y][x] {
                b'#' => free = y + 1,
                b'O' => {
                    p[y][x] = b'.';
                    p[free][x] = b'O';
                    free += 1;
                }
                _ => {}
            }
        }
    }
}

fn rotate_clockwise(p: &Platform) -> Platform {
    let (h, w) = (p.len(), p.first().map_or(0, Vec::len));
    (0..w).map(|x| (0..h).rev().map(|y| p[y][x]).collect()).collect()
}

/// North, west, south, east
pub fn spin(p: &Platform) -> Platform {
    let mut p = p.clone();
    for _ in 0..4 {
        tilt_north(&mut p);
        p = rotate_clockwise(&p);
    }
    p
}

pub fn north_load(p: &Platform) -> usize {
    p.iter()
        .enumerate()
        .map(|(y, row)| row.iter().filter(|&&c| c == b'O').count() * (p.len() - y))
        .sum()
}

impl AocParser for Solver {
    type SharedData<'a> = Platform;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let grid = Grid::parse(input, |c| match c {
            'O' | '#' | '.' => Ok(c as u8),
            _ => anyhow::bail!("unexpected cell {c:?}"),
        })
        .map_err(invalid)?;
        Ok((0..grid.height()).map(|y| grid.row(y).to_vec()).collect())
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut p = shared.clone();
        tilt_north(&mut p);
        Ok(north_load(&p).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let cycle = find_cycle(shared.clone(), spin, None)?;
        Ok(north_load(cycle.state_at(SPIN_CYCLES)).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_part;

    const EXAMPLE: &str = "\
O....#....
O.OO#....#
.....##...
OO.#O....O
.O.....O#.
O.#..O.#.#
..O..#O..O
.......O..
#....###..
#OO..#....
";

    #[test]
    fn test_tilted_load() {
        assert_eq!(solve_part::<Solver>(EXAMPLE, 1), "136");
    }

    #[test]
    fn test_first_spin() {
        let after = spin(&Solver::parse(EXAMPLE).unwrap());
        let expected = Solver::parse(
            ".....#....\n....#...O#\n...OO##...\n.OO#......\n.....OOO#.\n.O#...O#.#\n....O#....\n......OOOO\n#...O###..\n#..OO#....\n",
        )
        .unwrap();
        assert_eq!(after, expected);
    }

    #[test]
    fn test_billion_spins() {
        assert_eq!(solve_part::<Solver>(EXAMPLE, 2), "64");
    }
}
