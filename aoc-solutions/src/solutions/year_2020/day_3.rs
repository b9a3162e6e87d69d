use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Grid, Point};
use crate::utils::parse::invalid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 3, tags = ["grid"])]
pub struct Solver;

const SLOPES: [(i64, i64); 5] = [(1, 1), (3, 1), (5, 1), (7, 1), (1, 2)];

/// Trees hit going `right`/`down` per step; the map repeats horizontally.
pub fn trees_hit(map: &Grid<bool>, right: i64, down: i64) -> usize {
    let width = map.width() as i64;
    (0..map.height() as i64)
        .step_by(down as usize)
        .enumerate()
        .filter(|&(step, y)| {
            let x = (step as i64 * right) % width;
            map.get(Point::new(x, y)).copied().unwrap_or(false)
        })
        .count()
}

impl AocParser for Solver {
    type SharedData<'a> = Grid<bool>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Grid::parse(input, |c| match c {
            '#' => Ok(true),
            '.' => Ok(false),
            _ => anyhow::bail!("unexpected map cell {c:?}"),
        })
        .map_err(invalid)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(trees_hit(shared, 3, 1).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let product: usize = SLOPES
            .iter()
            .map(|&(right, down)| trees_hit(shared, right, down))
            .product();
        Ok(product.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_part;

    const EXAMPLE: &str = "\
..##.......
#...#...#..
.#....#..#.
..#.#...#.#
.#...##..#.
..#.##.....
.#.#.#....#
.#........#
#.##...#...
#...##....#
.#..#...#.#
";

    #[test]
    fn test_single_slope() {
        assert_eq!(solve_part::<Solver>(EXAMPLE, 1), "7");
    }

    #[test]
    fn test_all_slopes() {
        let map = Solver::parse(EXAMPLE).unwrap();
        let hits: Vec<_> = SLOPES.iter().map(|&(r, d)| trees_hit(&map, r, d)).collect();
        assert_eq!(hits, vec![2, 7, 3, 4, 2]);
        assert_eq!(solve_part::<Solver>(EXAMPLE, 2), "336");
    }
}
