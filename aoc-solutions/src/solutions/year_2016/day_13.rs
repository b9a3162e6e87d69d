use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::Point;
use crate::utils::parse::{invalid, non_empty, number};
use crate::utils::search::{SearchError, bfs, bfs_distances};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2016, day = 13, tags = ["bfs", "grid"])]
pub struct Solver;

const START: Point = Point::new(1, 1);
const TARGET: Point = Point::new(31, 39);
const STEP_BUDGET: usize = 50;
/// Searches stay inside `0..=BOUND` on both axes so unreachable targets terminate
const BOUND: i64 = 256;

/// Office layout generated from the designer's favourite number.
#[derive(Debug, Clone, Copy)]
pub struct Maze {
    key: i64,
}

impl Maze {
    pub fn is_open(&self, p: Point) -> bool {
        let Point { x, y } = p;
        (0..=BOUND).contains(&x)
            && (0..=BOUND).contains(&y)
            && (x * x + 3 * x + 2 * x * y + y + y * y + self.key).count_ones() % 2 == 0
    }

    fn moves(&self, p: Point) -> impl Iterator<Item = Point> + use<> {
        let maze = *self;
        p.neighbours4().into_iter().filter(move |&n| maze.is_open(n))
    }

    pub fn fewest_steps(&self, target: Point) -> Result<usize, SearchError> {
        bfs(START, |&p| self.moves(p), |&p| p == target)
    }

    pub fn reachable_within(&self, steps: usize) -> usize {
        bfs_distances(START, |&p| self.moves(p), Some(steps)).len()
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Maze;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let key = number(non_empty(input)?).map_err(invalid)?;
        Ok(Maze { key })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.fewest_steps(TARGET)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.reachable_within(STEP_BUDGET).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: Maze = Maze { key: 10 };

    #[test]
    fn test_layout() {
        let rows = [
            ".#.####.##",
            "..#..#...#",
            "#....##...",
            "###.#.###.",
            ".##..#..#.",
            "..##....#.",
            "#...##.###",
        ];
        for (y, row) in rows.iter().enumerate() {
            let rendered: String = (0..10)
                .map(|x| if EXAMPLE.is_open(Point::new(x, y as i64)) { '.' } else { '#' })
                .collect();
            assert_eq!(&rendered, row, "row {y}");
        }
    }

    #[test]
    fn test_fewest_steps() {
        assert_eq!(EXAMPLE.fewest_steps(Point::new(7, 4)), Ok(11));
    }

    #[test]
    fn test_walled_target_is_unreachable() {
        assert_eq!(EXAMPLE.fewest_steps(Point::new(1, 0)), Err(SearchError::Unreachable));
    }

    #[test]
    fn test_reachable_within() {
        assert_eq!(EXAMPLE.reachable_within(0), 1);
        assert_eq!(EXAMPLE.reachable_within(1), 3);
        assert_eq!(EXAMPLE.reachable_within(2), 5);
        assert_eq!(EXAMPLE.reachable_within(3), 6);
    }
}
