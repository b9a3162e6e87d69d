use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Grid, Point};
use crate::utils::parse::invalid;
use crate::utils::search::{SearchError, bfs};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 12, tags = ["grid", "bfs"])]
pub struct Solver;

#[derive(Debug, Clone)]
pub struct Heightmap {
    heights: Grid<u8>,
    start: Point,
    end: Point,
}

impl Heightmap {
    /// Walks backwards from the summit: a step down may drop at most one level.
    fn descend(&self, p: Point) -> Vec<Point> {
        let here = self.heights.get(p).copied().unwrap_or(0);
        self.heights
            .neighbours4(p)
            .filter(|&n| self.heights.get(n).is_some_and(|&h| h + 1 >= here))
            .collect()
    }

    pub fn shortest_from_start(&self) -> Result<usize, SearchError> {
        bfs(self.end, |&p| self.descend(p), |&p| p == self.start)
    }

    pub fn shortest_from_lowest(&self) -> Result<usize, SearchError> {
        bfs(self.end, |&p| self.descend(p), |&p| self.heights.get(p) == Some(&0))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Heightmap;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let marks = Grid::parse(input, |c| match c {
            'a'..='z' | 'S' | 'E' => Ok(c),
            _ => anyhow::bail!("unexpected height {c:?}"),
        })
        .map_err(invalid)?;
        let find = |mark: char| {
            marks
                .position(|&c| c == mark)
                .ok_or_else(|| ParseError::MissingData(format!("no {mark:?} on the map")))
        };
        let (start, end) = (find('S')?, find('E')?);
        let heights = Grid::parse(input, |c| {
            Ok(match c {
                'S' => 0,
                'E' => 25,
                c => c as u8 - b'a',
            })
        })
        .map_err(invalid)?;
        Ok(Heightmap { heights, start, end })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.shortest_from_start()?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.shortest_from_lowest()?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::{solve_part, solve_part_err};

    const EXAMPLE: &str = "Sabqponm\nabcryxxl\naccszExk\nacctuvwj\nabdefghi\n";

    #[test]
    fn test_from_start() {
        assert_eq!(solve_part::<Solver>(EXAMPLE, 1), "31");
    }

    #[test]
    fn test_from_any_lowest() {
        assert_eq!(solve_part::<Solver>(EXAMPLE, 2), "29");
    }

    #[test]
    fn test_unclimbable() {
        assert!(matches!(solve_part_err::<Solver>("Saz\nbzE\n", 1), SolveError::NoSolution(_)));
    }
}
