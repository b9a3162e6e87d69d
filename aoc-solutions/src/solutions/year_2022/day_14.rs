use std::collections::HashSet;

use anyhow::Context;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::Point;
use crate::utils::parse::{lines_with, number};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 14, tags = ["simulation", "grid"])]
pub struct Solver;

const SOURCE: Point = Point::new(500, 0);

/// Rock tiles of the cave scan, `y` growing downwards
#[derive(Debug, Clone)]
pub struct Cave {
    rock: HashSet<Point>,
    lowest: i64,
}

fn vertex(text: &str) -> anyhow::Result<Point> {
    let (x, y) = text.trim().split_once(',').context("expected `x,y`")?;
    Ok(Point::new(number(x)?, number(y)?))
}

fn path(line: &str) -> anyhow::Result<Vec<Point>> {
    let path = line.split("->").map(vertex).collect::<anyhow::Result<Vec<_>>>()?;
    if let Some(w) = path.windows(2).find(|w| w[0].x != w[1].x && w[0].y != w[1].y) {
        anyhow::bail!("segment {:?} -> {:?} is not straight", w[0], w[1]);
    }
    Ok(path)
}

impl Cave {
    fn from_paths(paths: &[Vec<Point>]) -> Self {
        let mut rock = HashSet::new();
        for path in paths {
            if let [only] = path.as_slice() {
                rock.insert(*only);
            }
            for w in path.windows(2) {
                let step = (w[1] - w[0]).signum();
                let mut p = w[0];
                rock.insert(p);
                while p != w[1] {
                    p += step;
                    rock.insert(p);
                }
            }
        }
        let lowest = rock.iter().map(|p| p.y).max().unwrap_or(0);
        Self { rock, lowest }
    }

    /// Units of sand at rest once sand falls into the abyss, or, with a
    /// floor two below the lowest rock, once the source is blocked.
    pub fn settle(&self, with_floor: bool) -> usize {
        let floor = self.lowest + 2;
        let mut filled = self.rock.clone();
        let mut rested = 0;
        // trail of the falling grain, so each grain resumes where the last stopped
        let mut trail = vec![SOURCE];
        while let Some(&top) = trail.last() {
            let next = [Point::new(0, 1), Point::new(-1, 1), Point::new(1, 1)]
                .map(|d| top + d)
                .into_iter()
                .find(|p| !filled.contains(p) && !(with_floor && p.y == floor));
            match next {
                Some(p) if !with_floor && p.y > self.lowest => return rested,
                Some(p) => trail.push(p),
                None => {
                    filled.insert(top);
                    rested += 1;
                    trail.pop();
                }
            }
        }
        rested
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Cave;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let paths = lines_with(input, path)?;
        let cave = Cave::from_paths(&paths);
        if cave.rock.contains(&SOURCE) {
            return Err(ParseError::InvalidFormat("rock covers the sand source".into()));
        }
        Ok(cave)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.settle(false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.settle(true).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_part;

    const EXAMPLE: &str = "498,4 -> 498,6 -> 496,6\n503,4 -> 502,4 -> 502,9 -> 494,9\n";

    #[test]
    fn test_into_abyss() {
        assert_eq!(solve_part::<Solver>(EXAMPLE, 1), "24");
    }

    #[test]
    fn test_onto_floor() {
        assert_eq!(solve_part::<Solver>(EXAMPLE, 2), "93");
    }
}
