use std::collections::HashSet;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::{lines_with, separated};
use crate::utils::search::bfs_distances;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 18, tags = ["flood-fill", "bfs"])]
pub struct Solver;

type Cube = [i32; 3];

fn faces([x, y, z]: Cube) -> [Cube; 6] {
    [
        [x - 1, y, z],
        [x + 1, y, z],
        [x, y - 1, z],
        [x, y + 1, z],
        [x, y, z - 1],
        [x, y, z + 1],
    ]
}

fn cube(line: &str) -> anyhow::Result<Cube> {
    let coords: Vec<i32> = separated(line, ',')?;
    coords
        .try_into()
        .map_err(|c: Vec<i32>| anyhow::anyhow!("expected 3 coordinates, got {}", c.len()))
}

pub fn surface_area(droplet: &HashSet<Cube>) -> usize {
    droplet
        .iter()
        .flat_map(|&c| faces(c))
        .filter(|n| !droplet.contains(n))
        .count()
}

/// Faces reachable by steam flowing around the droplet's bounding box.
pub fn exterior_area(droplet: &HashSet<Cube>) -> usize {
    let (mut lo, mut hi) = ([i32::MAX; 3], [i32::MIN; 3]);
    for c in droplet {
        for axis in 0..3 {
            lo[axis] = lo[axis].min(c[axis] - 1);
            hi[axis] = hi[axis].max(c[axis] + 1);
        }
    }
    let inside_box = |c: &Cube| (0..3).all(|a| (lo[a]..=hi[a]).contains(&c[a]));

    let steam = bfs_distances(
        lo,
        |&c| {
            faces(c)
                .into_iter()
                .filter(|n| inside_box(n) && !droplet.contains(n))
                .collect::<Vec<_>>()
        },
        None,
    );
    droplet
        .iter()
        .flat_map(|&c| faces(c))
        .filter(|n| steam.contains_key(n))
        .count()
}

impl AocParser for Solver {
    type SharedData<'a> = HashSet<Cube>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(lines_with(input, cube)?.into_iter().collect())
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(surface_area(shared).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(exterior_area(shared).to_string())
    }
}
