//! Integer points, compass directions and dense character grids
//!
//! Screen orientation: `x` grows to the right, `y` grows downwards, so
//! [`Direction::Up`] is `(0, -1)`.

use std::ops::{Add, AddAssign, Sub};

use anyhow::bail;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn manhattan(self, other: Point) -> i64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    pub fn neighbours4(self) -> [Point; 4] {
        Direction::ALL.map(|d| self + d.delta())
    }

    /// The eight surrounding points, row by row
    pub fn neighbours8(self) -> [Point; 8] {
        let Point { x, y } = self;
        [
            Point::new(x - 1, y - 1),
            Point::new(x, y - 1),
            Point::new(x + 1, y - 1),
            Point::new(x - 1, y),
            Point::new(x + 1, y),
            Point::new(x - 1, y + 1),
            Point::new(x, y + 1),
            Point::new(x + 1, y + 1),
        ]
    }

    pub fn signum(self) -> Point {
        Point::new(self.x.signum(), self.y.signum())
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Clockwise from `Up`
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    pub fn delta(self) -> Point {
        match self {
            Direction::Up => Point::new(0, -1),
            Direction::Right => Point::new(1, 0),
            Direction::Down => Point::new(0, 1),
            Direction::Left => Point::new(-1, 0),
        }
    }

    pub fn turn_right(self) -> Direction {
        Direction::ALL[(self as usize + 1) % 4]
    }

    pub fn turn_left(self) -> Direction {
        Direction::ALL[(self as usize + 3) % 4]
    }

    /// Accepts `^>v<` as well as `URDL`
    pub fn from_char(c: char) -> anyhow::Result<Direction> {
        Ok(match c {
            '^' | 'U' => Direction::Up,
            '>' | 'R' => Direction::Right,
            'v' | 'D' => Direction::Down,
            '<' | 'L' => Direction::Left,
            _ => bail!("unknown direction {c:?}"),
        })
    }
}

/// A rectangular grid stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Builds a grid from text, one row per non-empty line.
    pub fn parse<F>(input: &str, mut cell: F) -> anyhow::Result<Self>
    where
        F: FnMut(char) -> anyhow::Result<T>,
    {
        let mut width = None;
        let mut cells = Vec::new();
        let mut height = 0;
        for line in input.lines().map(str::trim_end).filter(|l| !l.is_empty()) {
            let len = line.chars().count();
            match width {
                None => width = Some(len),
                Some(w) if w != len => bail!("row {height} has width {len}, expected {w}"),
                Some(_) => {}
            }
            for c in line.chars() {
                cells.push(cell(c)?);
            }
            height += 1;
        }
        let Some(width) = width else {
            bail!("grid is empty");
        };
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, p: Point) -> bool {
        (0..self.width as i64).contains(&p.x) && (0..self.height as i64).contains(&p.y)
    }

    pub fn get(&self, p: Point) -> Option<&T> {
        self.contains(p)
            .then(|| &self.cells[p.y as usize * self.width + p.x as usize])
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + use<T> {
        let (width, height) = (self.width as i64, self.height as i64);
        (0..height).flat_map(move |y| (0..width).map(move |x| Point::new(x, y)))
    }

    /// First point (row-major) whose cell satisfies `pred`
    pub fn position(&self, mut pred: impl FnMut(&T) -> bool) -> Option<Point> {
        self.cells.iter().position(|c| pred(c)).map(|i| {
            Point::new((i % self.width) as i64, (i / self.width) as i64)
        })
    }

    /// In-grid orthogonal neighbours of `p`
    pub fn neighbours4(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        p.neighbours4().into_iter().filter(|&n| self.contains(n))
    }

    pub fn row(&self, y: usize) -> &[T] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }
}
