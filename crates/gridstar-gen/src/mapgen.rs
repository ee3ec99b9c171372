//! Random obstacle grids with a start and a goal.
//!
//! Obstacles are placed by rejection sampling: random cells are drawn until
//! the requested number of distinct cells has been blocked. Start and goal
//! are then drawn among the remaining free cells.

use std::fmt;

use gridstar_core::{CellKind, Grid, GridError, Point};
use log::debug;
use rand::Rng;

/// A generated search problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub grid: Grid,
    pub start: Point,
    pub goal: Point,
}

/// Grid generator driven by a caller-supplied random source.
pub struct GridGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> GridGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a `rows × cols` grid with exactly `obstacles` obstacle cells,
    /// one start and one distinct goal.
    ///
    /// Start and goal are always free cells, so at most `rows * cols - 2`
    /// obstacles fit.
    pub fn generate(&mut self, rows: i32, cols: i32, obstacles: usize) -> Result<Scenario, GenError> {
        let mut grid = Grid::new(rows, cols).map_err(|_| GenError::EmptyDimensions { rows, cols })?;
        let cells = grid.bounds().len();
        if obstacles > cells.saturating_sub(2) {
            return Err(GenError::TooManyObstacles { obstacles, cells });
        }

        let mut remaining = obstacles;
        while remaining > 0 {
            let p = self.random_point(rows, cols);
            if grid.at(p) == Some(CellKind::Free) {
                grid.set(p, CellKind::Obstacle)?;
                remaining -= 1;
            }
        }

        let free: Vec<Point> = grid
            .iter()
            .filter_map(|(p, kind)| (kind == CellKind::Free).then_some(p))
            .collect();
        let start = free[self.rng.random_range(0..free.len())];
        let mut goal = start;
        while goal == start {
            goal = free[self.rng.random_range(0..free.len())];
        }
        grid.set(start, CellKind::Start)?;
        grid.set(goal, CellKind::Goal)?;

        debug!("generated {rows}x{cols} grid, {obstacles} obstacles, start {start}, goal {goal}");
        Ok(Scenario { grid, start, goal })
    }

    fn random_point(&mut self, rows: i32, cols: i32) -> Point {
        Point::at(self.rng.random_range(0..rows), self.rng.random_range(0..cols))
    }
}

/// Errors that can occur when generating a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenError {
    /// A dimension was below 1.
    EmptyDimensions { rows: i32, cols: i32 },
    /// The obstacles leave fewer than two free cells for start and goal.
    TooManyObstacles { obstacles: usize, cells: usize },
    /// Writing into the grid failed.
    Grid(GridError),
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDimensions { rows, cols } => {
                write!(f, "mapgen: dimensions must be at least 1x1, got {rows}x{cols}")
            }
            Self::TooManyObstacles { obstacles, cells } => write!(
                f,
                "mapgen: {obstacles} obstacles leave no room for start and goal in {cells} cells"
            ),
            Self::Grid(e) => write!(f, "mapgen: {e}"),
        }
    }
}

impl std::error::Error for GenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for GenError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
