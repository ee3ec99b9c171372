//! The [`Grid`] type — a rectangular matrix of [`CellKind`]s.
//!
//! A grid can be built empty with [`Grid::new`] and filled with
//! [`set`](Grid::set), or parsed from a text picture with
//! [`Grid::parse`]:
//!
//! ```text
//! S.#
//! ..#
//! ..G
//! ```
//!
//! `.` is free, `#` is an obstacle, `S` and `G` mark start and goal.

use std::fmt;

use crate::cell::CellKind;
use crate::geom::{Point, Range};

/// A `rows × cols` grid of cell classifications, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: Vec<CellKind>,
    bounds: Range,
}

impl Grid {
    /// Create a new grid of the given dimensions, filled with free cells.
    pub fn new(rows: i32, cols: i32) -> Result<Self, GridError> {
        if rows < 1 || cols < 1 {
            return Err(GridError::EmptyDimensions { rows, cols });
        }
        let bounds = Range::with_dims(rows, cols);
        Ok(Self {
            cells: vec![CellKind::Free; bounds.len()],
            bounds,
        })
    }

    /// Parse a text picture, one line per row.
    ///
    /// Surrounding whitespace of the whole string is trimmed, as is
    /// surrounding whitespace on each line. Every line must have the same
    /// width.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = s.trim().lines().map(str::trim).collect();
        let cols = lines.first().map_or(0, |l| l.chars().count()) as i32;
        let mut grid = Self::new(lines.len() as i32, cols)?;
        for (row, line) in lines.iter().enumerate() {
            if line.chars().count() as i32 != cols {
                return Err(GridError::InconsistentSize(s.to_string()));
            }
            for (col, ch) in line.chars().enumerate() {
                let pos = Point::at(row as i32, col as i32);
                let kind = match ch {
                    '.' => CellKind::Free,
                    '#' => CellKind::Obstacle,
                    'S' => CellKind::Start,
                    'G' => CellKind::Goal,
                    _ => return Err(GridError::InvalidRune { ch, pos }),
                };
                grid.set(pos, kind)?;
            }
        }
        Ok(grid)
    }

    /// The bounding range of this grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.height()
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.width()
    }

    /// Whether `p` is inside this grid's bounds.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Read the cell at `p`. Returns `None` if `p` is outside bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<CellKind> {
        self.bounds.index_of(p).map(|i| self.cells[i])
    }

    /// Whether `p` cannot be entered: an obstacle or out of bounds.
    #[inline]
    pub fn is_blocked(&self, p: Point) -> bool {
        self.at(p).is_none_or(CellKind::is_blocked)
    }

    /// Set the cell at `p`.
    pub fn set(&mut self, p: Point, kind: CellKind) -> Result<(), GridError> {
        let i = self.bounds.index_of(p).ok_or(GridError::OutOfBounds {
            pos: p,
            bounds: self.bounds,
        })?;
        self.cells[i] = kind;
        Ok(())
    }

    /// Count cells equal to `kind`.
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&c| c == kind).count()
    }

    /// First cell (row-major) equal to `kind`.
    pub fn find(&self, kind: CellKind) -> Option<Point> {
        self.iter().find_map(|(p, c)| (c == kind).then_some(p))
    }

    /// Row-major iterator over `(Point, CellKind)` pairs.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter {
            grid: self,
            inner: self.bounds.iter(),
        }
    }
}

impl fmt::Display for Grid {
    /// Writes the grid in the text format accepted by [`Grid::parse`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (p, kind) in self.iter() {
            if p.x == self.bounds.min.x && p.y != self.bounds.min.y {
                writeln!(f)?;
            }
            let ch = match kind {
                CellKind::Free => '.',
                CellKind::Obstacle => '#',
                CellKind::Start => 'S',
                CellKind::Goal => 'G',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Iterator over `(Point, CellKind)` pairs in a [`Grid`].
pub struct GridIter<'a> {
    grid: &'a Grid,
    inner: crate::geom::RangeIter,
}

impl Iterator for GridIter<'_> {
    type Item = (Point, CellKind);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let p = self.inner.next()?;
        let i = self.grid.bounds.index_of(p)?;
        Some((p, self.grid.cells[i]))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for GridIter<'_> {}

// ---------------------------------------------------------------------------
// GridError
// ---------------------------------------------------------------------------

/// Errors that can occur when building or editing a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A dimension was below 1.
    EmptyDimensions { rows: i32, cols: i32 },
    /// A write targeted a cell outside the grid.
    OutOfBounds { pos: Point, bounds: Range },
    /// Lines of a text picture have inconsistent widths.
    InconsistentSize(String),
    /// A character other than `.`, `#`, `S`, `G` was found.
    InvalidRune { ch: char, pos: Point },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDimensions { rows, cols } => {
                write!(f, "grid: dimensions must be at least 1x1, got {rows}x{cols}")
            }
            Self::OutOfBounds { pos, bounds } => {
                write!(f, "grid: position {pos} outside {bounds}")
            }
            Self::InconsistentSize(s) => write!(f, "grid: inconsistent size:\n{s}"),
            Self::InvalidRune { ch, pos } => {
                write!(f, "grid: invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = Grid::parse("S#\n.G").unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }
}
