use std::fmt;

use gridstar_core::{Point, Range};

/// Errors reported by [`PathFinder::find_path`](crate::PathFinder::find_path).
///
/// An unreachable goal is not an error; it is reported as `Ok(None)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// An endpoint lies outside the searched range.
    InvalidCoordinate { pos: Point, bounds: Range },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCoordinate { pos, bounds } => {
                write!(f, "invalid coordinate {pos}: outside {bounds}")
            }
        }
    }
}

impl std::error::Error for SearchError {}
