//! [`Pather`] implementation for the obstacle [`Grid`].

use gridstar_core::{Grid, Point, Range};

use crate::traits::{AstarPather, Pather};

impl Pather for Grid {
    #[inline]
    fn bounds(&self) -> Range {
        Grid::bounds(self)
    }

    #[inline]
    fn is_blocked(&self, p: Point) -> bool {
        Grid::is_blocked(self, p)
    }
}

impl AstarPather for Grid {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_skip_obstacles_and_edges() {
        let grid = Grid::parse(
            "\
.#.
...
...",
        )
        .unwrap();
        let mut buf = Vec::new();
        grid.neighbors(Point::at(0, 0), &mut buf);
        assert_eq!(buf, vec![Point::at(1, 0)]);

        buf.clear();
        grid.neighbors(Point::at(1, 1), &mut buf);
        assert_eq!(
            buf,
            vec![Point::at(1, 2), Point::at(2, 1), Point::at(1, 0)]
        );
    }

    #[test]
    fn estimate_is_manhattan() {
        let grid = Grid::new(4, 4).unwrap();
        assert_eq!(grid.estimate(Point::at(0, 0), Point::at(3, 2)), 5);
    }
}
