use gridstar_core::{Point, Range};

use crate::distance::manhattan;

/// Minimal pathfinding interface: bounds, obstacles and neighbor enumeration.
pub trait Pather {
    /// The rectangle searches are confined to.
    fn bounds(&self) -> Range;

    /// Whether `p` cannot be entered.
    fn is_blocked(&self, p: Point) -> bool;

    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    ///
    /// The default yields the in-bounds, unblocked cardinal neighbours in
    /// east, south, west, north order.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        let bounds = self.bounds();
        buf.extend(
            p.neighbors_4()
                .into_iter()
                .filter(|&n| bounds.contains(n) && !self.is_blocked(n)),
        );
    }
}

/// Pather with a heuristic for A*. Every step costs 1.
pub trait AstarPather: Pather {
    /// Heuristic estimate of distance from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to)
    }
}
