use std::collections::VecDeque;

use gridstar_core::{Point, Range};

use crate::state::{PathNode, UNREACHABLE};
use crate::traits::Pather;

/// Unit-cost distances from a set of sources, computed by breadth-first
/// search.
///
/// Serves as an independent reference for shortest-path lengths.
pub struct DistanceMap {
    rng: Range,
    dist: Vec<i32>,
    reached: Vec<PathNode>,
}

impl DistanceMap {
    /// Compute the distance map from `sources` with no distance limit.
    pub fn compute<P: Pather>(pather: &P, sources: &[Point]) -> Self {
        Self::compute_within(pather, sources, UNREACHABLE - 1)
    }

    /// Compute a multi-source breadth-first search distance map.
    ///
    /// Each step has cost 1. Expansion stops when the distance exceeds
    /// `max_dist`. Sources outside the pather's bounds are ignored.
    pub fn compute_within<P: Pather>(pather: &P, sources: &[Point], max_dist: i32) -> Self {
        let rng = pather.bounds();
        let mut dist = vec![UNREACHABLE; rng.len()];
        let mut reached = Vec::new();
        let mut queue: VecDeque<usize> = VecDeque::new();

        for &src in sources {
            if let Some(si) = rng.index_of(src) {
                if dist[si] != UNREACHABLE {
                    continue;
                }
                dist[si] = 0;
                queue.push_back(si);
                reached.push(PathNode { pos: src, cost: 0 });
            }
        }

        let mut nbuf = Vec::with_capacity(4);

        while let Some(ci) = queue.pop_front() {
            let current_dist = dist[ci];
            let cp = rng.point_at(ci);

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = rng.index_of(np) else {
                    continue;
                };
                if dist[ni] != UNREACHABLE {
                    continue;
                }
                let nd = current_dist + 1;
                if nd > max_dist {
                    continue;
                }
                dist[ni] = nd;
                queue.push_back(ni);
                reached.push(PathNode { pos: np, cost: nd });
            }
        }

        Self { rng, dist, reached }
    }

    /// Distance to `p`, or `None` if `p` is outside the range or was not
    /// reached.
    pub fn at(&self, p: Point) -> Option<i32> {
        let d = self.dist[self.rng.index_of(p)?];
        (d != UNREACHABLE).then_some(d)
    }

    /// Every reached node, in non-decreasing cost order.
    pub fn reached(&self) -> &[PathNode] {
        &self.reached
    }
}
