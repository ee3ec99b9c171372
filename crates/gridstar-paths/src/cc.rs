//! Flood fill and connected-component labelling.

use gridstar_core::{Point, Range};

use crate::traits::Pather;

/// Flood-fill from a single point and return the set of connected cells.
///
/// Returns an empty set if `p` is outside the pather's bounds or blocked.
pub fn reachable<P: Pather>(pather: &P, p: Point) -> Vec<Point> {
    let rng = pather.bounds();
    let mut result = Vec::new();
    let Some(si) = rng.index_of(p) else {
        return result;
    };
    if pather.is_blocked(p) {
        return result;
    }

    let mut seen = vec![false; rng.len()];
    let mut stack = vec![si];
    let mut nbuf = Vec::with_capacity(4);
    seen[si] = true;
    result.push(p);

    while let Some(ci) = stack.pop() {
        nbuf.clear();
        pather.neighbors(rng.point_at(ci), &mut nbuf);

        for &np in nbuf.iter() {
            if let Some(ni) = rng.index_of(np) {
                if !seen[ni] {
                    seen[ni] = true;
                    stack.push(ni);
                    result.push(np);
                }
            }
        }
    }

    result
}

/// Connected-component labels for every unblocked cell of a pather.
///
/// Two cells belong to the same component if there is a path of
/// neighbours (as defined by the pather) between them.
pub struct Components {
    rng: Range,
    labels: Vec<Option<usize>>,
    count: usize,
}

impl Components {
    /// Label every unblocked cell in the pather's bounds.
    pub fn label<P: Pather>(pather: &P) -> Self {
        let rng = pather.bounds();
        let mut labels = vec![None; rng.len()];
        let mut label = 0;
        let mut stack = Vec::new();
        let mut nbuf = Vec::with_capacity(4);

        for start in 0..rng.len() {
            if labels[start].is_some() || pather.is_blocked(rng.point_at(start)) {
                continue;
            }

            // Iterative DFS from `start`.
            stack.clear();
            stack.push(start);
            labels[start] = Some(label);

            while let Some(ci) = stack.pop() {
                nbuf.clear();
                pather.neighbors(rng.point_at(ci), &mut nbuf);

                for &np in nbuf.iter() {
                    if let Some(ni) = rng.index_of(np) {
                        if labels[ni].is_none() {
                            labels[ni] = Some(label);
                            stack.push(ni);
                        }
                    }
                }
            }

            label += 1;
        }

        Self {
            rng,
            labels,
            count: label,
        }
    }

    /// The component label of `p`, `None` if outside or blocked.
    pub fn at(&self, p: Point) -> Option<usize> {
        self.labels[self.rng.index_of(p)?]
    }

    /// Whether `a` and `b` lie in the same component.
    pub fn connected(&self, a: Point, b: Point) -> bool {
        matches!((self.at(a), self.at(b)), (Some(x), Some(y)) if x == y)
    }

    /// Number of components.
    pub fn count(&self) -> usize {
        self.count
    }
}
