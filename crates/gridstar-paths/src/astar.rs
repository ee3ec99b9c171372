use gridstar_core::Point;
use log::{debug, trace};

use crate::error::SearchError;
use crate::state::{NO_PARENT, SearchState};
use crate::traits::AstarPather;

/// A* shortest-path search over a borrowed [`AstarPather`].
///
/// The pather is only read. Every call to [`find_path`](Self::find_path)
/// allocates its own search state, so a `PathFinder` can be queried any
/// number of times and always gives the same answer for the same input.
pub struct PathFinder<'a, P: AstarPather> {
    pather: &'a P,
}

impl<'a, P: AstarPather> PathFinder<'a, P> {
    /// Create a path finder that searches over `pather`.
    pub fn new(pather: &'a P) -> Self {
        Self { pather }
    }

    /// Compute a shortest path from `from` to `to`.
    ///
    /// Returns the full path (including both endpoints), `Ok(None)` if `to`
    /// is unreachable, or [`SearchError::InvalidCoordinate`] if either
    /// endpoint lies outside the pather's bounds. A blocked endpoint is
    /// unreachable unless both endpoints are the same cell.
    pub fn find_path(&self, from: Point, to: Point) -> Result<Option<Vec<Point>>, SearchError> {
        let rng = self.pather.bounds();
        let start_idx = rng.index_of(from).ok_or(SearchError::InvalidCoordinate {
            pos: from,
            bounds: rng,
        })?;
        let goal_idx = rng.index_of(to).ok_or(SearchError::InvalidCoordinate {
            pos: to,
            bounds: rng,
        })?;

        if start_idx == goal_idx {
            return Ok(Some(vec![from]));
        }
        if self.pather.is_blocked(from) || self.pather.is_blocked(to) {
            debug!("astar {from} -> {to}: blocked endpoint");
            return Ok(None);
        }

        let mut state = SearchState::new(rng);
        state.relax(start_idx, 0, self.pather.estimate(from, to), NO_PARENT);

        let mut nbuf = Vec::with_capacity(4);

        while let Some(ci) = state.pop() {
            if ci == goal_idx {
                let path = state.path_to(ci);
                debug!(
                    "astar {from} -> {to}: found length {} after {} expansions",
                    path.len() - 1,
                    state.expanded
                );
                return Ok(Some(path));
            }

            state.close(ci);
            let current = rng.point_at(ci);
            let tentative_g = state.g(ci) + 1;
            trace!("astar expand {current} g={}", tentative_g - 1);

            nbuf.clear();
            self.pather.neighbors(current, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = rng.index_of(np) else {
                    continue;
                };
                if state.is_closed(ni) || tentative_g >= state.g(ni) {
                    continue;
                }
                state.relax(ni, tentative_g, self.pather.estimate(np, to), ci);
            }
        }

        debug!(
            "astar {from} -> {to}: no path after {} expansions",
            state.expanded
        );
        Ok(None)
    }
}
