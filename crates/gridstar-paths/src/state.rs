use std::collections::BinaryHeap;

use gridstar_core::{Point, Range};

/// A position with an associated cost, returned from distance map queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: i32,
}

/// Sentinel value meaning "unreachable" in distance maps.
pub const UNREACHABLE: i32 = i32::MAX;

pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Internal node for the A* search
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) f: i32,
    pub(crate) parent: usize,
    pub(crate) closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            f: UNREACHABLE,
            parent: NO_PARENT,
            closed: false,
        }
    }
}

/// Open-list entry, ordered for use in `BinaryHeap`.
///
/// Pops smallest `f` first, then smallest `h` (deeper nodes), then the
/// earliest pushed entry.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct OpenEntry {
    pub(crate) idx: usize,
    pub(crate) f: i32,
    pub(crate) h: i32,
    pub(crate) seq: u64,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest key first.
        other
            .f
            .cmp(&self.f)
            .then(other.h.cmp(&self.h))
            .then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// SearchState
// ---------------------------------------------------------------------------

/// Bookkeeping for a single A* search: scores, predecessors, the closed set
/// and the open heap.
///
/// Heap entries are never removed on improvement. An entry is stale once its
/// node has been closed or its `f` no longer matches the node's best `f`,
/// and [`pop`](Self::pop) skips it.
pub(crate) struct SearchState {
    rng: Range,
    nodes: Vec<Node>,
    open: BinaryHeap<OpenEntry>,
    seq: u64,
    pub(crate) expanded: usize,
}

impl SearchState {
    pub(crate) fn new(rng: Range) -> Self {
        Self {
            rng,
            nodes: vec![Node::default(); rng.len()],
            open: BinaryHeap::new(),
            seq: 0,
            expanded: 0,
        }
    }

    /// Best known cost-so-far of `idx`, [`UNREACHABLE`] if never reached.
    #[inline]
    pub(crate) fn g(&self, idx: usize) -> i32 {
        self.nodes[idx].g
    }

    #[inline]
    pub(crate) fn is_closed(&self, idx: usize) -> bool {
        self.nodes[idx].closed
    }

    /// Record `g` and `parent` for `idx` and push it with `f = g + h`.
    pub(crate) fn relax(&mut self, idx: usize, g: i32, h: i32, parent: usize) {
        let node = &mut self.nodes[idx];
        node.g = g;
        node.f = g + h;
        node.parent = parent;
        self.open.push(OpenEntry {
            idx,
            f: node.f,
            h,
            seq: self.seq,
        });
        self.seq += 1;
    }

    /// Pop the best open node, skipping stale entries.
    pub(crate) fn pop(&mut self) -> Option<usize> {
        while let Some(entry) = self.open.pop() {
            let node = &self.nodes[entry.idx];
            if node.closed || entry.f != node.f {
                continue;
            }
            return Some(entry.idx);
        }
        None
    }

    #[inline]
    pub(crate) fn close(&mut self, idx: usize) {
        self.nodes[idx].closed = true;
        self.expanded += 1;
    }

    /// Follow parent links back from `idx` and return the path in
    /// start-to-`idx` order.
    pub(crate) fn path_to(&self, idx: usize) -> Vec<Point> {
        let mut path = Vec::new();
        let mut ci = idx;
        while ci != NO_PARENT {
            path.push(self.rng.point_at(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        path
    }
}
