//! The [`CellKind`] type — the classification of a single grid cell.

/// Classification of a grid cell.
///
/// Only [`Obstacle`](CellKind::Obstacle) blocks movement; `Start` and `Goal`
/// are markers on otherwise free cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    #[default]
    Free,
    Obstacle,
    Start,
    Goal,
}

impl CellKind {
    #[inline]
    pub const fn is_blocked(self) -> bool {
        matches!(self, Self::Obstacle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_obstacles_block() {
        assert!(CellKind::Obstacle.is_blocked());
        assert!(!CellKind::Free.is_blocked());
        assert!(!CellKind::Start.is_blocked());
        assert!(!CellKind::Goal.is_blocked());
    }
}
