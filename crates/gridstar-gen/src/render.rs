//! Text rendering of grids and paths.

use gridstar_core::{CellKind, Grid, Point};

/// Display symbols for each cell class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbols {
    pub free: &'static str,
    pub obstacle: &'static str,
    pub path: &'static str,
    pub start: &'static str,
    pub goal: &'static str,
}

impl Symbols {
    pub const EMOJI: Self = Self {
        free: "\u{2b1c}",
        obstacle: "\u{1f7e5}",
        path: "\u{1f7e1}",
        start: "\u{1f7e2}",
        goal: "\u{1f535}",
    };

    pub const ASCII: Self = Self {
        free: ".",
        obstacle: "#",
        path: "*",
        start: "S",
        goal: "G",
    };

    fn of(&self, kind: CellKind) -> &'static str {
        match kind {
            CellKind::Free => self.free,
            CellKind::Obstacle => self.obstacle,
            CellKind::Start => self.start,
            CellKind::Goal => self.goal,
        }
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self::EMOJI
    }
}

/// Render `grid` with emoji symbols, marking the cells of `path`.
pub fn render(grid: &Grid, path: Option<&[Point]>) -> String {
    render_with(grid, path, &Symbols::EMOJI)
}

/// Render `grid` one row per line, cells separated by a space.
///
/// Free cells on `path` use [`Symbols::path`]; start and goal keep their own
/// symbols.
pub fn render_with(grid: &Grid, path: Option<&[Point]>, symbols: &Symbols) -> String {
    let bounds = grid.bounds();
    let mut on_path = vec![false; bounds.len()];
    for &p in path.unwrap_or_default() {
        if let Some(i) = bounds.index_of(p) {
            on_path[i] = true;
        }
    }

    let mut out = String::new();
    for row in bounds.min.y..bounds.max.y {
        let line: Vec<&str> = (bounds.min.x..bounds.max.x)
            .map(|col| {
                let p = Point::new(col, row);
                let kind = grid.at(p).unwrap_or_default();
                let marked = bounds.index_of(p).is_some_and(|i| on_path[i]);
                if marked && kind == CellKind::Free {
                    symbols.path
                } else {
                    symbols.of(kind)
                }
            })
            .collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

/// Format a path as `[(row, col), ...]`.
pub fn format_path(path: &[Point]) -> String {
    let cells: Vec<String> = path.iter().map(Point::to_string).collect();
    format!("[{}]", cells.join(", "))
}
