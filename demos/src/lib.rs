//! Shared driver for the `gridstar` demo binary: argument parsing, one
//! generate-search-render round, and the printed report.

use std::fmt;

use gridstar_core::{Grid, Point};
use gridstar_gen::{GenConfig, GenError, format_path, render::render};
use gridstar_paths::{PathFinder, SearchError};
use log::info;

/// Outcome of one demo round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub grid: Grid,
    pub start: Point,
    pub goal: Point,
    pub path: Option<Vec<Point>>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => {
                writeln!(f, "Path found: {}", format_path(path))?;
                write!(f, "{}", render(&self.grid, Some(path)))
            }
            None => writeln!(f, "No path found!"),
        }
    }
}

/// Parse `[rows] [cols] [obstacles] [seed]`, falling back to
/// [`GenConfig::default`] for missing trailing arguments.
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<GenConfig, DemoError> {
    let mut cfg = GenConfig::default();
    let mut args = args.into_iter();

    if let Some(a) = args.next() {
        cfg.rows = parse_num("rows", &a)?;
    }
    if let Some(a) = args.next() {
        cfg.cols = parse_num("cols", &a)?;
    }
    if let Some(a) = args.next() {
        cfg.obstacles = parse_num("obstacles", &a)?;
    }
    if let Some(a) = args.next() {
        cfg.seed = Some(parse_num("seed", &a)?);
    }
    if let Some(extra) = args.next() {
        return Err(DemoError::Args(format!("unexpected argument \u{201c}{extra}\u{201d}")));
    }
    Ok(cfg)
}

fn parse_num<T: std::str::FromStr>(name: &str, s: &str) -> Result<T, DemoError> {
    s.parse()
        .map_err(|_| DemoError::Args(format!("{name}: not a number: \u{201c}{s}\u{201d}")))
}

/// Generate a scenario from `cfg` and search it.
pub fn run(cfg: &GenConfig) -> Result<Report, DemoError> {
    let sc = cfg.generate()?;
    let path = PathFinder::new(&sc.grid).find_path(sc.start, sc.goal)?;
    info!(
        "{} -> {}: {}",
        sc.start,
        sc.goal,
        path.as_ref()
            .map_or_else(|| "unreachable".to_string(), |p| format!("{} steps", p.len() - 1))
    );
    Ok(Report {
        grid: sc.grid,
        start: sc.start,
        goal: sc.goal,
        path,
    })
}

/// Errors surfaced by the demo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemoError {
    Args(String),
    Gen(GenError),
    Search(SearchError),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Args(msg) => write!(f, "usage: gridstar [rows] [cols] [obstacles] [seed]: {msg}"),
            Self::Gen(e) => write!(f, "{e}"),
            Self::Search(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Args(_) => None,
            Self::Gen(e) => Some(e),
            Self::Search(e) => Some(e),
        }
    }
}

impl From<GenError> for DemoError {
    fn from(e: GenError) -> Self {
        Self::Gen(e)
    }
}

impl From<SearchError> for DemoError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridstar_core::CellKind;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_args_uses_defaults() {
        assert_eq!(parse_args(args(&[])), Ok(GenConfig::default()));
    }

    #[test]
    fn all_args() {
        let cfg = parse_args(args(&["3", "4", "2", "17"])).unwrap();
        assert_eq!(
            cfg,
            GenConfig {
                rows: 3,
                cols: 4,
                obstacles: 2,
                seed: Some(17),
            }
        );
    }

    #[test]
    fn bad_args() {
        assert!(matches!(parse_args(args(&["x"])), Err(DemoError::Args(_))));
        assert!(matches!(
            parse_args(args(&["1", "2", "3", "4", "5"])),
            Err(DemoError::Args(_))
        ));
    }

    #[test]
    fn seeded_run_is_consistent() {
        let cfg = GenConfig {
            seed: Some(5),
            ..GenConfig::default()
        };
        let report = run(&cfg).unwrap();
        assert_eq!(report, run(&cfg).unwrap());
        assert_eq!(report.grid.at(report.start), Some(CellKind::Start));
        let text = report.to_string();
        match &report.path {
            Some(path) => {
                assert_eq!(path.first(), Some(&report.start));
                assert!(text.starts_with("Path found: [("));
                assert_eq!(text.lines().count(), 1 + 5);
            }
            None => assert_eq!(text, "No path found!\n"),
        }
    }

    #[test]
    fn huge_obstacle_count_is_rejected() {
        let cfg = parse_args(args(&["5", "5", "18446744073709551615", "1"])).unwrap();
        assert!(matches!(
            run(&cfg),
            Err(DemoError::Gen(GenError::TooManyObstacles { .. }))
        ));
    }

    #[test]
    fn generator_errors_surface() {
        let cfg = GenConfig {
            rows: 1,
            cols: 1,
            obstacles: 0,
            seed: Some(1),
        };
        assert!(matches!(run(&cfg), Err(DemoError::Gen(_))));
    }

    #[test]
    fn report_formats_unreachable() {
        let grid = Grid::parse("S#G").unwrap();
        let report = Report {
            grid,
            start: Point::at(0, 0),
            goal: Point::at(0, 2),
            path: None,
        };
        assert_eq!(report.to_string(), "No path found!\n");
    }
}
