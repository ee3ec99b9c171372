//! A* path search on obstacle grids.
//!
//! The centre of this crate is [`PathFinder`], which computes a shortest
//! 4-directional path between two cells with unit step costs, guided by the
//! Manhattan distance heuristic:
//!
//! ```
//! use gridstar_core::{Grid, Point};
//! use gridstar_paths::PathFinder;
//!
//! let grid = Grid::parse("S.\n#G").unwrap();
//! let path = PathFinder::new(&grid)
//!     .find_path(Point::at(0, 0), Point::at(1, 1))
//!     .unwrap();
//! assert_eq!(path, Some(vec![Point::at(0, 0), Point::at(0, 1), Point::at(1, 1)]));
//! ```
//!
//! Two reference algorithms work over the same [`Pather`] interface:
//!
//! - **BFS** unweighted distance maps ([`DistanceMap`])
//! - **Flood fill** and component labelling ([`reachable`], [`Components`])
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS, flood fill |
//! | [`AstarPather`] : [`Pather`] | A* |

mod astar;
mod bfs;
mod cc;
mod distance;
mod error;
mod grid;
mod state;
mod traits;

pub use astar::PathFinder;
pub use bfs::DistanceMap;
pub use cc::{Components, reachable};
pub use distance::manhattan;
pub use error::SearchError;
pub use state::{PathNode, UNREACHABLE};
pub use traits::{AstarPather, Pather};
