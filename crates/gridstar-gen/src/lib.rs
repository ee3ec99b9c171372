//! Scenario generation and rendering for gridstar.
//!
//! - [`GridGen`]: seeded random obstacle grids with a start and a goal.
//! - [`GenConfig`]: size, obstacle count and seed of a scenario.
//! - [`render`](render::render): text display of grids and paths.

pub mod config;
pub mod mapgen;
pub mod render;

pub use config::GenConfig;
pub use mapgen::{GenError, GridGen, Scenario};
pub use render::{Symbols, format_path};
