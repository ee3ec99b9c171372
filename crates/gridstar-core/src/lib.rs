//! **gridstar-core** — core types for grid path search.
//!
//! This crate provides the foundational types used across the *gridstar*
//! workspace: geometry primitives and the obstacle grid searched by
//! `gridstar-paths`.

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::CellKind;
pub use geom::{Point, Range};
pub use grid::{Grid, GridError};
