//! **terrapath-core** — growable 2D terrain grid (core types).
//!
//! This crate provides the foundational types of the *terrapath* workspace:
//! integer coordinates, terrain cells, and a rectangular grid that can grow
//! by one row or column at any edge without invalidating existing
//! coordinates.
//!
//! The grid is exclusively owned by its caller; the search in
//! `terrapath-paths` borrows it mutably for the duration of one query.

pub mod cell;
pub mod coord;
pub mod error;
pub mod grid;

pub use cell::Cell;
pub use coord::Coord;
pub use error::GridError;
pub use grid::{ColumnEdge, Grid, GridIter, RowEdge};
