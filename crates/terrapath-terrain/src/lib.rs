//! **terrapath-terrain** — terrain utilities for the terrapath grids.
//!
//! Cell generators (random and deterministic) to plug into
//! [`Grid::new`](terrapath_core::Grid::new) and the edge-insertion
//! operations, plus ASCII rendering/parsing of annotated grids.

pub mod generators;
pub mod text;

pub use generators::{open_terrain, random_terrain, walled_terrain};
pub use text::{ParseError, parse, render};
