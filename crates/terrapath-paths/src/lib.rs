//! **terrapath-paths** — weighted shortest-path search over terrain grids.
//!
//! Provides [`PathFinder`], a Dijkstra-style uniform-cost search over the
//! 8-neighborhood of a [`Grid`](terrapath_core::Grid):
//!
//! - axis-aligned steps cost 1.0, diagonal steps 1.41 (configurable), each
//!   multiplied by the destination cell's cost;
//! - the winning route is marked on the grid's cells via their `is_path`
//!   flag;
//! - an unreachable goal is a normal [`PathResult`], not an error.

mod search;

pub use search::{PathFinder, PathResult};
