//! Structural grid errors.
//!
//! An unreachable goal is *not* an error; the search reports it as a normal
//! result. Only bad coordinates and bad dimensions surface here.

use std::fmt;

use crate::coord::Coord;

/// Error for invalid structural operations on a [`Grid`](crate::Grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate lies outside the grid's current dimensions.
    OutOfBounds {
        coord: Coord,
        rows: i32,
        cols: i32,
    },
    /// Grid creation was requested with non-positive dimensions.
    InvalidDimensions { rows: i32, cols: i32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { coord, rows, cols } => {
                write!(f, "coordinate {coord} is outside the {rows}x{cols} grid")
            }
            Self::InvalidDimensions { rows, cols } => {
                write!(f, "invalid grid dimensions {rows}x{cols}: both must be positive")
            }
        }
    }
}

impl std::error::Error for GridError {}
