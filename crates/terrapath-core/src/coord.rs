//! The [`Coord`] type — an integer `(row, col)` grid position.

use std::fmt;
use std::ops::{Add, Sub};

/// A 2D integer coordinate. `row` grows downward, `col` grows rightward.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// All eight neighbours (cardinal + diagonal).
    #[inline]
    pub fn neighbors_8(self) -> [Coord; 8] {
        [
            Self::new(self.row - 1, self.col),
            Self::new(self.row + 1, self.col),
            Self::new(self.row, self.col - 1),
            Self::new(self.row, self.col + 1),
            Self::new(self.row - 1, self.col - 1),
            Self::new(self.row - 1, self.col + 1),
            Self::new(self.row + 1, self.col - 1),
            Self::new(self.row + 1, self.col + 1),
        ]
    }

    /// Whether `other` is diagonally adjacent to `self` (both components
    /// differ). A step between diagonally adjacent coordinates costs more
    /// than an axis-aligned one.
    #[inline]
    pub const fn is_diagonal_to(self, other: Coord) -> bool {
        self.row != other.row && self.col != other.col
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Frontier ordering: by `row`, ties broken by `col`.
///
/// The search frontier in `terrapath-paths` is a `BinaryHeap<Coord>`
/// (a max-heap), so the greatest coordinate under this ordering pops first.
/// The ordering is over raw coordinate values, **not** accumulated distance.
impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}
