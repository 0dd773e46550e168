//! The [`Cell`] type — one square of terrain.

/// A single terrain cell.
///
/// `cost` is a traversal weight multiplier applied to the step cost of
/// entering the cell; it must stay strictly positive for the shortest-path
/// search to be valid. `is_path` is written only by the search when it marks
/// the winning route.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub passable: bool,
    pub cost: f64,
    pub is_path: bool,
}

impl Cell {
    /// A passable cell with unit cost.
    #[inline]
    pub const fn open() -> Self {
        Self {
            passable: true,
            cost: 1.0,
            is_path: false,
        }
    }

    /// Set passability (builder).
    #[inline]
    pub const fn with_passable(mut self, passable: bool) -> Self {
        self.passable = passable;
        self
    }

    /// Set the traversal cost multiplier (builder). Must be > 0.
    #[inline]
    pub const fn with_cost(mut self, cost: f64) -> Self {
        self.cost = cost;
        self
    }
}

impl Default for Cell {
    /// An impassable, unmarked cell with unit cost.
    #[inline]
    fn default() -> Self {
        Self {
            passable: false,
            cost: 1.0,
            is_path: false,
        }
    }
}
