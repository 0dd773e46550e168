//! The [`Grid`] type — a rectangular, growable 2D array of [`Cell`]s.
//!
//! Rows and columns can be inserted at any edge; existing cells keep their
//! identity and only their integer coordinates shift (by one, when inserting
//! at `Top` or `Left`). The backing store is a deque of deques, so edge
//! insertion never moves cell data within a row.

use std::collections::VecDeque;

use crate::cell::Cell;
use crate::coord::Coord;
use crate::error::GridError;

/// Which horizontal edge to grow a new row at.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RowEdge {
    /// Prepend: existing row indices shift by one.
    Top,
    /// Append: existing indices are unchanged.
    Bottom,
}

/// Which vertical edge to grow a new column at.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColumnEdge {
    /// Prepend: existing column indices shift by one.
    Left,
    /// Append: existing indices are unchanged.
    Right,
}

/// A rectangular grid of [`Cell`]s addressed by `(row, col)` coordinates.
///
/// Invariant: every row has the same length at all times. The grid never
/// shrinks. There is no interior mutability — the grid is exclusively owned
/// and mutated through `&mut` access only.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    cells: VecDeque<VecDeque<Cell>>,
}

impl Grid {
    /// Create a `rows` × `cols` grid, filling each cell from `generator`.
    ///
    /// The generator decouples terrain content (random, parsed, uniform)
    /// from the grid structure. Fails with
    /// [`GridError::InvalidDimensions`] when either dimension is
    /// non-positive.
    pub fn new(
        rows: i32,
        cols: i32,
        mut generator: impl FnMut(Coord) -> Cell,
    ) -> Result<Self, GridError> {
        if rows <= 0 || cols <= 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        let mut cells = VecDeque::with_capacity(rows as usize);
        for row in 0..rows {
            let mut line = VecDeque::with_capacity(cols as usize);
            for col in 0..cols {
                line.push_back(generator(Coord::new(row, col)));
            }
            cells.push_back(line);
        }
        Ok(Self { cells })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.cells.len() as i32
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        // Rectangularity: every row has the front row's length.
        self.cells.front().map_or(0, |row| row.len() as i32)
    }

    /// Current `(rows, cols)` dimensions.
    #[inline]
    pub fn dimensions(&self) -> (i32, i32) {
        (self.rows(), self.cols())
    }

    /// Whether `coord` is inside the current dimensions.
    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row >= 0 && coord.row < self.rows() && coord.col >= 0 && coord.col < self.cols()
    }

    /// Read the cell at `coord`.
    pub fn get(&self, coord: Coord) -> Result<&Cell, GridError> {
        if !self.contains(coord) {
            return Err(self.out_of_bounds(coord));
        }
        Ok(&self.cells[coord.row as usize][coord.col as usize])
    }

    /// Mutable access to the cell at `coord`.
    pub fn get_mut(&mut self, coord: Coord) -> Result<&mut Cell, GridError> {
        if !self.contains(coord) {
            return Err(self.out_of_bounds(coord));
        }
        Ok(&mut self.cells[coord.row as usize][coord.col as usize])
    }

    /// Replace the cell at `coord`.
    pub fn set(&mut self, coord: Coord, cell: Cell) -> Result<(), GridError> {
        *self.get_mut(coord)? = cell;
        Ok(())
    }

    /// Insert one row of `cols` generated cells at the given edge.
    ///
    /// The generator receives the coordinates the new cells will occupy
    /// (row 0 for [`RowEdge::Top`], row `rows` for [`RowEdge::Bottom`]).
    pub fn insert_row(&mut self, edge: RowEdge, mut generator: impl FnMut(Coord) -> Cell) {
        let row = match edge {
            RowEdge::Top => 0,
            RowEdge::Bottom => self.rows(),
        };
        let cols = self.cols();
        let mut line = VecDeque::with_capacity(cols as usize);
        for col in 0..cols {
            line.push_back(generator(Coord::new(row, col)));
        }
        match edge {
            RowEdge::Top => self.cells.push_front(line),
            RowEdge::Bottom => self.cells.push_back(line),
        }
    }

    /// Insert one generated cell per row at the given edge.
    ///
    /// The generator receives the coordinates the new cells will occupy
    /// (column 0 for [`ColumnEdge::Left`], column `cols` for
    /// [`ColumnEdge::Right`]).
    pub fn insert_column(&mut self, edge: ColumnEdge, mut generator: impl FnMut(Coord) -> Cell) {
        let col = match edge {
            ColumnEdge::Left => 0,
            ColumnEdge::Right => self.cols(),
        };
        for (row, line) in self.cells.iter_mut().enumerate() {
            let cell = generator(Coord::new(row as i32, col));
            match edge {
                ColumnEdge::Left => line.push_front(cell),
                ColumnEdge::Right => line.push_back(cell),
            }
        }
    }

    /// Reset the `is_path` marker on every cell, so the grid can be reused
    /// for a fresh query.
    pub fn clear_path_markers(&mut self) {
        for line in self.cells.iter_mut() {
            for cell in line.iter_mut() {
                cell.is_path = false;
            }
        }
    }

    /// Row-major iterator over `(Coord, &Cell)` pairs.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter {
            grid: self,
            cur: Coord::ZERO,
        }
    }

    fn out_of_bounds(&self, coord: Coord) -> GridError {
        GridError::OutOfBounds {
            coord,
            rows: self.rows(),
            cols: self.cols(),
        }
    }
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the cells of a [`Grid`].
pub struct GridIter<'a> {
    grid: &'a Grid,
    cur: Coord,
}

impl<'a> Iterator for GridIter<'a> {
    type Item = (Coord, &'a Cell);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.cur.row >= self.grid.rows() {
            return None;
        }
        let coord = self.cur;
        let cell = &self.grid.cells[coord.row as usize][coord.col as usize];
        self.cur.col += 1;
        if self.cur.col >= self.grid.cols() {
            self.cur.col = 0;
            self.cur.row += 1;
        }
        Some((coord, cell))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (rows, cols) = self.grid.dimensions();
        if self.cur.row >= rows {
            return (0, Some(0));
        }
        let remaining_in_row = (cols - self.cur.col) as usize;
        let remaining_rows = (rows - self.cur.row - 1) as usize;
        let total = remaining_in_row + remaining_rows * cols as usize;
        (total, Some(total))
    }
}

impl ExactSizeIterator for GridIter<'_> {}

impl<'a> IntoIterator for &'a Grid {
    type Item = (Coord, &'a Cell);
    type IntoIter = GridIter<'a>;

    fn into_iter(self) -> GridIter<'a> {
        self.iter()
    }
}
