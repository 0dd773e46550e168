//! ASCII maps: render an annotated grid to text and parse text fixtures
//! back into grids.
//!
//! Glyphs: `-` path-marked, `*` passable, `x` impassable. Lines are rows.

use std::fmt;

use terrapath_core::{Cell, Coord, Grid};

/// Glyph for a path-marked cell.
pub const PATH_GLYPH: char = '-';
/// Glyph for a passable, unmarked cell.
pub const OPEN_GLYPH: char = '*';
/// Glyph for an impassable cell.
pub const WALL_GLYPH: char = 'x';

/// Render a grid to ASCII, one line per row.
pub fn render(grid: &Grid) -> String {
    let (rows, cols) = grid.dimensions();
    let mut out = String::with_capacity((rows * (cols + 1)) as usize);
    for (coord, cell) in grid.iter() {
        if coord.col == 0 && coord.row != 0 {
            out.push('\n');
        }
        out.push(if cell.is_path {
            PATH_GLYPH
        } else if cell.passable {
            OPEN_GLYPH
        } else {
            WALL_GLYPH
        });
    }
    out
}

/// Error parsing an ASCII map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input contains no cells.
    Empty,
    /// A line's width differs from the first line's.
    InconsistentWidth { line: usize },
    /// A character is not one of the three glyphs.
    InvalidGlyph { ch: char, coord: Coord },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "map text contains no cells"),
            Self::InconsistentWidth { line } => {
                write!(f, "map line {line} has a different width than line 0")
            }
            Self::InvalidGlyph { ch, coord } => {
                write!(f, "invalid map glyph \u{201c}{ch}\u{201d} at {coord}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse an ASCII map into a grid. Inverse of [`render`]: `-` cells come
/// back passable with their path marker set.
///
/// Leading/trailing whitespace is trimmed from the whole input and from each
/// line, so indented string literals work as fixtures.
pub fn parse(s: &str) -> Result<Grid, ParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ParseError::Empty);
    }
    let mut cells: Vec<Vec<Cell>> = Vec::new();
    for (i, line) in s.lines().enumerate() {
        let line = line.trim();
        let mut row = Vec::with_capacity(line.len());
        for (j, ch) in line.chars().enumerate() {
            let cell = match ch {
                OPEN_GLYPH => Cell::open(),
                WALL_GLYPH => Cell::default(),
                PATH_GLYPH => {
                    let mut c = Cell::open();
                    c.is_path = true;
                    c
                }
                _ => {
                    return Err(ParseError::InvalidGlyph {
                        ch,
                        coord: Coord::new(i as i32, j as i32),
                    });
                }
            };
            row.push(cell);
        }
        if let Some(first) = cells.first() {
            if row.len() != first.len() {
                return Err(ParseError::InconsistentWidth { line: i });
            }
        }
        cells.push(row);
    }
    let rows = cells.len() as i32;
    let cols = cells[0].len() as i32;
    // A zero-width first line means there were no cells at all.
    Grid::new(rows, cols, |c| cells[c.row as usize][c.col as usize])
        .map_err(|_| ParseError::Empty)
}
