//! Cell generators.
//!
//! A generator is any `FnMut(Coord) -> Cell`; these are the stock ones.
//! `random_terrain` reproduces the classic "scatter some walls" fill with a
//! configurable wall density.

use rand::{Rng, RngExt};
use terrapath_core::{Cell, Coord};

/// A generator producing passable unit-cost cells everywhere.
pub fn open_terrain() -> impl FnMut(Coord) -> Cell {
    |_| Cell::open()
}

/// A generator producing impassable cells everywhere.
pub fn walled_terrain() -> impl FnMut(Coord) -> Cell {
    |_| Cell::default()
}

/// A generator making each cell impassable with probability `wall_pct`
/// (0.0–1.0) and passable with unit cost otherwise.
pub fn random_terrain<R: Rng>(mut rng: R, wall_pct: f64) -> impl FnMut(Coord) -> Cell {
    move |_| {
        let r: f64 = rng.random();
        Cell::open().with_passable(r >= wall_pct)
    }
}
