use std::collections::BinaryHeap;

use terrapath_core::{Coord, Grid, GridError};

/// Outcome of one [`PathFinder::find_path`] query.
///
/// `total_cost` is meaningful only when `reachable` is true.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    pub reachable: bool,
    pub total_cost: f64,
}

impl PathResult {
    /// The result for a goal no route leads to.
    pub const fn unreachable() -> Self {
        Self {
            reachable: false,
            total_cost: f64::INFINITY,
        }
    }
}

/// Dijkstra-style shortest-path search over the 8-neighborhood of a grid.
///
/// The frontier is ordered by raw coordinate value (row, then column) rather
/// than by accumulated distance. Correctness does not depend on pop order —
/// relaxation is gated by an explicit distance comparison and the loop runs
/// until the frontier drains or the goal pops — but the usual early-exit
/// efficiency of a min-distance heap is lost. Switching to a distance-keyed
/// frontier would change performance only, never the result.
#[derive(Debug, Clone, Copy)]
pub struct PathFinder {
    cardinal_cost: f64,
    diagonal_cost: f64,
}

impl Default for PathFinder {
    fn default() -> Self {
        Self {
            cardinal_cost: 1.0,
            diagonal_cost: 1.41,
        }
    }
}

impl PathFinder {
    /// A path finder with the default step costs (1.0 cardinal, 1.41
    /// diagonal).
    pub fn new() -> Self {
        Self::default()
    }

    /// A path finder with custom step costs. Both must be > 0.
    pub fn with_step_costs(cardinal: f64, diagonal: f64) -> Self {
        Self {
            cardinal_cost: cardinal,
            diagonal_cost: diagonal,
        }
    }

    /// Find the least-cost route from `start` to `goal` and mark it on the
    /// grid.
    ///
    /// The search starts from `start` regardless of that cell's own
    /// passability. On success every cell of the optimal path (including
    /// `start` and `goal`) gets `is_path = true`; when the goal is
    /// unreachable the grid is left untouched and the result says so.
    ///
    /// Errors with [`GridError::OutOfBounds`] if `start` or `goal` lies
    /// outside the grid; nothing is mutated in that case.
    pub fn find_path(
        &self,
        grid: &mut Grid,
        start: Coord,
        goal: Coord,
    ) -> Result<PathResult, GridError> {
        grid.get(start)?;
        grid.get(goal)?;

        let (rows, cols) = grid.dimensions();
        let width = cols as usize;
        let idx = |c: Coord| c.row as usize * width + c.col as usize;

        // Fresh per-query bookkeeping: best known distance and predecessor
        // per cell. `None` is the explicit "no predecessor" marker.
        let len = rows as usize * width;
        let mut dist = vec![f64::INFINITY; len];
        let mut prev: Vec<Option<Coord>> = vec![None; len];
        dist[idx(start)] = 0.0;

        let mut frontier: BinaryHeap<Coord> = BinaryHeap::new();
        frontier.push(start);

        let mut popped = 0usize;
        while let Some(cur) = frontier.pop() {
            popped += 1;
            // Early stop once the goal pops.
            if cur == goal {
                break;
            }
            let cur_dist = dist[idx(cur)];
            for n in cur.neighbors_8() {
                // Off-grid neighbors are simply skipped.
                let Ok(cell) = grid.get(n) else {
                    continue;
                };
                if !cell.passable {
                    continue;
                }
                let base = if cur.is_diagonal_to(n) {
                    self.diagonal_cost
                } else {
                    self.cardinal_cost
                };
                let next = cur_dist + base * cell.cost;
                if next < dist[idx(n)] {
                    dist[idx(n)] = next;
                    prev[idx(n)] = Some(cur);
                    // Duplicate frontier entries are fine; stale ones fail
                    // the comparison gate and relax nothing.
                    frontier.push(n);
                }
            }
        }

        if prev[idx(goal)].is_none() && goal != start {
            log::trace!("no route from {start} to {goal} ({popped} frontier pops)");
            return Ok(PathResult::unreachable());
        }

        // Walk predecessors backwards from the goal, marking the route.
        let mut walk = goal;
        while let Some(p) = prev[idx(walk)] {
            grid.get_mut(walk)?.is_path = true;
            walk = p;
        }
        // The backward walk stops before the start (its predecessor is
        // `None`), and the start may coincide with the goal: mark it
        // unconditionally.
        grid.get_mut(start)?.is_path = true;

        let total_cost = dist[idx(goal)];
        log::debug!("route {start} -> {goal}: cost {total_cost:.2}, {popped} frontier pops");
        Ok(PathResult {
            reachable: true,
            total_cost,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use terrapath_core::Cell;

    const EPS: f64 = 1e-9;

    fn open_grid(rows: i32, cols: i32) -> Grid {
        Grid::new(rows, cols, |_| Cell::open()).unwrap()
    }

    fn marked(grid: &Grid) -> Vec<Coord> {
        grid.iter()
            .filter(|(_, cell)| cell.is_path)
            .map(|(c, _)| c)
            .collect()
    }

    #[test]
    fn diagonal_route_on_open_grid() {
        let mut g = open_grid(4, 4);
        let result = PathFinder::new()
            .find_path(&mut g, Coord::new(0, 0), Coord::new(3, 3))
            .unwrap();
        assert!(result.reachable);
        assert!((result.total_cost - 3.0 * 1.41).abs() < EPS);
        assert_eq!(
            marked(&g),
            vec![
                Coord::new(0, 0),
                Coord::new(1, 1),
                Coord::new(2, 2),
                Coord::new(3, 3)
            ]
        );
    }

    #[test]
    fn straight_route_costs_unit_steps() {
        let mut g = open_grid(1, 4);
        let result = PathFinder::new()
            .find_path(&mut g, Coord::new(0, 0), Coord::new(0, 3))
            .unwrap();
        assert!(result.reachable);
        assert!((result.total_cost - 3.0).abs() < EPS);
        assert_eq!(marked(&g).len(), 4);
    }

    #[test]
    fn wall_column_makes_goal_unreachable() {
        let mut g = Grid::new(3, 3, |c| Cell::open().with_passable(c.col != 1)).unwrap();
        let before = g.clone();
        let result = PathFinder::new()
            .find_path(&mut g, Coord::new(0, 0), Coord::new(0, 2))
            .unwrap();
        assert!(!result.reachable);
        assert_eq!(result, PathResult::unreachable());
        // No mutation on failure.
        assert_eq!(g, before);
    }

    #[test]
    fn impassable_goal_is_unreachable() {
        let mut g = open_grid(3, 3);
        g.get_mut(Coord::new(2, 2)).unwrap().passable = false;
        let result = PathFinder::new()
            .find_path(&mut g, Coord::new(0, 0), Coord::new(2, 2))
            .unwrap();
        assert!(!result.reachable);
        assert!(marked(&g).is_empty());
    }

    #[test]
    fn impassable_start_is_still_the_origin() {
        let mut g = open_grid(3, 3);
        g.get_mut(Coord::new(0, 0)).unwrap().passable = false;
        let result = PathFinder::new()
            .find_path(&mut g, Coord::new(0, 0), Coord::new(2, 2))
            .unwrap();
        assert!(result.reachable);
        assert!((result.total_cost - 2.0 * 1.41).abs() < EPS);
        assert!(g.get(Coord::new(0, 0)).unwrap().is_path);
    }

    #[test]
    fn start_equals_goal_marks_only_the_start() {
        let mut g = open_grid(3, 3);
        let result = PathFinder::new()
            .find_path(&mut g, Coord::new(1, 1), Coord::new(1, 1))
            .unwrap();
        assert!(result.reachable);
        assert_eq!(result.total_cost, 0.0);
        assert_eq!(marked(&g), vec![Coord::new(1, 1)]);
    }

    #[test]
    fn repeated_queries_mark_the_same_cells() {
        let mut a = Grid::new(4, 4, |c| Cell::open().with_passable(c != Coord::new(1, 1)))
            .unwrap();
        let mut b = a.clone();
        let finder = PathFinder::new();
        let ra = finder
            .find_path(&mut a, Coord::new(0, 0), Coord::new(3, 3))
            .unwrap();
        let rb = finder
            .find_path(&mut b, Coord::new(0, 0), Coord::new(3, 3))
            .unwrap();
        assert_eq!(ra, rb);
        assert_eq!(marked(&a), marked(&b));

        // Re-running on the already-marked grid changes nothing.
        let again = marked(&a);
        finder
            .find_path(&mut a, Coord::new(0, 0), Coord::new(3, 3))
            .unwrap();
        assert_eq!(marked(&a), again);
    }

    #[test]
    fn detour_around_a_wall() {
        // Wall across the middle row except the last column.
        let mut g = Grid::new(3, 3, |c| {
            Cell::open().with_passable(c.row != 1 || c.col == 2)
        })
        .unwrap();
        let result = PathFinder::new()
            .find_path(&mut g, Coord::new(0, 0), Coord::new(2, 0))
            .unwrap();
        assert!(result.reachable);
        // (0,0) -> (0,1) -> (1,2) -> (2,1) -> (2,0): two cardinals, two
        // diagonals.
        assert!((result.total_cost - (2.0 + 2.0 * 1.41)).abs() < EPS);
        assert!(g.get(Coord::new(1, 2)).unwrap().is_path);
    }

    #[test]
    fn cost_multiplier_scales_steps() {
        let mut g = Grid::new(1, 3, |c| {
            Cell::open().with_cost(if c.col == 1 { 5.0 } else { 1.0 })
        })
        .unwrap();
        let result = PathFinder::new()
            .find_path(&mut g, Coord::new(0, 0), Coord::new(0, 2))
            .unwrap();
        assert!(result.reachable);
        // Entering the middle cell costs 5.0, the last 1.0.
        assert!((result.total_cost - 6.0).abs() < EPS);
    }

    #[test]
    fn expensive_cells_are_routed_around() {
        // Middle column costs 10 except the bottom row: the cheap route dips
        // below it.
        let mut g = Grid::new(3, 3, |c| {
            Cell::open().with_cost(if c.col == 1 && c.row != 2 { 10.0 } else { 1.0 })
        })
        .unwrap();
        let result = PathFinder::new()
            .find_path(&mut g, Coord::new(0, 0), Coord::new(0, 2))
            .unwrap();
        assert!(result.reachable);
        // Cheapest route dips under the expensive cells:
        // (0,0)->(1,0)->(2,1)->(1,2)->(0,2) = 1 + 1.41 + 1.41 + 1.
        assert!((result.total_cost - (2.0 + 2.0 * 1.41)).abs() < EPS);
        assert!(!g.get(Coord::new(0, 1)).unwrap().is_path);
    }

    #[test]
    fn out_of_bounds_endpoints_error() {
        let mut g = open_grid(3, 3);
        let bad = Coord::new(5, 5);
        assert_eq!(
            PathFinder::new().find_path(&mut g, bad, Coord::new(0, 0)),
            Err(GridError::OutOfBounds {
                coord: bad,
                rows: 3,
                cols: 3
            })
        );
        assert!(
            PathFinder::new()
                .find_path(&mut g, Coord::new(0, 0), Coord::new(-1, 0))
                .is_err()
        );
        assert!(marked(&g).is_empty());
    }

    #[test]
    fn search_spans_freshly_inserted_rows() {
        use terrapath_core::{ColumnEdge, RowEdge};

        let mut g = open_grid(2, 2);
        g.insert_row(RowEdge::Top, |_| Cell::open());
        g.insert_column(ColumnEdge::Left, |_| Cell::open());
        let result = PathFinder::new()
            .find_path(&mut g, Coord::new(0, 0), Coord::new(2, 2))
            .unwrap();
        assert!(result.reachable);
        assert!((result.total_cost - 2.0 * 1.41).abs() < EPS);
    }

    #[test]
    fn custom_step_costs() {
        let mut g = open_grid(2, 2);
        let finder = PathFinder::with_step_costs(2.0, 3.0);
        let result = finder
            .find_path(&mut g, Coord::new(0, 0), Coord::new(1, 1))
            .unwrap();
        assert!((result.total_cost - 3.0).abs() < EPS);
    }
}
