//! Relaxation and heuristics.
//!
//! Unlike a textbook A* there is no priority queue: the open set is the
//! `Open` status of each cell and the robot itself decides which cell to
//! expand next by moving there.

use crate::core::Cell;
use crate::grid::{MazeGrid, SearchStatus};

/// Result of relaxing one edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relaxation {
    /// Cell was unvisited and is now open
    Discovered,
    /// Open cell got a cheaper parent
    Improved,
    /// Closed cell got a cheaper parent and was reopened
    Reopened,
    /// Nothing changed
    Unchanged,
}

impl Relaxation {
    /// Did the relaxation lower an existing g-cost?
    #[inline]
    pub fn lowered_cost(self) -> bool {
        matches!(self, Relaxation::Improved | Relaxation::Reopened)
    }
}

/// Relax the edge `from -> to` with unit cost.
///
/// Every edge on the maze costs one leg regardless of its length, so the
/// tentative cost is always `g(from) + 1`.
pub fn relax(grid: &mut MazeGrid, from: Cell, to: Cell) -> Relaxation {
    let tentative = grid.g_cost(from) + 1;
    let Some(node) = grid.node_mut(to) else {
        return Relaxation::Unchanged;
    };

    match node.status {
        SearchStatus::Unvisited => {
            node.status = SearchStatus::Open;
            node.g_cost = tentative;
            node.parent = Some(from);
            Relaxation::Discovered
        }
        SearchStatus::Open if tentative < node.g_cost => {
            node.g_cost = tentative;
            node.parent = Some(from);
            node.g_updated = true;
            Relaxation::Improved
        }
        SearchStatus::Closed if tentative < node.g_cost => {
            node.status = SearchStatus::Open;
            node.g_cost = tentative;
            node.parent = Some(from);
            node.g_updated = true;
            Relaxation::Reopened
        }
        _ => Relaxation::Unchanged,
    }
}

/// Cost-to-go estimate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Heuristic {
    /// Manhattan distance to the nearest goal row and column.
    GoalRegion { bounds: [i32; 2] },
    /// Distance to the probe cell scaled by the current best-path length.
    ///
    /// Cells near the entrance of the goal score low and cells far from it
    /// score roughly one best-path length.
    Probe { probe: Cell, path_len: usize },
}

impl Heuristic {
    /// Estimate for `cell`.
    pub fn estimate(&self, cell: Cell) -> f64 {
        match *self {
            Heuristic::GoalRegion { bounds: [lo, hi] } => {
                let dx = (lo - cell.x).abs().min((hi - cell.x).abs());
                let dy = (lo - cell.y).abs().min((hi - cell.y).abs());
                f64::from(dx + dy)
            }
            Heuristic::Probe { probe, path_len } => {
                let scale = (probe.x + probe.y).max(1);
                f64::from(cell.manhattan_distance(&probe)) / f64::from(scale) * path_len as f64
            }
        }
    }

    /// `g + h` for a cell on `grid`.
    #[inline]
    pub fn f_value(&self, grid: &MazeGrid, cell: Cell) -> f64 {
        f64::from(grid.g_cost(cell)) + self.estimate(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_relax_discovers_unvisited() {
        let mut grid = MazeGrid::new(4);
        let outcome = relax(&mut grid, Cell::ORIGIN, Cell::new(0, 1));

        assert_eq!(outcome, Relaxation::Discovered);
        assert_eq!(grid.status(Cell::new(0, 1)), SearchStatus::Open);
        assert_eq!(grid.g_cost(Cell::new(0, 1)), 1);
        assert_eq!(grid.parent(Cell::new(0, 1)), Some(Cell::ORIGIN));
        assert!(!grid.node(Cell::new(0, 1)).is_some_and(|n| n.g_updated));
    }

    #[test]
    fn test_relax_improves_open_cell() {
        let mut grid = MazeGrid::new(6);
        let a = Cell::new(0, 1);
        let b = Cell::new(0, 2);
        let target = Cell::new(1, 2);

        relax(&mut grid, Cell::ORIGIN, a);
        relax(&mut grid, a, b);
        relax(&mut grid, b, target);
        assert_eq!(grid.g_cost(target), 3);

        let outcome = relax(&mut grid, a, target);
        assert_eq!(outcome, Relaxation::Improved);
        assert_eq!(grid.g_cost(target), 2);
        assert_eq!(grid.parent(target), Some(a));
        assert!(grid.node(target).is_some_and(|n| n.g_updated));

        // Equal cost never replaces the parent
        assert_eq!(relax(&mut grid, b, target), Relaxation::Unchanged);
        assert_eq!(grid.parent(target), Some(a));
    }

    #[test]
    fn test_relax_reopens_closed_cell() {
        let mut grid = MazeGrid::new(6);
        let a = Cell::new(0, 1);
        let b = Cell::new(0, 2);
        let c = Cell::new(0, 3);

        relax(&mut grid, Cell::ORIGIN, a);
        relax(&mut grid, a, b);
        relax(&mut grid, b, c);
        grid.close(c);

        let outcome = relax(&mut grid, Cell::ORIGIN, c);
        assert_eq!(outcome, Relaxation::Reopened);
        assert!(outcome.lowered_cost());
        assert_eq!(grid.status(c), SearchStatus::Open);
        assert_eq!(grid.g_cost(c), 1);
    }

    #[test]
    fn test_relax_out_of_bounds_is_noop() {
        let mut grid = MazeGrid::new(4);
        assert_eq!(
            relax(&mut grid, Cell::ORIGIN, Cell::new(-1, 0)),
            Relaxation::Unchanged
        );
    }

    #[test]
    fn test_goal_region_heuristic() {
        let h = Heuristic::GoalRegion { bounds: [7, 8] };
        assert_relative_eq!(h.estimate(Cell::ORIGIN), 14.0);
        assert_relative_eq!(h.estimate(Cell::new(7, 8)), 0.0);
        assert_relative_eq!(h.estimate(Cell::new(15, 3)), 11.0);
    }

    #[test]
    fn test_probe_heuristic() {
        let h = Heuristic::Probe {
            probe: Cell::new(7, 6),
            path_len: 26,
        };
        assert_relative_eq!(h.estimate(Cell::new(7, 6)), 0.0);
        assert_relative_eq!(h.estimate(Cell::ORIGIN), 26.0);
        assert_relative_eq!(h.estimate(Cell::new(7, 0)), 12.0);

        // Degenerate probe at the origin
        let h = Heuristic::Probe {
            probe: Cell::ORIGIN,
            path_len: 5,
        };
        assert_relative_eq!(h.estimate(Cell::new(1, 1)), 10.0);
    }
}
