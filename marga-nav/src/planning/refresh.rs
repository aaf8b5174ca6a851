//! Frontier refresh.
//!
//! After the goal is reached, cells the robot has already evaluated may sit
//! in the open set with stale neighbors. The refresh keeps expanding the
//! best of them through walls that are already known, until none is left,
//! so that cost improvements propagate before the next destination is
//! chosen.

use serde::{Deserialize, Serialize};

use crate::core::{Cell, Heading};
use crate::grid::MazeGrid;

use super::astar::{Heuristic, relax};
use super::path::reconstruct_path;

/// The goal cell the best path ends at, and the probe point used by the
/// post-goal heuristic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalCommitment {
    pub cell: Cell,
    pub probe: Cell,
}

impl GoalCommitment {
    /// Post-goal heuristic for a best path of `path_len` cells.
    #[inline]
    pub fn heuristic(&self, path_len: usize) -> Heuristic {
        Heuristic::Probe {
            probe: self.probe,
            path_len,
        }
    }

    /// Goal cells other than the committed one never compete.
    #[inline]
    pub fn admits(&self, grid: &MazeGrid, cell: Cell) -> bool {
        !grid.is_goal(cell) || cell == self.cell
    }
}

/// Expand evaluated open cells until none qualifies.
///
/// `best_path` is rebuilt after every expansion. Returns the number of
/// expansions performed.
pub fn refresh_frontier(
    grid: &mut MazeGrid,
    goal: &GoalCommitment,
    best_path: &mut Vec<Cell>,
    max_move: i32,
) -> usize {
    let mut expanded = 0;

    while let Some(cell) = pick_expandable(grid, goal, best_path.len()) {
        expand(grid, cell, max_move);
        grid.close(cell);
        grid.clear_g_updated(cell);
        grid.add_visits(cell, 1);
        expanded += 1;

        match reconstruct_path(grid, goal.cell) {
            Ok(path) => *best_path = path,
            Err(e) => tracing::error!("Best path rebuild failed during refresh: {}", e),
        }
    }

    if expanded > 0 {
        tracing::trace!(
            "Frontier refresh expanded {} cells, best path {} cells",
            expanded,
            best_path.len()
        );
    }
    expanded
}

/// Best open, already-evaluated cell: `F` asc, improved first, visits asc.
fn pick_expandable(grid: &MazeGrid, goal: &GoalCommitment, path_len: usize) -> Option<Cell> {
    let heuristic = goal.heuristic(path_len);
    grid.open_cells()
        .filter(|&cell| grid.visits(cell) > 0 && goal.admits(grid, cell))
        .map(|cell| {
            let updated = grid.node(cell).is_some_and(|n| n.g_updated);
            (cell, heuristic.f_value(grid, cell), updated)
        })
        .min_by(|a, b| {
            a.1.total_cmp(&b.1)
                .then_with(|| b.2.cmp(&a.2))
                .then_with(|| grid.visits(a.0).cmp(&grid.visits(b.0)))
        })
        .map(|(cell, _, _)| cell)
}

/// Relax every wall-confirmed, non-dead cell up to `max_move` away in each
/// direction.
fn expand(grid: &mut MazeGrid, cell: Cell, max_move: i32) {
    for heading in Heading::ALL {
        for step in 1..=max_move {
            let next = cell.offset(heading, step);
            if !grid.walls().is_open(cell.offset(heading, step - 1), heading)
                || !grid.dead_state(next).is_open()
            {
                break;
            }
            relax(grid, cell, next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{DeadState, SearchStatus};

    fn open_column(grid: &mut MazeGrid, x: i32, to_y: i32) {
        for y in 0..to_y {
            grid.walls_mut().open(Cell::new(x, y), Heading::Up);
        }
    }

    #[test]
    fn test_refresh_ignores_unevaluated_cells() {
        let mut grid = MazeGrid::new(4);
        open_column(&mut grid, 0, 3);
        relax(&mut grid, Cell::ORIGIN, Cell::new(0, 1));

        let goal = GoalCommitment {
            cell: Cell::new(1, 1),
            probe: Cell::new(0, 1),
        };
        let mut path = Vec::new();
        assert_eq!(refresh_frontier(&mut grid, &goal, &mut path, 3), 0);
        assert_eq!(grid.status(Cell::new(0, 1)), SearchStatus::Open);
    }

    #[test]
    fn test_refresh_propagates_shortcut() {
        // (0,0) -> (0,3) is a known straight corridor, but (0,3) was first
        // reached the long way round with g = 6
        let mut grid = MazeGrid::new(6);
        open_column(&mut grid, 0, 3);
        let far = Cell::new(0, 3);
        if let Some(node) = grid.node_mut(far) {
            node.status = SearchStatus::Closed;
            node.g_cost = 6;
            node.parent = Some(Cell::new(1, 3));
        }
        let start = Cell::ORIGIN;
        if let Some(node) = grid.node_mut(start) {
            node.status = SearchStatus::Open;
        }
        grid.add_visits(start, 1);

        let goal = GoalCommitment {
            cell: far,
            probe: Cell::new(0, 2),
        };
        let mut path = Vec::new();
        let expanded = refresh_frontier(&mut grid, &goal, &mut path, 3);

        assert!(expanded >= 1);
        assert_eq!(grid.g_cost(far), 1);
        assert_eq!(grid.parent(far), Some(start));
        assert_eq!(grid.status(far), SearchStatus::Open);
        assert_eq!(path, vec![start, far]);
        assert_eq!(grid.status(start), SearchStatus::Closed);
    }

    #[test]
    fn test_refresh_stops_at_dead_cells() {
        let mut grid = MazeGrid::new(6);
        open_column(&mut grid, 2, 4);
        grid.escalate_dead(Cell::new(2, 2), DeadState::LeadsToDead);
        let start = Cell::new(2, 0);
        if let Some(node) = grid.node_mut(start) {
            node.status = SearchStatus::Open;
        }
        grid.add_visits(start, 1);

        let goal = GoalCommitment {
            cell: Cell::new(3, 3),
            probe: Cell::new(3, 2),
        };
        let mut path = Vec::new();
        refresh_frontier(&mut grid, &goal, &mut path, 3);

        assert_eq!(grid.status(Cell::new(2, 1)), SearchStatus::Open);
        assert_eq!(grid.status(Cell::new(2, 2)), SearchStatus::Unvisited);
        assert_eq!(grid.status(Cell::new(2, 3)), SearchStatus::Unvisited);
    }

    #[test]
    fn test_only_committed_goal_cell_admitted() {
        let grid = MazeGrid::new(4);
        let goal = GoalCommitment {
            cell: Cell::new(1, 1),
            probe: Cell::new(1, 0),
        };
        assert!(goal.admits(&grid, Cell::new(1, 1)));
        assert!(!goal.admits(&grid, Cell::new(2, 2)));
        assert!(goal.admits(&grid, Cell::new(0, 3)));
    }
}
