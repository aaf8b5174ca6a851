//! Best-path reconstruction and route building.
//!
//! Every parent edge the search records joins two cells in the same row or
//! column at most one move apart, so any chain of parents is a sequence of
//! directly executable legs.

use crate::core::{Cell, Heading, RobotPose, Rotation};
use crate::error::{DirectMoveError, NavError, Result};
use crate::grid::MazeGrid;

/// Walk parent pointers from `goal` back to the entrance.
///
/// Returns the path entrance first. Fails with
/// [`NavError::MapInconsistency`] if the chain breaks or runs longer than
/// the number of cells in the maze.
pub fn reconstruct_path(grid: &MazeGrid, goal: Cell) -> Result<Vec<Cell>> {
    let limit = grid.cell_count();
    let mut path = vec![goal];
    let mut current = goal;

    while current != Cell::ORIGIN {
        current = grid
            .parent(current)
            .ok_or(NavError::MapInconsistency { cell: goal })?;
        path.push(current);
        if path.len() > limit {
            return Err(NavError::MapInconsistency { cell: goal });
        }
    }

    path.reverse();
    Ok(path)
}

/// Build the cell sequence leading from `from` to `to` through the best
/// path.
///
/// Both endpoints climb their parent chains until they meet `best_path`;
/// the route is `from`'s chain, the best-path segment between the two
/// meeting points (walked in whichever direction is needed), then `to`'s
/// chain reversed. The leading `from` itself is not part of the result.
pub fn materialize_route(
    grid: &MazeGrid,
    best_path: &[Cell],
    from: Cell,
    to: Cell,
) -> Result<Vec<Cell>> {
    let (from_chain, from_index) = climb_to_path(grid, best_path, from)?;
    let (to_chain, to_index) = climb_to_path(grid, best_path, to)?;

    let mut route = from_chain;
    if from_index <= to_index {
        route.extend_from_slice(&best_path[from_index..=to_index]);
    } else {
        route.extend(best_path[to_index..=from_index].iter().rev());
    }
    route.extend(to_chain.iter().rev());

    if route.first() == Some(&from) {
        route.remove(0);
    }
    Ok(route)
}

/// Ancestors of `start` (itself first) that are not on `best_path`, and the
/// index of the first ancestor that is.
fn climb_to_path(grid: &MazeGrid, best_path: &[Cell], start: Cell) -> Result<(Vec<Cell>, usize)> {
    let limit = grid.cell_count();
    let mut chain = Vec::new();
    let mut current = start;

    loop {
        if let Some(index) = best_path.iter().position(|&c| c == current) {
            return Ok((chain, index));
        }
        chain.push(current);
        if chain.len() > limit {
            return Err(NavError::MapInconsistency { cell: start });
        }
        current = grid
            .parent(current)
            .ok_or(NavError::MapInconsistency { cell: start })?;
    }
}

/// Rotation and signed movement taking `pose` to `dest` in one move.
///
/// `dest` must share a row or column with the robot, lie within `max_move`
/// cells, and every edge in between must already be known passable. A
/// destination straight behind is reached by reversing without turning.
pub fn check_direct_path(
    grid: &MazeGrid,
    pose: RobotPose,
    dest: Cell,
    max_move: i32,
) -> std::result::Result<(Rotation, i32), DirectMoveError> {
    if dest == pose.location {
        return Ok((Rotation::Straight, 0));
    }
    if !grid.in_bounds(dest) {
        return Err(DirectMoveError::OutOfBounds);
    }
    let (direction, distance): (Heading, i32) = pose
        .location
        .aligned_direction_to(&dest)
        .ok_or(DirectMoveError::NotAligned)?;
    if distance > max_move {
        return Err(DirectMoveError::TooFar {
            distance,
            max: max_move,
        });
    }

    let reachable = grid.walls().open_run(pose.location, direction, distance);
    if reachable < distance {
        return Err(DirectMoveError::Blocked { reachable });
    }

    let (rotation, sign) = Rotation::toward(pose.heading, direction);
    Ok((rotation, sign * distance))
}
