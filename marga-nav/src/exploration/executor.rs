//! Queued route execution, one leg per tick.

use std::collections::VecDeque;

use crate::core::{Cell, RobotPose, Rotation};
use crate::error::DirectMoveError;
use crate::grid::MazeGrid;
use crate::planning::check_direct_path;

/// Cells still to visit on the active route.
#[derive(Clone, Debug, Default)]
pub struct RouteExecutor {
    queue: VecDeque<Cell>,
}

impl RouteExecutor {
    /// Idle executor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the queue with `route`.
    pub fn load(&mut self, route: impl IntoIterator<Item = Cell>) {
        self.queue = route.into_iter().collect();
    }

    /// Drop any remaining legs.
    pub fn clear(&mut self) {
        self.queue.clear();
    }

    /// Is a route being driven?
    #[inline]
    pub fn is_active(&self) -> bool {
        !self.queue.is_empty()
    }

    /// Cells left on the route.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// Pop the next cell and compute the move reaching it from `pose`.
    ///
    /// On failure the whole queue is abandoned.
    pub fn next_leg(
        &mut self,
        grid: &MazeGrid,
        pose: RobotPose,
        max_move: i32,
    ) -> Result<(Rotation, i32), DirectMoveError> {
        let Some(next) = self.queue.pop_front() else {
            return Ok((Rotation::Straight, 0));
        };

        match check_direct_path(grid, pose, next, max_move) {
            Ok(leg) => Ok(leg),
            Err(e) => {
                tracing::warn!(
                    "Abandoning route at {} -> {} ({}): {}",
                    pose.location,
                    next,
                    e.code(),
                    e
                );
                self.queue.clear();
                Err(e)
            }
        }
    }
}
