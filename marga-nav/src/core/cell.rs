//! Maze cell coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Heading;

/// Integer cell coordinates in the maze.
///
/// `(0, 0)` is the entrance in the bottom-left corner, `x` grows to the
/// right and `y` grows upward. This matches the robot's physical frame, so
/// no index flipping is needed anywhere in the crate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Column index
    pub x: i32,
    /// Row index (0 = bottom row)
    pub y: i32,
}

impl Cell {
    /// The maze entrance.
    pub const ORIGIN: Cell = Cell { x: 0, y: 0 };

    /// Create a new cell.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Cell reached by moving `steps` cells along `heading`.
    ///
    /// Negative `steps` move against the heading.
    #[inline]
    pub fn offset(self, heading: Heading, steps: i32) -> Cell {
        let (dx, dy) = heading.delta();
        Cell::new(self.x + dx * steps, self.y + dy * steps)
    }

    /// Manhattan distance to another cell.
    #[inline]
    pub fn manhattan_distance(&self, other: &Cell) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Direction and distance to an axis-aligned cell.
    ///
    /// Returns `None` when the cells share neither a row nor a column,
    /// or when they are the same cell.
    pub fn aligned_direction_to(&self, other: &Cell) -> Option<(Heading, i32)> {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        match (dx, dy) {
            (0, 0) => None,
            (0, _) => Heading::from_delta(0, dy.signum()).map(|h| (h, dy.abs())),
            (_, 0) => Heading::from_delta(dx.signum(), 0).map(|h| (h, dx.abs())),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
