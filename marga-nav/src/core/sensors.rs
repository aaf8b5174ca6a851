//! Range sensor readings.

use serde::{Deserialize, Serialize};

use super::MoveDirection;

/// Open-cell counts reported by the three range sensors.
///
/// Values may exceed the per-tick movement limit; the full count is used
/// for wall mapping while movement is capped separately.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SensorReading {
    /// Open cells to the robot's left
    pub left: u32,
    /// Open cells ahead
    pub front: u32,
    /// Open cells to the robot's right
    pub right: u32,
}

impl SensorReading {
    /// Create a reading.
    pub const fn new(left: u32, front: u32, right: u32) -> Self {
        Self { left, front, right }
    }

    /// Reading for a sensed direction. `Back` is never sensed and reads 0.
    #[inline]
    pub fn get(&self, direction: MoveDirection) -> u32 {
        match direction {
            MoveDirection::Left => self.left,
            MoveDirection::Front => self.front,
            MoveDirection::Right => self.right,
            MoveDirection::Back => 0,
        }
    }

    /// All three sensors read zero: the cell is enclosed on three sides.
    #[inline]
    pub fn is_enclosed(&self) -> bool {
        self.left == 0 && self.front == 0 && self.right == 0
    }

    /// Both side sensors read zero: ahead is the only sensed exit.
    #[inline]
    pub fn is_corridor(&self) -> bool {
        self.left == 0 && self.right == 0
    }
}

impl From<[u32; 3]> for SensorReading {
    fn from(values: [u32; 3]) -> Self {
        Self::new(values[0], values[1], values[2])
    }
}
