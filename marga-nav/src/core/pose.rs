//! Robot pose in the maze.

use serde::{Deserialize, Serialize};

use super::{Cell, Heading, Rotation};

/// Location and heading of the robot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RobotPose {
    /// Current cell
    pub location: Cell,
    /// Current heading
    pub heading: Heading,
}

impl RobotPose {
    /// Pose at the entrance, facing up.
    pub const START: RobotPose = RobotPose {
        location: Cell::ORIGIN,
        heading: Heading::Up,
    };

    /// Create a pose.
    pub const fn new(location: Cell, heading: Heading) -> Self {
        Self { location, heading }
    }

    /// Rotate, then move `movement` cells (backward if negative).
    ///
    /// Returns the heading of travel, or `None` for a turn in place.
    pub fn apply(&mut self, rotation: Rotation, movement: i32) -> Option<Heading> {
        self.heading = rotation.apply(self.heading);
        self.location = self.location.offset(self.heading, movement);
        match movement.signum() {
            1 => Some(self.heading),
            -1 => Some(self.heading.reverse()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_forward_and_backward() {
        let mut pose = RobotPose::START;
        assert_eq!(pose.apply(Rotation::TurnRight, 2), Some(Heading::Right));
        assert_eq!(pose, RobotPose::new(Cell::new(2, 0), Heading::Right));

        assert_eq!(pose.apply(Rotation::Straight, -1), Some(Heading::Left));
        assert_eq!(pose.location, Cell::new(1, 0));
        assert_eq!(pose.heading, Heading::Right);

        assert_eq!(pose.apply(Rotation::TurnLeft, 0), None);
        assert_eq!(pose.heading, Heading::Up);
    }
}
