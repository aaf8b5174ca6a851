//! Motion primitives exchanged with the simulator.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Heading;

/// Quarter-turn applied before moving.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    /// -90 degrees (counter-clockwise)
    TurnLeft,
    /// No rotation
    #[default]
    Straight,
    /// +90 degrees (clockwise)
    TurnRight,
}

impl Rotation {
    /// Rotation in degrees as the simulator expects it.
    #[inline]
    pub fn degrees(self) -> i32 {
        match self {
            Rotation::TurnLeft => -90,
            Rotation::Straight => 0,
            Rotation::TurnRight => 90,
        }
    }

    /// Heading after applying this rotation.
    #[inline]
    pub fn apply(self, heading: Heading) -> Heading {
        match self {
            Rotation::TurnLeft => heading.left(),
            Rotation::Straight => heading,
            Rotation::TurnRight => heading.right(),
        }
    }

    /// Rotation from `from` to `to`, moving backward when `to` is behind.
    ///
    /// Returns the rotation and the sign the movement must carry.
    pub fn toward(from: Heading, to: Heading) -> (Rotation, i32) {
        if to == from {
            (Rotation::Straight, 1)
        } else if to == from.left() {
            (Rotation::TurnLeft, 1)
        } else if to == from.right() {
            (Rotation::TurnRight, 1)
        } else {
            (Rotation::Straight, -1)
        }
    }
}

/// Direction of a candidate move relative to the robot's heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    /// Turn left, then move forward
    Left,
    /// Move forward
    Front,
    /// Turn right, then move forward
    Right,
    /// Reverse without turning
    Back,
}

impl MoveDirection {
    /// The three sensed directions, in sensor order.
    pub const SENSED: [MoveDirection; 3] =
        [MoveDirection::Left, MoveDirection::Front, MoveDirection::Right];

    /// Rotation the robot performs for this move.
    #[inline]
    pub fn rotation(self) -> Rotation {
        match self {
            MoveDirection::Left => Rotation::TurnLeft,
            MoveDirection::Front | MoveDirection::Back => Rotation::Straight,
            MoveDirection::Right => Rotation::TurnRight,
        }
    }

    /// Absolute heading of travel for a robot facing `heading`.
    #[inline]
    pub fn travel_heading(self, heading: Heading) -> Heading {
        match self {
            MoveDirection::Left => heading.left(),
            MoveDirection::Front => heading,
            MoveDirection::Right => heading.right(),
            MoveDirection::Back => heading.reverse(),
        }
    }

    /// Ranking preference: forward over lateral over backward.
    #[inline]
    pub fn preference(self) -> i8 {
        match self {
            MoveDirection::Front => 1,
            MoveDirection::Left | MoveDirection::Right => 0,
            MoveDirection::Back => -1,
        }
    }
}

/// Decision returned to the simulator for one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Rotate first, then move `movement` cells (negative = backward).
    Move {
        /// Rotation applied before moving
        rotation: Rotation,
        /// Signed cell count in `[-3, 3]`
        movement: i32,
    },
    /// Request to restart the robot at the entrance for the next round.
    Reset,
}

impl Decision {
    /// Stay in place.
    pub const HOLD: Decision = Decision::Move {
        rotation: Rotation::Straight,
        movement: 0,
    };

    /// Create a move decision.
    #[inline]
    pub fn movement(rotation: Rotation, movement: i32) -> Self {
        Decision::Move { rotation, movement }
    }

    /// Is this the reset sentinel?
    #[inline]
    pub fn is_reset(&self) -> bool {
        matches!(self, Decision::Reset)
    }

    /// `(rotation degrees, movement)` for move decisions.
    pub fn as_degrees(&self) -> Option<(i32, i32)> {
        match *self {
            Decision::Move { rotation, movement } => Some((rotation.degrees(), movement)),
            Decision::Reset => None,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Move { rotation, movement } => {
                write!(f, "({}, {})", rotation.degrees(), movement)
            }
            Decision::Reset => f.write_str("(Reset, Reset)"),
        }
    }
}
