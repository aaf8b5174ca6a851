//! Core types for the maze navigator.
//!
//! ## Type Categories
//!
//! ### Geometry
//! - [`Cell`]: Integer maze cell coordinates (origin bottom-left, y up)
//! - [`Heading`]: One of the four cardinal directions
//! - [`RobotPose`]: Cell plus heading
//!
//! ### Motion
//! - [`Rotation`]: Quarter-turn applied before a move
//! - [`MoveDirection`]: Direction of a move relative to the current heading
//! - [`Decision`]: The per-tick answer handed back to the simulator
//!
//! ### Sensing
//! - [`SensorReading`]: Open-cell counts to the left, front and right

mod cell;
mod heading;
mod motion;
mod pose;
mod sensors;

pub use cell::Cell;
pub use heading::Heading;
pub use motion::{Decision, MoveDirection, Rotation};
pub use pose::RobotPose;
pub use sensors::SensorReading;
