//! Wall mapping from range sensor readings.
//!
//! A reading of `n` in some direction means the `n` cells beyond the robot in
//! that direction are reachable, so the `n` edges crossed to get there are
//! passable. Readings never close edges.

use crate::core::{Cell, Heading, MoveDirection, SensorReading};

use super::WallGrid;

/// Open every edge proven passable by `sensors` at `location`.
///
/// Counts larger than the maze are clamped to its dimension, and edges
/// past the boundary are ignored. Returns the number of newly opened edges.
pub fn update_from_sensors(
    walls: &mut WallGrid,
    location: Cell,
    heading: Heading,
    sensors: &SensorReading,
) -> usize {
    let mut opened = 0;
    for direction in MoveDirection::SENSED {
        let travel = direction.travel_heading(heading);
        let count = sensors.get(direction).min(walls.dim() as u32) as i32;
        for step in 1..=count {
            if walls.open(location.offset(travel, step - 1), travel) {
                opened += 1;
            }
        }
    }

    if opened > 0 {
        tracing::trace!(
            "Sensors {:?} at {} facing {} opened {} edges",
            sensors,
            location,
            heading,
            opened
        );
    }
    opened
}

/// Longest run (0..=max_steps) the robot could reverse from `location`
/// using only edges already known passable.
#[inline]
pub fn backward_open_run(walls: &WallGrid, location: Cell, heading: Heading, max_steps: i32) -> i32 {
    walls.open_run(location, heading.reverse(), max_steps)
}
