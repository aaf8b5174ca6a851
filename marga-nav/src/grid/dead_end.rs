//! Dead-end detection.
//!
//! Runs once per tick on the robot's current cell only. A cell enclosed on
//! its three sensed sides is `Dead`; a corridor cell whose single sensed exit
//! leads into a dead or dead-leading cell is `LeadsToDead`.

use crate::core::{Cell, Heading, SensorReading};

use super::{DeadState, MazeGrid};

/// Update the dead-end flag of `location` from this tick's readings.
///
/// Returns the new state if it changed.
pub fn update_dead_ends(
    grid: &mut MazeGrid,
    location: Cell,
    heading: Heading,
    sensors: &SensorReading,
) -> Option<DeadState> {
    let target = if sensors.is_enclosed() {
        DeadState::Dead
    } else if sensors.is_corridor() {
        let ahead = location.offset(heading, 1);
        if !grid.in_bounds(ahead) || grid.dead_state(ahead).is_open() {
            return None;
        }
        DeadState::LeadsToDead
    } else {
        return None;
    };

    if grid.escalate_dead(location, target) {
        tracing::debug!("Marked {} as {:?}", location, target);
        Some(target)
    } else {
        None
    }
}
