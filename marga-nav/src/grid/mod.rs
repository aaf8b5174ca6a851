//! Maze grid model.
//!
//! Holds everything the navigator knows about the maze:
//! - Passable edges discovered by the range sensors ([`WallGrid`])
//! - Dead-end flags per cell ([`DeadState`])
//! - Visit counts used as tie-breaks
//! - A* bookkeeping per cell ([`SearchNode`])
//!
//! All knowledge is monotonic: edges are only ever opened and dead flags
//! only ever escalate.

mod dead_end;
mod sensor_update;
mod storage;
mod walls;

pub use dead_end::update_dead_ends;
pub use sensor_update::{backward_open_run, update_from_sensors};
pub use storage::{DeadState, MazeGrid, SearchNode, SearchStatus};
pub use walls::WallGrid;
