//! # Marga-Nav: Incremental Maze Navigation
//!
//! Plans the moves of a micromouse-style robot through an unknown square
//! maze. The robot starts in the bottom-left cell facing up and must reach
//! one of the four central goal cells. Each tick it reports how many open
//! cells its left, front and right range sensors see, and the navigator
//! answers with one rotation and a move of up to three cells.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use marga_nav::{Decision, MazeNavigator};
//!
//! let mut nav = MazeNavigator::new(12)?;
//!
//! // Readings from the simulator: [left, front, right]
//! match nav.decide([0, 3, 1]) {
//!     Decision::Move { rotation, movement } => {
//!         println!("rotate {} deg, move {}", rotation.degrees(), movement);
//!     }
//!     Decision::Reset => println!("exploration done, restart at the entrance"),
//! }
//! # Ok::<(), marga_nav::NavError>(())
//! ```
//!
//! ## Runs
//!
//! Round 0 explores: the navigator heads for the goal with an incremental
//! A* search over what it has seen, then keeps mapping to shorten the best
//! path until the step budget runs out, the frontier is exhausted, or
//! detours stop paying off. It then answers [`Decision::Reset`], and in
//! round 1 drives the best path it found.
//!
//! ## Coordinate Frame
//!
//! - Cell `(0, 0)` is the bottom-left entrance
//! - `x` grows to the right, `y` grows upward
//! - Headings are `up`, `right`, `down`, `left`; rotations are clockwise
//!   positive in degrees
//!
//! ## Architecture
//!
//! - [`core`]: Cells, headings, poses, sensor readings and decisions
//! - [`grid`]: Wall map, dead-end flags, visit counts, search bookkeeping
//! - [`planning`]: Relaxation, heuristics, candidate ranking, routes
//! - [`exploration`]: The navigator and its phase machine
//! - [`config`]: TOML configuration

pub mod config;
pub mod core;
pub mod error;
pub mod exploration;
pub mod grid;
pub mod planning;

// Re-export main types at crate root
pub use config::{ExplorationConfig, NavigatorConfig};
pub use crate::core::{Cell, Decision, Heading, MoveDirection, RobotPose, Rotation, SensorReading};
pub use error::{DirectMoveError, NavError, Result};
pub use exploration::{MazeNavigator, NavigationPhase, ReplayTrigger, RunSummary};
pub use grid::{DeadState, MazeGrid, SearchStatus};
