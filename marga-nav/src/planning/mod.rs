//! Incremental A* planning over the partially known maze.
//!
//! The search state lives in [`MazeGrid`](crate::grid::MazeGrid) and is
//! updated a little every tick instead of being recomputed:
//! - [`relax`]: shared edge relaxation with reopening of closed cells
//! - [`Heuristic`]: goal-seeking and post-goal estimates
//! - [`candidates`]: one-move neighbors of the robot and their ranking
//! - [`refresh_frontier`]: re-expansion of evaluated open cells
//! - [`path`]: best-path reconstruction, route splicing and leg validation

mod astar;
pub mod candidates;
pub mod path;
mod refresh;

pub use astar::{Heuristic, Relaxation, relax};
pub use candidates::{Candidate, NeighborMove, neighbor_moves};
pub use path::{check_direct_path, materialize_route, reconstruct_path};
pub use refresh::{GoalCommitment, refresh_frontier};
