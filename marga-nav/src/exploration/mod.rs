//! Exploration and replay.
//!
//! [`MazeNavigator`] owns the maze knowledge and runs the phase machine:
//! - `Seeking`: greedy incremental A* toward the goal region
//! - `Mapping`: after the goal, keep expanding the frontier while detours
//!   still pay off in a shorter best path
//! - `Replaying`: drive the committed best path from the entrance

mod executor;
mod ledger;
mod navigator;
mod sampler;
mod state;

pub use executor::RouteExecutor;
pub use ledger::RouteLedger;
pub use navigator::MazeNavigator;
pub use sampler::CandidateSampler;
pub use state::{NavigationPhase, ReplayTrigger, RunSummary};
