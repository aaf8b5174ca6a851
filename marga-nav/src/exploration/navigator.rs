//! The maze navigator: one decision per simulator tick.
//!
//! Each call to [`MazeNavigator::decide`] folds the sensor readings into the
//! map, updates the incremental search around the robot, and returns one
//! rotate-and-move (or a reset request). Round 0 first heads for the goal,
//! then keeps mapping to shorten the best path; round 1 drives the best
//! path found.

use crate::config::NavigatorConfig;
use crate::core::{Cell, Decision, Heading, RobotPose, Rotation, SensorReading};
use crate::error::{NavError, Result};
use crate::grid::{DeadState, MazeGrid, SearchStatus, update_dead_ends, update_from_sensors};
use crate::planning::candidates::{rank_mapping, rank_seeking};
use crate::planning::{
    Candidate, GoalCommitment, Heuristic, NeighborMove, Relaxation, materialize_route,
    neighbor_moves, reconstruct_path, refresh_frontier, relax,
};

use super::executor::RouteExecutor;
use super::ledger::RouteLedger;
use super::sampler::CandidateSampler;
use super::state::{NavigationPhase, ReplayTrigger, RunSummary};

/// Visit count seeded on the entrance so it always ranks last.
const ENTRANCE_VISITS: u32 = 100;

/// Incremental A* maze navigator.
pub struct MazeNavigator {
    config: NavigatorConfig,
    grid: MazeGrid,
    pose: RobotPose,
    phase: NavigationPhase,
    /// Round step count (moves ending inside the goal are free)
    steps: u32,
    /// Heading of the last move that changed the location
    last_travel: Option<Heading>,
    /// Location before the last move that changed it
    previous_location: Cell,
    goal: Option<GoalCommitment>,
    best_path: Vec<Cell>,
    executor: RouteExecutor,
    replay_loaded: bool,
    ledger: RouteLedger,
    sampler: CandidateSampler,
    summary: RunSummary,
}

impl MazeNavigator {
    /// Create a navigator for a `maze_dim` x `maze_dim` maze with default
    /// configuration.
    pub fn new(maze_dim: usize) -> Result<Self> {
        Self::with_config(maze_dim, NavigatorConfig::default())
    }

    /// Create a navigator with explicit configuration.
    pub fn with_config(maze_dim: usize, config: NavigatorConfig) -> Result<Self> {
        if maze_dim < 4 || maze_dim % 2 != 0 {
            return Err(NavError::InvalidDimension(maze_dim));
        }
        config.validate()?;

        let mut grid = MazeGrid::new(maze_dim);
        grid.escalate_dead(Cell::ORIGIN, DeadState::Dead);
        grid.escalate_dead(Cell::new(0, 1), DeadState::LeadsToDead);
        grid.add_visits(Cell::ORIGIN, ENTRANCE_VISITS);

        let horizon = (maze_dim as u32).saturating_mul(config.exploration.randomness_horizon_per_dim);
        let sampler = CandidateSampler::new(
            config.exploration.randomness,
            horizon,
            config.exploration.rng_seed,
        );

        tracing::info!(
            "Navigator ready: {}x{} maze, step budget {}, randomness {}",
            maze_dim,
            maze_dim,
            config.step_budget,
            config.exploration.randomness
        );

        Ok(Self {
            config,
            grid,
            pose: RobotPose::START,
            phase: NavigationPhase::Seeking,
            steps: 0,
            last_travel: None,
            previous_location: Cell::ORIGIN,
            goal: None,
            best_path: Vec::new(),
            executor: RouteExecutor::new(),
            replay_loaded: false,
            ledger: RouteLedger::new(),
            sampler,
            summary: RunSummary::default(),
        })
    }

    // === Accessors ===

    /// Current cell.
    pub fn location(&self) -> Cell {
        self.pose.location
    }

    /// Current heading.
    pub fn heading(&self) -> Heading {
        self.pose.heading
    }

    /// Current pose.
    pub fn pose(&self) -> RobotPose {
        self.pose
    }

    /// Current phase.
    pub fn phase(&self) -> NavigationPhase {
        self.phase
    }

    /// Current round (0 exploring, 1 replaying).
    pub fn round(&self) -> u8 {
        self.phase.round()
    }

    /// Steps taken this round.
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Best known path from the entrance to the committed goal cell.
    pub fn best_path(&self) -> &[Cell] {
        &self.best_path
    }

    /// Committed goal cell and probe, once the goal has been reached.
    pub fn goal(&self) -> Option<GoalCommitment> {
        self.goal
    }

    /// Everything known about the maze.
    pub fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    /// Route cost history.
    pub fn ledger(&self) -> &RouteLedger {
        &self.ledger
    }

    /// Exploration round statistics.
    pub fn summary(&self) -> &RunSummary {
        &self.summary
    }

    /// Is a multi-leg route being driven?
    pub fn is_executing_route(&self) -> bool {
        self.executor.is_active()
    }

    /// Has the replay driven the whole best path?
    pub fn is_finished(&self) -> bool {
        self.phase == NavigationPhase::Replaying && self.replay_loaded && !self.executor.is_active()
    }

    /// Decide the next move from the readings taken at the current pose.
    pub fn decide(&mut self, sensors: impl Into<SensorReading>) -> Decision {
        let sensors = sensors.into();

        if self.phase == NavigationPhase::Seeking && self.grid.is_goal(self.pose.location) {
            self.commit_goal();
        }

        if self.phase.is_exploring() {
            update_from_sensors(
                self.grid.walls_mut(),
                self.pose.location,
                self.pose.heading,
                &sensors,
            );
        }

        if self.phase == NavigationPhase::Mapping && self.steps > self.config.step_budget {
            return self.begin_replay(ReplayTrigger::StepBudget);
        }

        update_dead_ends(&mut self.grid, self.pose.location, self.pose.heading, &sensors);

        if self.executor.is_active() {
            match self.executor.next_leg(&self.grid, self.pose, self.config.max_move) {
                Ok((rotation, movement)) => return self.apply_move(rotation, movement),
                Err(e) => {
                    tracing::debug!("Replanning at {} after abandoned route: {}", self.pose.location, e)
                }
            }
        }

        match self.phase {
            NavigationPhase::Seeking => self.seek_goal(&sensors),
            NavigationPhase::Mapping => self.map_frontier(&sensors),
            NavigationPhase::Replaying => self.replay(),
        }
    }

    /// Rotate and move the tracked pose, count the step.
    fn apply_move(&mut self, rotation: Rotation, movement: i32) -> Decision {
        let from = self.pose.location;
        if let Some(travel) = self.pose.apply(rotation, movement) {
            self.last_travel = Some(travel);
            self.previous_location = from;
        }
        if !self.grid.is_goal(self.pose.location) {
            self.steps += 1;
        }
        Decision::movement(rotation, movement)
    }

    /// Turn in place when nothing else is possible.
    fn turn_in_place(&mut self) -> Decision {
        tracing::warn!("No move available at {}, turning in place", self.pose.location);
        self.apply_move(Rotation::TurnRight, 0)
    }

    // === Seeking ===

    fn seek_goal(&mut self, sensors: &SensorReading) -> Decision {
        let location = self.pose.location;
        let heuristic = Heuristic::GoalRegion {
            bounds: self.grid.goal_bounds(),
        };
        self.grid.clear_g_updated(location);

        let moves = neighbor_moves(&self.grid, self.pose, sensors, self.config.max_move);
        let mut viable: Vec<NeighborMove> = moves
            .iter()
            .copied()
            .filter(|m| self.grid.dead_state(m.cell).is_open())
            .collect();
        if viable.is_empty() {
            viable = moves
                .into_iter()
                .filter(|m| self.grid.dead_state(m.cell) != DeadState::Dead)
                .collect();
        }

        let mut candidates: Vec<Candidate> = viable
            .into_iter()
            .map(|step| {
                let outcome = relax(&mut self.grid, location, step.cell);
                let stale = outcome == Relaxation::Unchanged
                    && self.grid.status(step.cell) == SearchStatus::Closed;
                Candidate {
                    cell: step.cell,
                    step: Some(step),
                    f_value: if stale {
                        f64::INFINITY
                    } else {
                        heuristic.f_value(&self.grid, step.cell)
                    },
                    visits: self.grid.visits(step.cell),
                    g_updated: outcome.lowered_cost(),
                }
            })
            .collect();
        self.grid.close(location);

        if candidates.is_empty() {
            return self.turn_in_place();
        }
        rank_seeking(&mut candidates);

        let mut choice = self.sampler.pick(candidates.len(), self.steps);
        if let Some(index) = candidates.iter().position(|c| self.grid.is_goal(c.cell)) {
            choice = index;
        }

        let Some(step) = candidates[choice].step else {
            return self.turn_in_place();
        };
        let decision = self.apply_move(step.direction.rotation(), step.movement);
        self.grid.add_visits(self.pose.location, 1);
        decision
    }

    /// Fix the goal cell the best path ends at and switch to mapping.
    fn commit_goal(&mut self) {
        let location = self.pose.location;
        let commitment = match self.last_travel {
            Some(travel) => {
                let behind = location.offset(travel, -1);
                if self.grid.is_goal(behind) {
                    // Enter through the first goal cell on the way in
                    relax(&mut self.grid, self.previous_location, behind);
                    GoalCommitment {
                        cell: behind,
                        probe: location.offset(travel, -2),
                    }
                } else {
                    GoalCommitment {
                        cell: location,
                        probe: behind,
                    }
                }
            }
            None => GoalCommitment {
                cell: location,
                probe: location,
            },
        };

        self.goal = Some(commitment);
        let previous = self.phase;
        self.phase = NavigationPhase::Mapping;
        self.summary.first_goal_steps = Some(self.steps);
        self.rebuild_best_path(commitment.cell);

        tracing::info!(
            "{} -> {}: goal reached at {} after {} steps, committed to {} (probe {}), best path {} legs",
            previous.name(),
            self.phase.name(),
            location,
            self.steps,
            commitment.cell,
            commitment.probe,
            self.best_path.len().saturating_sub(1)
        );
    }

    fn rebuild_best_path(&mut self, goal: Cell) {
        match reconstruct_path(&self.grid, goal) {
            Ok(path) => self.best_path = path,
            Err(e) => tracing::error!("Best path rebuild failed: {}", e),
        }
    }

    // === Mapping ===

    fn map_frontier(&mut self, sensors: &SensorReading) -> Decision {
        let location = self.pose.location;
        let Some(goal) = self.goal else {
            return self.seek_goal(sensors);
        };
        let max_move = self.config.max_move;

        self.grid.clear_g_updated(location);
        refresh_frontier(&mut self.grid, &goal, &mut self.best_path, max_move);

        let moves = neighbor_moves(&self.grid, self.pose, sensors, max_move);
        for step in &moves {
            if self.grid.dead_state(step.cell).is_open() {
                relax(&mut self.grid, location, step.cell);
            }
        }
        self.grid.close(location);

        let heuristic = goal.heuristic(self.best_path.len());
        let mut candidates: Vec<Candidate> = self
            .grid
            .open_cells()
            .filter(|&cell| {
                cell != location
                    && self.grid.dead_state(cell).is_open()
                    && goal.admits(&self.grid, cell)
            })
            .map(|cell| Candidate {
                cell,
                step: moves.iter().find(|m| m.cell == cell).copied(),
                f_value: heuristic.f_value(&self.grid, cell),
                visits: self.grid.visits(cell),
                g_updated: self.grid.node(cell).is_some_and(|n| n.g_updated),
            })
            .collect();
        self.grid.add_visits(location, 1);

        rank_mapping(&mut candidates);
        let Some(best) = candidates.first().copied() else {
            return self.begin_replay(ReplayTrigger::FrontierExhausted);
        };

        if let Some(step) = best.step {
            return self.apply_move(step.direction.rotation(), step.movement);
        }

        self.ledger.record_path_len(self.best_path.len());
        if self.ledger.should_stop(
            self.config.exploration.route_window,
            self.config.exploration.gain_multiplier,
        ) {
            return self.begin_replay(ReplayTrigger::CostExceedsGain);
        }

        match materialize_route(&self.grid, &self.best_path, location, best.cell) {
            Ok(route) if !route.is_empty() => {
                tracing::debug!(
                    "Route {} -> {}: {} legs, best path {} cells",
                    location,
                    best.cell,
                    route.len(),
                    self.best_path.len()
                );
                self.ledger.record_route(route.len());
                self.summary.routes_computed += 1;
                self.executor.load(route);
                match self.executor.next_leg(&self.grid, self.pose, max_move) {
                    Ok((rotation, movement)) => self.apply_move(rotation, movement),
                    Err(_) => self.single_step(&moves, &heuristic),
                }
            }
            Ok(_) => self.single_step(&moves, &heuristic),
            Err(e) => {
                tracing::error!("Route {} -> {} failed: {}", location, best.cell, e);
                self.single_step(&moves, &heuristic)
            }
        }
    }

    /// Best direct move when no route could be built.
    fn single_step(&mut self, moves: &[NeighborMove], heuristic: &Heuristic) -> Decision {
        let best = moves
            .iter()
            .filter(|m| self.grid.dead_state(m.cell) != DeadState::Dead)
            .min_by(|a, b| {
                heuristic
                    .f_value(&self.grid, a.cell)
                    .total_cmp(&heuristic.f_value(&self.grid, b.cell))
            })
            .copied();

        match best {
            Some(step) => self.apply_move(step.direction.rotation(), step.movement),
            None => self.turn_in_place(),
        }
    }

    // === Round switch and replay ===

    fn begin_replay(&mut self, trigger: ReplayTrigger) -> Decision {
        self.summary.exploration_steps = self.steps + 1;
        self.summary.trigger = Some(trigger);
        self.summary.best_path = self.best_path.clone();

        tracing::info!(
            "{} -> {} ({}): first goal hit after {:?} steps, {} round-0 steps, best path {} legs",
            self.phase.name(),
            NavigationPhase::Replaying.name(),
            trigger.describe(),
            self.summary.first_goal_steps,
            self.summary.exploration_steps,
            self.summary.path_legs()
        );
        tracing::debug!("Best path: {:?}", self.best_path);

        self.phase = NavigationPhase::Replaying;
        self.pose = RobotPose::START;
        self.steps = 0;
        self.last_travel = None;
        self.previous_location = Cell::ORIGIN;
        self.executor.clear();
        self.replay_loaded = false;
        Decision::Reset
    }

    fn replay(&mut self) -> Decision {
        if self.replay_loaded {
            return Decision::HOLD;
        }
        self.replay_loaded = true;
        if self.best_path.len() < 2 {
            tracing::error!("No best path to replay");
            return Decision::HOLD;
        }

        self.executor.load(self.best_path.iter().skip(1).copied());
        match self.executor.next_leg(&self.grid, self.pose, self.config.max_move) {
            Ok((rotation, movement)) => self.apply_move(rotation, movement),
            Err(_) => Decision::HOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_dimensions() {
        assert_eq!(MazeNavigator::new(5).err(), Some(NavError::InvalidDimension(5)));
        assert_eq!(MazeNavigator::new(2).err(), Some(NavError::InvalidDimension(2)));
        assert!(MazeNavigator::new(12).is_ok());
    }

    #[test]
    fn test_rejects_bad_config() {
        let config = NavigatorConfig {
            max_move: 4,
            ..NavigatorConfig::default()
        };
        assert!(matches!(
            MazeNavigator::with_config(8, config),
            Err(NavError::Config(_))
        ));
    }

    #[test]
    fn test_entrance_seeded() {
        let nav = MazeNavigator::new(8).unwrap();
        assert_eq!(nav.grid().dead_state(Cell::ORIGIN), DeadState::Dead);
        assert_eq!(nav.grid().dead_state(Cell::new(0, 1)), DeadState::LeadsToDead);
        assert_eq!(nav.grid().visits(Cell::ORIGIN), ENTRANCE_VISITS);
        assert_eq!(nav.pose(), RobotPose::START);
        assert_eq!(nav.phase(), NavigationPhase::Seeking);
        assert_eq!(nav.round(), 0);
    }

    #[test]
    fn test_first_move_up_the_corridor() {
        let mut nav = MazeNavigator::new(8).unwrap();
        let decision = nav.decide([0, 5, 0]);
        assert_eq!(decision, Decision::movement(Rotation::Straight, 3));
        assert_eq!(nav.location(), Cell::new(0, 3));
        assert_eq!(nav.steps(), 1);
        assert_eq!(nav.grid().parent(Cell::new(0, 3)), Some(Cell::ORIGIN));
        assert_eq!(nav.grid().status(Cell::ORIGIN), SearchStatus::Closed);
    }

    #[test]
    fn test_huge_front_reading_still_moves() {
        let mut nav = MazeNavigator::new(8).unwrap();
        let decision = nav.decide([0, 3_000_000_000, 0]);
        assert_eq!(decision, Decision::movement(Rotation::Straight, 3));
        assert_eq!(nav.location(), Cell::new(0, 3));
        assert_eq!(nav.grid().walls().passable_count(), 7);

        let decision = nav.decide([0, i32::MAX as u32, 0]);
        assert!(!decision.is_reset());
        assert_eq!(nav.grid().walls().passable_count(), 7);
    }

    #[test]
    fn test_enclosed_turns_in_place() {
        let mut nav = MazeNavigator::new(8).unwrap();
        let decision = nav.decide([0, 0, 0]);
        assert_eq!(decision, Decision::movement(Rotation::TurnRight, 0));
        assert_eq!(nav.location(), Cell::ORIGIN);
        assert_eq!(nav.heading(), Heading::Right);
    }
}
