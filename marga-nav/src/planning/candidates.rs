//! One-move neighbors of the robot and candidate ranking.

use std::cmp::Ordering;

use crate::core::{Cell, MoveDirection, RobotPose, SensorReading};
use crate::grid::{MazeGrid, backward_open_run};

/// A cell the robot can reach with one rotate-and-move this tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NeighborMove {
    pub cell: Cell,
    pub direction: MoveDirection,
    /// Signed cell count; negative when reversing
    pub movement: i32,
}

/// Every cell reachable in one move from `pose`.
///
/// Backward offsets come first (farthest first, confirmed by known walls
/// only), then the left, front and right offsets proven by this tick's
/// readings. Cells outside the maze are dropped.
pub fn neighbor_moves(
    grid: &MazeGrid,
    pose: RobotPose,
    sensors: &SensorReading,
    max_move: i32,
) -> Vec<NeighborMove> {
    let mut moves = Vec::with_capacity(12);

    let back = backward_open_run(grid.walls(), pose.location, pose.heading, max_move);
    for movement in -back..=-1 {
        moves.push(NeighborMove {
            cell: pose.location.offset(pose.heading, movement),
            direction: MoveDirection::Back,
            movement,
        });
    }

    for direction in MoveDirection::SENSED {
        let travel = direction.travel_heading(pose.heading);
        let reach = (sensors.get(direction).min(grid.dim() as u32) as i32).min(max_move);
        for movement in 1..=reach {
            moves.push(NeighborMove {
                cell: pose.location.offset(travel, movement),
                direction,
                movement,
            });
        }
    }

    moves.retain(|m| grid.in_bounds(m.cell));
    moves
}

/// A scored cell competing to be the next destination.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    pub cell: Cell,
    /// The move reaching the cell directly, if it is a neighbor this tick
    pub step: Option<NeighborMove>,
    pub f_value: f64,
    pub visits: u32,
    pub g_updated: bool,
}

impl Candidate {
    /// Is the cell reachable with a single move?
    #[inline]
    pub fn is_neighbor(&self) -> bool {
        self.step.is_some()
    }

    fn preference(&self) -> i8 {
        self.step.map_or(i8::MIN, |s| s.direction.preference())
    }

    fn reach(&self) -> i32 {
        self.step.map_or(0, |s| s.movement.abs())
    }

    /// Ordering while searching for the goal.
    ///
    /// `F` asc, visits asc, improved first, forward over lateral over
    /// backward, longer move first.
    pub fn seeking_order(&self, other: &Self) -> Ordering {
        self.f_value
            .total_cmp(&other.f_value)
            .then_with(|| self.visits.cmp(&other.visits))
            .then_with(|| other.g_updated.cmp(&self.g_updated))
            .then_with(|| other.preference().cmp(&self.preference()))
            .then_with(|| other.reach().cmp(&self.reach()))
    }

    /// Ordering while mapping after the goal was reached.
    ///
    /// Neighbors first, improved neighbors before other neighbors, then
    /// visits asc, improved first, `F` asc.
    pub fn mapping_order(&self, other: &Self) -> Ordering {
        let improved_neighbor = |c: &Self| c.is_neighbor() && c.g_updated;
        other
            .is_neighbor()
            .cmp(&self.is_neighbor())
            .then_with(|| improved_neighbor(other).cmp(&improved_neighbor(self)))
            .then_with(|| self.visits.cmp(&other.visits))
            .then_with(|| other.g_updated.cmp(&self.g_updated))
            .then_with(|| self.f_value.total_cmp(&other.f_value))
    }
}

/// Stable sort for the seeking phase.
pub fn rank_seeking(candidates: &mut [Candidate]) {
    candidates.sort_by(Candidate::seeking_order);
}

/// Stable sort for the mapping phase.
pub fn rank_mapping(candidates: &mut [Candidate]) {
    candidates.sort_by(Candidate::mapping_order);
}
