//! Test utilities for MargaNav.
//!
//! An in-memory maze and a simulator that drives the robot the way the
//! maze tester does: sensors report exact open-cell counts, rotation is
//! applied before movement, and movement stops at the first wall.

#![allow(dead_code)]

use std::collections::HashSet;

use marga_nav::{Cell, Decision, Heading, MazeNavigator, MoveDirection, RobotPose, SensorReading};
use tracing_subscriber::EnvFilter;

/// Install a test log subscriber (`RUST_LOG=marga_nav=debug`).
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Ground-truth maze: a set of passable edges between adjacent cells.
#[derive(Clone, Debug)]
pub struct Maze {
    dim: i32,
    passages: HashSet<(Cell, Cell)>,
}

impl Maze {
    /// Maze with every interior wall present.
    pub fn walled(dim: usize) -> Self {
        Self {
            dim: dim as i32,
            passages: HashSet::new(),
        }
    }

    /// Maze with every interior wall removed.
    pub fn open(dim: usize) -> Self {
        let mut maze = Self::walled(dim);
        let last = maze.dim - 1;
        for i in 0..maze.dim {
            maze.carve(Cell::new(0, i), Cell::new(last, i));
            maze.carve(Cell::new(i, 0), Cell::new(i, last));
        }
        maze
    }

    pub fn dim(&self) -> usize {
        self.dim as usize
    }

    /// Knock down every wall on the straight segment `from..=to`.
    pub fn carve(&mut self, from: Cell, to: Cell) -> &mut Self {
        let (heading, distance) = from
            .aligned_direction_to(&to)
            .unwrap_or_else(|| panic!("{} and {} are not aligned", from, to));
        for step in 0..distance {
            let a = from.offset(heading, step);
            let b = from.offset(heading, step + 1);
            self.passages.insert((a, b));
            self.passages.insert((b, a));
        }
        self
    }

    /// Put a wall back between two adjacent cells.
    pub fn wall(&mut self, a: Cell, b: Cell) -> &mut Self {
        self.passages.remove(&(a, b));
        self.passages.remove(&(b, a));
        self
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.dim && cell.y < self.dim
    }

    /// Can the robot cross from `cell` toward `heading`?
    pub fn passable(&self, cell: Cell, heading: Heading) -> bool {
        self.passages.contains(&(cell, cell.offset(heading, 1)))
    }

    /// Open cells visible from `cell` looking toward `heading`.
    pub fn distance(&self, cell: Cell, heading: Heading) -> u32 {
        let mut count = 0;
        let mut current = cell;
        while self.passable(current, heading) {
            current = current.offset(heading, 1);
            count += 1;
        }
        count
    }

    pub fn is_goal(&self, cell: Cell) -> bool {
        let half = self.dim / 2;
        [half - 1, half].contains(&cell.x) && [half - 1, half].contains(&cell.y)
    }

    /// All cells, bottom row first.
    pub fn cells(&self) -> Vec<Cell> {
        (0..self.dim)
            .flat_map(|y| (0..self.dim).map(move |x| Cell::new(x, y)))
            .collect()
    }
}

/// Small maze with a goal entrance from the right, a loop through the
/// lower-left quadrant and a few dead ends.
///
/// ```text
///   5  . . . . . .
///   4  . . x   x .
///   3  . x G G . .
///   2  . . G G   .
///   1  . .       .
///   0  S|. . . . .
///      0 1 2 3 4 5
/// ```
pub fn loop_maze() -> Maze {
    let mut maze = Maze::walled(6);
    maze.carve(Cell::new(0, 0), Cell::new(0, 5))
        .carve(Cell::new(0, 5), Cell::new(5, 5))
        .carve(Cell::new(5, 5), Cell::new(5, 0))
        .carve(Cell::new(5, 0), Cell::new(1, 0))
        .carve(Cell::new(5, 3), Cell::new(3, 3))
        .carve(Cell::new(3, 3), Cell::new(2, 3))
        .carve(Cell::new(2, 3), Cell::new(2, 2))
        .carve(Cell::new(2, 2), Cell::new(3, 2))
        .carve(Cell::new(1, 0), Cell::new(1, 3))
        .carve(Cell::new(0, 4), Cell::new(2, 4))
        .carve(Cell::new(4, 5), Cell::new(4, 4))
        .carve(Cell::new(0, 2), Cell::new(1, 2));
    maze
}

/// Robot simulator over a ground-truth maze.
pub struct Simulator {
    pub maze: Maze,
    pub pose: RobotPose,
    /// Moves cut short by a wall
    pub collisions: usize,
}

impl Simulator {
    pub fn new(maze: Maze) -> Self {
        Self {
            maze,
            pose: RobotPose::START,
            collisions: 0,
        }
    }

    /// Exact readings at the current pose.
    pub fn sensors(&self) -> SensorReading {
        let read = |direction: MoveDirection| {
            self.maze
                .distance(self.pose.location, direction.travel_heading(self.pose.heading))
        };
        SensorReading::new(
            read(MoveDirection::Left),
            read(MoveDirection::Front),
            read(MoveDirection::Right),
        )
    }

    /// Apply a decision: rotate, then move until done or blocked.
    pub fn apply(&mut self, decision: Decision) {
        match decision {
            Decision::Reset => self.pose = RobotPose::START,
            Decision::Move { rotation, movement } => {
                self.pose.heading = rotation.apply(self.pose.heading);
                let travel = if movement < 0 {
                    self.pose.heading.reverse()
                } else {
                    self.pose.heading
                };
                for _ in 0..movement.abs().min(3) {
                    if !self.maze.passable(self.pose.location, travel) {
                        self.collisions += 1;
                        break;
                    }
                    self.pose.location = self.pose.location.offset(travel, 1);
                }
            }
        }
    }
}

/// One simulator tick: read, decide, apply.
pub fn tick(nav: &mut MazeNavigator, sim: &mut Simulator) -> Decision {
    let decision = nav.decide(sim.sensors());
    sim.apply(decision);
    decision
}

/// Known-passable edges of the navigator, as (cell, heading) pairs.
pub fn known_edges(nav: &MazeNavigator) -> Vec<(Cell, Heading)> {
    let grid = nav.grid();
    grid.cells()
        .flat_map(|cell| Heading::ALL.into_iter().map(move |h| (cell, h)))
        .filter(|&(cell, h)| grid.walls().is_open(cell, h))
        .collect()
}
