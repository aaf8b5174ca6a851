//! Passable-edge storage.

use crate::core::{Cell, Heading};

/// Passable edges between adjacent cells.
///
/// Two flat boolean arrays:
/// - `vertical[y * (dim - 1) + x]`: edge between `(x, y)` and `(x + 1, y)`
/// - `horizontal[y * dim + x]`: edge between `(x, y)` and `(x, y + 1)`
///
/// Every edge starts closed (unknown) and can only be opened.
#[derive(Clone, Debug)]
pub struct WallGrid {
    dim: usize,
    vertical: Vec<bool>,
    horizontal: Vec<bool>,
}

/// Index of an edge in one of the two arrays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Edge {
    Vertical(usize),
    Horizontal(usize),
}

impl WallGrid {
    /// Create a grid with every interior edge unknown.
    pub fn new(dim: usize) -> Self {
        let inner = dim.saturating_sub(1);
        Self {
            dim,
            vertical: vec![false; inner * dim],
            horizontal: vec![false; dim * inner],
        }
    }

    /// Maze dimension.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    fn in_bounds(&self, cell: Cell) -> bool {
        let dim = self.dim as i32;
        cell.x >= 0 && cell.y >= 0 && cell.x < dim && cell.y < dim
    }

    /// Edge leaving `cell` toward `heading`, if both sides are in the maze.
    fn edge(&self, cell: Cell, heading: Heading) -> Option<Edge> {
        let next = cell.offset(heading, 1);
        if !self.in_bounds(cell) || !self.in_bounds(next) {
            return None;
        }
        let dim = self.dim;
        let index = match heading {
            Heading::Right => Edge::Vertical(cell.y as usize * (dim - 1) + cell.x as usize),
            Heading::Left => Edge::Vertical(next.y as usize * (dim - 1) + next.x as usize),
            Heading::Up => Edge::Horizontal(cell.y as usize * dim + cell.x as usize),
            Heading::Down => Edge::Horizontal(next.y as usize * dim + next.x as usize),
        };
        Some(index)
    }

    /// Can the robot cross from `cell` one step toward `heading`?
    ///
    /// False until the edge has been observed open, and always false
    /// across the maze boundary.
    #[inline]
    pub fn is_open(&self, cell: Cell, heading: Heading) -> bool {
        match self.edge(cell, heading) {
            Some(Edge::Vertical(i)) => self.vertical[i],
            Some(Edge::Horizontal(i)) => self.horizontal[i],
            None => false,
        }
    }

    /// Is the edge between two axis-adjacent cells known passable?
    pub fn is_passable(&self, a: Cell, b: Cell) -> bool {
        match a.aligned_direction_to(&b) {
            Some((heading, 1)) => self.is_open(a, heading),
            _ => false,
        }
    }

    /// Mark the edge from `cell` toward `heading` passable.
    ///
    /// Returns `true` if the edge was newly opened. Edges on the maze
    /// boundary are ignored.
    pub fn open(&mut self, cell: Cell, heading: Heading) -> bool {
        let slot = match self.edge(cell, heading) {
            Some(Edge::Vertical(i)) => &mut self.vertical[i],
            Some(Edge::Horizontal(i)) => &mut self.horizontal[i],
            None => return false,
        };
        let newly_opened = !*slot;
        *slot = true;
        newly_opened
    }

    /// Farthest offset (0..=max_steps) reachable from `cell` along
    /// `heading`, checking each edge in turn.
    pub fn open_run(&self, cell: Cell, heading: Heading, max_steps: i32) -> i32 {
        let mut run = 0;
        while run < max_steps && self.is_open(cell.offset(heading, run), heading) {
            run += 1;
        }
        run
    }

    /// Number of edges known passable.
    pub fn passable_count(&self) -> usize {
        self.vertical.iter().chain(&self.horizontal).filter(|&&e| e).count()
    }
}
