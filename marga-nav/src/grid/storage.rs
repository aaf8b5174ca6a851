//! Per-cell knowledge arrays.

use crate::core::Cell;

use super::WallGrid;

/// Dead-end classification of a cell.
///
/// Ordered by severity; a cell's state only ever moves up this order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DeadState {
    /// Not known to be a dead end
    #[default]
    Open,
    /// Its only viable exit eventually runs into a dead end
    LeadsToDead,
    /// No viable exit
    Dead,
}

impl DeadState {
    /// Cell is still a normal candidate.
    #[inline]
    pub fn is_open(self) -> bool {
        self == DeadState::Open
    }
}

/// A* membership of a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SearchStatus {
    /// Never discovered
    #[default]
    Unvisited,
    /// Discovered, not yet finalized
    Open,
    /// Expanded
    Closed,
}

/// A* bookkeeping for one cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchNode {
    /// Cost from the entrance (in legs)
    pub g_cost: u32,
    /// g improved since the cell was last expanded
    pub g_updated: bool,
    /// Open/closed membership
    pub status: SearchStatus,
    /// Cell this one was reached from
    pub parent: Option<Cell>,
}

/// Complete maze knowledge owned by the navigator.
///
/// Cells are stored row-major with row 0 at the bottom, so a cell's index is
/// `y * dim + x` with no flipping.
#[derive(Clone, Debug)]
pub struct MazeGrid {
    dim: usize,
    walls: WallGrid,
    dead: Vec<DeadState>,
    visits: Vec<u32>,
    nodes: Vec<SearchNode>,
    /// The two central row/column indices `[dim/2 - 1, dim/2]`
    goal_bounds: [i32; 2],
}

impl MazeGrid {
    /// Create an empty grid for a `dim` x `dim` maze.
    pub fn new(dim: usize) -> Self {
        let size = dim * dim;
        let half = (dim / 2) as i32;
        Self {
            dim,
            walls: WallGrid::new(dim),
            dead: vec![DeadState::Open; size],
            visits: vec![0; size],
            nodes: vec![SearchNode::default(); size],
            goal_bounds: [half - 1, half],
        }
    }

    /// Maze dimension.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.dim * self.dim
    }

    /// Goal row/column indices.
    #[inline]
    pub fn goal_bounds(&self) -> [i32; 2] {
        self.goal_bounds
    }

    /// Is the cell inside the maze?
    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        let dim = self.dim as i32;
        cell.x >= 0 && cell.y >= 0 && cell.x < dim && cell.y < dim
    }

    #[inline]
    fn index(&self, cell: Cell) -> Option<usize> {
        if self.in_bounds(cell) {
            Some(cell.y as usize * self.dim + cell.x as usize)
        } else {
            None
        }
    }

    /// Is the cell one of the four central goal cells?
    #[inline]
    pub fn is_goal(&self, cell: Cell) -> bool {
        self.goal_bounds.contains(&cell.x) && self.goal_bounds.contains(&cell.y)
    }

    /// The four goal cells.
    pub fn goal_cells(&self) -> [Cell; 4] {
        let [lo, hi] = self.goal_bounds;
        [
            Cell::new(lo, lo),
            Cell::new(lo, hi),
            Cell::new(hi, lo),
            Cell::new(hi, hi),
        ]
    }

    /// Iterate over every cell, bottom row first.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let dim = self.dim as i32;
        (0..dim).flat_map(move |y| (0..dim).map(move |x| Cell::new(x, y)))
    }

    // === Walls ===

    /// Known passable edges.
    #[inline]
    pub fn walls(&self) -> &WallGrid {
        &self.walls
    }

    /// Mutable access to the wall grid.
    #[inline]
    pub fn walls_mut(&mut self) -> &mut WallGrid {
        &mut self.walls
    }

    // === Dead ends ===

    /// Dead-end state. Cells outside the maze read as `Dead`.
    #[inline]
    pub fn dead_state(&self, cell: Cell) -> DeadState {
        self.index(cell).map_or(DeadState::Dead, |i| self.dead[i])
    }

    /// Escalate a cell's dead-end state. Never downgrades.
    ///
    /// Returns `true` if the state changed.
    pub fn escalate_dead(&mut self, cell: Cell, state: DeadState) -> bool {
        match self.index(cell) {
            Some(i) if state > self.dead[i] => {
                self.dead[i] = state;
                true
            }
            _ => false,
        }
    }

    // === Visits ===

    /// Visit count of a cell (0 outside the maze).
    #[inline]
    pub fn visits(&self, cell: Cell) -> u32 {
        self.index(cell).map_or(0, |i| self.visits[i])
    }

    /// Add `count` visits to a cell.
    pub fn add_visits(&mut self, cell: Cell, count: u32) {
        if let Some(i) = self.index(cell) {
            self.visits[i] = self.visits[i].saturating_add(count);
        }
    }

    // === Search bookkeeping ===

    /// Search node of a cell.
    #[inline]
    pub fn node(&self, cell: Cell) -> Option<&SearchNode> {
        self.index(cell).map(|i| &self.nodes[i])
    }

    /// Mutable search node of a cell.
    #[inline]
    pub fn node_mut(&mut self, cell: Cell) -> Option<&mut SearchNode> {
        self.index(cell).map(|i| &mut self.nodes[i])
    }

    /// Cost-so-far of a cell (0 if never discovered).
    #[inline]
    pub fn g_cost(&self, cell: Cell) -> u32 {
        self.node(cell).map_or(0, |n| n.g_cost)
    }

    /// Parent pointer of a cell.
    #[inline]
    pub fn parent(&self, cell: Cell) -> Option<Cell> {
        self.node(cell).and_then(|n| n.parent)
    }

    /// Search status of a cell.
    #[inline]
    pub fn status(&self, cell: Cell) -> SearchStatus {
        self.node(cell).map_or(SearchStatus::Unvisited, |n| n.status)
    }

    /// Move a cell to the closed set.
    pub fn close(&mut self, cell: Cell) {
        if let Some(node) = self.node_mut(cell) {
            node.status = SearchStatus::Closed;
        }
    }

    /// Clear the `g_updated` flag of a cell.
    pub fn clear_g_updated(&mut self, cell: Cell) {
        if let Some(node) = self.node_mut(cell) {
            node.g_updated = false;
        }
    }

    /// Cells currently in the open set.
    pub fn open_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells()
            .filter(move |&cell| self.status(cell) == SearchStatus::Open)
    }

    /// Number of cells in the open set.
    pub fn open_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| n.status == SearchStatus::Open)
            .count()
    }
}
