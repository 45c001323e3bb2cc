//! Fixed-size 2-D spatial index with edge-clipped neighbor lookup
//!
//! The grid holds at most one agent per cell and owns no transition logic.
//! It is non-toroidal: neighbor queries near an edge simply omit the cells
//! that would fall outside the rectangle instead of wrapping around.

use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::tree::AgentId;

/// Which neighboring cells count as adjacent for spread purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Connectivity {
    /// Up, down, left, right
    Four,
    /// The four cardinal directions plus diagonals
    Eight,
}

impl Connectivity {
    /// Offsets scanned by a neighbor query, in a fixed order so that the
    /// resulting sequence is deterministic within a single call.
    fn offsets(self) -> &'static [(i64, i64)] {
        match self {
            Connectivity::Four => &[(0, -1), (-1, 0), (1, 0), (0, 1)],
            Connectivity::Eight => &[
                (-1, -1),
                (0, -1),
                (1, -1),
                (-1, 0),
                (1, 0),
                (-1, 1),
                (0, 1),
                (1, 1),
            ],
        }
    }
}

/// Fixed `width x height` rectangle of optional agent slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    connectivity: Connectivity,
    /// Cells in row-major order: `[y * width + x]`
    cells: Vec<Option<AgentId>>,
}

impl Grid {
    /// Create an empty grid.
    pub fn new(width: usize, height: usize, connectivity: Connectivity) -> Self {
        Grid {
            width,
            height,
            connectivity,
            cells: vec![None; width * height],
        }
    }

    /// Grid width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The connectivity used by neighbor queries.
    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Insert an agent into cell `(x, y)`.
    ///
    /// # Errors
    /// Returns [`GridError::OutOfBounds`] if `(x, y)` lies outside the
    /// rectangle, or [`GridError::OccupiedCell`] if the cell already holds
    /// an agent. An occupied cell is never silently overwritten.
    pub fn place(&mut self, agent: AgentId, x: usize, y: usize) -> Result<(), GridError> {
        if !self.in_bounds(x, y) {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let idx = self.index(x, y);
        if self.cells[idx].is_some() {
            return Err(GridError::OccupiedCell { x, y });
        }
        self.cells[idx] = Some(agent);
        Ok(())
    }

    /// Get the agent occupying cell `(x, y)`, if any.
    ///
    /// Out-of-bounds coordinates yield `None`, same as an empty cell.
    pub fn agent_at(&self, x: usize, y: usize) -> Option<AgentId> {
        if !self.in_bounds(x, y) {
            return None;
        }
        self.cells[self.index(x, y)]
    }

    /// Agents occupying the cells adjacent to `(x, y)` under the configured
    /// connectivity. Cells outside the grid are omitted; empty cells
    /// contribute nothing. The order is deterministic within a call but
    /// otherwise unspecified (randomization is the scheduler's job).
    pub fn neighbors(&self, x: usize, y: usize) -> Vec<AgentId> {
        let offsets = self.connectivity.offsets();
        let mut result = Vec::with_capacity(offsets.len());

        for &(dx, dy) in offsets {
            let nx = x as i64 + dx;
            let ny = y as i64 + dy;
            if nx < 0 || ny < 0 || nx >= self.width as i64 || ny >= self.height as i64 {
                continue;
            }
            if let Some(agent) = self.cells[self.index(nx as usize, ny as usize)] {
                result.push(agent);
            }
        }

        result
    }

    /// Lazy scan over every cell exactly once, yielding
    /// `(occupant, x, y)` triples in row-major order.
    ///
    /// The iterator is finite and restartable: each call produces a fresh
    /// pass over the whole rectangle. Used for initialization scans.
    pub fn cells_with_coordinates(
        &self,
    ) -> impl Iterator<Item = (Option<AgentId>, usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, cell)| (*cell, idx % self.width, idx / self.width))
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_and_lookup() {
        let mut grid = Grid::new(4, 3, Connectivity::Four);
        grid.place(7, 2, 1).unwrap();

        assert_eq!(grid.agent_at(2, 1), Some(7));
        assert_eq!(grid.agent_at(1, 2), None);
        assert_eq!(grid.occupied_count(), 1);
    }

    #[test]
    fn test_place_rejects_occupied_cell() {
        let mut grid = Grid::new(4, 3, Connectivity::Four);
        grid.place(0, 2, 1).unwrap();

        let err = grid.place(1, 2, 1).unwrap_err();
        assert_eq!(err, GridError::OccupiedCell { x: 2, y: 1 });
        // The original occupant must survive
        assert_eq!(grid.agent_at(2, 1), Some(0));
    }

    #[test]
    fn test_place_rejects_out_of_bounds() {
        let mut grid = Grid::new(4, 3, Connectivity::Four);

        assert!(matches!(
            grid.place(0, 4, 0),
            Err(GridError::OutOfBounds { .. })
        ));
        assert!(matches!(
            grid.place(0, 0, 3),
            Err(GridError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_neighbors_clip_at_corner() {
        let mut grid = Grid::new(3, 3, Connectivity::Four);
        grid.place(0, 1, 0).unwrap();
        grid.place(1, 0, 1).unwrap();
        grid.place(2, 1, 1).unwrap();

        // Corner (0, 0) has only two in-bounds neighbors; no wraparound
        let nearby = grid.neighbors(0, 0);
        assert_eq!(nearby.len(), 2);
        assert!(nearby.contains(&0));
        assert!(nearby.contains(&1));
    }

    #[test]
    fn test_neighbors_skip_empty_cells() {
        let mut grid = Grid::new(3, 3, Connectivity::Four);
        grid.place(5, 1, 0).unwrap();

        assert_eq!(grid.neighbors(1, 1), vec![5]);
        assert!(grid.neighbors(2, 2).is_empty());
    }

    #[test]
    fn test_neighbors_deterministic_order() {
        let mut grid = Grid::new(3, 3, Connectivity::Four);
        grid.place(0, 1, 0).unwrap();
        grid.place(1, 0, 1).unwrap();
        grid.place(2, 2, 1).unwrap();
        grid.place(3, 1, 2).unwrap();

        let first = grid.neighbors(1, 1);
        assert_eq!(first, grid.neighbors(1, 1));
        assert_eq!(first.len(), 4);
    }

    #[test]
    fn test_eight_connectivity_includes_diagonals() {
        let mut grid = Grid::new(3, 3, Connectivity::Eight);
        grid.place(0, 0, 0).unwrap();
        grid.place(1, 2, 2).unwrap();
        grid.place(2, 1, 0).unwrap();

        // Both diagonal occupants are adjacent to the center under
        // 8-connectivity; under 4-connectivity only (1, 0) would be.
        let nearby = grid.neighbors(1, 1);
        assert_eq!(nearby.len(), 3);
    }

    #[test]
    fn test_cells_with_coordinates_covers_every_cell_once() {
        let mut grid = Grid::new(3, 2, Connectivity::Four);
        grid.place(9, 2, 0).unwrap();

        let triples: Vec<_> = grid.cells_with_coordinates().collect();
        assert_eq!(triples.len(), 6);
        assert_eq!(triples[0], (None, 0, 0));
        assert_eq!(triples[2], (Some(9), 2, 0));
        assert_eq!(triples[5], (None, 2, 1));

        // Restartable: a second call yields a fresh full pass
        assert_eq!(grid.cells_with_coordinates().count(), 6);
    }
}
