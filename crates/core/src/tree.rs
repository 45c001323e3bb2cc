//! The tree agent and its one-tick transition rule

use serde::{Deserialize, Serialize};

use crate::grid::Grid;

/// Handle into the model's agent arena.
///
/// A tree's position doubles as its unique identity (at most one agent per
/// cell); the id is only the runtime index used by the grid and scheduler.
pub type AgentId = u32;

/// The condition of a single tree. Exactly one condition holds at any time;
/// this is the sole mutable state of a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TreeCondition {
    /// Untouched by fire (initial state for most trees)
    Fine,
    /// Currently burning; will spread and burn out on its next activation
    OnFire,
    /// Consumed by fire (terminal)
    BurnedOut,
}

/// Contract for anything the scheduler can activate once per tick.
pub trait Steppable {
    /// Advance this agent by one tick. The agent reaches the rest of the
    /// model through the grid (neighbor lookup) and the shared agent arena
    /// (neighbor mutation).
    fn step(&mut self, grid: &Grid, trees: &mut [TreeCell]);
}

/// One tree occupying one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeCell {
    /// Grid x coordinate (immutable once placed)
    pub x: usize,
    /// Grid y coordinate (immutable once placed)
    pub y: usize,
    /// Current condition
    pub condition: TreeCondition,
}

impl TreeCell {
    /// Create a new tree in the `Fine` condition at `(x, y)`.
    pub fn new(x: usize, y: usize) -> Self {
        TreeCell {
            x,
            y,
            condition: TreeCondition::Fine,
        }
    }

    /// Set this tree on fire.
    pub fn ignite(&mut self) {
        self.condition = TreeCondition::OnFire;
    }
}

impl Steppable for TreeCell {
    /// If this tree is on fire, ignite every `Fine` neighbor and burn out.
    ///
    /// `self` is the scheduler's snapshot of the tree taken when the tick's
    /// activation order was drawn, so a tree ignited by a neighbor earlier
    /// in the same tick stays inert until the next tick. Neighbor writes go
    /// straight into the arena and are visible to later activations within
    /// the tick.
    fn step(&mut self, grid: &Grid, trees: &mut [TreeCell]) {
        if self.condition != TreeCondition::OnFire {
            return;
        }

        for neighbor_id in grid.neighbors(self.x, self.y) {
            let neighbor = &mut trees[neighbor_id as usize];
            if neighbor.condition == TreeCondition::Fine {
                neighbor.condition = TreeCondition::OnFire;
            }
        }

        self.condition = TreeCondition::BurnedOut;
        if let Some(own_id) = grid.agent_at(self.x, self.y) {
            trees[own_id as usize].condition = TreeCondition::BurnedOut;
        }
    }
}
