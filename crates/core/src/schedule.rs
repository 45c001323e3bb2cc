//! Random-activation scheduling
//!
//! The scheduler holds the complete set of live agents and activates every
//! one of them exactly once per tick, in a fresh random permutation drawn
//! at the start of the tick. A fixed visiting order would bias the fire
//! front toward whichever direction happens to be visited last.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::grid::Grid;
use crate::tree::{AgentId, Steppable, TreeCell};

/// Scheduler that activates all registered agents once per tick in a
/// freshly randomized order.
#[derive(Debug)]
pub struct RandomActivation {
    agents: Vec<AgentId>,
    rng: StdRng,
}

impl RandomActivation {
    /// Create an empty scheduler with its own random source.
    pub fn new(rng: StdRng) -> Self {
        RandomActivation {
            agents: Vec::new(),
            rng,
        }
    }

    /// Register an agent. The registered set is stable for the whole run;
    /// this model has no births or deaths.
    pub fn add(&mut self, agent: AgentId) {
        self.agents.push(agent);
    }

    /// The registered agents, in registration order.
    pub fn agents(&self) -> &[AgentId] {
        &self.agents
    }

    /// Number of registered agents.
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Whether no agents are registered.
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Run one full activation pass: snapshot every agent's cell state,
    /// draw a fresh permutation, and step each snapshot exactly once.
    ///
    /// Snapshotting at the start of the tick pins each agent's own state to
    /// what it was when the order was drawn. Mutations of *other* agents
    /// land directly in the arena and are visible to later activations, but
    /// a tree ignited mid-tick does not itself spread until the next tick,
    /// so fire advances at most one hop per tick in any activation order.
    pub fn step(&mut self, grid: &Grid, trees: &mut [TreeCell]) {
        let mut order: Vec<TreeCell> = self
            .agents
            .iter()
            .map(|&id| trees[id as usize])
            .collect();
        order.shuffle(&mut self.rng);

        for mut snapshot in order {
            snapshot.step(grid, trees);
        }
    }
}
