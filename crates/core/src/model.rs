//! Forest fire model
//!
//! Composes the grid and the scheduler, owns initialization (random tree
//! placement and ignition of the leftmost column) and the per-tick driver.
//! The external run loop polls [`ForestFire::running`] and stops calling
//! [`ForestFire::step`] once it is false; the model itself only flips the
//! flag.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::error::ModelError;
use crate::grid::{Connectivity, Grid};
use crate::schedule::RandomActivation;
use crate::tree::{AgentId, TreeCell, TreeCondition};

/// Forest fire simulation over a fixed 2-D grid.
///
/// Each occupied cell holds one tree; trees adjacent to a burning tree
/// catch fire on the next tick, and the run halts once no tree is burning.
#[derive(Debug)]
pub struct ForestFire {
    height: usize,
    width: usize,
    density: f64,
    grid: Grid,
    schedule: RandomActivation,
    trees: Vec<TreeCell>,
    running: bool,
    ticks: u64,
}

impl ForestFire {
    /// Create a model seeded from OS entropy.
    ///
    /// `density` is the fraction of cells seeded with a tree; every planted
    /// tree in the leftmost column starts on fire.
    ///
    /// # Errors
    /// Returns [`ModelError::InvalidDimensions`] if either dimension is
    /// zero, or [`ModelError::InvalidDensity`] if `density` is outside
    /// `[0, 1]`. Out-of-range parameters are rejected, never clamped.
    pub fn new(height: usize, width: usize, density: f64) -> Result<Self, ModelError> {
        Self::with_rng(height, width, density, StdRng::from_os_rng())
    }

    /// Create a model with a reproducible random source: the same seed
    /// yields the same tree placement and the same activation orders.
    ///
    /// # Errors
    /// Same as [`ForestFire::new`].
    pub fn from_seed(
        height: usize,
        width: usize,
        density: f64,
        seed: u64,
    ) -> Result<Self, ModelError> {
        Self::with_rng(height, width, density, StdRng::seed_from_u64(seed))
    }

    /// Create a model drawing from an explicit random source.
    ///
    /// # Errors
    /// Same as [`ForestFire::new`].
    pub fn with_rng(
        height: usize,
        width: usize,
        density: f64,
        mut rng: StdRng,
    ) -> Result<Self, ModelError> {
        if height == 0 || width == 0 {
            return Err(ModelError::InvalidDimensions { height, width });
        }
        if !(0.0..=1.0).contains(&density) {
            return Err(ModelError::InvalidDensity(density));
        }

        let mut grid = Grid::new(width, height, Connectivity::Four);
        // The scheduler gets its own rng derived from the model's, so
        // placement and activation order are reproducible from one seed.
        let mut schedule = RandomActivation::new(StdRng::from_rng(&mut rng));
        let mut trees: Vec<TreeCell> = Vec::new();

        let coordinates: Vec<(usize, usize)> = grid
            .cells_with_coordinates()
            .map(|(_, x, y)| (x, y))
            .collect();
        for (x, y) in coordinates {
            if rng.random::<f64>() < density {
                let mut tree = TreeCell::new(x, y);
                // The leftmost column forms the initial fire front
                if x == 0 {
                    tree.ignite();
                }
                let id = trees.len() as AgentId;
                grid.place(id, x, y)?;
                schedule.add(id);
                trees.push(tree);
            }
        }

        let model = ForestFire {
            height,
            width,
            density,
            grid,
            schedule,
            trees,
            running: true,
            ticks: 0,
        };
        info!(
            "Initialized {}x{} forest: {} trees planted, {} burning",
            width,
            height,
            model.tree_count(),
            model.count_by_condition(TreeCondition::OnFire)
        );
        Ok(model)
    }

    /// Advance the model by one tick: one full randomized activation pass,
    /// then re-evaluate the termination predicate.
    ///
    /// Safe to call after the model has halted; it reconfirms that nothing
    /// is burning and leaves `running` false.
    pub fn step(&mut self) {
        self.schedule.step(&self.grid, &mut self.trees);
        self.ticks += 1;

        let burning = self.count_by_condition(TreeCondition::OnFire);
        debug!("Tick {}: {} trees burning", self.ticks, burning);
        if burning == 0 {
            if self.running {
                info!(
                    "Fire out after {} ticks: {} burned, {} untouched",
                    self.ticks,
                    self.count_by_condition(TreeCondition::BurnedOut),
                    self.count_by_condition(TreeCondition::Fine)
                );
            }
            self.running = false;
        }
    }

    /// Number of trees currently in the given condition (linear scan over
    /// the agent arena; usable mid-run for external reporting).
    pub fn count_by_condition(&self, condition: TreeCondition) -> usize {
        self.trees
            .iter()
            .filter(|tree| tree.condition == condition)
            .count()
    }

    /// Whether further stepping is meaningful. Starts true and flips to
    /// false exactly once, when a step ends with no tree burning.
    pub fn running(&self) -> bool {
        self.running
    }

    /// Grid height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Grid width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Configured tree density.
    pub fn density(&self) -> f64 {
        self.density
    }

    /// Number of completed ticks.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Total number of planted trees (stable for the whole run).
    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    /// All planted trees, in placement order.
    pub fn trees(&self) -> impl Iterator<Item = &TreeCell> {
        self.trees.iter()
    }

    /// Get a tree by its arena id.
    pub fn tree(&self, id: AgentId) -> Option<&TreeCell> {
        self.trees.get(id as usize)
    }

    /// The spatial grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_dimensions() {
        assert!(matches!(
            ForestFire::from_seed(0, 10, 0.5, 1),
            Err(ModelError::InvalidDimensions {
                height: 0,
                width: 10
            })
        ));
        assert!(matches!(
            ForestFire::from_seed(10, 0, 0.5, 1),
            Err(ModelError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_rejects_density_outside_unit_interval() {
        assert!(matches!(
            ForestFire::from_seed(5, 5, -0.1, 1),
            Err(ModelError::InvalidDensity(_))
        ));
        assert!(matches!(
            ForestFire::from_seed(5, 5, 1.01, 1),
            Err(ModelError::InvalidDensity(_))
        ));
        assert!(matches!(
            ForestFire::from_seed(5, 5, f64::NAN, 1),
            Err(ModelError::InvalidDensity(_))
        ));
    }

    #[test]
    fn test_boundary_densities_are_accepted() {
        assert!(ForestFire::from_seed(5, 5, 0.0, 1).is_ok());
        assert!(ForestFire::from_seed(5, 5, 1.0, 1).is_ok());
    }

    #[test]
    fn test_stored_positions_match_grid_slots() {
        let model = ForestFire::from_seed(6, 8, 0.7, 42).unwrap();

        for (cell, x, y) in model.grid().cells_with_coordinates() {
            match cell {
                Some(id) => {
                    let tree = model.tree(id).unwrap();
                    assert_eq!((tree.x, tree.y), (x, y));
                }
                None => assert!(model.trees().all(|t| (t.x, t.y) != (x, y))),
            }
        }
        assert_eq!(model.grid().occupied_count(), model.tree_count());
    }
}
