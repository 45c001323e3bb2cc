//! Forest Fire Core Library
//!
//! Simulates fire propagation across a 2-D grid of trees. Each occupied
//! cell holds one tree in one of three conditions (fine, on fire, burned
//! out); trees adjacent to a burning tree catch fire on the next tick, and
//! the run halts once nothing is burning.
//!
//! The interesting parts are the spatial [`Grid`] with edge-clipped
//! neighbor lookup, the [`RandomActivation`] scheduler that visits every
//! agent exactly once per tick in a freshly randomized order, and the
//! uniform state-transition rule on [`TreeCell`]. Driving the run loop and
//! rendering the result is left to external callers (see the
//! `demo-headless` crate).

pub mod error;
pub mod grid;
pub mod model;
pub mod schedule;
pub mod tree;

pub use error::{GridError, ModelError};
pub use grid::{Connectivity, Grid};
pub use model::ForestFire;
pub use schedule::RandomActivation;
pub use tree::{AgentId, Steppable, TreeCell, TreeCondition};
