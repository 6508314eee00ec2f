//! Pheromone graph and deposit rules.
//!
//! - [`PheromoneGraph`] — Dense items × bins desirability matrix
//! - [`ZeroFitnessPolicy`] — How a perfectly balanced path deposits
//! - [`Bounds`] — Max-Min trail limits

mod bounds;
mod deposit;
mod graph;

pub use bounds::Bounds;
pub use deposit::{deposit_amount, effective_fitness, ZeroFitnessPolicy};
pub use graph::{PheromoneGraph, MIN_TRAIL};
