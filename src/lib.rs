//! # u-aco
//!
//! Ant colony optimization for balanced bin packing: distribute weighted
//! items over a fixed number of bins so that the heaviest and lightest bins
//! differ as little as possible.
//!
//! ## Modules
//!
//! - [`models`] — Configuration, variant selection, item weights
//! - [`pheromone`] — Pheromone graph, deposit rule, Max-Min bounds
//! - [`ant`] — Proportional bin selection, path construction, fitness
//! - [`optimizer`] — The colony loop, variant policies, stagnation, observers
//! - [`instances`] — Benchmark item generators
//! - [`error`] — Error types

pub mod ant;
pub mod error;
pub mod instances;
pub mod models;
pub mod optimizer;
pub mod pheromone;

pub use error::{AcoError, Result};
