//! Ant path construction and fitness evaluation.
//!
//! An ant is a pure computation: it reads a pheromone snapshot and the item
//! weights and produces an immutable [`AntPath`].
//!
//! - [`select_bin`] — Roulette-wheel selection over one pheromone row
//! - [`construct_path`] — One bin choice per item, in item order
//! - [`bin_loads`] / [`imbalance`] — Fitness evaluation

mod path;
mod selection;

pub use path::{bin_loads, construct_path, imbalance, AntPath};
pub use selection::select_bin;
