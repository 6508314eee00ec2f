//! Domain model types for ant-colony bin balancing.
//!
//! Provides the run configuration, the choice between the standard and
//! Max-Min ant systems, and the validated item weight sequence.

mod config;
mod items;

pub use config::{AcoConfig, Variant};
pub use items::ItemSet;
