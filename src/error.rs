//! Error types for u-aco.

use thiserror::Error;

/// Result type alias for u-aco operations.
pub type Result<T> = std::result::Result<T, AcoError>;

/// Errors raised before or during an optimization run.
///
/// Only configuration problems abort a run, and they do so before the first
/// iteration. Numerical corner cases inside the loop (a perfectly balanced
/// path, a selection walk that rounds past the end of a row) are resolved in
/// place and never reach the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AcoError {
    /// A configuration parameter is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The item weight sequence does not match the configuration.
    #[error("Invalid items: {0}")]
    InvalidItems(String),

    /// A pheromone operation would break the strictly-positive invariant.
    #[error("Invalid pheromone operation: {0}")]
    InvalidPheromoneOperation(String),
}
