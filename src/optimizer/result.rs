//! Run outcome.

use serde::Serialize;

/// Per-iteration trace entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IterationRecord {
    /// Zero-based iteration index.
    pub iteration: usize,
    /// Best fitness among this iteration's ants.
    pub iteration_best: f64,
    /// Best fitness seen up to and including this iteration.
    pub global_best: f64,
    /// Stagnation counter after this iteration (always 0 for the standard
    /// variant).
    pub stagnation: usize,
}

/// Outcome of an ant colony run.
///
/// `final_fitness` is the best fitness among the *last* iteration's ants,
/// which is what the classic formulation reports. `best_fitness` is the best
/// seen over the whole run; callers choose which to use.
#[derive(Debug, Clone, Serialize)]
pub struct AcoResult {
    /// Best fitness among the last iteration's ants.
    pub final_fitness: f64,
    /// Assignment achieving `final_fitness`.
    pub final_path: Vec<usize>,
    /// Best fitness over the whole run.
    pub best_fitness: f64,
    /// Assignment achieving `best_fitness`.
    pub best_path: Vec<usize>,
    /// Iterations executed.
    pub iterations: usize,
    /// Stagnation reinitializations performed.
    pub reinitializations: usize,
    /// One record per iteration.
    pub history: Vec<IterationRecord>,
}
