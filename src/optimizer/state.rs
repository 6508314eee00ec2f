//! Mutable per-run state.

use crate::pheromone::Bounds;

use super::stagnation::StagnationTracker;

/// Everything the loop carries from one iteration to the next, apart from
/// the pheromone graph itself.
#[derive(Debug, Clone)]
pub struct RunState {
    pub(crate) iteration: usize,
    pub(crate) global_best: f64,
    pub(crate) last_iteration_best: Option<f64>,
    pub(crate) stagnation: StagnationTracker,
    pub(crate) bounds: Option<Bounds>,
    pub(crate) reinitializations: usize,
}

impl RunState {
    /// Creates the state for a fresh run.
    pub fn new(stagnation_limit: usize) -> Self {
        Self {
            iteration: 0,
            global_best: f64::INFINITY,
            last_iteration_best: None,
            stagnation: StagnationTracker::new(stagnation_limit),
            bounds: None,
            reinitializations: 0,
        }
    }

    /// Lowers the global best if `fitness` improves on it. Returns `true` on
    /// improvement.
    pub fn record_best(&mut self, fitness: f64) -> bool {
        if fitness < self.global_best {
            self.global_best = fitness;
            true
        } else {
            false
        }
    }

    /// Zero-based index of the current iteration.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Best fitness seen so far (infinite before the first iteration).
    pub fn global_best(&self) -> f64 {
        self.global_best
    }

    /// Best fitness of the previous iteration.
    pub fn last_iteration_best(&self) -> Option<f64> {
        self.last_iteration_best
    }

    /// Stagnation counter.
    pub fn stagnation(&self) -> &StagnationTracker {
        &self.stagnation
    }

    /// Current Max-Min limits, if any.
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    /// Number of stagnation reinitializations so far.
    pub fn reinitializations(&self) -> usize {
        self.reinitializations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_best_is_monotonic() {
        let mut state = RunState::new(200);
        assert!(state.record_best(10.0));
        assert!(!state.record_best(12.0));
        assert!(!state.record_best(10.0));
        assert!(state.record_best(3.0));
        assert_eq!(state.global_best(), 3.0);
    }

    #[test]
    fn test_fresh_state() {
        let state = RunState::new(7);
        assert_eq!(state.iteration(), 0);
        assert_eq!(state.global_best(), f64::INFINITY);
        assert_eq!(state.last_iteration_best(), None);
        assert_eq!(state.stagnation().limit(), 7);
        assert!(state.bounds().is_none());
        assert_eq!(state.reinitializations(), 0);
    }
}
