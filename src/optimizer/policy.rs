//! Variant-specific update rules.
//!
//! The colony asks its policy, once per iteration, which ants deposit,
//! which bounds apply, and whether stagnation calls for reinitialization.
//! The policy is chosen once from [`AcoConfig::variant`].

use crate::ant::AntPath;
use crate::models::{AcoConfig, Variant};
use crate::pheromone::{deposit_amount, effective_fitness, Bounds, ZeroFitnessPolicy};

use super::state::RunState;

/// Pheromone update rules for one ant-system variant.
pub trait UpdatePolicy: Send + Sync {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Constant initial trail value, or `None` for random initialization.
    fn initial_pheromone(&self) -> Option<f64>;

    /// Trail limits in force before the first iteration, or `None` for
    /// unbounded trails.
    fn initial_bounds(&self) -> Option<Bounds>;

    /// The ants allowed to deposit this iteration. `best` indexes the
    /// iteration-best ant in `paths`.
    fn select_depositors<'a>(&self, paths: &'a [AntPath], best: usize) -> &'a [AntPath];

    /// Trail limits to enforce after depositing, or `None` for unbounded
    /// trails.
    fn compute_bounds(&self, state: &RunState) -> Option<Bounds>;

    /// Updates the stagnation counter with this iteration's best fitness and
    /// returns `true` when the graph should be reinitialized.
    fn track_stagnation(&self, state: &mut RunState, iteration_best: f64) -> bool;

    /// Multiplier applied to every trail on reinitialization, or `None` if
    /// it cannot be computed from the current state.
    fn reinitialize_factor(&self, state: &RunState) -> Option<f64>;
}

/// Returns the policy for `config.variant`.
pub fn policy_for(config: &AcoConfig) -> Box<dyn UpdatePolicy> {
    match config.variant {
        Variant::Standard => Box::new(StandardPolicy),
        Variant::MaxMin => Box::new(MaxMinPolicy::new(config)),
    }
}

/// Classic ant system: random initial trails, every ant deposits, no bounds.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardPolicy;

impl UpdatePolicy for StandardPolicy {
    fn name(&self) -> &'static str {
        "standard"
    }

    fn initial_pheromone(&self) -> Option<f64> {
        None
    }

    fn initial_bounds(&self) -> Option<Bounds> {
        None
    }

    fn select_depositors<'a>(&self, paths: &'a [AntPath], _best: usize) -> &'a [AntPath] {
        paths
    }

    fn compute_bounds(&self, _state: &RunState) -> Option<Bounds> {
        None
    }

    fn track_stagnation(&self, _state: &mut RunState, _iteration_best: f64) -> bool {
        false
    }

    fn reinitialize_factor(&self, _state: &RunState) -> Option<f64> {
        None
    }
}

/// Max-Min ant system.
///
/// Trails start at `1 / (1 - ρ)`, which is also the first upper limit
/// (the limits for a global best that deposits 1). Only the iteration-best
/// ant deposits, trails are clamped to limits derived from the global best,
/// and the graph is flattened by `1 / (global_best * min)` on stagnation.
#[derive(Debug, Clone, Copy)]
pub struct MaxMinPolicy {
    evaporation_rate: f64,
    deposit_constant: f64,
    zero_fitness: ZeroFitnessPolicy,
    num_items: usize,
    num_bins: usize,
}

impl MaxMinPolicy {
    /// Captures the parameters the Max-Min formulas need.
    pub fn new(config: &AcoConfig) -> Self {
        Self {
            evaporation_rate: config.evaporation_rate,
            deposit_constant: config.deposit_constant,
            zero_fitness: config.zero_fitness,
            num_items: config.num_items,
            num_bins: config.num_bins,
        }
    }
}

impl UpdatePolicy for MaxMinPolicy {
    fn name(&self) -> &'static str {
        "max-min"
    }

    fn initial_pheromone(&self) -> Option<f64> {
        Some(1.0 / (1.0 - self.evaporation_rate))
    }

    fn initial_bounds(&self) -> Option<Bounds> {
        Some(Bounds::max_min(
            self.evaporation_rate,
            1.0,
            self.num_items,
            self.num_bins,
        ))
    }

    fn select_depositors<'a>(&self, paths: &'a [AntPath], best: usize) -> &'a [AntPath] {
        std::slice::from_ref(&paths[best])
    }

    fn compute_bounds(&self, state: &RunState) -> Option<Bounds> {
        // A skipped zero-fitness best keeps the limits already in force
        match deposit_amount(self.deposit_constant, state.global_best, self.zero_fitness) {
            Some(deposit) if deposit.is_finite() => Some(Bounds::max_min(
                self.evaporation_rate,
                deposit,
                self.num_items,
                self.num_bins,
            )),
            _ => state.bounds,
        }
    }

    fn track_stagnation(&self, state: &mut RunState, iteration_best: f64) -> bool {
        let previous = state.last_iteration_best;
        state.stagnation.observe(previous, iteration_best)
    }

    fn reinitialize_factor(&self, state: &RunState) -> Option<f64> {
        let best = effective_fitness(self.deposit_constant, state.global_best, self.zero_fitness)?;
        let min = state.bounds?.min;
        Some(1.0 / (best * min))
    }
}
