//! Ant colony runner.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::ant::AntPath;
use crate::error::{AcoError, Result};
use crate::models::{AcoConfig, ItemSet};
use crate::pheromone::{deposit_amount, PheromoneGraph};

use super::observer::{NoopObserver, ProgressObserver};
use super::policy::{policy_for, UpdatePolicy};
use super::result::{AcoResult, IterationRecord};
use super::state::RunState;

/// Balances items across bins with an ant colony.
///
/// Each iteration every ant builds a path against the same pheromone
/// snapshot; only then is the graph evaporated, deposited on, and (under
/// Max-Min) bounded and possibly reinitialized.
///
/// # Examples
///
/// ```
/// use u_aco::models::{AcoConfig, ItemSet};
/// use u_aco::optimizer::AntColony;
///
/// let items = ItemSet::new((1..=20).map(f64::from).collect()).unwrap();
/// let config = AcoConfig::default()
///     .with_num_items(20)
///     .with_num_bins(4)
///     .with_num_ants(10)
///     .with_num_iterations(50)
///     .with_seed(42);
///
/// let colony = AntColony::new(config, items).unwrap();
/// let result = colony.run().unwrap();
/// assert!(result.best_fitness <= result.final_fitness);
/// assert_eq!(result.iterations, 50);
/// ```
pub struct AntColony {
    config: AcoConfig,
    items: ItemSet,
    policy: Box<dyn UpdatePolicy>,
}

impl AntColony {
    /// Validates the configuration against the items and selects the
    /// update policy.
    ///
    /// # Errors
    ///
    /// Returns [`AcoError::InvalidConfiguration`] for out-of-range
    /// parameters and [`AcoError::InvalidItems`] if the number of items
    /// differs from `config.num_items`.
    pub fn new(config: AcoConfig, items: ItemSet) -> Result<Self> {
        config.validate()?;
        if items.len() != config.num_items {
            return Err(AcoError::InvalidItems(format!(
                "expected {} items, got {}",
                config.num_items,
                items.len()
            )));
        }
        let policy = policy_for(&config);
        Ok(Self {
            config,
            items,
            policy,
        })
    }

    /// Like [`AntColony::new`], validating raw weights first.
    pub fn from_weights(config: AcoConfig, weights: Vec<f64>) -> Result<Self> {
        Self::new(config, ItemSet::new(weights)?)
    }

    /// The run configuration.
    pub fn config(&self) -> &AcoConfig {
        &self.config
    }

    /// The item weights.
    pub fn items(&self) -> &ItemSet {
        &self.items
    }

    /// Runs without progress reporting.
    pub fn run(&self) -> Result<AcoResult> {
        self.run_with_observer(&mut NoopObserver)
    }

    /// Runs the fixed number of iterations, reporting progress to `observer`
    /// every `report_interval` iterations.
    pub fn run_with_observer<O>(&self, observer: &mut O) -> Result<AcoResult>
    where
        O: ProgressObserver + ?Sized,
    {
        self.run_inspected(observer, |_, _| {})
    }

    /// The run loop. `inspect` sees the graph and state at the end of every
    /// update cycle.
    pub(crate) fn run_inspected<O, F>(&self, observer: &mut O, mut inspect: F) -> Result<AcoResult>
    where
        O: ProgressObserver + ?Sized,
        F: FnMut(&PheromoneGraph, &RunState),
    {
        let config = &self.config;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut graph = PheromoneGraph::init(
            config.num_items,
            config.num_bins,
            self.policy.initial_pheromone(),
            &mut rng,
        );
        let mut state = RunState::new(config.stagnation_limit);
        state.bounds = self.policy.initial_bounds();
        let mut history = Vec::with_capacity(config.num_iterations);
        let mut best_path: Vec<usize> = Vec::new();
        let mut final_path: Vec<usize> = Vec::new();
        let mut final_fitness = f64::INFINITY;

        log::debug!(
            "starting {} run: {} items, {} bins, {} ants, {} iterations",
            self.policy.name(),
            config.num_items,
            config.num_bins,
            config.num_ants,
            config.num_iterations
        );

        for iteration in 0..config.num_iterations {
            state.iteration = iteration;

            let mut paths = self.construct_paths(&graph, &mut rng);
            graph.evaporate(config.evaporation_rate)?;

            let best = best_index(&paths);
            let iteration_best = paths[best].fitness();
            if state.record_best(iteration_best) {
                best_path = paths[best].bins().to_vec();
            }

            for path in self.policy.select_depositors(&paths, best) {
                if let Some(deposit) =
                    deposit_amount(config.deposit_constant, path.fitness(), config.zero_fitness)
                {
                    graph.update(path.bins(), deposit);
                }
            }

            if let Some(bounds) = self.policy.compute_bounds(&state) {
                log::trace!("iteration {iteration}: bounds [{}, {}]", bounds.min, bounds.max);
                graph.bound(bounds.max, bounds.min);
                state.bounds = Some(bounds);
            }

            if self.policy.track_stagnation(&mut state, iteration_best) {
                self.reinitialize(&mut graph, &mut state);
            }

            state.last_iteration_best = Some(iteration_best);
            inspect(&graph, &state);
            history.push(IterationRecord {
                iteration,
                iteration_best,
                global_best: state.global_best,
                stagnation: state.stagnation.count(),
            });

            if iteration % config.report_interval == 0 {
                observer.on_progress(iteration, iteration_best);
            }

            if iteration + 1 == config.num_iterations {
                final_fitness = iteration_best;
                final_path = paths.swap_remove(best).into_bins();
            }
        }

        log::debug!(
            "finished {} run: final fitness {}, best fitness {}, {} reinitializations",
            self.policy.name(),
            final_fitness,
            state.global_best,
            state.reinitializations
        );

        Ok(AcoResult {
            final_fitness,
            final_path,
            best_fitness: state.global_best,
            best_path,
            iterations: config.num_iterations,
            reinitializations: state.reinitializations,
            history,
        })
    }

    /// Builds `num_ants` paths against one snapshot. Each ant gets its own
    /// RNG seeded from `rng`, so results don't depend on `parallel`.
    fn construct_paths(&self, graph: &PheromoneGraph, rng: &mut StdRng) -> Vec<AntPath> {
        let seeds: Vec<u64> = (0..self.config.num_ants).map(|_| rng.random()).collect();
        let weights = self.items.weights();
        let build = |seed: u64| AntPath::construct(graph, weights, &mut StdRng::seed_from_u64(seed));
        if self.config.parallel {
            seeds.into_par_iter().map(build).collect()
        } else {
            seeds.into_iter().map(build).collect()
        }
    }

    fn reinitialize(&self, graph: &mut PheromoneGraph, state: &mut RunState) {
        let (Some(factor), Some(bounds)) = (self.policy.reinitialize_factor(state), state.bounds)
        else {
            return;
        };
        match graph.reinitialize(factor) {
            Ok(()) => {
                graph.bound(bounds.max, bounds.min);
                state.reinitializations += 1;
                log::debug!(
                    "iteration {}: stagnation, reinitialized by factor {factor}",
                    state.iteration
                );
            }
            Err(e) => log::warn!("iteration {}: skipped reinitialization: {e}", state.iteration),
        }
    }
}

/// Index of the lowest-fitness path; ties go to the earliest.
fn best_index(paths: &[AntPath]) -> usize {
    paths
        .iter()
        .enumerate()
        .fold(0, |best, (i, path)| {
            if path.fitness() < paths[best].fitness() {
                i
            } else {
                best
            }
        })
}
