//! Ant path record and fitness.

use rand::Rng;
use serde::Serialize;

use crate::pheromone::PheromoneGraph;

use super::selection::select_bin;

/// One ant's outcome: a bin for every item and the resulting imbalance.
///
/// Lower fitness = better. A path is never mutated after construction.
///
/// # Examples
///
/// ```
/// use u_aco::ant::AntPath;
///
/// // weights 1,2,3 into two bins: {1,2} and {3}
/// let path = AntPath::from_bins(vec![0, 0, 1], &[1.0, 2.0, 3.0], 2);
/// assert_eq!(path.fitness(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AntPath {
    bins: Vec<usize>,
    fitness: f64,
}

impl AntPath {
    /// Constructs a path against `graph` and scores it with `items`.
    pub fn construct<R: Rng>(graph: &PheromoneGraph, items: &[f64], rng: &mut R) -> Self {
        let bins = construct_path(graph, rng);
        Self::from_bins(bins, items, graph.num_bins())
    }

    /// Scores an explicit item → bin assignment.
    ///
    /// # Panics
    ///
    /// Panics if a bin index is `>= num_bins`.
    pub fn from_bins(bins: Vec<usize>, items: &[f64], num_bins: usize) -> Self {
        let fitness = imbalance(&bin_loads(&bins, items, num_bins));
        Self { bins, fitness }
    }

    /// The chosen bin for each item, in item order.
    pub fn bins(&self) -> &[usize] {
        &self.bins
    }

    /// Max bin load minus min bin load.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Consumes the record, returning the assignment.
    pub fn into_bins(self) -> Vec<usize> {
        self.bins
    }
}

/// Chooses a bin for every item from its pheromone row.
///
/// Each choice depends only on the snapshot; bins filled earlier in the same
/// path have no influence.
pub fn construct_path<R: Rng>(graph: &PheromoneGraph, rng: &mut R) -> Vec<usize> {
    (0..graph.num_items())
        .map(|item| {
            let row = graph.row(item);
            let row_sum: f64 = row.iter().sum();
            select_bin(row, row_sum, rng)
        })
        .collect()
}

/// Sums item weights per bin. Bins receiving no items have load 0.
pub fn bin_loads(bins: &[usize], items: &[f64], num_bins: usize) -> Vec<f64> {
    let mut loads = vec![0.0; num_bins];
    for (&bin, &weight) in bins.iter().zip(items) {
        loads[bin] += weight;
    }
    loads
}

/// Max load minus min load. An empty slice has imbalance 0.
pub fn imbalance(loads: &[f64]) -> f64 {
    if loads.is_empty() {
        return 0.0;
    }
    let (min, max) = loads
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &l| {
            (lo.min(l), hi.max(l))
        });
    max - min
}
