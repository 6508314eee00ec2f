//! Dense pheromone matrix.

use rand::distr::Open01;
use rand::Rng;

use crate::error::{AcoError, Result};

/// Smallest value a trail may decay to. Evaporation and reinitialization
/// never take an entry below this, so it can't underflow to zero.
pub const MIN_TRAIL: f64 = f64::MIN_POSITIVE;

/// A dense `num_items × num_bins` pheromone matrix stored in row-major order.
///
/// Row `i` holds the desirability of every bin for item `i`. Every entry is
/// strictly positive: decay is floored at [`MIN_TRAIL`] and operations that
/// could break positivity otherwise are rejected.
///
/// # Examples
///
/// ```
/// use u_aco::pheromone::PheromoneGraph;
///
/// let mut graph = PheromoneGraph::with_value(3, 2, 1.0);
/// graph.update(&[0, 1, 1], 2.0);
/// assert_eq!(graph.row(1), &[1.0, 3.0]);
///
/// graph.evaporate(0.5).unwrap();
/// assert_eq!(graph.get(1, 1), 1.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneGraph {
    data: Vec<f64>,
    num_items: usize,
    num_bins: usize,
}

impl PheromoneGraph {
    /// Creates a matrix whose entries are drawn independently from (0, 1).
    pub fn random<R: Rng>(num_items: usize, num_bins: usize, rng: &mut R) -> Self {
        let data = (0..num_items * num_bins)
            .map(|_| rng.sample::<f64, _>(Open01))
            .collect();
        Self {
            data,
            num_items,
            num_bins,
        }
    }

    /// Creates a matrix with every entry set to `value`.
    pub fn with_value(num_items: usize, num_bins: usize, value: f64) -> Self {
        Self {
            data: vec![value; num_items * num_bins],
            num_items,
            num_bins,
        }
    }

    /// Creates a matrix from an optional constant, falling back to random
    /// initialization when `init_value` is `None`.
    pub fn init<R: Rng>(
        num_items: usize,
        num_bins: usize,
        init_value: Option<f64>,
        rng: &mut R,
    ) -> Self {
        match init_value {
            Some(value) => Self::with_value(num_items, num_bins, value),
            None => Self::random(num_items, num_bins, rng),
        }
    }

    /// Creates a matrix from explicit row-major data.
    ///
    /// Returns `None` if the data length doesn't match `num_items * num_bins`
    /// or any entry is not finite and positive.
    pub fn from_data(num_items: usize, num_bins: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != num_items * num_bins || !data.iter().all(|&v| v.is_finite() && v > 0.0) {
            return None;
        }
        Some(Self {
            data,
            num_items,
            num_bins,
        })
    }

    /// Returns the pheromone on the edge `item → bin`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, item: usize, bin: usize) -> f64 {
        self.data[item * self.num_bins + bin]
    }

    /// Returns the pheromone row for `item`, one entry per bin.
    pub fn row(&self, item: usize) -> &[f64] {
        let start = item * self.num_bins;
        &self.data[start..start + self.num_bins]
    }

    /// Returns every entry in row-major order.
    pub fn values(&self) -> &[f64] {
        &self.data
    }

    /// Number of items (rows).
    pub fn num_items(&self) -> usize {
        self.num_items
    }

    /// Number of bins (columns).
    pub fn num_bins(&self) -> usize {
        self.num_bins
    }

    /// Multiplies every entry by `rate`, flooring the result at
    /// [`MIN_TRAIL`].
    ///
    /// # Errors
    ///
    /// Rejects any rate outside (0, 1): a rate of 1 or more never decays,
    /// and a rate of 0 or less breaks positivity.
    pub fn evaporate(&mut self, rate: f64) -> Result<()> {
        if !(rate > 0.0 && rate < 1.0) {
            return Err(AcoError::InvalidPheromoneOperation(format!(
                "evaporation rate must lie in (0, 1), got {rate}"
            )));
        }
        for v in &mut self.data {
            *v = (*v * rate).max(MIN_TRAIL);
        }
        Ok(())
    }

    /// Adds `deposit` to the entry `(i, path[i])` for every item `i`.
    ///
    /// # Panics
    ///
    /// Panics if `path` is shorter than the number of items or names a bin
    /// out of range.
    pub fn update(&mut self, path: &[usize], deposit: f64) {
        debug_assert_eq!(path.len(), self.num_items, "path length mismatch");
        for (item, &bin) in path.iter().enumerate() {
            debug_assert!(bin < self.num_bins, "bin {bin} out of range");
            self.data[item * self.num_bins + bin] += deposit;
        }
    }

    /// Clamps every entry into `[min, max]`.
    pub fn bound(&mut self, max: f64, min: f64) {
        debug_assert!(min <= max, "min bound {min} exceeds max bound {max}");
        for v in &mut self.data {
            if *v > max {
                *v = max;
            } else if *v < min {
                *v = min;
            }
        }
    }

    /// Multiplies every entry by `factor` to flatten accumulated dominance,
    /// flooring the result at [`MIN_TRAIL`].
    ///
    /// # Errors
    ///
    /// Rejects a factor that is not finite and positive.
    pub fn reinitialize(&mut self, factor: f64) -> Result<()> {
        if !(factor.is_finite() && factor > 0.0) {
            return Err(AcoError::InvalidPheromoneOperation(format!(
                "reinitialization factor must be finite and positive, got {factor}"
            )));
        }
        for v in &mut self.data {
            *v = (*v * factor).max(MIN_TRAIL);
        }
        Ok(())
    }

    /// Returns `true` if every entry is finite and strictly positive.
    pub fn is_strictly_positive(&self) -> bool {
        self.data.iter().all(|&v| v.is_finite() && v > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_with_value() {
        let graph = PheromoneGraph::with_value(4, 3, 10.0);
        assert_eq!(graph.num_items(), 4);
        assert_eq!(graph.num_bins(), 3);
        assert!(graph.values().iter().all(|&v| v == 10.0));
    }

    #[test]
    fn test_random_in_open_unit_interval() {
        let mut rng = StdRng::seed_from_u64(42);
        let graph = PheromoneGraph::random(50, 10, &mut rng);
        assert_eq!(graph.values().len(), 500);
        assert!(graph.values().iter().all(|&v| v > 0.0 && v < 1.0));
    }

    #[test]
    fn test_init_dispatch() {
        let mut rng = StdRng::seed_from_u64(7);
        let constant = PheromoneGraph::init(2, 2, Some(0.25), &mut rng);
        assert_eq!(constant.values(), &[0.25; 4]);
        let random = PheromoneGraph::init(2, 2, None, &mut rng);
        assert!(random.is_strictly_positive());
    }

    #[test]
    fn test_from_data() {
        let graph = PheromoneGraph::from_data(2, 2, vec![1.0, 2.0, 3.0, 4.0]).expect("valid");
        assert_eq!(graph.get(1, 0), 3.0);
        assert_eq!(graph.row(0), &[1.0, 2.0]);
    }

    #[test]
    fn test_from_data_invalid() {
        assert!(PheromoneGraph::from_data(2, 2, vec![1.0, 2.0, 3.0]).is_none());
        assert!(PheromoneGraph::from_data(1, 2, vec![1.0, 0.0]).is_none());
        assert!(PheromoneGraph::from_data(1, 2, vec![1.0, f64::NAN]).is_none());
    }

    #[test]
    fn test_evaporate_rejects_out_of_range() {
        let mut graph = PheromoneGraph::with_value(2, 2, 1.0);
        assert!(graph.evaporate(1.0).is_err());
        assert!(graph.evaporate(1.5).is_err());
        assert!(graph.evaporate(0.0).is_err());
        assert!(graph.evaporate(f64::NAN).is_err());
        assert_eq!(graph.values(), &[1.0; 4]);
    }

    #[test]
    fn test_evaporate_never_reaches_zero() {
        let mut graph = PheromoneGraph::with_value(1, 2, 1.0);
        for _ in 0..2000 {
            graph.evaporate(0.3).expect("valid rate");
            assert!(graph.is_strictly_positive());
        }
        assert_eq!(graph.values(), &[MIN_TRAIL; 2]);
    }

    #[test]
    fn test_reinitialize_floors_tiny_factor() {
        let mut graph = PheromoneGraph::with_value(2, 2, 1e-200);
        graph.reinitialize(1e-200).expect("valid factor");
        assert_eq!(graph.values(), &[MIN_TRAIL; 4]);
    }

    #[test]
    fn test_update_touches_only_path() {
        let mut graph = PheromoneGraph::with_value(3, 3, 1.0);
        graph.update(&[2, 0, 2], 0.5);
        assert_eq!(graph.row(0), &[1.0, 1.0, 1.5]);
        assert_eq!(graph.row(1), &[1.5, 1.0, 1.0]);
        assert_eq!(graph.row(2), &[1.0, 1.0, 1.5]);
    }

    #[test]
    fn test_bound_clamps_exactly() {
        let mut graph = PheromoneGraph::from_data(1, 4, vec![0.1, 0.5, 0.9, 5.0]).expect("valid");
        graph.bound(0.8, 0.2);
        assert_eq!(graph.row(0), &[0.2, 0.5, 0.8, 0.8]);
    }

    #[test]
    fn test_reinitialize() {
        let mut graph = PheromoneGraph::with_value(2, 2, 2.0);
        graph.reinitialize(0.25).expect("valid factor");
        assert_eq!(graph.values(), &[0.5; 4]);
        assert!(graph.reinitialize(0.0).is_err());
        assert!(graph.reinitialize(f64::INFINITY).is_err());
        assert!(graph.reinitialize(-1.0).is_err());
    }

    fn matrix() -> impl Strategy<Value = (usize, usize, Vec<f64>)> {
        (1usize..8, 1usize..8).prop_flat_map(|(items, bins)| {
            (
                Just(items),
                Just(bins),
                prop::collection::vec(1e-6f64..1e3, items * bins),
            )
        })
    }

    proptest! {
        #[test]
        fn prop_evaporate_scales_and_decreases(
            (items, bins, data) in matrix(),
            rate in 0.01f64..0.99,
        ) {
            let before = PheromoneGraph::from_data(items, bins, data).expect("valid");
            let mut after = before.clone();
            after.evaporate(rate).expect("valid rate");
            for (&b, &a) in before.values().iter().zip(after.values()) {
                prop_assert_eq!(a, b * rate);
                prop_assert!(a < b);
            }
        }

        #[test]
        fn prop_update_changes_only_addressed_entries(
            (items, bins, data) in matrix(),
            seed in any::<u64>(),
            deposit in 0.01f64..100.0,
        ) {
            let before = PheromoneGraph::from_data(items, bins, data).expect("valid");
            let mut rng = StdRng::seed_from_u64(seed);
            let path: Vec<usize> = (0..items).map(|_| rng.random_range(0..bins)).collect();
            let mut after = before.clone();
            after.update(&path, deposit);
            for item in 0..items {
                for bin in 0..bins {
                    if path[item] == bin {
                        prop_assert_eq!(after.get(item, bin), before.get(item, bin) + deposit);
                    } else {
                        prop_assert_eq!(
                            after.get(item, bin).to_bits(),
                            before.get(item, bin).to_bits()
                        );
                    }
                }
            }
        }

        #[test]
        fn prop_bound_keeps_inside_entries(
            (items, bins, data) in matrix(),
            lo in 1e-6f64..10.0,
            span in 0.0f64..100.0,
        ) {
            let hi = lo + span;
            let before = PheromoneGraph::from_data(items, bins, data).expect("valid");
            let mut after = before.clone();
            after.bound(hi, lo);
            for (&b, &a) in before.values().iter().zip(after.values()) {
                prop_assert!(a >= lo && a <= hi);
                if b > hi {
                    prop_assert_eq!(a, hi);
                } else if b < lo {
                    prop_assert_eq!(a, lo);
                } else {
                    prop_assert_eq!(a.to_bits(), b.to_bits());
                }
            }
        }

        #[test]
        fn prop_with_value_is_uniform(items in 1usize..20, bins in 1usize..20, v in 1e-9f64..1e9) {
            let graph = PheromoneGraph::with_value(items, bins, v);
            prop_assert!(graph.values().iter().all(|&x| x == v));
        }
    }
}
