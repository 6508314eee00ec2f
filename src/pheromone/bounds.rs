//! Max-Min trail limits.

use serde::{Deserialize, Serialize};

/// Upper and lower pheromone limits applied under the Max-Min ant system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Upper trail limit.
    pub max: f64,
    /// Lower trail limit, never above `max`.
    pub min: f64,
}

impl Bounds {
    /// Computes the Max-Min limits from the deposit of the global-best path.
    ///
    /// `max = best_deposit / (1 - ρ)`, and with exploration probability
    /// `p = 1 / num_bins`, `min = max * (1 - p) / (num_items / 2 - 1) * p`.
    /// `min` collapses to `max` when it would exceed it or fail to be
    /// strictly positive (one bin, or fewer than three items).
    ///
    /// # Examples
    ///
    /// ```
    /// use u_aco::pheromone::Bounds;
    ///
    /// // ρ = 0.9, global best 50 with K = 100 deposits 2.0
    /// let b = Bounds::max_min(0.9, 2.0, 200, 10);
    /// assert!((b.max - 20.0).abs() < 1e-9);
    /// assert!((b.min - 20.0 * 0.9 / 99.0 * 0.1).abs() < 1e-12);
    /// ```
    pub fn max_min(evaporation_rate: f64, best_deposit: f64, num_items: usize, num_bins: usize) -> Self {
        let max = (1.0 / (1.0 - evaporation_rate)) * best_deposit;
        let p = 1.0 / num_bins as f64;
        let denominator = num_items as f64 / 2.0 - 1.0;
        let mut min = if denominator > 0.0 {
            max * (1.0 - p) / denominator * p
        } else {
            max
        };
        if !(min > 0.0) || min > max {
            min = max;
        }
        Self { max, min }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_below_max_for_typical_instance() {
        let b = Bounds::max_min(0.9, 1.0, 200, 10);
        assert!(b.min > 0.0);
        assert!(b.min < b.max);
    }

    #[test]
    fn test_single_bin_collapses_min() {
        let b = Bounds::max_min(0.9, 1.0, 200, 1);
        assert_eq!(b.min, b.max);
    }

    #[test]
    fn test_few_items_collapses_min() {
        for n in [1, 2] {
            let b = Bounds::max_min(0.5, 3.0, n, 4);
            assert_eq!(b.min, b.max);
            assert!((b.max - 6.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_three_items() {
        // denominator 0.5, p = 1/2: min = max * 0.5 / 0.5 * 0.5
        let b = Bounds::max_min(0.5, 1.0, 3, 2);
        assert!((b.min - 0.5 * b.max).abs() < 1e-12);
    }
}
