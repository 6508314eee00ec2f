//! Item weight generators and presets.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{AcoConfig, ItemSet};

/// A random permutation of the weights `1..=n`.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_aco::instances::permutation_items;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let mut items = permutation_items(5, &mut rng);
/// items.sort_by(f64::total_cmp);
/// assert_eq!(items, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn permutation_items<R: Rng>(n: usize, rng: &mut R) -> Vec<f64> {
    let mut items: Vec<f64> = (1..=n).map(|w| w as f64).collect();
    items.shuffle(rng);
    items
}

/// A permutation of `1..=n` scaled element-wise by `(i + 1) / 2`.
pub fn scaled_permutation_items<R: Rng>(n: usize, rng: &mut R) -> Vec<f64> {
    permutation_items(n, rng)
        .into_iter()
        .enumerate()
        .map(|(i, w)| w * (i + 1) as f64 / 2.0)
        .collect()
}

/// Named benchmark instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Preset {
    /// 200 items, weights a permutation of 1..=200, 10 bins.
    Bpp1,
    /// 200 items, scaled permutation weights, 50 bins.
    Bpp2,
}

impl Preset {
    /// Tuned parameters for this preset (ρ = 0.9, 100 ants, 10 000
    /// iterations, standard variant).
    pub fn config(self) -> AcoConfig {
        let num_bins = match self {
            Preset::Bpp1 => 10,
            Preset::Bpp2 => 50,
        };
        AcoConfig::default()
            .with_evaporation_rate(0.9)
            .with_num_bins(num_bins)
            .with_num_items(200)
            .with_num_ants(100)
            .with_num_iterations(10_000)
    }

    /// Draws this preset's item weights.
    pub fn items<R: Rng>(self, rng: &mut R) -> Result<ItemSet> {
        let n = self.config().num_items;
        let weights = match self {
            Preset::Bpp1 => permutation_items(n, rng),
            Preset::Bpp2 => scaled_permutation_items(n, rng),
        };
        ItemSet::new(weights)
    }
}
