//! Pseudorandom proportional bin selection.

use rand::Rng;

/// Picks a bin with probability proportional to its pheromone.
///
/// Draws `r` uniformly from `[0, row_sum)` and walks the row subtracting each
/// entry, returning the first index where `r` drops to zero or below. If
/// rounding lets the walk run off the end of the row, the last index is
/// returned.
///
/// # Arguments
///
/// * `row` — Pheromone entries for one item, all strictly positive
/// * `row_sum` — Sum of `row`
///
/// # Panics
///
/// Panics if `row` is empty.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_aco::ant::select_bin;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let row = [0.2, 0.3, 0.5];
/// let bin = select_bin(&row, 1.0, &mut rng);
/// assert!(bin < 3);
/// ```
pub fn select_bin<R: Rng>(row: &[f64], row_sum: f64, rng: &mut R) -> usize {
    assert!(!row.is_empty(), "cannot select from an empty row");
    let mut r = rng.random::<f64>() * row_sum;
    for (bin, &pheromone) in row.iter().enumerate() {
        r -= pheromone;
        if r <= 0.0 {
            return bin;
        }
    }
    row.len() - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_single_bin() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            assert_eq!(select_bin(&[0.7], 0.7, &mut rng), 0);
        }
    }

    #[test]
    fn test_understated_sum_falls_back_to_last() {
        // row_sum larger than the true sum forces the walk off the end
        let mut rng = StdRng::seed_from_u64(3);
        let row = [1e-12, 1e-12, 1e-12];
        let hits = (0..1000)
            .filter(|_| select_bin(&row, 1.0, &mut rng) == 2)
            .count();
        assert!(hits > 990);
    }

    #[test]
    fn test_dominant_entry_wins_most() {
        let mut rng = StdRng::seed_from_u64(42);
        let row = [0.01, 100.0, 0.01];
        let sum: f64 = row.iter().sum();
        let hits = (0..1000)
            .filter(|_| select_bin(&row, sum, &mut rng) == 1)
            .count();
        assert!(hits > 990);
    }

    #[test]
    fn test_frequencies_follow_pheromone() {
        let mut rng = StdRng::seed_from_u64(7);
        let row = [1.0, 3.0];
        let mut counts = [0usize; 2];
        for _ in 0..20_000 {
            counts[select_bin(&row, 4.0, &mut rng)] += 1;
        }
        let share = counts[1] as f64 / 20_000.0;
        assert!((share - 0.75).abs() < 0.02, "share = {share}");
    }

    proptest! {
        #[test]
        fn prop_index_in_range(
            row in prop::collection::vec(1e-9f64..1e6, 1..64),
            seed in any::<u64>(),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let sum: f64 = row.iter().sum();
            for _ in 0..16 {
                prop_assert!(select_bin(&row, sum, &mut rng) < row.len());
            }
        }
    }
}
