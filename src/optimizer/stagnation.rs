//! Stagnation detection.

/// Counts consecutive iterations whose best fitness repeats the previous
/// iteration's best.
///
/// # Examples
///
/// ```
/// use u_aco::optimizer::StagnationTracker;
///
/// let mut tracker = StagnationTracker::new(2);
/// assert!(!tracker.observe(None, 5.0));
/// assert!(!tracker.observe(Some(5.0), 5.0));
/// assert!(tracker.observe(Some(5.0), 5.0)); // limit reached
/// assert_eq!(tracker.count(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagnationTracker {
    count: usize,
    limit: usize,
}

impl StagnationTracker {
    /// Creates a tracker that fires after `limit` consecutive repeats.
    pub fn new(limit: usize) -> Self {
        Self { count: 0, limit }
    }

    /// Records this iteration's best against the previous one.
    ///
    /// Returns `true` exactly when the counter reaches the limit; the counter
    /// is then reset to 0.
    pub fn observe(&mut self, previous: Option<f64>, current: f64) -> bool {
        if previous == Some(current) {
            self.count += 1;
        } else {
            self.count = 0;
        }
        if self.count >= self.limit {
            self.count = 0;
            return true;
        }
        false
    }

    /// Current number of consecutive repeats.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Repeats needed to fire.
    pub fn limit(&self) -> usize {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_observation_never_counts() {
        let mut tracker = StagnationTracker::new(1);
        assert!(!tracker.observe(None, 0.0));
        assert_eq!(tracker.count(), 0);
    }

    #[test]
    fn test_reset_on_change() {
        let mut tracker = StagnationTracker::new(200);
        tracker.observe(Some(4.0), 4.0);
        tracker.observe(Some(4.0), 4.0);
        assert_eq!(tracker.count(), 2);
        tracker.observe(Some(4.0), 3.0);
        assert_eq!(tracker.count(), 0);
    }

    #[test]
    fn test_fires_exactly_at_limit() {
        let mut tracker = StagnationTracker::new(200);
        for i in 1..200 {
            assert!(!tracker.observe(Some(7.0), 7.0));
            assert_eq!(tracker.count(), i);
        }
        assert!(tracker.observe(Some(7.0), 7.0));
        assert_eq!(tracker.count(), 0);
        assert!(!tracker.observe(Some(7.0), 7.0));
        assert_eq!(tracker.count(), 1);
    }
}
