//! Item weight sequence.

use crate::error::{AcoError, Result};

/// An ordered, immutable sequence of item weights.
///
/// Items are identified by their position. Every weight is finite and
/// strictly positive.
///
/// # Examples
///
/// ```
/// use u_aco::models::ItemSet;
///
/// let items = ItemSet::new(vec![3.0, 1.0, 2.0]).unwrap();
/// assert_eq!(items.len(), 3);
/// assert_eq!(items.total_weight(), 6.0);
/// assert!(ItemSet::new(vec![1.0, 0.0]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ItemSet {
    weights: Vec<f64>,
}

impl ItemSet {
    /// Creates an item set, rejecting empty sequences and weights that are
    /// not finite and positive.
    pub fn new(weights: Vec<f64>) -> Result<Self> {
        if weights.is_empty() {
            return Err(AcoError::InvalidItems("item sequence is empty".into()));
        }
        if let Some((index, weight)) = weights
            .iter()
            .enumerate()
            .find(|&(_, &w)| !(w.is_finite() && w > 0.0))
        {
            return Err(AcoError::InvalidItems(format!(
                "item {index} has weight {weight}, expected a finite positive value"
            )));
        }
        Ok(Self { weights })
    }

    /// Returns the weights in item order.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Always `false`; an item set holds at least one item.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Sum of all weights.
    pub fn total_weight(&self) -> f64 {
        self.weights.iter().sum()
    }
}

impl TryFrom<Vec<f64>> for ItemSet {
    type Error = AcoError;

    fn try_from(weights: Vec<f64>) -> Result<Self> {
        Self::new(weights)
    }
}
