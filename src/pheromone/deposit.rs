//! Deposit amounts and the zero-fitness rule.
//!
//! An ant deposits `K / fitness` on every edge of its path. A perfectly
//! balanced path has fitness 0, so the quotient is replaced by an explicit
//! policy instead of an infinite deposit.

use serde::{Deserialize, Serialize};

/// How ants whose fitness is zero (or small enough to overflow the deposit)
/// are treated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ZeroFitnessPolicy {
    /// Deposit `min(K / fitness, max_deposit)`; a zero fitness deposits
    /// exactly `max_deposit`.
    Cap {
        /// Largest amount a single ant may deposit per edge.
        max_deposit: f64,
    },
    /// Ants with zero fitness do not deposit at all.
    Skip,
}

impl ZeroFitnessPolicy {
    /// Cap at ten times the deposit constant, i.e. treat fitness 0 as 0.1.
    ///
    /// The cap is absolute, so it only means "fitness 0.1" for the constant
    /// it was built from.
    pub fn capped(deposit_constant: f64) -> Self {
        Self::Cap {
            max_deposit: 10.0 * deposit_constant,
        }
    }
}

impl Default for ZeroFitnessPolicy {
    fn default() -> Self {
        Self::capped(100.0)
    }
}

/// Returns the per-edge deposit for an ant with the given fitness, or `None`
/// if the ant must not deposit.
///
/// # Examples
///
/// ```
/// use u_aco::pheromone::{deposit_amount, ZeroFitnessPolicy};
///
/// let cap = ZeroFitnessPolicy::Cap { max_deposit: 500.0 };
/// assert_eq!(deposit_amount(100.0, 4.0, cap), Some(25.0));
/// assert_eq!(deposit_amount(100.0, 0.0, cap), Some(500.0));
/// assert_eq!(deposit_amount(100.0, 0.0, ZeroFitnessPolicy::Skip), None);
/// ```
pub fn deposit_amount(deposit_constant: f64, fitness: f64, policy: ZeroFitnessPolicy) -> Option<f64> {
    match policy {
        ZeroFitnessPolicy::Cap { max_deposit } => {
            if fitness > 0.0 {
                Some((deposit_constant / fitness).min(max_deposit))
            } else {
                Some(max_deposit)
            }
        }
        ZeroFitnessPolicy::Skip => (fitness > 0.0).then(|| deposit_constant / fitness),
    }
}

/// The fitness implied by the deposit an ant actually makes (`K / deposit`).
///
/// Formulas that divide by fitness use this so they stay finite under the
/// same rule that governs deposits.
pub fn effective_fitness(
    deposit_constant: f64,
    fitness: f64,
    policy: ZeroFitnessPolicy,
) -> Option<f64> {
    deposit_amount(deposit_constant, fitness, policy).map(|d| deposit_constant / d)
}
