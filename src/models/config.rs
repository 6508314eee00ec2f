//! Run configuration.

use serde::{Deserialize, Serialize};

use crate::error::{AcoError, Result};
use crate::pheromone::ZeroFitnessPolicy;

/// Which pheromone update scheme the colony uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Variant {
    /// Every ant deposits; no bounds, no stagnation handling.
    #[default]
    Standard,
    /// Only the iteration-best ant deposits; trails are bounded and
    /// reinitialized on stagnation.
    MaxMin,
}

/// Configuration for an ant colony run.
///
/// Defaults reproduce the classic 10-bin benchmark: ρ = 0.9, 200 items,
/// 100 ants, 10 000 iterations, standard variant.
///
/// # Examples
///
/// ```
/// use u_aco::models::{AcoConfig, Variant};
///
/// let config = AcoConfig::default()
///     .with_num_bins(50)
///     .with_max_min(true)
///     .with_seed(42);
/// assert_eq!(config.variant, Variant::MaxMin);
/// assert!(config.validate().is_ok());
///
/// assert!(config.with_evaporation_rate(1.0).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcoConfig {
    /// Multiplier applied to every trail each iteration, in (0, 1).
    pub evaporation_rate: f64,
    /// Number of bins.
    pub num_bins: usize,
    /// Number of items.
    pub num_items: usize,
    /// Ants constructed per iteration.
    pub num_ants: usize,
    /// Fixed run length.
    pub num_iterations: usize,
    /// Pheromone update scheme.
    pub variant: Variant,
    /// Deposit constant K; an ant deposits `K / fitness`.
    pub deposit_constant: f64,
    /// Deposit rule for zero-fitness ants. The default caps the deposit at
    /// `10 * deposit_constant`; when setting fields directly, keep the two
    /// in step.
    pub zero_fitness: ZeroFitnessPolicy,
    /// Consecutive equal iteration-best values that trigger reinitialization
    /// (Max-Min only).
    pub stagnation_limit: usize,
    /// Progress is reported every `report_interval` iterations.
    pub report_interval: usize,
    /// Random seed (None = OS entropy).
    pub seed: Option<u64>,
    /// Construct ants on the rayon thread pool.
    pub parallel: bool,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            evaporation_rate: 0.9,
            num_bins: 10,
            num_items: 200,
            num_ants: 100,
            num_iterations: 10_000,
            variant: Variant::Standard,
            deposit_constant: 100.0,
            zero_fitness: ZeroFitnessPolicy::capped(100.0),
            stagnation_limit: 200,
            report_interval: 100,
            seed: None,
            parallel: true,
        }
    }
}

impl AcoConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the evaporation rate.
    pub fn with_evaporation_rate(mut self, rate: f64) -> Self {
        self.evaporation_rate = rate;
        self
    }

    /// Sets the number of bins.
    pub fn with_num_bins(mut self, num_bins: usize) -> Self {
        self.num_bins = num_bins;
        self
    }

    /// Sets the number of items.
    pub fn with_num_items(mut self, num_items: usize) -> Self {
        self.num_items = num_items;
        self
    }

    /// Sets the number of ants per iteration.
    pub fn with_num_ants(mut self, num_ants: usize) -> Self {
        self.num_ants = num_ants;
        self
    }

    /// Sets the number of iterations.
    pub fn with_num_iterations(mut self, num_iterations: usize) -> Self {
        self.num_iterations = num_iterations;
        self
    }

    /// Sets the update variant.
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Selects Max-Min when `enabled`, standard otherwise.
    pub fn with_max_min(self, enabled: bool) -> Self {
        self.with_variant(if enabled {
            Variant::MaxMin
        } else {
            Variant::Standard
        })
    }

    /// Sets the deposit constant K.
    ///
    /// If the zero-fitness rule is still the default cap for the previous K
    /// (`10 * K`), it is rescaled to `10 * k`; an explicitly chosen rule is
    /// kept as is.
    pub fn with_deposit_constant(mut self, k: f64) -> Self {
        if self.zero_fitness == ZeroFitnessPolicy::capped(self.deposit_constant) {
            self.zero_fitness = ZeroFitnessPolicy::capped(k);
        }
        self.deposit_constant = k;
        self
    }

    /// Sets the zero-fitness deposit rule.
    pub fn with_zero_fitness(mut self, policy: ZeroFitnessPolicy) -> Self {
        self.zero_fitness = policy;
        self
    }

    /// Sets the stagnation limit.
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    /// Sets the progress report interval.
    pub fn with_report_interval(mut self, interval: usize) -> Self {
        self.report_interval = interval;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel ant construction.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Returns `true` if the Max-Min variant is selected.
    pub fn is_max_min(&self) -> bool {
        self.variant == Variant::MaxMin
    }

    /// Checks every parameter range.
    pub fn validate(&self) -> Result<()> {
        if self.num_bins < 1 {
            return Err(invalid("num_bins must be at least 1"));
        }
        if self.num_items < 1 {
            return Err(invalid("num_items must be at least 1"));
        }
        if self.num_ants < 1 {
            return Err(invalid("num_ants must be at least 1"));
        }
        if self.num_iterations < 1 {
            return Err(invalid("num_iterations must be at least 1"));
        }
        if !(self.evaporation_rate > 0.0 && self.evaporation_rate < 1.0) {
            return Err(invalid(format!(
                "evaporation_rate must lie in (0, 1), got {}",
                self.evaporation_rate
            )));
        }
        if !(self.deposit_constant.is_finite() && self.deposit_constant > 0.0) {
            return Err(invalid(format!(
                "deposit_constant must be finite and positive, got {}",
                self.deposit_constant
            )));
        }
        if let ZeroFitnessPolicy::Cap { max_deposit } = self.zero_fitness {
            if !(max_deposit.is_finite() && max_deposit > 0.0) {
                return Err(invalid(format!(
                    "max_deposit must be finite and positive, got {max_deposit}"
                )));
            }
        }
        if self.stagnation_limit < 1 {
            return Err(invalid("stagnation_limit must be at least 1"));
        }
        if self.report_interval < 1 {
            return Err(invalid("report_interval must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> AcoError {
    AcoError::InvalidConfiguration(message.into())
}
