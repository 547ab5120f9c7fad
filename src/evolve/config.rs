//! Recombination configuration.
//!
//! [`EvolveConfig`] holds the parameters the outer search loop supplies to
//! each generation step.

use super::error::{check_rate, MutationError};

/// Configuration for producing generations.
///
/// # Defaults
///
/// ```
/// use u_styleopt::evolve::EvolveConfig;
///
/// let config = EvolveConfig::default();
/// assert_eq!(config.population_size, 20);
/// assert!((config.mutation_rate - 0.1).abs() < 1e-12);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_styleopt::evolve::EvolveConfig;
///
/// let config = EvolveConfig::default()
///     .with_population_size(64)
///     .with_mutation_rate(0.05)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolveConfig {
    /// Number of documents in every generation, elite included.
    pub population_size: usize,

    /// Per-setting probability of mutation (0.0–1.0).
    ///
    /// Applied independently at every nesting level.
    pub mutation_rate: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Whether to mutate offspring on the rayon thread pool.
    ///
    /// Only takes effect with the `parallel` feature.
    pub parallel: bool,
}

impl Default for EvolveConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            mutation_rate: 0.1,
            seed: None,
            parallel: false,
        }
    }
}

impl EvolveConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the mutation rate, clamped to `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel offspring mutation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Preset for broad exploration: larger population, heavier mutation.
    ///
    /// - Population: 40, Mutation rate: 0.25
    pub fn exploratory() -> Self {
        Self {
            population_size: 40,
            mutation_rate: 0.25,
            ..Self::default()
        }
    }

    /// Preset for refining a good configuration: small population, light
    /// mutation.
    ///
    /// - Population: 10, Mutation rate: 0.03
    pub fn conservative() -> Self {
        Self {
            population_size: 10,
            mutation_rate: 0.03,
            ..Self::default()
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// - [`MutationError::InvalidPopulationSize`] if `population_size` is 0
    /// - [`MutationError::InvalidRate`] if `mutation_rate` is outside `[0, 1]`
    pub fn validate(&self) -> Result<(), MutationError> {
        if self.population_size == 0 {
            return Err(MutationError::InvalidPopulationSize(0));
        }
        check_rate(self.mutation_rate)
    }
}
