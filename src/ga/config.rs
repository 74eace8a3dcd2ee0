//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::board::EncodingMode;
use crate::error::ConfigError;

/// Configuration for an N-queens GA run.
///
/// # Defaults
///
/// ```
/// use queens_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.iterations, 1000);
/// assert_eq!(config.board_size, 8);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use queens_ga::board::EncodingMode;
/// use queens_ga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_board_size(12)
///     .with_population_size(200)
///     .with_encoding_mode(EncodingMode::Permutation)
///     .with_mutation_rate(0.1)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GaConfig {
    /// Number of generations to run. The loop never stops earlier.
    pub iterations: usize,

    /// Number of individuals per generation. Must be even: each generation
    /// is built from `population_size / 2` child pairs.
    pub population_size: usize,

    /// Board dimension `N` (and number of queens).
    pub board_size: usize,

    /// Probability of mutating each child (0.0–1.0).
    pub mutation_rate: f64,

    /// Free or permutation encoding; also selects the operators.
    pub encoding_mode: EncodingMode,

    /// When false, children are copies of their parents before mutation.
    pub crossover_enabled: bool,

    /// Produce child pairs in parallel. Requires the `parallel` feature;
    /// ignored otherwise. A seeded run gives the same result either way.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            population_size: 1000,
            board_size: 8,
            mutation_rate: 0.02,
            encoding_mode: EncodingMode::Free,
            crossover_enabled: true,
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the number of generations.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the board dimension.
    pub fn with_board_size(mut self, n: usize) -> Self {
        self.board_size = n;
        self
    }

    /// Sets the mutation rate, clamped to `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the encoding mode.
    pub fn with_encoding_mode(mut self, mode: EncodingMode) -> Self {
        self.encoding_mode = mode;
        self
    }

    /// Enables or disables crossover.
    pub fn with_crossover(mut self, enabled: bool) -> Self {
        self.crossover_enabled = enabled;
        self
    }

    /// Enables or disables parallel child production.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        if self.population_size == 0 || self.population_size % 2 != 0 {
            return Err(ConfigError::InvalidPopulationSize(self.population_size));
        }
        if self.board_size < 2 {
            return Err(ConfigError::BoardTooSmall(self.board_size));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::InvalidMutationRate(self.mutation_rate));
        }
        Ok(())
    }
}
