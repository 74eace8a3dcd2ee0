//! Configuration errors.
//!
//! The search itself never fails; the only error path is rejecting an
//! invalid [`GaConfig`](crate::ga::GaConfig) before the first generation.

/// A configuration value outside its valid domain.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("iterations must be at least 1")]
    ZeroIterations,
    #[error("population_size must be even and positive, got {0}")]
    InvalidPopulationSize(usize),
    #[error("board_size must be greater than 1, got {0}")]
    BoardTooSmall(usize),
    #[error("mutation_rate must lie in [0, 1], got {0}")]
    InvalidMutationRate(f64),
}
