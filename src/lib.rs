//! Genetic algorithm search for the N-queens problem.
//!
//! Evolves placements of `N` queens on an `N × N` board toward positions
//! where no two queens attack each other. Aimed at experiments on
//! evolutionary search behavior: convergence curves, the effect of
//! encoding and operator choice, and mutation-only dynamics.
//!
//! - [`board`]: Encodings, random generation, attacking-pair fitness
//! - [`ga`]: Population, roulette selection, crossover and mutation
//!   operators, and the generational driver
//! - [`error`]: Configuration validation errors
//!
//! # Example
//!
//! ```
//! use queens_ga::board::EncodingMode;
//! use queens_ga::ga::{GaConfig, GaRunner};
//!
//! let config = GaConfig::default()
//!     .with_board_size(8)
//!     .with_population_size(100)
//!     .with_iterations(30)
//!     .with_encoding_mode(EncodingMode::Permutation)
//!     .with_mutation_rate(0.05)
//!     .with_seed(7);
//!
//! let result = GaRunner::run(&config)?;
//! for stats in &result.history {
//!     println!("{stats}");
//! }
//! println!(
//!     "{}% of child pairs improved on their parents.",
//!     result.improvement_percent()
//! );
//! # Ok::<(), queens_ga::error::ConfigError>(())
//! ```
//!
//! Diagnostics are emitted through `tracing`; install a subscriber to see
//! them.

pub mod board;
pub mod error;
pub mod ga;
pub mod random;
