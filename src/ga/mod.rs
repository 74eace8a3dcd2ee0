//! Genetic Algorithm for N-queens.
//!
//! Evolves fixed-size populations of queen placements toward boards with
//! no attacking pairs. Each generation draws `population_size / 2` parent
//! pairs by roulette wheel, recombines and mutates them, and replaces the
//! whole population with the scored children. There is no elitism and no
//! early exit: a run always spans the configured number of generations,
//! producing a fitness curve for study.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Run parameters (sizes, mutation rate, encoding mode)
//! - [`Individual`]: An encoding with its cached fitness
//! - [`Population`]: One generation of individuals
//! - [`Evolution`]: Step-wise generational driver
//! - [`GaRunner`]: Runs a full experiment and returns a [`GaResult`]
//!
//! # Submodules
//!
//! - [`operators`]: Slice and order-preserving crossover, reset and swap mutation
//! - [`selection`]: Fitness-proportionate parent selection
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod population;
mod runner;
pub mod selection;
mod types;

pub use config::GaConfig;
pub use operators::{Crossover, Mutation};
pub use population::Population;
pub use runner::{Evolution, GaResult, GaRunner, GenerationStats};
pub use types::Individual;
