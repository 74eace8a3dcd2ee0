//! Generational loop execution.
//!
//! [`Evolution`] is the two-state driver (running until the generation
//! budget is spent, then done); [`GaRunner`] runs it to completion:
//! initialization → selection → crossover → mutation → re-scoring →
//! replacement, for exactly `iterations` generations.

use super::config::GaConfig;
use super::operators::{Crossover, Mutation};
use super::population::Population;
use super::selection::select_parents;
use super::types::Individual;
use crate::board::Board;
use crate::error::ConfigError;
use crate::random::create_rng;
use rand::rngs::StdRng;
use rand::Rng;
use std::fmt;
use tracing::{debug, info, instrument, warn};

/// Summary of one generation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// `0` for the initial population, then `1..=iterations`.
    pub generation: usize,

    /// Population total fitness over `(C(N, 2) + 1) * population_size`,
    /// in `(0, 1]`.
    pub mean_normalized_fitness: f64,

    /// Highest score in the generation.
    pub best_fitness: u64,

    /// Members with zero attacking pairs.
    pub goal_count: usize,
}

impl fmt::Display for GenerationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Avg. Fitness (Gen {}):\t{}",
            self.generation, self.mean_normalized_fitness
        )
    }
}

/// Result of a complete run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// One entry per generation, `0..=iterations`.
    pub history: Vec<GenerationStats>,

    /// Fraction of child pairs whose combined fitness beat their parents'
    /// combined fitness, with exact ties counted on a coin flip.
    pub improvement_fraction: f64,

    /// Highest-scoring individual seen in any generation (earliest on ties).
    pub best: Individual,

    /// First generation that contained a goal state, if any.
    pub first_goal_generation: Option<usize>,

    /// Number of generations executed (always the configured count).
    pub generations: usize,
}

impl GaResult {
    /// `(generation, mean normalized fitness)` pairs for plotting.
    pub fn fitness_curve(&self) -> Vec<(usize, f64)> {
        self.history
            .iter()
            .map(|s| (s.generation, s.mean_normalized_fitness))
            .collect()
    }

    /// [`improvement_fraction`](Self::improvement_fraction) as a percentage.
    pub fn improvement_percent(&self) -> f64 {
        self.improvement_fraction * 100.0
    }

    /// Whether any generation reached a goal state.
    pub fn found_goal(&self) -> bool {
        self.first_goal_generation.is_some()
    }
}

/// Operators and parameters shared by every child pair of a run.
#[derive(Debug, Clone, Copy)]
struct Breeder {
    board: Board,
    crossover: Crossover,
    mutation: Mutation,
    mutation_rate: f64,
}

/// Two scored children and whether they count as an improvement.
struct PairOutcome {
    first: Individual,
    second: Individual,
    improved: bool,
}

impl Breeder {
    fn from_config(config: &GaConfig) -> Self {
        Self {
            board: Board::new(config.board_size),
            crossover: Crossover::for_mode(config.encoding_mode, config.crossover_enabled),
            mutation: Mutation::for_mode(config.encoding_mode),
            mutation_rate: config.mutation_rate,
        }
    }

    /// Select → recombine → mutate → re-score, for one child pair.
    fn breed_pair<R: Rng>(&self, parents: &Population, rng: &mut R) -> PairOutcome {
        let (p1, p2) = select_parents(parents, rng);
        let (mut c1, mut c2) = self.crossover.apply(p1.encoding(), p2.encoding(), rng);
        self.mutation.maybe_apply(&mut c1, self.mutation_rate, rng);
        self.mutation.maybe_apply(&mut c2, self.mutation_rate, rng);

        let first = Individual::new(&self.board, c1);
        let second = Individual::new(&self.board, c2);

        let parent_sum = p1.fitness() + p2.fitness();
        let child_sum = first.fitness() + second.fitness();
        let improved = match child_sum.cmp(&parent_sum) {
            std::cmp::Ordering::Greater => true,
            std::cmp::Ordering::Equal => rng.random_bool(0.5),
            std::cmp::Ordering::Less => false,
        };

        PairOutcome {
            first,
            second,
            improved,
        }
    }

    /// Breeds one pair per seed, each from its own RNG stream, in seed order.
    fn breed_sequential(&self, parents: &Population, seeds: &[u64]) -> Vec<PairOutcome> {
        seeds
            .iter()
            .map(|&seed| self.breed_pair(parents, &mut create_rng(seed)))
            .collect()
    }

    /// Same output as [`breed_sequential`](Self::breed_sequential), with
    /// pairs spread over the rayon pool when `parallel` is set.
    #[cfg(feature = "parallel")]
    fn breed_all(&self, parents: &Population, seeds: &[u64], parallel: bool) -> Vec<PairOutcome> {
        use rayon::prelude::*;

        if !parallel {
            return self.breed_sequential(parents, seeds);
        }
        seeds
            .par_iter()
            .map(|&seed| self.breed_pair(parents, &mut create_rng(seed)))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn breed_all(&self, parents: &Population, seeds: &[u64], _parallel: bool) -> Vec<PairOutcome> {
        self.breed_sequential(parents, seeds)
    }
}

/// Step-wise generational driver.
///
/// Construction builds and records generation 0. Each [`step`](Self::step)
/// replaces the population with its offspring until the configured number
/// of generations is reached. Goal states are observed, never used to stop.
///
/// ```
/// use queens_ga::ga::{Evolution, GaConfig};
///
/// let config = GaConfig::default()
///     .with_iterations(3)
///     .with_population_size(10)
///     .with_seed(1);
/// let mut evolution = Evolution::new(&config).unwrap();
/// while let Some(stats) = evolution.step() {
///     assert!(stats.mean_normalized_fitness > 0.0);
/// }
/// assert_eq!(evolution.finish().history.len(), 4);
/// ```
pub struct Evolution {
    breeder: Breeder,
    iterations: usize,
    parallel: bool,
    rng: StdRng,
    population: Population,
    history: Vec<GenerationStats>,
    best: Individual,
    first_goal_generation: Option<usize>,
    pairs_bred: u64,
    pairs_improved: u64,
}

impl Evolution {
    /// Validates `config`, builds the initial population and records its
    /// statistics as generation 0.
    pub fn new(config: &GaConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        if config.parallel && cfg!(not(feature = "parallel")) {
            warn!("parallel requested but the `parallel` feature is disabled; running sequentially");
        }

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = create_rng(seed);
        let breeder = Breeder::from_config(config);
        let population = Population::initial(
            &breeder.board,
            config.population_size,
            config.encoding_mode,
            &mut rng,
        );
        let best = population
            .best()
            .cloned()
            .ok_or(ConfigError::InvalidPopulationSize(config.population_size))?;

        let mut evolution = Self {
            breeder,
            iterations: config.iterations,
            parallel: config.parallel,
            rng,
            population,
            history: Vec::with_capacity(config.iterations + 1),
            best,
            first_goal_generation: None,
            pairs_bred: 0,
            pairs_improved: 0,
        };
        evolution.record(0);
        Ok(evolution)
    }

    /// Runs one generation. Returns `None` once all generations have run.
    pub fn step(&mut self) -> Option<&GenerationStats> {
        if self.is_done() {
            return None;
        }

        let pairs = self.population.len() / 2;
        let seeds: Vec<u64> = (0..pairs).map(|_| self.rng.random()).collect();
        let outcomes = self
            .breeder
            .breed_all(&self.population, &seeds, self.parallel);

        let mut children = Vec::with_capacity(pairs * 2);
        for outcome in outcomes {
            self.pairs_bred += 1;
            self.pairs_improved += u64::from(outcome.improved);
            children.push(outcome.first);
            children.push(outcome.second);
        }
        self.population = Population::from(children);

        let generation = self.generation() + 1;
        self.record(generation);
        self.history.last()
    }

    /// Index of the most recently recorded generation.
    pub fn generation(&self) -> usize {
        self.history.len() - 1
    }

    /// Whether the generation budget is exhausted.
    pub fn is_done(&self) -> bool {
        self.generation() >= self.iterations
    }

    /// The current generation's population.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// The board being searched.
    pub fn board(&self) -> &Board {
        &self.breeder.board
    }

    /// Statistics recorded so far.
    pub fn history(&self) -> &[GenerationStats] {
        &self.history
    }

    /// Fraction of bred child pairs counted as improvements so far.
    pub fn improvement_fraction(&self) -> f64 {
        if self.pairs_bred == 0 {
            return 0.0;
        }
        self.pairs_improved as f64 / self.pairs_bred as f64
    }

    /// Consumes the driver and returns the run summary.
    pub fn finish(self) -> GaResult {
        let improvement_fraction = self.improvement_fraction();
        info!(
            generations = self.generation(),
            improvement_percent = improvement_fraction * 100.0,
            best_fitness = self.best.fitness(),
            first_goal_generation = ?self.first_goal_generation,
            "run complete"
        );
        GaResult {
            generations: self.generation(),
            history: self.history,
            improvement_fraction,
            best: self.best,
            first_goal_generation: self.first_goal_generation,
        }
    }

    fn record(&mut self, generation: usize) {
        let board = &self.breeder.board;
        let stats = GenerationStats {
            generation,
            mean_normalized_fitness: self.population.mean_normalized_fitness(board),
            best_fitness: self.population.best().map_or(0, Individual::fitness),
            goal_count: self.population.goal_count(board),
        };

        if let Some(gen_best) = self.population.best() {
            if gen_best.fitness() > self.best.fitness() {
                self.best = gen_best.clone();
            }
        }
        if stats.goal_count > 0 && self.first_goal_generation.is_none() {
            self.first_goal_generation = Some(generation);
            info!(generation, encoding = ?self.best.encoding(), "goal state reached");
        }

        debug!(
            generation,
            mean_normalized_fitness = stats.mean_normalized_fitness,
            best_fitness = stats.best_fitness,
            goal_count = stats.goal_count,
            "generation recorded"
        );
        self.history.push(stats);
    }
}

/// Executes the GA loop to completion.
///
/// # Usage
///
/// ```
/// use queens_ga::board::EncodingMode;
/// use queens_ga::ga::{GaConfig, GaRunner};
///
/// let config = GaConfig::default()
///     .with_board_size(6)
///     .with_population_size(20)
///     .with_iterations(10)
///     .with_encoding_mode(EncodingMode::Permutation)
///     .with_seed(42);
/// let result = GaRunner::run(&config).unwrap();
/// assert_eq!(result.history.len(), 11);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs all configured generations.
    pub fn run(config: &GaConfig) -> Result<GaResult, ConfigError> {
        Self::run_with_observer(config, |_| {})
    }

    /// Runs all configured generations, passing each generation's
    /// statistics to `observer` as soon as it is recorded (generation 0
    /// first).
    #[instrument(
        level = "info",
        skip(config, observer),
        fields(
            board_size = config.board_size,
            population_size = config.population_size,
            iterations = config.iterations,
            encoding_mode = ?config.encoding_mode,
            crossover = config.crossover_enabled
        )
    )]
    pub fn run_with_observer<F>(config: &GaConfig, mut observer: F) -> Result<GaResult, ConfigError>
    where
        F: FnMut(&GenerationStats),
    {
        let mut evolution = Evolution::new(config)?;
        if let Some(initial) = evolution.history().first() {
            observer(initial);
        }
        while let Some(stats) = evolution.step() {
            observer(stats);
        }
        Ok(evolution.finish())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{is_permutation, EncodingMode};

    fn small_permutation_config(seed: u64) -> GaConfig {
        GaConfig::default()
            .with_board_size(4)
            .with_population_size(10)
            .with_iterations(50)
            .with_encoding_mode(EncodingMode::Permutation)
            .with_mutation_rate(0.1)
            .with_seed(seed)
    }

    #[test]
    fn test_history_length_and_bounds() {
        let result = GaRunner::run(&small_permutation_config(42)).unwrap();

        assert_eq!(result.history.len(), 51);
        assert_eq!(result.generations, 50);
        for (i, stats) in result.history.iter().enumerate() {
            assert_eq!(stats.generation, i);
            assert!(
                stats.mean_normalized_fitness > 0.0 && stats.mean_normalized_fitness <= 1.0,
                "gen {i}: {}",
                stats.mean_normalized_fitness
            );
        }
        assert!((0.0..=1.0).contains(&result.improvement_fraction));
    }

    #[test]
    fn test_n4_reaches_goal_across_seeds() {
        let reached = (0..20)
            .filter(|&seed| GaRunner::run(&small_permutation_config(seed)).unwrap().found_goal())
            .count();
        assert!(reached >= 18, "only {reached}/20 runs reached a goal state");
    }

    #[test]
    fn test_goal_does_not_stop_the_run() {
        let result = GaRunner::run(&small_permutation_config(3)).unwrap();
        if let Some(first) = result.first_goal_generation {
            assert!(first <= 50);
        }
        assert_eq!(result.history.len(), 51);
    }

    #[test]
    fn test_best_matches_history() {
        let result = GaRunner::run(&small_permutation_config(5)).unwrap();
        let max_best = result.history.iter().map(|s| s.best_fitness).max().unwrap();
        assert_eq!(result.best.fitness(), max_best);
        if result.found_goal() {
            assert!(result.best.is_goal(&Board::new(4)));
        }
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let config = GaConfig::default()
            .with_board_size(8)
            .with_population_size(40)
            .with_iterations(20)
            .with_seed(99);
        let a = GaRunner::run(&config).unwrap();
        let b = GaRunner::run(&config).unwrap();
        assert_eq!(a.history, b.history);
        assert_eq!(a.best, b.best);
        assert_eq!(a.improvement_fraction, b.improvement_fraction);
    }

    #[test]
    fn test_permutation_invariant_holds_every_generation() {
        let config = GaConfig::default()
            .with_board_size(10)
            .with_population_size(30)
            .with_iterations(25)
            .with_encoding_mode(EncodingMode::Permutation)
            .with_mutation_rate(0.5)
            .with_seed(11);
        let mut evolution = Evolution::new(&config).unwrap();
        loop {
            for ind in evolution.population().individuals() {
                assert!(is_permutation(ind.encoding()), "{:?}", ind.encoding());
            }
            if evolution.step().is_none() {
                break;
            }
        }
        assert_eq!(evolution.population().len(), config.population_size);
    }

    #[test]
    fn test_free_mode_keeps_encoding_shape() {
        let config = GaConfig::default()
            .with_board_size(7)
            .with_population_size(16)
            .with_iterations(15)
            .with_mutation_rate(0.3)
            .with_seed(8);
        let mut evolution = Evolution::new(&config).unwrap();
        while evolution.step().is_some() {
            assert_eq!(evolution.population().len(), 16);
            for ind in evolution.population().individuals() {
                assert_eq!(ind.encoding().len(), 7);
                assert!(ind.encoding().iter().all(|&r| r < 7));
            }
        }
    }

    #[test]
    fn test_crossover_disabled_children_copy_parents() {
        // Without crossover or mutation every child is a copy of some
        // member of the previous generation.
        let config = GaConfig::default()
            .with_board_size(6)
            .with_population_size(12)
            .with_iterations(10)
            .with_crossover(false)
            .with_mutation_rate(0.0)
            .with_seed(21);
        let mut evolution = Evolution::new(&config).unwrap();
        loop {
            let previous = evolution.population().clone();
            if evolution.step().is_none() {
                break;
            }
            for child in evolution.population().individuals() {
                assert!(
                    previous
                        .individuals()
                        .iter()
                        .any(|p| p.encoding() == child.encoding()),
                    "child {:?} is not a parent copy",
                    child.encoding()
                );
            }
        }
    }

    #[test]
    fn test_observer_sees_every_generation_in_order() {
        let mut seen = Vec::new();
        let result = GaRunner::run_with_observer(&small_permutation_config(1), |s| {
            seen.push(s.generation)
        })
        .unwrap();
        assert_eq!(seen, (0..=50).collect::<Vec<_>>());
        assert_eq!(result.fitness_curve().len(), 51);
    }

    #[test]
    fn test_step_after_done_returns_none() {
        let config = small_permutation_config(2).with_iterations(2);
        let mut evolution = Evolution::new(&config).unwrap();
        assert!(!evolution.is_done());
        assert_eq!(evolution.step().map(|s| s.generation), Some(1));
        assert_eq!(evolution.step().map(|s| s.generation), Some(2));
        assert!(evolution.is_done());
        assert!(evolution.step().is_none());
        assert_eq!(evolution.generation(), 2);
    }

    #[test]
    fn test_invalid_config_rejected_before_running() {
        let config = GaConfig::default().with_population_size(9);
        assert_eq!(
            GaRunner::run(&config).unwrap_err(),
            ConfigError::InvalidPopulationSize(9)
        );
        let config = GaConfig::default().with_board_size(1);
        assert!(Evolution::new(&config).is_err());
    }

    #[test]
    fn test_improvement_fraction_with_identity_operators() {
        // No crossover and no mutation: children equal their parents, so
        // every pair is a tie and the coin flip decides.
        let config = GaConfig::default()
            .with_board_size(8)
            .with_population_size(100)
            .with_iterations(40)
            .with_crossover(false)
            .with_mutation_rate(0.0)
            .with_seed(4);
        let result = GaRunner::run(&config).unwrap();
        assert!(
            (result.improvement_fraction - 0.5).abs() < 0.05,
            "fraction = {}",
            result.improvement_fraction
        );
        assert!((result.improvement_percent() - result.improvement_fraction * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_selection_pressure_raises_mean_fitness() {
        let config = GaConfig::default()
            .with_board_size(8)
            .with_population_size(200)
            .with_iterations(60)
            .with_encoding_mode(EncodingMode::Permutation)
            .with_mutation_rate(0.1)
            .with_seed(42);
        let result = GaRunner::run(&config).unwrap();
        let first = result.history[0].mean_normalized_fitness;
        let last = result.history[51..]
            .iter()
            .map(|s| s.mean_normalized_fitness)
            .sum::<f64>()
            / 10.0;
        assert!(last > first, "mean fitness fell: {first} -> {last}");
    }

    #[test]
    fn test_stats_display_matches_report_line() {
        let stats = GenerationStats {
            generation: 3,
            mean_normalized_fitness: 0.5,
            best_fitness: 20,
            goal_count: 0,
        };
        assert_eq!(stats.to_string(), "Avg. Fitness (Gen 3):\t0.5");
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let config = GaConfig::default()
            .with_board_size(8)
            .with_population_size(64)
            .with_iterations(20)
            .with_encoding_mode(EncodingMode::Permutation)
            .with_mutation_rate(0.2)
            .with_seed(17);
        let sequential = GaRunner::run(&config.clone().with_parallel(false)).unwrap();
        let parallel = GaRunner::run(&config.with_parallel(true)).unwrap();
        assert_eq!(sequential.history, parallel.history);
        assert_eq!(sequential.best, parallel.best);
        assert_eq!(sequential.improvement_fraction, parallel.improvement_fraction);
    }
}
