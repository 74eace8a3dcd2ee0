//! Fitness-proportionate parent selection.
//!
//! Each parent is drawn independently by roulette wheel: a uniform integer
//! `target` in `[0, total_fitness)` is located on the cumulative score line
//! of the population, so individual `k` is chosen with probability
//! `score_k / total_fitness`. Both parents may be the same individual.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::population::Population;
use super::types::Individual;
use rand::Rng;

/// Picks two parents, each by an independent roulette-wheel spin.
///
/// # Panics
/// Panics if `population` is empty.
pub fn select_parents<'a, R: Rng>(
    population: &'a Population,
    rng: &mut R,
) -> (&'a Individual, &'a Individual) {
    let individuals = population.individuals();
    let first = roulette(individuals, rng);
    let second = roulette(individuals, rng);
    (&individuals[first], &individuals[second])
}

/// Roulette wheel over integer scores. Returns the selected index.
///
/// # Complexity
/// O(n) per selection (linear scan)
pub fn roulette<R: Rng>(individuals: &[Individual], rng: &mut R) -> usize {
    assert!(
        !individuals.is_empty(),
        "cannot select from empty population"
    );

    let total: u64 = individuals.iter().map(Individual::fitness).sum();
    let target = rng.random_range(0..total);

    let mut cumulative = 0;
    for (i, ind) in individuals.iter().enumerate() {
        cumulative += ind.fitness();
        if cumulative > target {
            return i;
        }
    }

    // Unreachable while target < total.
    individuals.len() - 1
}
