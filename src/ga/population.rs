//! Fixed-size generations of individuals.

use super::types::Individual;
use crate::board::{Board, EncodingMode};
use rand::Rng;

/// One generation: an ordered, exclusively owned set of individuals.
///
/// Order carries no meaning for the search but is deterministic for a
/// seeded run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    /// Builds `size` random individuals in the given encoding mode.
    pub fn initial<R: Rng>(board: &Board, size: usize, mode: EncodingMode, rng: &mut R) -> Self {
        let individuals = (0..size)
            .map(|_| Individual::new(board, board.generate_encoding(mode, rng)))
            .collect();
        Self { individuals }
    }

    /// Members in population order.
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Sum of all member scores. At least `len()`, since every score is `>= 1`.
    pub fn total_fitness(&self) -> u64 {
        self.individuals.iter().map(Individual::fitness).sum()
    }

    /// `total_fitness / ((C(N, 2) + 1) * len)`, in `(0, 1]`.
    ///
    /// Equals `1.0` only when every member is a goal state. Returns `0.0`
    /// for an empty population.
    pub fn mean_normalized_fitness(&self, board: &Board) -> f64 {
        if self.individuals.is_empty() {
            return 0.0;
        }
        self.total_fitness() as f64 / (board.max_fitness() as f64 * self.individuals.len() as f64)
    }

    /// The member with the highest score; the earliest one on ties.
    pub fn best(&self) -> Option<&Individual> {
        self.individuals
            .iter()
            .reduce(|best, ind| if ind.fitness() > best.fitness() { ind } else { best })
    }

    /// Number of members with zero attacking pairs.
    pub fn goal_count(&self, board: &Board) -> usize {
        self.individuals.iter().filter(|ind| ind.is_goal(board)).count()
    }
}

impl From<Vec<Individual>> for Population {
    fn from(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }
}
