//! Scored candidate boards.

use crate::board::{Board, Encoding};

/// A candidate board paired with its cached fitness score.
///
/// The score is computed once in [`Individual::new`] and never recomputed.
/// Genetic operators produce new encodings, which become new individuals;
/// an existing individual is never edited in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    encoding: Encoding,
    fitness: u64,
}

impl Individual {
    /// Scores `encoding` on `board` and wraps both.
    pub fn new(board: &Board, encoding: Encoding) -> Self {
        let fitness = board.score(&encoding);
        Self { encoding, fitness }
    }

    /// The column → row placement.
    pub fn encoding(&self) -> &[usize] {
        &self.encoding
    }

    /// Cached fitness score in `[1, C(N, 2) + 1]`.
    pub fn fitness(&self) -> u64 {
        self.fitness
    }

    /// Whether this individual has the maximum score for `board`.
    pub fn is_goal(&self, board: &Board) -> bool {
        self.fitness == board.max_fitness()
    }

    /// Consumes the individual, returning its encoding.
    pub fn into_encoding(self) -> Encoding {
        self.encoding
    }
}
