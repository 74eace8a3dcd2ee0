//! Board encoding and fitness evaluation for the N-queens problem.
//!
//! A candidate board is an [`Encoding`]: one row index per column, so no
//! two queens ever share a column. [`Board`] carries the board size and
//! scores encodings by counting mutually attacking queen pairs.
//!
//! # Fitness
//!
//! With `M = C(N, 2)` the maximum number of attacking pairs, the score of
//! an encoding is `M - attacking_pairs + 1`. The `+1` offset keeps every
//! score strictly positive, which fitness-proportionate selection relies
//! on. A score of `M + 1` is a goal state.

mod encoding;
mod fitness;

#[cfg(test)]
pub(crate) use encoding::is_permutation;
pub use encoding::{Encoding, EncodingMode};

/// An `N × N` chess board.
///
/// Injected into every component that needs the board size instead of a
/// global constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    size: usize,
}

impl Board {
    /// Creates a board with `size` rows and columns.
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    /// Number of rows (and columns, and queens).
    pub fn size(&self) -> usize {
        self.size
    }
}
