//! Board encodings and random generation.

use super::Board;
use rand::seq::SliceRandom;
use rand::Rng;

/// Column-indexed queen placement: `encoding[col] = row`.
pub type Encoding = Vec<usize>;

/// How rows are allowed to repeat across columns.
///
/// The mode also selects the matching crossover and mutation operators,
/// see [`Crossover`](crate::ga::Crossover) and [`Mutation`](crate::ga::Mutation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EncodingMode {
    /// Any row in any column; rows may repeat.
    #[default]
    Free,
    /// Every row used exactly once.
    Permutation,
}

impl Board {
    /// Draws a random encoding for this board.
    ///
    /// - [`EncodingMode::Free`]: `N` independent uniform rows in `[0, N)`
    /// - [`EncodingMode::Permutation`]: a uniformly random permutation of
    ///   `[0, N)` (Fisher–Yates)
    pub fn generate_encoding<R: Rng>(&self, mode: EncodingMode, rng: &mut R) -> Encoding {
        match mode {
            EncodingMode::Free => (0..self.size)
                .map(|_| rng.random_range(0..self.size))
                .collect(),
            EncodingMode::Permutation => {
                let mut rows: Encoding = (0..self.size).collect();
                rows.shuffle(rng);
                rows
            }
        }
    }
}

/// Checks that `encoding` is a permutation of `0..encoding.len()`.
#[cfg(test)]
pub(crate) fn is_permutation(encoding: &[usize]) -> bool {
    let n = encoding.len();
    let mut seen = vec![false; n];
    for &row in encoding {
        if row >= n || seen[row] {
            return false;
        }
        seen[row] = true;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_free_encoding_in_range() {
        let board = Board::new(8);
        let mut rng = create_rng(42);
        for _ in 0..200 {
            let enc = board.generate_encoding(EncodingMode::Free, &mut rng);
            assert_eq!(enc.len(), 8);
            assert!(enc.iter().all(|&r| r < 8), "row out of range: {enc:?}");
        }
    }

    #[test]
    fn test_free_encoding_allows_repeats() {
        let board = Board::new(8);
        let mut rng = create_rng(42);
        // 8!/8^8 ≈ 0.24% chance of a permutation; repeats show up quickly.
        let repeated = (0..100)
            .map(|_| board.generate_encoding(EncodingMode::Free, &mut rng))
            .any(|enc| !is_permutation(&enc));
        assert!(repeated);
    }

    #[test]
    fn test_permutation_encoding_is_permutation() {
        let board = Board::new(12);
        let mut rng = create_rng(7);
        for _ in 0..200 {
            let enc = board.generate_encoding(EncodingMode::Permutation, &mut rng);
            assert!(is_permutation(&enc), "not a permutation: {enc:?}");
        }
    }

    #[test]
    fn test_permutation_encoding_is_shuffled() {
        let board = Board::new(8);
        let mut rng = create_rng(3);
        let identity: Encoding = (0..8).collect();
        let shuffled = (0..20)
            .map(|_| board.generate_encoding(EncodingMode::Permutation, &mut rng))
            .any(|enc| enc != identity);
        assert!(shuffled);
    }

    #[test]
    fn test_is_permutation() {
        assert!(is_permutation(&[2, 0, 1]));
        assert!(is_permutation(&[]));
        assert!(!is_permutation(&[0, 0, 1]));
        assert!(!is_permutation(&[0, 1, 3]));
    }
}
