//! Attacking-pair counting and fitness scores.

use super::Board;

impl Board {
    /// Maximum number of mutually attacking pairs, `C(N, 2)`.
    pub fn max_attacking_pairs(&self) -> u64 {
        let n = self.size as u64;
        n * n.saturating_sub(1) / 2
    }

    /// Score of a goal state, `C(N, 2) + 1`.
    pub fn max_fitness(&self) -> u64 {
        self.max_attacking_pairs() + 1
    }

    /// Counts unordered column pairs `(i, j)`, `i < j`, whose queens attack
    /// each other along a row or either diagonal.
    ///
    /// The anti-diagonal is tested by reflecting the row index
    /// (`N - 1 - row`) before comparing `row + col`, so both diagonal
    /// families are detected.
    pub fn attacking_pairs(&self, encoding: &[usize]) -> u64 {
        debug_assert_eq!(encoding.len(), self.size, "encoding length mismatch");
        let last_row = self.size.saturating_sub(1);
        let mut count = 0;
        for (i, &row_i) in encoding.iter().enumerate() {
            for (j, &row_j) in encoding.iter().enumerate().skip(i + 1) {
                let same_row = row_i == row_j;
                let same_diagonal = row_i + i == row_j + j;
                let same_anti_diagonal = (last_row - row_i) + i == (last_row - row_j) + j;
                if same_row || same_diagonal || same_anti_diagonal {
                    count += 1;
                }
            }
        }
        count
    }

    /// Fitness score: `C(N, 2) - attacking_pairs + 1`, always `>= 1`.
    pub fn score(&self, encoding: &[usize]) -> u64 {
        self.max_attacking_pairs() - self.attacking_pairs(encoding) + 1
    }

    /// Whether no two queens attack each other.
    pub fn is_goal(&self, encoding: &[usize]) -> bool {
        self.attacking_pairs(encoding) == 0
    }
}
