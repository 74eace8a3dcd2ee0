//! Crossover and mutation operators for queen encodings.
//!
//! Operators work on `&[usize]` row vectors and return fresh encodings (or
//! mutate a freshly built child), so parents are never touched.
//!
//! # Crossover Operators
//!
//! - [`slice_crossover`]: single cut point, heads and tails exchanged. Does
//!   not preserve permutations.
//! - [`ordered_crossover`]: single cut point, one side kept verbatim and the
//!   other filled in the donor's relative order. Always yields permutations.
//!
//! # Mutation Operators
//!
//! - [`reset_mutation`]: overwrite one column with a random row, O(1)
//! - [`swap_mutation`]: exchange the rows of two distinct columns, O(1)
//!
//! [`Crossover`] and [`Mutation`] select between these by encoding mode.
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use crate::board::{Encoding, EncodingMode};
use rand::Rng;

// ============================================================================
// Strategy selection
// ============================================================================

/// Recombination strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossover {
    /// [`slice_crossover`], the free-mode operator.
    Slice,
    /// [`ordered_crossover`], the permutation-mode operator.
    Ordered,
    /// Children are verbatim copies of the parents; mutation is the only
    /// source of variation.
    Disabled,
}

impl Crossover {
    /// The operator matching `mode`, or [`Crossover::Disabled`].
    pub fn for_mode(mode: EncodingMode, enabled: bool) -> Self {
        match (enabled, mode) {
            (false, _) => Crossover::Disabled,
            (true, EncodingMode::Free) => Crossover::Slice,
            (true, EncodingMode::Permutation) => Crossover::Ordered,
        }
    }

    /// Produces exactly two children from two parents.
    ///
    /// # Panics
    /// Panics if parents have different lengths.
    pub fn apply<R: Rng>(
        &self,
        parent1: &[usize],
        parent2: &[usize],
        rng: &mut R,
    ) -> (Encoding, Encoding) {
        match self {
            Crossover::Slice => slice_crossover(parent1, parent2, rng),
            Crossover::Ordered => ordered_crossover(parent1, parent2, rng),
            Crossover::Disabled => (parent1.to_vec(), parent2.to_vec()),
        }
    }
}

/// Mutation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    /// [`reset_mutation`], the free-mode operator.
    Reset,
    /// [`swap_mutation`], required in permutation mode since any single
    /// overwrite would duplicate a row.
    Swap,
}

impl Mutation {
    /// The operator matching `mode`.
    pub fn for_mode(mode: EncodingMode) -> Self {
        match mode {
            EncodingMode::Free => Mutation::Reset,
            EncodingMode::Permutation => Mutation::Swap,
        }
    }

    /// With probability `rate`, applies exactly one mutation to `encoding`.
    ///
    /// The decision compares a continuous uniform sample in `[0, 1)`
    /// against `rate`, so `0.0` never mutates and `1.0` always does.
    /// Returns whether a mutation was applied.
    pub fn maybe_apply<R: Rng>(&self, encoding: &mut [usize], rate: f64, rng: &mut R) -> bool {
        if rng.random::<f64>() >= rate {
            return false;
        }
        match self {
            Mutation::Reset => reset_mutation(encoding, rng),
            Mutation::Swap => swap_mutation(encoding, rng),
        }
        true
    }
}

// ============================================================================
// Crossover operators
// ============================================================================

/// Single-point slice crossover.
///
/// Draws a cut column `c` in `[0, N)`. Child 1 is `parent1[..c]` followed by
/// `parent2[c..]`; child 2 is the complementary splice.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths or are empty.
pub fn slice_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> (Encoding, Encoding) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    let cut = rng.random_range(0..n);
    slice_crossover_at(parent1, parent2, cut)
}

fn slice_crossover_at(parent1: &[usize], parent2: &[usize], cut: usize) -> (Encoding, Encoding) {
    let child1 = parent1[..cut].iter().chain(&parent2[cut..]).copied().collect();
    let child2 = parent2[..cut].iter().chain(&parent1[cut..]).copied().collect();
    (child1, child2)
}

/// Permutation-preserving single-point crossover.
///
/// Draws a cut column `c` in `[1, N - 1)`, never at the extremes.
///
/// 1. Child 1 keeps `parent1[c..]` as its tail; its head is `parent2`
///    filtered to the values of `parent1[..c]`, in `parent2`'s order
/// 2. Child 2 keeps `parent2[..c]` as its head; its tail is `parent1`
///    filtered to the values of `parent2[c..]`, in `parent1`'s order
///
/// Each filtered side covers exactly the values missing from the kept
/// side, so both children are permutations whenever the parents are.
/// Boards with `N < 3` have no interior cut, and children are copies of
/// the parents.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths.
pub fn ordered_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> (Encoding, Encoding) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n < 3 {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let cut = rng.random_range(1..n - 1);
    ordered_crossover_at(parent1, parent2, cut)
}

fn ordered_crossover_at(parent1: &[usize], parent2: &[usize], cut: usize) -> (Encoding, Encoding) {
    let n = parent1.len();

    let head1 = membership(&parent1[..cut], n);
    let mut child1: Encoding = parent2.iter().copied().filter(|&v| head1[v]).collect();
    child1.extend_from_slice(&parent1[cut..]);

    let tail2 = membership(&parent2[cut..], n);
    let mut child2: Encoding = parent2[..cut].to_vec();
    child2.extend(parent1.iter().copied().filter(|&v| tail2[v]));

    (child1, child2)
}

/// Lookup table: `table[v]` is true iff `v` occurs in `values`.
fn membership(values: &[usize], n: usize) -> Vec<bool> {
    let mut table = vec![false; n];
    for &v in values {
        table[v] = true;
    }
    table
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Reset mutation: overwrite one random column with a uniform row in
/// `[0, N)`. The new row may coincide with the old one.
pub fn reset_mutation<R: Rng>(encoding: &mut [usize], rng: &mut R) {
    let n = encoding.len();
    if n == 0 {
        return;
    }
    let col = rng.random_range(0..n);
    encoding[col] = rng.random_range(0..n);
}

/// Swap mutation: exchange the rows of two distinct random columns.
pub fn swap_mutation<R: Rng>(encoding: &mut [usize], rng: &mut R) {
    let n = encoding.len();
    if n < 2 {
        return;
    }
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n - 1);
    if j >= i {
        j += 1;
    }
    encoding.swap(i, j);
}

// ============================================================================
// Tests
// ============================================================================
