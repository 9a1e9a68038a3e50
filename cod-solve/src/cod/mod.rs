//! Complete orthogonal decomposition with row pivoting
//!
//! The decomposition factors `P·A = Q2ᵀ·T·Q1ᵀ`, where `P` is a row
//! permutation, `Q1` and `Q2` are products of Householder reflectors and
//! `T` holds a lower-triangular `rank × rank` block `L`. Everything except
//! `P` is stored packed in a single matrix of the input's shape.

pub mod decompose;
pub mod factors;
pub(crate) mod householder;
pub mod solve;

pub use decompose::{decompose, decompose_with_config};
pub use solve::solve;

use crate::precision::Precision;
use mdarray::DTensor;

/// Result of a complete orthogonal decomposition
///
/// Packed layout of `factors` (m × n, `delta = m - rank`):
/// - row `k < rank`, columns `k+1..n`: tail of the first-pass reflector `k`
///   (its head is `v1[k]`)
/// - rows `k..k+delta`, column `k < rank`: tail of the second-pass
///   reflector `k` (its head is `v2[k]`), only when `delta > 0`
/// - rows `delta..m`, columns `0..rank`, on and below the diagonal: the
///   lower-triangular factor `L`
///
/// The value is immutable once built; solving only reads it.
#[derive(Debug, Clone)]
pub struct Cod<T: Precision> {
    pub(crate) factors: DTensor<T, 2>,
    pub(crate) rank: usize,
    pub(crate) v1: DTensor<T, 1>,
    pub(crate) v2: Option<DTensor<T, 1>>,
    pub(crate) permutation: Vec<usize>,
    pub(crate) tolerance: T,
}

impl<T: Precision> Cod<T> {
    /// Packed factors (see the type-level docs for the layout)
    pub fn factors(&self) -> &DTensor<T, 2> {
        &self.factors
    }

    /// Effective numerical rank
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// First-pass reflector heads; only the first `rank` entries are used
    pub fn v1(&self) -> &DTensor<T, 1> {
        &self.v1
    }

    /// Second-pass reflector heads, present iff `delta() > 0`
    pub fn v2(&self) -> Option<&DTensor<T, 1>> {
        self.v2.as_ref()
    }

    /// `permutation[k]` is the row swapped into position `k` while pivoting
    pub fn permutation(&self) -> &[usize] {
        &self.permutation
    }

    /// Tolerance the rank was determined against
    pub fn tolerance(&self) -> T {
        self.tolerance
    }

    pub fn rows(&self) -> usize {
        self.factors.shape().0
    }

    pub fn cols(&self) -> usize {
        self.factors.shape().1
    }

    /// Number of rows found linearly dependent (`rows - rank`)
    pub fn delta(&self) -> usize {
        self.rows() - self.rank
    }

    pub fn is_full_rank(&self) -> bool {
        self.rank == self.rows().min(self.cols())
    }

    /// Tail of the first-pass reflector `k`: `factors[k, k+1..n]`
    pub(crate) fn first_tail(&self, k: usize) -> Vec<T> {
        (k + 1..self.cols()).map(|j| self.factors[[k, j]]).collect()
    }

    /// Tail of the second-pass reflector `k`: `factors[k..k+delta, k]`
    pub(crate) fn second_tail(&self, k: usize) -> Vec<T> {
        (0..self.delta()).map(|i| self.factors[[k + i, k]]).collect()
    }

    /// Solve `A·X = rhs` in the least-squares / minimum-norm sense
    pub fn solve(&self, rhs: &DTensor<T, 2>) -> Result<DTensor<T, 2>, crate::CodError> {
        solve::solve(self, rhs)
    }

    /// Solve for a single right-hand-side vector
    pub fn solve_vec(&self, rhs: &[T]) -> Result<Vec<T>, crate::CodError> {
        solve::solve_vec(self, rhs)
    }

    /// Moore–Penrose pseudoinverse of the decomposed matrix (n × m)
    pub fn pseudoinverse(&self) -> DTensor<T, 2> {
        crate::pinv::pseudoinverse_from_cod(self)
    }
}
