//! Explicit factors of a packed decomposition
//!
//! With `L1 = P·A·Q1` the lower-trapezoidal output of the first pass and
//! `T = Q2·L1`, the matrix is recovered as `A = Pᵀ·Q2ᵀ·T·Q1ᵀ`.

use super::householder::{reflect_column, reflect_row};
use super::Cod;
use crate::precision::Precision;
use crate::utils::{eye, swap_rows};
use mdarray::DTensor;

impl<T: Precision> Cod<T> {
    /// Row permutation `P` (m × m) such that `P·A` has the pivoted row order
    pub fn permutation_matrix(&self) -> DTensor<T, 2> {
        let mut p = eye(self.rows());
        for (k, &pk) in self.permutation.iter().enumerate() {
            if pk != k {
                swap_rows(&mut p, k, pk);
            }
        }
        p
    }

    /// Product of the first-pass reflectors, `Q1 = H_0·H_1·…·H_{rank-1}` (n × n)
    pub fn q1(&self) -> DTensor<T, 2> {
        let n = self.cols();
        let mut q = eye(n);
        for k in 0..self.rank {
            let tail = self.first_tail(k);
            for row in 0..n {
                reflect_row(self.v1[[k]], &tail, &mut q, row, k, k + 1);
            }
        }
        q
    }

    /// Product of the second-pass reflectors, `Q2 = G_0·G_1·…·G_{rank-1}` (m × m)
    ///
    /// The identity when no rows were found dependent.
    pub fn q2(&self) -> DTensor<T, 2> {
        let m = self.rows();
        let mut q = eye(m);
        if let Some(v2) = &self.v2 {
            let delta = self.delta();
            for k in (0..self.rank).rev() {
                let tail = self.second_tail(k);
                for col in 0..m {
                    reflect_column(v2[[k]], &tail, &mut q, col, k + delta, k);
                }
            }
        }
        q
    }

    /// Lower-triangular factor `L` (rank × rank)
    pub fn lower_factor(&self) -> DTensor<T, 2> {
        let delta = self.delta();
        DTensor::<T, 2>::from_fn([self.rank, self.rank], |idx| {
            if idx[1] <= idx[0] {
                self.factors[[idx[0] + delta, idx[1]]]
            } else {
                T::zero()
            }
        })
    }

    /// `T` (m × n): `L` at rows `delta..m`, columns `0..rank`, zero elsewhere
    pub fn triangular_block(&self) -> DTensor<T, 2> {
        let delta = self.delta();
        let rank = self.rank;
        DTensor::<T, 2>::from_fn([self.rows(), self.cols()], |idx| {
            let (i, j) = (idx[0], idx[1]);
            if i >= delta && j < rank && j <= i - delta {
                self.factors[[i, j]]
            } else {
                T::zero()
            }
        })
    }

    /// Rebuild `A` (m × n) by replaying the stored transformations on `T`
    ///
    /// Matches the original matrix up to the rank tolerance.
    pub fn reconstruct(&self) -> DTensor<T, 2> {
        let (m, n) = (self.rows(), self.cols());
        let delta = self.delta();
        let mut a = self.triangular_block();

        if let Some(v2) = &self.v2 {
            for k in 0..self.rank {
                let tail = self.second_tail(k);
                for col in 0..n {
                    reflect_column(v2[[k]], &tail, &mut a, col, k + delta, k);
                }
            }
        }

        for k in (0..self.rank).rev() {
            let tail = self.first_tail(k);
            for row in 0..m {
                reflect_row(self.v1[[k]], &tail, &mut a, row, k, k + 1);
            }
        }

        for (k, &pk) in self.permutation.iter().enumerate().rev() {
            if pk != k {
                swap_rows(&mut a, k, pk);
            }
        }
        a
    }
}
