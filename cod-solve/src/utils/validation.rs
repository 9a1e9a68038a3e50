//! Result validation utilities

use mdarray::DTensor;
use crate::precision::Precision;
use super::matrix::{mat_sub, matmul, transpose};
use super::norms::norm_max;

/// Check if the columns of a matrix are orthonormal (`Mᵀ·M = I`)
pub fn is_orthogonal<T: Precision>(matrix: &DTensor<T, 2>, tolerance: T) -> bool {
    let (rows, k) = *matrix.shape();

    for i in 0..k {
        for j in 0..k {
            let mut sum = T::zero();
            for row in 0..rows {
                sum += matrix[[row, i]] * matrix[[row, j]];
            }
            let expected = if i == j { T::one() } else { T::zero() };
            if (sum - expected).abs() > tolerance {
                return false;
            }
        }
    }

    true
}

/// Check the four Moore–Penrose conditions for `x = a⁺`
///
/// Each residual is measured by its largest absolute entry:
/// 1. `a·x·a = a`
/// 2. `x·a·x = x`
/// 3. `(a·x)ᵀ = a·x`
/// 4. `(x·a)ᵀ = x·a`
pub fn satisfies_penrose<T: Precision>(a: &DTensor<T, 2>, x: &DTensor<T, 2>, tolerance: T) -> bool {
    let (m, n) = *a.shape();
    if *x.shape() != (n, m) {
        return false;
    }

    let ax = matmul(a, x);
    let xa = matmul(x, a);

    let residuals = [
        norm_max(&mat_sub(&matmul(&ax, a), a)),
        norm_max(&mat_sub(&matmul(&xa, x), x)),
        norm_max(&mat_sub(&transpose(&ax), &ax)),
        norm_max(&mat_sub(&transpose(&xa), &xa)),
    ];

    residuals.iter().all(|&r| r <= tolerance)
}
