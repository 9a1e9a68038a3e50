//! Vector and matrix norm computations

use mdarray::DTensor;
use crate::precision::Precision;

/// Euclidean norm of a vector
pub fn norm_2<T: Precision>(vec: &[T]) -> T {
    let mut sum = T::zero();
    for &val in vec {
        sum += val * val;
    }
    sum.sqrt()
}

/// Frobenius norm of a matrix
pub fn norm_frobenius<T: Precision>(mat: &DTensor<T, 2>) -> T {
    let (m, n) = *mat.shape();
    let mut sum = T::zero();
    for i in 0..m {
        for j in 0..n {
            let val = mat[[i, j]];
            sum += val * val;
        }
    }
    sum.sqrt()
}

/// Largest absolute entry of a matrix
pub fn norm_max<T: Precision>(mat: &DTensor<T, 2>) -> T {
    let (m, n) = *mat.shape();
    let mut max_val = T::zero();
    for i in 0..m {
        for j in 0..n {
            let abs_val = mat[[i, j]].abs();
            if abs_val > max_val {
                max_val = abs_val;
            }
        }
    }
    max_val
}
