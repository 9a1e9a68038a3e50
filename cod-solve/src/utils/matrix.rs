//! Small dense-matrix constructors and products

use mdarray::DTensor;
use crate::precision::Precision;

/// Identity matrix of size n × n
pub fn eye<T: Precision>(n: usize) -> DTensor<T, 2> {
    DTensor::<T, 2>::from_fn([n, n], |idx| {
        if idx[0] == idx[1] {
            T::one()
        } else {
            T::zero()
        }
    })
}

/// Matrix transpose
pub fn transpose<T: Precision>(matrix: &DTensor<T, 2>) -> DTensor<T, 2> {
    let (m, n) = *matrix.shape();
    DTensor::<T, 2>::from_fn([n, m], |idx| matrix[[idx[1], idx[0]]])
}

/// Matrix multiplication
///
/// # Panics
/// If the inner dimensions differ.
pub fn matmul<T: Precision>(a: &DTensor<T, 2>, b: &DTensor<T, 2>) -> DTensor<T, 2> {
    let (m, k1) = *a.shape();
    let (k2, n) = *b.shape();
    assert_eq!(k1, k2, "Matrix dimensions incompatible for multiplication");

    DTensor::<T, 2>::from_fn([m, n], |idx| {
        let mut sum = T::zero();
        for k in 0..k1 {
            sum += a[[idx[0], k]] * b[[k, idx[1]]];
        }
        sum
    })
}

/// Elementwise difference `a - b`
///
/// # Panics
/// If the shapes differ.
pub fn mat_sub<T: Precision>(a: &DTensor<T, 2>, b: &DTensor<T, 2>) -> DTensor<T, 2> {
    let shape_a = *a.shape();
    let shape_b = *b.shape();
    assert_eq!(shape_a, shape_b, "Matrix dimensions must match for subtraction");

    DTensor::<T, 2>::from_fn([shape_a.0, shape_a.1], |idx| a[[idx[0], idx[1]]] - b[[idx[0], idx[1]]])
}
