//! Common test utilities

#![allow(dead_code)]

use mdarray::DTensor;

/// Simple deterministic pseudo-random number generator (LCG)
///
/// Uses the Numerical Recipes parameters: a = 1664525, c = 1013904223.
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next f64 in [0, 1)
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        ((self.state >> 16) as f64) / ((1u64 << 48) as f64)
    }

    /// Random m × n matrix with entries in [-1, 1)
    pub fn matrix(&mut self, m: usize, n: usize) -> DTensor<f64, 2> {
        let mut data = DTensor::<f64, 2>::from_elem([m, n], 0.0);
        for i in 0..m {
            for j in 0..n {
                data[[i, j]] = 2.0 * self.next_f64() - 1.0;
            }
        }
        data
    }
}

/// Build a matrix from row literals
pub fn from_rows<const N: usize>(rows: &[[f64; N]]) -> DTensor<f64, 2> {
    DTensor::<f64, 2>::from_fn([rows.len(), N], |idx| rows[idx[0]][idx[1]])
}

/// Largest absolute entry of `a - b`
pub fn max_abs_diff(a: &DTensor<f64, 2>, b: &DTensor<f64, 2>) -> f64 {
    assert_eq!(*a.shape(), *b.shape(), "shapes differ");
    let (m, n) = *a.shape();
    let mut max_val: f64 = 0.0;
    for i in 0..m {
        for j in 0..n {
            max_val = max_val.max((a[[i, j]] - b[[i, j]]).abs());
        }
    }
    max_val
}

/// Column `c` of a matrix as a Vec
pub fn column(a: &DTensor<f64, 2>, c: usize) -> Vec<f64> {
    (0..a.shape().0).map(|i| a[[i, c]]).collect()
}
