//! Row pivoting utilities

use mdarray::DTensor;

/// Swap two full rows of a matrix in place
pub fn swap_rows<T: Copy>(matrix: &mut DTensor<T, 2>, a: usize, b: usize) {
    if a == b {
        return;
    }
    let n = matrix.shape().1;
    for j in 0..n {
        let temp = matrix[[a, j]];
        matrix[[a, j]] = matrix[[b, j]];
        matrix[[b, j]] = temp;
    }
}
