//! Householder reflection utilities for the complete orthogonal decomposition
//!
//! A reflector is `H = I - 2 v vᵀ` with `‖v‖ = 1`. It is stored packed as a
//! scalar `head` (the component of `v` at the pivot position) plus a `tail`
//! slice holding the remaining components, which lets both reflector
//! families share the same kernels whatever their orientation in storage.

use mdarray::DTensor;
use crate::precision::Precision;

/// Result of the sign-stable reflector construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ReflectorHead<T> {
    /// Normalized head component of the Householder vector
    pub head: T,
    /// Value that replaces the pivot entry (`∓‖x‖`)
    pub pivot: T,
    /// Divisor that normalizes the Householder vector; the tail entries
    /// must be divided by it
    pub scale: T,
}

/// Build the head of a reflector mapping `x` onto a multiple of the pivot axis
///
/// `pivot` is the entry of `x` at the pivot position and `norm = ‖x‖`. The
/// head is formed as `pivot ± norm` with the sign of `pivot`, so the two
/// terms never cancel. The normalized head is always positive.
pub(crate) fn reflector_head<T: Precision>(pivot: T, norm: T) -> ReflectorHead<T> {
    let two = T::from_f64(2.0);
    if pivot > T::zero() {
        let v = pivot + norm;
        let scale = (two * norm * v).sqrt();
        ReflectorHead {
            head: v / scale,
            pivot: -norm,
            scale,
        }
    } else {
        let v = pivot - norm;
        let scale = -(-two * norm * v).sqrt();
        ReflectorHead {
            head: v / scale,
            pivot: norm,
            scale,
        }
    }
}

/// Apply a reflector to a segment of one row of `mat`
///
/// The head acts on `mat[row, head_col]` and the tail on
/// `mat[row, tail_col..tail_col + tail.len()]`.
pub(crate) fn reflect_row<T: Precision>(
    head: T,
    tail: &[T],
    mat: &mut DTensor<T, 2>,
    row: usize,
    head_col: usize,
    tail_col: usize,
) {
    let mut sum = head * mat[[row, head_col]];
    for (j, &v) in tail.iter().enumerate() {
        sum += v * mat[[row, tail_col + j]];
    }
    let sum = sum + sum;

    mat[[row, head_col]] -= sum * head;
    for (j, &v) in tail.iter().enumerate() {
        mat[[row, tail_col + j]] -= sum * v;
    }
}

/// Apply a reflector to a segment of one column of `mat`
///
/// The head acts on `mat[head_row, col]` and the tail on
/// `mat[tail_row..tail_row + tail.len(), col]`.
pub(crate) fn reflect_column<T: Precision>(
    head: T,
    tail: &[T],
    mat: &mut DTensor<T, 2>,
    col: usize,
    head_row: usize,
    tail_row: usize,
) {
    let mut sum = head * mat[[head_row, col]];
    for (i, &v) in tail.iter().enumerate() {
        sum += v * mat[[tail_row + i, col]];
    }
    let sum = sum + sum;

    mat[[head_row, col]] -= sum * head;
    for (i, &v) in tail.iter().enumerate() {
        mat[[tail_row + i, col]] -= sum * v;
    }
}
