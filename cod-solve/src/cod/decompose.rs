//! Row-pivoted two-pass Householder reduction

use super::householder::{reflect_column, reflect_row, reflector_head};
use super::Cod;
use crate::config::CodConfig;
use crate::error::CodError;
use crate::precision::Precision;
use crate::utils::swap_rows;
use mdarray::DTensor;

/// Index of the largest entry in `norms[from..]`; ties keep the lowest index
fn argmax_from<T: Precision>(norms: &[T], from: usize) -> usize {
    let mut max_idx = from;
    for i in (from + 1)..norms.len() {
        if norms[i] > norms[max_idx] {
            max_idx = i;
        }
    }
    max_idx
}

/// Complete orthogonal decomposition of `matrix` with an absolute tolerance
///
/// See [`decompose_with_config`].
pub fn decompose<T: Precision>(
    matrix: &DTensor<T, 2>,
    tolerance: T,
) -> Result<Cod<T>, CodError> {
    decompose_with_config(matrix, &CodConfig::new(tolerance))
}

/// Complete orthogonal decomposition with row pivoting
///
/// The first pass reduces the rows of a private copy of `matrix`, largest
/// remaining row first, with Householder reflectors acting on the columns.
/// It stops as soon as the largest remaining row norm drops below
/// `config.tolerance`; the number of processed rows is the rank. When rows
/// are left over, a second pass of reflectors acting on the rows folds them
/// into a lower-triangular `rank × rank` block.
///
/// # Errors
/// * [`CodError::InvalidTolerance`] if the tolerance is not positive and finite
/// * [`CodError::EmptyMatrix`] if the matrix has no rows or no columns
pub fn decompose_with_config<T: Precision>(
    matrix: &DTensor<T, 2>,
    config: &CodConfig<T>,
) -> Result<Cod<T>, CodError> {
    config.validate()?;

    let (m, n) = *matrix.shape();
    if m == 0 || n == 0 {
        return Err(CodError::EmptyMatrix { rows: m, cols: n });
    }

    let mut factors = matrix.clone();
    let max_rank = m.min(n);
    let mut permutation: Vec<usize> = (0..max_rank).collect();
    let mut v1 = DTensor::<T, 1>::from_elem([m], T::zero());

    // Squared row norms, deflated as columns are eliminated
    let mut norms2: Vec<T> = (0..m)
        .map(|i| {
            let mut sum = T::zero();
            for j in 0..n {
                sum += factors[[i, j]] * factors[[i, j]];
            }
            sum
        })
        .collect();

    let tol2 = config.tolerance * config.tolerance;
    let mut rank = 0;

    for k in 0..max_rank {
        let pvt = argmax_from(&norms2, k);
        if pvt != k {
            permutation[k] = pvt;
            norms2.swap(k, pvt);
            swap_rows(&mut factors, k, pvt);
        }

        if norms2[k] < tol2 {
            log::warn!(
                target: "cod_solve",
                "Rank deficient {}x{} matrix, rank {}",
                m,
                n,
                rank
            );
            break;
        }
        rank += 1;

        let reflector = reflector_head(factors[[k, k]], norms2[k].sqrt());
        factors[[k, k]] = reflector.pivot;
        v1[[k]] = reflector.head;
        for j in (k + 1)..n {
            factors[[k, j]] /= reflector.scale;
        }

        let tail: Vec<T> = (k + 1..n).map(|j| factors[[k, j]]).collect();
        for i in (k + 1)..m {
            reflect_row(reflector.head, &tail, &mut factors, i, k, k + 1);
            norms2[i] -= factors[[i, k]] * factors[[i, k]];
        }
    }

    let delta = m - rank;
    let v2 = if delta > 0 {
        log::debug!(
            target: "cod_solve",
            "Folding {} dependent rows into the {}x{} triangular block",
            delta,
            rank,
            rank
        );
        Some(fold_dependent_rows(&mut factors, rank, delta))
    } else {
        None
    };

    Ok(Cod {
        factors,
        rank,
        v1,
        v2,
        permutation,
        tolerance: config.tolerance,
    })
}

/// Second Householder pass
///
/// For `k = rank-1` down to `0`, eliminates `factors[k..k+delta, k]` into
/// `factors[k+delta, k]` and applies the reflector to every column left of
/// `k`. The reflector tail overwrites the eliminated entries.
fn fold_dependent_rows<T: Precision>(
    factors: &mut DTensor<T, 2>,
    rank: usize,
    delta: usize,
) -> DTensor<T, 1> {
    let mut v2 = DTensor::<T, 1>::from_elem([rank], T::zero());

    for k in (0..rank).rev() {
        let mut norm2 = T::zero();
        for i in 0..=delta {
            norm2 += factors[[k + i, k]] * factors[[k + i, k]];
        }

        let reflector = reflector_head(factors[[k + delta, k]], norm2.sqrt());
        factors[[k + delta, k]] = reflector.pivot;
        v2[[k]] = reflector.head;
        for i in 0..delta {
            factors[[k + i, k]] /= reflector.scale;
        }

        let tail: Vec<T> = (0..delta).map(|i| factors[[k + i, k]]).collect();
        for j in 0..k {
            reflect_column(reflector.head, &tail, factors, j, k + delta, k);
        }
    }

    v2
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn from_rows<const N: usize>(rows: &[[f64; N]]) -> DTensor<f64, 2> {
        DTensor::<f64, 2>::from_fn([rows.len(), N], |idx| rows[idx[0]][idx[1]])
    }

    #[test]
    fn test_argmax_ties_keep_lowest() {
        assert_eq!(argmax_from(&[1.0, 3.0, 3.0, 2.0], 0), 1);
        assert_eq!(argmax_from(&[5.0, 1.0, 1.0], 1), 1);
        assert_eq!(argmax_from(&[5.0, 1.0, 4.0], 2), 2);
    }

    #[test]
    fn test_decompose_diagonal() {
        let a = from_rows(&[[2.0, 0.0], [0.0, 3.0]]);
        let cod = decompose(&a, 1e-6).unwrap();

        assert_eq!(cod.rank(), 2);
        assert_eq!(cod.delta(), 0);
        assert!(cod.v2().is_none());
        // Row 1 has the larger norm and is pivoted first
        assert_eq!(cod.permutation(), &[1, 1]);
        assert_abs_diff_eq!(cod.factors()[[0, 0]].abs(), 3.0, epsilon = 1e-14);
        assert_abs_diff_eq!(cod.factors()[[1, 1]].abs(), 2.0, epsilon = 1e-14);
    }

    #[test]
    fn test_decompose_rank_one() {
        let a = from_rows(&[[1.0, 2.0], [2.0, 4.0]]);
        let cod = decompose(&a, 1e-6).unwrap();

        assert_eq!(cod.rank(), 1);
        assert_eq!(cod.delta(), 1);
        assert_eq!(cod.v2().map(|v| v.len()), Some(1));
        assert!(!cod.is_full_rank());
    }

    #[test]
    fn test_decompose_does_not_mutate_input() {
        let a = from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let before = a.clone();
        let _ = decompose(&a, 1e-6).unwrap();

        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(a[[i, j]], before[[i, j]]);
            }
        }
    }

    #[test]
    fn test_decompose_zero_matrix() {
        let a = DTensor::<f64, 2>::from_elem([3, 2], 0.0);
        let cod = decompose(&a, 1e-6).unwrap();

        assert_eq!(cod.rank(), 0);
        assert_eq!(cod.delta(), 3);
        assert_eq!(cod.v2().map(|v| v.len()), Some(0));
    }

    #[test]
    fn test_decompose_rejects_empty_matrix() {
        let a = DTensor::<f64, 2>::from_elem([0, 3], 0.0);
        let err = decompose(&a, 1e-6).unwrap_err();
        assert_eq!(err, CodError::EmptyMatrix { rows: 0, cols: 3 });
    }

    #[test]
    fn test_decompose_rejects_bad_tolerance() {
        let a = from_rows(&[[1.0]]);
        assert!(matches!(
            decompose(&a, 0.0),
            Err(CodError::InvalidTolerance(_))
        ));
        assert!(matches!(
            decompose(&a, -1.0),
            Err(CodError::InvalidTolerance(_))
        ));
    }

    #[test]
    fn test_second_pass_packs_lower_triangle() {
        // 3x2 full column rank: one leftover row is folded away
        let a = from_rows(&[[0.0, 1.0], [1.0, 1.0], [1.0, 0.0]]);
        let cod = decompose(&a, 1e-6).unwrap();

        assert_eq!(cod.rank(), 2);
        assert_eq!(cod.delta(), 1);
        // Diagonal of L lives at rows delta.., both entries nonzero
        assert!(cod.factors()[[1, 0]].abs() > 1e-8);
        assert!(cod.factors()[[2, 1]].abs() > 1e-8);
    }
}
