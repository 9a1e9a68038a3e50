//! Pseudoinverse and one-shot least-squares solves

use mdarray::DTensor;
use crate::cod::solve::solve_unchecked;
use crate::cod::{decompose_with_config, solve, Cod};
use crate::config::CodConfig;
use crate::error::CodError;
use crate::precision::Precision;
use crate::utils::eye;

/// Moore–Penrose pseudoinverse (n × m) of an m × n matrix
///
/// Decomposes `matrix` and solves against the m × m identity.
///
/// # Example
/// ```
/// use cod_solve::{pseudoinverse, DTensor};
///
/// let a = DTensor::<f64, 2>::from_fn([2, 2], |idx| if idx[0] == idx[1] { 2.0 } else { 0.0 });
/// let a_pinv = pseudoinverse(&a, 1e-6).unwrap();
/// assert!((a_pinv[[0, 0]] - 0.5).abs() < 1e-12);
/// ```
pub fn pseudoinverse<T: Precision>(
    matrix: &DTensor<T, 2>,
    tolerance: T,
) -> Result<DTensor<T, 2>, CodError> {
    pseudoinverse_with_config(matrix, &CodConfig::new(tolerance))
}

pub fn pseudoinverse_with_config<T: Precision>(
    matrix: &DTensor<T, 2>,
    config: &CodConfig<T>,
) -> Result<DTensor<T, 2>, CodError> {
    let cod = decompose_with_config(matrix, config)?;
    Ok(pseudoinverse_from_cod(&cod))
}

pub(crate) fn pseudoinverse_from_cod<T: Precision>(cod: &Cod<T>) -> DTensor<T, 2> {
    solve_unchecked(cod, &eye(cod.rows()))
}

/// Least-squares / minimum-norm solution of `matrix · X = rhs`
///
/// Equivalent to `decompose(matrix, tolerance)?.solve(rhs)`.
pub fn lstsq<T: Precision>(
    matrix: &DTensor<T, 2>,
    rhs: &DTensor<T, 2>,
    tolerance: T,
) -> Result<DTensor<T, 2>, CodError> {
    lstsq_with_config(matrix, rhs, &CodConfig::new(tolerance))
}

pub fn lstsq_with_config<T: Precision>(
    matrix: &DTensor<T, 2>,
    rhs: &DTensor<T, 2>,
    config: &CodConfig<T>,
) -> Result<DTensor<T, 2>, CodError> {
    let (m, _) = *matrix.shape();
    let (rhs_rows, _) = *rhs.shape();
    if m != rhs_rows {
        return Err(CodError::DimensionMismatch {
            expected: m,
            found: rhs_rows,
        });
    }
    let cod = decompose_with_config(matrix, config)?;
    solve(&cod, rhs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_pseudoinverse_scaled_identity() {
        let a = DTensor::<f64, 2>::from_fn([2, 2], |idx| if idx[0] == idx[1] { 2.0 } else { 0.0 });
        let x = pseudoinverse(&a, 1e-6).unwrap();

        assert_abs_diff_eq!(x[[0, 0]], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(x[[0, 1]], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(x[[1, 0]], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(x[[1, 1]], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_pseudoinverse_zero_matrix() {
        let a = DTensor::<f64, 2>::from_elem([2, 3], 0.0);
        let x = pseudoinverse(&a, 1e-6).unwrap();

        assert_eq!(*x.shape(), (3, 2));
        for i in 0..3 {
            for j in 0..2 {
                assert_eq!(x[[i, j]], 0.0);
            }
        }
    }

    #[test]
    fn test_lstsq_dimension_mismatch_before_decomposition() {
        let a = DTensor::<f64, 2>::from_elem([3, 2], 1.0);
        let b = DTensor::<f64, 2>::from_elem([2, 1], 1.0);
        assert_eq!(
            lstsq(&a, &b, 1e-6).unwrap_err(),
            CodError::DimensionMismatch {
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn test_method_form_matches_function() {
        let a = DTensor::<f64, 2>::from_fn([3, 2], |idx| [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0]][idx[0]][idx[1]]);
        let cod = crate::cod::decompose(&a, 1e-6).unwrap();

        let x1 = cod.pseudoinverse();
        let x2 = pseudoinverse(&a, 1e-6).unwrap();

        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(x1[[i, j]], x2[[i, j]]);
            }
        }
    }
}
