//! Least-squares / minimum-norm solve from a decomposition

use super::householder::reflect_column;
use super::Cod;
use crate::error::CodError;
use crate::precision::Precision;
use crate::utils::swap_rows;
use mdarray::DTensor;

/// Solve `A·X = rhs` given the decomposition of `A`
///
/// Replays the decomposition on a scratch copy of `rhs`: the row swaps,
/// then the second-pass reflectors, then forward substitution with `L`,
/// and finally the first-pass reflectors in reverse order. Unknowns beyond
/// the rank are set to zero, which yields the minimum-norm least-squares
/// solution for rank-deficient systems.
///
/// # Arguments
/// * `cod` - Decomposition of the m × n matrix `A`
/// * `rhs` - Right-hand sides (m × p)
///
/// # Returns
/// * Solution `X` (n × p)
pub fn solve<T: Precision>(cod: &Cod<T>, rhs: &DTensor<T, 2>) -> Result<DTensor<T, 2>, CodError> {
    let (m, _) = *rhs.shape();
    if m != cod.rows() {
        return Err(CodError::DimensionMismatch {
            expected: cod.rows(),
            found: m,
        });
    }

    Ok(solve_unchecked(cod, rhs))
}

/// [`solve`] without the row-count check; `rhs` must have `cod.rows()` rows
pub(crate) fn solve_unchecked<T: Precision>(cod: &Cod<T>, rhs: &DTensor<T, 2>) -> DTensor<T, 2> {
    let (m, p) = *rhs.shape();
    let n = cod.cols();
    let rank = cod.rank();
    let delta = cod.delta();
    let factors = cod.factors();

    log::debug!(
        target: "cod_solve",
        "Solving {}x{} system (rank {}) for {} right-hand sides",
        m,
        n,
        rank,
        p
    );

    // Step 1: row pivoting, replayed in the order it was recorded
    let mut b = rhs.clone();
    for (k, &pk) in cod.permutation().iter().enumerate() {
        if pk != k {
            swap_rows(&mut b, k, pk);
        }
    }

    let first_tails: Vec<Vec<T>> = (0..rank).map(|k| cod.first_tail(k)).collect();
    let second_tails: Vec<Vec<T>> = match cod.v2() {
        Some(_) => (0..rank).map(|k| cod.second_tail(k)).collect(),
        None => Vec::new(),
    };

    let mut x = DTensor::<T, 2>::from_elem([n, p], T::zero());

    for c in 0..p {
        // Step 2: fold the dependent rows
        if let Some(v2) = cod.v2() {
            for k in (0..rank).rev() {
                reflect_column(v2[[k]], &second_tails[k], &mut b, c, k + delta, k);
            }
        }

        // Step 3: forward substitution with L; x[rank..] stays zero
        for i in 0..rank {
            let mut s = b[[i + delta, c]];
            for j in 0..i {
                s -= factors[[i + delta, j]] * x[[j, c]];
            }
            x[[i, c]] = s / factors[[i + delta, i]];
        }

        // Step 4: first-pass reflectors, last one first
        for k in (0..rank).rev() {
            reflect_column(cod.v1()[[k]], &first_tails[k], &mut x, c, k, k + 1);
        }
    }

    x
}

/// Solve for a single right-hand-side vector of length `rows`
pub fn solve_vec<T: Precision>(cod: &Cod<T>, rhs: &[T]) -> Result<Vec<T>, CodError> {
    let b = DTensor::<T, 2>::from_fn([rhs.len(), 1], |idx| rhs[idx[0]]);
    let x = solve(cod, &b)?;
    Ok((0..cod.cols()).map(|i| x[[i, 0]]).collect())
}
