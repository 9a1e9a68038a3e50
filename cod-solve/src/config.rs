//! Decomposition configuration

use crate::error::CodError;
use crate::precision::Precision;

/// Tolerance used when none is given
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Configuration for the complete orthogonal decomposition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CodConfig<T: Precision> {
    /// Absolute threshold on a pivot row's norm below which the row is
    /// treated as linearly dependent on the rows already processed
    pub tolerance: T,
}

impl<T: Precision> CodConfig<T> {
    pub fn new(tolerance: T) -> Self {
        Self { tolerance }
    }

    /// Reject tolerances that are not strictly positive and finite
    pub fn validate(&self) -> Result<(), CodError> {
        let tol = self.tolerance;
        if !tol.is_finite() || tol <= T::zero() {
            return Err(CodError::InvalidTolerance(format!(
                "Tolerance must be positive and finite, got {}",
                tol.as_f64()
            )));
        }
        Ok(())
    }
}

impl<T: Precision> Default for CodConfig<T> {
    fn default() -> Self {
        Self::new(T::from_f64(DEFAULT_TOLERANCE))
    }
}
