//! Error types for decomposition and solve

/// Contract violations reported at the call boundary
///
/// Numerical rank deficiency is not an error; it shows up as
/// [`Cod::rank`](crate::Cod::rank) being smaller than `min(rows, cols)`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CodError {
    #[error("Matrix is empty ({rows}x{cols})")]
    EmptyMatrix { rows: usize, cols: usize },

    #[error("Invalid tolerance: {0}")]
    InvalidTolerance(String),

    #[error("Dimension mismatch: expected {expected} rows, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
}
