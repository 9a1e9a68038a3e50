//! Dense-matrix helpers used by the decomposition and its checks

pub mod matrix;
pub mod norms;
pub mod pivoting;
pub mod validation;

pub use matrix::{eye, mat_sub, matmul, transpose};
pub use norms::{norm_2, norm_frobenius, norm_max};
pub use pivoting::swap_rows;
pub use validation::{is_orthogonal, satisfies_penrose};
