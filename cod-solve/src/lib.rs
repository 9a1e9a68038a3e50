//! # cod-solve: Complete Orthogonal Decomposition
//!
//! A rank-revealing complete orthogonal decomposition (COD) of dense
//! rectangular matrices, built from row pivoting and two passes of
//! Householder reflections, and the least-squares / minimum-norm solver and
//! Moore–Penrose pseudoinverse built on top of it. Works for full-rank and
//! rank-deficient, square and rectangular input.
//!
//! Dense storage is provided by mdarray.

pub mod cod;
pub mod config;
pub mod error;
pub mod pinv;
pub mod precision;
pub mod utils;

pub use cod::{decompose, decompose_with_config, solve, Cod};
pub use config::{CodConfig, DEFAULT_TOLERANCE};
pub use error::CodError;
pub use pinv::{lstsq, lstsq_with_config, pseudoinverse, pseudoinverse_with_config};
pub use precision::Precision;
pub use utils::{eye, norm_2, norm_frobenius, norm_max, transpose};

// Re-export mdarray types
pub use mdarray::DTensor;

// Type aliases for convenience
pub type Matrix = DTensor<f64, 2>;
pub type Vector = DTensor<f64, 1>;
