//! Scalar types accepted by the decomposition

use num_traits::Float;
use std::fmt::Debug;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

/// Trait for the real scalar types the decomposition runs on
///
/// Everything numeric comes from `num_traits::Float`; this trait only adds
/// the in-place operators used by the reflector kernels and lossless
/// conversion to and from `f64` for constants and diagnostics.
pub trait Precision:
    Float + AddAssign + SubAssign + MulAssign + DivAssign + Debug + Default + Send + Sync + 'static
{
    /// Convert an `f64` constant into this precision
    fn from_f64(x: f64) -> Self;

    /// Convert to `f64` (for error messages and logging)
    fn as_f64(self) -> f64;
}

impl Precision for f64 {
    #[inline]
    fn from_f64(x: f64) -> f64 {
        x
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self
    }
}

impl Precision for f32 {
    #[inline]
    fn from_f64(x: f64) -> f32 {
        x as f32
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self as f64
    }
}
