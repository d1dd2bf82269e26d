use core::fmt::Debug;
use num_traits::{Float, NumCast};

/// Trait for the real floating-point types accepted by this crate.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32` and `f64`.
pub trait FloatScalar: Float + Debug {}

impl<T: Float + Debug> FloatScalar for T {}

/// Convert an `f64` constant into `T`.
///
/// Exact for `f64`, rounded for `f32`. A cast that cannot be represented
/// yields NaN, which every caller treats as a failed comparison.
#[inline]
pub(crate) fn lit<T: FloatScalar>(v: f64) -> T {
    <T as NumCast>::from(v).unwrap_or_else(T::nan)
}
