//! Log-beta via lgamma.

use crate::traits::FloatScalar;
use super::gamma_fn::lgamma;

/// Natural logarithm of the beta function, ln B(a, b).
///
/// Computed as `lgamma(a) + lgamma(b) − lgamma(a+b)`, which stays finite
/// long after B(a, b) itself underflows.
///
/// # Example
///
/// ```
/// use betainv::special::lbeta;
///
/// // ln B(1, 1) = 0
/// assert!(lbeta(1.0_f64, 1.0).abs() < 1e-14);
///
/// // B(1000, 1000) underflows, its log does not
/// assert!(lbeta(1000.0_f64, 1000.0).is_finite());
/// ```
pub fn lbeta<T: FloatScalar>(a: T, b: T) -> T {
    lgamma(a) + lgamma(b) - lgamma(a + b)
}
