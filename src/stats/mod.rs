//! The Beta distribution on [0, 1]: density, CDF, and quantile function.
//!
//! [`Beta`] implements [`ContinuousDistribution`]; the free functions
//! [`beta_cdf_at`], [`beta_pdf_at`], and [`beta_inv_cdf_for`] validate the
//! shape parameters and evaluate once with default settings.
//!
//! # Quantile algorithm
//!
//! 1. Initial guess: the mean α/(α+β), or for p < 0.1 the small-x series
//!    x ≈ (p·α·B(α,β))^{1/α}·(1−x)^{−(β−1)/α}, capped at the mean.
//! 2. Coarse [`bisect`] on [0, 1] with loose tolerances.
//! 3. Damped Newton refinement with a second-order (Cornish-Fisher type)
//!    correction, kept strictly inside (0, 1).
//!
//! For p > 0.5 the problem is solved for Beta(β, α) at 1 − p.
//!
//! # Example
//!
//! ```
//! use betainv::stats::{Beta, ContinuousDistribution};
//!
//! let b = Beta::new(2.0_f64, 2.0).unwrap();
//! assert!((b.cdf(0.5).unwrap() - 0.5).abs() < 1e-14);
//! assert!((b.quantile(0.5).unwrap() - 0.5).abs() < 1e-12);
//! ```

mod beta_dist;
mod quantile;


pub use beta_dist::{beta_cdf, beta_cdf_at, beta_inv_cdf_for, beta_pdf_at, Beta};
pub use quantile::{bisect, QuantileSettings};

use core::fmt;

use crate::special::{CfSettings, SpecialError};

/// Errors from Beta distribution evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatsError<T> {
    /// A shape parameter is not a finite, strictly positive number.
    InvalidParameter,
    /// A probability lies outside [0, 1] or is NaN.
    InvalidProbability,
    /// The evaluation point is NaN.
    InvalidArgument,
    /// The incomplete beta function failed.
    Special(SpecialError),
    /// Quantile refinement did not reach its tolerance.
    NotConverged {
        /// Last iterate, always in [0, 1].
        estimate: T,
        /// Refinement iterations performed.
        iterations: usize,
    },
}

impl<T> StatsError<T> {
    /// True for caller-input mistakes (bad α, β, p, or x).
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter | Self::InvalidProbability | Self::InvalidArgument
        )
    }
}

impl<T: Copy> StatsError<T> {
    /// Best estimate carried by a [`StatsError::NotConverged`], if any.
    pub fn estimate(&self) -> Option<T> {
        match *self {
            Self::NotConverged { estimate, .. } => Some(estimate),
            _ => None,
        }
    }
}

impl<T> From<SpecialError> for StatsError<T> {
    fn from(e: SpecialError) -> Self {
        Self::Special(e)
    }
}

impl<T: fmt::Display> fmt::Display for StatsError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter => write!(f, "shape parameters must be finite and positive"),
            Self::InvalidProbability => write!(f, "probability must lie in [0, 1]"),
            Self::InvalidArgument => write!(f, "evaluation point is NaN"),
            Self::Special(e) => write!(f, "incomplete beta: {e}"),
            Self::NotConverged {
                estimate,
                iterations,
            } => write!(
                f,
                "quantile did not converge after {iterations} iterations (last estimate {estimate})"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl<T: fmt::Debug + fmt::Display> std::error::Error for StatsError<T> {}

/// All tunables of a [`Beta`] distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BetaSettings<T> {
    /// Continued fraction behind the CDF.
    pub cf: CfSettings<T>,
    /// Quantile search.
    pub quantile: QuantileSettings<T>,
}

impl Default for BetaSettings<f64> {
    fn default() -> Self {
        Self {
            cf: CfSettings::default(),
            quantile: QuantileSettings::default(),
        }
    }
}

impl Default for BetaSettings<f32> {
    fn default() -> Self {
        Self {
            cf: CfSettings::default(),
            quantile: QuantileSettings::default(),
        }
    }
}

/// Trait for continuous probability distributions.
pub trait ContinuousDistribution<T> {
    /// Probability density function.
    fn pdf(&self, x: T) -> T;
    /// Natural log of the probability density function.
    fn ln_pdf(&self, x: T) -> T;
    /// Cumulative distribution function P(X ≤ x).
    fn cdf(&self, x: T) -> Result<T, StatsError<T>>;
    /// Quantile function (inverse CDF). Returns x such that P(X ≤ x) = p.
    fn quantile(&self, p: T) -> Result<T, StatsError<T>>;
}
