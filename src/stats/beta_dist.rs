use crate::FloatScalar;
use crate::special::{betainc_with, lbeta};
use super::{quantile, BetaSettings, ContinuousDistribution, StatsError};

/// Beta distribution with shape parameters α and β on [0, 1].
///
/// f(x) = x^{α−1} (1−x)^{β−1} / B(α, β) for 0 < x < 1.
///
/// Parameters are validated once at construction and never change.
///
/// # Example
///
/// ```
/// use betainv::stats::{Beta, ContinuousDistribution};
///
/// let b = Beta::new(2.0_f64, 5.0).unwrap();
/// let x = b.quantile(0.9).unwrap();
/// assert!((b.cdf(x).unwrap() - 0.9).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Beta<T> {
    alpha: T,
    beta: T,
    settings: BetaSettings<T>,
}

impl<T: FloatScalar> Beta<T> {
    /// Create a Beta distribution with shape parameters `alpha` and `beta`
    /// and the default settings for `T`. Requires both finite and > 0.
    pub fn new(alpha: T, beta: T) -> Result<Self, StatsError<T>>
    where
        BetaSettings<T>: Default,
    {
        Self::with_settings(alpha, beta, BetaSettings::default())
    }

    /// Create a Beta distribution with explicit tolerances and iteration caps.
    pub fn with_settings(
        alpha: T,
        beta: T,
        settings: BetaSettings<T>,
    ) -> Result<Self, StatsError<T>> {
        let valid = |v: T| v > T::zero() && v.is_finite();
        if !valid(alpha) || !valid(beta) {
            return Err(StatsError::InvalidParameter);
        }
        Ok(Self {
            alpha,
            beta,
            settings,
        })
    }

    /// Shape parameter α.
    pub fn alpha(&self) -> T {
        self.alpha
    }

    /// Shape parameter β.
    pub fn beta(&self) -> T {
        self.beta
    }

    /// Tolerances and iteration caps in use.
    pub fn settings(&self) -> &BetaSettings<T> {
        &self.settings
    }

    /// Beta(β, α), the distribution of 1 − X.
    pub(crate) fn reflected(&self) -> Self {
        Self {
            alpha: self.beta,
            beta: self.alpha,
            settings: self.settings,
        }
    }

    pub(crate) fn mean(&self) -> T {
        self.alpha / (self.alpha + self.beta)
    }
}

impl<T: FloatScalar> ContinuousDistribution<T> for Beta<T> {
    /// Density at `x`; 0 outside [0, 1].
    ///
    /// The endpoints follow a fixed convention: 0 at x = 0 and 1 at x = 1,
    /// whatever the shape parameters.
    fn pdf(&self, x: T) -> T {
        let zero = T::zero();
        let one = T::one();
        if x.is_nan() {
            return x;
        }
        if x <= zero || x > one {
            return zero;
        }
        if x == one {
            return one;
        }
        self.ln_pdf(x).exp()
    }

    fn ln_pdf(&self, x: T) -> T {
        let zero = T::zero();
        let one = T::one();
        if x.is_nan() {
            return x;
        }
        if x <= zero || x > one {
            return T::neg_infinity();
        }
        if x == one {
            return zero;
        }
        (self.alpha - one) * x.ln() + (self.beta - one) * (-x).ln_1p()
            - lbeta(self.alpha, self.beta)
    }

    /// I_x(α, β). Clamps: 0 for x ≤ 0, 1 for x ≥ 1.
    fn cdf(&self, x: T) -> Result<T, StatsError<T>> {
        if x.is_nan() {
            return Err(StatsError::InvalidArgument);
        }
        if x <= T::zero() {
            return Ok(T::zero());
        }
        if x >= T::one() {
            return Ok(T::one());
        }
        Ok(betainc_with(self.alpha, self.beta, x, &self.settings.cf)?)
    }

    fn quantile(&self, p: T) -> Result<T, StatsError<T>> {
        quantile::beta_quantile(self, p)
    }
}

/// CDF evaluator closed over validated shape parameters.
///
/// # Example
///
/// ```
/// use betainv::beta_cdf;
///
/// let cdf = beta_cdf(2.0_f64, 2.0).unwrap();
/// assert!((cdf(0.5).unwrap() - 0.5).abs() < 1e-14);
/// assert_eq!(cdf(1.0).unwrap(), 1.0);
/// ```
pub fn beta_cdf<T: FloatScalar>(
    alpha: T,
    beta: T,
) -> Result<impl Fn(T) -> Result<T, StatsError<T>>, StatsError<T>>
where
    BetaSettings<T>: Default,
{
    let dist = Beta::new(alpha, beta)?;
    Ok(move |x: T| dist.cdf(x))
}

/// P(X ≤ x) for X ~ Beta(α, β).
///
/// # Errors
///
/// [`StatsError::InvalidParameter`] unless α, β are finite and > 0,
/// [`StatsError::InvalidArgument`] for NaN `x`.
pub fn beta_cdf_at<T: FloatScalar>(alpha: T, beta: T, x: T) -> Result<T, StatsError<T>>
where
    BetaSettings<T>: Default,
{
    Beta::new(alpha, beta)?.cdf(x)
}

/// Density of Beta(α, β) at `x`, with the endpoint convention of
/// [`Beta::pdf`](ContinuousDistribution::pdf).
pub fn beta_pdf_at<T: FloatScalar>(alpha: T, beta: T, x: T) -> Result<T, StatsError<T>>
where
    BetaSettings<T>: Default,
{
    Ok(Beta::new(alpha, beta)?.pdf(x))
}

/// Quantile of Beta(α, β): x with P(X ≤ x) = p.
///
/// # Errors
///
/// * [`StatsError::InvalidParameter`] unless α, β are finite and > 0.
/// * [`StatsError::InvalidProbability`] unless 0 ≤ p ≤ 1.
/// * [`StatsError::NotConverged`] if refinement misses its tolerance; the
///   error carries the last estimate. Expect this for very small shapes
///   (α or β around 0.05 and below): each Newton step moves x by at most
///   x/2, so quantiles far below machine epsilon are not reached within
///   the iteration cap and the estimate stops near 1e-16.
///
/// # Example
///
/// ```
/// use betainv::{beta_inv_cdf_for, StatsError};
///
/// // Beta(1, 1) is uniform
/// assert!((beta_inv_cdf_for(1.0_f64, 1.0, 0.3).unwrap() - 0.3).abs() < 1e-14);
///
/// assert_eq!(
///     beta_inv_cdf_for(2.0_f64, 3.0, -0.1).unwrap_err(),
///     StatsError::InvalidProbability,
/// );
/// ```
pub fn beta_inv_cdf_for<T: FloatScalar>(alpha: T, beta: T, p: T) -> Result<T, StatsError<T>>
where
    BetaSettings<T>: Default,
{
    Beta::new(alpha, beta)?.quantile(p)
}
