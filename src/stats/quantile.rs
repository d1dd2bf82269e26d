//! Beta quantile: initial guess, coarse bisection, damped Newton refinement.

use crate::traits::{lit, FloatScalar};
use crate::special::lbeta;
use super::{Beta, ContinuousDistribution, StatsError};

/// Settings for the Beta quantile search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantileSettings<T> {
    /// Relative residual tolerance: converged when `|p − I_x| ≤ tol·p`.
    pub tol: T,
    /// Refinement stops once the Newton step is below `step_tol · x`.
    pub step_tol: T,
    /// Maximum number of refinement iterations.
    pub max_iter: usize,
    /// Below this probability the small-x series seeds the search.
    pub small_p: T,
    /// Bisection stops once its bracket is this narrow.
    pub bisect_x_tol: T,
    /// Bisection stops once `|I_x − p|` is below this.
    pub bisect_p_tol: T,
    /// Maximum number of bisection steps.
    pub bisect_max_iter: usize,
}

impl Default for QuantileSettings<f64> {
    fn default() -> Self {
        Self {
            tol: 1.4901161193847656e-8,
            step_tol: 1e-11,
            max_iter: 64,
            small_p: 0.1,
            bisect_x_tol: 0.01,
            bisect_p_tol: 0.01,
            bisect_max_iter: 64,
        }
    }
}

impl Default for QuantileSettings<f32> {
    fn default() -> Self {
        Self {
            tol: 3.4526698e-4,
            step_tol: 1e-6,
            max_iter: 64,
            small_p: 0.1,
            bisect_x_tol: 0.01,
            bisect_p_tol: 0.01,
            bisect_max_iter: 64,
        }
    }
}

/// Coarse bisection toward the root of `cdf(x) − p` on [0, 1].
///
/// `guess` is the first trial point (0.5 if it is not strictly inside
/// (0, 1)). Each trial halves the bracket, which starts as [0, 1]. Stops as
/// soon as a trial lands within `bisect_p_tol` of `p`, the bracket is
/// narrower than `bisect_x_tol`, or `bisect_max_iter` trials are spent.
///
/// Meant only to land a refinement inside its basin of convergence, not to
/// solve the equation. The result is always strictly inside (0, 1).
///
/// # Errors
///
/// Propagates the first error returned by `cdf`.
///
/// # Example
///
/// ```
/// use betainv::stats::{bisect, QuantileSettings};
///
/// let s = QuantileSettings::<f64>::default();
/// let x = bisect(|x: f64| Ok::<_, ()>(x * x), 0.9, 0.25, &s).unwrap();
/// assert!((x * x - 0.25).abs() < s.bisect_p_tol);
/// ```
pub fn bisect<T: FloatScalar, E>(
    mut cdf: impl FnMut(T) -> Result<T, E>,
    guess: T,
    p: T,
    settings: &QuantileSettings<T>,
) -> Result<T, E> {
    let zero = T::zero();
    let one = T::one();
    let half = lit::<T>(0.5);

    let mut lo = zero;
    let mut hi = one;
    let mut x = if guess > zero && guess < one { guess } else { half };

    for _ in 0..settings.bisect_max_iter {
        if hi - lo <= settings.bisect_x_tol {
            break;
        }
        let px = cdf(x)?;
        if (px - p).abs() < settings.bisect_p_tol {
            break;
        }
        if px < p {
            lo = x;
        } else {
            hi = x;
        }
        x = half * (lo + hi);
    }

    log::trace!("bisect: p = {:?} -> x = {:?} in [{:?}, {:?}]", p, x, lo, hi);
    Ok(x)
}

/// Quantile of `dist` at `p`, any p in [0, 1].
pub(crate) fn beta_quantile<T: FloatScalar>(dist: &Beta<T>, p: T) -> Result<T, StatsError<T>> {
    let zero = T::zero();
    let one = T::one();

    if !(p >= zero && p <= one) {
        return Err(StatsError::InvalidProbability);
    }
    if p == zero {
        return Ok(zero);
    }
    if p == one {
        return Ok(one);
    }

    if p > lit(0.5) {
        // I_x(α, β) = 1 − I_{1−x}(β, α)
        return match lower_quantile(&dist.reflected(), one - p) {
            Ok(x) => Ok(one - x),
            Err(StatsError::NotConverged {
                estimate,
                iterations,
            }) => Err(StatsError::NotConverged {
                estimate: one - estimate,
                iterations,
            }),
            Err(e) => Err(e),
        };
    }
    lower_quantile(dist, p)
}

/// Starting point for the search, p in (0, 0.5].
///
/// For small p, inverts the leading term of I_x ≈ x^α / (α·B(α, β)) and
/// corrects for the (1−x)^{β−1} factor. Never above the mean.
fn initial_guess<T: FloatScalar>(dist: &Beta<T>, p: T, small_p: T) -> T {
    let one = T::one();
    let (alpha, beta) = (dist.alpha(), dist.beta());
    let mean = dist.mean();

    if p >= small_p {
        return mean;
    }

    let lx = (alpha.ln() + lbeta(alpha, beta) + p.ln()) / alpha;
    if lx > T::zero() {
        return mean;
    }
    let x = lx.exp();
    let x = x * (one - x).powf(-(beta - one) / alpha);
    // min() drops a NaN guess in favour of the mean
    x.min(mean)
}

/// Solve I_x(α, β) = p for p in (0, 0.5].
fn lower_quantile<T: FloatScalar>(dist: &Beta<T>, p: T) -> Result<T, StatsError<T>> {
    let zero = T::zero();
    let one = T::one();
    let two = one + one;
    let settings = &dist.settings().quantile;
    let (alpha, beta) = (dist.alpha(), dist.beta());
    let mean = dist.mean();

    let guess = initial_guess(dist, p, settings.small_p);
    let mut x = bisect(|x| dist.cdf(x), guess, p, settings)?;

    for n in 1..=settings.max_iter {
        let dp = p - dist.cdf(x)?;
        if dp == zero {
            return Ok(x);
        }
        let phi = dist.pdf(x);

        // Newton step with the slope floored at 2|dP/x|: |step0| ≤ x/2
        let lambda = dp / (two * (dp / x).abs()).max(phi);
        let step0 = lambda;
        let step1 = -((alpha - one) / x - (beta - one) / (one - x)) * lambda * lambda / two;

        let step = if step1.abs() < step0.abs() {
            step0 + step1
        } else {
            step0 * two * (step0 / step1).abs()
        };

        let next = x + step;
        if next > zero && next < one {
            x = next;
        } else {
            let restart = x.sqrt() * mean.sqrt();
            log::trace!(
                "beta quantile: step {:?} leaves (0, 1) at x = {:?}, restarting at {:?}",
                step,
                x,
                restart
            );
            x = restart;
        }

        if step0.abs() <= settings.step_tol * x {
            if dp.abs() <= settings.tol * p {
                return Ok(x);
            }
            log::debug!(
                "beta quantile stalled: alpha = {:?}, beta = {:?}, p = {:?}, x = {:?}, residual = {:?}",
                alpha,
                beta,
                p,
                x,
                dp
            );
            return Err(StatsError::NotConverged {
                estimate: x,
                iterations: n,
            });
        }
    }

    log::debug!(
        "beta quantile: no convergence in {} iterations: alpha = {:?}, beta = {:?}, p = {:?}, x = {:?}",
        settings.max_iter,
        alpha,
        beta,
        p,
        x
    );
    Err(StatsError::NotConverged {
        estimate: x,
        iterations: settings.max_iter,
    })
}
