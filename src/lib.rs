//! # betainv
//!
//! Beta distribution CDF and quantile function in pure Rust, no-std
//! compatible, stack-only.
//!
//! ## Quick start
//!
//! ```
//! use betainv::{beta_cdf_at, beta_inv_cdf_for};
//!
//! // Median of Beta(2, 5)
//! let x = beta_inv_cdf_for(2.0_f64, 5.0, 0.5).unwrap();
//! assert!((x - 0.26444998329565916).abs() < 1e-10);
//!
//! // And back again
//! let p = beta_cdf_at(2.0_f64, 5.0, x).unwrap();
//! assert!((p - 0.5).abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`special`]: Log-gamma, log-beta, and the regularized incomplete beta
//!   function I_x(a, b). The continued fraction is evaluated with the modified
//!   Lentz method and always routed to its convergent side.
//!
//! - [`stats`]: The [`Beta`] distribution: density, CDF, and quantile. The
//!   quantile combines a small-x series guess, a coarse [`stats::bisect`], and
//!   a damped Newton iteration with a second-order correction.
//!
//! - [`traits`]: [`FloatScalar`], the `f32`/`f64` element bound.
//!
//! ## Errors
//!
//! Nothing in this crate panics on bad input. Parameter and probability
//! mistakes come back as [`StatsError::InvalidParameter`] and
//! [`StatsError::InvalidProbability`]; a quantile that fails to reach its
//! tolerance comes back as [`StatsError::NotConverged`] carrying the last
//! estimate.
//!
//! ## Configuration
//!
//! All tolerances and iteration caps live in [`BetaSettings`] (continued
//! fraction: [`CfSettings`], quantile: [`QuantileSettings`]) with defaults
//! for `f64` and `f32`. Use [`Beta::with_settings`] to override them.
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Hardware FPU via system libm, `std::error::Error` impls |
//!
//! Without `std` the crate falls back to the pure-Rust `libm`.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(test)]
extern crate alloc;

pub mod special;
pub mod stats;
pub mod traits;

pub use special::{CfSettings, SpecialError};
pub use stats::{
    beta_cdf, beta_cdf_at, beta_inv_cdf_for, beta_pdf_at, Beta, BetaSettings,
    ContinuousDistribution, QuantileSettings, StatsError,
};
pub use traits::FloatScalar;
