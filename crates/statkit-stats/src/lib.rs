//! Descriptive statistics and normal-distribution utilities for statkit.
//!
//! This crate provides:
//!
//! - **Descriptive statistics**: mean, median, mode, variance, standard deviation,
//!   skewness and kurtosis, plus the [`SummaryStatistics`] value object
//! - **Percentiles**: nearest-rank percentile lookup
//! - **Histograms**: equal-width binning of samples
//! - **Sample reports**: summary, percentiles and histogram in one value
//! - **Normal distribution**: density, CDF and quantile approximations
//! - **Linear regression**: least-squares line fit with `r²`
//! - **Hypothesis tests**: one-sample z-test
//!
//! All functions are pure: they borrow their input and keep no state between
//! calls. Invalid input is reported through [`StatsError`].
//!
//! # Modules
//!
//! - [`descriptive`]: summary statistics over a sample
//! - [`percentiles`]: percentile computation and storage
//! - [`histogram`]: equal-width histograms
//! - [`report`]: combined sample report for display layers
//! - [`normal`]: standard normal PDF, CDF and inverse CDF
//! - [`regression`]: simple linear regression
//! - [`hypothesis`]: z-test
//!
//! # Examples
//!
//! ## Summarizing a sample
//!
//! ```
//! use statkit_stats::SummaryStatistics;
//!
//! let stats = SummaryStatistics::new(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! assert_eq!(stats.median, 3.0);
//! ```
//!
//! ## Empty input is an error, not zero
//!
//! ```
//! use statkit_stats::{descriptive, StatsError};
//!
//! assert_eq!(descriptive::mean(&[]), Err(StatsError::EmptySample));
//! ```
//!
//! ## Normal CDF
//!
//! ```
//! use statkit_stats::normal::standard_normal_cdf;
//!
//! assert!((standard_normal_cdf(1.96) - 0.975).abs() < 1e-4);
//! ```

pub use self::{descriptive::SummaryStatistics, error::StatsError};

pub mod descriptive;
mod error;
pub mod histogram;
pub mod hypothesis;
pub mod normal;
pub mod percentiles;
pub mod regression;
pub mod report;
