//! Descriptive statistics over in-memory samples.
//!
//! Every function borrows the caller's sample and never mutates it. Functions
//! that need at least one value return [`StatsError::EmptySample`] on empty
//! input instead of a silent `0.0`, since zero is a legitimate data value.
//!
//! Variance, standard deviation, skewness and kurtosis use population formulas
//! (dividing by `n`). Bias-corrected variants are available as
//! [`sample_variance`], [`sample_std_dev`], [`adjusted_skewness`] and
//! [`adjusted_kurtosis`].
//!
//! # Examples
//!
//! ```
//! use statkit_stats::descriptive;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! assert_eq!(descriptive::mean(&values).unwrap(), 3.0);
//! assert_eq!(descriptive::median(&values).unwrap(), 3.0);
//! assert_eq!(descriptive::variance(&values).unwrap(), 2.0);
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{error::StatsError, histogram::Histogram};

/// Arithmetic mean (`sum / count`).
///
/// # Examples
///
/// ```
/// # use statkit_stats::{descriptive::mean, StatsError};
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), Ok(3.0));
/// assert_eq!(mean(&[]), Err(StatsError::EmptySample));
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn mean(samples: &[f64]) -> Result<f64, StatsError> {
    StatsError::require_len(samples, 1)?;
    Ok(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Median of the sample.
///
/// A sorted copy is used; for an even count the two middle values are
/// averaged.
///
/// # Examples
///
/// ```
/// # use statkit_stats::descriptive::median;
/// assert_eq!(median(&[5.0, 1.0, 3.0]), Ok(3.0));
/// assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), Ok(2.5));
/// ```
pub fn median(samples: &[f64]) -> Result<f64, StatsError> {
    StatsError::require_len(samples, 1)?;
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Ok(sorted[mid])
    } else {
        Ok(f64::midpoint(sorted[mid - 1], sorted[mid]))
    }
}

/// Most frequent value, matched by exact floating-point equality.
///
/// On ties the value that occurs first in the input wins. `-0.0` and `0.0` are
/// counted as the same value.
///
/// For continuous data nearly every value is unique, in which case this simply
/// returns the first element. Use [`binned_mode`] when a histogram-based mode
/// is wanted.
///
/// # Examples
///
/// ```
/// # use statkit_stats::descriptive::mode;
/// assert_eq!(mode(&[1.0, 1.0, 2.0, 3.0]), Ok(1.0));
/// // Tie between 2.0 and 1.0: 2.0 appears first.
/// assert_eq!(mode(&[2.0, 1.0, 1.0, 2.0]), Ok(2.0));
/// ```
pub fn mode(samples: &[f64]) -> Result<f64, StatsError> {
    fn key(value: f64) -> u64 {
        if value == 0.0 {
            0.0_f64.to_bits()
        } else {
            value.to_bits()
        }
    }

    StatsError::require_len(samples, 1)?;

    let mut counts = HashMap::<u64, usize>::new();
    for &value in samples {
        *counts.entry(key(value)).or_insert(0) += 1;
    }

    // Walk in input order so that the first value reaching the highest count wins.
    let mut best = samples[0];
    let mut best_count = 0;
    for &value in samples {
        let count = counts[&key(value)];
        if count > best_count {
            best = value;
            best_count = count;
        }
    }
    Ok(best)
}

/// Histogram-based mode for continuous data.
///
/// The sample is split into `bins` equal-width bins over `[min, max]` and the
/// midpoint of the most populated bin is returned. Ties go to the lowest bin.
/// A constant sample returns that constant.
///
/// # Examples
///
/// ```
/// # use statkit_stats::descriptive::binned_mode;
/// let values = [0.1, 0.2, 0.25, 0.3, 0.9, 1.0];
/// let mode = binned_mode(&values, 2).unwrap();
/// assert!((mode - 0.325).abs() < 1e-12);
/// ```
pub fn binned_mode(samples: &[f64], bins: usize) -> Result<f64, StatsError> {
    let histogram = Histogram::new(samples, bins)?;
    if is_constant(samples) {
        return Ok(samples[0]);
    }
    let mut best = &histogram.bins[0];
    for bin in &histogram.bins[1..] {
        if bin.count > best.count {
            best = bin;
        }
    }
    Ok(best.midpoint())
}

/// Population variance: mean of the squared deviations from the mean.
///
/// A sample whose values are all identical has a variance of exactly `0.0`.
///
/// # Examples
///
/// ```
/// # use statkit_stats::descriptive::variance;
/// assert_eq!(variance(&[2.0, 2.0, 2.0, 2.0]), Ok(0.0));
/// assert_eq!(variance(&[1.0, 3.0]), Ok(1.0));
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn variance(samples: &[f64]) -> Result<f64, StatsError> {
    let mean = mean(samples)?;
    if is_constant(samples) {
        return Ok(0.0);
    }
    let sum_sq = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>();
    Ok(sum_sq / samples.len() as f64)
}

/// Population standard deviation, `variance(samples).sqrt()`.
pub fn std_dev(samples: &[f64]) -> Result<f64, StatsError> {
    Ok(variance(samples)?.sqrt())
}

/// Bessel-corrected sample variance (divides by `n - 1`).
///
/// Requires at least two values.
///
/// # Examples
///
/// ```
/// # use statkit_stats::descriptive::sample_variance;
/// assert_eq!(sample_variance(&[1.0, 3.0]), Ok(2.0));
/// assert!(sample_variance(&[1.0]).is_err());
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn sample_variance(samples: &[f64]) -> Result<f64, StatsError> {
    StatsError::require_len(samples, 2)?;
    let n = samples.len() as f64;
    Ok(variance(samples)? * n / (n - 1.0))
}

/// Bessel-corrected sample standard deviation.
pub fn sample_std_dev(samples: &[f64]) -> Result<f64, StatsError> {
    Ok(sample_variance(samples)?.sqrt())
}

/// Skewness as the third standardized moment, `mean(((x - mean) / std_dev)^3)`.
///
/// Returns `0.0` when the standard deviation is zero.
///
/// # Examples
///
/// ```
/// # use statkit_stats::descriptive::skewness;
/// assert_eq!(skewness(&[1.0, 2.0, 3.0]), Ok(0.0));
/// assert!(skewness(&[1.0, 1.0, 1.0, 10.0]).unwrap() > 0.0);
/// assert_eq!(skewness(&[4.0, 4.0, 4.0]), Ok(0.0));
/// ```
pub fn skewness(samples: &[f64]) -> Result<f64, StatsError> {
    standardized_moment(samples, 3)
}

/// Excess kurtosis, `mean(((x - mean) / std_dev)^4) - 3`.
///
/// Returns `0.0` (not `-3.0`) when the standard deviation is zero.
///
/// # Examples
///
/// ```
/// # use statkit_stats::descriptive::kurtosis;
/// assert_eq!(kurtosis(&[7.0, 7.0, 7.0]), Ok(0.0));
/// // Two-point distribution: fourth moment is 1, so excess kurtosis is -2.
/// assert_eq!(kurtosis(&[-1.0, 1.0]), Ok(-2.0));
/// ```
pub fn kurtosis(samples: &[f64]) -> Result<f64, StatsError> {
    let std_dev = std_dev(samples)?;
    if std_dev == 0.0 {
        return Ok(0.0);
    }
    Ok(standardized_moment(samples, 4)? - 3.0)
}

/// Adjusted Fisher-Pearson skewness, `g1 * sqrt(n (n - 1)) / (n - 2)`.
///
/// Requires at least three values. Returns `0.0` for a zero standard deviation.
#[expect(clippy::cast_precision_loss)]
pub fn adjusted_skewness(samples: &[f64]) -> Result<f64, StatsError> {
    StatsError::require_len(samples, 3)?;
    let n = samples.len() as f64;
    let g1 = skewness(samples)?;
    Ok(g1 * (n * (n - 1.0)).sqrt() / (n - 2.0))
}

/// Bias-corrected sample excess kurtosis,
/// `(n - 1) / ((n - 2) (n - 3)) * ((n + 1) g2 + 6)`.
///
/// Requires at least four values. Returns `0.0` for a zero standard deviation.
#[expect(clippy::cast_precision_loss)]
pub fn adjusted_kurtosis(samples: &[f64]) -> Result<f64, StatsError> {
    StatsError::require_len(samples, 4)?;
    if std_dev(samples)? == 0.0 {
        return Ok(0.0);
    }
    let n = samples.len() as f64;
    let g2 = kurtosis(samples)?;
    Ok((n - 1.0) / ((n - 2.0) * (n - 3.0)) * ((n + 1.0) * g2 + 6.0))
}

#[expect(clippy::cast_precision_loss)]
fn standardized_moment(samples: &[f64], order: i32) -> Result<f64, StatsError> {
    let mean = mean(samples)?;
    let std_dev = std_dev(samples)?;
    if std_dev == 0.0 {
        log::debug!("zero standard deviation, standardized moment {order} reported as 0");
        return Ok(0.0);
    }
    let sum = samples
        .iter()
        .map(|x| ((x - mean) / std_dev).powi(order))
        .sum::<f64>();
    Ok(sum / samples.len() as f64)
}

fn is_constant(samples: &[f64]) -> bool {
    samples.split_first().is_some_and(|(first, rest)| rest.iter().all(|x| x == first))
}

/// Summary statistics of a single sample.
///
/// Computed once from a sample and never updated; recompute when the sample
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    /// Number of values in the sample.
    pub count: usize,
    /// The minimum value.
    pub min: f64,
    /// The maximum value.
    pub max: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Median (average of the two middle values for even counts).
    pub median: f64,
    /// Most frequent exact value, see [`mode`].
    pub mode: f64,
    /// Population variance.
    pub variance: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// Third standardized moment.
    pub skewness: f64,
    /// Excess kurtosis.
    pub kurtosis: f64,
}

impl SummaryStatistics {
    /// Computes all summary statistics of `samples`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use statkit_stats::descriptive::SummaryStatistics;
    /// let stats = SummaryStatistics::new(&[5.0, 2.0, 4.0, 1.0, 3.0]).unwrap();
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.median, 3.0);
    /// assert_eq!(stats.variance, 2.0);
    /// ```
    pub fn new(samples: &[f64]) -> Result<Self, StatsError> {
        let mean = mean(samples)?;
        let variance = variance(samples)?;
        let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Ok(Self {
            count: samples.len(),
            min,
            max,
            mean,
            median: median(samples)?,
            mode: mode(samples)?,
            variance,
            std_dev: variance.sqrt(),
            skewness: skewness(samples)?,
            kurtosis: kurtosis(samples)?,
        })
    }

    /// Range of the sample (`max - min`).
    #[must_use]
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}
