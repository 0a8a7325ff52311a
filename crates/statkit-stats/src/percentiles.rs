use serde::{Deserialize, Serialize};

use crate::error::StatsError;

/// A single percentile point and the sample value found there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentileValue {
    /// Percentile in `0.0..=100.0`.
    pub percentile: f64,
    /// Sample value at that percentile.
    pub value: f64,
}

/// Precomputed percentile values of a sample.
///
/// Values are found with the nearest-rank method, see [`compute_percentile`].
///
/// # Examples
///
/// ```
/// use statkit_stats::percentiles::Percentiles;
///
/// let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
/// let percentiles = Percentiles::new(&values, &[25.0, 50.0, 75.0]).unwrap();
///
/// assert_eq!(percentiles.get(50.0), Some(6.0));
/// assert_eq!(percentiles.get(25.0), Some(3.0));
/// assert_eq!(percentiles.get(90.0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentiles {
    values: Vec<PercentileValue>,
}

impl Percentiles {
    /// Computes percentiles of an unsorted sample.
    ///
    /// The sample is copied and sorted; the caller's slice is left untouched.
    ///
    /// # Errors
    ///
    /// * [`StatsError::EmptySample`] if `samples` is empty
    /// * [`StatsError::InvalidParameter`] if a point lies outside `0.0..=100.0`
    pub fn new(samples: &[f64], percentile_points: &[f64]) -> Result<Self, StatsError> {
        StatsError::require_len(samples, 1)?;
        if let Some(&bad) = percentile_points
            .iter()
            .find(|p| !(0.0..=100.0).contains(*p))
        {
            return Err(StatsError::InvalidParameter {
                name: "percentile",
                value: bad,
            });
        }
        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);
        Ok(Self::from_sorted(&sorted, percentile_points))
    }

    /// Computes percentiles of a sample already sorted in ascending order.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `sorted_values` is not sorted.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64], percentile_points: &[f64]) -> Self {
        debug_assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );
        let values = percentile_points
            .iter()
            .map(|&percentile| PercentileValue {
                percentile,
                value: compute_percentile(sorted_values, percentile),
            })
            .collect();
        Self { values }
    }

    /// The value at `percentile`, if it was among the requested points.
    #[must_use]
    pub fn get(&self, percentile: f64) -> Option<f64> {
        self.values
            .iter()
            .find(|entry| (entry.percentile - percentile).abs() < f64::EPSILON)
            .map(|entry| entry.value)
    }

    /// Iterates over the computed points in request order.
    pub fn iter(&self) -> impl Iterator<Item = PercentileValue> + '_ {
        self.values.iter().copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[PercentileValue] {
        &self.values
    }
}

/// Nearest-rank percentile of sorted data: the value at index
/// `floor(n * percentile / 100)`, clamped to the last element.
///
/// Returns `f64::NAN` for an empty slice.
///
/// # Examples
///
/// ```
/// use statkit_stats::percentiles::compute_percentile;
///
/// let values = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(compute_percentile(&values, 50.0), 3.0);
/// assert_eq!(compute_percentile(&values, 25.0), 2.0);
/// assert_eq!(compute_percentile(&values, 100.0), 5.0);
/// ```
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn compute_percentile(sorted_values: &[f64], percentile: f64) -> f64 {
    let Some(last) = sorted_values.len().checked_sub(1) else {
        return f64::NAN;
    };
    let idx = (sorted_values.len() as f64 * percentile / 100.0) as usize;
    sorted_values[idx.min(last)]
}
