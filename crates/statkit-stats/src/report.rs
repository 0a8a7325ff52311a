use serde::{Deserialize, Serialize};

use crate::{
    descriptive::SummaryStatistics, error::StatsError, histogram::Histogram,
    percentiles::Percentiles,
};

/// Everything a display layer typically shows for one sample.
///
/// Bundles:
/// - [`SummaryStatistics`] (mean, median, mode, spread and shape)
/// - [`Percentiles`] at the requested points
/// - an equal-width [`Histogram`]
///
/// # Examples
///
/// ```
/// use statkit_stats::report::SampleReport;
///
/// let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
/// let report = SampleReport::new(&values, &[25.0, 50.0, 75.0], 5).unwrap();
///
/// assert_eq!(report.summary.mean, 5.5);
/// assert_eq!(report.percentiles.get(50.0), Some(6.0));
/// assert_eq!(report.histogram.bins.len(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleReport {
    pub summary: SummaryStatistics,
    pub percentiles: Percentiles,
    pub histogram: Histogram,
}

impl SampleReport {
    /// Computes the report for `samples`.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`SummaryStatistics::new`],
    /// [`Percentiles::new`] and [`Histogram::new`].
    pub fn new(
        samples: &[f64],
        percentile_points: &[f64],
        bin_count: usize,
    ) -> Result<Self, StatsError> {
        Ok(Self {
            summary: SummaryStatistics::new(samples)?,
            percentiles: Percentiles::new(samples, percentile_points)?,
            histogram: Histogram::new(samples, bin_count)?,
        })
    }
}
