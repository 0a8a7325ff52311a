use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::StatsError;

/// Equal-width histogram of a sample.
///
/// The bins cover `[min, max]` of the sample. Each value falls into exactly one
/// bin, so the bin counts always add up to the sample length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    /// Bins in ascending order of their ranges.
    pub bins: Vec<HistogramBin>,
}

/// A single histogram bin.
///
/// The range is half-open, except for the last bin of a histogram which also
/// contains its end (the sample maximum).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    /// Inclusive lower bound.
    pub range_start: f64,
    /// Upper bound.
    pub range_end: f64,
    /// Number of values that fall within this bin.
    pub count: u64,
}

impl HistogramBin {
    /// The bin range as a `Range`.
    #[must_use]
    pub fn range(&self) -> Range<f64> {
        self.range_start..self.range_end
    }

    /// The center of the bin.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        f64::midpoint(self.range_start, self.range_end)
    }
}

impl Histogram {
    /// Bins `samples` into `bin_count` equal-width bins.
    ///
    /// If every value is identical the bins have width `1.0` and start at that
    /// value.
    ///
    /// # Errors
    ///
    /// * [`StatsError::EmptySample`] if `samples` is empty
    /// * [`StatsError::InvalidParameter`] if `bin_count` is zero or the sample
    ///   contains non-finite values
    ///
    /// # Examples
    ///
    /// ```
    /// # use statkit_stats::histogram::Histogram;
    /// let values = [1.0, 2.0, 2.5, 3.0, 4.0, 5.0];
    /// let histogram = Histogram::new(&values, 4).unwrap();
    /// assert_eq!(histogram.bins.len(), 4);
    /// assert_eq!(histogram.bins[0].range_start, 1.0);
    /// assert_eq!(histogram.bins[0].count, 1);
    /// assert_eq!(histogram.bins[1].count, 2);
    /// assert_eq!(histogram.total_count(), 6);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    pub fn new(samples: &[f64], bin_count: usize) -> Result<Self, StatsError> {
        StatsError::require_len(samples, 1)?;
        if bin_count == 0 {
            return Err(StatsError::InvalidParameter {
                name: "bin_count",
                value: 0.0,
            });
        }
        if let Some(&bad) = samples.iter().find(|v| !v.is_finite()) {
            return Err(StatsError::InvalidParameter {
                name: "samples",
                value: bad,
            });
        }

        let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let bins = if max > min {
            Self::spread_bins(samples, bin_count, min, max)
        } else {
            let mut bins = (0..bin_count)
                .map(|idx| HistogramBin {
                    range_start: min + idx as f64,
                    range_end: min + (idx + 1) as f64,
                    count: 0,
                })
                .collect::<Vec<_>>();
            bins[0].count = samples.len() as u64;
            bins
        };

        Ok(Self { bins })
    }

    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn spread_bins(samples: &[f64], bin_count: usize, min: f64, max: f64) -> Vec<HistogramBin> {
        let n = bin_count as f64;
        // Boundaries are interpolated from the index rather than accumulated,
        // so the first bin starts exactly at `min` and the last ends at `max`.
        let boundary = |idx: usize| {
            let t = idx as f64 / n;
            min * (1.0 - t) + max * t
        };
        let mut bins = (0..bin_count)
            .map(|idx| HistogramBin {
                range_start: boundary(idx),
                range_end: boundary(idx + 1),
                count: 0,
            })
            .collect::<Vec<_>>();

        // Halved so that `max - min` cannot overflow for finite input.
        let half_span = max / 2.0 - min / 2.0;
        for &value in samples {
            let idx = ((value / 2.0 - min / 2.0) / half_span * n).floor() as usize;
            bins[idx.min(bin_count - 1)].count += 1;
        }
        bins
    }

    /// Total number of values across all bins.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.bins.iter().map(|bin| bin.count).sum()
    }

    /// The bin containing `value`, if any.
    #[must_use]
    pub fn find_bin(&self, value: f64) -> Option<&HistogramBin> {
        let last = self.bins.len().checked_sub(1)?;
        self.bins.iter().enumerate().find_map(|(idx, bin)| {
            let inside = bin.range().contains(&value) || (idx == last && value == bin.range_end);
            inside.then_some(bin)
        })
    }
}
