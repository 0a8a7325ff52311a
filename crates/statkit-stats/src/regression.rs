use serde::{Deserialize, Serialize};

use crate::error::StatsError;

/// Ordinary least-squares fit of `y = slope * x + intercept`.
///
/// # Examples
///
/// ```
/// use statkit_stats::regression::LinearRegression;
///
/// let points = [(0.0, 1.0), (1.0, 3.0), (2.0, 5.0), (3.0, 7.0)];
/// let fit = LinearRegression::fit(&points).unwrap();
/// assert_eq!(fit.slope, 2.0);
/// assert_eq!(fit.intercept, 1.0);
/// assert_eq!(fit.r_squared, 1.0);
/// assert_eq!(fit.predict(10.0), 21.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearRegression {
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination. `1.0` when `y` has no variation.
    pub r_squared: f64,
}

impl LinearRegression {
    /// Fits a line through `(x, y)` points.
    ///
    /// # Errors
    ///
    /// * [`StatsError::EmptySample`] when `points` is empty
    /// * [`StatsError::DegenerateInput`] when every `x` is the same, since the
    ///   slope is undefined
    #[expect(clippy::cast_precision_loss)]
    pub fn fit(points: &[(f64, f64)]) -> Result<Self, StatsError> {
        if points.is_empty() {
            return Err(StatsError::EmptySample);
        }
        let first_x = points[0].0;
        if points.iter().all(|&(x, _)| x == first_x) {
            return Err(StatsError::DegenerateInput {
                reason: "all x values are identical",
            });
        }
        let n = points.len() as f64;
        let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / n;
        let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n;

        let mut sxx = 0.0;
        let mut sxy = 0.0;
        let mut syy = 0.0;
        for (x, y) in points {
            let dx = x - mean_x;
            let dy = y - mean_y;
            sxx += dx * dx;
            sxy += dx * dy;
            syy += dy * dy;
        }
        if sxx == 0.0 {
            return Err(StatsError::DegenerateInput {
                reason: "all x values are identical",
            });
        }

        let slope = sxy / sxx;
        let intercept = mean_y - slope * mean_x;
        let ss_res = points
            .iter()
            .map(|(x, y)| (y - (slope * x + intercept)).powi(2))
            .sum::<f64>();
        let r_squared = if syy > 0.0 { 1.0 - ss_res / syy } else { 1.0 };

        Ok(Self {
            slope,
            intercept,
            r_squared,
        })
    }

    /// Value of the fitted line at `x`.
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}
