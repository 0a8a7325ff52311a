use serde::{Deserialize, Serialize};

use crate::{descriptive, error::StatsError, normal::standard_normal_cdf};

/// One-sample z-test against a known population standard deviation.
///
/// The p-value is two-tailed: `2 * (1 - Φ(|z|))`.
///
/// # Examples
///
/// ```
/// use statkit_stats::hypothesis::ZTest;
///
/// let test = ZTest::new(105.0, 100.0, 15.0, 36).unwrap();
/// assert!((test.z - 2.0).abs() < 1e-12);
/// assert!((test.p_value - 0.0455).abs() < 1e-4);
/// assert!(test.rejects_at(0.05));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZTest {
    /// Test statistic `(x̄ - μ) / (σ / √n)`.
    pub z: f64,
    /// Two-tailed p-value.
    pub p_value: f64,
}

impl ZTest {
    /// Runs the test from summary values.
    ///
    /// # Errors
    ///
    /// [`StatsError::InvalidParameter`] if `population_std_dev` is not a
    /// positive finite number or `sample_size` is zero.
    #[expect(clippy::cast_precision_loss)]
    pub fn new(
        sample_mean: f64,
        population_mean: f64,
        population_std_dev: f64,
        sample_size: usize,
    ) -> Result<Self, StatsError> {
        if !(population_std_dev.is_finite() && population_std_dev > 0.0) {
            return Err(StatsError::InvalidParameter {
                name: "population_std_dev",
                value: population_std_dev,
            });
        }
        if sample_size == 0 {
            return Err(StatsError::InvalidParameter {
                name: "sample_size",
                value: 0.0,
            });
        }
        let standard_error = population_std_dev / (sample_size as f64).sqrt();
        let z = (sample_mean - population_mean) / standard_error;
        let p_value = 2.0 * (1.0 - standard_normal_cdf(z.abs()));
        Ok(Self { z, p_value })
    }

    /// Runs the test on the mean of `samples`.
    pub fn from_sample(
        samples: &[f64],
        population_mean: f64,
        population_std_dev: f64,
    ) -> Result<Self, StatsError> {
        let sample_mean = descriptive::mean(samples)?;
        Self::new(
            sample_mean,
            population_mean,
            population_std_dev,
            samples.len(),
        )
    }

    /// Whether the null hypothesis is rejected at significance level `alpha`.
    #[must_use]
    pub fn rejects_at(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }
}
