use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{SamplingError, generators};

/// A named distribution together with its parameters.
///
/// This is the plain configuration a front-end keeps in its state (slider
/// values and the selected distribution) and hands to [`Distribution::sample`].
/// It deserializes from JSON such as
/// `{"kind": "log_normal", "mu": 0.0, "sigma": 0.5}`.
///
/// # Examples
///
/// ```
/// use statkit_sampling::{Distribution, seeded_rng};
///
/// let dist: Distribution = serde_json::from_str(r#"{"kind": "exponential", "rate": 2.0}"#).unwrap();
/// assert_eq!(dist, Distribution::Exponential { rate: 2.0 });
/// assert_eq!(dist.expected_mean(), 0.5);
///
/// let values = dist.sample(&mut seeded_rng(1), 10).unwrap();
/// assert_eq!(values.len(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, derive_more::Display)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Distribution {
    #[display("Normal(mean={mean}, std_dev={std_dev})")]
    Normal { mean: f64, std_dev: f64 },
    #[display("LogNormal(mu={mu}, sigma={sigma})")]
    LogNormal { mu: f64, sigma: f64 },
    #[display("Exponential(rate={rate})")]
    Exponential { rate: f64 },
    #[display("Uniform(min={min}, max={max})")]
    Uniform { min: f64, max: f64 },
    #[display("Poisson(lambda={lambda})")]
    Poisson { lambda: f64 },
    #[display("Beta(alpha={alpha}, beta={beta})")]
    Beta { alpha: f64, beta: f64 },
}

impl Distribution {
    /// Draws `count` values using the matching generator in
    /// [`generators`](crate::generators).
    pub fn sample<R>(&self, rng: &mut R, count: usize) -> Result<Vec<f64>, SamplingError>
    where
        R: Rng + ?Sized,
    {
        match *self {
            Self::Normal { mean, std_dev } => generators::normal_sample(rng, mean, std_dev, count),
            Self::LogNormal { mu, sigma } => generators::log_normal_sample(rng, mu, sigma, count),
            Self::Exponential { rate } => generators::exponential_sample(rng, rate, count),
            Self::Uniform { min, max } => generators::uniform_sample(rng, min, max, count),
            Self::Poisson { lambda } => generators::poisson_sample(rng, lambda, count),
            Self::Beta { alpha, beta } => generators::beta_sample(rng, alpha, beta, count),
        }
    }

    /// Theoretical mean of the distribution.
    #[must_use]
    pub fn expected_mean(&self) -> f64 {
        match *self {
            Self::Normal { mean, .. } => mean,
            Self::LogNormal { mu, sigma } => (mu + sigma * sigma / 2.0).exp(),
            Self::Exponential { rate } => 1.0 / rate,
            Self::Uniform { min, max } => f64::midpoint(min, max),
            Self::Poisson { lambda } => lambda,
            Self::Beta { alpha, beta } => alpha / (alpha + beta),
        }
    }

    /// Theoretical variance of the distribution.
    #[must_use]
    pub fn expected_variance(&self) -> f64 {
        match *self {
            Self::Normal { std_dev, .. } => std_dev * std_dev,
            Self::LogNormal { mu, sigma } => {
                let s2 = sigma * sigma;
                (s2.exp() - 1.0) * (2.0 * mu + s2).exp()
            }
            Self::Exponential { rate } => 1.0 / (rate * rate),
            Self::Uniform { min, max } => (max - min).powi(2) / 12.0,
            Self::Poisson { lambda } => lambda,
            Self::Beta { alpha, beta } => {
                let sum = alpha + beta;
                alpha * beta / (sum * sum * (sum + 1.0))
            }
        }
    }
}
