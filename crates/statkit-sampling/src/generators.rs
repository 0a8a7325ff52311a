//! Random sample generators.
//!
//! Every generator draws from the caller's random number generator, validates
//! its parameters first and returns exactly `count` values. Passing a seeded
//! generator (see [`seeded_rng`](crate::seeded_rng)) makes the output
//! reproducible.
//!
//! # Normal variates
//!
//! Normal values come from the Box-Muller transform. Each pair of uniform
//! draws produces two independent standard normal values and both are used.
//! The log-normal generator exponentiates the same normal values.
//!
//! # Examples
//!
//! ```
//! use statkit_sampling::{generators, seeded_rng};
//!
//! let mut rng = seeded_rng(7);
//! let values = generators::normal_sample(&mut rng, 10.0, 2.0, 5).unwrap();
//! assert_eq!(values.len(), 5);
//!
//! let waits = generators::exponential_sample(&mut rng, 0.5, 100).unwrap();
//! assert!(waits.iter().all(|&w| w >= 0.0));
//! ```

use std::f64::consts::TAU;

use rand::Rng;
use rand_distr::{Beta, BetaError, Poisson};

use crate::SamplingError;

/// Normally distributed values with the given `mean` and `std_dev`.
///
/// `std_dev` must be finite and non-negative; a zero `std_dev` yields `count`
/// copies of `mean`.
pub fn normal_sample<R>(
    rng: &mut R,
    mean: f64,
    std_dev: f64,
    count: usize,
) -> Result<Vec<f64>, SamplingError>
where
    R: Rng + ?Sized,
{
    SamplingError::check_finite("mean", mean)?;
    SamplingError::check_non_negative("std_dev", std_dev)?;

    let mut values = Vec::with_capacity(count);
    while values.len() < count {
        let (z0, z1) = box_muller(rng);
        values.push(mean + std_dev * z0);
        if values.len() < count {
            values.push(mean + std_dev * z1);
        }
    }
    Ok(values)
}

/// Log-normally distributed values: `exp(N(mu, sigma))`.
///
/// All values are non-negative.
pub fn log_normal_sample<R>(
    rng: &mut R,
    mu: f64,
    sigma: f64,
    count: usize,
) -> Result<Vec<f64>, SamplingError>
where
    R: Rng + ?Sized,
{
    let mut values = normal_sample(rng, mu, sigma, count)?;
    for value in &mut values {
        *value = value.exp();
    }
    Ok(values)
}

/// Exponentially distributed values by inverse-CDF sampling,
/// `-ln(1 - u) / rate`.
///
/// `rate` must be finite and strictly positive. All values are non-negative.
pub fn exponential_sample<R>(
    rng: &mut R,
    rate: f64,
    count: usize,
) -> Result<Vec<f64>, SamplingError>
where
    R: Rng + ?Sized,
{
    SamplingError::check_positive("rate", rate)?;
    Ok((0..count)
        .map(|_| {
            let u = rng.random::<f64>();
            -(1.0 - u).ln() / rate
        })
        .collect())
}

/// Uniformly distributed values in `[min, max)`.
///
/// Requires finite bounds with `min <= max`; equal bounds yield that value.
pub fn uniform_sample<R>(
    rng: &mut R,
    min: f64,
    max: f64,
    count: usize,
) -> Result<Vec<f64>, SamplingError>
where
    R: Rng + ?Sized,
{
    SamplingError::check_finite("min", min)?;
    SamplingError::check_finite("max", max)?;
    if max < min {
        return Err(SamplingError::InvalidParameter {
            name: "max",
            value: max,
        });
    }
    Ok((0..count)
        .map(|_| min + rng.random::<f64>() * (max - min))
        .collect())
}

/// Poisson-distributed counts (as `f64`) with mean `lambda`.
///
/// `lambda` must be finite and non-negative; zero yields all zeros.
pub fn poisson_sample<R>(
    rng: &mut R,
    lambda: f64,
    count: usize,
) -> Result<Vec<f64>, SamplingError>
where
    R: Rng + ?Sized,
{
    SamplingError::check_non_negative("lambda", lambda)?;
    if lambda == 0.0 {
        return Ok(vec![0.0; count]);
    }
    let poisson = Poisson::new(lambda).map_err(|err| {
        log::debug!("rejected Poisson parameter {lambda}: {err}");
        SamplingError::InvalidParameter {
            name: "lambda",
            value: lambda,
        }
    })?;
    Ok((0..count).map(|_| rng.sample::<f64, _>(&poisson)).collect())
}

/// Beta-distributed values in `[0, 1]` with shape parameters `alpha` and
/// `beta`, both finite and strictly positive.
pub fn beta_sample<R>(
    rng: &mut R,
    alpha: f64,
    beta: f64,
    count: usize,
) -> Result<Vec<f64>, SamplingError>
where
    R: Rng + ?Sized,
{
    SamplingError::check_positive("alpha", alpha)?;
    SamplingError::check_positive("beta", beta)?;
    let dist = Beta::new(alpha, beta).map_err(|err| {
        log::debug!("rejected Beta parameters ({alpha}, {beta}): {err}");
        let (name, value) = if matches!(err, BetaError::BetaTooSmall) {
            ("beta", beta)
        } else {
            ("alpha", alpha)
        };
        SamplingError::InvalidParameter { name, value }
    })?;
    Ok((0..count).map(|_| rng.sample::<f64, _>(&dist)).collect())
}

/// Two independent standard normal values from one pair of uniforms.
fn box_muller<R>(rng: &mut R) -> (f64, f64)
where
    R: Rng + ?Sized,
{
    // u1 in (0, 1] keeps the logarithm finite
    let u1 = 1.0 - rng.random::<f64>();
    let u2 = rng.random::<f64>();
    let radius = (-2.0 * u1.ln()).sqrt();
    let angle = TAU * u2;
    (radius * angle.cos(), radius * angle.sin())
}

#[cfg(test)]
mod tests {
    use statkit_stats::descriptive;

    use super::*;
    use crate::seeded_rng;

    #[expect(clippy::cast_precision_loss)]
    fn assert_mean_near(values: &[f64], expected: f64, std_dev: f64) {
        let tolerance = 5.0 * std_dev / (values.len() as f64).sqrt();
        let mean = descriptive::mean(values).unwrap();
        assert!(
            (mean - expected).abs() < tolerance,
            "mean {mean} not within {tolerance} of {expected}"
        );
    }

    #[test]
    fn test_exact_counts() {
        let mut rng = seeded_rng(1);
        for count in [0, 1, 2, 3, 10, 11] {
            assert_eq!(normal_sample(&mut rng, 0.0, 1.0, count).unwrap().len(), count);
            assert_eq!(log_normal_sample(&mut rng, 0.0, 1.0, count).unwrap().len(), count);
            assert_eq!(exponential_sample(&mut rng, 1.0, count).unwrap().len(), count);
            assert_eq!(uniform_sample(&mut rng, 0.0, 1.0, count).unwrap().len(), count);
            assert_eq!(poisson_sample(&mut rng, 3.0, count).unwrap().len(), count);
            assert_eq!(beta_sample(&mut rng, 2.0, 5.0, count).unwrap().len(), count);
        }
    }

    #[test]
    fn test_normal_moments() {
        let mut rng = seeded_rng(2024);
        let values = normal_sample(&mut rng, 5.0, 2.0, 100_000).unwrap();
        assert_mean_near(&values, 5.0, 2.0);
        let std_dev = descriptive::std_dev(&values).unwrap();
        assert!((std_dev - 2.0).abs() < 0.05, "std_dev {std_dev}");
        assert!(descriptive::skewness(&values).unwrap().abs() < 0.05);
        assert!(descriptive::kurtosis(&values).unwrap().abs() < 0.1);
    }

    #[test]
    fn test_normal_zero_spread() {
        let mut rng = seeded_rng(3);
        let values = normal_sample(&mut rng, 1.5, 0.0, 4).unwrap();
        assert_eq!(values, vec![1.5; 4]);
    }

    #[test]
    fn test_log_normal_non_negative() {
        let mut rng = seeded_rng(4);
        let values = log_normal_sample(&mut rng, 0.0, 1.5, 10_000).unwrap();
        assert!(values.iter().all(|&v| v >= 0.0));
        assert!(descriptive::skewness(&values).unwrap() > 0.0);
    }

    #[test]
    fn test_exponential_non_negative_and_mean() {
        let mut rng = seeded_rng(5);
        for rate in [0.1, 1.0, 25.0] {
            let values = exponential_sample(&mut rng, rate, 50_000).unwrap();
            assert!(values.iter().all(|&v| v >= 0.0));
            assert_mean_near(&values, 1.0 / rate, 1.0 / rate);
        }
    }

    #[test]
    fn test_uniform_bounds() {
        let mut rng = seeded_rng(6);
        let values = uniform_sample(&mut rng, -2.0, 3.0, 10_000).unwrap();
        assert!(values.iter().all(|&v| (-2.0..3.0).contains(&v)));
        assert_eq!(uniform_sample(&mut rng, 4.0, 4.0, 3).unwrap(), vec![4.0; 3]);
    }

    #[test]
    fn test_poisson_counts() {
        let mut rng = seeded_rng(7);
        let values = poisson_sample(&mut rng, 4.0, 50_000).unwrap();
        assert!(values.iter().all(|&v| v >= 0.0 && v.fract() == 0.0));
        assert_mean_near(&values, 4.0, 2.0);
        assert_eq!(poisson_sample(&mut rng, 0.0, 3).unwrap(), vec![0.0; 3]);
    }

    #[test]
    fn test_beta_unit_interval() {
        let mut rng = seeded_rng(8);
        let values = beta_sample(&mut rng, 2.0, 5.0, 20_000).unwrap();
        assert!(values.iter().all(|&v| (0.0..=1.0).contains(&v)));
        // Beta(2, 5): mean 2/7, std_dev sqrt(10 / (49 * 8)) ~ 0.16
        assert_mean_near(&values, 2.0 / 7.0, 0.16);
    }

    #[test]
    fn test_invalid_parameters() {
        let mut rng = seeded_rng(9);
        assert!(normal_sample(&mut rng, 0.0, -1.0, 1).is_err());
        assert!(normal_sample(&mut rng, f64::NAN, 1.0, 1).is_err());
        assert!(log_normal_sample(&mut rng, 0.0, f64::INFINITY, 1).is_err());
        assert!(exponential_sample(&mut rng, 0.0, 1).is_err());
        assert!(exponential_sample(&mut rng, -1.0, 1).is_err());
        assert!(uniform_sample(&mut rng, 1.0, 0.0, 1).is_err());
        assert!(poisson_sample(&mut rng, -0.5, 1).is_err());
        assert!(beta_sample(&mut rng, 0.0, 1.0, 1).is_err());
        assert!(beta_sample(&mut rng, 1.0, -1.0, 1).is_err());
    }

    #[test]
    fn test_beta_error_names_rejected_parameter() {
        let mut rng = seeded_rng(9);
        assert_eq!(
            beta_sample(&mut rng, 1.0, -1.0, 1),
            Err(SamplingError::InvalidParameter {
                name: "beta",
                value: -1.0
            })
        );
        assert_eq!(
            beta_sample(&mut rng, 0.0, 2.0, 1),
            Err(SamplingError::InvalidParameter {
                name: "alpha",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_seeded_reproducible() {
        let a = normal_sample(&mut seeded_rng(42), 0.0, 1.0, 64).unwrap();
        let b = normal_sample(&mut seeded_rng(42), 0.0, 1.0, 64).unwrap();
        let c = normal_sample(&mut seeded_rng(43), 0.0, 1.0, 64).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
