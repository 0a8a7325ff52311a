//! Synthetic sample generation for statkit.
//!
//! The generators in [`generators`] take any [`rand::Rng`] so callers decide
//! between a thread-local generator and a seeded, reproducible one:
//!
//! ```
//! use statkit_sampling::{generators, seeded_rng};
//!
//! // Reproducible
//! let a = generators::normal_sample(&mut seeded_rng(42), 0.0, 1.0, 3).unwrap();
//! let b = generators::normal_sample(&mut seeded_rng(42), 0.0, 1.0, 3).unwrap();
//! assert_eq!(a, b);
//!
//! // Non-deterministic
//! let c = generators::uniform_sample(&mut rand::rng(), 0.0, 1.0, 3).unwrap();
//! assert!(c.iter().all(|v| (0.0..1.0).contains(v)));
//! ```
//!
//! [`Distribution`] describes a distribution and its parameters as plain,
//! serializable data.

use rand::SeedableRng as _;
use rand_pcg::Pcg32;

pub use self::distribution::Distribution;

mod distribution;
pub mod generators;

/// Error returned when a generator receives parameters outside its domain.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum SamplingError {
    #[display("invalid value for parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

impl SamplingError {
    fn check_finite(name: &'static str, value: f64) -> Result<(), Self> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(Self::InvalidParameter { name, value })
        }
    }

    fn check_non_negative(name: &'static str, value: f64) -> Result<(), Self> {
        Self::check_finite(name, value)?;
        if value >= 0.0 {
            Ok(())
        } else {
            Err(Self::InvalidParameter { name, value })
        }
    }

    fn check_positive(name: &'static str, value: f64) -> Result<(), Self> {
        Self::check_finite(name, value)?;
        if value > 0.0 {
            Ok(())
        } else {
            Err(Self::InvalidParameter { name, value })
        }
    }
}

/// Deterministic generator for reproducible samples.
#[must_use]
pub fn seeded_rng(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}
