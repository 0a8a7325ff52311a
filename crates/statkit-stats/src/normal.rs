//! Standard normal distribution functions.
//!
//! - [`standard_normal_pdf`]: density `φ(x)`
//! - [`standard_normal_cdf`]: cumulative probability `Φ(z) = P(Z ≤ z)`
//! - [`inverse_standard_normal_cdf`]: quantile function `Φ⁻¹(p)`
//!
//! # Examples
//!
//! ```
//! use statkit_stats::normal::{inverse_standard_normal_cdf, standard_normal_cdf};
//!
//! assert!((standard_normal_cdf(1.96) - 0.9750).abs() < 1e-4);
//! let z = inverse_standard_normal_cdf(0.975).unwrap();
//! assert!((z - 1.96).abs() < 1e-3);
//! ```

/// `1 / sqrt(2π)`
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Density of the standard normal distribution.
#[must_use]
pub fn standard_normal_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}

/// Cumulative distribution function of the standard normal distribution.
///
/// Uses the Abramowitz-Stegun polynomial approximation 26.2.17, whose absolute
/// error is below `7.5e-8`. The result is clamped to `[0, 1]`, is exactly
/// `0.5` at zero and satisfies `cdf(-z) == 1 - cdf(z)`. NaN input yields NaN.
///
/// # Examples
///
/// ```
/// # use statkit_stats::normal::standard_normal_cdf;
/// assert_eq!(standard_normal_cdf(0.0), 0.5);
/// assert_eq!(standard_normal_cdf(f64::NEG_INFINITY), 0.0);
/// assert_eq!(standard_normal_cdf(f64::INFINITY), 1.0);
/// ```
#[must_use]
pub fn standard_normal_cdf(z: f64) -> f64 {
    const P: f64 = 0.231_641_9;
    const B: [f64; 5] = [
        0.319_381_530,
        -0.356_563_782,
        1.781_477_937,
        -1.821_255_978,
        1.330_274_429,
    ];

    if z.is_nan() {
        return f64::NAN;
    }
    if z.is_infinite() {
        return if z > 0.0 { 1.0 } else { 0.0 };
    }

    let abs_z = z.abs();
    let t = 1.0 / (1.0 + P * abs_z);
    let poly = t * (B[0] + t * (B[1] + t * (B[2] + t * (B[3] + t * B[4]))));
    // Upper tail Q(|z|) = φ(|z|) * poly(t)
    let tail = (standard_normal_pdf(abs_z) * poly).clamp(0.0, 0.5);

    if z == 0.0 {
        0.5
    } else if z > 0.0 {
        1.0 - tail
    } else {
        tail
    }
}

/// Quantile function of the standard normal distribution.
///
/// Uses Acklam's rational approximation (relative error around `1.15e-9`).
/// Returns `None` unless `0 < p < 1`.
///
/// # Examples
///
/// ```
/// # use statkit_stats::normal::inverse_standard_normal_cdf;
/// assert_eq!(inverse_standard_normal_cdf(0.5), Some(0.0));
/// assert_eq!(inverse_standard_normal_cdf(0.0), None);
/// assert_eq!(inverse_standard_normal_cdf(1.0), None);
/// ```
#[must_use]
pub fn inverse_standard_normal_cdf(p: f64) -> Option<f64> {
    const A: [f64; 6] = [
        -3.969_683_028_665_376e1,
        2.209_460_984_245_205e2,
        -2.759_285_104_469_687e2,
        1.383_577_518_672_690e2,
        -3.066_479_806_614_716e1,
        2.506_628_277_459_239,
    ];
    const B: [f64; 5] = [
        -5.447_609_879_822_406e1,
        1.615_858_368_580_409e2,
        -1.556_989_798_598_866e2,
        6.680_131_188_771_972e1,
        -1.328_068_155_288_572e1,
    ];
    const C: [f64; 6] = [
        -7.784_894_002_430_293e-3,
        -3.223_964_580_411_365e-1,
        -2.400_758_277_161_838,
        -2.549_732_539_343_734,
        4.374_664_141_464_968,
        2.938_163_982_698_783,
    ];
    const D: [f64; 4] = [
        7.784_695_709_041_462e-3,
        3.224_671_290_700_398e-1,
        2.445_134_137_142_996,
        3.754_408_661_907_416,
    ];
    const P_LOW: f64 = 0.024_25;
    const P_HIGH: f64 = 1.0 - P_LOW;

    if !(p > 0.0 && p < 1.0) {
        return None;
    }

    let lower_tail = |q: f64| {
        (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    };

    let z = if p < P_LOW {
        lower_tail((-2.0 * p.ln()).sqrt())
    } else if p > P_HIGH {
        -lower_tail((-2.0 * (1.0 - p).ln()).sqrt())
    } else {
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    };
    Some(z)
}
