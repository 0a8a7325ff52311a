//! Interpolation between two linear transformations.

use crate::matrix::Matrix2;

/// Cubic ease-in-out curve on `[0, 1]`.
///
/// Starts and ends with zero slope and passes through `(0.5, 0.5)`.
#[must_use]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Matrix at `progress` of an eased animation from `from` to `to`.
///
/// `progress` is clamped to `[0, 1]`, so the endpoints are returned exactly
/// outside that range.
///
/// # Examples
///
/// ```
/// use statkit_linalg::{Matrix2, animate_transformation};
///
/// let to = Matrix2::scaling(3.0, 3.0);
/// assert_eq!(animate_transformation(&Matrix2::IDENTITY, &to, 0.0), Matrix2::IDENTITY);
/// assert_eq!(animate_transformation(&Matrix2::IDENTITY, &to, 1.0), to);
/// assert_eq!(animate_transformation(&Matrix2::IDENTITY, &to, 0.5), Matrix2::scaling(2.0, 2.0));
/// ```
#[must_use]
pub fn animate_transformation(from: &Matrix2, to: &Matrix2, progress: f64) -> Matrix2 {
    from.lerp(to, ease_in_out_cubic(progress.clamp(0.0, 1.0)))
}
