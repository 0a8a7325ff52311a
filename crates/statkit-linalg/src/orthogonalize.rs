use crate::vector::{Vector2, Vector3};

/// Orthonormal basis from two vectors by the Gram-Schmidt process.
///
/// The first output is `v1` normalized; the second is the part of `v2`
/// orthogonal to `v1`, normalized. Returns `None` if `v1` is zero or the two
/// vectors are (nearly) parallel.
///
/// # Examples
///
/// ```
/// use statkit_linalg::{Vector2, gram_schmidt};
///
/// let (e1, e2) = gram_schmidt(Vector2::new(2.0, 0.0), Vector2::new(1.0, 1.0)).unwrap();
/// assert_eq!(e1, Vector2::X);
/// assert!(e2.approx_eq(Vector2::Y, 1e-12));
///
/// assert_eq!(gram_schmidt(Vector2::new(1.0, 1.0), Vector2::new(-2.0, -2.0)), None);
/// ```
#[must_use]
pub fn gram_schmidt(v1: Vector2, v2: Vector2) -> Option<(Vector2, Vector2)> {
    let e1 = v1.normalize()?;
    let e2 = (v2 - e1 * v2.dot(e1)).normalize()?;
    Some((e1, e2))
}

/// Three-dimensional Gram-Schmidt.
///
/// Returns `None` unless the three vectors are linearly independent.
#[must_use]
pub fn gram_schmidt3(v1: Vector3, v2: Vector3, v3: Vector3) -> Option<[Vector3; 3]> {
    let reject = |v: Vector3, unit: Vector3| v - unit * v.dot(unit);
    let e1 = v1.normalize()?;
    let e2 = reject(v2, e1).normalize()?;
    let e3 = reject(reject(v3, e1), e2).normalize()?;
    Some([e1, e2, e3])
}
