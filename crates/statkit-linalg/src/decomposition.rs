//! Closed-form eigen decomposition and SVD of 2x2 matrices.
//!
//! Inputs are restricted to 2x2, so everything follows from the
//! characteristic polynomial `λ² - tr(A) λ + det(A) = 0` and no iterative
//! solver is involved.
//!
//! A matrix with complex eigenvalues (for example any rotation other than
//! 0° or 180°) has no real decomposition; [`Matrix2::eigen`] then returns
//! `None` so callers can show a fallback instead of NaN-filled vectors.
//!
//! # Examples
//!
//! ```
//! use statkit_linalg::{Matrix2, Vector2};
//!
//! let m = Matrix2::new(2.0, 1.0, 1.0, 2.0);
//! let eigen = m.eigen().unwrap();
//! assert!((eigen.lambda1 - 3.0).abs() < 1e-12);
//! assert!((eigen.lambda2 - 1.0).abs() < 1e-12);
//!
//! // A quarter turn leaves no direction unchanged.
//! assert!(Matrix2::rotation(std::f64::consts::FRAC_PI_2).eigen().is_none());
//! ```

use serde::{Deserialize, Serialize};

use crate::{EPSILON, matrix::Matrix2, vector::Vector2};

/// Largest `|u1 · u2|` or `|v1 · v2|` accepted for an SVD result.
const ORTHOGONALITY_TOLERANCE: f64 = 0.01;

/// Real eigenvalues and unit eigenvectors of a 2x2 matrix.
///
/// `lambda1 >= lambda2`, and `A v1 = lambda1 v1`, `A v2 = lambda2 v2`. For a
/// defective matrix (a repeated eigenvalue with a single eigen direction)
/// `v2` equals `v1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Eigen2 {
    pub lambda1: f64,
    pub lambda2: f64,
    pub v1: Vector2,
    pub v2: Vector2,
}

/// Singular value decomposition `A = U Σ Vᵀ` of a 2x2 matrix.
///
/// `s1 >= s2 >= 0`; `u1, u2` and `v1, v2` are orthonormal pairs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Svd2 {
    pub u1: Vector2,
    pub u2: Vector2,
    pub s1: f64,
    pub s2: f64,
    pub v1: Vector2,
    pub v2: Vector2,
}

impl Svd2 {
    /// Left singular vectors as columns.
    #[must_use]
    pub const fn u(&self) -> Matrix2 {
        Matrix2::from_columns(self.u1, self.u2)
    }

    /// Singular values on the diagonal.
    #[must_use]
    pub const fn sigma(&self) -> Matrix2 {
        Matrix2::scaling(self.s1, self.s2)
    }

    /// Right singular vectors as columns.
    #[must_use]
    pub const fn v(&self) -> Matrix2 {
        Matrix2::from_columns(self.v1, self.v2)
    }

    /// `U Σ Vᵀ`, which reproduces the decomposed matrix.
    #[must_use]
    pub fn reconstruct(&self) -> Matrix2 {
        self.u() * self.sigma() * self.v().transpose()
    }
}

impl Matrix2 {
    /// Eigenvalues and eigenvectors of a general 2x2 matrix.
    ///
    /// Returns `None` when the eigenvalues are complex.
    #[must_use]
    pub fn eigen(&self) -> Option<Eigen2> {
        let (lambda1, lambda2) = self.real_eigenvalues()?;
        let (v1, v2) = if self.c.abs() > EPSILON || self.b.abs() > EPSILON {
            (self.eigenvector(lambda1)?, self.eigenvector(lambda2)?)
        } else if self.a >= self.d {
            (Vector2::X, Vector2::Y)
        } else {
            (Vector2::Y, Vector2::X)
        };
        Some(Eigen2 {
            lambda1,
            lambda2,
            v1,
            v2,
        })
    }

    /// Eigen decomposition of a symmetric matrix (`b == c`).
    ///
    /// The eigenvalues of a symmetric matrix are always real and the
    /// eigenvectors are orthonormal, including for repeated eigenvalues.
    /// Returns `None` if the matrix is not symmetric.
    #[must_use]
    pub fn symmetric_eigen(&self) -> Option<Eigen2> {
        let scale = self.b.abs().max(self.c.abs()).max(1.0);
        if (self.b - self.c).abs() > EPSILON * scale {
            log::debug!("matrix {self} is not symmetric");
            return None;
        }
        let off_diagonal = f64::midpoint(self.b, self.c);
        let eigen = Self::new(self.a, off_diagonal, off_diagonal, self.d).eigen()?;
        Some(Eigen2 {
            v2: eigen.v1.perpendicular(),
            ..eigen
        })
    }

    /// Singular value decomposition, computed from the eigen decomposition of
    /// `AᵀA`.
    ///
    /// Returns `None` if the resulting singular vectors fail the
    /// orthogonality check.
    ///
    /// # Examples
    ///
    /// ```
    /// use statkit_linalg::Matrix2;
    ///
    /// let m = Matrix2::new(3.0, 0.0, 4.0, 5.0);
    /// let svd = m.svd().unwrap();
    /// assert!((svd.s1 * svd.s2 - m.determinant().abs()).abs() < 1e-9);
    /// assert!(svd.reconstruct().approx_eq(&m, 1e-9));
    /// ```
    #[must_use]
    pub fn svd(&self) -> Option<Svd2> {
        let gram = self.transpose() * *self;
        let eigen = gram.symmetric_eigen()?;
        let (v1, v2) = (eigen.v1, eigen.v2);

        let av1 = self.apply(v1);
        let av2 = self.apply(v2);
        let s1 = av1.length();
        let s2 = av2.length();
        let tiny = EPSILON * s1.max(1.0);

        let u1 = if s1 > tiny { av1 * (1.0 / s1) } else { Vector2::X };
        let u2 = if s2 > tiny {
            av2 * (1.0 / s2)
        } else {
            u1.perpendicular()
        };

        let u_dot = u1.dot(u2);
        let v_dot = v1.dot(v2);
        if u_dot.abs() >= ORTHOGONALITY_TOLERANCE || v_dot.abs() >= ORTHOGONALITY_TOLERANCE {
            log::warn!("SVD orthogonality check failed for {self}: u1·u2 = {u_dot}, v1·v2 = {v_dot}");
            return None;
        }

        Some(Svd2 {
            u1,
            u2,
            s1,
            s2,
            v1,
            v2,
        })
    }

    /// Roots of the characteristic polynomial, largest first.
    fn real_eigenvalues(&self) -> Option<(f64, f64)> {
        let half_trace = self.trace() / 2.0;
        // (tr² - 4 det) / 4 written without cancellation: ((a - d)/2)² + bc
        let half_diff = (self.a - self.d) / 2.0;
        let discriminant = half_diff * half_diff + self.b * self.c;
        // Exact for symmetric input, where bc = b² cannot go negative.
        if discriminant < 0.0 {
            log::debug!("matrix {self} has complex eigenvalues");
            return None;
        }
        let root = discriminant.sqrt();
        Some((half_trace + root, half_trace - root))
    }

    /// Unit eigenvector for `lambda`, assuming `b` or `c` is non-zero.
    fn eigenvector(&self, lambda: f64) -> Option<Vector2> {
        let v = if self.c.abs() > EPSILON {
            Vector2::new(lambda - self.d, self.c)
        } else {
            Vector2::new(self.b, lambda - self.a)
        };
        v.normalize()
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_3};

    use super::*;

    fn assert_eigenpairs(m: &Matrix2, eigen: &Eigen2) {
        for (lambda, v) in [(eigen.lambda1, eigen.v1), (eigen.lambda2, eigen.v2)] {
            assert!((v.length() - 1.0).abs() < 1e-12, "{v} is not unit length");
            assert!(
                m.apply(v).approx_eq(v * lambda, 1e-9),
                "A v != λ v for λ = {lambda}, v = {v}"
            );
        }
        assert!(eigen.lambda1 >= eigen.lambda2);
    }

    #[test]
    fn test_eigen_general() {
        for m in [
            Matrix2::new(2.0, 1.0, 1.0, 2.0),
            Matrix2::new(4.0, 1.0, 2.0, 3.0),
            Matrix2::new(1.0, 2.0, 0.0, 3.0),
            Matrix2::new(0.0, 0.0, 1.0, -2.0),
            Matrix2::new(3.0, -1.0, 5.0, -3.0),
        ] {
            let eigen = m.eigen().unwrap();
            assert_eigenpairs(&m, &eigen);
            assert!((eigen.lambda1 + eigen.lambda2 - m.trace()).abs() < 1e-12);
            assert!((eigen.lambda1 * eigen.lambda2 - m.determinant()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_eigen_diagonal() {
        let eigen = Matrix2::scaling(1.0, 5.0).eigen().unwrap();
        assert_eq!(eigen.lambda1, 5.0);
        assert_eq!(eigen.v1, Vector2::Y);
        assert_eq!(eigen.lambda2, 1.0);
        assert_eq!(eigen.v2, Vector2::X);

        let eigen = Matrix2::scaling(2.0, 2.0).eigen().unwrap();
        assert_eq!((eigen.v1, eigen.v2), (Vector2::X, Vector2::Y));
    }

    #[test]
    fn test_eigen_defective() {
        let shear = Matrix2::shear(1.0, 0.0);
        let eigen = shear.eigen().unwrap();
        assert_eq!(eigen.lambda1, 1.0);
        assert_eq!(eigen.lambda2, 1.0);
        assert_eigenpairs(&shear, &eigen);
        assert!(eigen.v1.approx_eq(eigen.v2, 1e-12));
    }

    #[test]
    fn test_eigen_complex() {
        assert_eq!(Matrix2::rotation(FRAC_PI_2).eigen(), None);
        assert_eq!(Matrix2::rotation(FRAC_PI_3).eigen(), None);
        assert_eq!(Matrix2::new(0.0, -1.0, 1.0, 0.0).eigen(), None);
    }

    #[test]
    fn test_eigen_complex_small_scale() {
        assert_eq!(Matrix2::rotation(1e-5).eigen(), None);
        assert_eq!(Matrix2::new(0.0, -1e-5, 1e-5, 0.0).eigen(), None);
        assert_eq!(Matrix2::new(1e-6, -1e-6, 1e-6, 1e-6).eigen(), None);
    }

    #[test]
    fn test_nearly_symmetric_eigen_is_real() {
        let m = Matrix2::new(1.0, 1e-12, -1e-12, 1.0);
        assert_eq!(m.eigen(), None);
        let eigen = m.symmetric_eigen().unwrap();
        assert_eq!((eigen.lambda1, eigen.lambda2), (1.0, 1.0));
    }

    #[test]
    fn test_symmetric_eigen() {
        let m = Matrix2::new(2.0, -1.0, -1.0, 2.0);
        let eigen = m.symmetric_eigen().unwrap();
        assert_eigenpairs(&m, &eigen);
        assert!(eigen.v1.dot(eigen.v2).abs() < 1e-12);

        let scalar = Matrix2::scaling(3.0, 3.0).symmetric_eigen().unwrap();
        assert!(scalar.v1.dot(scalar.v2).abs() < 1e-12);

        assert_eq!(Matrix2::new(1.0, 2.0, 3.0, 4.0).symmetric_eigen(), None);
    }

    #[test]
    fn test_svd_reconstructs() {
        for m in [
            Matrix2::new(1.0, 2.0, 3.0, 4.0),
            Matrix2::new(2.0, 0.0, 0.0, 3.0),
            Matrix2::rotation(0.7),
            Matrix2::shear(1.5, 0.0),
            Matrix2::new(-1.0, 0.5, 2.0, -3.0),
        ] {
            let svd = m.svd().unwrap();
            assert!(svd.s1 >= svd.s2 && svd.s2 >= 0.0);
            assert!(svd.u1.dot(svd.u2).abs() < 1e-9);
            assert!(svd.v1.dot(svd.v2).abs() < 1e-9);
            assert!(svd.reconstruct().approx_eq(&m, 1e-9), "failed for {m}");
        }
    }

    #[test]
    fn test_svd_rank_deficient() {
        let m = Matrix2::new(1.0, 2.0, 2.0, 4.0);
        let svd = m.svd().unwrap();
        assert!(svd.s2.abs() < 1e-7);
        assert!(svd.reconstruct().approx_eq(&m, 1e-7));

        let zero = Matrix2::ZERO.svd().unwrap();
        assert_eq!(zero.s1, 0.0);
        assert_eq!(zero.s2, 0.0);
        assert!(zero.u1.dot(zero.u2).abs() < 1e-12);
    }

    #[test]
    fn test_rotation_singular_values() {
        let svd = Matrix2::rotation(1.2).svd().unwrap();
        assert!((svd.s1 - 1.0).abs() < 1e-9);
        assert!((svd.s2 - 1.0).abs() < 1e-9);
    }
}
