//! Small fixed-size linear algebra for statkit.
//!
//! This crate provides:
//!
//! - **Vectors**: [`Vector2`] and [`Vector3`] with dot, cross, projection
//!   and normalization
//! - **Matrices**: [`Matrix2`] with transformation constructors (rotation,
//!   scaling, shear, reflection, projection), and [`Matrix3`]
//! - **Linear systems**: [`solve_2x2`] by Cramer's rule
//! - **Decompositions**: closed-form 2x2 eigen decomposition and SVD
//! - **Gram-Schmidt**: orthonormal bases in 2D and 3D
//! - **Animation**: eased interpolation between two transformations
//!
//! Operations that have no answer for degenerate input (normalizing the zero
//! vector, inverting a singular matrix, eigenvectors of a rotation) return
//! `Option` instead of producing NaN.
//!
//! # Examples
//!
//! ```
//! use statkit_linalg::{Matrix2, Vector2, apply_matrix};
//!
//! let m = Matrix2::new(2.0, 0.0, 0.0, 3.0);
//! assert_eq!(apply_matrix(Vector2::new(1.0, 0.0), &m), Vector2::new(2.0, 0.0));
//! assert_eq!(m.determinant(), 6.0);
//! assert_eq!(Matrix2::new(1.0, 2.0, 2.0, 4.0).inverse(), None);
//! ```

pub use self::{
    animation::{animate_transformation, ease_in_out_cubic},
    decomposition::{Eigen2, Svd2},
    matrix::{Matrix2, Matrix3, ReflectionAxis, apply_matrix, solve_2x2},
    orthogonalize::{gram_schmidt, gram_schmidt3},
    vector::{Vector2, Vector3},
};

mod animation;
mod decomposition;
mod matrix;
mod orthogonalize;
mod vector;

/// Tolerance below which lengths and determinants count as zero.
pub const EPSILON: f64 = 1e-9;
