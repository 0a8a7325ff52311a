use std::ops::Mul;

use serde::{Deserialize, Serialize};

use crate::{
    EPSILON,
    vector::{Vector2, Vector3},
};

/// A 2x2 matrix `[[a, b], [c, d]]`.
///
/// Applied to a column vector `(x, y)` it yields `(a x + b y, c x + d y)`, so
/// the columns `(a, c)` and `(b, d)` are the images of the basis vectors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, derive_more::Display)]
#[display("[[{a}, {b}], [{c}, {d}]]")]
pub struct Matrix2 {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

/// Axis for [`Matrix2::reflection`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReflectionAxis {
    /// Mirror across the x axis.
    X,
    /// Mirror across the y axis.
    Y,
    /// Mirror across the line through the origin along this vector.
    Line(Vector2),
}

impl Default for Matrix2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix2 {
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0);
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Matrix whose columns are `i_hat` and `j_hat`.
    #[must_use]
    pub const fn from_columns(i_hat: Vector2, j_hat: Vector2) -> Self {
        Self::new(i_hat.x, j_hat.x, i_hat.y, j_hat.y)
    }

    /// First column: the image of `(1, 0)`.
    #[must_use]
    pub const fn i_hat(&self) -> Vector2 {
        Vector2::new(self.a, self.c)
    }

    /// Second column: the image of `(0, 1)`.
    #[must_use]
    pub const fn j_hat(&self) -> Vector2 {
        Vector2::new(self.b, self.d)
    }

    /// Counter-clockwise rotation by `angle` radians.
    #[must_use]
    pub fn rotation(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos, -sin, sin, cos)
    }

    #[must_use]
    pub const fn scaling(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy)
    }

    #[must_use]
    pub const fn shear(shx: f64, shy: f64) -> Self {
        Self::new(1.0, shx, shy, 1.0)
    }

    /// Reflection across an axis. A zero-length [`ReflectionAxis::Line`]
    /// gives the identity.
    #[must_use]
    pub fn reflection(axis: ReflectionAxis) -> Self {
        match axis {
            ReflectionAxis::X => Self::new(1.0, 0.0, 0.0, -1.0),
            ReflectionAxis::Y => Self::new(-1.0, 0.0, 0.0, 1.0),
            ReflectionAxis::Line(v) => {
                let len_sq = v.length_squared();
                if len_sq == 0.0 {
                    return Self::IDENTITY;
                }
                let (x2, y2, xy) = (v.x * v.x, v.y * v.y, v.x * v.y);
                Self::new(
                    (x2 - y2) / len_sq,
                    2.0 * xy / len_sq,
                    2.0 * xy / len_sq,
                    (y2 - x2) / len_sq,
                )
            }
        }
    }

    /// Orthogonal projection onto the line spanned by `onto`. The zero vector
    /// gives the zero matrix.
    #[must_use]
    pub fn projection(onto: Vector2) -> Self {
        let len_sq = onto.length_squared();
        if len_sq == 0.0 {
            return Self::ZERO;
        }
        let xy = onto.x * onto.y / len_sq;
        Self::new(onto.x * onto.x / len_sq, xy, xy, onto.y * onto.y / len_sq)
    }

    /// Applies the transformation to `v`.
    ///
    /// # Examples
    ///
    /// ```
    /// use statkit_linalg::{Matrix2, Vector2};
    ///
    /// let m = Matrix2::new(2.0, 0.0, 0.0, 3.0);
    /// assert_eq!(m.apply(Vector2::new(1.0, 0.0)), Vector2::new(2.0, 0.0));
    /// assert_eq!(m * Vector2::new(1.0, 1.0), Vector2::new(2.0, 3.0));
    /// ```
    #[must_use]
    pub fn apply(&self, v: Vector2) -> Vector2 {
        Vector2::new(self.a * v.x + self.b * v.y, self.c * v.x + self.d * v.y)
    }

    /// Matrix product `self * other` (apply `other` first, then `self`).
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        Self::new(
            self.a * other.a + self.b * other.c,
            self.a * other.b + self.b * other.d,
            self.c * other.a + self.d * other.c,
            self.c * other.b + self.d * other.d,
        )
    }

    #[must_use]
    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    #[must_use]
    pub fn trace(&self) -> f64 {
        self.a + self.d
    }

    #[must_use]
    pub fn transpose(&self) -> Self {
        Self::new(self.a, self.c, self.b, self.d)
    }

    /// Inverse matrix, or `None` when the matrix is singular.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() < EPSILON {
            return None;
        }
        let inv = 1.0 / det;
        Some(Self::new(
            inv * self.d,
            -inv * self.b,
            -inv * self.c,
            inv * self.a,
        ))
    }

    /// Element-wise linear interpolation; `t = 0` gives `self`, `t = 1` gives
    /// `other`.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        // exact at both endpoints
        let lerp = |from: f64, to: f64| from * (1.0 - t) + to * t;
        Self::new(
            lerp(self.a, other.a),
            lerp(self.b, other.b),
            lerp(self.c, other.c),
            lerp(self.d, other.d),
        )
    }

    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        [
            self.a - other.a,
            self.b - other.b,
            self.c - other.c,
            self.d - other.d,
        ]
        .iter()
        .all(|diff| diff.abs() <= tolerance)
    }
}

impl Mul<Vector2> for Matrix2 {
    type Output = Vector2;

    fn mul(self, rhs: Vector2) -> Vector2 {
        self.apply(rhs)
    }
}

impl Mul for Matrix2 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

/// Applies `m` to `v`. Same as [`Matrix2::apply`].
#[must_use]
pub fn apply_matrix(v: Vector2, m: &Matrix2) -> Vector2 {
    m.apply(v)
}

/// Solves `m * x = rhs` by Cramer's rule.
///
/// Returns `None` when the system has no unique solution.
///
/// # Examples
///
/// ```
/// use statkit_linalg::{Matrix2, Vector2, solve_2x2};
///
/// // x + y = 3, x - y = 1
/// let m = Matrix2::new(1.0, 1.0, 1.0, -1.0);
/// assert_eq!(solve_2x2(&m, Vector2::new(3.0, 1.0)), Some(Vector2::new(2.0, 1.0)));
/// ```
#[must_use]
pub fn solve_2x2(m: &Matrix2, rhs: Vector2) -> Option<Vector2> {
    let det = m.determinant();
    if det.abs() < EPSILON {
        return None;
    }
    Some(Vector2::new(
        (rhs.x * m.d - rhs.y * m.b) / det,
        (m.a * rhs.y - m.c * rhs.x) / det,
    ))
}

/// A 3x3 matrix stored row by row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Matrix3 {
    pub rows: [[f64; 3]; 3],
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix3 {
    pub const IDENTITY: Self = Self::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);

    #[must_use]
    pub const fn new(rows: [[f64; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Matrix whose columns are the given vectors.
    #[must_use]
    pub const fn from_columns(c0: Vector3, c1: Vector3, c2: Vector3) -> Self {
        Self::new([[c0.x, c1.x, c2.x], [c0.y, c1.y, c2.y], [c0.z, c1.z, c2.z]])
    }

    #[must_use]
    pub fn apply(&self, v: Vector3) -> Vector3 {
        let row = |r: [f64; 3]| r[0] * v.x + r[1] * v.y + r[2] * v.z;
        Vector3::new(row(self.rows[0]), row(self.rows[1]), row(self.rows[2]))
    }

    /// Matrix product `self * other`.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        let mut rows = [[0.0; 3]; 3];
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.rows[i][k] * other.rows[k][j]).sum();
            }
        }
        Self::new(rows)
    }

    /// Determinant by cofactor expansion along the first row.
    #[must_use]
    pub fn determinant(&self) -> f64 {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.rows;
        a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
    }

    #[must_use]
    pub fn trace(&self) -> f64 {
        self.rows[0][0] + self.rows[1][1] + self.rows[2][2]
    }

    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut rows = self.rows;
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = self.rows[j][i];
            }
        }
        Self::new(rows)
    }
}

impl Mul<Vector3> for Matrix3 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        self.apply(rhs)
    }
}

impl Mul for Matrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn test_apply_diagonal_scaling() {
        let m = Matrix2::new(2.0, 0.0, 0.0, 3.0);
        assert_eq!(
            apply_matrix(Vector2::new(1.0, 0.0), &m),
            Vector2::new(2.0, 0.0)
        );
        assert_eq!(m.i_hat(), Vector2::new(2.0, 0.0));
        assert_eq!(m.j_hat(), Vector2::new(0.0, 3.0));
    }

    #[test]
    fn test_from_columns_round_trip() {
        let m = Matrix2::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(Matrix2::from_columns(m.i_hat(), m.j_hat()), m);
    }

    #[test]
    fn test_determinant_and_trace() {
        let m = Matrix2::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(m.determinant(), -2.0);
        assert_eq!(m.trace(), 5.0);
        assert_eq!(m.transpose(), Matrix2::new(1.0, 3.0, 2.0, 4.0));
    }

    #[test]
    fn test_multiply_and_inverse() {
        let m = Matrix2::new(4.0, 7.0, 2.0, 6.0);
        let inv = m.inverse().unwrap();
        assert!((m * inv).approx_eq(&Matrix2::IDENTITY, 1e-12));
        assert!((inv * m).approx_eq(&Matrix2::IDENTITY, 1e-12));
        assert_eq!(Matrix2::new(1.0, 2.0, 2.0, 4.0).inverse(), None);
    }

    #[test]
    fn test_rotation() {
        let r = Matrix2::rotation(FRAC_PI_2);
        assert!(r.apply(Vector2::X).approx_eq(Vector2::Y, 1e-15));
        assert!((r.determinant() - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_reflection() {
        let v = Vector2::new(2.0, 3.0);
        assert_eq!(
            Matrix2::reflection(ReflectionAxis::X).apply(v),
            Vector2::new(2.0, -3.0)
        );
        assert_eq!(
            Matrix2::reflection(ReflectionAxis::Y).apply(v),
            Vector2::new(-2.0, 3.0)
        );
        let diagonal = Matrix2::reflection(ReflectionAxis::Line(Vector2::new(1.0, 1.0)));
        assert!(diagonal.apply(v).approx_eq(Vector2::new(3.0, 2.0), 1e-15));
        assert_eq!(
            Matrix2::reflection(ReflectionAxis::Line(Vector2::ZERO)),
            Matrix2::IDENTITY
        );
        assert!((diagonal.determinant() + 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_projection_matrix() {
        let p = Matrix2::projection(Vector2::new(1.0, 1.0));
        assert!(p.multiply(&p).approx_eq(&p, 1e-15));
        assert_eq!(Matrix2::projection(Vector2::ZERO), Matrix2::ZERO);
        let v = Vector2::new(2.0, 0.0);
        assert_eq!(Some(p.apply(v)), v.project_onto(Vector2::new(1.0, 1.0)));
    }

    #[test]
    fn test_shear_and_scaling() {
        let v = Vector2::new(1.0, 1.0);
        assert_eq!(Matrix2::shear(2.0, 0.0).apply(v), Vector2::new(3.0, 1.0));
        assert_eq!(Matrix2::scaling(2.0, -1.0).apply(v), Vector2::new(2.0, -1.0));
    }

    #[test]
    fn test_lerp() {
        let from = Matrix2::IDENTITY;
        let to = Matrix2::scaling(3.0, 5.0);
        assert_eq!(from.lerp(&to, 0.0), from);
        assert_eq!(from.lerp(&to, 1.0), to);
        assert_eq!(from.lerp(&to, 0.5), Matrix2::scaling(2.0, 3.0));
    }

    #[test]
    fn test_solve() {
        let m = Matrix2::new(2.0, 1.0, 1.0, 3.0);
        let x = solve_2x2(&m, Vector2::new(3.0, 5.0)).unwrap();
        assert!(m.apply(x).approx_eq(Vector2::new(3.0, 5.0), 1e-12));
        assert_eq!(solve_2x2(&Matrix2::ZERO, Vector2::X), None);
    }

    #[test]
    fn test_matrix3() {
        let m = Matrix3::new([[2.0, 0.0, 1.0], [1.0, 3.0, 2.0], [1.0, 1.0, 2.0]]);
        assert_eq!(m.determinant(), 6.0);
        assert_eq!(m.trace(), 7.0);
        assert_eq!(Matrix3::IDENTITY.determinant(), 1.0);
        assert_eq!(m * Matrix3::IDENTITY, m);
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(m.transpose().rows[0], [2.0, 1.0, 1.0]);
        assert_eq!(
            m * Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(2.0, 1.0, 1.0)
        );
        let cols = Matrix3::from_columns(
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(4.0, 5.0, 6.0),
            Vector3::new(7.0, 8.0, 10.0),
        );
        assert_eq!(cols.rows[0], [1.0, 4.0, 7.0]);
        assert_eq!(cols.determinant(), -3.0);
    }

    #[test]
    fn test_product_determinant() {
        let a = Matrix2::new(1.0, 2.0, 3.0, 4.0);
        let b = Matrix2::new(0.0, 1.0, -1.0, 2.0);
        assert_eq!((a * b).determinant(), a.determinant() * b.determinant());
    }

    #[test]
    fn test_serde_shape() {
        let m: Matrix2 = serde_json::from_str(r#"{"a": 1.0, "b": 2.0, "c": 3.0, "d": 4.0}"#).unwrap();
        assert_eq!(m, Matrix2::new(1.0, 2.0, 3.0, 4.0));

        let axis: ReflectionAxis = serde_json::from_str(r#"{"line": {"x": 1.0, "y": 1.0}}"#).unwrap();
        assert_eq!(axis, ReflectionAxis::Line(Vector2::new(1.0, 1.0)));
        assert_eq!(serde_json::to_string(&ReflectionAxis::X).unwrap(), r#""x""#);
    }
}
