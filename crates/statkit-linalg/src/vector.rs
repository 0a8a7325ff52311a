use serde::{Deserialize, Serialize};

use crate::EPSILON;

/// A 2D vector.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Serialize,
    Deserialize,
    derive_more::Add,
    derive_more::Sub,
    derive_more::Neg,
    derive_more::Mul,
    derive_more::Display,
)]
#[display("({x}, {y})")]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const X: Self = Self::new(1.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0);

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Scalar 2D cross product (z component of the 3D cross product).
    ///
    /// Positive when `other` is counter-clockwise from `self`.
    #[must_use]
    pub fn cross(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    #[must_use]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Unit vector in the same direction, or `None` for a (near) zero vector.
    #[must_use]
    pub fn normalize(self) -> Option<Self> {
        let length = self.length();
        (length > EPSILON).then(|| self * (1.0 / length))
    }

    /// Orthogonal projection of `self` onto the line spanned by `onto`.
    ///
    /// Returns `None` when `onto` is the zero vector.
    #[must_use]
    pub fn project_onto(self, onto: Self) -> Option<Self> {
        let denom = onto.length_squared();
        (denom > EPSILON * EPSILON).then(|| onto * (self.dot(onto) / denom))
    }

    /// `self` rotated by 90 degrees counter-clockwise.
    #[must_use]
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Angle between the two vectors in radians, in `[0, π]`.
    #[must_use]
    pub fn angle_between(self, other: Self) -> Option<f64> {
        let a = self.normalize()?;
        let b = other.normalize()?;
        Some(a.dot(b).clamp(-1.0, 1.0).acos())
    }

    #[must_use]
    pub fn approx_eq(self, other: Self, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }
}

/// A 3D vector.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Serialize,
    Deserialize,
    derive_more::Add,
    derive_more::Sub,
    derive_more::Neg,
    derive_more::Mul,
    derive_more::Display,
)]
#[display("({x}, {y}, {z})")]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[must_use]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction, or `None` for a (near) zero vector.
    #[must_use]
    pub fn normalize(self) -> Option<Self> {
        let length = self.length();
        (length > EPSILON).then(|| self * (1.0 / length))
    }

    #[must_use]
    pub fn approx_eq(self, other: Self, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
            && (self.z - other.z).abs() <= tolerance
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn test_arithmetic() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, -1.0);
        assert_eq!(a + b, Vector2::new(4.0, 1.0));
        assert_eq!(a - b, Vector2::new(-2.0, 3.0));
        assert_eq!(-a, Vector2::new(-1.0, -2.0));
        assert_eq!(a * 2.0, Vector2::new(2.0, 4.0));
        assert_eq!(a.dot(b), 1.0);
        assert_eq!(a.cross(b), -7.0);
        assert_eq!(Vector2::X.cross(Vector2::Y), 1.0);
    }

    #[test]
    fn test_normalize() {
        let unit = Vector2::new(3.0, 4.0).normalize().unwrap();
        assert!(unit.approx_eq(Vector2::new(0.6, 0.8), 1e-15));
        assert_eq!(Vector2::ZERO.normalize(), None);
        assert_eq!(Vector3::ZERO.normalize(), None);
        assert!((Vector3::new(1.0, 2.0, 2.0).normalize().unwrap().length() - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_projection() {
        let v = Vector2::new(2.0, 3.0);
        assert_eq!(v.project_onto(Vector2::X), Some(Vector2::new(2.0, 0.0)));
        assert_eq!(v.project_onto(Vector2::ZERO), None);
        let onto = Vector2::new(1.0, 1.0);
        let p = v.project_onto(onto).unwrap();
        assert!((v - p).dot(onto).abs() < 1e-12);
    }

    #[test]
    fn test_angle_between() {
        let angle = Vector2::X.angle_between(Vector2::Y).unwrap();
        assert!((angle - FRAC_PI_2).abs() < 1e-15);
        assert_eq!(Vector2::X.angle_between(Vector2::ZERO), None);
    }

    #[test]
    fn test_cross3() {
        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = Vector3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(x), Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector2::new(1.0, -0.5).to_string(), "(1, -0.5)");
        assert_eq!(Vector3::new(1.0, 2.0, 3.0).to_string(), "(1, 2, 3)");
    }
}
