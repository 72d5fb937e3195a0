//! 2D vector type for edge directions, normals and offsets.

use num_traits::Float;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A 2D vector representing a direction or offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Creates a new vector.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Creates a zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Computes the dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Computes the 2D cross product (z-component of the 3D cross product).
    ///
    /// Positive means `other` is counter-clockwise from `self`.
    #[inline]
    pub fn cross(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }

    /// Returns the squared magnitude.
    #[inline]
    pub fn magnitude_squared(self) -> F {
        self.dot(self)
    }

    /// Returns the magnitude.
    #[inline]
    pub fn magnitude(self) -> F {
        self.magnitude_squared().sqrt()
    }

    /// Returns the unit vector in this direction.
    ///
    /// Returns `None` when the magnitude is below `min_length`.
    #[inline]
    pub fn normalize_or_none(self, min_length: F) -> Option<Self> {
        let mag = self.magnitude();
        if mag < min_length || mag <= F::zero() {
            None
        } else {
            Some(self / mag)
        }
    }

    /// Left-hand normal (rotated 90 degrees counter-clockwise).
    ///
    /// For an edge of a counter-clockwise ring this points into the interior.
    #[inline]
    pub fn left_normal(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Right-hand normal (rotated 90 degrees clockwise).
    #[inline]
    pub fn right_normal(self) -> Self {
        Self::new(self.y, -self.x)
    }

    /// Polar angle of the vector in radians, in `(-pi, pi]`.
    #[inline]
    pub fn angle(self) -> F {
        self.y.atan2(self.x)
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl<F: Float> Mul<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: F) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl<F: Float> Div<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn div(self, scalar: F) -> Self {
        Self::new(self.x / scalar, self.y / scalar)
    }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<F: Float> Default for Vec2<F> {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cross_sign() {
        let east: Vec2<f64> = Vec2::new(1.0, 0.0);
        let north = Vec2::new(0.0, 1.0);
        assert_eq!(east.cross(north), 1.0);
        assert_eq!(north.cross(east), -1.0);
    }

    #[test]
    fn test_normalize_or_none() {
        let v: Vec2<f64> = Vec2::new(3.0, 4.0);
        let n = v.normalize_or_none(1e-12).unwrap();
        assert_relative_eq!(n.magnitude(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(n.x, 0.6, epsilon = 1e-12);

        assert!(Vec2::<f64>::zero().normalize_or_none(1e-12).is_none());
        assert!(Vec2::new(1e-14_f64, 0.0).normalize_or_none(1e-12).is_none());
    }

    #[test]
    fn test_normals_of_ccw_edge() {
        // Bottom edge of a CCW square runs east; the interior is north.
        let edge: Vec2<f64> = Vec2::new(1.0, 0.0);
        assert_eq!(edge.left_normal(), Vec2::new(0.0, 1.0));
        assert_eq!(edge.right_normal(), Vec2::new(0.0, -1.0));
    }

    #[test]
    fn test_angle() {
        let v: Vec2<f64> = Vec2::new(0.0, 2.0);
        assert_relative_eq!(v.angle(), std::f64::consts::FRAC_PI_2);
        assert_relative_eq!(Vec2::new(-1.0_f64, 0.0).angle(), std::f64::consts::PI);
    }

    #[test]
    fn test_arithmetic() {
        let a: Vec2<f64> = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);
        assert_eq!(a + b, Vec2::new(4.0, 6.0));
        assert_eq!(b - a, Vec2::new(2.0, 2.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(b / 2.0, Vec2::new(1.5, 2.0));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
    }
}
