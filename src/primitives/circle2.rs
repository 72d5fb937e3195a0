//! Circular exclusion zone.

use super::Point2;
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Determinant magnitude below which three points count as collinear.
const COLLINEAR_DET_EPS: f64 = 1e-9;

/// A circle defined by center and radius.
///
/// Used for mount holes that seeds must avoid and that are carved out of
/// the finished cells.
///
/// # Example
///
/// ```
/// use lightweb::primitives::{Circle2, Point2};
///
/// let hole: Circle2<f64> = Circle2::new(Point2::new(0.0, 0.0), 2.0);
/// assert!(hole.contains(Point2::new(1.0, 0.0)));
/// assert!(!hole.contains(Point2::new(2.0, 0.0))); // on the rim is outside
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle2<F> {
    /// Center point of the circle
    pub center: Point2<F>,
    /// Radius of the circle (expected to be positive)
    pub radius: F,
}

impl<F: Float> Circle2<F> {
    /// Creates a new circle from center and radius.
    #[inline]
    pub fn new(center: Point2<F>, radius: F) -> Self {
        Self { center, radius }
    }

    /// Creates a circle from center coordinates and radius.
    #[inline]
    pub fn from_coords(cx: F, cy: F, radius: F) -> Self {
        Self::new(Point2::new(cx, cy), radius)
    }

    /// The circle through three points.
    ///
    /// Returns `None` when the points are (nearly) collinear, i.e. the
    /// doubled determinant of the closed-form solve is below 1e-9.
    pub fn through(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Option<Self> {
        let two = F::from(2.0).unwrap();
        let d = two * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
        if d.abs() < F::from(COLLINEAR_DET_EPS).unwrap() {
            return None;
        }

        let a_sq = a.x * a.x + a.y * a.y;
        let b_sq = b.x * b.x + b.y * b.y;
        let c_sq = c.x * c.x + c.y * c.y;

        let ux = (a_sq * (b.y - c.y) + b_sq * (c.y - a.y) + c_sq * (a.y - b.y)) / d;
        let uy = (a_sq * (c.x - b.x) + b_sq * (a.x - c.x) + c_sq * (b.x - a.x)) / d;
        let center = Point2::new(ux, uy);

        Some(Self::new(center, center.distance(a)))
    }

    /// Strict containment: points on the rim are outside.
    #[inline]
    pub fn contains(&self, point: Point2<F>) -> bool {
        self.center.distance(point) < self.radius
    }

    /// Distance from `point` to the rim; negative inside the circle.
    #[inline]
    pub fn distance_to_rim(&self, point: Point2<F>) -> F {
        self.center.distance(point) - self.radius
    }

    /// Returns a copy with the radius grown by `margin`.
    #[inline]
    pub fn grown(&self, margin: F) -> Self {
        Self::new(self.center, self.radius + margin)
    }

    /// Returns the point on the rim at `angle` radians.
    #[inline]
    pub fn point_at(&self, angle: F) -> Point2<F> {
        Point2::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }

    /// Tessellates the circle into a counter-clockwise polygon.
    ///
    /// Vertices lie on the rim, so the polygon is inscribed.
    pub fn to_polygon(&self, num_segments: usize) -> Vec<Point2<F>> {
        let n = num_segments.max(3);
        let tau = F::from(std::f64::consts::TAU).unwrap();

        (0..n)
            .map(|i| {
                let angle = tau * F::from(i).unwrap() / F::from(n).unwrap();
                self.point_at(angle)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::polygon_signed_area;
    use approx::assert_relative_eq;

    #[test]
    fn test_contains_is_strict() {
        let c: Circle2<f64> = Circle2::from_coords(5.0, 5.0, 1.0);
        assert!(c.contains(Point2::new(5.5, 5.0)));
        assert!(!c.contains(Point2::new(6.0, 5.0)));
        assert!(!c.contains(Point2::new(7.0, 5.0)));
    }

    #[test]
    fn test_distance_to_rim() {
        let c: Circle2<f64> = Circle2::from_coords(0.0, 0.0, 2.0);
        assert_relative_eq!(c.distance_to_rim(Point2::new(5.0, 0.0)), 3.0);
        assert_relative_eq!(c.distance_to_rim(Point2::new(1.0, 0.0)), -1.0);
    }

    #[test]
    fn test_grown() {
        let c: Circle2<f64> = Circle2::from_coords(1.0, 1.0, 2.0).grown(0.5);
        assert_eq!(c.radius, 2.5);
        assert_eq!(c.center, Point2::new(1.0, 1.0));
    }

    #[test]
    fn test_to_polygon_is_ccw_and_inscribed() {
        let c: Circle2<f64> = Circle2::from_coords(0.0, 0.0, 1.0);
        let poly = c.to_polygon(64);
        assert_eq!(poly.len(), 64);
        for p in &poly {
            assert_relative_eq!(p.distance(c.center), 1.0, epsilon = 1e-12);
        }
        let area = polygon_signed_area(&poly);
        assert!(area > 0.0);
        assert!(area < std::f64::consts::PI);
        assert_relative_eq!(area, std::f64::consts::PI, epsilon = 0.01);
    }

    #[test]
    fn test_to_polygon_minimum_segments() {
        let c: Circle2<f64> = Circle2::from_coords(0.0, 0.0, 1.0);
        assert_eq!(c.to_polygon(1).len(), 3);
    }

    #[test]
    fn test_through_three_points() {
        let c = Circle2::through(
            Point2::new(0.0_f64, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(0.0, 4.0),
        )
        .unwrap();
        assert_relative_eq!(c.center.x, 2.0);
        assert_relative_eq!(c.center.y, 2.0);
        assert_relative_eq!(c.radius, 8.0_f64.sqrt());
    }

    #[test]
    fn test_through_collinear() {
        let c = Circle2::through(
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 2.0),
        );
        assert!(c.is_none());
    }
}
