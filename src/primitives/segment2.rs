//! 2D line segment type.

use super::{Point2, Vec2};
use num_traits::Float;

/// Squared length below which a segment is treated as a single point.
const DEGENERATE_LENGTH_SQ: f64 = 1e-12;

/// Denominator magnitude below which two segments are treated as parallel.
const PARALLEL_EPS: f64 = 1e-12;

/// Slack on the segment parameters when accepting an intersection.
const PARAM_EPS: f64 = 1e-10;

/// A 2D line segment defined by two endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Returns the direction vector from start to end.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.end - self.start
    }

    /// Returns the length of the segment.
    #[inline]
    pub fn length(self) -> F {
        self.start.distance(self.end)
    }

    /// Returns the point at parameter `t` along the segment.
    #[inline]
    pub fn point_at(self, t: F) -> Point2<F> {
        self.start.lerp(self.end, t)
    }

    /// Computes the closest point on the segment to `p`.
    ///
    /// Returns `(closest_point, t)` with `t` clamped to `[0, 1]`. A segment
    /// shorter than 1e-6 collapses onto its start point.
    pub fn closest_point(self, p: Point2<F>) -> (Point2<F>, F) {
        let v = self.direction();
        let len_sq = v.magnitude_squared();

        if len_sq < F::from(DEGENERATE_LENGTH_SQ).unwrap() {
            return (self.start, F::zero());
        }

        let t = (p - self.start).dot(v) / len_sq;
        let t = t.max(F::zero()).min(F::one());

        (self.point_at(t), t)
    }

    /// Distance from `p` to the nearest point of the segment.
    #[inline]
    pub fn distance_to_point(self, p: Point2<F>) -> F {
        let (closest, _) = self.closest_point(p);
        p.distance(closest)
    }

    /// Intersects two segments.
    ///
    /// Returns `(t, point)` where `t` is the parameter along `self`, clamped
    /// to `[0, 1]`. Endpoint touches within 1e-10 in parameter space count as
    /// intersections; parallel segments never intersect.
    pub fn intersect(self, other: Self) -> Option<(F, Point2<F>)> {
        let d1 = self.direction();
        let d2 = other.direction();
        let denom = d1.cross(d2);

        if denom.abs() < F::from(PARALLEL_EPS).unwrap() {
            return None;
        }

        let w = other.start - self.start;
        let t = w.cross(d2) / denom;
        let s = w.cross(d1) / denom;

        let eps = F::from(PARAM_EPS).unwrap();
        let lo = -eps;
        let hi = F::one() + eps;
        if t < lo || t > hi || s < lo || s > hi {
            return None;
        }

        let t = t.max(F::zero()).min(F::one());
        Some((t, self.start + d1 * t))
    }
}

impl<F: Float> From<(Point2<F>, Point2<F>)> for Segment2<F> {
    fn from((start, end): (Point2<F>, Point2<F>)) -> Self {
        Self::new(start, end)
    }
}

/// Distance from `p` to the segment `a -> b`.
#[inline]
pub fn point_segment_distance<F: Float>(p: Point2<F>, a: Point2<F>, b: Point2<F>) -> F {
    Segment2::new(a, b).distance_to_point(p)
}

/// Intersection point of the segments `p1 -> p2` and `p3 -> p4`, if any.
#[inline]
pub fn segment_intersection<F: Float>(
    p1: Point2<F>,
    p2: Point2<F>,
    p3: Point2<F>,
    p4: Point2<F>,
) -> Option<Point2<F>> {
    Segment2::new(p1, p2)
        .intersect(Segment2::new(p3, p4))
        .map(|(_, point)| point)
}
