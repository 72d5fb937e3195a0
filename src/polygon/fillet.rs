//! Corner rounding into line and arc segments.

use crate::polygon::core::{edges, polygon_signed_area};
use crate::primitives::{Circle2, Point2};
use num_traits::Float;
use std::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Edges shorter than this leave their corner sharp.
const DEGENERATE_EDGE: f64 = 1e-12;

/// Corners within this many radians of straight or folded stay sharp.
const ANGLE_EPS: f64 = 1e-6;

/// Fillet tangent points never move further than this fraction along an edge.
const MAX_TANGENT_FRACTION: f64 = 0.4;

/// Connecting lines shorter than this are dropped.
const MIN_LINE_LENGTH: f64 = 1e-6;

/// One piece of a rounded outline.
///
/// An arc is described by three points on its circle so a renderer can pick
/// its own arc representation.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment<F> {
    Line {
        start: Point2<F>,
        end: Point2<F>,
    },
    Arc {
        start: Point2<F>,
        mid: Point2<F>,
        end: Point2<F>,
    },
}

impl<F: Float> PathSegment<F> {
    #[inline]
    pub fn start(&self) -> Point2<F> {
        match *self {
            PathSegment::Line { start, .. } | PathSegment::Arc { start, .. } => start,
        }
    }

    #[inline]
    pub fn end(&self) -> Point2<F> {
        match *self {
            PathSegment::Line { end, .. } | PathSegment::Arc { end, .. } => end,
        }
    }

    #[inline]
    pub fn is_arc(&self) -> bool {
        matches!(self, PathSegment::Arc { .. })
    }

    /// The circle an arc lies on; `None` for lines and collinear arcs.
    pub fn arc_circle(&self) -> Option<Circle2<F>> {
        match *self {
            PathSegment::Arc { start, mid, end } => Circle2::through(start, mid, end),
            PathSegment::Line { .. } => None,
        }
    }
}

/// Fillet geometry at one vertex.
#[derive(Debug, Clone, Copy)]
struct Fillet<F> {
    entry: Point2<F>,
    mid: Point2<F>,
    exit: Point2<F>,
}

/// Replaces each convex corner of a polygon with a tangent circular arc.
///
/// With `radius <= 0` or fewer than 3 vertices every edge is emitted as a
/// line. Reflex corners, corners next to a zero-length edge, and corners
/// that are (almost) straight stay sharp. The tangent distance is capped at
/// 40% of the shorter adjacent edge, shrinking the radius to match, so
/// neighbouring fillets never overlap.
///
/// # Example
///
/// ```
/// use lightweb::polygon::round_corners;
/// use lightweb::Point2;
///
/// let square = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(10.0, 0.0),
///     Point2::new(10.0, 10.0),
///     Point2::new(0.0, 10.0),
/// ];
/// let segments = round_corners(&square, 1.0);
/// assert_eq!(segments.iter().filter(|s| s.is_arc()).count(), 4);
/// assert_eq!(segments.len(), 8);
/// ```
pub fn round_corners<F: Float>(vertices: &[Point2<F>], radius: F) -> Vec<PathSegment<F>> {
    let n = vertices.len();
    if n < 3 || radius <= F::zero() {
        return edges(vertices)
            .map(|e| PathSegment::Line {
                start: e.start,
                end: e.end,
            })
            .collect();
    }

    let area = polygon_signed_area(vertices);
    let fillets: Vec<Option<Fillet<F>>> = (0..n)
        .map(|i| {
            fillet_at(
                vertices[(i + n - 1) % n],
                vertices[i],
                vertices[(i + 1) % n],
                radius,
                area,
            )
        })
        .collect();

    let min_line = F::from(MIN_LINE_LENGTH).unwrap();
    let mut segments = Vec::with_capacity(2 * n);
    for i in 0..n {
        let j = (i + 1) % n;

        let from = match fillets[i] {
            Some(f) => {
                segments.push(PathSegment::Arc {
                    start: f.entry,
                    mid: f.mid,
                    end: f.exit,
                });
                f.exit
            }
            None => vertices[i],
        };
        let to = fillets[j].map_or(vertices[j], |f| f.entry);

        if from.distance(to) > min_line {
            segments.push(PathSegment::Line {
                start: from,
                end: to,
            });
        }
    }

    segments
}

fn fillet_at<F: Float>(
    prev: Point2<F>,
    vertex: Point2<F>,
    next: Point2<F>,
    radius: F,
    area: F,
) -> Option<Fillet<F>> {
    let to_prev = prev - vertex;
    let to_next = next - vertex;
    let len_prev = to_prev.magnitude();
    let len_next = to_next.magnitude();

    let degenerate = F::from(DEGENERATE_EDGE).unwrap();
    if len_prev < degenerate || len_next < degenerate {
        return None;
    }

    // Reflex: turning against the polygon's winding.
    if to_prev.cross(to_next) * area > F::zero() {
        return None;
    }

    let u_prev = to_prev / len_prev;
    let u_next = to_next / len_next;

    let cos = u_prev.dot(u_next).max(-F::one()).min(F::one());
    let angle = cos.acos();
    let angle_eps = F::from(ANGLE_EPS).unwrap();
    if angle < angle_eps || (angle - F::from(PI).unwrap()).abs() < angle_eps {
        return None;
    }

    let half = angle / F::from(2.0).unwrap();
    let mut tangent = radius / half.tan();
    let mut r = radius;

    let max_tangent = len_prev.min(len_next) * F::from(MAX_TANGENT_FRACTION).unwrap();
    if tangent > max_tangent {
        tangent = max_tangent;
        r = tangent * half.tan();
    }

    let bisector = (u_prev + u_next).normalize_or_none(degenerate)?;
    let center = vertex + bisector * (r / half.sin());

    Some(Fillet {
        entry: vertex + u_prev * tangent,
        mid: center - bisector * r,
        exit: vertex + u_next * tangent,
    })
}
