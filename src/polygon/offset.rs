//! Polygon offsetting for rib walls and margin expansion.
//!
//! Two strategies are provided:
//!
//! - **Scale** ([`offset_polygon`], [`expand_polygon`]): every vertex is
//!   pulled toward (or pushed away from) the centroid by
//!   `(inradius ∓ distance) / inradius`, with the inradius approximated as
//!   `2 * area / perimeter`. Cheap and always simple for star-shaped cells.
//! - **Edge intersection** ([`offset_polygon_edges`]): every edge is shifted
//!   along its inward normal and adjacent shifted edges are intersected.
//!   Exact wall thickness, but rejects cells whose offset would fold over.
//!
//! All functions return `None` ("no result") on degenerate input instead of
//! panicking.
//!
//! # Example
//!
//! ```
//! use lightweb::polygon::{offset_polygon, polygon_area};
//! use lightweb::Point2;
//!
//! let square: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(10.0, 0.0),
//!     Point2::new(10.0, 10.0),
//!     Point2::new(0.0, 10.0),
//! ];
//!
//! let shrunk = offset_polygon(&square, 1.0).unwrap();
//! assert!((polygon_area(&shrunk) - 64.0).abs() < 1e-9);
//!
//! // The inradius of the square is 5.
//! assert!(offset_polygon(&square, 5.0).is_none());
//! ```

use crate::polygon::core::{
    polygon_area, polygon_centroid, polygon_perimeter, polygon_signed_area, AREA_EPS,
};
use crate::primitives::{Point2, Vec2};
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Shifted edges whose directions cross below this are parallel.
const PARALLEL_EPS: f64 = 1e-12;

/// Largest accepted growth of an inward edge offset, as an area ratio.
const MAX_AREA_GROWTH: f64 = 1.01;

/// Which algorithm shrinks a cell by the rib half-width.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OffsetStrategy {
    /// Uniform scaling about the centroid.
    #[default]
    Scale,
    /// Parallel edge shifting with adjacent-edge intersection.
    EdgeIntersection,
}

impl OffsetStrategy {
    /// Offsets `vertices` inward by `distance` using this strategy.
    pub fn apply<F: Float>(self, vertices: &[Point2<F>], distance: F) -> Option<Vec<Point2<F>>> {
        match self {
            OffsetStrategy::Scale => offset_polygon(vertices, distance),
            OffsetStrategy::EdgeIntersection => offset_polygon_edges(vertices, distance),
        }
    }
}

/// Shrinks a polygon inward by `distance` using the scale strategy.
///
/// Returns `None` if the polygon has fewer than 3 vertices, near-zero area or
/// perimeter, or if `distance` reaches the approximate inradius.
pub fn offset_polygon<F: Float>(vertices: &[Point2<F>], distance: F) -> Option<Vec<Point2<F>>> {
    scale_by_inradius(vertices, -distance)
}

/// Grows a polygon outward by `distance` using the scale strategy.
///
/// Offsetting the result by the same distance restores the original polygon.
pub fn expand_polygon<F: Float>(vertices: &[Point2<F>], distance: F) -> Option<Vec<Point2<F>>> {
    scale_by_inradius(vertices, distance)
}

/// Scales about the centroid so the approximate inradius changes by `delta`.
fn scale_by_inradius<F: Float>(vertices: &[Point2<F>], delta: F) -> Option<Vec<Point2<F>>> {
    if vertices.len() < 3 {
        return None;
    }

    let eps = F::from(AREA_EPS).unwrap();
    let area = polygon_area(vertices);
    let perimeter = polygon_perimeter(vertices);
    if area < eps || perimeter < eps {
        return None;
    }

    let inradius = F::from(2.0).unwrap() * area / perimeter;
    let target = inradius + delta;
    if target <= F::zero() {
        return None;
    }

    let centroid = polygon_centroid(vertices)?;
    let scale = target / inradius;

    Some(
        vertices
            .iter()
            .map(|&v| centroid + (v - centroid) * scale)
            .collect(),
    )
}

/// Shrinks a polygon inward by `distance` by shifting every edge.
///
/// Works for either winding. Returns `None` when two adjacent edges are
/// parallel, when an edge is degenerate, or when the result folds over:
/// non-positive area, area more than 1% larger than the input, or an edge
/// pointing against its source edge.
pub fn offset_polygon_edges<F: Float>(
    vertices: &[Point2<F>],
    distance: F,
) -> Option<Vec<Point2<F>>> {
    let n = vertices.len();
    if n < 3 {
        return None;
    }

    let eps = F::from(AREA_EPS).unwrap();
    let signed = polygon_signed_area(vertices);
    if signed.abs() < eps {
        return None;
    }
    let ccw = signed > F::zero();

    // Shifted edge i: passes through `origin`, runs along `dir`.
    let mut shifted: Vec<(Point2<F>, Vec2<F>)> = Vec::with_capacity(n);
    for i in 0..n {
        let dir = (vertices[(i + 1) % n] - vertices[i]).normalize_or_none(eps)?;
        let inward = if ccw {
            dir.left_normal()
        } else {
            dir.right_normal()
        };
        shifted.push((vertices[i] + inward * distance, dir));
    }

    let parallel_eps = F::from(PARALLEL_EPS).unwrap();
    let mut result = Vec::with_capacity(n);
    for i in 0..n {
        let (prev_origin, prev_dir) = shifted[(i + n - 1) % n];
        let (origin, dir) = shifted[i];

        let denom = prev_dir.cross(dir);
        if denom.abs() < parallel_eps {
            return None;
        }

        let t = (origin - prev_origin).cross(dir) / denom;
        result.push(prev_origin + prev_dir * t);
    }

    let orientation = if ccw { F::one() } else { -F::one() };
    let new_area = polygon_signed_area(&result) * orientation;
    if new_area <= F::zero() || new_area > signed.abs() * F::from(MAX_AREA_GROWTH).unwrap() {
        return None;
    }

    // Result edge i lies on shifted source edge i.
    for (i, &(_, dir)) in shifted.iter().enumerate() {
        let new_dir = result[(i + 1) % n] - result[i];
        if new_dir.dot(dir) <= F::zero() {
            return None;
        }
    }

    Some(result)
}
