//! Core polygon type and measurements.

use crate::bounds::Aabb2;
use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Area magnitude below which a polygon is considered degenerate.
pub(crate) const AREA_EPS: f64 = 1e-12;

/// A simple polygon represented as a sequence of vertices.
///
/// The polygon is implicitly closed (the last vertex connects to the first).
/// Winding is meaningful: counter-clockwise rings have positive signed area.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    /// The vertices of the polygon.
    pub vertices: Vec<Point2<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a new polygon from vertices.
    #[inline]
    pub fn new(vertices: Vec<Point2<F>>) -> Self {
        Self { vertices }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns true if the polygon has at least 3 vertices.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.vertices.len() >= 3
    }

    /// Returns the signed area of the polygon using the shoelace formula.
    pub fn signed_area(&self) -> F {
        polygon_signed_area(&self.vertices)
    }

    /// Returns the absolute area of the polygon.
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Returns the area-weighted centroid.
    pub fn centroid(&self) -> Option<Point2<F>> {
        polygon_centroid(&self.vertices)
    }

    /// Returns the perimeter.
    pub fn perimeter(&self) -> F {
        polygon_perimeter(&self.vertices)
    }

    /// Tests if a point is inside the polygon.
    pub fn contains(&self, point: Point2<F>) -> bool {
        polygon_contains(&self.vertices, point)
    }

    /// Returns the bounding box, or `None` for an empty polygon.
    pub fn bounding_box(&self) -> Option<Aabb2<F>> {
        Aabb2::from_points(self.vertices.iter().copied())
    }

    /// Returns the vertices as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Point2<F>] {
        &self.vertices
    }

    /// Consumes the polygon, returning its vertices.
    #[inline]
    pub fn into_vertices(self) -> Vec<Point2<F>> {
        self.vertices
    }
}

impl<F> From<Vec<Point2<F>>> for Polygon<F> {
    fn from(vertices: Vec<Point2<F>>) -> Self {
        Self { vertices }
    }
}

/// Computes the signed area of a polygon using the shoelace formula.
///
/// Positive for CCW winding, negative for CW winding, zero for fewer than
/// three vertices.
pub fn polygon_signed_area<F: Float>(vertices: &[Point2<F>]) -> F {
    if vertices.len() < 3 {
        return F::zero();
    }

    let mut area = F::zero();
    let n = vertices.len();

    for i in 0..n {
        let j = (i + 1) % n;
        area = area + vertices[i].x * vertices[j].y;
        area = area - vertices[j].x * vertices[i].y;
    }

    area / F::from(2.0).unwrap()
}

/// Computes the absolute area of a polygon.
pub fn polygon_area<F: Float>(vertices: &[Point2<F>]) -> F {
    polygon_signed_area(vertices).abs()
}

/// Computes the centroid of a polygon from the signed-area integral.
///
/// Returns `None` for fewer than 3 vertices or near-zero area.
pub fn polygon_centroid<F: Float>(vertices: &[Point2<F>]) -> Option<Point2<F>> {
    if vertices.len() < 3 {
        return None;
    }

    let area = polygon_signed_area(vertices);
    if area.abs() < F::from(AREA_EPS).unwrap() {
        return None;
    }

    let mut cx = F::zero();
    let mut cy = F::zero();
    let n = vertices.len();

    for i in 0..n {
        let j = (i + 1) % n;
        let cross = vertices[i].x * vertices[j].y - vertices[j].x * vertices[i].y;
        cx = cx + (vertices[i].x + vertices[j].x) * cross;
        cy = cy + (vertices[i].y + vertices[j].y) * cross;
    }

    let six = F::from(6.0).unwrap();
    Some(Point2::new(cx / (six * area), cy / (six * area)))
}

/// Computes the length of the closed ring.
pub fn polygon_perimeter<F: Float>(vertices: &[Point2<F>]) -> F {
    edges(vertices).fold(F::zero(), |acc, e| acc + e.length())
}

/// Tests if a point is inside a polygon using the ray casting algorithm
/// (odd-even rule).
///
/// Points on the boundary may return either true or false.
pub fn polygon_contains<F: Float>(vertices: &[Point2<F>], point: Point2<F>) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let n = vertices.len();

    let mut j = n - 1;
    for i in 0..n {
        let vi = vertices[i];
        let vj = vertices[j];

        if ((vi.y > point.y) != (vj.y > point.y))
            && (point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x)
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Shortest distance from `point` to any edge of the closed ring.
///
/// Returns infinity for an empty ring.
pub fn distance_to_ring<F: Float>(vertices: &[Point2<F>], point: Point2<F>) -> F {
    edges(vertices).fold(F::infinity(), |best, e| best.min(e.distance_to_point(point)))
}

/// Iterates over the closed ring's edges, including the closing edge.
pub fn edges<F: Float>(vertices: &[Point2<F>]) -> impl Iterator<Item = Segment2<F>> + '_ {
    let n = vertices.len();
    (0..if n < 2 { 0 } else { n }).map(move |i| Segment2::new(vertices[i], vertices[(i + 1) % n]))
}

/// Removes consecutive near-duplicate points (squared distance below
/// `eps_squared`), including a duplicate wrap-around point.
///
/// Returns an empty vector when fewer than 3 points survive.
pub(crate) fn coalesce_ring<F: Float>(points: Vec<Point2<F>>, eps_squared: F) -> Vec<Point2<F>> {
    if points.len() < 3 {
        return Vec::new();
    }

    let mut cleaned: Vec<Point2<F>> = Vec::with_capacity(points.len());
    for p in points {
        let duplicate = cleaned
            .last()
            .is_some_and(|last| last.coincides(p, eps_squared));
        if !duplicate {
            cleaned.push(p);
        }
    }

    if cleaned.len() >= 2 && cleaned[cleaned.len() - 1].coincides(cleaned[0], eps_squared) {
        cleaned.pop();
    }

    if cleaned.len() < 3 {
        Vec::new()
    } else {
        cleaned
    }
}
