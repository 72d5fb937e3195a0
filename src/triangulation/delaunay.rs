//! Delaunay triangulation using the Bowyer-Watson algorithm.
//!
//! Delaunay triangulation maximizes the minimum angle of all triangles,
//! avoiding skinny triangles when possible. It has the property that no
//! point lies inside the circumcircle of any triangle.
//!
//! # Algorithm
//!
//! The Bowyer-Watson algorithm is an incremental insertion algorithm:
//! 1. Start with a super-triangle containing all points
//! 2. Insert points one at a time, replacing every triangle whose
//!    circumcircle contains the new point with a fan around it
//!
//! The super-triangle is left in place. Its vertices are appended after the
//! input points, so consumers tell real triangles apart by index range.
//!
//! Triangles are plain index triples into the point array, and circumcircles
//! are cached in a map keyed by triangle.
//!
//! # Complexity
//!
//! - Time: O(n²) worst case, which is fine for a few hundred points
//! - Space: O(n)
//!
//! # Example
//!
//! ```
//! use lightweb::triangulation::bowyer_watson;
//! use lightweb::Point2;
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(0.5, 1.0),
//!     Point2::new(0.5, 0.3),
//! ];
//!
//! let tri = bowyer_watson(&points);
//!
//! // Three points on the super-triangle follow the input.
//! assert_eq!(tri.points.len(), points.len() + 3);
//!
//! // The interior point splits the outer triangle into three.
//! assert_eq!(tri.real_triangles().count(), 3);
//! ```

use crate::bounds::Aabb2;
use crate::primitives::{Circle2, Point2};
use num_traits::Float;
use std::collections::HashMap;

/// Absolute slack on squared distances in the circumcircle containment test.
const CONTAINMENT_EPS: f64 = 1e-9;

/// The super-triangle reaches this many times the largest extent.
const SUPER_TRIANGLE_SCALE: f64 = 20.0;

/// A triangle represented by indices into a point array.
///
/// Indices are stored sorted ascending, so two triangles over the same
/// vertices compare (and hash) equal regardless of construction order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle {
    /// Smallest vertex index
    pub a: usize,
    /// Middle vertex index
    pub b: usize,
    /// Largest vertex index
    pub c: usize,
}

impl Triangle {
    /// Creates a new triangle from vertex indices in any order.
    #[inline]
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        let mut v = [a, b, c];
        v.sort_unstable();
        Self {
            a: v[0],
            b: v[1],
            c: v[2],
        }
    }

    /// Returns the three vertex indices.
    #[inline]
    pub fn vertices(&self) -> [usize; 3] {
        [self.a, self.b, self.c]
    }

    /// Returns the three edges of this triangle as pairs of indices.
    #[inline]
    pub fn edges(&self) -> [(usize, usize); 3] {
        [(self.a, self.b), (self.b, self.c), (self.a, self.c)]
    }

    /// Checks if the triangle contains a specific vertex index.
    #[inline]
    pub fn contains_vertex(&self, v: usize) -> bool {
        self.a == v || self.b == v || self.c == v
    }
}

/// An edge represented by two vertex indices, normalized so smaller index comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Edge(usize, usize);

impl Edge {
    fn new(a: usize, b: usize) -> Self {
        if a < b {
            Edge(a, b)
        } else {
            Edge(b, a)
        }
    }
}

/// Circumscribed circle of a triangle, kept with its squared radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circumcircle<F> {
    pub center: Point2<F>,
    pub radius_squared: F,
}

impl<F: Float> Circumcircle<F> {
    /// Containment with an absolute 1e-9 slack on squared distances.
    ///
    /// Points on (or numerically next to) the circle count as inside.
    #[inline]
    pub fn contains(&self, p: Point2<F>) -> bool {
        self.center.distance_squared(p) < self.radius_squared + F::from(CONTAINMENT_EPS).unwrap()
    }

    #[inline]
    pub fn radius(&self) -> F {
        self.radius_squared.sqrt()
    }
}

/// Computes the circumcircle of three points.
///
/// Returns `None` for (nearly) collinear points.
///
/// # Example
///
/// ```
/// use lightweb::triangulation::circumcircle;
/// use lightweb::Point2;
///
/// let c = circumcircle(
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(0.0, 2.0),
/// )
/// .unwrap();
/// assert!((c.center.x - 1.0).abs() < 1e-12);
/// assert!((c.radius_squared - 2.0).abs() < 1e-12);
///
/// assert!(circumcircle(
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(2.0, 2.0),
/// )
/// .is_none());
/// ```
pub fn circumcircle<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Option<Circumcircle<F>> {
    Circle2::through(a, b, c).map(|circle| Circumcircle {
        center: circle.center,
        radius_squared: circle.center.distance_squared(a),
    })
}

/// Result of [`bowyer_watson`].
#[derive(Debug, Clone)]
pub struct Triangulation<F> {
    /// Input points followed by the three super-triangle vertices.
    pub points: Vec<Point2<F>>,
    /// Final triangles, including those touching the super-triangle.
    pub triangles: Vec<Triangle>,
    input_len: usize,
}

impl<F: Float> Triangulation<F> {
    /// Number of input points; indices below this are real.
    #[inline]
    pub fn input_len(&self) -> usize {
        self.input_len
    }

    /// Indices of the super-triangle vertices, if one was built.
    pub fn super_vertices(&self) -> Option<[usize; 3]> {
        let n = self.input_len;
        (self.points.len() == n + 3).then_some([n, n + 1, n + 2])
    }

    /// Triangles whose three vertices are all input points.
    pub fn real_triangles(&self) -> impl Iterator<Item = &Triangle> + '_ {
        let n = self.input_len;
        self.triangles.iter().filter(move |t| t.c < n)
    }

    /// Circumcircle of a triangle of this triangulation.
    pub fn circumcircle_of(&self, tri: &Triangle) -> Option<Circumcircle<F>> {
        circumcircle(self.points[tri.a], self.points[tri.b], self.points[tri.c])
    }
}

/// Computes the Delaunay triangulation of a set of points.
///
/// Uses the Bowyer-Watson incremental insertion algorithm with a
/// super-triangle 20 times the largest extent of the input, centered on its
/// bounding box. The super-triangle is not removed.
///
/// Collinear triangles have no circumcircle; they are never treated as
/// containing a point and are not cached.
///
/// Fewer than 2 points yield a triangulation without triangles.
pub fn bowyer_watson<F: Float>(points: &[Point2<F>]) -> Triangulation<F> {
    let n = points.len();
    let Some(bbox) = Aabb2::from_points(points.iter().copied()).filter(|_| n >= 2) else {
        return Triangulation {
            points: points.to_vec(),
            triangles: Vec::new(),
            input_len: n,
        };
    };

    let mut all_points: Vec<Point2<F>> = points.to_vec();
    all_points.extend(super_triangle(bbox));

    let mut triangles: Vec<Triangle> = vec![Triangle::new(n, n + 1, n + 2)];
    let mut circles: HashMap<Triangle, Circumcircle<F>> = HashMap::new();
    if let Some(c) = circumcircle(all_points[n], all_points[n + 1], all_points[n + 2]) {
        circles.insert(triangles[0], c);
    }

    // Insert each point
    for (i, &p) in points.iter().enumerate() {
        let (bad, good): (Vec<Triangle>, Vec<Triangle>) = triangles
            .into_iter()
            .partition(|tri| circles.get(tri).is_some_and(|c| c.contains(p)));
        triangles = good;

        // The cavity boundary: edges used by exactly one bad triangle, in
        // first-seen order.
        let mut edge_order: Vec<Edge> = Vec::with_capacity(bad.len() * 3);
        let mut edge_count: HashMap<Edge, usize> = HashMap::with_capacity(bad.len() * 3);
        for tri in &bad {
            for (ea, eb) in tri.edges() {
                let edge = Edge::new(ea, eb);
                let count = edge_count.entry(edge).or_insert(0);
                if *count == 0 {
                    edge_order.push(edge);
                }
                *count += 1;
            }
            circles.remove(tri);
        }

        // Create new triangles from the point to each boundary edge
        for edge in edge_order {
            if edge_count.get(&edge) != Some(&1) {
                continue;
            }
            let tri = Triangle::new(edge.0, edge.1, i);
            if let Some(c) = circumcircle(all_points[edge.0], all_points[edge.1], p) {
                circles.insert(tri, c);
            }
            triangles.push(tri);
        }
    }

    tracing::trace!(
        points = n,
        triangles = triangles.len(),
        "bowyer-watson triangulation finished"
    );

    Triangulation {
        points: all_points,
        triangles,
        input_len: n,
    }
}

/// Vertices of a triangle safely enclosing `bbox`.
fn super_triangle<F: Float>(bbox: Aabb2<F>) -> [Point2<F>; 3] {
    let d_max = bbox.max_extent().max(F::one());
    let mid = bbox.center();
    let m = F::from(SUPER_TRIANGLE_SCALE).unwrap() * d_max;

    [
        Point2::new(mid.x - m, mid.y - m),
        Point2::new(mid.x + m, mid.y - m),
        Point2::new(mid.x, mid.y + m),
    ]
}
