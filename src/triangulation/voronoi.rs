//! Voronoi cells from a Delaunay triangulation.
//!
//! The Voronoi diagram is the dual of the Delaunay triangulation: each
//! triangle's circumcenter becomes a Voronoi vertex, and the cell of a site
//! is the ring of circumcenters of the triangles around it.
//!
//! Cells of sites on the convex hull are unbounded. To close them, synthetic
//! guard points are added outside the boundary before triangulating, so every
//! real seed ends up surrounded by triangles. Guards never get cells of
//! their own.
//!
//! # Example
//!
//! ```
//! use lightweb::bounds::Aabb2;
//! use lightweb::triangulation::compute_voronoi;
//! use lightweb::Point2;
//!
//! let boundary = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(10.0, 0.0),
//!     Point2::new(10.0, 10.0),
//!     Point2::new(0.0, 10.0),
//! ];
//! let seeds = vec![
//!     Point2::new(3.0, 3.0),
//!     Point2::new(7.0, 3.0),
//!     Point2::new(5.0, 7.0),
//! ];
//! let bbox = Aabb2::from_extents(0.0, 0.0, 10.0, 10.0);
//!
//! let cells = compute_voronoi(&seeds, bbox, Some(&boundary));
//! assert_eq!(cells.len(), seeds.len());
//! assert!(cells.iter().all(|c| c.is_some()));
//! ```

use crate::bounds::Aabb2;
use crate::polygon::{coalesce_ring, polygon_perimeter, polygon_signed_area, Polygon, AREA_EPS};
use crate::primitives::Point2;
use crate::triangulation::bowyer_watson;
use num_traits::Float;
use std::cmp::Ordering;

/// Guards are never spaced more sparsely than this many per ring.
const MIN_GUARD_COUNT: usize = 4;

/// Circumcenters closer than this (squared) form a single cell vertex.
const VERTEX_MERGE_EPS_SQ: f64 = 1e-12;

/// Guard points closing the cells along a boundary ring.
///
/// Places `max(seed_count, 4)` points evenly along the ring, starting at its
/// first vertex, each pushed outward (away from the enclosed area) by the
/// estimated cell radius `sqrt(area / seed_count)`. Works for either winding.
///
/// Returns an empty vector for rings with fewer than 3 vertices or no area.
pub fn guard_points<F: Float>(boundary: &[Point2<F>], seed_count: usize) -> Vec<Point2<F>> {
    let n = boundary.len();
    if n < 3 {
        return Vec::new();
    }

    let signed = polygon_signed_area(boundary);
    let eps = F::from(AREA_EPS).unwrap();
    if signed.abs() < eps {
        return Vec::new();
    }
    let ccw = signed > F::zero();

    let count = seed_count.max(MIN_GUARD_COUNT);
    let cell_radius = (signed.abs() / F::from(seed_count.max(1)).unwrap()).sqrt();
    let spacing = polygon_perimeter(boundary) / F::from(count).unwrap();

    let mut guards = Vec::with_capacity(count);
    let mut walked = F::zero();
    let mut k = 0;
    for i in 0..n {
        let start = boundary[i];
        let edge = boundary[(i + 1) % n] - start;
        let len = edge.magnitude();
        let Some(dir) = edge.normalize_or_none(eps) else {
            continue;
        };
        let outward = if ccw {
            dir.right_normal()
        } else {
            dir.left_normal()
        };

        while k < count {
            let along = spacing * F::from(k).unwrap() - walked;
            if along >= len {
                break;
            }
            guards.push(start + dir * along + outward * cell_radius);
            k += 1;
        }
        walked = walked + len;
    }

    guards
}

/// Reflections of every seed across the four sides of `bbox`.
///
/// Emits left, right, bottom and top mirrors per seed, in seed order.
pub fn mirror_guard_points<F: Float>(seeds: &[Point2<F>], bbox: Aabb2<F>) -> Vec<Point2<F>> {
    let two = F::from(2.0).unwrap();
    seeds
        .iter()
        .flat_map(|s| {
            [
                Point2::new(two * bbox.min.x - s.x, s.y),
                Point2::new(two * bbox.max.x - s.x, s.y),
                Point2::new(s.x, two * bbox.min.y - s.y),
                Point2::new(s.x, two * bbox.max.y - s.y),
            ]
        })
        .collect()
}

/// Computes the Voronoi cell of every seed.
///
/// The result is index-aligned with `seeds`; `None` marks a seed whose cell
/// could not be formed (fewer than 3 distinct surrounding circumcenters).
/// Cell vertices are sorted by angle around their seed, giving a
/// counter-clockwise ring.
///
/// With a boundary ring, cells are closed by [`guard_points`] along it.
/// Without one (or with a degenerate one) the seeds are mirrored across the
/// sides of `bbox` instead; that path needs at least 2 seeds.
pub fn compute_voronoi<F: Float>(
    seeds: &[Point2<F>],
    bbox: Aabb2<F>,
    boundary: Option<&[Point2<F>]>,
) -> Vec<Option<Polygon<F>>> {
    let n = seeds.len();
    if n == 0 {
        return Vec::new();
    }

    let guards = boundary
        .map(|ring| guard_points(ring, n))
        .filter(|g| !g.is_empty());
    let guards = match guards {
        Some(g) => g,
        None if n < 2 => return vec![None; n],
        None => mirror_guard_points(seeds, bbox),
    };

    let mut all = Vec::with_capacity(n + guards.len());
    all.extend_from_slice(seeds);
    all.extend_from_slice(&guards);
    let tri = bowyer_watson(&all);

    let mut centers: Vec<Vec<Point2<F>>> = vec![Vec::new(); n];
    for t in &tri.triangles {
        let Some(circle) = tri.circumcircle_of(t) else {
            continue;
        };
        for v in t.vertices() {
            if v < n {
                centers[v].push(circle.center);
            }
        }
    }

    let cells: Vec<Option<Polygon<F>>> = centers
        .into_iter()
        .zip(seeds)
        .map(|(ring, &seed)| cell_ring(ring, seed))
        .collect();

    tracing::debug!(
        seeds = n,
        guards = guards.len(),
        triangles = tri.triangles.len(),
        cells = cells.iter().filter(|c| c.is_some()).count(),
        "voronoi cells built"
    );

    cells
}

/// Orders circumcenters around their seed and drops repeats.
fn cell_ring<F: Float>(centers: Vec<Point2<F>>, seed: Point2<F>) -> Option<Polygon<F>> {
    if centers.len() < 3 {
        return None;
    }

    let mut keyed: Vec<(F, Point2<F>)> = centers
        .into_iter()
        .map(|c| ((c - seed).angle(), c))
        .collect();
    keyed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    let ring = coalesce_ring(
        keyed.into_iter().map(|(_, c)| c).collect(),
        F::from(VERTEX_MERGE_EPS_SQ).unwrap(),
    );
    (!ring.is_empty()).then(|| Polygon::new(ring))
}
