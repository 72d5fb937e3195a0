//! Polygon clipping algorithms.
//!
//! Three variants, each a pure function returning a new point list:
//!
//! - [`clip_to_rect`]: Sutherland-Hodgman against an axis-aligned rectangle.
//!   Only valid for convex clip regions.
//! - [`clip_to_boundary`]: intersection with an arbitrary, possibly concave,
//!   simple boundary ring.
//! - [`clip_outside`]: set difference with a hole ring. A hole lying entirely
//!   inside the subject is carved out through a slit so the result stays a
//!   single simple ring.
//!
//! The two ring variants trace the subject boundary. Each crossing with the
//! ring is an entry into or an exit from the kept region; from every exit the
//! trace follows the ring to the next entry. The ring is walked in whichever
//! direction keeps the kept region on the same side as the subject's
//! interior: along its own winding for an intersection when both rings wind
//! the same way, against it for a difference, and the other way round when
//! the windings differ. Only ring vertices between an exit and the following
//! entry are spliced in. If the kept region falls apart into several pieces,
//! the largest one is returned.
//!
//! # Example
//!
//! ```
//! use lightweb::bounds::Aabb2;
//! use lightweb::polygon::{clip_outside, clip_to_rect, polygon_area};
//! use lightweb::Point2;
//!
//! let cell: Vec<Point2<f64>> = vec![
//!     Point2::new(-5.0, 2.0),
//!     Point2::new(5.0, 2.0),
//!     Point2::new(5.0, 8.0),
//!     Point2::new(-5.0, 8.0),
//! ];
//! let clipped = clip_to_rect(&cell, Aabb2::from_extents(0.0, 0.0, 10.0, 10.0));
//! assert!((polygon_area(&clipped) - 30.0).abs() < 1e-9);
//!
//! let hole = vec![
//!     Point2::new(1.0, 4.0),
//!     Point2::new(3.0, 4.0),
//!     Point2::new(3.0, 6.0),
//!     Point2::new(1.0, 6.0),
//! ];
//! let carved = clip_outside(&clipped, &hole);
//! assert!((polygon_area(&carved) - 26.0).abs() < 1e-9);
//! ```

use crate::bounds::Aabb2;
use crate::polygon::core::{
    coalesce_ring, distance_to_ring, polygon_area, polygon_contains, polygon_signed_area,
};
use crate::primitives::{Point2, Segment2};
use num_traits::Float;
use std::cmp::Ordering;

/// Output points closer than this (squared) are merged.
const COALESCE_EPS_SQ: f64 = 1e-12;

/// Crossings closer than this (squared) along one subject edge are the same
/// crossing reported by two adjacent ring edges.
const CROSSING_DEDUP_EPS_SQ: f64 = 1e-10;

/// Samples closer than this to a ring count as lying on it.
const ON_RING_EPS: f64 = 1e-9;

/// Direction cross products below this fall back to the far endpoint.
const DEGENERATE_DIRECTION_EPS: f64 = 1e-12;

/// Clips a polygon against a convex clipping ring using Sutherland-Hodgman.
///
/// The clip ring must be convex and counter-clockwise. The result may have
/// fewer than 3 points when the subject is (almost) entirely outside.
pub fn sutherland_hodgman<F: Float>(
    subject: &[Point2<F>],
    convex_clip: &[Point2<F>],
) -> Vec<Point2<F>> {
    if subject.is_empty() || convex_clip.len() < 3 {
        return Vec::new();
    }

    let mut output = subject.to_vec();

    let clip_n = convex_clip.len();
    for i in 0..clip_n {
        if output.is_empty() {
            break;
        }

        let edge_start = convex_clip[i];
        let edge_end = convex_clip[(i + 1) % clip_n];
        output = clip_by_edge(&output, edge_start, edge_end);
    }

    output
}

/// Clips a polygon to an axis-aligned rectangle.
///
/// Runs four Sutherland-Hodgman passes against the rectangle's sides in
/// counter-clockwise order (bottom, right, top, left).
pub fn clip_to_rect<F: Float>(subject: &[Point2<F>], rect: Aabb2<F>) -> Vec<Point2<F>> {
    sutherland_hodgman(subject, &rect.corners())
}

/// One Sutherland-Hodgman pass: keeps the part of `input` on the left of the
/// directed line `edge_start -> edge_end`.
fn clip_by_edge<F: Float>(
    input: &[Point2<F>],
    edge_start: Point2<F>,
    edge_end: Point2<F>,
) -> Vec<Point2<F>> {
    let mut output = Vec::with_capacity(input.len() + 1);

    let n = input.len();
    for j in 0..n {
        let current = input[j];
        let next = input[(j + 1) % n];

        let current_inside = is_inside(current, edge_start, edge_end);
        let next_inside = is_inside(next, edge_start, edge_end);

        if current_inside {
            output.push(current);
            if !next_inside {
                output.push(crossing_on_line(current, next, edge_start, edge_end));
            }
        } else if next_inside {
            output.push(crossing_on_line(current, next, edge_start, edge_end));
        }
    }

    output
}

/// Tests if a point is on the "inside" (left side) of a directed edge.
#[inline]
fn is_inside<F: Float>(point: Point2<F>, edge_start: Point2<F>, edge_end: Point2<F>) -> bool {
    (edge_end - edge_start).cross(point - edge_start) >= F::zero()
}

/// Where the segment `from -> to` meets the infinite clip line.
///
/// A near-parallel segment yields `to`.
fn crossing_on_line<F: Float>(
    from: Point2<F>,
    to: Point2<F>,
    edge_start: Point2<F>,
    edge_end: Point2<F>,
) -> Point2<F> {
    let edge = edge_end - edge_start;
    let seg = to - from;
    let denom = edge.cross(seg);

    if denom.abs() < F::from(DEGENERATE_DIRECTION_EPS).unwrap() {
        return to;
    }

    let t = (from - edge_start).cross(seg) / denom;
    edge_start + edge * t
}

/// A subject edge crossing a ring edge.
#[derive(Debug, Clone, Copy)]
struct Crossing<F> {
    /// Parameter along the subject edge.
    t: F,
    point: Point2<F>,
    /// Index of the ring edge `ring[edge] -> ring[edge + 1]`.
    edge: usize,
    /// Parameter along the ring edge.
    u: F,
}

/// All crossings of the segment `from -> to` with the ring, ordered along the
/// segment, with coincident crossings merged.
fn crossings<F: Float>(from: Point2<F>, to: Point2<F>, ring: &[Point2<F>]) -> Vec<Crossing<F>> {
    let seg = Segment2::new(from, to);
    let m = ring.len();

    let mut found: Vec<Crossing<F>> = (0..m)
        .filter_map(|j| {
            let a = ring[j];
            let b = ring[(j + 1) % m];
            seg.intersect(Segment2::new(a, b)).map(|(t, point)| {
                let d = b - a;
                let len_sq = d.magnitude_squared();
                let u = if len_sq > F::zero() {
                    ((point - a).dot(d) / len_sq).max(F::zero()).min(F::one())
                } else {
                    F::zero()
                };
                Crossing { t, point, edge: j, u }
            })
        })
        .collect();

    found.sort_by(|a, b| a.t.partial_cmp(&b.t).unwrap_or(Ordering::Equal));

    let eps = F::from(CROSSING_DEDUP_EPS_SQ).unwrap();
    let mut cleaned: Vec<Crossing<F>> = Vec::with_capacity(found.len());
    for c in found {
        let duplicate = cleaned
            .last()
            .is_some_and(|last| last.point.distance_squared(c.point) <= eps);
        if !duplicate {
            cleaned.push(c);
        }
    }
    cleaned
}

/// How the subject boundary passes through a crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    /// From the discarded side into the kept side.
    Entry,
    /// From the kept side into the discarded side.
    Exit,
    /// Grazes the ring and stays on the same side.
    Touch,
}

/// A crossing placed on the subject boundary.
#[derive(Debug, Clone, Copy)]
struct Event<F> {
    subject_edge: usize,
    crossing: Crossing<F>,
    transition: Transition,
}

/// Every crossing of the subject boundary with the ring, in subject order,
/// classified as an entry, an exit or a touch.
///
/// Each crossing is classified by sampling the subject boundary on either
/// side of it. `kept` returns `None` for samples on the ring, which are
/// skipped, so stretches running along the ring and tangent contacts become
/// touches.
fn subject_events<F: Float>(
    subject: &[Point2<F>],
    ring: &[Point2<F>],
    kept: impl Fn(Point2<F>) -> Option<bool>,
) -> Vec<Event<F>> {
    let n = subject.len();
    let eps = F::from(CROSSING_DEDUP_EPS_SQ).unwrap();

    let mut events: Vec<Event<F>> = Vec::new();
    for i in 0..n {
        events.extend(
            crossings(subject[i], subject[(i + 1) % n], ring)
                .into_iter()
                .map(|crossing| Event {
                    subject_edge: i,
                    crossing,
                    transition: Transition::Touch,
                }),
        );
    }

    // A crossing at a subject vertex is reported by both edges meeting there.
    events.dedup_by(|b, a| a.crossing.point.distance_squared(b.crossing.point) <= eps);
    if events.len() > 1 {
        let first = events[0].crossing.point;
        if events[events.len() - 1].crossing.point.distance_squared(first) <= eps {
            events.pop();
        }
    }

    // Subject vertices and crossings in boundary order.
    let mut stations: Vec<Point2<F>> = Vec::with_capacity(n + events.len());
    let mut slots: Vec<usize> = Vec::with_capacity(events.len());
    let mut next = 0;
    for (i, &vertex) in subject.iter().enumerate() {
        stations.push(vertex);
        while next < events.len() && events[next].subject_edge == i {
            slots.push(stations.len());
            stations.push(events[next].crossing.point);
            next += 1;
        }
    }

    let s = stations.len();
    for (event, &slot) in events.iter_mut().zip(&slots) {
        // Nearest boundary stretch on each side that is off the ring.
        let before = (0..s).find_map(|d| {
            let a = stations[(slot + 2 * s - d - 1) % s];
            let b = stations[(slot + s - d) % s];
            (a.distance_squared(b) > eps).then(|| kept(a.midpoint(b))).flatten()
        });
        let after = (0..s).find_map(|d| {
            let a = stations[(slot + d) % s];
            let b = stations[(slot + d + 1) % s];
            (a.distance_squared(b) > eps).then(|| kept(a.midpoint(b))).flatten()
        });

        event.transition = match (before, after) {
            (Some(false), Some(true)) => Transition::Entry,
            (Some(true), Some(false)) => Transition::Exit,
            _ => Transition::Touch,
        };
    }

    events.retain(|e| e.transition != Transition::Touch);
    events
}

/// Subject vertices strictly between two events, in subject order.
fn subject_between<F: Float>(
    subject: &[Point2<F>],
    from: &Event<F>,
    to: &Event<F>,
    out: &mut Vec<Point2<F>>,
) {
    let n = subject.len();
    let mut count = (to.subject_edge + n - from.subject_edge) % n;
    if count == 0 && to.crossing.t <= from.crossing.t {
        count = n;
    }
    out.extend((1..=count).map(|k| subject[(from.subject_edge + k) % n]));
}

/// Ring vertices strictly between two crossings, walking the ring forwards
/// or backwards.
fn ring_between<F: Float>(
    ring: &[Point2<F>],
    from: &Crossing<F>,
    to: &Crossing<F>,
    forward: bool,
    out: &mut Vec<Point2<F>>,
) {
    let m = ring.len();
    if forward {
        let mut count = (to.edge + m - from.edge) % m;
        if count == 0 && to.u <= from.u {
            count = m;
        }
        out.extend((1..=count).map(|k| ring[(from.edge + k) % m]));
    } else {
        let mut count = (from.edge + m - to.edge) % m;
        if count == 0 && to.u >= from.u {
            count = m;
        }
        out.extend((0..count).map(|k| ring[(from.edge + m - k) % m]));
    }
}

/// Traces the kept part of `subject` against `ring`.
///
/// `keep_inside` keeps the part inside the ring (intersection), otherwise the
/// part outside it (difference). Starting at an entry, the trace follows the
/// subject to the next exit, then the ring to the next entry, until it closes.
/// Every unused entry starts another piece and the largest piece wins.
///
/// Returns `None` when the subject boundary never truly crosses the ring.
fn trace<F: Float>(
    subject: &[Point2<F>],
    ring: &[Point2<F>],
    keep_inside: bool,
) -> Option<Vec<Point2<F>>> {
    let events = subject_events(subject, ring, |p| {
        side(ring, p).map(|inside| inside == keep_inside)
    });
    if events.is_empty() {
        return None;
    }

    let k = events.len();
    let mut order: Vec<usize> = (0..k).collect();
    order.sort_by(|&a, &b| {
        let (a, b) = (&events[a].crossing, &events[b].crossing);
        a.edge
            .cmp(&b.edge)
            .then(a.u.partial_cmp(&b.u).unwrap_or(Ordering::Equal))
    });
    let mut rank = vec![0usize; k];
    for (r, &e) in order.iter().enumerate() {
        rank[e] = r;
    }

    let same_winding = polygon_signed_area(subject) * polygon_signed_area(ring) > F::zero();
    let forward = same_winding == keep_inside;

    let mut used = vec![false; k];
    let mut pieces: Vec<Vec<Point2<F>>> = Vec::new();

    for start in 0..k {
        if used[start] || events[start].transition != Transition::Entry {
            continue;
        }

        let mut piece: Vec<Point2<F>> = Vec::new();
        let mut current = start;
        for _ in 0..k {
            used[current] = true;
            piece.push(events[current].crossing.point);

            let mut exit = current;
            loop {
                let next = (exit + 1) % k;
                subject_between(subject, &events[exit], &events[next], &mut piece);
                exit = next;
                if events[exit].transition == Transition::Exit || exit == current {
                    break;
                }
            }
            used[exit] = true;
            piece.push(events[exit].crossing.point);

            let mut r = rank[exit];
            loop {
                let next = if forward { (r + 1) % k } else { (r + k - 1) % k };
                ring_between(
                    ring,
                    &events[order[r]].crossing,
                    &events[order[next]].crossing,
                    forward,
                    &mut piece,
                );
                r = next;
                if events[order[r]].transition == Transition::Entry || order[r] == exit {
                    break;
                }
            }

            current = order[r];
            if current == start || used[current] {
                break;
            }
        }
        pieces.push(piece);
    }

    let eps = F::from(COALESCE_EPS_SQ).unwrap();
    let largest = pieces
        .into_iter()
        .map(|piece| coalesce_ring(piece, eps))
        .filter(|piece| piece.len() >= 3)
        .max_by(|a, b| {
            polygon_area(a)
                .partial_cmp(&polygon_area(b))
                .unwrap_or(Ordering::Equal)
        })
        .unwrap_or_default();
    Some(largest)
}

/// Whether `p` lies inside `ring`, or `None` when it lies on it.
fn side<F: Float>(ring: &[Point2<F>], p: Point2<F>) -> Option<bool> {
    if distance_to_ring(ring, p) <= F::from(ON_RING_EPS).unwrap() {
        None
    } else {
        Some(polygon_contains(ring, p))
    }
}

/// Whether a subject that never crosses `ring` lies inside it.
///
/// Vertices and edge midpoints on the ring do not vote. A subject lying
/// entirely along the ring counts as inside.
fn lies_inside<F: Float>(subject: &[Point2<F>], ring: &[Point2<F>]) -> bool {
    let n = subject.len();
    let midpoints = (0..n).map(|i| subject[i].midpoint(subject[(i + 1) % n]));
    let (inside, outside) = subject
        .iter()
        .copied()
        .chain(midpoints)
        .filter_map(|p| side(ring, p))
        .fold((0usize, 0usize), |(i, o), inside| {
            if inside {
                (i + 1, o)
            } else {
                (i, o + 1)
            }
        });
    inside >= outside
}

/// Clips a polygon to an arbitrary (possibly concave) boundary ring.
///
/// Sutherland-Hodgman is invalid for concave clip regions, so the subject is
/// traced against the boundary instead. When the intersection falls apart
/// into several pieces only the largest is returned.
///
/// Returns an empty vector when nothing of the subject survives or either
/// input has fewer than 3 vertices.
pub fn clip_to_boundary<F: Float>(subject: &[Point2<F>], boundary: &[Point2<F>]) -> Vec<Point2<F>> {
    if subject.len() < 3 || boundary.len() < 3 {
        return Vec::new();
    }

    if let Some(clipped) = trace(subject, boundary, true) {
        return clipped;
    }

    if lies_inside(subject, boundary) {
        return subject.to_vec();
    }
    // Either disjoint, or the whole boundary sits inside the subject.
    if boundary.iter().all(|&b| side(subject, b) != Some(false)) {
        return boundary.to_vec();
    }
    Vec::new()
}

/// Clips a polygon to exclude the area inside a hole ring.
///
/// Returns the subject unchanged when it does not overlap the hole, and an
/// empty vector when it lies entirely inside the hole. A hole fully contained
/// in the subject is cut out through a slit (see [`slit_polygon`]). When the
/// hole splits the subject only the largest piece is returned.
pub fn clip_outside<F: Float>(subject: &[Point2<F>], hole: &[Point2<F>]) -> Vec<Point2<F>> {
    if subject.len() < 3 {
        return Vec::new();
    }
    if hole.len() < 3 {
        return subject.to_vec();
    }

    if let Some(clipped) = trace(subject, hole, false) {
        return clipped;
    }

    if lies_inside(subject, hole) {
        return Vec::new();
    }
    if hole.iter().all(|&h| side(subject, h) != Some(false)) {
        return slit_polygon(subject, hole);
    }
    subject.to_vec()
}

/// Joins a fully contained hole to its enclosing polygon through a slit.
///
/// Bridges from the subject vertex closest to any hole vertex, walks all the
/// way around the hole against the subject's winding and returns along the
/// same bridge, giving a single ring whose area is the difference.
pub fn slit_polygon<F: Float>(subject: &[Point2<F>], hole: &[Point2<F>]) -> Vec<Point2<F>> {
    let n_hole = hole.len();
    if subject.len() < 3 || n_hole < 3 {
        return subject.to_vec();
    }

    let mut best = (F::infinity(), 0usize, 0usize);
    for (pi, &p) in subject.iter().enumerate() {
        for (hi, &h) in hole.iter().enumerate() {
            let d = p.distance_squared(h);
            if d < best.0 {
                best = (d, pi, hi);
            }
        }
    }
    let (_, best_pi, best_hi) = best;

    let same_winding = polygon_signed_area(subject) * polygon_signed_area(hole) > F::zero();

    let mut result = Vec::with_capacity(subject.len() + n_hole + 2);
    result.extend_from_slice(&subject[..=best_pi]);

    for k in 0..=n_hole {
        let idx = if same_winding {
            (best_hi + n_hole * 2 - k) % n_hole
        } else {
            (best_hi + k) % n_hole
        };
        result.push(hole[idx]);
    }

    result.push(subject[best_pi]);
    result.extend_from_slice(&subject[best_pi + 1..]);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::core::polygon_area;
    use approx::assert_relative_eq;

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<Point2<f64>> {
        vec![
            Point2::new(x0, y0),
            Point2::new(x1, y0),
            Point2::new(x1, y1),
            Point2::new(x0, y1),
        ]
    }

    fn l_shape() -> Vec<Point2<f64>> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 5.0),
            Point2::new(5.0, 5.0),
            Point2::new(5.0, 10.0),
            Point2::new(0.0, 10.0),
        ]
    }

    fn bbox() -> Aabb2<f64> {
        Aabb2::from_extents(0.0, 0.0, 10.0, 10.0)
    }

    #[test]
    fn test_rect_fully_inside() {
        let result = clip_to_rect(&rect(2.0, 2.0, 8.0, 8.0), bbox());
        assert_eq!(result.len(), 4);
        assert_relative_eq!(polygon_area(&result), 36.0);
    }

    #[test]
    fn test_rect_partially_outside() {
        let result = clip_to_rect(&rect(-5.0, 2.0, 5.0, 8.0), bbox());
        assert_eq!(result.len(), 4);
        for p in &result {
            assert!(p.x >= -1e-9);
            assert!(p.y >= -1e-9);
        }
        assert_relative_eq!(polygon_area(&result), 30.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rect_fully_outside() {
        let result = clip_to_rect(&rect(20.0, 20.0, 30.0, 30.0), bbox());
        assert!(result.is_empty());
    }

    #[test]
    fn test_rect_cuts_corner() {
        let tri = vec![
            Point2::new(5.0_f64, 5.0),
            Point2::new(15.0, 5.0),
            Point2::new(5.0, 15.0),
        ];
        let result = clip_to_rect(&tri, bbox());
        // The hypotenuse x + y = 20 only touches the box at (10, 10).
        assert_relative_eq!(polygon_area(&result), 25.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rect_keeps_cw_subject_area() {
        let mut cw = rect(-5.0, 2.0, 5.0, 8.0);
        cw.reverse();
        let result = clip_to_rect(&cw, bbox());
        assert_relative_eq!(polygon_area(&result), 30.0, epsilon = 1e-9);
    }

    #[test]
    fn test_crossing_on_line_parallel_fallback() {
        let to = Point2::new(4.0_f64, 0.0);
        let p = crossing_on_line(
            Point2::new(0.0, 0.0),
            to,
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
        );
        assert_eq!(p, to);
    }

    #[test]
    fn test_boundary_fully_inside() {
        let subject = rect(1.0, 1.0, 3.0, 3.0);
        let result = clip_to_boundary(&subject, &l_shape());
        assert_eq!(result, subject);
    }

    #[test]
    fn test_boundary_fully_outside() {
        let result = clip_to_boundary(&rect(20.0, 20.0, 30.0, 30.0), &l_shape());
        assert!(result.is_empty());
    }

    #[test]
    fn test_boundary_concave_notch() {
        let result = clip_to_boundary(&rect(3.0, 3.0, 8.0, 8.0), &l_shape());
        assert_relative_eq!(polygon_area(&result), 16.0, epsilon = 1e-9);
        assert!(result
            .iter()
            .any(|p| p.distance(Point2::new(5.0, 5.0)) < 1e-9));
    }

    #[test]
    fn test_boundary_straddling_edge() {
        let boundary = rect(0.0, 0.0, 10.0, 10.0);
        let result = clip_to_boundary(&rect(8.0, 2.0, 12.0, 6.0), &boundary);
        assert_relative_eq!(polygon_area(&result), 8.0, epsilon = 1e-9);
    }

    #[test]
    fn test_boundary_corner_is_spliced() {
        let boundary = rect(0.0, 0.0, 10.0, 10.0);
        let result = clip_to_boundary(&rect(8.0, 8.0, 12.0, 12.0), &boundary);
        assert_relative_eq!(polygon_area(&result), 4.0, epsilon = 1e-9);
        assert!(result
            .iter()
            .any(|p| p.distance(Point2::new(10.0, 10.0)) < 1e-9));
    }

    #[test]
    fn test_boundary_inside_subject() {
        let boundary = rect(4.0, 4.0, 6.0, 6.0);
        let result = clip_to_boundary(&rect(0.0, 0.0, 10.0, 10.0), &boundary);
        assert_relative_eq!(polygon_area(&result), 4.0);
    }

    #[test]
    fn test_boundary_degenerate_inputs() {
        let tiny = vec![Point2::new(0.0_f64, 0.0), Point2::new(1.0, 0.0)];
        assert!(clip_to_boundary(&tiny, &l_shape()).is_empty());
        assert!(clip_to_boundary(&rect(0.0, 0.0, 1.0, 1.0), &tiny).is_empty());
    }

    #[test]
    fn test_outside_no_overlap() {
        let subject = rect(0.0, 0.0, 2.0, 2.0);
        let result = clip_outside(&subject, &rect(5.0, 5.0, 6.0, 6.0));
        assert_eq!(result, subject);
    }

    #[test]
    fn test_outside_subject_inside_hole() {
        let result = clip_outside(&rect(4.0, 4.0, 6.0, 6.0), &rect(0.0, 0.0, 10.0, 10.0));
        assert!(result.is_empty());
    }

    #[test]
    fn test_outside_partial_overlap() {
        let result = clip_outside(&rect(0.0, 0.0, 10.0, 10.0), &rect(8.0, 8.0, 12.0, 12.0));
        assert_relative_eq!(polygon_area(&result), 96.0, epsilon = 1e-9);
    }

    #[test]
    fn test_outside_contained_hole_uses_slit() {
        let subject = rect(0.0, 0.0, 10.0, 10.0);
        let hole = rect(4.0, 4.0, 6.0, 6.0);
        let result = clip_outside(&subject, &hole);
        assert_eq!(result.len(), subject.len() + hole.len() + 2);
        assert_relative_eq!(polygon_area(&result), 96.0, epsilon = 1e-9);
    }

    #[test]
    fn test_slit_with_opposite_winding_hole() {
        let subject = rect(0.0, 0.0, 10.0, 10.0);
        let mut hole = rect(4.0, 4.0, 6.0, 6.0);
        hole.reverse();
        let result = slit_polygon(&subject, &hole);
        assert_relative_eq!(polygon_area(&result), 96.0, epsilon = 1e-9);
    }

    #[test]
    fn test_outside_sliver_overlap() {
        // The hole pokes through the right edge; no vertex of either ring
        // lies inside the other.
        let subject = rect(0.0, 0.0, 10.0, 10.0);
        let hole = rect(8.0, 4.0, 12.0, 6.0);
        let result = clip_outside(&subject, &hole);
        assert_relative_eq!(polygon_area(&result), 96.0, epsilon = 1e-9);
        assert!(result
            .iter()
            .any(|p| p.distance(Point2::new(8.0, 4.0)) < 1e-9));
    }

    #[test]
    fn test_outside_hole_over_corner() {
        // Hexagon swallowing the corner (0, 0); the subject's corner vertex
        // is removed and the cut runs from the bottom edge to the left edge.
        let subject = rect(0.0, 0.0, 10.0, 10.0);
        let hole: Vec<Point2<f64>> = (0..6)
            .map(|k| {
                let a = std::f64::consts::TAU * k as f64 / 6.0;
                Point2::new(2.109 + 3.282 * a.cos(), 1.999 + 3.282 * a.sin())
            })
            .collect();

        let overlap = polygon_area(&clip_to_rect(&hole, bbox()));
        let result = clip_outside(&subject, &hole);
        assert_relative_eq!(polygon_area(&result), 100.0 - overlap, epsilon = 1e-9);
        assert_relative_eq!(polygon_area(&result), 77.5759, epsilon = 1e-3);
        assert!(!polygon_contains(&result, Point2::new(0.5, 0.5)));
    }

    #[test]
    fn test_outside_hole_cuts_off_corner() {
        // The diamond crosses both edges at the corner (0, 0) twice without
        // covering it, cutting off a small triangle.
        let subject = rect(0.0, 0.0, 10.0, 10.0);
        let hole = vec![
            Point2::new(4.5, 2.0),
            Point2::new(2.0, 4.5),
            Point2::new(-0.5, 2.0),
            Point2::new(2.0, -0.5),
        ];
        let result = clip_outside(&subject, &hole);
        assert_relative_eq!(polygon_area(&result), 100.0 - 12.0 - 1.125, epsilon = 1e-9);
        assert!(!polygon_contains(&result, Point2::new(0.3, 0.3)));
        assert!(polygon_contains(&result, Point2::new(8.0, 8.0)));
    }

    #[test]
    fn test_outside_hole_from_any_start_vertex() {
        let hole = vec![
            Point2::new(4.5, 2.0),
            Point2::new(2.0, 4.5),
            Point2::new(-0.5, 2.0),
            Point2::new(2.0, -0.5),
        ];
        let mut subject = rect(0.0, 0.0, 10.0, 10.0);
        for _ in 0..subject.len() {
            subject.rotate_left(1);
            let result = clip_outside(&subject, &hole);
            assert_relative_eq!(polygon_area(&result), 86.875, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_boundary_split_keeps_largest_piece() {
        // A diagonal band crossing the notch: the part inside the notch is
        // cut away, leaving two pieces of area 4 and 4.5.
        let band = vec![
            Point2::new(8.5, 2.5),
            Point2::new(9.5, 3.5),
            Point2::new(3.25, 9.75),
            Point2::new(2.25, 8.75),
        ];
        let boundary = l_shape();
        let result = clip_to_boundary(&band, &boundary);
        assert_relative_eq!(polygon_area(&result), 4.5, epsilon = 1e-9);

        let n = result.len();
        for i in 0..n {
            let mid = result[i].midpoint(result[(i + 1) % n]);
            assert!(
                polygon_contains(&boundary, mid) || distance_to_ring(&boundary, mid) < 1e-9,
                "edge {i} leaves the boundary"
            );
        }
    }

    #[test]
    fn test_boundary_shared_edges() {
        // The subject runs along the boundary's top and right edges.
        let boundary = rect(0.0, 0.0, 10.0, 10.0);
        let subject = rect(7.0, 8.0, 10.0, 10.0);
        let result = clip_to_boundary(&subject, &boundary);
        assert_relative_eq!(polygon_area(&result), 6.0, epsilon = 1e-9);
    }

    #[test]
    fn test_outside_identical_ring_is_empty() {
        let ring = rect(1.0, 1.0, 3.0, 3.0);
        assert!(clip_outside(&ring, &ring).is_empty());
    }

    #[test]
    fn test_outside_degenerate_hole() {
        let subject = rect(0.0, 0.0, 1.0, 1.0);
        let hole = vec![Point2::new(0.5_f64, 0.5), Point2::new(0.6, 0.6)];
        assert_eq!(clip_outside(&subject, &hole), subject);
    }

    #[test]
    fn test_f32() {
        let subject: Vec<Point2<f32>> = vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
        ];
        let result = clip_to_rect(&subject, Aabb2::from_extents(1.0, 1.0, 3.0, 3.0));
        assert!((polygon_area(&result) - 1.0).abs() < 0.01);
    }
}
