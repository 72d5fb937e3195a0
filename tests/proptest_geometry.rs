//! Property-based tests for the geometry stages.
//!
//! ## Test Properties
//!
//! 1. **Offset area law**: shrinking a square by `d` leaves `(L - 2d)^2`
//! 2. **Round trip**: expanding then shrinking by the same distance keeps the area
//! 3. **Seed determinism**: the same random seed reproduces the same seeds
//! 4. **Voronoi alignment**: one entry per seed, and guard-closed cells cover
//!    most of the plate without overlapping
//! 5. **Hole exclusion**: cutting a hole removes exactly the overlap when the
//!    remainder stays connected, and never more otherwise

use lightweb::bounds::Aabb2;
use lightweb::polygon::{
    clip_outside, clip_to_boundary, clip_to_rect, distance_to_ring, expand_polygon,
    offset_polygon, polygon_area, polygon_contains, polygon_signed_area, round_corners,
};
use lightweb::sampling::generate_seeds;
use lightweb::triangulation::{bowyer_watson, compute_voronoi};
use lightweb::Point2;
use proptest::prelude::*;

fn square(x: f64, y: f64, side: f64) -> Vec<Point2<f64>> {
    vec![
        Point2::new(x, y),
        Point2::new(x + side, y),
        Point2::new(x + side, y + side),
        Point2::new(x, y + side),
    ]
}

/// Regular polygon with `n` sides around `(cx, cy)`.
fn regular(n: usize, cx: f64, cy: f64, r: f64) -> Vec<Point2<f64>> {
    rotated(n, cx, cy, r, 0.0)
}

/// Regular polygon with its first vertex at angle `phase`.
fn rotated(n: usize, cx: f64, cy: f64, r: f64, phase: f64) -> Vec<Point2<f64>> {
    (0..n)
        .map(|i| {
            let a = phase + std::f64::consts::TAU * i as f64 / n as f64;
            Point2::new(cx + r * a.cos(), cy + r * a.sin())
        })
        .collect()
}

/// Sum of the guard-closed Voronoi cells clipped to `plate`, and the largest
/// number of cells covering any of the sample points.
fn plate_coverage(plate: &[Point2<f64>], seed: u64, samples: &[Point2<f64>]) -> (f64, usize) {
    let bbox = Aabb2::from_points(plate.iter().copied()).unwrap();
    let seeds = generate_seeds(plate, 30, 2.0, &[], &[], false, seed);
    let clipped: Vec<Vec<Point2<f64>>> = compute_voronoi(&seeds, bbox, Some(plate))
        .iter()
        .flatten()
        .map(|cell| clip_to_boundary(&clip_to_rect(cell.as_slice(), bbox), plate))
        .collect();

    let total: f64 = clipped.iter().map(|c| polygon_area(c)).sum();
    let depth = samples
        .iter()
        .map(|&p| clipped.iter().filter(|c| polygon_contains(c, p)).count())
        .max()
        .unwrap_or(0);
    (total, depth)
}

/// Off-grid sample points across `[0, w] x [0, h]`.
fn samples(w: f64, h: f64) -> Vec<Point2<f64>> {
    (0..20)
        .flat_map(|i| (0..12).map(move |j| (i, j)))
        .map(|(i, j)| Point2::new((i as f64 + 0.37) * w / 20.0, (j as f64 + 0.61) * h / 12.0))
        .collect()
}

proptest! {
    /// Property: offsetting a square by less than half its side leaves
    /// a square of side `L - 2d`
    #[test]
    fn prop_offset_square_area(
        side in 1.0..200.0f64,
        frac in 0.0..0.49f64,
        x in -100.0..100.0f64,
        y in -100.0..100.0f64,
    ) {
        let d = side * frac;
        let shrunk = offset_polygon(&square(x, y, side), d).unwrap();
        let expected = (side - 2.0 * d).powi(2);
        prop_assert!((polygon_area(&shrunk) - expected).abs() <= 1e-9 * side * side);
    }

    /// Property: offsetting by the inradius or more gives no result
    #[test]
    fn prop_offset_past_inradius_is_none(side in 1.0..200.0f64, extra in 0.0..10.0f64) {
        prop_assert!(offset_polygon(&square(0.0, 0.0, side), side / 2.0 + extra).is_none());
    }

    /// Property: expand then offset by the same distance restores the area
    #[test]
    fn prop_expand_offset_round_trip(
        n in 3usize..12,
        r in 5.0..50.0f64,
        frac in 0.0..0.5f64,
    ) {
        let poly = regular(n, 10.0, -5.0, r);
        let d = r * frac;
        let grown = expand_polygon(&poly, d).unwrap();
        let back = offset_polygon(&grown, d).unwrap();
        let original = polygon_area(&poly);
        prop_assert!((polygon_area(&back) - original).abs() <= 1e-9 * original);
    }

    /// Property: offsetting keeps the winding of the input
    #[test]
    fn prop_offset_keeps_winding(n in 3usize..10, r in 5.0..50.0f64, reverse: bool) {
        let mut poly = regular(n, 0.0, 0.0, r);
        if reverse {
            poly.reverse();
        }
        let shrunk = offset_polygon(&poly, r * 0.1).unwrap();
        prop_assert_eq!(
            polygon_signed_area(&shrunk) > 0.0,
            polygon_signed_area(&poly) > 0.0
        );
    }

    /// Property: identical random seeds reproduce identical seed sets
    #[test]
    fn prop_seed_determinism(
        count in 1usize..60,
        margin in 0.0..10.0f64,
        seed: u64,
    ) {
        let plate = square(0.0, 0.0, 100.0);
        let a = generate_seeds(&plate, count, margin, &[], &[], false, seed);
        let b = generate_seeds(&plate, count, margin, &[], &[], false, seed);
        prop_assert_eq!(&a, &b);
        prop_assert!(a.len() <= count);
        for p in &a {
            prop_assert!(p.x >= margin && p.x <= 100.0 - margin);
            prop_assert!(p.y >= margin && p.y <= 100.0 - margin);
        }
    }

    /// Property: every triangle of a triangulation has distinct vertices
    /// and the real triangles reference only input points
    #[test]
    fn prop_triangles_well_formed(count in 3usize..40, seed: u64) {
        let points = generate_seeds(&square(0.0, 0.0, 50.0), count, 1.0, &[], &[], false, seed);
        let tri = bowyer_watson(&points);
        for t in &tri.triangles {
            let [a, b, c] = t.vertices();
            prop_assert!(a != b && b != c && a != c);
            prop_assert!(c < tri.points.len());
        }
        for t in tri.real_triangles() {
            prop_assert!(t.vertices().iter().all(|&v| v < points.len()));
        }
    }

    /// Property: compute_voronoi returns one entry per seed
    #[test]
    fn prop_voronoi_index_aligned(count in 0usize..50, seed: u64, guarded: bool) {
        let plate = square(0.0, 0.0, 80.0);
        let seeds = generate_seeds(&plate, count.max(1), 2.0, &[], &[], false, seed);
        let seeds = &seeds[..count.min(seeds.len())];
        let bbox = Aabb2::from_extents(0.0, 0.0, 80.0, 80.0);
        let boundary = if guarded { Some(plate.as_slice()) } else { None };

        let cells = compute_voronoi(seeds, bbox, boundary);
        prop_assert_eq!(cells.len(), seeds.len());
        for cell in cells.iter().flatten() {
            prop_assert!(cell.len() >= 3);
        }
    }

    /// Property: guard-closed cells never overlap and, clipped to a
    /// rectangular plate, cover at least 85% of it
    #[test]
    fn prop_cells_cover_rect_plate(seed: u64) {
        let plate = vec![
            Point2::new(0.0, 0.0),
            Point2::new(100.0, 0.0),
            Point2::new(100.0, 60.0),
            Point2::new(0.0, 60.0),
        ];
        let (total, depth) = plate_coverage(&plate, seed, &samples(100.0, 60.0));
        prop_assert!(total <= 6000.0 * (1.0 + 1e-9));
        prop_assert!(total >= 0.85 * 6000.0, "covered {total}");
        prop_assert!(depth <= 1);
    }

    /// Property: the same holds on a concave plate, with a looser floor
    /// because guards off the notch reach further into the plate
    #[test]
    fn prop_cells_cover_concave_plate(seed: u64) {
        let plate = vec![
            Point2::new(0.0, 0.0),
            Point2::new(100.0, 0.0),
            Point2::new(100.0, 50.0),
            Point2::new(50.0, 50.0),
            Point2::new(50.0, 100.0),
            Point2::new(0.0, 100.0),
        ];
        let (total, depth) = plate_coverage(&plate, seed, &samples(100.0, 100.0));
        prop_assert!(total <= 7500.0 * (1.0 + 1e-9));
        prop_assert!(total >= 0.75 * 7500.0, "covered {total}");
        prop_assert!(depth <= 1);
    }

    /// Property: a hole covering one corner of a square removes exactly the
    /// overlap, whichever corner and however the hole is turned
    #[test]
    fn prop_clip_outside_corner_hole(
        n in 3usize..10,
        cx in 0.5..3.0f64,
        cy in 0.5..3.0f64,
        extra in 0.1..1.5f64,
        phase in 0.0..std::f64::consts::TAU,
        corner in 0usize..4,
        reverse: bool,
    ) {
        // Keep the corner well inside the hole's inscribed circle.
        let r = cx.hypot(cy) / (std::f64::consts::PI / n as f64).cos() + extra;
        prop_assume!(r < 4.9);

        let (x, y) = match corner {
            0 => (cx, cy),
            1 => (10.0 - cx, cy),
            2 => (10.0 - cx, 10.0 - cy),
            _ => (cx, 10.0 - cy),
        };
        let mut hole = rotated(n, x, y, r, phase);
        if reverse {
            hole.reverse();
        }

        let overlap = polygon_area(&clip_to_rect(&hole, Aabb2::from_extents(0.0, 0.0, 10.0, 10.0)));
        let result = clip_outside(&square(0.0, 0.0, 10.0), &hole);
        prop_assert!((polygon_area(&result) - (100.0 - overlap)).abs() < 1e-6);
    }

    /// Property: cutting any hole removes at least the overlap and leaves
    /// every vertex inside the square and outside the hole
    #[test]
    fn prop_clip_outside_partial_overlap(
        n in 3usize..10,
        cx in -3.0..13.0f64,
        cy in -3.0..13.0f64,
        r in 0.5..6.0f64,
        phase in 0.0..std::f64::consts::TAU,
    ) {
        let subject = square(0.0, 0.0, 10.0);
        let hole = rotated(n, cx, cy, r, phase);
        let overlap = polygon_area(&clip_to_rect(&hole, Aabb2::from_extents(0.0, 0.0, 10.0, 10.0)));

        let result = clip_outside(&subject, &hole);
        prop_assert!(polygon_area(&result) <= 100.0 - overlap + 1e-6);
        for &v in &result {
            prop_assert!(v.x > -1e-9 && v.x < 10.0 + 1e-9 && v.y > -1e-9 && v.y < 10.0 + 1e-9);
            prop_assert!(!polygon_contains(&hole, v) || distance_to_ring(&hole, v) < 1e-6);
        }
    }

    /// Property: a polygon swallowed by a hole disappears, a disjoint one
    /// is returned unchanged
    #[test]
    fn prop_clip_outside_extremes(
        side in 1.0..20.0f64,
        x in 0.0..50.0f64,
        y in 0.0..50.0f64,
    ) {
        let hole = square(-10.0, -10.0, 100.0);
        prop_assert!(clip_outside(&square(x, y, side), &hole).is_empty());

        let far = square(200.0 + x, y, side);
        prop_assert_eq!(clip_outside(&far, &hole), far);
    }

    /// Property: rounded squares have 4 arcs and 4 lines, each arc bending
    /// through a non-collinear midpoint
    #[test]
    fn prop_rounded_square(side in 5.0..100.0f64, frac in 0.01..0.3f64) {
        let segments = round_corners(&square(0.0, 0.0, side), side * frac);
        prop_assert_eq!(segments.len(), 8);
        prop_assert_eq!(segments.iter().filter(|s| s.is_arc()).count(), 4);
        for s in segments.iter().filter(|s| s.is_arc()) {
            prop_assert!(s.arc_circle().is_some());
        }
    }
}
