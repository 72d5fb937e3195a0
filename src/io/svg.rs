//! SVG export of cell outlines.
//!
//! Paths are written in model coordinates (y up). The standalone document
//! flips the y axis with a group transform, so arc sweep flags stay in model
//! orientation.
//!
//! # Example
//!
//! ```
//! use lightweb::io::{polygon_to_svg_path, segments_to_svg_path};
//! use lightweb::polygon::round_corners;
//! use lightweb::Point2;
//!
//! let square = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(10.0, 0.0),
//!     Point2::new(10.0, 10.0),
//!     Point2::new(0.0, 10.0),
//! ];
//!
//! assert_eq!(
//!     polygon_to_svg_path(&square),
//!     "M 0 0 L 10 0 L 10 10 L 0 10 Z"
//! );
//!
//! let rounded = segments_to_svg_path(&round_corners(&square, 1.0));
//! assert_eq!(rounded.matches(" A ").count(), 4);
//! ```

use crate::bounds::Aabb2;
use crate::pattern::Pattern;
use crate::polygon::PathSegment;
use crate::primitives::Point2;
use num_traits::Float;
use std::fmt::{self, Write};

/// Blank border around the document content, as a fraction of its size.
const PADDING_FRACTION: f64 = 0.05;

/// Converts a closed ring to an SVG path using `M`, `L` and `Z`.
///
/// An empty ring gives an empty string.
pub fn polygon_to_svg_path<F: Float + fmt::Display>(points: &[Point2<F>]) -> String {
    let Some(first) = points.first() else {
        return String::new();
    };

    let mut result = format!("M {} {}", first.x, first.y);
    for p in &points[1..] {
        let _ = write!(result, " L {} {}", p.x, p.y);
    }
    result.push_str(" Z");
    result
}

/// Converts a rounded outline to an SVG path.
///
/// Lines become `L` commands and three-point arcs become elliptical-arc
/// `A` commands with equal radii. An arc whose points are collinear is
/// written as a line.
pub fn segments_to_svg_path<F: Float + fmt::Display>(segments: &[PathSegment<F>]) -> String {
    let Some(first) = segments.first() else {
        return String::new();
    };

    let start = first.start();
    let mut result = format!("M {} {}", start.x, start.y);
    for segment in segments {
        let end = segment.end();
        match (segment, segment.arc_circle()) {
            (PathSegment::Arc { start, mid, .. }, Some(circle)) => {
                let (large, sweep) = arc_flags(*start, *mid, end, circle.center);
                let _ = write!(
                    result,
                    " A {r} {r} 0 {} {} {} {}",
                    large as u8,
                    sweep as u8,
                    end.x,
                    end.y,
                    r = circle.radius
                );
            }
            _ => {
                let _ = write!(result, " L {} {}", end.x, end.y);
            }
        }
    }
    result.push_str(" Z");
    result
}

/// Large-arc and sweep flags of the arc from `start` through `mid` to `end`.
///
/// Sweep is set when the arc runs counter-clockwise in model coordinates.
fn arc_flags<F: Float>(
    start: Point2<F>,
    mid: Point2<F>,
    end: Point2<F>,
    center: Point2<F>,
) -> (bool, bool) {
    let ccw = (mid - start).cross(end - mid) > F::zero();

    let tau = F::from(std::f64::consts::TAU).unwrap();
    let a0 = (start - center).angle();
    let a1 = (end - center).angle();
    let mut span = if ccw { a1 - a0 } else { a0 - a1 };
    if span < F::zero() {
        span = span + tau;
    }

    let pi = F::from(std::f64::consts::PI).unwrap();
    (span > pi, ccw)
}

/// Renders a pattern and its boundary as a standalone SVG document.
///
/// The boundary is stroked, each hole is filled. The view box fits the
/// boundary with a small border; an empty boundary falls back to the
/// pattern's seeds, then to a unit square.
pub fn pattern_to_svg_document(pattern: &Pattern, boundary: &[Point2<f64>]) -> String {
    let bbox = Aabb2::from_points(boundary.iter().copied())
        .or_else(|| Aabb2::from_points(pattern.seeds.iter().copied()))
        .unwrap_or_else(|| Aabb2::from_extents(0.0, 0.0, 1.0, 1.0));

    let pad = bbox.max_extent().max(1.0) * PADDING_FRACTION;
    let width = bbox.width() + 2.0 * pad;
    let height = bbox.height() + 2.0 * pad;
    let min_x = bbox.min.x - pad;
    // After the flip, model y = max is the top edge.
    let min_y = -(bbox.max.y + pad);

    let mut doc = String::new();
    let _ = writeln!(
        doc,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}" width="{}" height="{}">"#,
        min_x, min_y, width, height, width, height
    );
    doc.push_str("  <g transform=\"scale(1,-1)\">\n");

    if boundary.len() >= 3 {
        let _ = writeln!(
            doc,
            r#"    <path d="{}" fill="none" stroke="black" stroke-width="0.5"/>"#,
            polygon_to_svg_path(boundary)
        );
    }

    for cell in &pattern.cells {
        let d = if cell.segments.is_empty() {
            polygon_to_svg_path(&cell.polygon.vertices)
        } else {
            segments_to_svg_path(&cell.segments)
        };
        let _ = writeln!(
            doc,
            r#"    <path data-seed="{}" d="{}" fill="steelblue" stroke="none"/>"#,
            cell.seed_index, d
        );
    }

    doc.push_str("  </g>\n</svg>\n");
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::PatternCell;
    use crate::polygon::{round_corners, Polygon};

    fn square() -> Vec<Point2<f64>> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ]
    }

    #[test]
    fn test_polygon_path() {
        assert_eq!(
            polygon_to_svg_path(&square()),
            "M 0 0 L 10 0 L 10 10 L 0 10 Z"
        );
        assert_eq!(polygon_to_svg_path::<f64>(&[]), "");
    }

    #[test]
    fn test_line_segments_path() {
        let segments = round_corners(&square(), 0.0);
        assert_eq!(
            segments_to_svg_path(&segments),
            "M 0 0 L 10 0 L 10 10 L 0 10 L 0 0 Z"
        );
    }

    #[test]
    fn test_arc_command() {
        // Quarter circle of radius 1 around the origin, counter-clockwise.
        let h = std::f64::consts::FRAC_1_SQRT_2;
        let arc = [PathSegment::Arc {
            start: Point2::new(1.0, 0.0),
            mid: Point2::new(h, h),
            end: Point2::new(0.0, 1.0),
        }];
        let path = segments_to_svg_path(&arc);
        assert!(path.starts_with("M 1 0 A "));
        assert!(path.contains(" 0 0 1 "));
        assert!(path.ends_with(" Z"));
    }

    #[test]
    fn test_arc_flags() {
        let c = Point2::new(0.0, 0.0);
        let h = std::f64::consts::FRAC_1_SQRT_2;

        // Short counter-clockwise arc.
        let flags = arc_flags(Point2::new(1.0, 0.0), Point2::new(h, h), Point2::new(0.0, 1.0), c);
        assert_eq!(flags, (false, true));

        // Same arc walked clockwise.
        let flags = arc_flags(Point2::new(0.0, 1.0), Point2::new(h, h), Point2::new(1.0, 0.0), c);
        assert_eq!(flags, (false, false));

        // Three-quarter arc through the bottom.
        let flags = arc_flags(Point2::new(1.0, 0.0), Point2::new(-h, -h), Point2::new(0.0, 1.0), c);
        assert_eq!(flags, (true, false));
    }

    #[test]
    fn test_document_structure() {
        let ring = square();
        let pattern = Pattern {
            seeds: vec![Point2::new(5.0, 5.0)],
            cells: vec![PatternCell {
                seed_index: 0,
                seed: Point2::new(5.0, 5.0),
                polygon: Polygon::new(ring.clone()),
                segments: round_corners(&ring, 1.0),
            }],
        };

        let doc = pattern_to_svg_document(&pattern, &ring);
        assert!(doc.starts_with("<svg "));
        assert!(doc.contains(r#"viewBox="-0.5 -10.5 11 11""#));
        assert!(doc.contains("scale(1,-1)"));
        assert!(doc.contains(r#"data-seed="0""#));
        assert_eq!(doc.matches("<path ").count(), 2);
        assert!(doc.trim_end().ends_with("</svg>"));
    }
}
