//! Polygon operations for cell post-processing.
//!
//! This module provides the per-cell pipeline stages:
//! - Area, centroid, perimeter and point containment
//! - Clipping against rectangles, concave boundaries and holes
//! - Inward/outward offsetting
//! - Short-edge cleanup and corner rounding
//!
//! Functions take plain vertex slices (implicitly closed, either winding) and
//! return new vectors; no stage mutates its input.
//!
//! # Example
//!
//! ```
//! use lightweb::polygon::{clip_to_boundary, offset_polygon, polygon_area};
//! use lightweb::Point2;
//!
//! let boundary: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(10.0, 0.0),
//!     Point2::new(10.0, 10.0),
//!     Point2::new(0.0, 10.0),
//! ];
//! let cell: Vec<Point2<f64>> = vec![
//!     Point2::new(6.0, 2.0),
//!     Point2::new(14.0, 2.0),
//!     Point2::new(14.0, 8.0),
//!     Point2::new(6.0, 8.0),
//! ];
//!
//! let clipped = clip_to_boundary(&cell, &boundary);
//! assert!((polygon_area(&clipped) - 24.0).abs() < 1e-9);
//!
//! let walled = offset_polygon(&clipped, 0.5).unwrap();
//! assert!(polygon_area(&walled) < 24.0);
//! ```

mod clip;
mod core;
mod fillet;
mod offset;
mod simplify;

pub(crate) use self::core::{coalesce_ring, AREA_EPS};

pub use self::core::{
    distance_to_ring, edges, polygon_area, polygon_centroid, polygon_contains, polygon_perimeter,
    polygon_signed_area, Polygon,
};
pub use clip::{clip_outside, clip_to_boundary, clip_to_rect, slit_polygon, sutherland_hodgman};
pub use fillet::{round_corners, PathSegment};
pub use offset::{expand_polygon, offset_polygon, offset_polygon_edges, OffsetStrategy};
pub use simplify::{merge_short_edges, merge_short_edges_indices};
