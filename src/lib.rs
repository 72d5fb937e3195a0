//! lightweb - Voronoi lightening-hole patterns
//!
//! Turns a flat plate outline into a lattice of holes: seeds are scattered
//! inside the outline, grown into Voronoi cells, clipped to the plate and its
//! keep-out regions, shrunk to leave ribs of material, and filleted.
//!
//! The geometry modules are generic over `num_traits::Float` and usable on
//! their own; [`pattern`] drives the whole pipeline in `f64`.
//!
//! # Example
//!
//! ```
//! use lightweb::pattern::{PatternConfig, PatternGenerator, PatternOutcome, PatternRegion};
//! use lightweb::{Circle2, Point2};
//!
//! let region = PatternRegion::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(150.0, 0.0),
//!     Point2::new(150.0, 90.0),
//!     Point2::new(0.0, 90.0),
//! ])
//! .with_circle(Circle2::from_coords(75.0, 45.0, 8.0));
//!
//! let generator = PatternGenerator::new(PatternConfig::default());
//! match generator.generate(&region, &mut ()).unwrap() {
//!     PatternOutcome::Cells(pattern) => assert!(pattern.len() > 0),
//!     other => panic!("unexpected outcome: {:?}", other),
//! }
//! ```

pub mod bounds;
pub mod error;
pub mod io;
pub mod pattern;
pub mod polygon;
pub mod primitives;
pub mod sampling;
pub mod triangulation;

pub use bounds::Aabb2;
pub use error::{PatternError, Result};
pub use pattern::{
    Pattern, PatternCell, PatternConfig, PatternConfigBuilder, PatternGenerator, PatternOutcome,
    PatternRegion,
};
pub use polygon::{PathSegment, Polygon};
pub use primitives::{Circle2, Point2, Segment2, Vec2};
