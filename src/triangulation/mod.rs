//! Delaunay triangulation and its Voronoi dual.
//!
//! Triangles are index triples into a flat point array; there is no mesh
//! graph. Voronoi cells are assembled from circumcenters of the triangles
//! around each seed.

mod delaunay;
mod voronoi;

pub use delaunay::{bowyer_watson, circumcircle, Circumcircle, Triangle, Triangulation};
pub use voronoi::{compute_voronoi, guard_points, mirror_guard_points};
