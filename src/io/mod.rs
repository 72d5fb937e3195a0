//! Export of patterns to external formats.

mod svg;

pub use svg::{pattern_to_svg_document, polygon_to_svg_path, segments_to_svg_path};
