//! Lightening-hole pattern generation.
//!
//! [`PatternGenerator`] ties the geometry modules together: seeds from
//! [`crate::sampling`], cells from [`crate::triangulation`], and per-cell
//! clip, offset and fillet stages from [`crate::polygon`].

mod config;
mod pipeline;

pub use config::{PatternConfig, PatternConfigBuilder, MAX_SEED_COUNT};
pub use pipeline::{
    CancelFlag, Pattern, PatternCell, PatternGenerator, PatternOutcome, PatternRegion, Progress,
};
