//! Error types for pattern generation.
//!
//! Geometric degeneracy is not an error: geometry functions return `None` or
//! an empty vector and the pipeline skips the affected cell. Only conditions
//! the caller must react to are reported here.

use thiserror::Error;

/// Errors that can occur while configuring or generating a pattern.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PatternError {
    /// The boundary outline has too few points to enclose an area.
    #[error("invalid boundary: {vertices} vertices, at least 3 required")]
    InvalidBoundary {
        /// Number of vertices supplied.
        vertices: usize,
    },

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The caller cancelled generation; no partial pattern is returned.
    #[error("cancelled after {processed} of {total} cells")]
    Cancelled {
        /// Cells processed before cancellation was observed.
        processed: usize,
        /// Cells that would have been processed.
        total: usize,
    },
}

/// Convenience alias for results carrying a [`PatternError`].
pub type Result<T> = std::result::Result<T, PatternError>;
