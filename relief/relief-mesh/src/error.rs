//! Error types for mesh construction.

use thiserror::Error;

/// Result type for mesh construction operations.
pub type MeshResult<T> = Result<T, MeshError>;

/// Errors that can occur while building geometry.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Heightfield violates the 2x2 minimum-size invariant.
    ///
    /// [`HeightField`](relief_types::HeightField) construction already
    /// rejects such grids, so hitting this through the public pipeline
    /// indicates a logic defect upstream.
    #[error("invalid height field: {width}x{height}, need at least 2x2")]
    InvalidInput {
        /// Grid width in samples.
        width: usize,
        /// Grid height in samples.
        height: usize,
    },

    /// The variant slice does not cover every cell exactly once.
    ///
    /// Internal invariant violation: a cell failed to resolve a geometry
    /// variant. Never expected in normal operation.
    #[error("geometry variant count mismatch: expected {expected} cells, got {got}")]
    VariantCount {
        /// Number of grid cells.
        expected: usize,
        /// Number of variants supplied.
        got: usize,
    },
}
