//! Error types for mesh export.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for mesh export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors that can occur while encoding or writing a mesh.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The sink failed while a format was being written.
    #[error("{format} write failed: {source}")]
    Io {
        /// Name of the format being written.
        format: &'static str,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A coordinate cannot be represented in the target text format.
    #[error("cannot encode non-finite coordinate {value} in {format} output")]
    Unrepresentable {
        /// Name of the format being written.
        format: &'static str,
        /// The offending value.
        value: f64,
    },

    /// A solid format was invoked without a solid extension.
    ///
    /// The pipeline always extrudes before encoding a solid format, so this
    /// indicates a logic defect in the caller rather than bad input.
    #[error("{format} output requires a solid extension")]
    MissingSolid {
        /// Name of the format being written.
        format: &'static str,
    },

    /// Unrecognized output file extension.
    #[error("unknown output format: .{extension}")]
    UnknownFormat {
        /// The unrecognized extension.
        extension: String,
    },

    /// The finished temporary file could not be moved into place.
    #[error("could not persist output to {path}: {source}")]
    Persist {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    /// Wrap an I/O error with the name of the format being written.
    pub(crate) fn io(format: &'static str) -> impl FnOnce(std::io::Error) -> Self {
        move |source| Self::Io { format, source }
    }
}
