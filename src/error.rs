//! Error types for trellis.
//!
//! The topology builder itself is infallible: it accepts any triangle soup,
//! degenerate triangles included. Errors arise only at the I/O boundary,
//! when decoding an STL stream or emitting one of the output formats.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`TopologyError`].
pub type Result<T> = std::result::Result<T, TopologyError>;

/// Errors that can occur while reading or writing mesh files.
#[derive(Error, Debug)]
pub enum TopologyError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error decoding a triangle soup from a file.
    #[error("failed to load mesh from {path}: {message}")]
    LoadError {
        /// The file path.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Error writing a mesh to a file.
    #[error("failed to save mesh to {path}: {message}")]
    SaveError {
        /// The file path.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Unsupported file format.
    #[error("unsupported file format: {extension}")]
    UnsupportedFormat {
        /// The file extension.
        extension: String,
    },
}
