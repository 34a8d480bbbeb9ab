//! Custom error types for imgconv.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the imgconv library.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to open or decode an image file.
    #[error("failed to load image from {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Image has a zero-length axis.
    #[error("unsupported image dimensions {width}x{height}: {reason}")]
    UnsupportedDimensions {
        width: usize,
        height: usize,
        reason: String,
    },

    /// Raster does not carry exactly three (RGB) channels.
    #[error("unsupported channel count {channels}: expected 3 (RGB)")]
    UnsupportedChannels { channels: usize },

    /// Failed to write a tensor file.
    #[error("failed to write tensor to {path}: {source}")]
    TensorWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read a tensor file.
    #[error("failed to read tensor from {path}: {source}")]
    TensorRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Shape mismatch in tensor operations.
    #[error("tensor shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: String, actual: String },
}

/// Result type alias for imgconv operations.
pub type Result<T> = std::result::Result<T, Error>;
