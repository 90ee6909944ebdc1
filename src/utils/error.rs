// src/utils/error.rs

use thiserror::Error;

/// The error type for every fallible stage of the region analysis pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// Two buffers that must describe the same raster disagree on size.
    #[error("Dimension mismatch: expected {expected:?}, but got {actual:?}")]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// A pixel buffer does not hold the number of samples its dimensions imply.
    #[error("Buffer length mismatch: expected {expected} samples, got {actual}")]
    BufferLength { expected: usize, actual: usize },

    /// The threshold ratio is negative, NaN or infinite.
    #[error("Invalid threshold ratio: {0}")]
    InvalidRatio(f64),

    /// The raster dimensions cannot be addressed on this platform.
    #[error("Image dimensions ({width}x{height}) are too large")]
    TooLarge { width: u32, height: u32 },
}

/// A specialized `Result` type for region analysis.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Returns `width * height` as a sample count, or `TooLarge` if it overflows.
pub(crate) fn sample_count(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(AnalysisError::TooLarge { width, height })
}
