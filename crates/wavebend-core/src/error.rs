//! Error types for wavebend-core.

use thiserror::Error;

/// Result type alias.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Error type for core buffer/tensor operations.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A tensor handed to the decode step was not rank 2.
    #[error("expected a rank-2 tensor, got rank {rank} with shape {shape:?}")]
    ShapeMismatch { rank: usize, shape: Vec<usize> },

    /// Resampling error
    #[error("resampling error: {0}")]
    Resample(String),

    /// Invalid audio data
    #[error("invalid audio data: {0}")]
    InvalidData(String),
}

// From trait implementations for external library errors at API boundary
// These convert complex external error types to simple strings for user-facing messages

impl From<rubato::ResamplerConstructionError> for CoreError {
    fn from(e: rubato::ResamplerConstructionError) -> Self {
        CoreError::Resample(e.to_string())
    }
}

impl From<rubato::ResampleError> for CoreError {
    fn from(e: rubato::ResampleError) -> Self {
        CoreError::Resample(e.to_string())
    }
}
