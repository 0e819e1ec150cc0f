//! Error types for model loading and wave-to-wave processing.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// `load` was called without a usable path entry in its parameter map.
    #[error("parameter map has no string `{}` entry", crate::MODEL_PATH_KEY)]
    MissingPathParameter,

    /// The graph loader could not deserialize a graph from the given path.
    #[error("failed to load model graph: {0}")]
    GraphLoad(String),

    /// The graph deserialized but its model card could not be read.
    #[error("failed to read model card: {0}")]
    MetadataExtraction(String),

    /// A forward pass was requested on a handle with no resident graph.
    #[error("no model loaded")]
    NotLoaded,

    #[error("resampling failed: {0}")]
    Resample(String),

    #[error("forward pass failed: {0}")]
    Forward(String),

    /// Buffer/tensor errors, including the rank-2 decode contract.
    #[error("audio data error: {0}")]
    Core(#[from] wavebend_core::CoreError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
