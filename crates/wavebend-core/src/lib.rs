//! Core data types for wavebend: audio buffers, tensors, parameters.
//!
//! This crate contains NO model or inference types. It defines the
//! caller-facing representations (a multi-channel [`AudioBuffer`], a dense
//! [`Tensor`], dynamically-typed [`ParamValue`]s) plus the pure conversions
//! between them, and a rubato-backed mono resampler. The model wrapper and
//! the processing pipeline live in `wavebend-neural`.

mod buffer;
pub use buffer::AudioBuffer;

mod tensor;
pub use tensor::Tensor;

/// Buffer ↔ tensor conversion.
pub mod codec;

mod params;
pub use params::{ParamMap, ParamValue};

mod resample;
pub use resample::{resample_mono, ResampleQuality};

mod error;
pub use error::{CoreError, Result};
