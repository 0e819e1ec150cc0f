//! Thread-safe neural model wrapper for offline wave-to-wave audio
//! processing.
//!
//! This crate contains NO ML framework dependencies. A model is anything
//! implementing [`InferenceGraph`]; deserialization is supplied by the
//! embedding application as a [`GraphLoader`]. The [`ModelHandle`] owns the
//! loaded graph and the single lock that serializes loading against
//! processing; [`WaveToWave`] drives the downmix → marshal → resample →
//! forward → write-back pipeline over a caller-owned
//! [`AudioBuffer`](wavebend_core::AudioBuffer).
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use wavebend_neural::{ModelHandle, WaveToWave, MODEL_PATH_KEY};
//!
//! let handle = Arc::new(ModelHandle::new(my_graph_loader()));
//! handle.add_listener(|card| println!("loaded {}", card.name));
//!
//! let mut params = wavebend_core::ParamMap::new();
//! params.insert(MODEL_PATH_KEY.into(), "models/restorer.bin".into());
//! handle.load(&params)?;
//!
//! let processor = WaveToWave::new(handle);
//! processor.process(&mut buffer, 44100, &effect_params)?;
//! ```

// Error types
mod error;
pub use error::{Error, Result};

// Model card metadata
mod card;
pub use card::{load_sidecar_card, ModelCard};

// Graph seam
mod graph;
pub use graph::{ClosureGraph, ForwardFn, GraphLoader, InferenceGraph};

// Thread-safe handle
mod handle;
pub use handle::{ListenerId, ModelHandle, MODEL_PATH_KEY};

// Parameter marshalling
mod marshal;
pub use marshal::{marshal, MarshalledParams, MarshalledValue};

// Processing pipeline
mod pipeline;
pub use pipeline::WaveToWave;
