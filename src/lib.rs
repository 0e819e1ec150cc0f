//! # Wavebend - Offline Neural Wave-to-Wave Audio Processing
//!
//! Umbrella crate coordinating:
//! - **wavebend-core** - Audio buffers, tensors, parameter values, the
//!   buffer ↔ tensor codec and a rubato-backed mono resampler
//! - **wavebend-neural** - The thread-safe model handle, graph seam,
//!   parameter marshaller and wave-to-wave pipeline
//!
//! ## Quick Start
//!
//! ```ignore
//! use wavebend::{Session, AudioBuffer, ParamMap, MODEL_PATH_KEY};
//!
//! // One session per document; every view clones it instead of loading
//! // its own model.
//! let session = Session::builder()
//!     .loader(my_graph_loader())
//!     .build()?;
//!
//! session.add_listener(|card| println!("loaded {}", card.name));
//!
//! let mut params = ParamMap::new();
//! params.insert(MODEL_PATH_KEY.into(), "models/restorer.bin".into());
//! session.load(&params)?;
//!
//! // Blocks for the full forward pass; the buffer is resized in place.
//! session.process(&mut buffer, 44100, &effect_params)?;
//! ```

/// Re-export of wavebend-core for direct access
pub use wavebend_core as core;

// Core types
pub use wavebend_core::{
    codec, resample_mono, AudioBuffer, CoreError, ParamMap, ParamValue, ResampleQuality, Tensor,
};

/// Re-export of wavebend-neural for direct access
pub use wavebend_neural as neural;

// Model types
pub use wavebend_neural::{
    load_sidecar_card, marshal, ClosureGraph, Error, GraphLoader, InferenceGraph, ListenerId,
    MarshalledParams, MarshalledValue, ModelCard, ModelHandle, Result, WaveToWave, MODEL_PATH_KEY,
};

// Session facade
mod session;
pub use session::{Session, SessionBuilder};
