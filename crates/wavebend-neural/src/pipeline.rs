//! Wave-to-wave processing pipeline.

use crate::error::{Error, Result};
use crate::handle::ModelHandle;
use crate::marshal::marshal;
use std::sync::Arc;
use wavebend_core::{codec, AudioBuffer, ParamMap};

/// Offline wave-to-wave processor over a shared [`ModelHandle`].
///
/// `process` blocks the calling thread for the full resample + forward pass
/// and serializes against concurrent loads on the same handle. This is a
/// control-thread path, not a real-time one; a long pass cannot be
/// cancelled.
pub struct WaveToWave {
    handle: Arc<ModelHandle>,
}

impl WaveToWave {
    pub fn new(handle: Arc<ModelHandle>) -> Self {
        Self { handle }
    }

    /// The shared handle this processor runs against.
    pub fn handle(&self) -> &Arc<ModelHandle> {
        &self.handle
    }

    /// Process `buffer` in place through the loaded graph.
    ///
    /// All input channels are downmixed to a mono mean before inference;
    /// multi-channel passthrough is a known limitation. The buffer comes
    /// back resized to the graph's output shape (normally 1 × output
    /// samples).
    ///
    /// An unloaded handle is a no-op, not an error: the buffer is returned
    /// untouched. On a mid-pipeline failure the buffer keeps whatever state
    /// it reached (always a valid buffer, no rollback) and the handle
    /// stays usable for the next call.
    pub fn process(
        &self,
        buffer: &mut AudioBuffer,
        sample_rate: u32,
        params: &ParamMap,
    ) -> Result<()> {
        if !self.handle.ready() {
            tracing::trace!("no model loaded, skipping processing");
            return Ok(());
        }

        let result = self.handle.with_graph(|graph| {
            let mono = codec::to_tensor(buffer).mean_rows();
            tracing::debug!(shape = ?mono.shape(), "built mono input tensor");

            let inputs = marshal(params);

            tracing::debug!(
                from = sample_rate,
                to = graph.native_sample_rate(),
                "resampling input"
            );
            let resampled = graph.resample(&mono, sample_rate).map_err(Error::Resample)?;

            tracing::debug!("running forward pass");
            let output = graph.forward(&resampled, &inputs).map_err(Error::Forward)?;
            tracing::debug!(shape = ?output.shape(), "got output tensor");

            codec::to_buffer(&output, buffer)?;
            tracing::debug!(
                channels = buffer.channels(),
                samples = buffer.samples(),
                "wrote output buffer"
            );
            Ok(())
        });

        // graph unloaded between the readiness check and the lock: nothing to do
        result.unwrap_or(Ok(()))
    }
}
