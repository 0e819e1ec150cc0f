//! Conversion between audio buffers and rank-2 tensors.

use crate::buffer::AudioBuffer;
use crate::error::{CoreError, Result};
use crate::tensor::Tensor;

/// Encode a buffer as a `[channels, samples]` tensor.
///
/// The tensor owns a copy of the samples; the buffer's storage lifetime is
/// controlled by the caller and may be reused or resized right after this
/// returns.
pub fn to_tensor(buffer: &AudioBuffer) -> Tensor {
    let channels = buffer.channels();
    let samples = buffer.samples();
    let mut data = Vec::with_capacity(channels * samples);
    for channel in 0..channels {
        data.extend_from_slice(buffer.channel(channel));
    }
    Tensor::from_rows(channels, samples, data).expect("shape consistent by construction")
}

/// Decode a rank-2 tensor into `buffer`, resizing it to the tensor's shape.
///
/// A tensor of any other rank is a contract violation: the call errors and
/// the buffer is left untouched. On success the buffer's storage may have
/// been reallocated.
pub fn to_buffer(tensor: &Tensor, buffer: &mut AudioBuffer) -> Result<()> {
    if tensor.rank() != 2 {
        return Err(CoreError::ShapeMismatch {
            rank: tensor.rank(),
            shape: tensor.shape().to_vec(),
        });
    }

    let channels = tensor.dim(0);
    let samples = tensor.dim(1);
    buffer.resize(channels, samples);
    for channel in 0..channels {
        buffer.channel_mut(channel).copy_from_slice(tensor.row(channel));
    }
    Ok(())
}
