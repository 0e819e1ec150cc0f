//! Caller-owned multi-channel audio buffer.

use crate::error::{CoreError, Result};

/// Multi-channel float audio buffer with per-channel sample storage.
///
/// The buffer is owned by the caller; the processing pipeline receives a
/// mutable reference and may resize it to match inference output. After any
/// pipeline call, including failed ones, the buffer is a valid buffer of
/// some shape.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    channels: Vec<Vec<f32>>,
    samples: usize,
}

impl AudioBuffer {
    /// Create a zero-filled buffer of the given shape.
    pub fn new(channels: usize, samples: usize) -> Self {
        Self {
            channels: vec![vec![0.0; samples]; channels],
            samples,
        }
    }

    /// Build a buffer from existing channel data.
    ///
    /// All channels must hold the same number of samples.
    pub fn from_channels(channels: Vec<Vec<f32>>) -> Result<Self> {
        let samples = channels.first().map(|c| c.len()).unwrap_or(0);
        if channels.iter().any(|c| c.len() != samples) {
            return Err(CoreError::InvalidData(
                "channels have different lengths".into(),
            ));
        }
        Ok(Self { channels, samples })
    }

    /// Number of channels.
    pub fn channels(&self) -> usize {
        self.channels.len()
    }

    /// Number of samples per channel.
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Read access to one channel.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn channel(&self, index: usize) -> &[f32] {
        &self.channels[index]
    }

    /// Write access to one channel.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn channel_mut(&mut self, index: usize) -> &mut [f32] {
        &mut self.channels[index]
    }

    /// Resize the buffer in place, discarding existing contents.
    ///
    /// The new storage is zero-filled. This may reallocate.
    pub fn resize(&mut self, channels: usize, samples: usize) {
        self.channels = vec![vec![0.0; samples]; channels];
        self.samples = samples;
    }

    /// True when the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty() || self.samples == 0
    }
}
