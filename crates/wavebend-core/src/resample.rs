//! Mono audio resampling using rubato.

use crate::error::Result;
use rubato::{FftFixedIn, Resampler};

/// Resampling quality presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResampleQuality {
    /// Fast resampling (lower quality)
    Fast,
    /// Balanced quality/speed (default)
    #[default]
    Medium,
    /// High quality
    High,
    /// Best quality (slowest)
    Best,
}

impl ResampleQuality {
    fn chunk_size(&self) -> usize {
        match self {
            ResampleQuality::Fast => 512,
            ResampleQuality::Medium => 1024,
            ResampleQuality::High => 2048,
            ResampleQuality::Best => 4096,
        }
    }

    fn sub_chunks(&self) -> usize {
        match self {
            ResampleQuality::Fast => 1,
            ResampleQuality::Medium => 2,
            ResampleQuality::High => 4,
            ResampleQuality::Best => 8,
        }
    }
}

/// Resample a mono signal from `source_rate` to `target_rate`.
///
/// Equal rates return a copy of the input unchanged.
pub fn resample_mono(
    input: &[f32],
    source_rate: u32,
    target_rate: u32,
    quality: ResampleQuality,
) -> Result<Vec<f32>> {
    if source_rate == target_rate {
        return Ok(input.to_vec());
    }

    let chunk_size = quality.chunk_size();
    let sub_chunks = quality.sub_chunks();

    let mut resampler = FftFixedIn::<f32>::new(
        source_rate as usize,
        target_rate as usize,
        chunk_size,
        sub_chunks,
        1,
    )?;

    let input_frames = input.len();
    let expected_output_frames =
        (input_frames as f64 * target_rate as f64 / source_rate as f64).ceil() as usize;

    let mut output = Vec::with_capacity(expected_output_frames + chunk_size);

    let mut pos = 0;
    while pos < input_frames {
        let remaining = input_frames - pos;
        let frames_to_process = remaining.min(chunk_size);

        let input_frames_needed = resampler.input_frames_next();
        let actual_frames = if remaining < input_frames_needed {
            input_frames_needed
        } else {
            frames_to_process.max(input_frames_needed)
        };

        // last chunk is zero-padded up to the resampler's requested length
        let mut chunk = vec![0.0f32; actual_frames];
        let copy_frames = frames_to_process.min(remaining);
        chunk[..copy_frames].copy_from_slice(&input[pos..pos + copy_frames]);

        let resampled = resampler.process(&[chunk], None)?;
        output.extend_from_slice(&resampled[0]);

        pos += actual_frames;
    }

    let final_length = expected_output_frames.min(output.len());
    output.truncate(final_length);

    Ok(output)
}
