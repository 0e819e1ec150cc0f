//! Inference graph abstraction, the framework-agnostic model seam.
//!
//! No ML framework types cross this boundary. A graph is whatever can run a
//! forward pass over a [`Tensor`] and describe itself with a [`ModelCard`];
//! deserialization is delegated to a [`GraphLoader`] supplied by the
//! embedding application (Torch bindings, ONNX Runtime, hand-written DSP;
//! the handle does not care).

use crate::card::ModelCard;
use crate::marshal::MarshalledParams;
use std::path::Path;
use wavebend_core::{resample_mono, ResampleQuality, Tensor};

/// A deserialized, ready-to-run inference graph.
///
/// Implementations run on whichever thread holds the owning handle's lock;
/// they need `Send` but not `Sync`, since the lock guarantees exclusive access.
pub trait InferenceGraph: Send {
    /// Run the forward pass.
    ///
    /// `input` is a rank-2 `[channels, samples]` tensor at the graph's
    /// native sample rate. The result must also be rank 2 to be written
    /// back into an audio buffer.
    fn forward(
        &self,
        input: &Tensor,
        params: &MarshalledParams,
    ) -> std::result::Result<Tensor, String>;

    /// Native sample rate (Hz) the forward pass expects.
    fn native_sample_rate(&self) -> u32;

    /// Extract the model card.
    ///
    /// A failure here fails the whole load: the handle never exposes a
    /// graph without a fully-populated card.
    fn card(&self) -> std::result::Result<ModelCard, String>;

    /// Resample `input` rows from `source_rate` to the native rate.
    ///
    /// The default delegates to the built-in FFT resampler. Graphs that
    /// ship their own resampling routine override this.
    fn resample(&self, input: &Tensor, source_rate: u32) -> std::result::Result<Tensor, String> {
        if input.rank() != 2 {
            return Err(format!(
                "expected a rank-2 input, got shape {:?}",
                input.shape()
            ));
        }

        let rows = input.dim(0);
        let mut resampled = Vec::with_capacity(rows);
        for row in 0..rows {
            let out = resample_mono(
                input.row(row),
                source_rate,
                self.native_sample_rate(),
                ResampleQuality::Medium,
            )
            .map_err(|e| e.to_string())?;
            resampled.push(out);
        }

        let cols = resampled.first().map(|r| r.len()).unwrap_or(0);
        let data: Vec<f32> = resampled.into_iter().flatten().collect();
        Tensor::from_rows(rows, cols, data).map_err(|e| e.to_string())
    }
}

/// Deserializes an [`InferenceGraph`] from a location on disk.
///
/// Loaders return graphs ready for inference: weights resident, evaluation
/// (non-training) mode. Called with the graph lock held, so a slow
/// deserialization blocks concurrent processing rather than racing it.
pub type GraphLoader =
    Box<dyn Fn(&Path) -> std::result::Result<Box<dyn InferenceGraph>, String> + Send + Sync>;

/// Forward closure type for [`ClosureGraph`].
pub type ForwardFn =
    Box<dyn Fn(&Tensor, &MarshalledParams) -> std::result::Result<Tensor, String> + Send>;

/// An [`InferenceGraph`] built from a forward closure and a card.
///
/// The closure route covers tests, demos, and embedding hand-written DSP
/// behind the graph seam without a serialized model file.
pub struct ClosureGraph {
    card: ModelCard,
    forward: ForwardFn,
}

impl ClosureGraph {
    pub fn new(
        card: ModelCard,
        forward: impl Fn(&Tensor, &MarshalledParams) -> std::result::Result<Tensor, String>
            + Send
            + 'static,
    ) -> Self {
        Self {
            card,
            forward: Box::new(forward),
        }
    }
}

impl InferenceGraph for ClosureGraph {
    fn forward(
        &self,
        input: &Tensor,
        params: &MarshalledParams,
    ) -> std::result::Result<Tensor, String> {
        (self.forward)(input, params)
    }

    fn native_sample_rate(&self) -> u32 {
        self.card.sample_rate
    }

    fn card(&self) -> std::result::Result<ModelCard, String> {
        Ok(self.card.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marshal::marshal;
    use wavebend_core::ParamMap;

    fn test_card(sample_rate: u32) -> ModelCard {
        ModelCard {
            name: "passthrough".into(),
            description: "test graph".into(),
            author: "tests".into(),
            sample_rate,
            tags: vec!["test".into()],
        }
    }

    #[test]
    fn test_closure_graph_forward() {
        let graph = ClosureGraph::new(test_card(44100), |input, _| Ok(input.clone()));
        let input = Tensor::from_rows(1, 3, vec![0.1, 0.2, 0.3]).unwrap();
        let output = graph.forward(&input, &marshal(&ParamMap::new())).unwrap();
        assert_eq!(output, input);
    }

    #[test]
    fn test_closure_graph_card() {
        let graph = ClosureGraph::new(test_card(22050), |input, _| Ok(input.clone()));
        let card = graph.card().unwrap();
        assert_eq!(card.name, "passthrough");
        assert_eq!(graph.native_sample_rate(), 22050);
    }

    #[test]
    fn test_default_resample_same_rate_is_identity() {
        let graph = ClosureGraph::new(test_card(44100), |input, _| Ok(input.clone()));
        let input = Tensor::from_rows(1, 4, vec![0.1, 0.2, 0.3, 0.4]).unwrap();
        let out = graph.resample(&input, 44100).unwrap();
        assert_eq!(out, input);
    }

    #[test]
    fn test_default_resample_halves_length() {
        let graph = ClosureGraph::new(test_card(22050), |input, _| Ok(input.clone()));
        let samples = 44100;
        let data: Vec<f32> = (0..samples)
            .map(|i| (2.0 * std::f32::consts::PI * 440.0 * i as f32 / 44100.0).sin())
            .collect();
        let input = Tensor::from_rows(1, samples, data).unwrap();

        let out = graph.resample(&input, 44100).unwrap();
        assert_eq!(out.rank(), 2);
        assert_eq!(out.dim(0), 1);
        assert!(
            (out.dim(1) as i32 - 22050).abs() < 100,
            "unexpected resampled length {}",
            out.dim(1)
        );
    }

    #[test]
    fn test_default_resample_rejects_rank_1() {
        let graph = ClosureGraph::new(test_card(22050), |input, _| Ok(input.clone()));
        assert!(graph.resample(&Tensor::scalar(1.0), 44100).is_err());
    }
}
