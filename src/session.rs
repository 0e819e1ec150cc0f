//! Document-scope session owning the shared model handle.

use std::sync::Arc;
use wavebend_core::{AudioBuffer, ParamMap};
use wavebend_neural::{
    Error, GraphLoader, ListenerId, ModelCard, ModelHandle, Result, WaveToWave,
};

/// Session facade over one shared [`ModelHandle`].
///
/// Cheap to clone (Arc inner); every view of a document clones the session
/// and registers a listener rather than loading its own model instance.
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    handle: Arc<ModelHandle>,
    processor: WaveToWave,
}

impl Session {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::default()
    }

    /// Load a model graph. See [`ModelHandle::load`].
    pub fn load(&self, params: &ParamMap) -> Result<()> {
        self.inner.handle.load(params)
    }

    /// Lock-free readiness check.
    pub fn ready(&self) -> bool {
        self.inner.handle.ready()
    }

    /// Process `buffer` in place. See [`WaveToWave::process`].
    pub fn process(
        &self,
        buffer: &mut AudioBuffer,
        sample_rate: u32,
        params: &ParamMap,
    ) -> Result<()> {
        self.inner.processor.process(buffer, sample_rate, params)
    }

    /// Register a listener fired once per successful load.
    pub fn add_listener(
        &self,
        f: impl Fn(&ModelCard) + Send + Sync + 'static,
    ) -> ListenerId {
        self.inner.handle.add_listener(f)
    }

    pub fn remove_listener(&self, id: ListenerId) -> bool {
        self.inner.handle.remove_listener(id)
    }

    /// Snapshot of the published model card.
    ///
    /// Stale (default-empty) before the first successful load.
    pub fn model_card(&self) -> ModelCard {
        self.inner.handle.card()
    }

    pub fn model_name(&self) -> String {
        self.inner.handle.card().name
    }

    pub fn model_description(&self) -> String {
        self.inner.handle.card().description
    }

    pub fn model_author(&self) -> String {
        self.inner.handle.card().author
    }

    /// Native sample rate (Hz) of the loaded model, 0 before a load.
    pub fn native_sample_rate(&self) -> u32 {
        self.inner.handle.card().sample_rate
    }

    pub fn model_tags(&self) -> Vec<String> {
        self.inner.handle.card().tags
    }

    /// The shared handle itself (advanced use).
    pub fn handle(&self) -> &Arc<ModelHandle> {
        &self.inner.handle
    }
}

/// Builder for [`Session`].
#[derive(Default)]
pub struct SessionBuilder {
    loader: Option<GraphLoader>,
}

impl SessionBuilder {
    /// Set the graph loader used by `load`. Required.
    pub fn loader(mut self, loader: GraphLoader) -> Self {
        self.loader = Some(loader);
        self
    }

    pub fn build(self) -> Result<Session> {
        let loader = self.loader.ok_or_else(|| {
            Error::InvalidConfig("no graph loader configured. Use .loader() to set one.".into())
        })?;

        let handle = Arc::new(ModelHandle::new(loader));
        let processor = WaveToWave::new(handle.clone());
        Ok(Session {
            inner: Arc::new(SessionInner { handle, processor }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wavebend_neural::{ClosureGraph, InferenceGraph, MODEL_PATH_KEY};

    fn passthrough_loader() -> GraphLoader {
        Box::new(|path| {
            let card = ModelCard {
                name: path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("unknown")
                    .to_string(),
                description: "passthrough".into(),
                author: "tests".into(),
                sample_rate: 44100,
                tags: vec!["test".into()],
            };
            Ok(Box::new(ClosureGraph::new(card, |input, _| Ok(input.clone())))
                as Box<dyn InferenceGraph>)
        })
    }

    fn path_params(path: &str) -> ParamMap {
        let mut params = ParamMap::new();
        params.insert(MODEL_PATH_KEY.into(), path.into());
        params
    }

    #[test]
    fn test_no_loader_fails() {
        assert!(Session::builder().build().is_err());
    }

    #[test]
    fn test_card_accessors_stale_before_load() {
        let session = Session::builder().loader(passthrough_loader()).build().unwrap();
        assert!(!session.ready());
        assert!(session.model_name().is_empty());
        assert!(session.model_author().is_empty());
        assert_eq!(session.native_sample_rate(), 0);
        assert!(session.model_tags().is_empty());
    }

    #[test]
    fn test_load_and_accessors() {
        let session = Session::builder().loader(passthrough_loader()).build().unwrap();
        session.load(&path_params("models/cleaner.bin")).unwrap();

        assert!(session.ready());
        assert_eq!(session.model_name(), "cleaner");
        assert_eq!(session.model_author(), "tests");
        assert_eq!(session.native_sample_rate(), 44100);
        assert_eq!(session.model_tags(), vec!["test"]);
    }

    #[test]
    fn test_clones_share_one_handle() {
        let session = Session::builder().loader(passthrough_loader()).build().unwrap();
        let view_a = session.clone();
        let view_b = session.clone();

        // a load through one view is visible through every other
        view_a.load(&path_params("shared.bin")).unwrap();
        assert!(view_b.ready());
        assert_eq!(view_b.model_name(), "shared");
        assert!(Arc::ptr_eq(view_a.handle(), view_b.handle()));
    }

    #[test]
    fn test_process_through_session() {
        let session = Session::builder().loader(passthrough_loader()).build().unwrap();
        session.load(&path_params("pass.bin")).unwrap();

        let mut buffer =
            AudioBuffer::from_channels(vec![vec![0.2, 0.4], vec![0.6, 0.8]]).unwrap();
        session.process(&mut buffer, 44100, &ParamMap::new()).unwrap();

        assert_eq!(buffer.channels(), 1);
        assert_eq!(buffer.samples(), 2);
    }
}
