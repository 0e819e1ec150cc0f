//! Thread-safe model handle: loading, readiness, listeners.

use crate::card::ModelCard;
use crate::error::{Error, Result};
use crate::graph::{GraphLoader, InferenceGraph};
use crate::marshal::MarshalledParams;
use dashmap::DashMap;
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use wavebend_core::{ParamMap, ParamValue, Tensor};

/// Key the `load` parameter map must carry: filesystem location of the
/// serialized graph.
pub const MODEL_PATH_KEY: &str = "model_path";

/// Counter for generating unique listener IDs
static LISTENER_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Identifies a registered model listener.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct ListenerId(u64);

impl ListenerId {
    fn next() -> Self {
        Self(LISTENER_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

type ListenerFn = Box<dyn Fn(&ModelCard) + Send + Sync>;

/// Owns a loaded inference graph, its model card, and the lock that
/// serializes loading against processing.
///
/// One handle is meant to be shared (via `Arc`) across every view of a
/// session; views register listeners instead of loading their own copy.
/// The graph is `Some` iff [`ready`](Self::ready) reports true, and the
/// flag only flips after the card is fully published.
pub struct ModelHandle {
    graph: Mutex<Option<Box<dyn InferenceGraph>>>,
    loaded: AtomicBool,
    card: RwLock<ModelCard>,
    listeners: DashMap<ListenerId, ListenerFn>,
    loader: GraphLoader,
}

impl ModelHandle {
    /// Create an empty (unloaded) handle around a graph loader.
    pub fn new(loader: GraphLoader) -> Self {
        Self {
            graph: Mutex::new(None),
            loaded: AtomicBool::new(false),
            card: RwLock::new(ModelCard::default()),
            listeners: DashMap::new(),
            loader,
        }
    }

    /// Load a graph from the [`MODEL_PATH_KEY`] entry in `params`.
    ///
    /// Holds the graph lock for the whole call, so loading serializes
    /// against concurrent processing and other loads. On any failure the
    /// handle keeps its prior state: a missing or non-string path entry is
    /// [`Error::MissingPathParameter`], a loader failure is
    /// [`Error::GraphLoad`], and a graph whose card cannot be read is
    /// discarded with [`Error::MetadataExtraction`].
    ///
    /// On success every registered listener is invoked synchronously on
    /// this thread, once, with the fully-populated card. Notification runs
    /// after the lock is dropped, so listeners may call back into the
    /// handle.
    pub fn load(&self, params: &ParamMap) -> Result<()> {
        let path = match params.get(MODEL_PATH_KEY) {
            Some(ParamValue::Str(path)) => path.clone(),
            _ => {
                tracing::warn!("load called without a `{}` parameter", MODEL_PATH_KEY);
                return Err(Error::MissingPathParameter);
            }
        };

        let card = {
            let mut guard = self.graph.lock();
            tracing::info!(path = %path, "loading model graph");

            let graph = (self.loader)(Path::new(&path)).map_err(Error::GraphLoad)?;
            // card extraction failure discards the graph; the handle keeps
            // serving whatever it held before
            let card = graph.card().map_err(Error::MetadataExtraction)?;

            *self.card.write() = card.clone();
            *guard = Some(graph);
            self.loaded.store(true, Ordering::Release);
            card
        };

        tracing::info!(
            model = %card.name,
            sample_rate = card.sample_rate,
            "model loaded"
        );
        self.notify(&card);
        Ok(())
    }

    /// Lock-free readiness check.
    ///
    /// May observe a concurrent load's false→true transition slightly late,
    /// but never reports loaded before the card is published.
    pub fn ready(&self) -> bool {
        self.loaded.load(Ordering::Acquire)
    }

    /// Run the resident graph's forward pass.
    ///
    /// Acquires the graph lock for the duration of the pass. Errors with
    /// [`Error::NotLoaded`] when no graph is resident; check
    /// [`ready`](Self::ready) first.
    pub fn forward(&self, input: &Tensor, params: &MarshalledParams) -> Result<Tensor> {
        let guard = self.graph.lock();
        let graph = guard.as_deref().ok_or(Error::NotLoaded)?;
        graph.forward(input, params).map_err(Error::Forward)
    }

    /// Acquire the graph lock and run `f` against the resident graph.
    ///
    /// Returns `None` without calling `f` when no graph is loaded. The lock
    /// is held for the whole closure, which is what gives the pipeline its
    /// load/process mutual exclusion.
    pub fn with_graph<R>(&self, f: impl FnOnce(&dyn InferenceGraph) -> R) -> Option<R> {
        let guard = self.graph.lock();
        guard.as_deref().map(f)
    }

    /// Snapshot of the published model card.
    ///
    /// Default-empty before the first successful load.
    pub fn card(&self) -> ModelCard {
        self.card.read().clone()
    }

    /// Register a listener fired once per successful load, after the card
    /// is fully published.
    pub fn add_listener(&self, f: impl Fn(&ModelCard) + Send + Sync + 'static) -> ListenerId {
        let id = ListenerId::next();
        self.listeners.insert(id, Box::new(f));
        id
    }

    /// Remove a listener. Returns false if the id was not registered.
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        self.listeners.remove(&id).is_some()
    }

    fn notify(&self, card: &ModelCard) {
        for entry in self.listeners.iter() {
            (entry.value())(card);
        }
    }
}

impl fmt::Debug for ModelHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelHandle")
            .field("loaded", &self.ready())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
