//! Parameter marshalling: named caller scalars to graph inputs.

use std::collections::HashMap;
use wavebend_core::{ParamMap, ParamValue, Tensor};

/// One marshalled entry: numeric and boolean scalars become 1-element
/// tensors, strings pass through for model-specific interpretation.
#[derive(Debug, Clone, PartialEq)]
pub enum MarshalledValue {
    Tensor(Tensor),
    Text(String),
}

/// Named graph inputs produced by [`marshal`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarshalledParams {
    entries: HashMap<String, MarshalledValue>,
}

impl MarshalledParams {
    pub fn get(&self, key: &str) -> Option<&MarshalledValue> {
        self.entries.get(key)
    }

    /// The entry under `key`, if it marshalled to a tensor.
    pub fn tensor(&self, key: &str) -> Option<&Tensor> {
        match self.entries.get(key) {
            Some(MarshalledValue::Tensor(t)) => Some(t),
            _ => None,
        }
    }

    /// The entry under `key`, if it passed through as a string.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.entries.get(key) {
            Some(MarshalledValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &MarshalledValue)> {
        self.entries.iter()
    }
}

/// Convert a caller parameter map into graph inputs.
///
/// Scalar values widen through `f64` and wrap as 1-element tensors; strings
/// pass through untouched. The source map has unique keys by construction,
/// so there is nothing to deduplicate. An empty map marshals to an empty
/// mapping. Dispatch over [`ParamValue`] is exhaustive, so there is no
/// "unsupported type" path to fail on.
pub fn marshal(params: &ParamMap) -> MarshalledParams {
    let mut entries = HashMap::with_capacity(params.len());
    for (key, value) in params {
        let marshalled = match value {
            ParamValue::Str(s) => MarshalledValue::Text(s.clone()),
            scalar => {
                // every non-string variant widens to f64
                let wide = scalar.as_double().unwrap_or_default();
                MarshalledValue::Tensor(Tensor::scalar(wide as f32))
            }
        };
        entries.insert(key.clone(), marshalled);
    }
    tracing::debug!(count = entries.len(), "marshalled parameters");
    MarshalledParams { entries }
}
