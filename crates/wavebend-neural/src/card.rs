//! Model card metadata.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Descriptive metadata attached to an inference graph.
///
/// Populated atomically by a successful load and replaced wholesale by the
/// next one; read-only in between. A handle that has never loaded reports
/// the `Default` (empty) card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelCard {
    /// Display name
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Author/creator
    #[serde(default)]
    pub author: String,

    /// Native sample rate (Hz) the forward pass expects.
    pub sample_rate: u32,

    /// Tags for categorization
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Load a model card from a TOML sidecar file.
///
/// Looks for `model_name.toml` next to `model_name.<ext>`.
///
/// # Example TOML:
/// ```toml
/// name = "Vocal Restorer"
/// description = "Wave-to-wave vocal cleanup"
/// author = "Your Name"
/// sample_rate = 22050
/// tags = ["voice", "restoration"]
/// ```
pub fn load_sidecar_card(model_path: &Path) -> Option<ModelCard> {
    let toml_path = model_path.with_extension("toml");

    if !toml_path.exists() {
        return None;
    }

    match std::fs::read_to_string(&toml_path) {
        Ok(contents) => toml::from_str(&contents).ok(),
        Err(_e) => None,
    }
}
