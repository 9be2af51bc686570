// File: src/config.rs
use crate::error::DictionaryError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_DICTIONARY_PATH: &str = "data/sample_dictionary.json";

/// Switches that change what the engine emits. Every field has a default, so
/// a partial JSON object is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    /// Wrap untranslated tokens that contain punctuation as `⟦token⟧` so the
    /// reverse direction can restore them verbatim.
    pub escape_unresolved: bool,
    pub mark_proper_names: bool,
    /// Look an untagged word up as a base-form verb after a modal or `to`.
    pub infer_verb_after_modal: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            escape_unresolved: false,
            mark_proper_names: true,
            infer_verb_after_modal: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON source data.
    pub dictionary: PathBuf,
    /// Compiled bincode snapshot, rebuilt from `dictionary` when missing.
    pub snapshot: Option<PathBuf>,
    pub options: EngineOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: PathBuf::from(DEFAULT_DICTIONARY_PATH),
            snapshot: None,
            options: EngineOptions::default(),
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, DictionaryError> {
        let text = std::fs::read_to_string(path)?;
        serde_json::from_str(&text)
            .map_err(|e| DictionaryError::Config(format!("{}: {e}", path.display())))
    }
}
