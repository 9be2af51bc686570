// File: src/error.rs

/// Failures that abort building a dictionary or engine.
///
/// Resolution itself never fails: an unknown word comes back unchanged.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("dictionary I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The source document is not a dictionary at all.
    #[error("dictionary data could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("dictionary snapshot is unreadable: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Failures of the external part-of-speech tagger. These never reach callers
/// of the engine; the orchestrator falls back to untagged resolution.
#[derive(Debug, thiserror::Error)]
pub enum TaggerError {
    #[error("tagger unavailable: {0}")]
    Unavailable(String),

    #[error("tagged tokens cover {actual} bytes, text has {expected}")]
    Misaligned { expected: usize, actual: usize },
}
