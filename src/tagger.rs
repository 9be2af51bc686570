// File: src/tagger.rs
//! The part-of-speech tagger the orchestrator can optionally consult.
//! Tagging itself lives outside this crate.

use crate::error::TaggerError;

/// One tagged span of the input. Whitespace spans are tokens too, so the
/// texts of a full tagging concatenate back to the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub text: String,
    /// Opaque short code such as `NN` or `VBD`, matched literally against
    /// the dictionary's part-of-speech tier.
    pub pos: Option<String>,
}

impl TaggedToken {
    pub fn new(text: &str, pos: Option<&str>) -> Self {
        Self { text: text.to_string(), pos: pos.map(str::to_string) }
    }
}

pub trait PosTagger {
    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>, TaggerError>;
}

impl<F> PosTagger for F
where
    F: Fn(&str) -> Result<Vec<TaggedToken>, TaggerError>,
{
    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>, TaggerError> {
        self(text)
    }
}

/// Checks that a tagging covers `text` exactly.
pub fn check_alignment(text: &str, tokens: &[TaggedToken]) -> Result<(), TaggerError> {
    let joined: String = tokens.iter().map(|t| t.text.as_str()).collect();
    if joined == text {
        Ok(())
    } else {
        Err(TaggerError::Misaligned { expected: text.len(), actual: joined.len() })
    }
}
