// src/core/types.rs
use serde::{Deserialize, Serialize};

/// Prefixed to a rendering when the source word was a proper name.
pub const NAME_MARKER: char = '·';
/// Opening quotation-bracket glyph.
pub const QUOTE_OPEN: char = '«';
/// Closing quotation-bracket glyph.
pub const QUOTE_CLOSE: char = '»';
/// Source-data guard meaning "never capitalize"; only meaningful at load time.
pub const LOWERCASE_DELIMITER: char = '_';

/// Appended for a possessive `'s`.
pub const POSSESSIVE_S: &str = "'𐑟";
/// Appended for a bare trailing possessive apostrophe (`students'`).
pub const POSSESSIVE_BARE: &str = "'";

pub const ESCAPE_OPEN: char = '⟦';
pub const ESCAPE_CLOSE: char = '⟧';

/// Characters that split a word into independently resolved parts.
pub const COMPOUND_SEPARATORS: [char; 3] = ['-', '…', '—'];

pub fn is_compound_separator(c: char) -> bool {
    COMPOUND_SEPARATORS.contains(&c)
}

/// A phonemic rendering as held by the dictionary.
///
/// `marked` is set when the source row carried a single leading marker glyph,
/// meaning "this word is a name whenever it is written capitalized".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhonemicForm {
    pub text: String,
    pub marked: bool,
}

impl PhonemicForm {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), marked: false }
    }

    /// Parses a raw source-data form, stripping delimiter glyphs from both ends.
    /// Returns `None` when nothing is left.
    pub fn from_source(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let leading: Vec<char> = raw
            .chars()
            .take_while(|&c| is_delimiter(c))
            .collect();
        let marked = leading.len() == 1 && leading[0] == NAME_MARKER;
        let text = raw.trim_matches(is_delimiter);
        if text.is_empty() {
            return None;
        }
        Some(Self { text: text.to_string(), marked })
    }
}

fn is_delimiter(c: char) -> bool {
    c == NAME_MARKER || c == LOWERCASE_DELIMITER
}

/// One source row as it reaches the store builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub word: String,
    #[serde(default)]
    pub pos: Option<String>,
    pub form: String,
    /// Only consulted while collapsing colliding rows.
    #[serde(default)]
    pub frequency: u64,
}

impl DictionaryEntry {
    pub fn new(word: &str, pos: Option<&str>, form: &str, frequency: u64) -> Self {
        Self {
            word: word.to_string(),
            pos: pos.map(str::to_string),
            form: form.to_string(),
            frequency,
        }
    }
}

/// A curated proper-name row. `name` is lower-cased and may contain spaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameEntry {
    pub name: String,
    pub form: String,
    /// Titles are wrapped in quotation brackets when rendered.
    #[serde(default)]
    pub quoted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Whitespace,
    Punctuation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
    pub pos: Option<String>,
}

impl Token {
    pub fn new(text: impl Into<String>, kind: TokenKind) -> Self {
        Self { text: text.into(), kind, pos: None }
    }

    pub fn with_pos(mut self, pos: Option<String>) -> Self {
        self.pos = pos;
        self
    }

    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuffixKind {
    Possessive,
    Contraction,
}

/// An apostrophe suffix peeled off by the punctuation separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApostropheSuffix {
    pub kind: SuffixKind,
    /// Literal suffix as written.
    pub text: String,
}

impl ApostropheSuffix {
    /// Lower-cased with typographic apostrophes folded to `'`.
    pub fn key(&self) -> String {
        self.text.replace('\u{2019}', "'").to_lowercase()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PunctuationSplit {
    pub leading: String,
    pub core: String,
    pub trailing: String,
    pub suffix: Option<ApostropheSuffix>,
}

impl PunctuationSplit {
    pub fn passthrough(raw: &str) -> Self {
        Self { leading: raw.to_string(), ..Self::default() }
    }

    pub fn is_word(&self) -> bool {
        !self.core.is_empty()
    }

    /// The word as written, apostrophe suffix included.
    pub fn whole_word(&self) -> String {
        match &self.suffix {
            Some(suffix) => format!("{}{}", self.core, suffix.text),
            None => self.core.clone(),
        }
    }
}

/// Outcome of resolving one word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved { text: String, proper_name: bool },
    /// No policy matched; the original spelling is carried through.
    Unresolved(String),
}

impl Resolution {
    pub fn resolved(text: impl Into<String>) -> Self {
        Self::Resolved { text: text.into(), proper_name: false }
    }

    pub fn name(text: impl Into<String>) -> Self {
        Self::Resolved { text: text.into(), proper_name: true }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Resolved { text, .. } => text,
            Self::Unresolved(original) => original,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved { .. })
    }

    pub fn is_proper_name(&self) -> bool {
        matches!(self, Self::Resolved { proper_name: true, .. })
    }
}
