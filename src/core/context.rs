// File: src/core/context.rs
use crate::core::tables;

/// Rolling state threaded through one forward call.
///
/// Owned by a single `transliterate` invocation and dropped at its end; the
/// engine itself never holds one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransliterationContext {
    pub previous_word_clean: Option<String>,
    pub previous_pos: Option<String>,
    pub previous_was_proper_name: bool,
    pub at_sentence_start: bool,
}

impl Default for TransliterationContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TransliterationContext {
    pub fn new() -> Self {
        Self {
            previous_word_clean: None,
            previous_pos: None,
            previous_was_proper_name: false,
            at_sentence_start: true,
        }
    }

    /// Records a resolved input word. `clean` is the word as written, minus
    /// surrounding punctuation.
    pub fn record_word(&mut self, clean: &str, pos: Option<&str>, proper_name: bool) {
        self.previous_word_clean = Some(clean.to_lowercase());
        self.previous_pos = pos.map(str::to_string);
        self.previous_was_proper_name = proper_name;
        self.at_sentence_start = false;
    }

    /// Accounts for punctuation that followed the last word, or stood alone.
    pub fn note_marks(&mut self, marks: &str) {
        if marks.is_empty() {
            return;
        }
        let after_abbreviation = self.previous_is_abbreviation();
        if ends_sentence(marks) && !after_abbreviation {
            self.at_sentence_start = true;
        }
        // "J. R. R. Tolkien" is still one name.
        if !(after_abbreviation && marks == ".") {
            self.previous_was_proper_name = false;
        }
    }

    fn previous_is_abbreviation(&self) -> bool {
        self.previous_word_clean
            .as_deref()
            .is_some_and(is_abbreviation)
    }

    /// True when the previous word or tag makes a base-form verb likely.
    pub fn expects_verb(&self) -> bool {
        self.previous_pos.as_deref().is_some_and(|pos| pos == "MD" || pos == "TO")
            || self
                .previous_word_clean
                .as_deref()
                .is_some_and(tables::is_verb_introducer)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentencePosition {
    Start,
    /// A period follows a title or initial, so this may not be a new sentence.
    AfterAbbreviation,
    Inside,
}

/// Rolling state threaded through one reverse call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReverseContext {
    pub position: SentencePosition,
    pub previous_word: Option<String>,
    pub previous_was_proper_name: bool,
}

impl Default for ReverseContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ReverseContext {
    pub fn new() -> Self {
        Self {
            position: SentencePosition::Start,
            previous_word: None,
            previous_was_proper_name: false,
        }
    }

    pub fn record_word(&mut self, word: &str, proper_name: bool) {
        self.previous_word = Some(word.to_lowercase());
        self.previous_was_proper_name = proper_name;
        self.position = SentencePosition::Inside;
    }

    pub fn note_marks(&mut self, marks: &str) {
        if marks.is_empty() {
            return;
        }
        let after_abbreviation = self.previous_word.as_deref().is_some_and(is_abbreviation);
        if ends_sentence(marks) {
            self.position = if after_abbreviation && marks.starts_with('.') {
                SentencePosition::AfterAbbreviation
            } else {
                SentencePosition::Start
            };
        }
        if !(after_abbreviation && marks == ".") {
            self.previous_was_proper_name = false;
        }
    }
}

fn ends_sentence(marks: &str) -> bool {
    marks.chars().any(|c| matches!(c, '.' | '!' | '?'))
}

fn is_abbreviation(word: &str) -> bool {
    word.chars().count() == 1 || tables::is_title_abbreviation(word)
}
