// File: src/core/names.rs
//! Proper-name marking: when to prefix the marker glyph going forward, and
//! how to capitalize a marked word coming back.

use crate::core::context::TransliterationContext;
use crate::core::dictionary::DictionaryStore;
use crate::core::tables;
use crate::core::types::{NameEntry, NAME_MARKER, QUOTE_CLOSE, QUOTE_OPEN};

pub fn is_capitalized(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

/// Capitalized, and neither a function word nor a determiner.
pub fn looks_like_name(word: &str) -> bool {
    if !is_capitalized(word) {
        return false;
    }
    let lower = word.to_lowercase();
    !tables::is_closed_class(&lower) && !tables::is_sentence_initial_determiner(&lower)
}

/// Whether a curated name row should be used for `word` here. A capitalized
/// word opening a sentence is only a name if it is not an ordinary word too.
pub fn takes_curated_name(word: &str, ctx: &TransliterationContext, store: &DictionaryStore) -> bool {
    if !looks_like_name(word) {
        return false;
    }
    if ctx.at_sentence_start {
        return store.lookup_basic(word).map_or(true, |form| form.marked);
    }
    true
}

/// A single capital letter followed by a period. `I.` ends a sentence far
/// more often than it abbreviates a name.
pub fn is_initial(core: &str, trailing: &str) -> bool {
    let mut chars = core.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_uppercase() && c != 'I')
        && trailing.starts_with('.')
}

/// Prefixes the marker unless the previous word already opened this name.
pub fn mark(form: &str, ctx: &TransliterationContext, enabled: bool) -> String {
    if enabled && !ctx.previous_was_proper_name {
        format!("{NAME_MARKER}{form}")
    } else {
        form.to_string()
    }
}

pub fn render_name(entry: &NameEntry, ctx: &TransliterationContext, enabled: bool) -> String {
    if entry.quoted {
        mark(&format!("{QUOTE_OPEN}{}{QUOTE_CLOSE}", entry.form), ctx, enabled)
    } else {
        mark(&entry.form, ctx, enabled)
    }
}

pub fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Capitalizes every space- or hyphen-separated part.
pub fn capitalize_name(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut at_start = true;
    for c in word.chars() {
        if at_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_start = c == ' ' || c == '-';
    }
    out
}
