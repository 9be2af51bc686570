// --- File: src/core/dictionary.rs
use crate::core::tables;
use crate::core::types::{DictionaryEntry, NameEntry, PhonemicForm};
use crate::error::DictionaryError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredForm {
    form: PhonemicForm,
    /// Retained so the reverse index can pick a canonical spelling.
    frequency: u64,
}

/// Lower-cased word to rendering, in a basic tier and a part-of-speech tier,
/// plus the curated names tier.
///
/// Built once; afterwards only [`DictionaryStore::add_entry`] mutates it, and
/// that needs exclusive access.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DictionaryStore {
    basic: HashMap<String, StoredForm>,
    tagged: HashMap<(String, String), StoredForm>,
    names: HashMap<String, NameEntry>,
}

/// Top-level shape of the JSON source data. Rows stay untyped so a single
/// bad row can be skipped without rejecting the document.
#[derive(Deserialize)]
struct SourceDocument {
    #[serde(default)]
    entries: Vec<serde_json::Value>,
    #[serde(default)]
    names: Vec<serde_json::Value>,
}

impl DictionaryStore {
    /// An empty store carrying only the built-in names.
    pub fn new() -> Self {
        let mut store = Self::default();
        for name in tables::builtin_names() {
            store.insert_name(name);
        }
        store
    }

    /// Builds a store from in-memory rows, keeping the most frequent rendering
    /// whenever rows collide.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = DictionaryEntry>,
    {
        let mut store = Self::new();
        let mut skipped = 0usize;
        for entry in entries {
            if !store.insert_row(&entry) {
                skipped += 1;
            }
        }
        if skipped > 0 {
            tracing::warn!(skipped, "skipped dictionary rows with an empty word or form");
        }
        store
    }

    pub fn from_json_str(json: &str) -> Result<Self, DictionaryError> {
        let document: SourceDocument = serde_json::from_str(json)?;
        let mut store = Self::new();

        for (index, row) in document.entries.into_iter().enumerate() {
            match serde_json::from_value::<DictionaryEntry>(row) {
                Ok(entry) => {
                    if !store.insert_row(&entry) {
                        tracing::warn!(index, word = %entry.word, "skipping dictionary row without a usable form");
                    }
                }
                Err(e) => tracing::warn!(index, error = %e, "skipping malformed dictionary row"),
            }
        }

        for (index, row) in document.names.into_iter().enumerate() {
            match serde_json::from_value::<NameEntry>(row) {
                Ok(name) if !name.name.trim().is_empty() && !name.form.trim().is_empty() => {
                    store.insert_name(name);
                }
                Ok(_) => tracing::warn!(index, "skipping empty name row"),
                Err(e) => tracing::warn!(index, error = %e, "skipping malformed name row"),
            }
        }

        tracing::info!(
            words = store.basic.len(),
            tagged = store.tagged.len(),
            names = store.names.len(),
            "dictionary built"
        );
        Ok(store)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, DictionaryError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Returns false when the row is unusable.
    fn insert_row(&mut self, entry: &DictionaryEntry) -> bool {
        let word = entry.word.trim().to_lowercase();
        if word.is_empty() {
            return false;
        }
        let Some(form) = PhonemicForm::from_source(&entry.form) else {
            return false;
        };
        let stored = StoredForm { form, frequency: entry.frequency };

        if let Some(pos) = entry.pos.as_deref().map(str::trim).filter(|p| !p.is_empty()) {
            keep_dominant(&mut self.tagged, (word.clone(), pos.to_string()), stored.clone());
        }
        keep_dominant(&mut self.basic, word, stored);
        true
    }

    fn insert_name(&mut self, mut name: NameEntry) {
        name.name = name.name.trim().to_lowercase();
        name.form = name.form.trim().to_string();
        self.names.insert(name.name.clone(), name);
    }

    /// Looks `word` up, trying the part-of-speech tier first when a tag is given.
    pub fn lookup(&self, word: &str, pos: Option<&str>) -> Option<&PhonemicForm> {
        let word = word.to_lowercase();
        if let Some(pos) = pos {
            if let Some(stored) = self.tagged.get(&(word.clone(), pos.to_string())) {
                return Some(&stored.form);
            }
        }
        self.basic.get(&word).map(|stored| &stored.form)
    }

    /// Part-of-speech tier only, without falling back to the basic tier.
    pub fn lookup_tagged(&self, word: &str, pos: &str) -> Option<&PhonemicForm> {
        self.tagged
            .get(&(word.to_lowercase(), pos.to_string()))
            .map(|stored| &stored.form)
    }

    pub fn lookup_basic(&self, word: &str) -> Option<&PhonemicForm> {
        self.lookup(word, None)
    }

    pub fn has_word(&self, word: &str) -> bool {
        self.lookup_basic(word).is_some()
    }

    /// Curated name row for a lower-cased, space-joined name.
    pub fn name(&self, name: &str) -> Option<&NameEntry> {
        self.names.get(&name.to_lowercase())
    }

    /// Adds or replaces a basic-tier word at runtime.
    pub fn add_entry(&mut self, word: &str, form: &str) -> bool {
        let word = word.trim().to_lowercase();
        match PhonemicForm::from_source(form) {
            Some(form) if !word.is_empty() => {
                self.basic.insert(word, StoredForm { form, frequency: u64::MAX });
                true
            }
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.basic.len()
    }

    pub fn is_empty(&self) -> bool {
        self.basic.is_empty()
    }

    /// Basic-tier rows as (word, form, frequency), sorted by word.
    pub(crate) fn basic_entries(&self) -> Vec<(&str, &PhonemicForm, u64)> {
        let mut rows: Vec<_> = self
            .basic
            .iter()
            .map(|(word, stored)| (word.as_str(), &stored.form, stored.frequency))
            .collect();
        rows.sort_by(|a, b| a.0.cmp(b.0));
        rows
    }

    pub(crate) fn names(&self) -> impl Iterator<Item = &NameEntry> {
        self.names.values()
    }
}

fn keep_dominant<K: std::hash::Hash + Eq>(map: &mut HashMap<K, StoredForm>, key: K, candidate: StoredForm) {
    match map.get(&key) {
        Some(existing) if existing.frequency >= candidate.frequency => {}
        _ => {
            map.insert(key, candidate);
        }
    }
}
