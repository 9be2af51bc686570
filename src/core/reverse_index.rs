// --- File: src/core/reverse_index.rs
use crate::core::dictionary::DictionaryStore;
use crate::core::tables;
use std::collections::HashMap;

/// The source word a rendering maps back to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReverseEntry {
    pub word: String,
    /// Came from the curated names tier and is not also an ordinary word.
    pub name: bool,
    /// Set for curated names whose rendering is wrapped in quotation brackets.
    pub quoted_name: bool,
}

/// Rendering to canonical source word.
///
/// Layers, later ones overwriting earlier ones: the dictionary's basic tier,
/// the names tier, the closed-class table, then the curated overrides.
#[derive(Debug, Clone, Default)]
pub struct ReverseIndex {
    entries: HashMap<String, ReverseEntry>,
}

impl ReverseIndex {
    pub fn build(store: &DictionaryStore) -> Self {
        let mut entries: HashMap<String, ReverseEntry> = HashMap::new();
        // Best (frequency, word) seen so far per form; lower word wins a tie.
        let mut best: HashMap<&str, (u64, &str)> = HashMap::new();

        for (word, form, frequency) in store.basic_entries() {
            match best.get(form.text.as_str()) {
                Some(&(f, w)) if f > frequency || (f == frequency && w <= word) => {}
                _ => {
                    best.insert(form.text.as_str(), (frequency, word));
                }
            }
        }
        for (form, (_, word)) in best {
            entries.insert(form.to_string(), plain(word));
        }

        let mut names: Vec<_> = store.names().collect();
        names.sort_by(|a, b| a.name.cmp(&b.name));
        for name in names {
            // A name that is also an unmarked dictionary word ("read") is not a name here.
            let ordinary = store.lookup_basic(&name.name).is_some_and(|form| !form.marked);
            entries.insert(
                name.form.clone(),
                ReverseEntry { word: name.name.clone(), name: !ordinary, quoted_name: name.quoted },
            );
        }

        for &(word, form) in tables::CLOSED_CLASS {
            entries.insert(form.to_string(), plain(word));
        }
        for &(form, word) in tables::REVERSE_OVERRIDES {
            entries.insert(form.to_string(), plain(word));
        }

        tracing::info!(forms = entries.len(), "reverse index built");
        Self { entries }
    }

    pub fn lookup(&self, form: &str) -> Option<&ReverseEntry> {
        self.entries.get(form)
    }

    /// Records a runtime-added word unless the form already has a curated owner.
    pub fn add_entry(&mut self, word: &str, form: &str) {
        let word = word.trim().to_lowercase();
        let curated = tables::REVERSE_OVERRIDES.iter().any(|&(f, _)| f == form)
            || tables::CLOSED_CLASS.iter().any(|&(_, f)| f == form);
        if !curated {
            self.entries.insert(form.to_string(), plain(&word));
        }
    }
}

fn plain(word: &str) -> ReverseEntry {
    ReverseEntry { word: word.to_string(), name: false, quoted_name: false }
}
