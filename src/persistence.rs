// File: src/persistence.rs
use crate::core::dictionary::DictionaryStore;
use crate::error::DictionaryError;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes a compiled store next to `path` and swaps it into place, so a
/// reader never sees a half-written snapshot.
pub fn save_snapshot(store: &DictionaryStore, path: &Path) -> Result<(), DictionaryError> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        bincode::serialize_into(&mut writer, store)?;
        writer.flush()?;
    }
    temp_file.persist(path).map_err(|e| e.error)?;

    tracing::info!(path = %path.display(), words = store.len(), "dictionary snapshot written");
    Ok(())
}

pub fn load_snapshot(path: &Path) -> Result<DictionaryStore, DictionaryError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let store: DictionaryStore = bincode::deserialize_from(reader)?;

    tracing::info!(path = %path.display(), words = store.len(), "dictionary snapshot loaded");
    Ok(store)
}
