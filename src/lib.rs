// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod persistence;
pub mod tagger;

pub use crate::config::{Config, EngineOptions};
pub use crate::core::dictionary::DictionaryStore;
pub use crate::core::engine::Transliterator;
pub use crate::core::types::{DictionaryEntry, NameEntry, Resolution};
pub use crate::error::{DictionaryError, TaggerError};
pub use crate::tagger::{PosTagger, TaggedToken};
