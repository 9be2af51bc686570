// File: src/core/mod.rs
pub mod cascade;
pub mod context;
pub mod dictionary;
pub mod engine;
pub mod morphology;
pub mod names;
pub mod punctuation;
pub mod reverse;
pub mod reverse_index;
pub mod tables;
pub mod tokenizer;
pub mod types;
