// File: src/core/engine.rs
use crate::config::{Config, EngineOptions};
use crate::core::cascade::{Resolver, TokenOutcome};
use crate::core::context::{ReverseContext, SentencePosition, TransliterationContext};
use crate::core::dictionary::DictionaryStore;
use crate::core::reverse::ReverseResolver;
use crate::core::reverse_index::ReverseIndex;
use crate::core::types::{
    PhonemicForm, Resolution, SuffixKind, Token, TokenKind, ESCAPE_CLOSE, ESCAPE_OPEN, NAME_MARKER, POSSESSIVE_BARE,
    POSSESSIVE_S,
};
use crate::core::{names, punctuation, tokenizer};
use crate::error::DictionaryError;
use crate::persistence::{load_snapshot, save_snapshot};
use crate::tagger::{check_alignment, PosTagger, TaggedToken};
use std::path::Path;

/// Longest run of words tried against the multi-word names tier.
const NAME_LOOKAHEAD: usize = 3;

/// The transliteration engine. Holds only read-only data between calls, so a
/// shared reference can serve any number of threads at once.
#[derive(Debug, Clone)]
pub struct Transliterator {
    store: DictionaryStore,
    reverse: ReverseIndex,
    options: EngineOptions,
}

impl Transliterator {
    pub fn new(store: DictionaryStore) -> Self {
        Self::with_options(store, EngineOptions::default())
    }

    pub fn with_options(store: DictionaryStore, options: EngineOptions) -> Self {
        let reverse = ReverseIndex::build(&store);
        Self { store, reverse, options }
    }

    pub fn from_json_str(json: &str) -> Result<Self, DictionaryError> {
        Ok(Self::new(DictionaryStore::from_json_str(json)?))
    }

    pub fn from_json_file(path: &Path) -> Result<Self, DictionaryError> {
        Ok(Self::new(DictionaryStore::from_json_file(path)?))
    }

    /// Loads the compiled snapshot when it is readable; otherwise builds from
    /// the JSON source and tries to leave a fresh snapshot behind.
    pub fn from_snapshot_or_json(snapshot: &Path, json: &Path) -> Result<Self, DictionaryError> {
        let store = match load_snapshot(snapshot) {
            Ok(store) => store,
            Err(error) => {
                if snapshot.exists() {
                    tracing::warn!(path = %snapshot.display(), %error, "ignoring unreadable snapshot");
                }
                let store = DictionaryStore::from_json_file(json)?;
                if let Err(error) = save_snapshot(&store, snapshot) {
                    tracing::warn!(path = %snapshot.display(), %error, "could not write snapshot");
                }
                store
            }
        };
        Ok(Self::new(store))
    }

    pub fn from_config(config: &Config) -> Result<Self, DictionaryError> {
        let mut engine = match &config.snapshot {
            Some(snapshot) => Self::from_snapshot_or_json(snapshot, &config.dictionary)?,
            None => Self::from_json_file(&config.dictionary)?,
        };
        engine.set_options(config.options.clone());
        Ok(engine)
    }

    pub fn store(&self) -> &DictionaryStore {
        &self.store
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: EngineOptions) {
        self.options = options;
    }

    pub fn save_snapshot(&self, path: &Path) -> Result<(), DictionaryError> {
        save_snapshot(&self.store, path)
    }

    /// Adds a runtime word to both directions. Needs `&mut self`, so it can
    /// never overlap a resolution call.
    pub fn add_entry(&mut self, word: &str, form: &str) -> bool {
        if !self.store.add_entry(word, form) {
            return false;
        }
        if let Some(form) = PhonemicForm::from_source(form) {
            self.reverse.add_entry(word, &form.text);
        }
        true
    }

    // --- Forward ---

    pub fn transliterate(&self, text: &str) -> String {
        self.render(&tokenizer::segment(text))
    }

    /// A single word, resolved as if it stood mid-sentence.
    pub fn transliterate_word(&self, word: &str, pos: Option<&str>) -> String {
        let resolver = Resolver::new(&self.store, &self.options);
        let mut ctx = TransliterationContext { at_sentence_start: false, ..TransliterationContext::new() };
        let outcome = resolver.resolve_token(word, pos, &mut ctx);
        self.finish(word, outcome)
    }

    pub fn transliterate_with_parts_of_speech(&self, tokens: &[TaggedToken]) -> String {
        let tokens: Vec<Token> = tokens
            .iter()
            .map(|tagged| {
                let kind = if !tagged.text.is_empty() && tagged.text.chars().all(char::is_whitespace) {
                    TokenKind::Whitespace
                } else if tagged.text.chars().any(char::is_alphabetic) {
                    TokenKind::Word
                } else {
                    TokenKind::Punctuation
                };
                Token::new(tagged.text.clone(), kind).with_pos(tagged.pos.clone())
            })
            .collect();
        self.render(&tokens)
    }

    /// Tags `text` with `tagger` first. Any tagging failure falls back to
    /// untagged resolution.
    pub fn transliterate_tagged(&self, text: &str, tagger: &dyn PosTagger) -> String {
        let tagged = tagger
            .tag(text)
            .and_then(|tokens| check_alignment(text, &tokens).map(|()| tokens));
        match tagged {
            Ok(tokens) => self.transliterate_with_parts_of_speech(&tokens),
            Err(error) => {
                tracing::warn!(%error, "part-of-speech tagging failed, resolving untagged");
                self.transliterate(text)
            }
        }
    }

    fn render(&self, tokens: &[Token]) -> String {
        let resolver = Resolver::new(&self.store, &self.options);
        let mut ctx = TransliterationContext::new();
        let mut out = String::with_capacity(tokens.iter().map(|t| t.text.len()).sum::<usize>() * 2);

        let mut i = 0;
        while i < tokens.len() {
            let token = &tokens[i];
            if token.kind == TokenKind::Whitespace {
                out.push_str(&token.text);
                i += 1;
                continue;
            }
            if let Some((consumed, rendered)) = self.multi_word_name(tokens, i, &mut ctx) {
                out.push_str(&rendered);
                i += consumed;
                continue;
            }
            let outcome = resolver.resolve_token(&token.text, token.pos.as_deref(), &mut ctx);
            out.push_str(&self.finish(&token.text, outcome));
            i += 1;
        }
        out
    }

    /// Applies the escape wrapper to a wholly untranslated punctuated token.
    fn finish(&self, raw: &str, outcome: TokenOutcome) -> String {
        let untranslated = matches!(outcome.resolution, Some(Resolution::Unresolved(_)));
        if self.options.escape_unresolved && untranslated && raw.chars().any(|c| !c.is_alphabetic()) {
            format!("{ESCAPE_OPEN}{raw}{ESCAPE_CLOSE}")
        } else {
            outcome.text
        }
    }

    /// Tries the longest phrase of up to [`NAME_LOOKAHEAD`] single-space
    /// separated words starting at `start` against the names tier. Returns the
    /// number of tokens consumed and the rendering.
    fn multi_word_name(
        &self,
        tokens: &[Token],
        start: usize,
        ctx: &mut TransliterationContext,
    ) -> Option<(usize, String)> {
        let indices = phrase_indices(tokens, start);
        if indices.len() < 2 {
            return None;
        }

        let first = punctuation::split(&tokens[start].text, &self.store);
        if !names::looks_like_name(&first.core) || first.suffix.is_some() {
            return None;
        }

        for len in (2..=indices.len()).rev() {
            let last_index = indices[len - 1];
            let last = punctuation::split(&tokens[last_index].text, &self.store);
            if !last.leading.is_empty() || !first.trailing.is_empty() {
                continue;
            }
            // Whatever `'s` classified as on its own, after a whole name it is possessive.
            let possessive = match &last.suffix {
                None => "",
                Some(suffix) if suffix.key() == "'s" => POSSESSIVE_S,
                Some(suffix) if suffix.kind == SuffixKind::Possessive => POSSESSIVE_BARE,
                Some(_) => continue,
            };
            let middle_clean = indices[1..len - 1]
                .iter()
                .all(|&j| tokens[j].text.chars().all(char::is_alphabetic));
            if !middle_clean {
                continue;
            }

            let mut words: Vec<&str> = vec![first.core.as_str()];
            words.extend(indices[1..len - 1].iter().map(|&j| tokens[j].text.as_str()));
            words.push(last.core.as_str());
            let phrase = words.join(" ").to_lowercase();

            let Some(entry) = self.store.name(&phrase) else {
                continue;
            };
            let rendered = names::render_name(entry, ctx, self.options.mark_proper_names);
            tracing::trace!(%phrase, "resolved multi-word name");

            ctx.record_word(&last.core, tokens[last_index].pos.as_deref(), true);
            ctx.note_marks(&last.trailing);
            let consumed = last_index - start + 1;
            return Some((consumed, format!("{}{}{}{}", first.leading, rendered, possessive, last.trailing)));
        }
        None
    }

    // --- Reverse ---

    pub fn reverse_transliterate(&self, text: &str) -> String {
        let resolver = ReverseResolver::new(&self.reverse);
        let mut ctx = ReverseContext::new();
        let tokens = tokenizer::segment_bracketed(text);
        let mut out = String::with_capacity(text.len());

        let mut i = 0;
        while i < tokens.len() {
            let token = &tokens[i];
            if token.kind == TokenKind::Whitespace {
                out.push_str(&token.text);
                i += 1;
                continue;
            }
            if let Some((consumed, rendered)) = reverse_multi_word_name(&resolver, &tokens, i, &mut ctx) {
                out.push_str(&rendered);
                i += consumed;
                continue;
            }
            out.push_str(&resolver.resolve_token(&token.text, &mut ctx));
            i += 1;
        }
        out
    }

    /// A single rendered word, without sentence-initial capitalization.
    pub fn reverse_transliterate_word(&self, word: &str) -> String {
        let resolver = ReverseResolver::new(&self.reverse);
        let mut ctx = ReverseContext { position: SentencePosition::Inside, ..ReverseContext::new() };
        resolver.resolve_token(word, &mut ctx)
    }
}

/// Indices of up to [`NAME_LOOKAHEAD`] word tokens from `start`, each
/// separated from the previous one by a single space.
fn phrase_indices(tokens: &[Token], start: usize) -> Vec<usize> {
    let mut indices = vec![start];
    while indices.len() < NAME_LOOKAHEAD {
        let last = indices[indices.len() - 1];
        match (tokens.get(last + 1), tokens.get(last + 2)) {
            (Some(space), Some(word)) if space.text == " " && word.is_word() => indices.push(last + 2),
            _ => break,
        }
    }
    indices
}

fn reverse_multi_word_name(
    resolver: &ReverseResolver<'_>,
    tokens: &[Token],
    start: usize,
    ctx: &mut ReverseContext,
) -> Option<(usize, String)> {
    if !tokens[start].text.contains(NAME_MARKER) {
        return None;
    }
    let indices = phrase_indices(tokens, start);
    for len in (2..=indices.len()).rev() {
        let last_index = indices[len - 1];
        let raw: String = tokens[start..=last_index].iter().map(|t| t.text.as_str()).collect();
        if let Some(rendered) = resolver.resolve_name_phrase(&raw, ctx) {
            return Some((last_index - start + 1, rendered));
        }
    }
    None
}
