// File: src/core/cascade.rs
use crate::config::EngineOptions;
use crate::core::context::TransliterationContext;
use crate::core::dictionary::DictionaryStore;
use crate::core::types::{
    is_compound_separator, ApostropheSuffix, PunctuationSplit, Resolution, SuffixKind, NAME_MARKER,
    POSSESSIVE_BARE, POSSESSIVE_S,
};
use crate::core::{morphology, names, punctuation, tables};

/// One way of producing a rendering for a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    CompoundSplit,
    Initial,
    CuratedName,
    ClosedClass,
    ContextualReduction,
    Dictionary,
    ApostropheSuffix,
    Morphology,
}

/// Evaluation order. The first policy that produces a rendering wins; when
/// none does, the word comes back unchanged.
pub const POLICIES: [Policy; 8] = [
    Policy::CompoundSplit,
    Policy::Initial,
    Policy::CuratedName,
    Policy::ClosedClass,
    Policy::ContextualReduction,
    Policy::Dictionary,
    Policy::ApostropheSuffix,
    Policy::Morphology,
];

const BASE_VERB_TAG: &str = "VB";

struct WordInput<'a> {
    /// As written, apostrophe suffix included.
    word: String,
    lower: String,
    /// The word without its apostrophe suffix.
    core: &'a str,
    suffix: Option<&'a ApostropheSuffix>,
    trailing: &'a str,
    pos: Option<String>,
}

/// A token after resolution, with its punctuation reattached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenOutcome {
    pub text: String,
    /// `None` when the token held no word at all.
    pub resolution: Option<Resolution>,
}

/// The forward resolver. Borrows the engine's read-only data; all rolling
/// state arrives through the context argument.
pub struct Resolver<'a> {
    store: &'a DictionaryStore,
    options: &'a EngineOptions,
}

impl<'a> Resolver<'a> {
    pub fn new(store: &'a DictionaryStore, options: &'a EngineOptions) -> Self {
        Self { store, options }
    }

    /// Resolves one raw token, punctuation included, and updates `ctx`.
    pub fn resolve_token(&self, raw: &str, pos: Option<&str>, ctx: &mut TransliterationContext) -> TokenOutcome {
        let split = punctuation::split(raw, self.store);
        if !split.is_word() {
            ctx.note_marks(raw);
            return TokenOutcome { text: raw.to_string(), resolution: None };
        }

        let resolution = self.resolve_split(&split, pos, ctx);
        ctx.note_marks(&split.trailing);
        TokenOutcome {
            text: format!("{}{}{}", split.leading, resolution.text(), split.trailing),
            resolution: Some(resolution),
        }
    }

    pub fn resolve_split(
        &self,
        split: &PunctuationSplit,
        pos: Option<&str>,
        ctx: &mut TransliterationContext,
    ) -> Resolution {
        let word = split.whole_word();
        let input = WordInput {
            lower: word.to_lowercase(),
            word,
            core: &split.core,
            suffix: split.suffix.as_ref(),
            trailing: &split.trailing,
            pos: self.effective_pos(pos, ctx),
        };

        let (resolution, policy) = self.cascade(&input, ctx);
        // Compound parts have already been recorded one by one.
        if policy != Some(Policy::CompoundSplit) {
            ctx.record_word(&input.word, pos, resolution.is_proper_name());
        }
        resolution
    }

    fn effective_pos(&self, pos: Option<&str>, ctx: &TransliterationContext) -> Option<String> {
        match pos {
            Some(pos) => Some(pos.to_string()),
            None if self.options.infer_verb_after_modal && ctx.expects_verb() => {
                Some(BASE_VERB_TAG.to_string())
            }
            None => None,
        }
    }

    fn cascade(&self, input: &WordInput<'_>, ctx: &mut TransliterationContext) -> (Resolution, Option<Policy>) {
        for policy in POLICIES {
            if let Some(resolution) = self.apply(policy, input, ctx) {
                tracing::trace!(word = %input.word, ?policy, "resolved");
                return (resolution, Some(policy));
            }
        }
        tracing::trace!(word = %input.word, "unresolved");
        (Resolution::Unresolved(input.word.clone()), None)
    }

    fn apply(&self, policy: Policy, input: &WordInput<'_>, ctx: &mut TransliterationContext) -> Option<Resolution> {
        let marking = self.options.mark_proper_names;
        match policy {
            Policy::CompoundSplit => self.split_compound(input, ctx),
            Policy::Initial => {
                if input.suffix.is_some() || !names::is_initial(input.core, input.trailing) {
                    return None;
                }
                let letter = input.core.chars().next()?;
                let form = tables::letter_name(letter)?;
                let text = if marking { format!("{NAME_MARKER}{form}") } else { form.to_string() };
                Some(Resolution::name(text))
            }
            Policy::CuratedName => {
                if !names::takes_curated_name(&input.word, ctx, self.store) {
                    return None;
                }
                let entry = self.store.name(&input.lower)?;
                Some(Resolution::name(names::render_name(entry, ctx, marking)))
            }
            Policy::ClosedClass => tables::closed_class(&input.lower).map(Resolution::resolved),
            Policy::ContextualReduction => {
                if input.lower != "to" {
                    return None;
                }
                ctx.previous_word_clean
                    .as_deref()
                    .and_then(tables::reduced_to)
                    .map(Resolution::resolved)
            }
            Policy::Dictionary => {
                let form = self.store.lookup(&input.lower, input.pos.as_deref())?;
                if form.marked && names::looks_like_name(&input.word) {
                    Some(Resolution::name(names::mark(&form.text, ctx, marking)))
                } else {
                    Some(Resolution::resolved(form.text.clone()))
                }
            }
            Policy::ApostropheSuffix => self.resolve_apostrophe(input, ctx),
            Policy::Morphology => morphology::decompose(&input.lower, self.store).map(Resolution::resolved),
        }
    }

    /// Resolves each separator-delimited part as a token of its own and
    /// rejoins them with the original separators.
    fn split_compound(&self, input: &WordInput<'_>, ctx: &mut TransliterationContext) -> Option<Resolution> {
        if !input.word.contains(is_compound_separator) {
            return None;
        }

        let mut out = String::with_capacity(input.word.len() * 4);
        let mut any_resolved = false;
        let mut leads_with_name = None;
        let mut part_start = 0;
        let word = input.word.as_str();
        let separators = word
            .char_indices()
            .filter(|&(_, c)| is_compound_separator(c))
            .map(|(i, c)| (i, Some(c)))
            .chain(std::iter::once((word.len(), None)));

        for (end, separator) in separators {
            let part = &word[part_start..end];
            if !part.is_empty() {
                let outcome = self.resolve_token(part, None, ctx);
                if let Some(resolution) = &outcome.resolution {
                    any_resolved |= resolution.is_resolved();
                    leads_with_name.get_or_insert(resolution.is_proper_name());
                }
                out.push_str(&outcome.text);
            }
            if let Some(c) = separator {
                out.push(c);
                if c != '-' {
                    ctx.note_marks(&word[end..end + c.len_utf8()]);
                }
                part_start = end + c.len_utf8();
            }
        }

        if !any_resolved {
            return Some(Resolution::Unresolved(input.word.clone()));
        }
        Some(Resolution::Resolved { text: out, proper_name: leads_with_name.unwrap_or(false) })
    }

    fn resolve_apostrophe(&self, input: &WordInput<'_>, ctx: &mut TransliterationContext) -> Option<Resolution> {
        let suffix = input.suffix?;
        if suffix.kind == SuffixKind::Contraction {
            let folded = input.lower.replace('\u{2019}', "'");
            if let Some(form) = tables::contraction_override(&folded) {
                return Some(Resolution::resolved(form));
            }
        }

        let base = WordInput {
            word: input.core.to_string(),
            lower: input.core.to_lowercase(),
            core: input.core,
            suffix: None,
            trailing: "",
            pos: input.pos.clone(),
        };
        let Resolution::Resolved { text, proper_name } = self.cascade(&base, ctx).0 else {
            return None;
        };

        let key = suffix.key();
        let ending = match suffix.kind {
            SuffixKind::Possessive if key == "'s" => POSSESSIVE_S,
            SuffixKind::Possessive => POSSESSIVE_BARE,
            SuffixKind::Contraction => punctuation::contraction_suffix(&key)?,
        };
        Some(Resolution::Resolved { text: format!("{text}{ending}"), proper_name })
    }
}
