// File: src/core/reverse.rs
//! Glyphs back to source spelling. Lossy by nature: many spellings share a
//! rendering, and the index only knows one of them.

use crate::core::context::{ReverseContext, SentencePosition};
use crate::core::reverse_index::ReverseIndex;
use crate::core::types::{
    is_compound_separator, ESCAPE_CLOSE, ESCAPE_OPEN, NAME_MARKER, POSSESSIVE_S, QUOTE_CLOSE, QUOTE_OPEN,
};
use crate::core::{names, punctuation, tables};

const SOURCE_POSSESSIVE: &str = "'s";

fn is_marker_glyph(c: char) -> bool {
    c == NAME_MARKER || c == QUOTE_OPEN || c == QUOTE_CLOSE
}

struct GlyphSplit<'a> {
    leading: &'a str,
    body: &'a str,
    trailing: &'a str,
}

/// Peels surrounding punctuation off a rendered token, keeping marker and
/// quotation glyphs with the word they belong to.
fn split_marks(raw: &str) -> GlyphSplit<'_> {
    let keeps = |c: char| c.is_alphabetic() || is_marker_glyph(c);
    let (Some(start), Some(last)) = (raw.find(keeps), raw.rfind(keeps)) else {
        return GlyphSplit { leading: raw, body: "", trailing: "" };
    };
    let end = last + raw[last..].chars().next().map_or(1, char::len_utf8);
    GlyphSplit { leading: &raw[..start], body: &raw[start..end], trailing: &raw[end..] }
}

fn unescape(raw: &str) -> Option<&str> {
    raw.strip_prefix(ESCAPE_OPEN)?.strip_suffix(ESCAPE_CLOSE)
}

pub struct ReverseResolver<'a> {
    index: &'a ReverseIndex,
}

impl<'a> ReverseResolver<'a> {
    pub fn new(index: &'a ReverseIndex) -> Self {
        Self { index }
    }

    /// Resolves one rendered token, punctuation included, and updates `ctx`.
    pub fn resolve_token(&self, raw: &str, ctx: &mut ReverseContext) -> String {
        if let Some(original) = unescape(raw) {
            let split = split_marks(original);
            if !split.body.is_empty() {
                ctx.record_word(split.body, false);
            }
            ctx.note_marks(split.trailing);
            return original.to_string();
        }

        let split = split_marks(raw);
        if !split.body.chars().any(char::is_alphabetic) {
            ctx.note_marks(raw);
            return raw.to_string();
        }

        let word = self.resolve_body(split.body, split.trailing, ctx);
        ctx.note_marks(split.trailing);
        format!("{}{}{}", split.leading, word, split.trailing)
    }

    /// Resolves a marked multi-word name spread over several tokens, such as
    /// `·𐑤𐑶𐑛 𐑡𐑹𐑡`. `None` when the joined form is not a known name.
    pub fn resolve_name_phrase(&self, raw: &str, ctx: &mut ReverseContext) -> Option<String> {
        let split = split_marks(raw);
        let core = split.body.strip_prefix(NAME_MARKER)?;
        let (core, possessive) = match core.strip_suffix(POSSESSIVE_S) {
            Some(base) => (base, SOURCE_POSSESSIVE),
            None => (core, ""),
        };
        let entry = self.index.lookup(core).filter(|entry| entry.name)?;
        let word = names::capitalize_name(&entry.word);
        ctx.record_word(&word, true);
        ctx.note_marks(split.trailing);
        Some(format!("{}{}{}{}", split.leading, word, possessive, split.trailing))
    }

    fn resolve_body(&self, body: &str, trailing: &str, ctx: &mut ReverseContext) -> String {
        if body.contains(is_compound_separator) {
            return self.resolve_compound(body, ctx);
        }

        let (body, possessive) = match body.strip_suffix(POSSESSIVE_S) {
            Some(base) if base.chars().any(char::is_alphabetic) => (base, true),
            _ => (body, false),
        };
        let (word, proper_name) = self.resolve_word(body, trailing, ctx);
        ctx.record_word(&word, proper_name);

        if possessive {
            format!("{word}{SOURCE_POSSESSIVE}")
        } else {
            word
        }
    }

    fn resolve_compound(&self, body: &str, ctx: &mut ReverseContext) -> String {
        let mut out = String::with_capacity(body.len());
        let mut part_start = 0;
        let separators = body
            .char_indices()
            .filter(|&(_, c)| is_compound_separator(c))
            .map(|(i, c)| (i, Some(c)))
            .chain(std::iter::once((body.len(), None)));

        for (end, separator) in separators {
            let part = &body[part_start..end];
            if !part.is_empty() {
                out.push_str(&self.resolve_token(part, ctx));
            }
            if let Some(c) = separator {
                out.push(c);
                if c != '-' {
                    ctx.note_marks(&body[end..end + c.len_utf8()]);
                }
                part_start = end + c.len_utf8();
            }
        }
        out
    }

    /// Returns the spelling and whether it was taken as a proper name.
    fn resolve_word(&self, body: &str, trailing: &str, ctx: &ReverseContext) -> (String, bool) {
        let marked = body.starts_with(NAME_MARKER);
        let core = body.trim_start_matches(NAME_MARKER);
        let quoted = core.starts_with(QUOTE_OPEN) && core.ends_with(QUOTE_CLOSE);
        let core = core.trim_start_matches(QUOTE_OPEN).trim_end_matches(QUOTE_CLOSE);

        if marked && trailing.starts_with('.') {
            if let Some(letter) = tables::letter_for_name(core) {
                return (letter.to_string(), true);
            }
        }

        let entry = self.index.lookup(core).or_else(|| {
            let bare: String = core.chars().filter(|&c| !is_marker_glyph(c)).collect();
            if bare == core {
                None
            } else {
                self.index.lookup(&bare)
            }
        });

        let Some(entry) = entry else {
            if core.contains(' ') {
                return self.resolve_phrase(core, marked || quoted);
            }
            if let Some((base, contracted)) = self.resolve_contraction(core) {
                return (sentence_case(&contracted, &base, ctx), false);
            }
            tracing::trace!(form = core, "no reverse entry");
            return (body.to_string(), false);
        };

        let named = marked || quoted || entry.quoted_name || (entry.name && ctx.previous_was_proper_name);
        let word = if named {
            names::capitalize_name(&entry.word)
        } else {
            sentence_case(&entry.word, &entry.word, ctx)
        };
        (word, named)
    }

    /// `𐑛𐑵𐑯𐑑` back to `don't`. Only function words are taken to contract, so
    /// a plural such as `𐑒𐑨𐑑𐑟` is not read as `cat's`. Returns the base word
    /// and the contracted spelling.
    fn resolve_contraction(&self, core: &str) -> Option<(String, String)> {
        if let Some(word) = tables::contraction_for_form(core) {
            return Some((word.to_string(), word.to_string()));
        }
        punctuation::CONTRACTION_SUFFIXES.iter().find_map(|&(suffix, glyphs)| {
            let base = core.strip_suffix(glyphs).filter(|base| !base.is_empty())?;
            let entry = self.index.lookup(base).filter(|entry| punctuation::never_possessive(&entry.word))?;
            Some((entry.word.clone(), format!("{}{suffix}", entry.word)))
        })
    }

    /// A bracketed multi-word title the index does not know as a whole.
    fn resolve_phrase(&self, core: &str, named: bool) -> (String, bool) {
        let words: Vec<String> = core
            .split(' ')
            .map(|part| match self.index.lookup(part) {
                Some(entry) if named => names::capitalize_name(&entry.word),
                Some(entry) => entry.word.clone(),
                None => part.to_string(),
            })
            .collect();
        (words.join(" "), named)
    }
}

/// Capitalizes an unnamed word for its place in the sentence. `base` is the
/// dictionary word underneath, which differs from `word` for contractions.
fn sentence_case(word: &str, base: &str, ctx: &ReverseContext) -> String {
    if base == "i" {
        return names::capitalize_first(word);
    }
    match ctx.position {
        SentencePosition::Start => names::capitalize_first(word),
        SentencePosition::AfterAbbreviation if !tables::is_closed_class(base) => names::capitalize_first(word),
        _ => word.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dictionary::DictionaryStore;
    use crate::core::tokenizer;
    use crate::core::types::{DictionaryEntry, TokenKind};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn index() -> ReverseIndex {
        let store = DictionaryStore::from_entries(vec![
            DictionaryEntry::new("cat", None, "𐑒𐑨𐑑", 40),
            DictionaryEntry::new("year", None, "𐑘𐑽", 100),
            DictionaryEntry::new("day", None, "𐑛𐑱", 100),
            DictionaryEntry::new("there", None, "𐑞𐑺", 500),
            DictionaryEntry::new("go", Some("VB"), "𐑜𐑴", 300),
        ]);
        ReverseIndex::build(&store)
    }

    fn run(text: &str) -> String {
        let index = index();
        let resolver = ReverseResolver::new(&index);
        let mut ctx = ReverseContext::new();
        tokenizer::segment_bracketed(text)
            .into_iter()
            .map(|token| match token.kind {
                TokenKind::Whitespace => token.text,
                _ => resolver.resolve_token(&token.text, &mut ctx),
            })
            .collect()
    }

    #[rstest]
    #[case("𐑞 𐑒𐑨𐑑.", "The cat.")]
    #[case("𐑒𐑨𐑑. 𐑞𐑺!", "Cat. There!")]
    #[case("𐑞 𐑲 𐑒𐑨𐑑", "The I cat")]
    #[case("𐑘𐑽-𐑯-𐑩-𐑛𐑱", "Year-and-a-day")]
    #[case("𐑒𐑨𐑑—𐑛𐑱…", "Cat—day…")]
    fn resolves_sentences(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(run(input), expected);
    }

    #[test]
    fn marked_names_are_capitalized_once_per_chain() {
        assert_eq!(run("𐑞 ·𐑚𐑻𐑯𐑸𐑛 𐑖𐑷 𐑒𐑨𐑑"), "The Bernard Shaw cat");
        assert_eq!(run("𐑞 𐑖𐑷"), "The shaw");
    }

    #[test]
    fn bracketed_titles() {
        assert_eq!(run("𐑞 ·«𐑛𐑪𐑒𐑑𐑼 𐑣𐑵», 𐑒𐑨𐑑"), "The Doctor Who, cat");
        assert_eq!(run("𐑞 ·«𐑒𐑨𐑑 𐑛𐑱»"), "The Cat Day");
    }

    #[test]
    fn possessives_restore_apostrophe_s() {
        assert_eq!(run("𐑞 ·𐑖𐑷'𐑟 𐑒𐑨𐑑"), "The Shaw's cat");
    }

    #[test]
    fn initials_become_letters() {
        assert_eq!(run("·𐑡𐑱. 𐑞 𐑒𐑨𐑑"), "J. the cat");
        assert_eq!(run("·𐑡𐑱. 𐑒𐑨𐑑"), "J. Cat");
    }

    #[test]
    fn escapes_restore_originals_verbatim() {
        assert_eq!(run("𐑞 ⟦Zork's⟧ 𐑒𐑨𐑑"), "The Zork's cat");
        assert_eq!(run("𐑞 ⟦Zork's!⟧ 𐑒𐑨𐑑"), "The Zork's! Cat");
    }

    #[test]
    fn unknown_forms_pass_through() {
        assert_eq!(run("𐑞 𐑐𐑤𐑳𐑜𐑟 ·𐑐𐑤𐑳𐑜"), "The 𐑐𐑤𐑳𐑜𐑟 ·𐑐𐑤𐑳𐑜");
        assert_eq!(run("42 — ?"), "42 — ?");
    }

    #[rstest]
    #[case("𐑛𐑵𐑯𐑑 𐑜𐑴!", "Don't go!")]
    #[case("𐑦𐑑𐑟 𐑞 𐑒𐑨𐑑.", "It's the cat.")]
    #[case("𐑞 𐑒𐑨𐑑 𐑢𐑴𐑯𐑑 𐑜𐑴.", "The cat won't go.")]
    #[case("𐑞𐑺 𐑲𐑥", "There I'm")]
    #[case("𐑞 𐑒𐑨𐑑𐑟", "The 𐑒𐑨𐑑𐑟")]
    fn contractions_split_off_known_suffixes(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(run(input), expected);
    }

    #[test]
    fn stray_marker_glyphs_are_retried_without() {
        assert_eq!(run("𐑞 𐑒𐑨·𐑑"), "The cat");
    }
}
