// File: src/core/punctuation.rs
use crate::core::dictionary::DictionaryStore;
use crate::core::{morphology, tables};
use crate::core::types::{ApostropheSuffix, PunctuationSplit, SuffixKind};

pub fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == '\u{2019}'
}

/// Contraction suffixes and their renderings.
pub const CONTRACTION_SUFFIXES: &[(&str, &str)] = &[
    ("n't", "𐑯𐑑"),
    ("'re", "𐑼"),
    ("'ll", "𐑤"),
    ("'ve", "𐑝"),
    ("'d", "𐑛"),
    ("'m", "𐑥"),
    ("'s", "𐑟"),
];

/// Rendering of a contraction suffix, keyed by the literal suffix.
pub fn contraction_suffix(suffix: &str) -> Option<&'static str> {
    CONTRACTION_SUFFIXES.iter().find(|&&(s, _)| s == suffix).map(|&(_, form)| form)
}

/// Words that never take a possessive `'s`; on them it is always a contraction.
pub fn never_possessive(word: &str) -> bool {
    tables::is_closed_class(word) || matches!(word, "there" | "here" | "where" | "how" | "let" | "that")
}

/// Splits a raw token into leading marks, the word to resolve, and trailing
/// marks, peeling off a possessive or contraction suffix when one is present.
///
/// Hyphens are never peeled; compound splitting happens in the cascade.
pub fn split(raw: &str, store: &DictionaryStore) -> PunctuationSplit {
    if !raw.chars().any(char::is_alphabetic) {
        return PunctuationSplit::passthrough(raw);
    }

    let keeps = |c: char| c.is_alphabetic() || c == '-';
    let start = raw
        .char_indices()
        .find(|&(_, c)| keeps(c))
        .map(|(i, _)| i)
        .unwrap_or(0);
    let leading = &raw[..start];

    // Trailing marks stop at an apostrophe so a bare possessive can be seen.
    let mut end = raw.len();
    for (i, c) in raw[start..].char_indices().rev() {
        if keeps(c) || is_apostrophe(c) {
            break;
        }
        end = start + i;
    }
    let mut body = &raw[start..end];
    let mut trailing_start = end;

    if body.ends_with(is_apostrophe) {
        let apostrophe = body.chars().next_back().map(char::len_utf8).unwrap_or(1);
        let before = &body[..body.len() - apostrophe];
        let opened_with_quote = leading.chars().any(is_apostrophe);
        if !opened_with_quote
            && before.chars().last().is_some_and(|c| c.eq_ignore_ascii_case(&'s'))
            && before.chars().any(char::is_alphabetic)
            && takes_bare_possessive(before, store)
        {
            return PunctuationSplit {
                leading: leading.to_string(),
                core: before.to_string(),
                trailing: raw[end..].to_string(),
                suffix: Some(ApostropheSuffix {
                    kind: SuffixKind::Possessive,
                    text: body[before.len()..].to_string(),
                }),
            };
        }
        // A closing quote: push it, and any more trailing marks, out of the word.
        body = body.trim_end_matches(|c: char| !keeps(c));
        trailing_start = start + body.len();
    }
    let trailing = &raw[trailing_start..];

    let (core, suffix) = split_suffix(body, store);
    PunctuationSplit {
        leading: leading.to_string(),
        core: core.to_string(),
        trailing: trailing.to_string(),
        suffix,
    }
}

/// `students'` is possessive when `students` is a known word or the plural of one.
fn takes_bare_possessive(word: &str, store: &DictionaryStore) -> bool {
    let lower = word.to_lowercase();
    store.has_word(&lower) || store.name(&lower).is_some() || morphology::decompose(&lower, store).is_some()
}

fn split_suffix<'a>(body: &'a str, store: &DictionaryStore) -> (&'a str, Option<ApostropheSuffix>) {
    let Some(apostrophe) = body.rfind(is_apostrophe) else {
        return (body, None);
    };
    let before = &body[..apostrophe];
    let after_start = apostrophe + body[apostrophe..].chars().next().map(char::len_utf8).unwrap_or(1);
    let after = body[after_start..].to_lowercase();
    if before.is_empty() || !before.chars().any(char::is_alphabetic) {
        return (body, None);
    }

    let before_lower = before.to_lowercase();
    if after == "s"
        && !never_possessive(&before_lower)
        && (store.has_word(&before_lower) || store.name(&before_lower).is_some())
    {
        return (
            before,
            Some(ApostropheSuffix { kind: SuffixKind::Possessive, text: body[apostrophe..].to_string() }),
        );
    }

    if after == "t" && before_lower.ends_with('n') && before.len() > 1 {
        let core = &before[..before.len() - 1];
        return (
            core,
            Some(ApostropheSuffix { kind: SuffixKind::Contraction, text: body[core.len()..].to_string() }),
        );
    }

    let key = format!("'{after}");
    if contraction_suffix(&key).is_some() {
        return (
            before,
            Some(ApostropheSuffix { kind: SuffixKind::Contraction, text: body[apostrophe..].to_string() }),
        );
    }

    (body, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::DictionaryEntry;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn store() -> DictionaryStore {
        DictionaryStore::from_entries(vec![
            DictionaryEntry::new("it", None, "𐑦𐑑", 10),
            DictionaryEntry::new("dog", None, "𐑛𐑪𐑜", 10),
            DictionaryEntry::new("student", None, "𐑕𐑑𐑿𐑛𐑩𐑯𐑑", 10),
        ])
    }

    fn parts(raw: &str) -> (String, String, String, Option<(SuffixKind, String)>) {
        let result = split(raw, &store());
        (
            result.leading,
            result.core,
            result.trailing,
            result.suffix.map(|s| (s.kind, s.text)),
        )
    }

    #[rstest]
    #[case("\"Hello,\"", "\"", "Hello", ",\"")]
    #[case("(year-and-a-day).", "(", "year-and-a-day", ").")]
    #[case("wait—what?", "", "wait—what", "?")]
    #[case("'quoted'", "'", "quoted", "'")]
    #[case("o'clock", "", "o'clock", "")]
    fn strips_surrounding_marks(
        #[case] raw: &str,
        #[case] leading: &str,
        #[case] core: &str,
        #[case] trailing: &str,
    ) {
        let (l, c, t, suffix) = parts(raw);
        assert_eq!((l.as_str(), c.as_str(), t.as_str()), (leading, core, trailing));
        assert_eq!(suffix, None);
    }

    #[test]
    fn pure_punctuation_has_no_core() {
        let marks = split("...", &store());
        assert!(!marks.is_word());
        assert_eq!(marks.leading, "...");
        assert!(!split("1984", &store()).is_word());
    }

    #[test]
    fn names_take_possessive() {
        let (_, core, trailing, suffix) = parts("Shaw's,");
        assert_eq!(core, "Shaw");
        assert_eq!(trailing, ",");
        assert_eq!(suffix, Some((SuffixKind::Possessive, "'s".to_string())));
    }

    #[test]
    fn pronouns_take_contraction() {
        let (_, core, _, suffix) = parts("it's");
        assert_eq!(core, "it");
        assert_eq!(suffix, Some((SuffixKind::Contraction, "'s".to_string())));
    }

    #[test]
    fn unknown_base_with_s_is_contraction() {
        let (_, core, _, suffix) = parts("Zork's");
        assert_eq!(core, "Zork");
        assert_eq!(suffix, Some((SuffixKind::Contraction, "'s".to_string())));
    }

    #[rstest]
    #[case("don't", "do", "n't")]
    #[case("they're", "they", "'re")]
    #[case("we'll", "we", "'ll")]
    #[case("I’ve", "I", "’ve")]
    #[case("she'd", "she", "'d")]
    fn contractions(#[case] raw: &str, #[case] core: &str, #[case] suffix: &str) {
        let (_, c, _, s) = parts(raw);
        assert_eq!(c, core);
        assert_eq!(s, Some((SuffixKind::Contraction, suffix.to_string())));
    }

    #[test]
    fn plural_possessive_keeps_bare_apostrophe() {
        let (_, core, trailing, suffix) = parts("students'.");
        assert_eq!(core, "students");
        assert_eq!(trailing, ".");
        assert_eq!(suffix, Some((SuffixKind::Possessive, "'".to_string())));
    }

    #[test]
    fn trailing_apostrophe_on_unknown_word_is_a_closing_quote() {
        let (_, core, trailing, suffix) = parts("zorbs'");
        assert_eq!(core, "zorbs");
        assert_eq!(trailing, "'");
        assert_eq!(suffix, None);

        let (_, core, _, suffix) = parts("dogs'");
        assert_eq!(core, "dogs");
        assert_eq!(suffix, Some((SuffixKind::Possessive, "'".to_string())));
    }

    #[test]
    fn suffix_table_is_keyed_by_literal_suffix() {
        assert_eq!(contraction_suffix("n't"), Some("𐑯𐑑"));
        assert_eq!(contraction_suffix("'ll"), Some("𐑤"));
        assert_eq!(contraction_suffix("'x"), None);
    }
}
