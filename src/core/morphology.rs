// File: src/core/morphology.rs
//! Base-form guesses for inflected words the dictionary does not carry.

use crate::core::dictionary::DictionaryStore;
use crate::core::tables;

/// Tags tried, in order, when looking up a singular. The plural's own tag is
/// not trusted to have been a noun.
const SINGULAR_TAGS: [&str; 4] = ["NN", "NNP", "JJ", "VB"];
const BASE_VERB_TAG: &str = "VB";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralPattern {
    /// `cats`, `horses`
    Regular,
    /// `boxes`, `churches`
    Sibilant,
    /// `cities`
    Ies,
    /// `knives`
    Ves,
}

/// How to rebuild the inflected rendering from the base rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconstruction {
    RegularPast,
    /// The whole past form is rendered directly.
    IrregularPast(&'static str),
    Plural(PluralPattern),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseProposal {
    pub base: String,
    pub rule: Reconstruction,
}

impl BaseProposal {
    fn new(base: impl Into<String>, rule: Reconstruction) -> Self {
        Self { base: base.into(), rule }
    }
}

/// Every base form worth trying for `word`, verb-tense guesses before plural ones.
pub fn propose_bases(word: &str) -> Vec<BaseProposal> {
    let word = word.to_lowercase();
    let mut proposals = past_tense_bases(&word);
    proposals.extend(plural_bases(&word));
    proposals
}

/// The first guess, without checking it against any dictionary.
pub fn propose_base(word: &str) -> Option<BaseProposal> {
    propose_bases(word).into_iter().next()
}

fn past_tense_bases(word: &str) -> Vec<BaseProposal> {
    if let Some((base, form)) = tables::irregular_past(word) {
        return vec![BaseProposal::new(base, Reconstruction::IrregularPast(form))];
    }
    let Some(stem) = word.strip_suffix("ed").filter(|s| s.chars().count() >= 2) else {
        return Vec::new();
    };

    let mut bases = Vec::new();
    if let Some(y_stem) = word.strip_suffix("ied").filter(|s| !s.is_empty()) {
        bases.push(format!("{y_stem}y"));
    }
    // `hated` is `hate` far more often than `hat`.
    if ends_consonant_vowel_consonant(stem) {
        bases.push(format!("{stem}e"));
        bases.push(stem.to_string());
    } else {
        bases.push(stem.to_string());
        bases.push(format!("{stem}e"));
    }
    let mut tail = stem.chars().rev();
    if let (Some(last), Some(prev)) = (tail.next(), tail.next()) {
        if last == prev && !is_vowel(last) {
            bases.push(stem[..stem.len() - last.len_utf8()].to_string());
        }
    }

    bases
        .into_iter()
        .map(|base| BaseProposal::new(base, Reconstruction::RegularPast))
        .collect()
}

fn plural_bases(word: &str) -> Vec<BaseProposal> {
    if let Some(singular) = tables::irregular_plural(word) {
        return vec![BaseProposal::new(singular, Reconstruction::Plural(orthographic_pattern(word)))];
    }
    if !word.ends_with('s') || word.chars().count() < 3 {
        return Vec::new();
    }
    if ["ss", "us", "is", "ous"].iter().any(|end| word.ends_with(end)) {
        return Vec::new();
    }

    let mut proposals = Vec::new();

    if let Some(stem) = word.strip_suffix("ies").filter(|s| s.len() > 1) {
        proposals.push(BaseProposal::new(format!("{stem}y"), Reconstruction::Plural(PluralPattern::Ies)));
    }
    if let Some(stem) = word.strip_suffix("ves").filter(|s| !s.is_empty()) {
        let rule = Reconstruction::Plural(PluralPattern::Ves);
        proposals.push(BaseProposal::new(format!("{stem}f"), rule));
        proposals.push(BaseProposal::new(format!("{stem}fe"), rule));
    }
    if orthographic_pattern(word) == PluralPattern::Sibilant {
        if let Some(stem) = word.strip_suffix("es") {
            proposals.push(BaseProposal::new(stem, Reconstruction::Plural(PluralPattern::Sibilant)));
        }
    }
    if let Some(stem) = word.strip_suffix('s') {
        proposals.push(BaseProposal::new(stem, Reconstruction::Plural(PluralPattern::Regular)));
    }
    proposals
}

fn orthographic_pattern(plural: &str) -> PluralPattern {
    if plural.ends_with("ves") {
        PluralPattern::Ves
    } else if plural.ends_with("ies") {
        PluralPattern::Ies
    } else if ["ses", "xes", "zes", "ches", "shes"].iter().any(|end| plural.ends_with(end)) {
        PluralPattern::Sibilant
    } else {
        PluralPattern::Regular
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// A single vowel between a final consonant and a consonant or the word start.
fn ends_consonant_vowel_consonant(stem: &str) -> bool {
    let mut tail = stem.chars().rev();
    match (tail.next(), tail.next(), tail.next()) {
        (Some(last), Some(vowel), before) => {
            !is_vowel(last) && !matches!(last, 'w' | 'x' | 'y') && is_vowel(vowel) && !before.is_some_and(is_vowel)
        }
        _ => false,
    }
}

/// Resolves `word` through an override, or through a base form the
/// dictionary knows. Every guess is first tried against the tag it should
/// carry (a verb for past tenses), and only then against the basic tier, so
/// `hated` finds the verb `hate` before the noun `hat`. `None` means every
/// guess failed.
pub fn decompose(word: &str, store: &DictionaryStore) -> Option<String> {
    let lower = word.to_lowercase();
    if let Some(form) = tables::morphology_override(&lower) {
        return Some(form.to_string());
    }

    let proposals = propose_bases(&lower);
    proposals
        .iter()
        .find_map(|proposal| lookup_tagged_base(proposal, store).map(|form| (proposal, form)))
        .or_else(|| {
            proposals
                .iter()
                .find_map(|proposal| store.lookup_basic(&proposal.base).map(|form| (proposal, &form.text)))
        })
        .map(|(proposal, base_form)| reconstruct(proposal, base_form))
}

fn lookup_tagged_base<'a>(proposal: &BaseProposal, store: &'a DictionaryStore) -> Option<&'a String> {
    let form = match proposal.rule {
        Reconstruction::RegularPast | Reconstruction::IrregularPast(_) => {
            store.lookup_tagged(&proposal.base, BASE_VERB_TAG)
        }
        Reconstruction::Plural(_) => SINGULAR_TAGS
            .iter()
            .find_map(|tag| store.lookup_tagged(&proposal.base, tag)),
    };
    form.map(|f| &f.text)
}

fn reconstruct(proposal: &BaseProposal, base_form: &str) -> String {
    match proposal.rule {
        Reconstruction::IrregularPast(form) => form.to_string(),
        Reconstruction::RegularPast => format!("{base_form}{}", past_ending(base_form)),
        Reconstruction::Plural(pattern) => plural_form(pattern, &proposal.base, base_form),
    }
}

fn past_ending(base_form: &str) -> &'static str {
    match base_form.chars().last() {
        Some('𐑑' | '𐑛') => "𐑦𐑛",
        Some('𐑐' | '𐑒' | '𐑓' | '𐑔' | '𐑕' | '𐑖' | '𐑗') => "𐑑",
        _ => "𐑛",
    }
}

fn plural_form(pattern: PluralPattern, singular: &str, base_form: &str) -> String {
    match pattern {
        PluralPattern::Sibilant => format!("{base_form}𐑩𐑟"),
        PluralPattern::Ies => {
            let stem = base_form.strip_suffix(['𐑦', '𐑰']);
            match stem {
                Some(stem) => format!("{stem}𐑦𐑟"),
                None => format!("{base_form}𐑟"),
            }
        }
        PluralPattern::Ves => {
            let stem = base_form.strip_suffix('𐑓').unwrap_or(base_form);
            format!("{stem}𐑝𐑟")
        }
        PluralPattern::Regular => {
            if ["ce", "se", "ge", "ze"].iter().any(|end| singular.ends_with(end)) {
                format!("{base_form}𐑩𐑟")
            } else if base_form.ends_with(['𐑐', '𐑑', '𐑒', '𐑓', '𐑔']) {
                format!("{base_form}𐑕")
            } else {
                format!("{base_form}𐑟")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::DictionaryEntry;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn store() -> DictionaryStore {
        DictionaryStore::from_entries(vec![
            DictionaryEntry::new("walk", Some("VB"), "𐑢𐑷𐑒", 10),
            DictionaryEntry::new("love", Some("VB"), "𐑤𐑳𐑝", 10),
            DictionaryEntry::new("stop", Some("VB"), "𐑕𐑑𐑪𐑐", 10),
            DictionaryEntry::new("want", Some("VB"), "𐑢𐑪𐑯𐑑", 10),
            DictionaryEntry::new("carry", Some("VB"), "𐑒𐑨𐑮𐑦", 10),
            DictionaryEntry::new("call", Some("VB"), "𐑒𐑷𐑤", 10),
            DictionaryEntry::new("play", Some("VB"), "𐑐𐑤𐑱", 10),
            DictionaryEntry::new("go", Some("VB"), "𐑜𐑴", 10),
            DictionaryEntry::new("cat", Some("NN"), "𐑒𐑨𐑑", 10),
            DictionaryEntry::new("dog", Some("NN"), "𐑛𐑪𐑜", 10),
            DictionaryEntry::new("box", Some("NN"), "𐑚𐑪𐑒𐑕", 10),
            DictionaryEntry::new("church", Some("NN"), "𐑗𐑻𐑗", 10),
            DictionaryEntry::new("city", Some("NN"), "𐑕𐑦𐑑𐑦", 10),
            DictionaryEntry::new("fly", Some("NN"), "𐑓𐑤𐑲", 10),
            DictionaryEntry::new("knife", Some("NN"), "𐑯𐑲𐑓", 10),
            DictionaryEntry::new("leaf", Some("NN"), "𐑤𐑰𐑓", 10),
            DictionaryEntry::new("glove", Some("NN"), "𐑜𐑤𐑳𐑝", 10),
            DictionaryEntry::new("horse", Some("NN"), "𐑣𐑹𐑕", 10),
            DictionaryEntry::new("hero", Some("NN"), "𐑣𐑽𐑮𐑴", 10),
            DictionaryEntry::new("green", Some("JJ"), "𐑜𐑮𐑰𐑯", 10),
        ])
    }

    #[rstest]
    #[case("walked", "𐑢𐑷𐑒𐑑")]
    #[case("loved", "𐑤𐑳𐑝𐑛")]
    #[case("stopped", "𐑕𐑑𐑪𐑐𐑑")]
    #[case("wanted", "𐑢𐑪𐑯𐑑𐑦𐑛")]
    #[case("carried", "𐑒𐑨𐑮𐑦𐑛")]
    #[case("called", "𐑒𐑷𐑤𐑛")]
    #[case("played", "𐑐𐑤𐑱𐑛")]
    #[case("went", "𐑢𐑧𐑯𐑑")]
    fn past_tenses(#[case] word: &str, #[case] expected: &str) {
        assert_eq!(decompose(word, &store()).as_deref(), Some(expected));
    }

    #[rstest]
    #[case("cats", "𐑒𐑨𐑑𐑕")]
    #[case("dogs", "𐑛𐑪𐑜𐑟")]
    #[case("boxes", "𐑚𐑪𐑒𐑕𐑩𐑟")]
    #[case("churches", "𐑗𐑻𐑗𐑩𐑟")]
    #[case("cities", "𐑕𐑦𐑑𐑦𐑟")]
    #[case("flies", "𐑓𐑤𐑲𐑟")]
    #[case("knives", "𐑯𐑲𐑝𐑟")]
    #[case("leaves", "𐑤𐑰𐑝𐑟")]
    #[case("gloves", "𐑜𐑤𐑳𐑝𐑟")]
    #[case("horses", "𐑣𐑹𐑕𐑩𐑟")]
    #[case("heroes", "𐑣𐑽𐑮𐑴𐑟")]
    #[case("greens", "𐑜𐑮𐑰𐑯𐑟")]
    fn plurals(#[case] word: &str, #[case] expected: &str) {
        assert_eq!(decompose(word, &store()).as_deref(), Some(expected));
    }

    #[test]
    fn overrides_beat_decomposition() {
        assert_eq!(decompose("children", &store()).as_deref(), Some("𐑗𐑦𐑤𐑛𐑮𐑩𐑯"));
        assert_eq!(decompose("People", &store()).as_deref(), Some("𐑐𐑰𐑐𐑩𐑤"));
    }

    #[rstest]
    #[case("glass")]
    #[case("bonus")]
    #[case("thesis")]
    #[case("famous")]
    #[case("zorbed")]
    #[case("frobs")]
    #[case("saw")]
    fn unresolved_bases_give_none(#[case] word: &str) {
        assert_eq!(decompose(word, &store()), None);
    }

    fn store_with_stem_nouns() -> DictionaryStore {
        DictionaryStore::from_entries(vec![
            DictionaryEntry::new("hat", Some("NN"), "𐑣𐑨𐑑", 50),
            DictionaryEntry::new("hate", Some("VB"), "𐑣𐑱𐑑", 20),
            DictionaryEntry::new("car", Some("NN"), "𐑒𐑸", 50),
            DictionaryEntry::new("care", Some("VB"), "𐑒𐑺", 20),
            DictionaryEntry::new("hop", Some("VB"), "𐑣𐑪𐑐", 20),
            DictionaryEntry::new("hope", Some("VB"), "𐑣𐑴𐑐", 20),
            DictionaryEntry::new("visit", Some("VB"), "𐑝𐑦𐑟𐑦𐑑", 20),
            DictionaryEntry::new("rat", Some("NN"), "𐑮𐑨𐑑", 20),
        ])
    }

    #[rstest]
    #[case("hated", "𐑣𐑱𐑑𐑦𐑛")]
    #[case("cared", "𐑒𐑺𐑛")]
    #[case("hoped", "𐑣𐑴𐑐𐑑")]
    #[case("hopped", "𐑣𐑪𐑐𐑑")]
    #[case("visited", "𐑝𐑦𐑟𐑦𐑑𐑦𐑛")]
    #[case("ratted", "𐑮𐑨𐑑𐑦𐑛")]
    fn verb_stems_beat_noun_stems(#[case] word: &str, #[case] expected: &str) {
        assert_eq!(decompose(word, &store_with_stem_nouns()).as_deref(), Some(expected));
    }

    #[test]
    fn proposals_list_verb_guesses_first() {
        let proposal = propose_base("hated").unwrap();
        assert_eq!(proposal.base, "hate");
        assert_eq!(proposal.rule, Reconstruction::RegularPast);

        let proposal = propose_base("wolves").unwrap();
        assert_eq!(proposal.base, "wolf");
        assert_eq!(proposal.rule, Reconstruction::Plural(PluralPattern::Ves));

        assert_eq!(propose_base("cat"), None);
    }
}
