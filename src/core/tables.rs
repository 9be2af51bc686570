// src/core/tables.rs
//! Curated tables consulted by the resolvers ahead of, or instead of, the
//! dictionary.

use crate::core::types::NameEntry;

/// Closed-class words whose rendering overrides any dictionary entry.
///
/// `to` is deliberately absent: its rendering depends on the preceding word
/// (see [`reduced_to`]) and it resolves through the dictionary otherwise.
pub const CLOSED_CLASS: &[(&str, &str)] = &[
    ("a", "𐑩"),
    ("an", "𐑩𐑯"),
    ("the", "𐑞"),
    ("and", "𐑯"),
    ("or", "𐑹"),
    ("but", "𐑚𐑳𐑑"),
    ("if", "𐑦𐑓"),
    ("of", "𐑝"),
    ("in", "𐑦𐑯"),
    ("on", "𐑪𐑯"),
    ("at", "𐑨𐑑"),
    ("by", "𐑚𐑲"),
    ("for", "𐑓"),
    ("from", "𐑓𐑮𐑪𐑥"),
    ("with", "𐑢𐑦𐑞"),
    ("into", "𐑦𐑯𐑑𐑵"),
    ("upon", "𐑩𐑐𐑪𐑯"),
    ("as", "𐑨𐑟"),
    ("than", "𐑞𐑨𐑯"),
    ("that", "𐑞𐑨𐑑"),
    ("this", "𐑞𐑦𐑕"),
    ("these", "𐑞𐑰𐑟"),
    ("those", "𐑞𐑴𐑟"),
    ("is", "𐑦𐑟"),
    ("are", "𐑸"),
    ("was", "𐑢𐑪𐑟"),
    ("were", "𐑢𐑻"),
    ("be", "𐑚𐑰"),
    ("been", "𐑚𐑰𐑯"),
    ("being", "𐑚𐑰𐑦𐑙"),
    ("am", "𐑨𐑥"),
    ("do", "𐑛𐑵"),
    ("does", "𐑛𐑳𐑟"),
    ("did", "𐑛𐑦𐑛"),
    ("has", "𐑣𐑨𐑟"),
    ("had", "𐑣𐑨𐑛"),
    ("have", "𐑣𐑨𐑝"),
    ("shall", "𐑖𐑨𐑤"),
    ("should", "𐑖𐑫𐑛"),
    ("will", "𐑢𐑦𐑤"),
    ("would", "𐑢𐑫𐑛"),
    ("can", "𐑒𐑨𐑯"),
    ("could", "𐑒𐑫𐑛"),
    ("may", "𐑥𐑱"),
    ("might", "𐑥𐑲𐑑"),
    ("must", "𐑥𐑳𐑕𐑑"),
    ("i", "𐑲"),
    ("me", "𐑥𐑰"),
    ("my", "𐑥𐑲"),
    ("we", "𐑢𐑰"),
    ("us", "𐑳𐑕"),
    ("our", "𐑬𐑼"),
    ("you", "𐑿"),
    ("your", "𐑿𐑼"),
    ("he", "𐑣𐑰"),
    ("him", "𐑣𐑦𐑥"),
    ("his", "𐑣𐑦𐑟"),
    ("she", "𐑖𐑰"),
    ("her", "𐑣𐑻"),
    ("it", "𐑦𐑑"),
    ("its", "𐑦𐑑𐑕"),
    ("they", "𐑞𐑱"),
    ("them", "𐑞𐑧𐑥"),
    ("their", "𐑞𐑺"),
    ("what", "𐑢𐑪𐑑"),
    ("who", "𐑣𐑵"),
    ("not", "𐑯𐑪𐑑"),
    ("no", "𐑯𐑴"),
    ("so", "𐑕𐑴"),
];

pub fn closed_class(word: &str) -> Option<&'static str> {
    CLOSED_CLASS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|&(_, form)| form)
}

pub fn is_closed_class(word: &str) -> bool {
    closed_class(word).is_some()
}

/// Reduced rendering of "to" after words that assimilate it ("have to").
pub fn reduced_to(previous: &str) -> Option<&'static str> {
    match previous {
        "have" | "has" | "used" | "unused" | "supposed" => Some("𐑑𐑩"),
        _ => None,
    }
}

/// Determiners that commonly start a sentence capitalized without naming anyone.
pub fn is_sentence_initial_determiner(word: &str) -> bool {
    matches!(
        word,
        "the" | "a" | "an" | "this" | "that" | "these" | "those" | "my" | "your" | "his"
            | "her" | "its" | "our" | "their" | "some" | "any" | "each" | "every" | "no"
            | "all" | "both"
    )
}

/// Words after which an untagged word is most likely a base-form verb.
pub fn is_verb_introducer(word: &str) -> bool {
    matches!(
        word,
        "to" | "will" | "would" | "can" | "could" | "shall" | "should" | "may" | "might"
            | "must" | "do" | "does" | "did"
    )
}

/// Abbreviations whose trailing period does not end a sentence.
pub fn is_title_abbreviation(word: &str) -> bool {
    matches!(
        word,
        "mr" | "mrs" | "ms" | "dr" | "st" | "prof" | "rev" | "gen" | "capt" | "sr" | "jr"
    )
}

/// The built-in curated names table. Dictionary data may extend or override it.
pub fn builtin_names() -> Vec<NameEntry> {
    const NAMES: &[(&str, &str, bool)] = &[
        ("bernard", "𐑚𐑻𐑯𐑸𐑛", false),
        ("shaw", "𐑖𐑷", false),
        ("george", "𐑡𐑹𐑡", false),
        ("kingsley", "𐑒𐑦𐑙𐑟𐑤𐑰", false),
        ("read", "𐑮𐑰𐑛", false),
        ("london", "𐑤𐑳𐑯𐑛𐑩𐑯", false),
        ("england", "𐑦𐑙𐑜𐑤𐑩𐑯𐑛", false),
        ("america", "𐑩𐑥𐑧𐑮𐑦𐑒𐑩", false),
        ("doctor who", "𐑛𐑪𐑒𐑑𐑼 𐑣𐑵", true),
        ("pygmalion", "𐑐𐑦𐑜𐑥𐑱𐑤𐑾𐑯", true),
    ];
    NAMES
        .iter()
        .map(|&(name, form, quoted)| NameEntry {
            name: name.to_string(),
            form: form.to_string(),
            quoted,
        })
        .collect()
}

/// Curated reverse-direction winners for forms shared by several spellings.
pub const REVERSE_OVERRIDES: &[(&str, &str)] = &[
    ("𐑯𐑴", "no"),
    ("𐑞𐑺", "there"),
    ("𐑑𐑵", "too"),
    ("𐑮𐑲𐑑", "right"),
    ("𐑕𐑰", "see"),
    ("𐑚𐑰", "be"),
    ("𐑣𐑽", "here"),
    ("𐑢𐑳𐑯", "one"),
    ("𐑯𐑿", "new"),
    ("𐑢𐑺", "where"),
    ("𐑑", "to"),
    ("𐑑𐑩", "to"),
    ("𐑲", "i"),
];

/// Irregular past tenses: (past, base, rendering of the past form).
pub const IRREGULAR_PAST: &[(&str, &str, &str)] = &[
    ("went", "go", "𐑢𐑧𐑯𐑑"),
    ("saw", "see", "𐑕𐑷"),
    ("made", "make", "𐑥𐑱𐑛"),
    ("said", "say", "𐑕𐑧𐑛"),
    ("thought", "think", "𐑔𐑷𐑑"),
    ("taught", "teach", "𐑑𐑷𐑑"),
    ("brought", "bring", "𐑚𐑮𐑷𐑑"),
    ("caught", "catch", "𐑒𐑷𐑑"),
    ("bought", "buy", "𐑚𐑷𐑑"),
    ("knew", "know", "𐑯𐑿"),
    ("grew", "grow", "𐑜𐑮𐑵"),
    ("flew", "fly", "𐑓𐑤𐑵"),
    ("drew", "draw", "𐑛𐑮𐑵"),
    ("took", "take", "𐑑𐑫𐑒"),
    ("gave", "give", "𐑜𐑱𐑝"),
    ("came", "come", "𐑒𐑱𐑥"),
    ("ran", "run", "𐑮𐑨𐑯"),
    ("wrote", "write", "𐑮𐑴𐑑"),
    ("spoke", "speak", "𐑕𐑐𐑴𐑒"),
    ("found", "find", "𐑓𐑬𐑯𐑛"),
    ("told", "tell", "𐑑𐑴𐑤𐑛"),
    ("felt", "feel", "𐑓𐑧𐑤𐑑"),
    ("kept", "keep", "𐑒𐑧𐑐𐑑"),
    ("left", "leave", "𐑤𐑧𐑓𐑑"),
    ("sat", "sit", "𐑕𐑨𐑑"),
    ("stood", "stand", "𐑕𐑑𐑫𐑛"),
    ("heard", "hear", "𐑣𐑻𐑛"),
];

pub fn irregular_past(word: &str) -> Option<(&'static str, &'static str)> {
    IRREGULAR_PAST
        .iter()
        .find(|(past, _, _)| *past == word)
        .map(|&(_, base, form)| (base, form))
}

/// Plurals whose singular the suffix rules would guess wrong.
pub fn irregular_plural(word: &str) -> Option<&'static str> {
    match word {
        "heroes" => Some("hero"),
        "potatoes" => Some("potato"),
        "tomatoes" => Some("tomato"),
        "echoes" => Some("echo"),
        "vetoes" => Some("veto"),
        "quizzes" => Some("quiz"),
        "dwarves" => Some("dwarf"),
        _ => None,
    }
}

/// Words the compositional rules get wrong; checked before any decomposition.
pub fn morphology_override(word: &str) -> Option<&'static str> {
    match word {
        "children" => Some("𐑗𐑦𐑤𐑛𐑮𐑩𐑯"),
        "women" => Some("𐑢𐑦𐑥𐑦𐑯"),
        "people" => Some("𐑐𐑰𐑐𐑩𐑤"),
        "men" => Some("𐑥𐑧𐑯"),
        "mice" => Some("𐑥𐑲𐑕"),
        "teeth" => Some("𐑑𐑰𐑔"),
        "feet" => Some("𐑓𐑰𐑑"),
        "geese" => Some("𐑜𐑰𐑕"),
        "oxen" => Some("𐑪𐑒𐑕𐑩𐑯"),
        "houses" => Some("𐑣𐑬𐑟𐑩𐑟"),
        "says" => Some("𐑕𐑧𐑟"),
        _ => None,
    }
}

/// Contractions whose base is not recoverable from the spelling.
const CONTRACTION_OVERRIDES: &[(&str, &str)] = &[
    ("won't", "𐑢𐑴𐑯𐑑"),
    ("can't", "𐑒𐑭𐑯𐑑"),
    ("shan't", "𐑖𐑭𐑯𐑑"),
    ("ain't", "𐑱𐑯𐑑"),
];

pub fn contraction_override(word: &str) -> Option<&'static str> {
    CONTRACTION_OVERRIDES.iter().find(|&&(w, _)| w == word).map(|&(_, form)| form)
}

/// Inverse of [`contraction_override`].
pub fn contraction_for_form(form: &str) -> Option<&'static str> {
    CONTRACTION_OVERRIDES.iter().find(|&&(_, f)| f == form).map(|&(word, _)| word)
}

/// Spoken letter names, used for initials such as `J.`.
pub fn letter_name(letter: char) -> Option<&'static str> {
    match letter.to_ascii_lowercase() {
        'a' => Some("𐑱"), 'b' => Some("𐑚𐑰"), 'c' => Some("𐑕𐑰"),
        'd' => Some("𐑛𐑰"), 'e' => Some("𐑰"), 'f' => Some("𐑧𐑓"),
        'g' => Some("𐑡𐑰"), 'h' => Some("𐑱𐑗"), 'i' => Some("𐑲"),
        'j' => Some("𐑡𐑱"), 'k' => Some("𐑒𐑱"), 'l' => Some("𐑧𐑤"),
        'm' => Some("𐑧𐑥"), 'n' => Some("𐑧𐑯"), 'o' => Some("𐑴"),
        'p' => Some("𐑐𐑰"), 'q' => Some("𐑒𐑿"), 'r' => Some("𐑸"),
        's' => Some("𐑧𐑕"), 't' => Some("𐑑𐑰"), 'u' => Some("𐑿"),
        'v' => Some("𐑝𐑰"), 'w' => Some("𐑛𐑳𐑚𐑩𐑤𐑿"), 'x' => Some("𐑧𐑒𐑕"),
        'y' => Some("𐑢𐑲"), 'z' => Some("𐑟𐑧𐑛"),
        _ => None,
    }
}

/// Inverse of [`letter_name`], returning the capital letter.
pub fn letter_for_name(form: &str) -> Option<char> {
    ('a'..='z')
        .find(|&c| letter_name(c) == Some(form))
        .map(|c| c.to_ascii_uppercase())
}
