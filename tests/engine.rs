use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use translit_core::core::tokenizer;
use translit_core::{Config, EngineOptions, TaggedToken, TaggerError, Transliterator};

fn data_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data/sample_dictionary.json")
}

fn engine() -> Transliterator {
    let _ = tracing_subscriber::fmt::try_init();
    Transliterator::from_json_file(&data_path()).unwrap()
}

#[test]
fn closed_class_words_use_fixed_renderings() {
    let engine = engine();
    assert_eq!(engine.transliterate("the"), "𐑞");
    assert_eq!(engine.transliterate("The"), "𐑞");
}

#[test]
fn have_to_reduces_to() {
    let engine = engine();
    assert_eq!(engine.transliterate("have to go"), "𐑣𐑨𐑝 𐑑𐑩 𐑜𐑴");
    assert_eq!(engine.transliterate("want to go"), "𐑢𐑪𐑯𐑑 𐑑 𐑜𐑴");
}

#[test]
fn compounds_resolve_per_part_and_round_trip() {
    let engine = engine();
    let forward = engine.transliterate("year-and-a-day");
    assert_eq!(forward, "𐑘𐑽-𐑯-𐑩-𐑛𐑱");
    assert_eq!(engine.reverse_transliterate(&forward).to_lowercase(), "year-and-a-day");
}

#[test]
fn quoted_titles_get_one_marker() {
    let engine = engine();
    let forward = engine.transliterate("Doctor Who");
    assert_eq!(forward, "·«𐑛𐑪𐑒𐑑𐑼 𐑣𐑵»");
    assert_eq!(engine.reverse_transliterate(&forward), "Doctor Who");

    let forward = engine.transliterate("I saw Man and Superman.");
    assert_eq!(forward, "𐑲 𐑕𐑷 ·«𐑥𐑨𐑯 𐑯 𐑕𐑵𐑐𐑼𐑥𐑨𐑯».");
}

#[test]
fn contractions_never_escape() {
    let mut engine = engine();
    assert_eq!(engine.transliterate("don't"), "𐑛𐑵𐑯𐑑");
    engine.set_options(EngineOptions { escape_unresolved: true, ..EngineOptions::default() });
    assert_eq!(engine.transliterate("don't"), "𐑛𐑵𐑯𐑑");
    assert_eq!(engine.transliterate("won't"), "𐑢𐑴𐑯𐑑");
}

#[rstest]
#[case("Don't go!")]
#[case("It's a dog.")]
#[case("The cat won't go.")]
fn contractions_round_trip(#[case] text: &str) {
    let engine = engine();
    assert_eq!(engine.reverse_transliterate(&engine.transliterate(text)), text);
}

#[test]
fn possessive_and_contraction_tie_break() {
    let engine = engine();
    assert_eq!(engine.transliterate("Shaw's"), "·𐑖𐑷'𐑟");
    assert_eq!(engine.transliterate("it's"), "𐑦𐑑𐑟");
    assert_eq!(engine.reverse_transliterate("·𐑖𐑷'𐑟 𐑐𐑤𐑱"), "Shaw's play");
}

#[test]
fn two_word_names_are_marked_once() {
    let engine = engine();
    let forward = engine.transliterate("Bernard Shaw");
    assert_eq!(forward, "·𐑚𐑻𐑯𐑸𐑛 𐑖𐑷");
    assert_eq!(forward.matches('·').count(), 1);
    assert_eq!(engine.reverse_transliterate(&forward), "Bernard Shaw");
}

#[test]
fn multi_word_name_rows_round_trip() {
    let engine = engine();
    let forward = engine.transliterate("Lloyd George");
    assert_eq!(forward, "·𐑤𐑶𐑛 𐑡𐑹𐑡");
    assert_eq!(engine.reverse_transliterate(&forward), "Lloyd George");

    let forward = engine.transliterate("Lloyd George's cat");
    assert_eq!(forward, "·𐑤𐑶𐑛 𐑡𐑹𐑡'𐑟 𐑒𐑨𐑑");
    assert_eq!(engine.reverse_transliterate(&forward), "Lloyd George's cat");
}

#[test]
fn initials_round_trip() {
    let engine = engine();
    let forward = engine.transliterate("J. R. R. Tolkien");
    assert_eq!(forward, "·𐑡𐑱. ·𐑸. ·𐑸. 𐑑𐑪𐑤𐑒𐑰𐑯");
    assert_eq!(engine.reverse_transliterate(&forward), "J. R. R. Tolkien");
}

#[test]
fn titles_do_not_end_sentences() {
    let engine = engine();
    let forward = engine.transliterate("Mr. Shaw read the book.");
    assert_eq!(forward, "𐑥𐑦𐑕𐑑𐑼. ·𐑖𐑷 𐑮𐑰𐑛 𐑞 𐑚𐑫𐑒.");
    assert_eq!(engine.reverse_transliterate(&forward), "Mr. Shaw read the book.");
}

#[rstest]
#[case(Some("NN"), "𐑑𐑽")]
#[case(Some("VB"), "𐑑𐑺")]
#[case(Some("JJ"), "𐑑𐑽")]
#[case(None, "𐑑𐑽")]
fn part_of_speech_tier_wins_when_tag_matches(#[case] pos: Option<&str>, #[case] expected: &str) {
    assert_eq!(engine().transliterate_word("tear", pos), expected);
}

#[test]
fn modal_selects_base_form_of_heteronym() {
    let engine = engine();
    assert_eq!(engine.transliterate("I will read the book."), "𐑲 𐑢𐑦𐑤 𐑮𐑰𐑛 𐑞 𐑚𐑫𐑒.");
}

fn past_tense_tagger(text: &str) -> Result<Vec<TaggedToken>, TaggerError> {
    Ok(tokenizer::segment(text)
        .into_iter()
        .map(|token| {
            let pos = if token.text == "read" { Some("VBD") } else { None };
            TaggedToken::new(&token.text, pos)
        })
        .collect())
}

fn offline_tagger(_: &str) -> Result<Vec<TaggedToken>, TaggerError> {
    Err(TaggerError::Unavailable("model not loaded".to_string()))
}

#[test]
fn tagger_output_drives_heteronyms() {
    let engine = engine();
    assert_eq!(engine.transliterate_tagged("I read the book.", &past_tense_tagger), "𐑲 𐑮𐑧𐑛 𐑞 𐑚𐑫𐑒.");
}

#[test]
fn tagger_failure_falls_back_to_untagged() {
    let engine = engine();
    assert_eq!(engine.transliterate_tagged("I read the book.", &offline_tagger), "𐑲 𐑮𐑰𐑛 𐑞 𐑚𐑫𐑒.");
}

#[rstest]
#[case("walked", "𐑢𐑷𐑒𐑑")]
#[case("wanted", "𐑢𐑪𐑯𐑑𐑦𐑛")]
#[case("went", "𐑢𐑧𐑯𐑑")]
#[case("cats", "𐑒𐑨𐑑𐑕")]
#[case("students", "𐑕𐑑𐑿𐑛𐑩𐑯𐑑𐑕")]
#[case("boxes", "𐑚𐑪𐑒𐑕𐑩𐑟")]
#[case("cities", "𐑕𐑦𐑑𐑦𐑟")]
#[case("knives", "𐑯𐑲𐑝𐑟")]
#[case("horses", "𐑣𐑹𐑕𐑩𐑟")]
#[case("children", "𐑗𐑦𐑤𐑛𐑮𐑩𐑯")]
fn inflections_decompose(#[case] word: &str, #[case] expected: &str) {
    assert_eq!(engine().transliterate_word(word, None), expected);
}

#[rstest]
#[case("zyzzyva")]
#[case("Qwghlm")]
#[case("xkcd's")]
#[case("frobnicated")]
fn unknown_words_are_returned_unchanged(#[case] word: &str) {
    assert_eq!(engine().transliterate_word(word, None), word);
}

#[test]
fn names_and_forced_markers() {
    let engine = engine();
    assert_eq!(engine.transliterate("I know London."), "𐑲 𐑯𐑴 ·𐑤𐑳𐑯𐑛𐑩𐑯.");
    assert_eq!(engine.transliterate("to Paris"), "𐑑 ·𐑐𐑨𐑮𐑦𐑕");
    assert_eq!(engine.transliterate("to paris"), "𐑑 𐑐𐑨𐑮𐑦𐑕");
    assert_eq!(engine.transliterate("Read the book."), "𐑮𐑰𐑛 𐑞 𐑚𐑫𐑒.");
    assert_eq!(engine.transliterate("ipod"), "𐑲𐑐𐑪𐑛");
}

#[test]
fn spacing_and_punctuation_survive() {
    let engine = engine();
    assert_eq!(engine.transliterate("Hello,  world!\n"), "𐑣𐑩𐑤𐑴,  𐑢𐑻𐑤𐑛!\n");
    assert_eq!(engine.transliterate("(good morning) -- 42"), "(𐑜𐑫𐑛 𐑥𐑹𐑯𐑦𐑙) -- 42");
}

#[test]
fn sentences_round_trip() {
    let engine = engine();
    let text = "The cat sat on the mat. There is a dog.";
    let forward = engine.transliterate(text);
    assert_eq!(forward, "𐑞 𐑒𐑨𐑑 𐑕𐑨𐑑 𐑪𐑯 𐑞 𐑥𐑨𐑑. 𐑞𐑺 𐑦𐑟 𐑩 𐑛𐑪𐑜.");
    assert_eq!(engine.reverse_transliterate(&forward), text);
}

#[rstest]
#[case("𐑑𐑵", "too")]
#[case("𐑢𐑳𐑯", "one")]
#[case("𐑮𐑲𐑑", "right")]
#[case("𐑯𐑿", "new")]
#[case("𐑲", "I")]
fn curated_overrides_pick_reverse_spelling(#[case] form: &str, #[case] expected: &str) {
    assert_eq!(engine().reverse_transliterate_word(form), expected);
}

#[test]
fn escaped_tokens_round_trip_verbatim() {
    let mut engine = engine();
    engine.set_options(EngineOptions { escape_unresolved: true, ..EngineOptions::default() });
    let forward = engine.transliterate("the Zork's box");
    assert_eq!(forward, "𐑞 ⟦Zork's⟧ 𐑚𐑪𐑒𐑕");
    assert_eq!(engine.reverse_transliterate(&forward), "The Zork's box");
}

#[test]
fn transliteration_is_deterministic() {
    let engine = engine();
    let text = "Mr. Shaw's students didn't want to go to London, so they read Pygmalion.";
    let first = engine.transliterate(text);
    for _ in 0..5 {
        assert_eq!(engine.transliterate(text), first);
    }
    assert_eq!(engine.reverse_transliterate(&first), engine.reverse_transliterate(&first));
}

#[test]
fn engine_is_shareable_across_threads() {
    let engine = Arc::new(engine());
    let handles: Vec<_> = ["have to go", "Bernard Shaw", "year-and-a-day", "the"]
        .into_iter()
        .map(|text| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || (text, engine.transliterate(text)))
        })
        .collect();
    for handle in handles {
        let (text, output) = handle.join().unwrap();
        assert_eq!(output, engine.transliterate(text));
    }
}

#[test]
fn config_with_snapshot_builds_and_reuses_it() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        dictionary: data_path(),
        snapshot: Some(dir.path().join("compiled").join("store.bin")),
        options: EngineOptions::default(),
    };

    let built = Transliterator::from_config(&config).unwrap();
    let snapshot = config.snapshot.as_deref().unwrap();
    assert!(snapshot.exists());

    let reloaded = Transliterator::from_config(&Config {
        dictionary: dir.path().join("missing.json"),
        ..config.clone()
    })
    .unwrap();
    assert_eq!(reloaded.transliterate("have to go"), built.transliterate("have to go"));
    assert_eq!(reloaded.store().len(), built.store().len());
}

#[test]
fn missing_dictionary_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Transliterator::from_json_file(&dir.path().join("nope.json")).is_err());
}
