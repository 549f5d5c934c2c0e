use sukatoken::{
    build,
    tokenize,
    BuildConfig,
    SukaError,
    Tokenizer,
    TokenizerConfig,
    Vocabulary,
    VocabularyBuilder,
};
use std::fs;

const CORPUS: [&str; 4] = [
    "Kucing berlari di taman.",
    "Saya suka makan nasi lemak!",
    "Pohon besar tumbang semalam; 3 orang cedera.",
    "Memperbaiki kerosakanlah, kan?",
];

#[test]
fn scenarios() {
    assert_eq!(tokenize("berlari"), vec!["ber", "la", "ri"]);
    assert_eq!(tokenize("pasar"), vec!["pa", "sar"]);
    assert_eq!(tokenize("ke"), vec!["ke"]);

    let vocab = build(&["berlari ke pasar", "saya suka belajar"]);
    let mut distinct = tokenize("berlari ke pasar saya suka belajar");
    distinct.sort();
    distinct.dedup();
    assert_eq!(vocab.len(), distinct.len());

    // "la" is the only repeated token, "ke" is fifth among the singletons
    assert_eq!(vocab.id_of("la"), Some(0));
    assert_eq!(vocab.id_of("ke"), Some(5));
}

#[test]
fn tokenize_never_fails() {
    for text in ["", "   ", "?!...", "dgn", "xyz 123", "naïve café", "🙂🙂", "KL-JB", "a\u{301}"] {
        let tokens = tokenize(text);
        assert!(tokens.iter().all(|t| !t.is_empty() && !t.chars().any(char::is_whitespace)));
    }

    assert_eq!(tokenize("dgn"), vec!["dgn"]);
    assert_eq!(tokenize("KL-JB"), vec!["kl", "-", "jb"]);
}

#[test]
fn syllables_round_trip() {
    let tokenizer = Tokenizer::new();

    for word in CORPUS.iter().flat_map(|s| s.split(|c: char| !c.is_alphabetic())).filter(|w| !w.is_empty()) {
        let word = word.to_lowercase();
        let syllables = tokenizer.segment_word(&word).unwrap();
        assert_eq!(syllables.iter().map(|s| s.text.as_str()).collect::<String>(), word);
    }
}

#[test]
fn build_save_load() {
    let dir = tempfile::tempdir().unwrap();
    let builder = VocabularyBuilder::with_config(Tokenizer::new(), BuildConfig { parallel: true });
    let vocab = builder.build(&CORPUS);

    assert_eq!(vocab, VocabularyBuilder::new(Tokenizer::new()).build(&CORPUS));

    for name in ["vocab.json", "vocab.bin"] {
        let path = dir.path().join(name);
        vocab.save(&path).unwrap();
        assert_eq!(Vocabulary::load(&path).unwrap(), vocab);
    }

    let ids = vocab.encode(builder.tokenizer(), "kucing makan nasi");
    assert!(ids.iter().all(|id| *id < vocab.unk_id()));
    assert_eq!(vocab.decode(&ids), "ku cing ma kan na si");
}

#[test]
fn corrupt_document_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vocab.json");
    fs::write(&path, r#"{ "version": 1, "vocab": { "ber": 0, "la": 1, "ri": 3 } }"#).unwrap();

    match Vocabulary::load(&path) {
        Err(SukaError::CorruptVocabulary(_)) => {},
        other => panic!("expected CorruptVocabulary, got {other:?}"),
    }
}

#[test]
fn configured_tokenizer() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tokenizer.json");
    fs::write(&path, r#"{ "prefix_markers": true, "split_particles": true }"#).unwrap();

    let tokenizer = Tokenizer::with_config(TokenizerConfig::from_path(&path).unwrap());
    let tokens: Vec<String> = tokenizer.tokenize("Memperbaiki kerosakanlah, kan?").into_iter().map(|t| t.text).collect();

    assert_eq!(
        tokens,
        vec![
            "[PREFIX=mem]", "[PREFIX=per]", "mem", "per", "bai", "ki",
            "[PREFIX=ke]", "ke", "ro", "sa", "kan", "lah",
            ",", "kan", "?",
        ],
    );
}
