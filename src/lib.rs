// src/lib.rs
//
// Malay suku kata (syllable) tokenizer: text is split into words, words into
// syllables by rule, and the syllables of a corpus are counted into a
// vocabulary with deterministic ids.

pub mod builder;
pub mod config;
pub mod core;
pub mod error;
pub mod persistence;
pub mod vocab;

pub use crate::builder::VocabularyBuilder;
pub use crate::config::{BuildConfig, TokenizerConfig};
pub use crate::core::engine::Tokenizer;
pub use crate::core::types::{CharClass, Syllable, Token, TokenId, TokenKind};
pub use crate::error::{Result, SukaError};
pub use crate::persistence::VocabFormat;
pub use crate::vocab::Vocabulary;

/// Tokenizes `text` with the default configuration.
pub fn tokenize(text: &str) -> Vec<String> {
    Tokenizer::new().tokenize(text).into_iter().map(|t| t.text).collect()
}

/// Builds a vocabulary over `corpus` with the default configuration.
pub fn build<S: AsRef<str> + Sync>(corpus: &[S]) -> Vocabulary {
    VocabularyBuilder::new(Tokenizer::new()).build(corpus)
}
