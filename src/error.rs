// File: src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SukaError {
    /// The word has no vowel unit, so no syllable can open.
    #[error("no syllable nucleus found in {word:?}")]
    NoNucleusFound { word: String },

    /// A character outside the Malay letter set reached the segmenter.
    #[error("invalid character {ch:?} in {word:?}")]
    InvalidCharacter { ch: char, word: String },

    /// A persisted vocabulary breaks the contiguous-id or unique-token invariant.
    #[error("corrupt vocabulary: {0}")]
    CorruptVocabulary(String),

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("bincode: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("could not persist temp file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

impl SukaError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SukaError::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, SukaError>;
