// File: src/config.rs
use crate::error::{Result, SukaError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct TokenizerConfig {
    // each punctuation character is its own token; if false, a run of punctuation stays together
    pub split_punctuation: bool,

    // emit "[PREFIX=ber]"-style markers in front of a prefixed word
    pub prefix_markers: bool,

    // detach a trailing particle ("lah", "kan", ...) as a whole token
    pub split_particles: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        TokenizerConfig {
            split_punctuation: true,
            prefix_markers: false,
            split_particles: false,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct BuildConfig {
    // tokenize sentences on the rayon pool and merge the counts
    pub parallel: bool,
}

impl TokenizerConfig {
    pub fn from_path(path: &Path) -> Result<Self> {
        load_json(path)
    }
}

impl BuildConfig {
    pub fn from_path(path: &Path) -> Result<Self> {
        load_json(path)
    }
}

fn load_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let s = fs::read_to_string(path).map_err(|e| SukaError::io(path, e))?;
    Ok(serde_json::from_str(&s)?)
}
