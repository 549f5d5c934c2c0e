// File: src/persistence.rs
use crate::core::types::TokenId;
use crate::error::{Result, SukaError};
use crate::vocab::Vocabulary;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::marker::PhantomData;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{info, warn};

pub const FORMAT_VERSION: u32 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VocabFormat {
    /// Pretty-printed, human-readable document.
    Json,
    /// The same document, bincode-encoded.
    Bincode,
}

impl VocabFormat {
    /// `.bin` files are bincode, everything else is json.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("bin") => VocabFormat::Bincode,
            _ => VocabFormat::Json,
        }
    }
}

/// The persisted shape of a vocabulary.
///
/// ```json
/// {
///   "version": 1,
///   "vocab": { "la": 0, "be": 1 },
///   "frequencies": { "la": 2, "be": 1 }
/// }
/// ```
#[derive(Serialize, Deserialize)]
struct VocabDocument {
    version: u32,
    vocab: Entries<TokenId>,
    #[serde(default)]
    frequencies: Option<Entries<u64>>,
}

/// A string-keyed map that keeps its order and, on read, its duplicate keys.
struct Entries<V>(Vec<(String, V)>);

impl<V: Serialize> Serialize for Entries<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;

        for (key, value) in self.0.iter() {
            map.serialize_entry(key, value)?;
        }

        map.end()
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Entries<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

struct EntriesVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
    type Value = Entries<V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map keyed by token strings")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0).min(4096));

        while let Some((key, value)) = access.next_entry::<String, V>()? {
            entries.push((key, value));
        }

        Ok(Entries(entries))
    }
}

impl VocabDocument {
    fn from_vocab(vocab: &Vocabulary) -> Self {
        let mut ids = Vec::with_capacity(vocab.len());
        let mut frequencies = Vec::with_capacity(vocab.len());

        for (token, id, frequency) in vocab.iter() {
            ids.push((token.to_string(), id));
            frequencies.push((token.to_string(), frequency));
        }

        VocabDocument {
            version: FORMAT_VERSION,
            vocab: Entries(ids),
            frequencies: Some(Entries(frequencies)),
        }
    }

    fn into_vocab(self) -> Result<Vocabulary> {
        if self.version != FORMAT_VERSION {
            return Err(SukaError::CorruptVocabulary(format!(
                "unsupported version {} (expected {FORMAT_VERSION})",
                self.version,
            )));
        }

        let mut frequencies: HashMap<String, u64> = HashMap::new();

        if let Some(Entries(entries)) = self.frequencies {
            for (token, frequency) in entries.into_iter() {
                if frequencies.insert(token.clone(), frequency).is_some() {
                    return Err(SukaError::CorruptVocabulary(format!("frequency of {token:?} is given twice")));
                }
            }
        }

        let known = frequencies.len();
        let mut matched = 0;
        let mut entries = Vec::with_capacity(self.vocab.0.len());

        for (token, id) in self.vocab.0.into_iter() {
            let frequency = match frequencies.get(&token) {
                Some(frequency) => {
                    matched += 1;
                    *frequency
                },
                None => 0,
            };

            entries.push((token, id, frequency));
        }

        let vocab = Vocabulary::from_entries(entries)?;

        // `matched` can double count a duplicated token, but then `from_entries` has already failed
        if matched != known {
            return Err(SukaError::CorruptVocabulary(String::from("frequencies name a token that is not in the vocabulary")));
        }

        Ok(vocab)
    }
}

/// Saves in the format implied by the file extension.
pub fn save_to_disk(vocab: &Vocabulary, path: &Path) -> Result<()> {
    save_as(vocab, path, VocabFormat::from_path(path))
}

/// Loads in the format implied by the file extension.
pub fn load_from_disk(path: &Path) -> Result<Vocabulary> {
    load_as(path, VocabFormat::from_path(path))
}

/// Writes to a temp file next to `path` and renames it into place, so
/// `path` is never left half-written.
pub fn save_as(vocab: &Vocabulary, path: &Path, format: VocabFormat) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir).map_err(|e| SukaError::io(parent_dir, e))?;

    let document = VocabDocument::from_vocab(vocab);
    let temp_file = NamedTempFile::new_in(parent_dir).map_err(|e| SukaError::io(parent_dir, e))?;

    {
        let mut writer = BufWriter::new(&temp_file);

        match format {
            VocabFormat::Json => serde_json::to_writer_pretty(&mut writer, &document)?,
            VocabFormat::Bincode => bincode::serialize_into(&mut writer, &document)?,
        }

        writer.flush().map_err(|e| SukaError::io(path, e))?;
    }

    temp_file.persist(path)?;
    info!(path = %path.display(), ?format, tokens = vocab.len(), "saved vocabulary");
    Ok(())
}

/// Nothing is returned unless the whole document passes validation.
pub fn load_as(path: &Path, format: VocabFormat) -> Result<Vocabulary> {
    let file = File::open(path).map_err(|e| SukaError::io(path, e))?;
    let reader = BufReader::new(file);

    let document: VocabDocument = match format {
        VocabFormat::Json => serde_json::from_reader(reader)?,
        VocabFormat::Bincode => bincode::deserialize_from(reader)?,
    };

    let vocab = document.into_vocab().map_err(|e| {
        warn!(path = %path.display(), error = %e, "rejected vocabulary");
        e
    })?;

    info!(path = %path.display(), ?format, tokens = vocab.len(), "loaded vocabulary");
    Ok(vocab)
}

impl Vocabulary {
    pub fn save(&self, path: &Path) -> Result<()> {
        save_to_disk(self, path)
    }

    pub fn load(path: &Path) -> Result<Vocabulary> {
        load_from_disk(path)
    }
}
