// File: src/vocab.rs
use crate::core::engine::Tokenizer;
use crate::core::types::TokenId;
use crate::error::{Result, SukaError};
use std::cmp::Reverse;
use std::collections::HashMap;

pub const UNK_TOKEN: &str = "<UNK>";

/// An immutable, bijective token <-> id mapping with the frequency each
/// token had when the vocabulary was built. Ids run from 0 to `len() - 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    /// id -> token
    tokens: Vec<String>,
    /// token -> id
    ids: HashMap<String, TokenId>,
    /// id -> frequency
    frequencies: Vec<u64>,
}

impl Vocabulary {
    /// Ranks tokens by descending frequency, ties by ascending token string,
    /// and hands out ids in that order.
    pub(crate) fn from_frequencies(counts: HashMap<String, u64>) -> Self {
        let mut ranked: Vec<(String, u64)> = counts.into_iter().collect();
        ranked.sort_by(|(t1, f1), (t2, f2)| Reverse(*f1).cmp(&Reverse(*f2)).then_with(|| t1.cmp(t2)));

        let mut tokens = Vec::with_capacity(ranked.len());
        let mut frequencies = Vec::with_capacity(ranked.len());

        for (token, frequency) in ranked.into_iter() {
            tokens.push(token);
            frequencies.push(frequency);
        }

        let ids = tokens.iter().enumerate().map(|(id, token)| (token.clone(), id as TokenId)).collect();

        Self { tokens, ids, frequencies }
    }

    /// Builds a vocabulary from `(token, id, frequency)` entries, rejecting
    /// gaps, duplicate ids and duplicate tokens.
    pub(crate) fn from_entries(entries: Vec<(String, TokenId, u64)>) -> Result<Self> {
        let n = entries.len();
        let mut slots: Vec<Option<(String, u64)>> = vec![None; n];
        let mut ids = HashMap::with_capacity(n);

        for (token, id, frequency) in entries.into_iter() {
            let index = id as usize;

            if index >= n {
                return Err(SukaError::CorruptVocabulary(format!(
                    "id {id} of {token:?} is out of range for {n} tokens",
                )));
            }

            if slots[index].is_some() {
                return Err(SukaError::CorruptVocabulary(format!("id {id} is used more than once")));
            }

            if ids.insert(token.clone(), id).is_some() {
                return Err(SukaError::CorruptVocabulary(format!("token {token:?} appears more than once")));
            }

            slots[index] = Some((token, frequency));
        }

        let mut tokens = Vec::with_capacity(n);
        let mut frequencies = Vec::with_capacity(n);

        for (id, slot) in slots.into_iter().enumerate() {
            let Some((token, frequency)) = slot else {
                return Err(SukaError::CorruptVocabulary(format!("id {id} is missing")));
            };

            tokens.push(token);
            frequencies.push(frequency);
        }

        Ok(Self { tokens, ids, frequencies })
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn id_of(&self, token: &str) -> Option<TokenId> {
        self.ids.get(token).copied()
    }

    pub fn token_of(&self, id: TokenId) -> Option<&str> {
        self.tokens.get(id as usize).map(|s| s.as_str())
    }

    pub fn frequency_of(&self, token: &str) -> Option<u64> {
        self.id_of(token).map(|id| self.frequencies[id as usize])
    }

    /// `(token, id, frequency)` in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, TokenId, u64)> + '_ {
        self.tokens
            .iter()
            .zip(self.frequencies.iter())
            .enumerate()
            .map(|(id, (token, frequency))| (token.as_str(), id as TokenId, *frequency))
    }

    /// The id unknown tokens encode to. It is one past the last real id and
    /// is never stored in the vocabulary.
    pub fn unk_id(&self) -> TokenId {
        self.tokens.len() as TokenId
    }

    pub fn encode(&self, tokenizer: &Tokenizer, text: &str) -> Vec<TokenId> {
        tokenizer
            .tokenize(text)
            .iter()
            .map(|token| self.id_of(token.as_str()).unwrap_or_else(|| self.unk_id()))
            .collect()
    }

    /// Joins the tokens with a single space. Ids outside the vocabulary render as `<UNK>`.
    pub fn decode(&self, ids: &[TokenId]) -> String {
        ids.iter()
            .map(|id| self.token_of(*id).unwrap_or(UNK_TOKEN))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(&str, u64)]) -> HashMap<String, u64> {
        pairs.iter().map(|(t, f)| (t.to_string(), *f)).collect()
    }

    #[test]
    fn ids_follow_frequency_then_token() {
        let vocab = Vocabulary::from_frequencies(counts(&[("la", 2), ("ri", 1), ("ke", 2), ("ber", 5)]));

        assert_eq!(vocab.id_of("ber"), Some(0));
        assert_eq!(vocab.id_of("ke"), Some(1));
        assert_eq!(vocab.id_of("la"), Some(2));
        assert_eq!(vocab.id_of("ri"), Some(3));
        assert_eq!(vocab.token_of(2), Some("la"));
        assert_eq!(vocab.token_of(4), None);
        assert_eq!(vocab.frequency_of("ber"), Some(5));
        assert_eq!(vocab.frequency_of("pa"), None);
        assert_eq!(vocab.len(), 4);
    }

    #[test]
    fn from_entries_rejects_bad_ids() {
        let missing = vec![
            (String::from("a"), 0, 1),
            (String::from("b"), 1, 1),
            (String::from("c"), 3, 1),
        ];
        assert!(matches!(Vocabulary::from_entries(missing), Err(SukaError::CorruptVocabulary(_))));

        let duplicate_id = vec![(String::from("a"), 0, 1), (String::from("b"), 0, 1)];
        assert!(matches!(Vocabulary::from_entries(duplicate_id), Err(SukaError::CorruptVocabulary(_))));

        let duplicate_token = vec![(String::from("a"), 0, 1), (String::from("a"), 1, 1)];
        assert!(matches!(Vocabulary::from_entries(duplicate_token), Err(SukaError::CorruptVocabulary(_))));

        let shuffled = vec![(String::from("b"), 1, 3), (String::from("a"), 0, 7)];
        let vocab = Vocabulary::from_entries(shuffled).unwrap();
        assert_eq!(vocab.iter().collect::<Vec<_>>(), vec![("a", 0, 7), ("b", 1, 3)]);
    }

    #[test]
    fn encode_decode_with_unknowns() {
        let tokenizer = Tokenizer::new();
        let vocab = Vocabulary::from_frequencies(counts(&[("pa", 1), ("sar", 1)]));

        let ids = vocab.encode(&tokenizer, "pasar besar");
        assert_eq!(ids, vec![0, 1, 2, 1]);
        assert_eq!(vocab.unk_id(), 2);
        assert_eq!(vocab.decode(&ids), "pa sar <UNK> sar");
    }
}
