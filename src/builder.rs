// File: src/builder.rs
use crate::config::BuildConfig;
use crate::core::engine::Tokenizer;
use crate::vocab::Vocabulary;
use rayon::prelude::*;
use std::collections::HashMap;
use tracing::info;

/// Counts tokens over a corpus and freezes the counts into a `Vocabulary`.
pub struct VocabularyBuilder {
    tokenizer: Tokenizer,
    config: BuildConfig,
}

impl VocabularyBuilder {
    pub fn new(tokenizer: Tokenizer) -> Self {
        Self::with_config(tokenizer, BuildConfig::default())
    }

    pub fn with_config(tokenizer: Tokenizer, config: BuildConfig) -> Self {
        Self { tokenizer, config }
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn build<S: AsRef<str> + Sync>(&self, corpus: &[S]) -> Vocabulary {
        let counts = self.count(corpus);
        let total: u64 = counts.values().sum();
        let vocab = Vocabulary::from_frequencies(counts);

        info!(
            sentences = corpus.len(),
            distinct_tokens = vocab.len(),
            total_tokens = total,
            parallel = self.config.parallel,
            "built vocabulary"
        );

        vocab
    }

    /// Token -> number of occurrences across the whole corpus.
    pub fn count<S: AsRef<str> + Sync>(&self, corpus: &[S]) -> HashMap<String, u64> {
        if self.config.parallel {
            corpus
                .par_iter()
                .map(|sentence| self.count_sentence(sentence.as_ref()))
                .reduce(HashMap::new, merge_counts)
        }

        else {
            corpus
                .iter()
                .map(|sentence| self.count_sentence(sentence.as_ref()))
                .fold(HashMap::new(), merge_counts)
        }
    }

    fn count_sentence(&self, sentence: &str) -> HashMap<String, u64> {
        let mut counts = HashMap::new();

        for token in self.tokenizer.tokenize(sentence) {
            *counts.entry(token.text).or_insert(0) += 1;
        }

        counts
    }
}

fn merge_counts(mut into: HashMap<String, u64>, from: HashMap<String, u64>) -> HashMap<String, u64> {
    // fold the smaller map into the larger one
    if into.len() < from.len() {
        return merge_counts(from, into);
    }

    for (token, count) in from.into_iter() {
        *into.entry(token).or_insert(0) += count;
    }

    into
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORPUS: [&str; 2] = ["berlari ke pasar", "saya suka belajar"];

    #[test]
    fn build_small_corpus() {
        let vocab = VocabularyBuilder::new(Tokenizer::new()).build(&CORPUS);

        // ber la ri ke pa sar / sa ya su ka be la jar
        assert_eq!(vocab.len(), 12);
        assert_eq!(vocab.id_of("la"), Some(0));
        assert_eq!(vocab.frequency_of("la"), Some(2));

        // every other token occurs once, so ties fall back to token order
        assert_eq!(vocab.id_of("be"), Some(1));
        assert_eq!(vocab.id_of("ber"), Some(2));
        assert_eq!(vocab.id_of("ke"), Some(5));
        assert_eq!(vocab.id_of("ya"), Some(11));
    }

    #[test]
    fn ids_do_not_depend_on_order_or_parallelism() {
        let corpus = vec![
            "kucing berlari di taman",
            "saya suka makan nasi lemak",
            "pohon besar tumbang semalam",
            "berlari, berlari, dan terus berlari!",
            "dgn 3 ekor kucing",
        ];
        let mut reversed = corpus.clone();
        reversed.reverse();

        let sequential = VocabularyBuilder::new(Tokenizer::new()).build(&corpus);
        let parallel = VocabularyBuilder::with_config(Tokenizer::new(), BuildConfig { parallel: true });

        assert_eq!(sequential, parallel.build(&corpus));
        assert_eq!(sequential, parallel.build(&reversed));
        assert_eq!(sequential, VocabularyBuilder::new(Tokenizer::new()).build(&reversed));
        assert_eq!(sequential.frequency_of("ber"), Some(4));
        assert_eq!(sequential.frequency_of("dgn"), Some(1));
    }

    #[test]
    fn empty_corpus() {
        let vocab = VocabularyBuilder::new(Tokenizer::new()).build::<&str>(&[]);
        assert!(vocab.is_empty());
    }
}
