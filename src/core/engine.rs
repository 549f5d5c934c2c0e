use crate::config::TokenizerConfig;
use crate::core::classifier::CharacterClassifier;
use crate::core::segmenter::SyllableSegmenter;
use crate::core::tables::{is_vowel, PARTICLES_BY_LENGTH, PREFIXES_BY_LENGTH};
use crate::core::types::{Syllable, Token, TokenKind};
use crate::error::Result;
use tracing::debug;

/// Turns raw text into syllable and literal tokens.
///
/// Whitespace separates words, punctuation is split off, letter runs are
/// lowercased and segmented into syllables, digit runs are kept verbatim.
/// A letter run that cannot be segmented (no vowel, or a letter outside the
/// Malay alphabet) becomes one literal token, so `tokenize` never fails.
pub struct Tokenizer {
    classifier: CharacterClassifier,
    segmenter: SyllableSegmenter,
    config: TokenizerConfig,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum RunKind {
    Letter,
    Digit,
    Symbol,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self::with_config(TokenizerConfig::default())
    }

    pub fn with_config(config: TokenizerConfig) -> Self {
        Self {
            classifier: CharacterClassifier::new(),
            segmenter: SyllableSegmenter::new(),
            config,
        }
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Classifies and segments a single lowercased word.
    pub fn segment_word(&self, word: &str) -> Result<Vec<Syllable>> {
        let classified = self.classifier.classify(word);
        self.segmenter.segment(&classified)
    }

    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = vec![];

        for (kind, run) in self.split_runs(text) {
            match kind {
                RunKind::Letter => self.push_word(run, &mut tokens),
                RunKind::Digit | RunKind::Symbol => tokens.push(Token::new(run, TokenKind::Literal)),
            }
        }

        tokens
    }

    fn push_word(&self, word: &str, tokens: &mut Vec<Token>) {
        let word = word.to_lowercase();

        if self.config.prefix_markers {
            for prefix in detect_prefixes(&word) {
                tokens.push(Token::new(format!("[PREFIX={prefix}]"), TokenKind::PrefixMarker));
            }
        }

        let (stem, particle) = if self.config.split_particles {
            split_particle(&word)
        } else {
            (word.as_str(), None)
        };

        match self.segment_word(stem) {
            Ok(syllables) => {
                tokens.extend(syllables.into_iter().map(|s| Token::new(s.text, TokenKind::Syllable)));

                if let Some(particle) = particle {
                    tokens.push(Token::new(particle, TokenKind::Particle));
                }
            },
            Err(e) => {
                debug!(word = %word, reason = %e, "falling back to a whole-word literal");
                tokens.push(Token::new(word, TokenKind::Literal));
            },
        }
    }

    fn split_runs<'a>(&self, text: &'a str) -> Vec<(RunKind, &'a str)> {
        let mut result = vec![];
        let mut curr: Option<(RunKind, usize)> = None;

        for (index, ch) in text.char_indices() {
            let kind = run_kind(ch);

            match curr {
                Some((curr_kind, _)) if Some(curr_kind) == kind
                    && !(curr_kind == RunKind::Symbol && self.config.split_punctuation) => {},
                Some((curr_kind, start)) => {
                    result.push((curr_kind, &text[start..index]));
                    curr = kind.map(|k| (k, index));
                },
                None => {
                    curr = kind.map(|k| (k, index));
                },
            }
        }

        if let Some((curr_kind, start)) = curr {
            result.push((curr_kind, &text[start..]));
        }

        result
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

fn run_kind(ch: char) -> Option<RunKind> {
    if ch.is_whitespace() {
        None
    } else if ch.is_alphabetic() {
        Some(RunKind::Letter)
    } else if ch.is_numeric() {
        Some(RunKind::Digit)
    } else {
        Some(RunKind::Symbol)
    }
}

/// Strips Malay prefixes off the front of `word`, longest first, for as long
/// as something with a vowel is left behind. Returns them in order.
pub fn detect_prefixes(word: &str) -> Vec<&'static str> {
    let mut result = vec![];
    let mut rest = word;

    'outer: loop {
        for prefix in PREFIXES_BY_LENGTH.iter() {
            if let Some(remainder) = rest.strip_prefix(prefix) {
                if remainder.chars().any(is_vowel) {
                    result.push(*prefix);
                    rest = remainder;
                    continue 'outer;
                }
            }
        }

        break;
    }

    result
}

// "buatlah" -> ("buat", Some("lah"))
fn split_particle(word: &str) -> (&str, Option<&'static str>) {
    for particle in PARTICLES_BY_LENGTH.iter() {
        if let Some(stem) = word.strip_suffix(particle) {
            if stem.chars().any(is_vowel) {
                return (stem, Some(*particle));
            }
        }
    }

    (word, None)
}
