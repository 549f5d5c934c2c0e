use crate::core::tables::{is_consonant, is_digraph, is_vowel};
use crate::core::types::{CharClass, ClassifiedUnit, ClassifiedWord};

/// Splits a lowercased word into vowel and consonant units.
pub struct CharacterClassifier;

impl CharacterClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Scans left to right, trying a digraph before a single letter.
    /// The units, concatenated, always give back `word`.
    pub fn classify(&self, word: &str) -> ClassifiedWord {
        let mut units = Vec::with_capacity(word.len());
        let mut chars = word.chars().peekable();

        while let Some(c) = chars.next() {
            if is_consonant(c) {
                if let Some(&next_c) = chars.peek() {
                    if is_digraph(c, next_c) {
                        chars.next();
                        units.push(ClassifiedUnit {
                            text: [c, next_c].iter().collect(),
                            class: CharClass::ConsonantDigraph,
                        });
                        continue;
                    }
                }

                units.push(ClassifiedUnit { text: c.to_string(), class: CharClass::ConsonantSingle });
            }

            else if is_vowel(c) {
                units.push(ClassifiedUnit { text: c.to_string(), class: CharClass::Vowel });
            }

            else {
                units.push(ClassifiedUnit { text: c.to_string(), class: CharClass::Other });
            }
        }

        ClassifiedWord {
            word: word.to_string(),
            units,
        }
    }
}

impl Default for CharacterClassifier {
    fn default() -> Self {
        Self::new()
    }
}
