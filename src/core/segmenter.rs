use crate::core::tables::is_diphthong;
use crate::core::types::{CharClass, ClassifiedUnit, ClassifiedWord, Syllable, SyllableStructure};
use crate::error::{Result, SukaError};
use std::ops::Range;

/// Most consonant units a non-initial onset may hold.
const MAX_ONSET: usize = 2;

/// Cuts a classified word into syllables following the Malay template
/// (C)(C)V(V)(C): onset, nucleus, coda.
pub struct SyllableSegmenter;

impl SyllableSegmenter {
    pub fn new() -> Self {
        Self
    }

    /// Syllables come back in order and concatenate to `classified.word`.
    pub fn segment(&self, classified: &ClassifiedWord) -> Result<Vec<Syllable>> {
        let units = &classified.units;

        if let Some(unit) = units.iter().find(|u| u.class == CharClass::Other) {
            return Err(SukaError::InvalidCharacter {
                ch: unit.text.chars().next().unwrap_or_default(),
                word: classified.word.clone(),
            });
        }

        let nuclei = find_nuclei(units);

        if nuclei.is_empty() {
            return Err(SukaError::NoNucleusFound { word: classified.word.clone() });
        }

        // index of the first unit of each syllable
        let mut starts = Vec::with_capacity(nuclei.len());
        starts.push(0);

        for pair in nuclei.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            let between = next.start - prev.end;

            let start = match between {
                // hiatus
                0 => next.start,

                // a lone consonant opens the next syllable
                1 => prev.end,

                // first consonant(s) close this syllable, up to two open the next
                _ => next.start - (between - 1).min(MAX_ONSET),
            };

            starts.push(start);
        }

        let mut result = Vec::with_capacity(nuclei.len());

        for (i, nucleus) in nuclei.iter().enumerate() {
            let start = starts[i];
            let end = starts.get(i + 1).copied().unwrap_or(units.len());

            result.push(Syllable {
                text: join(&units[start..end]),
                structure: SyllableStructure {
                    onset: join(&units[start..nucleus.start]),
                    nucleus: join(&units[nucleus.clone()]),
                    coda: join(&units[nucleus.end..end]),
                },
            });
        }

        Ok(result)
    }
}

impl Default for SyllableSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

// A vowel followed by a vowel is one nucleus only if the pair is a known diphthong.
fn find_nuclei(units: &[ClassifiedUnit]) -> Vec<Range<usize>> {
    let mut result = vec![];
    let mut i = 0;

    while i < units.len() {
        if !units[i].class.is_vowel() {
            i += 1;
            continue;
        }

        let len = match units.get(i + 1) {
            Some(next) if next.class.is_vowel() && is_diphthong(&units[i].text, &next.text) => 2,
            _ => 1,
        };

        result.push(i..(i + len));
        i += len;
    }

    result
}

fn join(units: &[ClassifiedUnit]) -> String {
    units.iter().map(|u| u.text.as_str()).collect()
}
