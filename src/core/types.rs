// src/core/types.rs

/// A dense identifier for a token inside a `Vocabulary`.
pub type TokenId = u32;

/// Phonological class of one classified unit of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Vowel,
    /// Two letters acting as one consonant phoneme, e.g. "ng" or "sy".
    ConsonantDigraph,
    ConsonantSingle,
    /// Anything outside the Malay letter set. Never produced for pre-filtered input.
    Other,
}

impl CharClass {
    pub fn is_vowel(self) -> bool {
        self == CharClass::Vowel
    }

    pub fn is_consonant(self) -> bool {
        matches!(self, CharClass::ConsonantDigraph | CharClass::ConsonantSingle)
    }
}

/// One classified slice of a word. A digraph spans two source characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedUnit {
    pub text: String,
    pub class: CharClass,
}

/// A word together with its classified form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedWord {
    pub word: String,
    pub units: Vec<ClassifiedUnit>,
}

impl ClassifiedWord {
    pub fn has_vowel(&self) -> bool {
        self.units.iter().any(|unit| unit.class.is_vowel())
    }
}

/// Advisory onset/nucleus/coda split of a syllable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyllableStructure {
    pub onset: String,
    pub nucleus: String,
    pub coda: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syllable {
    pub text: String,
    pub structure: SyllableStructure,
}

impl Syllable {
    pub fn is_open(&self) -> bool {
        self.structure.coda.is_empty()
    }
}

/// What a token was produced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Syllable,
    /// Punctuation, digit runs, and words that could not be segmented.
    Literal,
    /// `[PREFIX=...]` markers.
    PrefixMarker,
    /// A discourse particle detached from the end of a word.
    Particle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
}

impl Token {
    pub fn new(text: impl Into<String>, kind: TokenKind) -> Self {
        Self { text: text.into(), kind }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}
