// src/core/tables.rs
//
// Malay orthography tables, after Pedoman Umum Ejaan Bahasa Melayu (DBP)
// and Tatabahasa Dewan: five vowel letters, the consonant digraphs
// gh/kh/ng/ny/sy, and the diphthongs ai/au/oi.
use lazy_static::lazy_static;

pub const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

pub const CONSONANTS: [char; 21] = [
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n',
    'p', 'q', 'r', 's', 't', 'v', 'w', 'x', 'y', 'z',
];

// every entry is two letters; the classifier relies on that
pub const DIGRAPHS: [&str; 5] = ["gh", "kh", "ng", "ny", "sy"];

pub const DIPHTHONGS: [&str; 3] = ["ai", "au", "oi"];

pub const PREFIXES: [&str; 23] = [
    "ber", "ter", "se", "be", "ke", "pe", "mem", "men", "meng", "meny",
    "pem", "pen", "peng", "peny", "penge", "pel", "per", "juru",
    "dwi", "eka", "pasca", "pra", "swa",
];

pub const PARTICLES: [&str; 9] = ["lah", "kan", "je", "pun", "tu", "keh", "dik", "tau", "nak"];

lazy_static! {
    // longest first, so that "penge" wins over "peng" and "pe"
    pub static ref PREFIXES_BY_LENGTH: Vec<&'static str> = {
        let mut r = PREFIXES.to_vec();
        r.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        r
    };

    pub static ref PARTICLES_BY_LENGTH: Vec<&'static str> = {
        let mut r = PARTICLES.to_vec();
        r.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        r
    };
}

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

pub fn is_consonant(c: char) -> bool {
    CONSONANTS.contains(&c)
}

pub fn is_digraph(first: char, second: char) -> bool {
    DIGRAPHS.iter().any(|d| {
        let mut chars = d.chars();
        chars.next() == Some(first) && chars.next() == Some(second)
    })
}

pub fn is_diphthong(first: &str, second: &str) -> bool {
    if first.is_empty() || second.is_empty() {
        return false;
    }

    DIPHTHONGS.iter().any(|d| d.len() == first.len() + second.len() && d.starts_with(first) && d.ends_with(second))
}
