//! Note normalizer: raw (base, accidental) pair → canonical [`NoteKey`].
//!
//! Pure and table-free: octave digit stripping, base classification,
//! default accidental, explicit accidental folding, then key composition.
//! Range checking against the fingering table happens in
//! [`FingeringTable::resolve`](crate::table::FingeringTable::resolve).

use thiserror::Error;

use crate::model::*;

/// Why a candidate was not accepted as a note. Never surfaced to the user;
/// rejected candidates pass through as literal text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("octave digit misplaced in '{0}'")]
    MalformedOctave(String),

    #[error("'{0}' is not a note name")]
    UnknownBase(String),

    #[error("'{0}' is not an accidental")]
    UnknownAccidental(String),

    #[error("no fingering for {0}")]
    OutOfRange(NoteKey),
}

// Spelling → (family, syllable, default accidental). Letters are checked
// first, then Russian, then English.
pub(crate) const LATIN_LETTERS: [(&str, Syllable, Accidental); 8] = [
    ("a", Syllable::La, Accidental::Natural),
    ("b", Syllable::Si, Accidental::Flat),
    ("c", Syllable::Do, Accidental::Natural),
    ("d", Syllable::Re, Accidental::Natural),
    ("e", Syllable::Mi, Accidental::Natural),
    ("f", Syllable::Fa, Accidental::Natural),
    ("g", Syllable::Sol, Accidental::Natural),
    ("h", Syllable::Si, Accidental::Natural),
];

// Longer spellings precede their prefixes.
pub(crate) const RUSSIAN_SYLLABLES: [(&str, Syllable); 8] = [
    ("до", Syllable::Do),
    ("ре", Syllable::Re),
    ("ми", Syllable::Mi),
    ("фа", Syllable::Fa),
    ("соль", Syllable::Sol),
    ("сол", Syllable::Sol),
    ("ля", Syllable::La),
    ("си", Syllable::Si),
];

pub(crate) const ENGLISH_SYLLABLES: [(&str, Syllable); 7] = [
    ("do", Syllable::Do),
    ("re", Syllable::Re),
    ("mi", Syllable::Mi),
    ("fa", Syllable::Fa),
    ("sol", Syllable::Sol),
    ("la", Syllable::La),
    ("si", Syllable::Si),
];

/// Accidental characters accepted after a base, mapped to key markers.
pub(crate) const ACCIDENTAL_CHARS: [(char, &str); 6] = [
    ('+', "+"),
    ('#', "+"),
    ('♯', "+"),
    ('b', "-"),
    ('♭', "-"),
    ('-', "-"),
];

const OCTAVE_DIGIT: char = '2';

/// Classify a base spelling (octave digit already removed).
pub fn classify(base: &str) -> Option<(NamingFamily, Syllable, Accidental)> {
    let lower = base.to_lowercase();
    if let Some(&(_, syllable, default)) = LATIN_LETTERS.iter().find(|(s, ..)| *s == lower) {
        return Some((NamingFamily::LatinLetter, syllable, default));
    }
    if let Some(&(_, syllable)) = RUSSIAN_SYLLABLES.iter().find(|(s, _)| *s == lower) {
        return Some((NamingFamily::RussianSyllable, syllable, Accidental::Natural));
    }
    ENGLISH_SYLLABLES
        .iter()
        .find(|(s, _)| *s == lower)
        .map(|&(_, syllable)| (NamingFamily::EnglishSyllable, syllable, Accidental::Natural))
}

/// Normalize a raw token to its canonical key.
///
/// `base` may carry one octave digit on either edge; `accidental` is the
/// marker text that followed it ("" when absent). An explicit marker always
/// overrides the base's default accidental.
pub fn normalize(base: &str, accidental: &str) -> Result<NoteKey, Rejection> {
    let (upper, core) = strip_octave(base)?;
    let (_, syllable, default) =
        classify(core).ok_or_else(|| Rejection::UnknownBase(core.to_string()))?;

    let marker = if accidental.is_empty() {
        default.marker().to_string()
    } else {
        fold_accidental(accidental)?
    };

    let mut key = String::new();
    if upper {
        key.push_str(OCTAVE_MARKER);
    }
    key.push_str(syllable.as_str());
    key.push_str(&marker);
    let key = collapse_accidentals(key);

    // After collapsing, anything but a single marker (e.g. "++") is not a key.
    key.parse::<NoteKey>()
        .map_err(|_| Rejection::UnknownAccidental(accidental.to_string()))
}

/// Split off a single leading or trailing octave digit.
fn strip_octave(base: &str) -> Result<(bool, &str), Rejection> {
    let digits = base.chars().filter(|c| c.is_ascii_digit()).count();
    let malformed = || Rejection::MalformedOctave(base.to_string());
    match digits {
        0 => Ok((false, base)),
        1 => {
            if let Some(core) = base.strip_prefix(OCTAVE_DIGIT) {
                Ok((true, core))
            } else if let Some(core) = base.strip_suffix(OCTAVE_DIGIT) {
                Ok((true, core))
            } else {
                Err(malformed())
            }
        }
        _ => Err(malformed()),
    }
}

/// Map each accidental character to its key marker, in order.
fn fold_accidental(accidental: &str) -> Result<String, Rejection> {
    accidental
        .chars()
        .map(|c| {
            ACCIDENTAL_CHARS
                .iter()
                .find(|(ch, _)| *ch == c)
                .map(|&(_, marker)| marker)
                .ok_or_else(|| Rejection::UnknownAccidental(accidental.to_string()))
        })
        .collect()
}

/// Collapse adjacent sharp/flat markers until nothing changes: "+-" → "-",
/// "-+" → "+". The later marker wins.
///
/// Unreachable from scanned text, which carries at most one accidental
/// character; only direct multi-character markers hit it.
pub fn collapse_accidentals(mut key: String) -> String {
    loop {
        let next = key.replace("+-", "-").replace("-+", "+");
        if next == key {
            return key;
        }
        key = next;
    }
}
