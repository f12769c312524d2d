//! Data model for note keys, raw tokens and fingering entries.
//!
//! A canonical note key is the string `[2]<syllable>[+|-]`, e.g. `do`,
//! `re-`, `2do+`. It doubles as the diagram file stem.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the seven solfège base syllables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Syllable {
    Do,
    Re,
    Mi,
    Fa,
    Sol,
    La,
    Si,
}

impl Syllable {
    pub const ALL: [Syllable; 7] = [
        Syllable::Do,
        Syllable::Re,
        Syllable::Mi,
        Syllable::Fa,
        Syllable::Sol,
        Syllable::La,
        Syllable::Si,
    ];

    /// Canonical (English) spelling used inside note keys.
    pub fn as_str(self) -> &'static str {
        match self {
            Syllable::Do => "do",
            Syllable::Re => "re",
            Syllable::Mi => "mi",
            Syllable::Fa => "fa",
            Syllable::Sol => "sol",
            Syllable::La => "la",
            Syllable::Si => "si",
        }
    }
}

impl fmt::Display for Syllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accidental applied to a base syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accidental {
    #[default]
    Natural,
    Sharp,
    Flat,
}

impl Accidental {
    /// Marker used in canonical keys: "" / "+" / "-".
    pub fn marker(self) -> &'static str {
        match self {
            Accidental::Natural => "",
            Accidental::Sharp => "+",
            Accidental::Flat => "-",
        }
    }

    /// Inverse of [`Accidental::marker`].
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "" => Some(Accidental::Natural),
            "+" => Some(Accidental::Sharp),
            "-" => Some(Accidental::Flat),
            _ => None,
        }
    }
}

/// Canonical identity of one fingering / diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NoteKey {
    /// Upper register (written with a leading `2` in the key)
    pub upper: bool,
    pub syllable: Syllable,
    pub accidental: Accidental,
}

impl NoteKey {
    pub fn new(upper: bool, syllable: Syllable, accidental: Accidental) -> Self {
        Self {
            upper,
            syllable,
            accidental,
        }
    }
}

impl fmt::Display for NoteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.upper {
            f.write_str(OCTAVE_MARKER)?;
        }
        write!(f, "{}{}", self.syllable, self.accidental.marker())
    }
}

impl FromStr for NoteKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (upper, rest) = match s.strip_prefix(OCTAVE_MARKER) {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        for syllable in Syllable::ALL {
            if let Some(marker) = rest.strip_prefix(syllable.as_str()) {
                let accidental = Accidental::from_marker(marker)
                    .ok_or_else(|| format!("Invalid accidental marker '{marker}' in key '{s}'"))?;
                return Ok(NoteKey::new(upper, syllable, accidental));
            }
        }
        Err(format!("Not a canonical note key: '{s}'"))
    }
}

/// Literal digit marking the upper register, both in text and in keys.
pub const OCTAVE_MARKER: &str = "2";

/// State of one finger hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HoleState {
    Open,
    Half,
    Closed,
}

impl HoleState {
    /// Table source digit: 0 open, 1 half, 2 closed.
    pub fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '0' => Some(HoleState::Open),
            '1' => Some(HoleState::Half),
            '2' => Some(HoleState::Closed),
            _ => None,
        }
    }

    pub fn to_digit(self) -> char {
        match self {
            HoleState::Open => '0',
            HoleState::Half => '1',
            HoleState::Closed => '2',
        }
    }
}

/// Number of holes on the instrument: four upper, then two lower.
pub const HOLE_COUNT: usize = 6;

/// One row of the fingering table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FingeringEntry {
    pub key: NoteKey,
    /// Four upper holes left-to-right, then two lower holes left-to-right
    pub holes: [HoleState; HOLE_COUNT],
    /// Localized display label (e.g. "ре♭")
    pub label: String,
}

impl FingeringEntry {
    /// Pattern in table source form, e.g. "212222".
    pub fn pattern(&self) -> String {
        self.holes.iter().map(|h| h.to_digit()).collect()
    }
}

/// Notation family a base spelling belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NamingFamily {
    RussianSyllable,
    EnglishSyllable,
    /// A–H letters; B defaults to flat, H to natural
    LatinLetter,
}

/// A candidate note token as found in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawToken<'a> {
    /// Base spelling including any octave digit, as written
    pub base: &'a str,
    /// Accidental character, or "" when absent
    pub accidental: &'a str,
    /// Byte range of the whole token in the source text
    pub span: Range<usize>,
}

impl RawToken<'_> {
    /// The text as written, used as the image label.
    pub fn label(&self) -> String {
        format!("{}{}", self.base, self.accidental)
    }
}
