//! Token scanner: finds note names in free text and swaps them for
//! fingering diagram references.
//!
//! Scanning is single-pass and left-to-right. At each word start the scanner
//! tries, in order: a leading octave `2` (then none), every syllable spelling
//! (Russian, then English, then Latin letters), a trailing `2` (then none),
//! an accidental character (then none). The first combination whose right
//! edge lands on a word boundary is the candidate. Once a candidate is
//! consumed, accepted or not, scanning resumes after it.

use crate::model::RawToken;
use crate::normalizer::{ACCIDENTAL_CHARS, ENGLISH_SYLLABLES, LATIN_LETTERS, RUSSIAN_SYLLABLES};
use crate::table::FingeringTable;

/// Characters that, like whitespace, delimit a note token.
pub const PUNCTUATION: [char; 14] = [
    '.', ',', ';', ':', '!', '?', '(', ')', '"', '\'', '«', '»', '…', '-',
];

const OCTAVE_DIGIT: char = '2';

/// Rewrites note mentions using one fingering table.
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'t> {
    table: &'t FingeringTable,
}

impl<'t> Scanner<'t> {
    pub fn new(table: &'t FingeringTable) -> Self {
        Self { table }
    }

    /// Replace every recognized note with `![label](asset-path)`.
    /// Text outside replaced spans is copied byte-for-byte.
    pub fn transform(&self, text: &str) -> String {
        self.transform_counted(text).0
    }

    /// Like [`Scanner::transform`], also returning how many notes were replaced.
    pub fn transform_counted(&self, text: &str) -> (String, usize) {
        let mut out = String::with_capacity(text.len());
        let mut copied = 0;
        let mut replaced = 0;

        for token in candidates(text) {
            match self.table.resolve(token.base, token.accidental) {
                Ok(path) => {
                    out.push_str(&text[copied..token.span.start]);
                    out.push_str(&image_reference(&token.label(), &path));
                    copied = token.span.end;
                    replaced += 1;
                }
                Err(reason) => {
                    log::debug!("Keeping '{}' at {:?} as text: {reason}", token.label(), token.span);
                }
            }
        }

        out.push_str(&text[copied..]);
        (out, replaced)
    }
}

/// Markdown image reference for a recognized note.
pub fn image_reference(label: &str, asset_path: &str) -> String {
    format!("![{label}]({asset_path})")
}

/// Iterate over candidate note tokens in `text`, without normalizing them.
pub fn candidates(text: &str) -> Candidates<'_> {
    Candidates { text, pos: 0 }
}

/// Iterator returned by [`candidates`].
#[derive(Debug, Clone)]
pub struct Candidates<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for Candidates<'a> {
    type Item = RawToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(c) = self.text[self.pos..].chars().next() {
            let pos = self.pos;
            if starts_word(self.text, pos) {
                if let Some(token) = match_at(self.text, pos) {
                    self.pos = token.span.end;
                    return Some(token);
                }
            }
            self.pos += c.len_utf8();
        }
        None
    }
}

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || PUNCTUATION.contains(&c)
}

fn starts_word(text: &str, pos: usize) -> bool {
    text[..pos].chars().next_back().map_or(true, is_delimiter)
}

fn ends_word(text: &str, pos: usize) -> bool {
    text[pos..].chars().next().map_or(true, is_delimiter)
}

fn spellings() -> impl Iterator<Item = &'static str> {
    RUSSIAN_SYLLABLES
        .iter()
        .map(|(s, _)| *s)
        .chain(ENGLISH_SYLLABLES.iter().map(|(s, _)| *s))
        .chain(LATIN_LETTERS.iter().map(|(s, ..)| *s))
}

/// First candidate at `pos` whose right edge lands on a word boundary.
fn match_at(text: &str, pos: usize) -> Option<RawToken<'_>> {
    let rest = &text[pos..];
    let leads: &[usize] = if rest.starts_with(OCTAVE_DIGIT) { &[1, 0] } else { &[0] };

    for &lead in leads {
        for spelling in spellings() {
            let Some(word_len) = prefix_len_ignore_case(&rest[lead..], spelling) else {
                continue;
            };
            let word_end = lead + word_len;
            let trails: &[usize] = if rest[word_end..].starts_with(OCTAVE_DIGIT) {
                &[1, 0]
            } else {
                &[0]
            };

            for &trail in trails {
                let base_end = word_end + trail;
                let acc_len = rest[base_end..]
                    .chars()
                    .next()
                    .filter(|c| ACCIDENTAL_CHARS.iter().any(|(a, _)| a == c))
                    .map_or(0, char::len_utf8);

                let acc_options: &[usize] = if acc_len > 0 { &[1, 0] } else { &[0] };
                for &with_acc in acc_options {
                    let end = base_end + with_acc * acc_len;
                    if ends_word(text, pos + end) {
                        return Some(RawToken {
                            base: &rest[..base_end],
                            accidental: &rest[base_end..end],
                            span: pos..pos + end,
                        });
                    }
                }
            }
        }
    }
    None
}

/// Byte length of the prefix of `text` equal to `spelling` ignoring case.
/// `spelling` is lowercase.
fn prefix_len_ignore_case(text: &str, spelling: &str) -> Option<usize> {
    let mut chars = text.char_indices();
    for expected in spelling.chars() {
        let (_, c) = chars.next()?;
        if c != expected && !c.to_lowercase().eq(std::iter::once(expected)) {
            return None;
        }
    }
    Some(chars.next().map_or(text.len(), |(i, _)| i))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn spans(text: &str) -> Vec<(&str, &str)> {
        candidates(text).map(|t| (t.base, t.accidental)).collect()
    }

    fn transform(text: &str) -> String {
        Scanner::new(FingeringTable::builtin().unwrap()).transform(text)
    }

    #[test]
    fn finds_candidates_between_delimiters() {
        assert_eq!(
            spans("до, ре-ми (Соль) «la»… H"),
            vec![("до", ""), ("ре", ""), ("ми", ""), ("Соль", ""), ("la", ""), ("H", "")]
        );
    }

    #[test]
    fn accidental_before_boundary() {
        assert_eq!(spans("ре- реb C# E♭ ре+"), vec![
            ("ре", "-"),
            ("ре", "b"),
            ("C", "#"),
            ("E", "♭"),
            ("ре", "+"),
        ]);
    }

    #[test]
    fn hyphen_falls_back_to_delimiter() {
        // "-" directly before a letter cannot be an accidental
        assert_eq!(spans("до-ре"), vec![("до", ""), ("ре", "")]);
        assert_eq!(transform("до-ре"), "![до](notes/do.svg)-![ре](notes/re.svg)");
    }

    #[test]
    fn octave_digit_placement() {
        assert_eq!(spans("2до до2 2до2"), vec![("2до", ""), ("до2", ""), ("2до2", "")]);
        assert_eq!(spans("12до до21 д2о"), Vec::<(&str, &str)>::new());
    }

    #[test]
    fn longest_syllable_wins() {
        assert_eq!(spans("соль сол"), vec![("соль", ""), ("сол", "")]);
        assert_eq!(spans("Do D"), vec![("Do", ""), ("D", "")]);
    }

    #[test]
    fn embedded_syllables_ignored() {
        for word in ["доска", "ремонт", "minor", "sold", "сила", "Ab1", "x-do2x", "CD", "лягушка"] {
            assert_eq!(transform(word), word);
        }
    }

    #[test]
    fn spans_are_byte_offsets() {
        let text = "ля, ре♯";
        let tokens: Vec<_> = candidates(text).collect();
        assert_eq!(tokens[0].span, 0..4);
        assert_eq!(&text[tokens[1].span.clone()], "ре♯");
    }

    #[test]
    fn rejected_candidates_pass_through() {
        // Well-formed but outside the instrument range, or double octave
        assert_eq!(transform("фа2 2до2 E#"), "фа2 2до2 E#");
    }

    #[test]
    fn counts_replacements() {
        let table = FingeringTable::builtin().unwrap();
        let (out, count) = Scanner::new(table).transform_counted("до и ре, но не фа2");
        assert_eq!(count, 2);
        assert_eq!(out, "![до](notes/do.svg) и ![ре](notes/re.svg), но не фа2");
    }

    #[test]
    fn image_references_do_not_rematch() {
        let once = transform("A B C# do2 re2 2ми ля♭ соль+");
        assert_eq!(transform(&once), once);
    }
}
