//! End-to-end tests: free text in, Markdown with fingering images out.

use fingerlib::{normalize, transform, transform_with, FingeringTable, Scanner};
use pretty_assertions::assert_eq;

fn builtin() -> &'static FingeringTable {
    FingeringTable::builtin().expect("built-in table should load")
}

// ─── Literal scenarios ──────────────────────────────────────────────

#[test]
fn basic_russian_notes() {
    assert_eq!(
        transform("до ре ми"),
        "![до](notes/do.svg) ![ре](notes/re.svg) ![ми](notes/mi.svg)"
    );
}

#[test]
fn letters_and_upper_octave() {
    assert_eq!(
        transform("A B C# do2 re2 2ми"),
        "![A](notes/la.svg) ![B](notes/si-.svg) ![C#](notes/do+.svg) \
         ![do2](notes/2do.svg) ![re2](notes/2re.svg) ![2ми](notes/2mi.svg)"
    );
}

#[test]
fn mixed_with_punctuation() {
    assert_eq!(
        transform("ля.\nреb, 2до ре2"),
        "![ля](notes/la.svg).\n![реb](notes/re-.svg), \
         ![2до](notes/2do.svg) ![ре2](notes/2re.svg)"
    );
}

#[test]
fn words_starting_with_a_syllable_are_unchanged() {
    let text = "Домра и ремень, миска, фантазия, солнце, ляпис, сигнал. Dolphins relax; Billy hums.";
    assert_eq!(transform(text), text);
}

// ─── Properties ─────────────────────────────────────────────────────

#[test]
fn every_table_key_has_a_surface_form() {
    let table = builtin();
    for entry in table.entries() {
        // Labels are the Russian name plus accidental glyph; upper notes need the octave digit.
        let surface = if entry.key.upper {
            format!("2{}", entry.label)
        } else {
            entry.label.clone()
        };
        let expected = format!("![{surface}](notes/{}.svg)", entry.key);
        assert_eq!(transform(&surface), expected, "surface form {surface:?}");
    }
}

#[test]
fn b_is_flat_and_h_is_natural() {
    assert_eq!(transform("B"), "![B](notes/si-.svg)");
    assert_eq!(transform("H"), "![H](notes/si.svg)");
    assert_eq!(transform("Hb"), "![Hb](notes/si-.svg)");
    assert_eq!(transform("Bb"), "![Bb](notes/si-.svg)");
}

#[test]
fn leading_and_trailing_octave_agree() {
    for (lead, trail) in [("2до", "до2"), ("2re", "re2"), ("2ми", "ми2"), ("2C", "C2")] {
        assert_eq!(normalize(lead, ""), normalize(trail, ""), "{lead} vs {trail}");
        assert_eq!(normalize(lead, "+"), normalize(trail, "+"), "{lead}+ vs {trail}+");
    }
    assert_eq!(transform("2до до2"), "![2до](notes/2do.svg) ![до2](notes/2do.svg)");
}

#[test]
fn second_pass_leaves_references_alone() {
    let once = transform("до, ре♯ и ми♭; Соль-ля (си) 2re- F G# Ab");
    assert_eq!(transform(&once), once);
}

#[test]
fn passthrough_is_byte_exact() {
    let text = "  «Фа»\t— это нота…\r\n\r\nа «фаб» — нет!  ";
    let out = transform(text);
    assert_eq!(out, "  «![Фа](notes/fa.svg)»\t— это нота…\r\n\r\nа «фаб» — нет!  ");
}

#[test]
fn all_accidental_spellings() {
    let cases = [
        ("до+", "do+"),
        ("до#", "do+"),
        ("до♯", "do+"),
        ("миb", "mi-"),
        ("ми♭", "mi-"),
        ("ми-", "mi-"),
    ];
    for (text, key) in cases {
        assert_eq!(transform(text), format!("![{text}](notes/{key}.svg)"));
    }
}

#[test]
fn out_of_range_notes_stay_text() {
    let text = "2фа 2соль E# 2си H# ми2♯ 2до2";
    assert_eq!(transform(text), text);
}

#[test]
fn custom_table_and_asset_dir() {
    let table = FingeringTable::from_json(
        r#"{"fingerings": {"2fa": "000000"}, "labels": {"2fa": "фа"}}"#,
    )
    .unwrap()
    .with_asset_dir("img");

    assert_eq!(transform_with(&table, "фа2 до"), "![фа2](img/2fa.svg) до");
    let (_, replaced) = Scanner::new(&table).transform_counted("2фа, 2fa; 2F!");
    assert_eq!(replaced, 3);
}
