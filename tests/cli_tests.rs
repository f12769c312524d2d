//! CLI tests: run the `fingering` binary against temporary files.

use pretty_assertions::assert_eq;
use std::path::Path;
use std::process::Command;

fn fingering() -> Command {
    Command::new(env!("CARGO_BIN_EXE_fingering"))
}

fn replace_case(source: &str, expected: &str) {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("sample.md");
    std::fs::write(&file, source).unwrap();

    let output = fingering().arg("replace").arg(&file).output().unwrap();
    assert!(
        output.status.success(),
        "CLI failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(std::fs::read_to_string(&file).unwrap(), expected);
}

#[test]
fn replace_basic_russian_notes() {
    replace_case(
        "до ре ми",
        "![до](notes/do.svg) ![ре](notes/re.svg) ![ми](notes/mi.svg)",
    );
}

#[test]
fn replace_letters_and_upper_octave() {
    replace_case(
        "A B C# do2 re2 2ми",
        "![A](notes/la.svg) ![B](notes/si-.svg) ![C#](notes/do+.svg) \
         ![do2](notes/2do.svg) ![re2](notes/2re.svg) ![2ми](notes/2mi.svg)",
    );
}

#[test]
fn replace_mixed_with_punctuation() {
    replace_case(
        "ля.\nреb, 2до ре2",
        "![ля](notes/la.svg).\n![реb](notes/re-.svg), \
         ![2до](notes/2do.svg) ![ре2](notes/2re.svg)",
    );
}

#[test]
fn replace_with_custom_notes_dir() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("lesson.md");
    std::fs::write(&file, "# Урок\n\nСыграй соль, затем си.\n").unwrap();

    let status = fingering()
        .args(["replace", "--notes-dir", "img/ocarina"])
        .arg(&file)
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(
        std::fs::read_to_string(&file).unwrap(),
        "# Урок\n\nСыграй ![соль](img/ocarina/sol.svg), затем ![си](img/ocarina/si.svg).\n"
    );
}

#[test]
fn render_writes_svg_files() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("notes");
    let status = fingering().arg("render").arg("--out-dir").arg(&out).status().unwrap();
    assert!(status.success());

    let count = std::fs::read_dir(&out).unwrap().count();
    assert_eq!(count, 24);
    assert!(Path::new(&out.join("do+.svg")).exists());
}

#[test]
fn table_round_trips_through_custom_table() {
    let dir = tempfile::tempdir().unwrap();
    let table_path = dir.path().join("table.json");
    let output = fingering().arg("table").output().unwrap();
    assert!(output.status.success());
    std::fs::write(&table_path, &output.stdout).unwrap();

    let file = dir.path().join("sample.md");
    std::fs::write(&file, "до ре ми").unwrap();
    let status = fingering()
        .arg("--table")
        .arg(&table_path)
        .arg("replace")
        .arg(&file)
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(
        std::fs::read_to_string(&file).unwrap(),
        "![до](notes/do.svg) ![ре](notes/re.svg) ![ми](notes/mi.svg)"
    );
}

#[test]
fn corrupt_table_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let table_path = dir.path().join("table.json");
    std::fs::write(&table_path, r#"{"fingerings": {"do": "22"}, "labels": {"do": "до"}}"#).unwrap();
    let file = dir.path().join("sample.md");
    std::fs::write(&file, "до").unwrap();

    let output = fingering()
        .arg("--table")
        .arg(&table_path)
        .args(["replace"])
        .arg(&file)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid fingering pattern"));
    // Nothing substituted
    assert_eq!(std::fs::read_to_string(&file).unwrap(), "до");
}
