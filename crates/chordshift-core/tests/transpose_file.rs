//! Integration tests for transposing chord sheets on disk.

use chordshift_core::{transpose_file, Accidental, DetectionMode, Error, RootPolicy, Transposer};
use std::fs;
use tempfile::TempDir;

const SHEET: &str = "\
[Verse 1]

G         G7        C      G
Amazing grace, how sweet the sound
G                    D
That saved a wretch like me
";

#[test]
fn test_transposes_sheet_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("grace.txt");
    let output = temp_dir.path().join("grace-a.txt");
    fs::write(&input, SHEET).unwrap();

    let stats = transpose_file(&input, &output, &Transposer::new(2)).unwrap();

    let expected = "\
[Verse 1]

A         A7        D      A
Amazing grace, how sweet the sound
A                    E
That saved a wretch like me
";
    assert_eq!(fs::read_to_string(&output).unwrap(), expected);
    assert_eq!(stats.lines, 6);
    assert_eq!(stats.chord_lines, 2);
    assert_eq!(stats.chords, 6);
}

/// A title made only of tone-letter words is mistaken for a chord line by
/// the default heuristic.
#[test]
fn test_title_line_heuristic_versus_strict() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("title.txt");
    let output = temp_dir.path().join("out.txt");
    fs::write(&input, "Amazing Grace\nG  C\n").unwrap();

    transpose_file(&input, &output, &Transposer::new(2)).unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), "Bmazing Arace\nA  D\n");

    let strict = Transposer::new(2).with_detection(DetectionMode::Strict);
    transpose_file(&input, &output, &strict).unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), "Amazing Grace\nA  D\n");
}

#[test]
fn test_overwrites_existing_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("in.txt");
    let output = temp_dir.path().join("out.txt");
    fs::write(&input, "C\n").unwrap();
    fs::write(&output, "previous contents that are much longer\n").unwrap();

    let sharp = Transposer::new(-1).with_accidental(Some(Accidental::Sharp));
    transpose_file(&input, &output, &sharp).unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), "B\n");
}

#[test]
fn test_failed_run_leaves_output_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("in.txt");
    let output = temp_dir.path().join("out.txt");
    fs::write(&input, "C G\nB# E\n").unwrap();
    fs::write(&output, "keep me\n").unwrap();

    let err = transpose_file(&input, &output, &Transposer::new(1)).unwrap_err();
    assert!(err.is_unrecognized_root());
    assert_eq!(fs::read_to_string(&output).unwrap(), "keep me\n");
}

#[test]
fn test_failed_run_does_not_create_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("in.txt");
    let output = temp_dir.path().join("out.txt");
    fs::write(&input, "E#\n").unwrap();

    assert!(transpose_file(&input, &output, &Transposer::new(1)).is_err());
    assert!(!output.exists());
}

#[test]
fn test_lenient_run_completes() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("in.txt");
    let output = temp_dir.path().join("out.txt");
    fs::write(&input, "C G\nB# E\n").unwrap();

    let lenient = Transposer::new(1).with_root_policy(RootPolicy::PassThrough);
    let stats = transpose_file(&input, &output, &lenient).unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), "C# G#\nB# E\n");
    assert_eq!(stats.skipped_lines, 1);
}

#[test]
fn test_missing_input_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("missing.txt");
    let output = temp_dir.path().join("out.txt");

    let err = transpose_file(&input, &output, &Transposer::new(1)).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    assert!(!output.exists());
}
