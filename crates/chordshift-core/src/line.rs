//! Chord-line classification and rewriting.
//!
//! A chord line is a line whose whitespace-separated tokens all look like
//! chords. Chord lines are rewritten token by token while the whitespace
//! between tokens is copied verbatim, so chords stay above the lyrics they
//! belong to. Every other line is passed through unchanged.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::error::Result;
use crate::note::{flat_to_sharp, is_root_letter, scale_index};
use crate::transpose::{split_root, Transposer};

/// How a line is recognised as a chord line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DetectionMode {
    /// Every token starts with a letter from A to G.
    ///
    /// Lyric lines made only of such words ("Cat", "Egg", "A") are taken
    /// for chord lines.
    #[default]
    Heuristic,
    /// Every token must be a recognised root followed by chord-quality text.
    Strict,
}

/// What happens to a chord line that holds an unrecognized root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RootPolicy {
    /// Fail the whole run.
    #[default]
    Abort,
    /// Copy the line unchanged and keep going.
    PassThrough,
}

/// Fragments allowed after the root of a chord in [`DetectionMode::Strict`].
///
/// Longer fragments come first so `maj` is not read as `m` + `aj`.
const QUALITY_FRAGMENTS: &[&str] = &[
    "maj", "min", "dim", "aug", "sus", "add", "m", "M", "+", "-", "#", "b", "(", ")", ",", "°",
    "ø", "Δ",
];

/// Split a line into its whitespace-separated tokens.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Whether `line` is a chord line under `mode`.
pub fn is_chord_line(line: &str, mode: DetectionMode) -> bool {
    let mut tokens = line.split_whitespace().peekable();
    if tokens.peek().is_none() {
        return false;
    }
    match mode {
        DetectionMode::Heuristic => {
            tokens.all(|token| token.chars().next().is_some_and(is_root_letter))
        }
        DetectionMode::Strict => tokens.all(is_chord_symbol),
    }
}

fn is_chord_symbol(token: &str) -> bool {
    token.split('/').all(|part| {
        let (root, suffix) = split_root(part);
        let known = scale_index(root).is_some() || flat_to_sharp(root).is_some();
        known && is_quality(suffix)
    })
}

fn is_quality(mut suffix: &str) -> bool {
    while !suffix.is_empty() {
        let digits = suffix.len() - suffix.trim_start_matches(|c: char| c.is_ascii_digit()).len();
        if digits > 0 {
            suffix = &suffix[digits..];
            continue;
        }
        match QUALITY_FRAGMENTS.iter().find(|fragment| suffix.starts_with(**fragment)) {
            Some(fragment) => suffix = &suffix[fragment.len()..],
            None => return false,
        }
    }
    true
}

/// Transpose every chord on `line`, or return it unchanged if it is not a
/// chord line.
///
/// Whitespace, including the line terminator, is copied as is. Each token
/// is replaced by its transposition, so columns only shift where a chord
/// changes length.
///
/// ```
/// use chordshift_core::{process_line, Transposer};
///
/// let t = Transposer::new(2);
/// assert_eq!(process_line("C       G\n", &t).unwrap(), "D       A\n");
/// assert_eq!(process_line("Hello world\n", &t).unwrap(), "Hello world\n");
/// ```
pub fn process_line(line: &str, transposer: &Transposer) -> Result<String> {
    if !is_chord_line(line, transposer.detection) {
        return Ok(line.to_string());
    }

    let mut tokens: VecDeque<&str> = tokenize(line).into();
    let mut output = String::with_capacity(line.len());
    let mut i = 0;

    while let Some(c) = line[i..].chars().next() {
        if c.is_whitespace() {
            output.push(c);
            i += c.len_utf8();
            continue;
        }
        let Some(chord) = tokens.pop_front() else {
            break;
        };
        output.push_str(&transposer.transpose_chord(chord)?);
        i += chord.len();
    }

    Ok(output)
}
