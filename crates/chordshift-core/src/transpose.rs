//! Chord symbol transposition.
//!
//! A chord symbol is a root (`C`, `F#`, `Bb`, ...) followed by a suffix that
//! is carried over untouched (`m7`, `sus4`, `maj9`). Slash chords such as
//! `C/E` have both sides transposed.

use crate::error::{Error, Result};
use crate::line::{DetectionMode, RootPolicy};
use crate::note::{flat_to_sharp, scale_index, sharp_to_flat, Accidental, SCALE, SEMITONES};

/// Transpose a chord symbol (or slash chord) by `semitones`.
///
/// With no `accidental` preference the result follows the input's spelling:
/// flat-spelled roots stay flat, and downward transpositions prefer flats.
/// Only the first matching rule re-spells the root: `Gb` up 2 normalises to
/// `F#`, lands on `G#`, and is re-spelled once as `Ab`. A two-pass rule that
/// let the upward bias run after the flat re-spelling would give `G#`.
///
/// # Examples
///
/// ```
/// use chordshift_core::{transpose_chord, Accidental};
///
/// assert_eq!(transpose_chord("Am7", 2, None).unwrap(), "Bm7");
/// assert_eq!(transpose_chord("C/E", 2, None).unwrap(), "D/F#");
/// assert_eq!(transpose_chord("C", 1, Some(Accidental::Flat)).unwrap(), "Db");
/// ```
pub fn transpose_chord(
    chord: &str,
    semitones: i32,
    accidental: Option<Accidental>,
) -> Result<String> {
    match chord.split_once('/') {
        Some((upper, bass)) => Ok(format!(
            "{}/{}",
            transpose_single(upper, semitones, accidental)?,
            transpose_single(bass, semitones, accidental)?
        )),
        None => transpose_single(chord, semitones, accidental),
    }
}

/// Split a chord symbol into its root and suffix.
///
/// The root is the first character, plus the second one when it is `#` or
/// `b`.
pub fn split_root(chord: &str) -> (&str, &str) {
    let mut chars = chord.char_indices();
    if chars.next().is_none() {
        return ("", "");
    }
    let end = match chars.next() {
        Some((i, c)) if c == '#' || c == 'b' => i + c.len_utf8(),
        Some((i, _)) => i,
        None => chord.len(),
    };
    chord.split_at(end)
}

fn transpose_single(chord: &str, semitones: i32, accidental: Option<Accidental>) -> Result<String> {
    let (root, suffix) = split_root(chord);

    let (root, swapped) = match flat_to_sharp(root) {
        Some(sharp) => (sharp, true),
        None => (root, false),
    };

    let position = scale_index(root).ok_or_else(|| Error::UnrecognizedRoot {
        chord: chord.to_string(),
    })?;
    let shift = semitones.rem_euclid(SEMITONES as i32).unsigned_abs() as usize;
    let new_root = SCALE[(position + shift) % SEMITONES];

    let respelled = match accidental {
        Some(Accidental::Sharp) => flat_to_sharp(new_root),
        Some(Accidental::Flat) => sharp_to_flat(new_root),
        None if swapped && sharp_to_flat(new_root).is_some() => sharp_to_flat(new_root),
        None if semitones < 0 => sharp_to_flat(new_root),
        None if semitones > 0 => flat_to_sharp(new_root),
        None => None,
    };

    Ok(format!("{}{}", respelled.unwrap_or(new_root), suffix))
}

/// Settings for one transposition run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transposer {
    /// Signed semitone offset.
    pub semitones: i32,
    /// Spelling preference for every transposed root.
    pub accidental: Option<Accidental>,
    /// How chord lines are told apart from lyric lines.
    pub detection: DetectionMode,
    /// What to do with a chord line holding an unrecognized root.
    pub on_unrecognized: RootPolicy,
}

impl Transposer {
    #[must_use]
    pub fn new(semitones: i32) -> Self {
        Self {
            semitones,
            accidental: None,
            detection: DetectionMode::default(),
            on_unrecognized: RootPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_accidental(mut self, accidental: Option<Accidental>) -> Self {
        self.accidental = accidental;
        self
    }

    #[must_use]
    pub fn with_detection(mut self, detection: DetectionMode) -> Self {
        self.detection = detection;
        self
    }

    #[must_use]
    pub fn with_root_policy(mut self, policy: RootPolicy) -> Self {
        self.on_unrecognized = policy;
        self
    }

    /// Transpose one chord symbol with these settings.
    pub fn transpose_chord(&self, chord: &str) -> Result<String> {
        transpose_chord(chord, self.semitones, self.accidental)
    }
}
