//! Chromatic scale, enharmonic spelling tables, and accidental preference.
//!
//! The scale is spelled with sharps. Flat-spelled roots are normalised onto
//! it through [`FLAT_TO_SHARP`], and [`SHARP_TO_FLAT`] re-spells a result
//! when flats are wanted. The two tables are intentionally not inverses of
//! each other: `E#` and `B#` only appear on the sharp side.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Number of pitch classes in the chromatic scale.
pub const SEMITONES: usize = 12;

/// The chromatic scale in sharp spelling, indexed by pitch class.
pub const SCALE: [&str; SEMITONES] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Flat-spelled roots and their equivalent on [`SCALE`].
pub const FLAT_TO_SHARP: &[(&str, &str)] = &[
    ("Cb", "B"),
    ("Db", "C#"),
    ("Eb", "D#"),
    ("Fb", "E"),
    ("Gb", "F#"),
    ("Ab", "G#"),
    ("Bb", "A#"),
];

/// Sharp-spelled roots and the spelling used when flats are preferred.
pub const SHARP_TO_FLAT: &[(&str, &str)] = &[
    ("C#", "Db"),
    ("D#", "Eb"),
    ("E#", "F"),
    ("F#", "Gb"),
    ("G#", "Ab"),
    ("A#", "Bb"),
    ("B#", "C"),
];

/// Letters a chord root can start with.
pub const ROOT_LETTERS: [char; 7] = ['A', 'B', 'C', 'D', 'E', 'F', 'G'];

fn lookup(table: &[(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(from, _)| *from == key).map(|&(_, to)| to)
}

/// Sharp (or natural) equivalent of a flat-spelled root.
pub fn flat_to_sharp(root: &str) -> Option<&'static str> {
    lookup(FLAT_TO_SHARP, root)
}

/// Flat (or natural) equivalent of a sharp-spelled root.
pub fn sharp_to_flat(root: &str) -> Option<&'static str> {
    lookup(SHARP_TO_FLAT, root)
}

/// Position of a root spelled exactly as it appears on [`SCALE`].
pub fn scale_index(root: &str) -> Option<usize> {
    SCALE.iter().position(|&name| name == root)
}

/// Pitch class of any spelling known to the tables.
///
/// Unlike [`scale_index`] this also resolves flat spellings and the
/// sharp-only spellings `E#` and `B#`, so it can compare results that differ
/// only in enharmonic spelling.
#[cfg(test)]
pub(crate) fn pitch_class(root: &str) -> Option<usize> {
    scale_index(root)
        .or_else(|| flat_to_sharp(root).and_then(scale_index))
        .or_else(|| sharp_to_flat(root).and_then(scale_index))
}

/// Whether `c` can start a chord root.
pub fn is_root_letter(c: char) -> bool {
    ROOT_LETTERS.contains(&c)
}

/// Preferred accidental for transposed roots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Accidental {
    #[serde(rename = "#")]
    Sharp,
    #[serde(rename = "b")]
    Flat,
}

impl Accidental {
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Self::Sharp => '#',
            Self::Flat => 'b',
        }
    }
}

impl fmt::Display for Accidental {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Accidental {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "#" => Ok(Self::Sharp),
            "b" => Ok(Self::Flat),
            other => Err(Error::InvalidAccidental(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_has_twelve_distinct_names() {
        for (i, name) in SCALE.iter().enumerate() {
            assert_eq!(scale_index(name), Some(i));
        }
    }

    #[test]
    fn test_flat_to_sharp() {
        assert_eq!(flat_to_sharp("Bb"), Some("A#"));
        assert_eq!(flat_to_sharp("Cb"), Some("B"));
        assert_eq!(flat_to_sharp("C#"), None);
    }

    #[test]
    fn test_tables_are_asymmetric() {
        assert_eq!(sharp_to_flat("E#"), Some("F"));
        assert_eq!(sharp_to_flat("B#"), Some("C"));
        assert_eq!(flat_to_sharp("F"), None);
        assert_eq!(flat_to_sharp("C"), None);
    }

    #[test]
    fn test_pitch_class_resolves_every_spelling() {
        assert_eq!(pitch_class("C#"), Some(1));
        assert_eq!(pitch_class("Db"), Some(1));
        assert_eq!(pitch_class("Cb"), Some(11));
        assert_eq!(pitch_class("E#"), Some(5));
        assert_eq!(pitch_class("B#"), Some(0));
        assert_eq!(pitch_class("H"), None);
    }

    #[test]
    fn test_root_letters() {
        assert!(is_root_letter('A'));
        assert!(is_root_letter('G'));
        assert!(!is_root_letter('H'));
        assert!(!is_root_letter('c'));
    }

    #[test]
    fn test_accidental_from_str() {
        assert_eq!("#".parse::<Accidental>().unwrap(), Accidental::Sharp);
        assert_eq!("b".parse::<Accidental>().unwrap(), Accidental::Flat);
        assert!("x".parse::<Accidental>().is_err());
        assert!("bb".parse::<Accidental>().is_err());
        assert!("".parse::<Accidental>().is_err());
    }

    #[test]
    fn test_accidental_display() {
        assert_eq!(Accidental::Sharp.to_string(), "#");
        assert_eq!(Accidental::Flat.to_string(), "b");
    }
}
