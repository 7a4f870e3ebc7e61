//! Core chord transposition for chordshift.
//!
//! This crate holds the chromatic scale and enharmonic spelling tables, the
//! chord-symbol transposer, the chord-line classifier and rewriter, and the
//! streaming sheet transposer built on top of them.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod line;
pub mod note;
pub mod sheet;
pub mod transpose;

pub use error::{Error, Result};
pub use line::{is_chord_line, process_line, DetectionMode, RootPolicy};
pub use note::Accidental;
pub use sheet::{transpose_file, transpose_sheet, SheetStats};
pub use transpose::{transpose_chord, Transposer};
