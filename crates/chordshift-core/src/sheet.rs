//! Whole chord sheets: stream a sheet line by line through the rewriter.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::line::{is_chord_line, process_line, tokenize, RootPolicy};
use crate::transpose::Transposer;

/// Counters collected while transposing a sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SheetStats {
    /// Lines read.
    pub lines: usize,
    /// Lines rewritten as chord lines.
    pub chord_lines: usize,
    /// Chords transposed.
    pub chords: usize,
    /// Chord lines copied unchanged because of an unrecognized root.
    pub skipped_lines: usize,
}

/// Transpose every chord line read from `reader` into `writer`.
///
/// Lines keep their terminators, so the output has exactly as many lines as
/// the input and a missing final newline stays missing. Failures are
/// reported with their 1-based line number.
pub fn transpose_sheet<R, W>(
    mut reader: R,
    mut writer: W,
    transposer: &Transposer,
) -> Result<SheetStats>
where
    R: BufRead,
    W: Write,
{
    let mut stats = SheetStats::default();
    let mut line = String::new();

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        stats.lines += 1;

        if !is_chord_line(&line, transposer.detection) {
            writer.write_all(line.as_bytes())?;
            continue;
        }

        match process_line(&line, transposer) {
            Ok(rewritten) => {
                stats.chord_lines += 1;
                stats.chords += tokenize(&line).len();
                log::debug!(
                    "line {}: {:?} -> {:?}",
                    stats.lines,
                    line.trim_end(),
                    rewritten.trim_end()
                );
                writer.write_all(rewritten.as_bytes())?;
            }
            Err(e)
                if e.is_unrecognized_root()
                    && transposer.on_unrecognized == RootPolicy::PassThrough =>
            {
                log::warn!("line {}: {}, copying it unchanged", stats.lines, e);
                stats.skipped_lines += 1;
                writer.write_all(line.as_bytes())?;
            }
            Err(e) => {
                return Err(Error::Line {
                    line: stats.lines,
                    source: Box::new(e),
                });
            }
        }
    }

    writer.flush()?;
    Ok(stats)
}

/// Transpose the sheet at `input` and write the result to `output`.
///
/// The output file is only created (or truncated) once the whole sheet has
/// been transposed, so a failure part way through leaves it untouched.
pub fn transpose_file(input: &Path, output: &Path, transposer: &Transposer) -> Result<SheetStats> {
    let reader = BufReader::new(File::open(input)?);
    let mut buffer = Vec::new();
    let stats = transpose_sheet(reader, &mut buffer, transposer)?;

    fs::write(output, buffer)?;
    log::info!(
        "Transposed {} chords on {} of {} lines by {} semitones: {} -> {}",
        stats.chords,
        stats.chord_lines,
        stats.lines,
        transposer.semitones,
        input.display(),
        output.display()
    );

    Ok(stats)
}
