use anyhow::{bail, Context, Result};
use chordshift_core::{transpose_file, Accidental, DetectionMode, RootPolicy, Transposer};
use std::path::PathBuf;

use crate::config::Config;

/// Arguments of the default (transpose) command.
#[derive(Debug, Default, clap::Args)]
pub struct TransposeArgs {
    /// Input chord sheet
    #[arg(required = true)]
    pub input: Option<PathBuf>,

    /// Output file (created or overwritten)
    #[arg(required = true)]
    pub output: Option<PathBuf>,

    /// Number of semitones up or down (+/-) to transpose
    #[arg(short, long, allow_negative_numbers = true)]
    pub intervals: Option<i32>,

    /// `b` or `#` to prefer one accidental enharmonic over the other
    #[arg(short, long, value_parser = parse_accidental)]
    pub accidental: Option<Accidental>,

    /// Only treat lines whose words all look like chord symbols as chords
    #[arg(long)]
    pub strict: bool,

    /// Copy lines with unrecognized chord roots unchanged instead of failing
    #[arg(long)]
    pub lenient: bool,
}

fn parse_accidental(value: &str) -> std::result::Result<Accidental, String> {
    value
        .parse()
        .map_err(|_| String::from("accidental must either be 'b' or '#'"))
}

/// Combine command-line arguments with the loaded configuration.
///
/// Fails when no interval (or a zero interval) was given.
pub fn build_transposer(args: &TransposeArgs, config: &Config) -> Result<Transposer> {
    let semitones = match args.intervals {
        Some(n) if n != 0 => n,
        _ => bail!("Transpose intervals expected: pass a non-zero -i/--intervals"),
    };

    let detection = if args.strict {
        DetectionMode::Strict
    } else {
        config.detection
    };
    let policy = if args.lenient {
        RootPolicy::PassThrough
    } else {
        config.on_unrecognized
    };

    Ok(Transposer::new(semitones)
        .with_accidental(args.accidental.or(config.accidental))
        .with_detection(detection)
        .with_root_policy(policy))
}

pub fn run_transpose(args: TransposeArgs, config: &Config) -> Result<()> {
    let transposer = build_transposer(&args, config)?;

    let (Some(input), Some(output)) = (args.input, args.output) else {
        bail!("Both an input and an output path are required");
    };

    log::debug!(
        "Transposing {} by {} semitones (accidental: {}, detection: {:?}, on unrecognized: {:?})",
        input.display(),
        transposer.semitones,
        transposer.accidental.map_or_else(|| String::from("auto"), |a| a.to_string()),
        transposer.detection,
        transposer.on_unrecognized
    );

    let stats = transpose_file(&input, &output, &transposer)
        .with_context(|| format!("Failed to transpose {}", input.display()))?;

    if stats.skipped_lines > 0 {
        log::warn!(
            "{} chord line(s) with unrecognized roots were copied unchanged",
            stats.skipped_lines
        );
    }

    Ok(())
}
