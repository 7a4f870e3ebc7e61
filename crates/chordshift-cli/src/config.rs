use anyhow::{Context, Result};
use chordshift_core::{Accidental, DetectionMode, RootPolicy};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for chordshift.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (CHORDSHIFT_* prefix)
/// 3. Config file (~/.config/chordshift/config.toml)
/// 4. Built-in defaults (lowest priority)
///
/// The number of semitones is never read from here; it has to be given on
/// the command line for every run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Preferred accidental for transposed roots, `"#"` or `"b"`.
    ///
    /// Can be set via:
    /// - CLI: -a/--accidental
    /// - ENV: CHORDSHIFT_ACCIDENTAL
    /// - Config: accidental = "b"
    pub accidental: Option<Accidental>,

    /// Chord-line detection, `"heuristic"` or `"strict"`.
    ///
    /// Can be set via:
    /// - CLI: --strict
    /// - ENV: CHORDSHIFT_DETECTION
    /// - Config: detection = "strict"
    pub detection: DetectionMode,

    /// Handling of chord lines with an unrecognized root, `"abort"` or
    /// `"pass-through"`.
    ///
    /// Can be set via:
    /// - CLI: --lenient
    /// - ENV: CHORDSHIFT_ON_UNRECOGNIZED
    /// - Config: on_unrecognized = "pass-through"
    pub on_unrecognized: RootPolicy,

    /// Logger settings.
    pub logging: LoggingConfig,
}

/// The `[logging]` section of the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    pub level: String,
    /// Colour the log output.
    pub coloured: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            coloured: true,
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/chordshift/config.toml
    /// Reads environment variables with CHORDSHIFT_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new()
            .context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path.to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder.add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("chordshift");
        builder.add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build()
            .context("Failed to build configuration")?;

        Ok(config)
    }
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/chordshift/config.toml
/// - macOS: ~/Library/Application Support/chordshift/config.toml
/// - Windows: %APPDATA%\chordshift\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("chordshift")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r##"# Chordshift Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (CHORDSHIFT_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)
#
# The number of semitones is always given on the command line (-i/--intervals).

# Preferred accidental for transposed chords: "#" or "b"
#
# Leave unset to follow the spelling of each chord: flat chords stay flat and
# transposing down prefers flats.
#
# Can also be set via:
# - CLI: chordshift -a b in.txt out.txt -i 3
# - Environment: CHORDSHIFT_ACCIDENTAL=b
#accidental = "b"

# How chord lines are recognized: "heuristic" or "strict"
#
# "heuristic" treats every line whose words all start with A-G as chords.
# "strict" also requires each word to look like a chord symbol, so lyric
# lines such as "Cat in the hat" are left alone.
detection = "heuristic"

# What to do with a chord line containing an unknown root (such as E#):
# "abort" stops the run, "pass-through" copies the line and logs a warning.
on_unrecognized = "abort"

[logging]
# One of: trace, debug, info, warn, error
level = "info"
coloured = true
"##
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config())
        .context("Failed to write config file")?;

    Ok(true)
}
