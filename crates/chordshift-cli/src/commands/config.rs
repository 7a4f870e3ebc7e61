use anyhow::Result;

use crate::config::{self, Config};

/// Subcommands of `chordshift config`.
#[derive(Debug, clap::Subcommand)]
pub enum ConfigAction {
    /// Show the current effective configuration
    Show,
    /// Show the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file with defaults
    Init,
}

pub fn run_config(action: ConfigAction, config: &Config) -> Result<()> {
    match action {
        ConfigAction::Show => show_config(config),
        ConfigAction::Path => show_path(),
        ConfigAction::Example => show_example(),
        ConfigAction::Init => init_config(),
    }
}

/// Show the current effective configuration.
fn show_config(config: &Config) -> Result<()> {
    println!("Current Configuration");
    println!("=====================\n");

    let config_path = config::config_file_path();
    println!("Config file: {}", config_path.display());

    let exists = config_path.exists();
    println!("File exists: {}\n", if exists { "yes" } else { "no (using defaults)" });

    println!("Settings:");
    println!(
        "  accidental: {}",
        config.accidental.map_or_else(|| String::from("<not set>"), |a| a.to_string())
    );
    println!("  detection: {:?}", config.detection);
    println!("  on_unrecognized: {:?}", config.on_unrecognized);
    println!("  logging.level: {}", config.logging.level);
    println!("  logging.coloured: {}", config.logging.coloured);

    println!("\nPriority: CLI args > ENV vars (CHORDSHIFT_*) > Config file > Defaults");

    Ok(())
}

/// Show the config file path.
fn show_path() -> Result<()> {
    println!("{}", config::config_file_path().display());
    Ok(())
}

/// Show example configuration.
fn show_example() -> Result<()> {
    print!("{}", config::example_config());
    Ok(())
}

/// Initialize config file with defaults.
fn init_config() -> Result<()> {
    let created = config::ensure_config_file()?;
    let config_path = config::config_file_path();

    if created {
        println!("✓ Created config file: {}", config_path.display());
        println!("\nEdit this file to configure chordshift.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}
