use anyhow::Result;
use clap::Parser;

mod commands;
mod config;
mod logging;

use commands::config::ConfigAction;
use commands::transpose::TransposeArgs;
use config::Config;

/// Transpose the chords of a chord sheet by a number of semitones.
///
/// Lines made only of chords are rewritten in place, keeping the spacing
/// that lines the chords up with the lyrics. All other lines are copied
/// unchanged.
#[derive(Debug, Parser)]
#[command(
    name = "chordshift",
    version,
    about,
    args_conflicts_with_subcommands = true,
    subcommand_negates_reqs = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    transpose: TransposeArgs,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load()?;
    logging::init(&config.logging, cli.verbose)?;

    match cli.command {
        Some(Commands::Config { action }) => commands::run_config(action, &config)?,
        None => commands::run_transpose(cli.transpose, &config)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chordshift_core::Accidental;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_negative_interval() {
        let cli =
            Cli::try_parse_from(["chordshift", "in.txt", "out.txt", "-i", "-3", "-a", "b"])
                .unwrap();
        assert_eq!(cli.transpose.intervals, Some(-3));
        assert_eq!(cli.transpose.accidental, Some(Accidental::Flat));
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_rejects_bad_accidental() {
        let result = Cli::try_parse_from(["chordshift", "in.txt", "out.txt", "-i", "2", "-a", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_requires_paths() {
        assert!(Cli::try_parse_from(["chordshift", "-i", "2"]).is_err());
    }

    #[test]
    fn test_config_subcommand() {
        let cli = Cli::try_parse_from(["chordshift", "config", "path"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config { action: ConfigAction::Path })
        ));
    }
}
