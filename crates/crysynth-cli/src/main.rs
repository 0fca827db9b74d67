//! crysynth CLI - renders synthetic infant-cry recordings
//!
//! This binary provides commands for rendering, validating, and listing
//! cry presets.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

// Use modules from the library crate
use crysynth_cli::{commands, logging};

/// crysynth - Synthetic cry generator
#[derive(Parser)]
#[command(name = "crysynth")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Show debug diagnostics on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render presets to WAV files
    Generate {
        /// Preset file (default: the built-in presets A, B, C, D)
        #[arg(short, long)]
        presets: Option<String>,

        /// Output directory (default: current directory)
        #[arg(short, long)]
        out_dir: Option<String>,

        /// Base seed, replacing the preset file's seed
        #[arg(short, long)]
        seed: Option<u32>,

        /// Render only this output id (repeatable)
        #[arg(long)]
        only: Vec<String>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Validate a preset file without rendering
    Validate {
        /// Path to the preset file
        #[arg(short, long)]
        presets: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the built-in presets as JSON
    Presets {
        /// Pretty-print the output JSON
        #[arg(short, long)]
        pretty: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Generate {
            presets,
            out_dir,
            seed,
            only,
            json,
        } => commands::generate::run(presets.as_deref(), out_dir.as_deref(), seed, &only, json),
        Commands::Validate { presets, json } => commands::validate::run(&presets, json),
        Commands::Presets { pretty } => commands::presets::run(pretty),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_generate_defaults() {
        let cli = Cli::try_parse_from(["crysynth", "generate"]).unwrap();
        match cli.command {
            Commands::Generate {
                presets,
                out_dir,
                seed,
                only,
                json,
            } => {
                assert!(presets.is_none());
                assert!(out_dir.is_none());
                assert!(seed.is_none());
                assert!(only.is_empty());
                assert!(!json);
            }
            _ => panic!("expected generate command"),
        }
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_parses_generate_with_options() {
        let cli = Cli::try_parse_from([
            "crysynth",
            "-v",
            "generate",
            "--presets",
            "cries.json",
            "--out-dir",
            "out",
            "--seed",
            "7",
            "--only",
            "A",
            "--only",
            "D",
            "--json",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Generate {
                presets,
                out_dir,
                seed,
                only,
                json,
            } => {
                assert_eq!(presets.as_deref(), Some("cries.json"));
                assert_eq!(out_dir.as_deref(), Some("out"));
                assert_eq!(seed, Some(7));
                assert_eq!(only, vec!["A".to_string(), "D".to_string()]);
                assert!(json);
            }
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_cli_validate_requires_presets() {
        assert!(Cli::try_parse_from(["crysynth", "validate"]).is_err());
    }

    #[test]
    fn test_cli_rejects_negative_seed() {
        assert!(Cli::try_parse_from(["crysynth", "generate", "--seed", "-1"]).is_err());
    }

    #[test]
    fn test_cli_parses_presets() {
        let cli = Cli::try_parse_from(["crysynth", "presets", "--pretty"]).unwrap();
        assert!(matches!(cli.command, Commands::Presets { pretty: true }));
    }
}
