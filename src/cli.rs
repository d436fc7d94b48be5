//! Command-line interface for releve
//!
//! Provides argument parsing using clap derive macros.

use crate::export::ExportFormat;
use crate::lexicon::Language;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Turn dictated survey notes into a room inventory
#[derive(Parser, Debug)]
#[command(
    name = "releve",
    version,
    about = "Turn dictated survey notes into a room inventory"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Dictation language (fr, en). Overrides the configuration
    #[arg(long, global = true, value_name = "LANG")]
    pub language: Option<Language>,

    /// Suppress output (quiet mode)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose output (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Echo window for repeated fragments. Examples: 2s, 1500ms
    #[arg(long, global = true, value_name = "DURATION", value_parser = parse_window_ms)]
    pub echo_window: Option<u64>,
}

/// Parse a duration string into milliseconds.
///
/// Bare numbers are milliseconds; anything else goes through `humantime`
/// (`2s`, `1500ms`, `1m`).
fn parse_window_ms(s: &str) -> Result<u64, String> {
    let s = s.trim();
    if let Ok(ms) = s.parse::<u64>() {
        return Ok(ms);
    }
    humantime::parse_duration(s)
        .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
        .map_err(|e| e.to_string())
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interpret a transcript and print location and rooms
    Parse {
        /// Transcript text (reads stdin when omitted)
        text: Option<String>,

        /// Read the transcript from a file
        #[arg(long, short = 'f', value_name = "PATH", conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interpret a transcript and append its rows to the inventory
    Add {
        /// Transcript text (reads stdin when omitted)
        text: Option<String>,

        /// Inventory store (default: configured or data directory)
        #[arg(long, value_name = "PATH")]
        store: Option<PathBuf>,
    },

    /// Replay a recognition feed log (JSON lines) through a dictation session
    Replay {
        /// Feed log, one event per line
        log: PathBuf,

        /// Append the resulting rows to this inventory store
        #[arg(long, value_name = "PATH")]
        store: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export the inventory as CSV or JSON
    Export {
        /// Inventory store (default: configured or data directory)
        #[arg(long, value_name = "PATH")]
        store: Option<PathBuf>,

        /// Output format (default: configured format)
        #[arg(long, value_name = "FORMAT")]
        format: Option<ExportFormat>,

        /// Write to a file instead of stdout
        #[arg(long, short = 'o', value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// List inventory rows with their indices
    Rows {
        /// Inventory store (default: configured or data directory)
        #[arg(long, value_name = "PATH")]
        store: Option<PathBuf>,
    },

    /// Remove one inventory row
    Remove {
        /// Row index as shown by `releve rows`
        index: usize,

        /// Inventory store (default: configured or data directory)
        #[arg(long, value_name = "PATH")]
        store: Option<PathBuf>,
    },

    /// Remove every inventory row
    Reset {
        /// Inventory store (default: configured or data directory)
        #[arg(long, value_name = "PATH")]
        store: Option<PathBuf>,
    },

    /// Inspect configuration
    Config {
        /// Action to perform
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Configuration actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print one value by dotted key (e.g. session.echo_window_ms)
    Get {
        /// Dotted configuration key
        key: String,
    },

    /// List effective settings, one `key = value` per line
    List,

    /// Print the effective configuration as TOML
    Dump,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_with_text() {
        let cli = Cli::try_parse_from(["releve", "parse", "une cuisine"]).unwrap();
        match cli.command {
            Commands::Parse { text, file, json } => {
                assert_eq!(text.as_deref(), Some("une cuisine"));
                assert!(file.is_none());
                assert!(!json);
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert!(!cli.quiet);
        assert_eq!(cli.verbose, 0);
        assert!(cli.config.is_none());
        assert!(cli.language.is_none());
        assert!(cli.echo_window.is_none());
    }

    #[test]
    fn test_parse_text_and_file_conflict() {
        let result = Cli::try_parse_from(["releve", "parse", "cuisine", "--file", "notes.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_command_is_required() {
        assert!(Cli::try_parse_from(["releve"]).is_err());
    }

    #[test]
    fn test_parse_verbose_count() {
        let cli = Cli::try_parse_from(["releve", "-vv", "rows"]).unwrap();
        assert_eq!(cli.verbose, 2);
        let cli = Cli::try_parse_from(["releve", "rows", "-v", "-v", "-v"]).unwrap();
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_global_options_after_command() {
        let cli = Cli::try_parse_from([
            "releve",
            "parse",
            "kitchen",
            "--language",
            "en",
            "--config",
            "/tmp/releve.toml",
            "-q",
        ])
        .unwrap();
        assert_eq!(cli.language, Some(Language::En));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/releve.toml")));
        assert!(cli.quiet);
    }

    #[test]
    fn test_unknown_language_rejected() {
        assert!(Cli::try_parse_from(["releve", "--language", "xx", "rows"]).is_err());
    }

    #[test]
    fn test_echo_window_durations() {
        let cli = Cli::try_parse_from(["releve", "--echo-window", "2s", "rows"]).unwrap();
        assert_eq!(cli.echo_window, Some(2000));
        let cli = Cli::try_parse_from(["releve", "--echo-window", "1500ms", "rows"]).unwrap();
        assert_eq!(cli.echo_window, Some(1500));
        let cli = Cli::try_parse_from(["releve", "--echo-window", "750", "rows"]).unwrap();
        assert_eq!(cli.echo_window, Some(750));
        assert!(Cli::try_parse_from(["releve", "--echo-window", "soon", "rows"]).is_err());
    }

    #[test]
    fn test_export_options() {
        let cli = Cli::try_parse_from([
            "releve", "export", "--format", "json", "-o", "out.json", "--store", "rows.json",
        ])
        .unwrap();
        match cli.command {
            Commands::Export {
                store,
                format,
                output,
            } => {
                assert_eq!(store, Some(PathBuf::from("rows.json")));
                assert_eq!(format, Some(ExportFormat::Json));
                assert_eq!(output, Some(PathBuf::from("out.json")));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_replay_requires_log() {
        assert!(Cli::try_parse_from(["releve", "replay"]).is_err());
        let cli = Cli::try_parse_from(["releve", "replay", "feed.jsonl", "--json"]).unwrap();
        assert!(matches!(cli.command, Commands::Replay { json: true, .. }));
    }

    #[test]
    fn test_remove_requires_numeric_index() {
        assert!(Cli::try_parse_from(["releve", "remove", "two"]).is_err());
        let cli = Cli::try_parse_from(["releve", "remove", "2"]).unwrap();
        assert!(matches!(cli.command, Commands::Remove { index: 2, .. }));
    }

    #[test]
    fn test_config_subcommands() {
        let cli = Cli::try_parse_from(["releve", "config", "get", "session.echo_window_ms"]).unwrap();
        match cli.command {
            Commands::Config {
                action: ConfigAction::Get { key },
            } => assert_eq!(key, "session.echo_window_ms"),
            other => panic!("unexpected command {:?}", other),
        }
        assert!(Cli::try_parse_from(["releve", "config"]).is_err());
    }

    #[test]
    fn test_completions_shell() {
        let cli = Cli::try_parse_from(["releve", "completions", "bash"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Completions { shell: Shell::Bash }
        ));
    }

    #[test]
    fn test_version_flag() {
        let err = Cli::try_parse_from(["releve", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }
}
