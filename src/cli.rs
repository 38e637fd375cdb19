//! Command-line interface for recap
//!
//! Provides argument parsing using clap derive macros.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Map-reduce summarization for meeting transcripts
#[derive(Parser, Debug)]
#[command(
    name = "recap",
    version,
    about = "Summarize long meeting transcripts via a text-generation endpoint"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Transcription document to summarize (reads stdin when omitted or "-")
    #[arg(value_name = "DOCUMENT")]
    pub input: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write the result document here instead of stdout.
    /// A directory gets `<input-stem>.summary.json` inside it.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Generation endpoint URL (overrides config and RECAP_ENDPOINT)
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Maximum tokens per chunk
    #[arg(long, value_name = "TOKENS")]
    pub window_size: Option<usize>,

    /// Instruction appended to every generation input
    #[arg(long, value_name = "TEXT")]
    pub instruction: Option<String>,

    /// Per-call endpoint timeout (default: 30s). Examples: 45s, 2m, 1m30s
    #[arg(long, value_name = "DURATION", value_parser = parse_timeout_secs)]
    pub timeout: Option<u64>,

    /// Number of in-flight chunk summarization calls (default: 1)
    #[arg(long, value_name = "N")]
    pub concurrency: Option<usize>,

    /// Suppress status messages (quiet mode)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose output (-v: stage progress, -vv: full diagnostics)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse a timeout duration string into seconds.
///
/// Supports any duration format accepted by `humantime`: bare numbers
/// (seconds), single-unit (`30s`, `5m`), and compound (`1m30s`).
fn parse_timeout_secs(s: &str) -> Result<u64, String> {
    let s = s.trim();
    // Bare number → seconds
    if let Ok(secs) = s.parse::<u64>() {
        return Ok(secs);
    }
    humantime::parse_duration(s)
        .map(|d| d.as_secs())
        .map_err(|e| e.to_string())
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect configuration
    Config {
        /// Action to perform
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Configuration actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Dump,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_bare_invocation() {
        let cli = Cli::parse_from(["recap"]);
        assert!(cli.command.is_none());
        assert!(cli.input.is_none());
        assert!(!cli.quiet);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn cli_parses_input_and_output() {
        let cli = Cli::parse_from(["recap", "meeting.json", "-o", "out.json"]);
        assert_eq!(cli.input, Some(PathBuf::from("meeting.json")));
        assert_eq!(cli.output, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn cli_parses_pipeline_overrides() {
        let cli = Cli::parse_from([
            "recap",
            "--endpoint",
            "http://host/generate",
            "--window-size",
            "256",
            "--concurrency",
            "4",
            "doc.json",
        ]);
        assert_eq!(cli.endpoint.as_deref(), Some("http://host/generate"));
        assert_eq!(cli.window_size, Some(256));
        assert_eq!(cli.concurrency, Some(4));
    }

    #[test]
    fn cli_counts_verbosity() {
        let cli = Cli::parse_from(["recap", "-vv", "doc.json"]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn cli_parses_config_dump_subcommand() {
        let cli = Cli::parse_from(["recap", "config", "dump"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                action: ConfigAction::Dump
            })
        ));
    }

    #[test]
    fn parse_timeout_accepts_bare_seconds() {
        assert_eq!(parse_timeout_secs("30"), Ok(30));
    }

    #[test]
    fn parse_timeout_accepts_humantime_formats() {
        assert_eq!(parse_timeout_secs("45s"), Ok(45));
        assert_eq!(parse_timeout_secs("2m"), Ok(120));
        assert_eq!(parse_timeout_secs("1m30s"), Ok(90));
    }

    #[test]
    fn parse_timeout_rejects_garbage() {
        assert!(parse_timeout_secs("soon").is_err());
    }
}
