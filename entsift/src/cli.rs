// entsift/src/cli.rs
//! This file defines the command-line interface (CLI) for the entsift
//! application, including all available commands and their arguments.
//! License: MIT OR APACHE 2.0

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "entsift",
    version = env!("CARGO_PKG_VERSION"),
    about = "Extract and validate structured entities from text",
    long_about = "Entsift is a command-line utility for extracting structured entities \
(abbreviations, IPv4 addresses, calendar dates) from free-form text. Pattern matching \
discovers candidates and a semantic validation stage rejects false positives such as \
Roman numerals, out-of-range IP octets, and calendar-invalid dates.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for the 'entsift' crates to DEBUG)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `entsift` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyzes an input file or stdin and reports accepted entities per category.
    #[command(about = "Analyzes an input file or stdin and reports accepted entities per category.")]
    Analyze(AnalyzeCommand),

    /// Lists the registered categories with their patterns and validators.
    #[command(about = "Lists the registered categories with their patterns and validators.")]
    Rules(RulesCommand),
}

/// Arguments for the `analyze` command.
#[derive(Parser, Debug)]
pub struct AnalyzeCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Path to a custom extraction rules file (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a custom extraction rules file (YAML).")]
    pub config: Option<PathBuf>,

    /// Result representation: unique strings or occurrence counts.
    #[arg(long = "mode", value_enum, default_value = "unique", help = "Aggregation mode: keep each accepted string once, or count occurrences.")]
    pub mode: ModeChoice,

    /// Per-category matching-time budget in milliseconds.
    #[arg(long = "deadline-ms", value_name = "MS", help = "Per-category matching-time budget in milliseconds (default 1500).")]
    pub deadline_ms: Option<u64>,

    /// Print the report as JSON to stdout (conflicts with --json-file).
    #[arg(long = "json-stdout", conflicts_with = "json_file", help = "Print the report as JSON to stdout.")]
    pub json_stdout: bool,

    /// Export the report to a JSON file.
    #[arg(long = "json-file", value_name = "FILE", help = "Export the report to a JSON file.")]
    pub json_file: Option<PathBuf>,
}

/// Arguments for the `rules` command.
#[derive(Parser, Debug)]
pub struct RulesCommand {
    /// Path to a custom extraction rules file (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a custom extraction rules file (YAML).")]
    pub config: Option<PathBuf>,
}

/// Enum for selecting the result aggregation mode.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum ModeChoice {
    /// Keep each distinct accepted string once.
    Unique,
    /// Map each accepted string to its occurrence count.
    Count,
}
