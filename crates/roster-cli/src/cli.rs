//! CLI argument definitions for the roster generator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Username roster generator - derive enrollment usernames from a student spreadsheet",
    long_about = "Derive enrollment usernames from a student spreadsheet.\n\n\
                  Reads a single-sheet CSV or XLSX export, prefixes and transliterates\n\
                  the name columns, appends the fixed placeholder block, and writes the\n\
                  semicolon-delimited headerless export the enrollment system expects."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate the username export from a student spreadsheet.
    Generate(GenerateArgs),

    /// List the supported diacritic substitutions.
    Mappings,
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Path to the student spreadsheet (CSV or XLSX).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Prefix prepended to every derived surname identifier.
    #[arg(long, short = 'p', value_name = "PREFIX")]
    pub prefix: String,

    /// Output path for the export (default: usernamen.csv in the current directory).
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Validate and preview without writing the export file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Number of normalized rows shown in the preview table.
    #[arg(long = "preview-rows", value_name = "N", default_value_t = 10)]
    pub preview_rows: usize,

    /// Skip the preview table.
    #[arg(long = "no-preview")]
    pub no_preview: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
