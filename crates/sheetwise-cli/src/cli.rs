//! CLI argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "sheetwise",
    version,
    about = "Validate spreadsheet workbooks against per-sheet field schemas",
    long_about = "Decode a workbook (xlsx, xls, xlsb, ods, or csv), validate every row\n\
                  against its sheet's field schema, normalize dates, and report accepted\n\
                  records alongside per-row validation errors."
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
    /// Validate a workbook file and report records and errors.
    Check(CheckArgs),

    /// Show the default intake field schema.
    Schema,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Path to the workbook file (xlsx, xls, xlsb, ods, or csv).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Emit the full report as JSON on stdout instead of tables.
    #[arg(long)]
    pub json: bool,

    /// Reference date for the current-month rule (default: today).
    #[arg(long = "reference-date", value_name = "YYYY-MM-DD")]
    pub reference_date: Option<NaiveDate>,

    /// Only process sheets with a registered schema; skip the rest.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum LogFormatArg {
    #[default]
    Pretty,
    Compact,
    Json,
}
