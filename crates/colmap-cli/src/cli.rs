//! CLI argument definitions for colmap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "colmap",
    version,
    about = "Propose source-to-target column mappings for schema migration",
    long_about = "Propose source-to-target column mappings for schema migration.\n\n\
                  Every source column is scored against every target column using\n\
                  character similarity, TF-IDF similarity and domain keyword hints.\n\
                  Confidence is not capped at 1.0: stacked hints can exceed it."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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
    /// Match source columns against target columns.
    Match(MatchArgs),

    /// Show the score breakdown for a single source/target pair.
    Explain(ExplainArgs),

    /// List the active domain hint table.
    Hints(HintArgs),
}

#[derive(Args)]
pub struct HintArgs {
    /// TOML file with [[hint]] entries (default: built-in insurance table).
    #[arg(long = "hints", value_name = "TOML")]
    pub hints: Option<PathBuf>,
}

#[derive(Parser)]
pub struct MatchArgs {
    /// Source column list (.csv header row, or one name per line).
    #[arg(long = "source", value_name = "FILE")]
    pub source: PathBuf,

    /// Target column list (.csv header row, or one name per line).
    #[arg(long = "target", value_name = "FILE")]
    pub target: PathBuf,

    #[command(flatten)]
    pub hints: HintArgs,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Minimum confidence for a link in flow output.
    #[arg(long = "min-confidence", value_name = "F", default_value_t = 0.6)]
    pub min_confidence: f64,

    /// Factor turning confidence into link weight in flow output.
    #[arg(long = "weight-scale", value_name = "F", default_value_t = 10.0)]
    pub weight_scale: f64,
}

#[derive(Parser)]
pub struct ExplainArgs {
    /// Source column name.
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Target column name.
    #[arg(value_name = "TARGET")]
    pub target: String,

    #[command(flatten)]
    pub hints: HintArgs,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
    Flow,
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
