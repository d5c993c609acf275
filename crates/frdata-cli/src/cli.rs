//! CLI argument definitions for the frdata pipeline.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use frdata_model::DatasetKind;

#[derive(Parser)]
#[command(
    name = "frdata",
    version,
    about = "Clean French open datasets and compute dashboard metrics",
    long_about = "Load a French open dataset (death records or food-service establishments),\n\
                  clean it, write the cleaned table as a ';'-delimited file and compute\n\
                  the aggregate views consumed by the dashboard."
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

    /// Allow personal values (names) from records in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load, clean, persist and aggregate one dataset.
    Run(RunArgs),

    /// List the metric views produced for a dataset kind.
    Views(ViewsArgs),
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Dataset kind to process.
    #[arg(long = "kind", value_enum)]
    pub kind: KindArg,

    /// File name under the raw-data directory, absolute path, or URL
    /// (default: the conventional source for the kind).
    #[arg(long = "input", value_name = "SOURCE")]
    pub input: Option<String>,

    /// TOML configuration file.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Field delimiter of the raw file (default: ',' for deaths, ';' for food service).
    #[arg(long = "delimiter", value_name = "CHAR")]
    pub delimiter: Option<char>,

    /// Text encoding of the raw file (e.g. utf-8, latin1, windows-1252).
    #[arg(long = "encoding", value_name = "LABEL")]
    pub encoding: Option<String>,

    /// Directory holding raw datasets (default: data/raw).
    #[arg(long = "raw-dir", value_name = "DIR")]
    pub raw_dir: Option<PathBuf>,

    /// Directory for cleaned datasets (default: data/cleaned).
    #[arg(long = "cleaned-dir", value_name = "DIR")]
    pub cleaned_dir: Option<PathBuf>,

    /// File name of the cleaned dataset (default depends on the kind).
    #[arg(long = "output-name", value_name = "NAME")]
    pub output_name: Option<String>,

    /// Write the metrics map as JSON to this path.
    #[arg(long = "metrics-out", value_name = "PATH")]
    pub metrics_out: Option<PathBuf>,

    /// Number of communes listed in the food-service summary.
    #[arg(long = "top", value_name = "N", default_value_t = 10)]
    pub top: usize,

    /// Do not keep a local copy of downloaded datasets.
    #[arg(long = "no-cache")]
    pub no_cache: bool,

    /// User-Agent header sent when downloading.
    #[arg(long = "user-agent", value_name = "VALUE")]
    pub user_agent: Option<String>,

    /// Download timeout in seconds.
    #[arg(long = "timeout-secs", value_name = "SECS")]
    pub timeout_secs: Option<u64>,
}

#[derive(Args, Debug, Clone)]
pub struct ViewsArgs {
    /// Dataset kind whose views to list.
    #[arg(long = "kind", value_enum)]
    pub kind: KindArg,
}

/// CLI dataset kind choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Deaths,
    FoodService,
}

impl From<KindArg> for DatasetKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Deaths => DatasetKind::Deaths,
            KindArg::FoodService => DatasetKind::FoodService,
        }
    }
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
