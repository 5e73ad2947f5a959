//! CLI argument definitions for the salary dashboard.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use salary_model::MapTheme;

#[derive(Parser)]
#[command(
    name = "salary-dashboard",
    version,
    about = "Explore data-industry salaries from the terminal",
    long_about = "Load the salary dataset, filter it by year, experience level, contract,\n\
                  company size and work modality, then print metrics and tables or write\n\
                  the five dashboard charts as Vega-Lite JSON.\n\n\
                  Salaries are annual amounts in USD, not monthly. Amounts use US notation:\n\
                  a comma groups thousands and a dot marks decimals, so 1,800 is one\n\
                  thousand eight hundred dollars (written 1.800 in Brazil)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// CSV location: an http(s) URL or a local path (default: the published dataset).
    #[arg(long, value_name = "URL|PATH", global = true)]
    pub source: Option<String>,

    /// TOML file with dashboard settings; flags take precedence.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

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
    /// List the values available for each filter.
    Options,

    /// Print the metrics and chart status for a selection.
    Summary(ViewArgs),

    /// Print the filtered records.
    Table(TableArgs),

    /// Write the dashboard charts as Vega-Lite JSON.
    Charts(ChartsArgs),
}

/// Filter selection and display settings shared by the view commands.
///
/// Each filter flag replaces the selection for its column; an omitted flag
/// keeps every value selected.
#[derive(Args, Debug, Default, Clone)]
pub struct ViewArgs {
    /// Years to include (comma separated).
    #[arg(long, value_name = "YEAR", value_delimiter = ',')]
    pub year: Vec<String>,

    /// Experience levels to include.
    #[arg(long, value_name = "LEVEL", value_delimiter = ',')]
    pub seniority: Vec<String>,

    /// Contract types to include.
    #[arg(long, value_name = "CONTRACT", value_delimiter = ',')]
    pub contract: Vec<String>,

    /// Company sizes to include.
    #[arg(long = "company-size", value_name = "SIZE", value_delimiter = ',')]
    pub company_size: Vec<String>,

    /// Work modalities to include.
    #[arg(long, value_name = "MODALITY", value_delimiter = ',')]
    pub modality: Vec<String>,

    /// Deselect every value of a column (repeatable).
    #[arg(long = "none", value_name = "COLUMN")]
    pub none: Vec<String>,

    /// Country map theme.
    #[arg(long, value_enum)]
    pub theme: Option<ThemeArg>,

    /// Job title the country map is restricted to.
    #[arg(long = "reference-title", value_name = "TITLE")]
    pub reference_title: Option<String>,
}

#[derive(Args)]
pub struct TableArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    /// Print at most this many rows (default: every matching row).
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,
}

#[derive(Args)]
pub struct ChartsArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    /// Directory for the chart files and dashboard.json.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "dashboard")]
    pub output_dir: PathBuf,

    /// World GeoJSON used by the country map.
    #[arg(long = "geojson-url", value_name = "URL")]
    pub geojson_url: Option<String>,

    /// Write single-line JSON.
    #[arg(long)]
    pub compact: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Dark,
    Light,
}

impl From<ThemeArg> for MapTheme {
    fn from(theme: ThemeArg) -> Self {
        match theme {
            ThemeArg::Dark => MapTheme::Dark,
            ThemeArg::Light => MapTheme::Light,
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
