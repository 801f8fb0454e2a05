//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use gfonts_cli::DEFAULT_SAVE_PATH;

#[derive(Parser)]
#[command(
    name = "gfonts",
    version,
    about = "Build a one-hot font annotation table from the Google Fonts catalog",
    long_about = "Build a one-hot font annotation table from the Google Fonts catalog.\n\n\
                  Reads a downloaded webfonts.json snapshot (or fetches the catalog with an\n\
                  API key), encodes variants, subsets, and category as 0/1 columns, and\n\
                  writes the result as CSV."
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
    /// Build the annotation table and write it as CSV.
    Annotate(AnnotateArgs),

    /// List the variant codes and the column names they are renamed to.
    Variants,
}

#[derive(Parser)]
pub struct AnnotateArgs {
    /// Local catalog snapshot (default: data/webfonts.json unless an API key is given).
    #[arg(long = "data", value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// API key for fetching the live catalog.
    #[arg(
        long = "api-key",
        env = "GOOGLE_FONTS_API_KEY",
        hide_env_values = true,
        value_name = "KEY"
    )]
    pub api_key: Option<String>,

    /// Catalog endpoint override (defaults to the public web-fonts API).
    #[arg(long = "endpoint", value_name = "URL")]
    pub endpoint: Option<String>,

    /// Output CSV path; `.csv` is appended when missing.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        default_value = DEFAULT_SAVE_PATH
    )]
    pub output: PathBuf,

    /// Save the fetched catalog document here for later offline runs.
    #[arg(long = "save-snapshot", value_name = "PATH")]
    pub save_snapshot: Option<PathBuf>,

    /// Skip the summary table.
    #[arg(long = "quiet-summary")]
    pub quiet_summary: bool,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_annotate_flags() {
        let cli = Cli::try_parse_from([
            "gfonts",
            "annotate",
            "--data",
            "local.json",
            "-o",
            "out.csv",
            "--quiet-summary",
        ])
        .expect("parse");
        let Command::Annotate(args) = cli.command else {
            panic!("expected annotate");
        };
        assert!(args.quiet_summary);
        assert_eq!(args.data, Some(PathBuf::from("local.json")));
        assert_eq!(args.output, PathBuf::from("out.csv"));
    }

    #[test]
    fn summary_shown_by_default() {
        let cli = Cli::try_parse_from(["gfonts", "annotate"]).expect("parse");
        let Command::Annotate(args) = cli.command else {
            panic!("expected annotate");
        };
        assert!(!args.quiet_summary);
        assert_eq!(args.output, PathBuf::from(DEFAULT_SAVE_PATH));
    }
}
