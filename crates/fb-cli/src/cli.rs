//! CLI argument definitions for the FastBound importer.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;
use fb_model::DEFAULT_FUZZY_CUTOFF;

#[derive(Parser)]
#[command(
    name = "fastbound-import",
    version,
    about = "Fill a FastBound import workbook from an ATF A&D record export",
    long_about = "Fill a FastBound import workbook from an ATF A&D record export.\n\n\
                  Source columns are matched to the FastBound layout through explicit\n\
                  overrides, normalized names, a built-in alias dictionary and fuzzy\n\
                  matching. The output workbook carries a mapping report and guidance\n\
                  for every column that could not be filled."
)]
pub struct Cli {
    /// ATF A&D workbook (or CSV) to read records from.
    #[arg(long = "atf", value_name = "PATH")]
    pub atf: PathBuf,

    /// Sheet of the ATF workbook (default: first sheet).
    #[arg(long = "atf-sheet", value_name = "NAME")]
    pub atf_sheet: Option<String>,

    /// FastBound template workbook; only its header row is used.
    #[arg(long = "fastbound", value_name = "PATH")]
    pub fastbound: PathBuf,

    /// Sheet of the FastBound template (default: first sheet).
    #[arg(long = "fastbound-sheet", value_name = "NAME")]
    pub fastbound_sheet: Option<String>,

    /// Output workbook to write.
    #[arg(long = "out", value_name = "PATH")]
    pub out: PathBuf,

    /// Mapping overrides (CSV, JSON or YAML).
    #[arg(long = "map", value_name = "PATH")]
    pub map: Option<PathBuf>,

    /// Exit with status 2 when any FastBound column is left unmapped.
    #[arg(long = "strict")]
    pub strict: bool,

    /// Minimum similarity (0-1) for a fuzzy header match.
    #[arg(
        long = "fuzzy-cutoff",
        value_name = "F",
        default_value_t = DEFAULT_FUZZY_CUTOFF,
        value_parser = parse_cutoff
    )]
    pub fuzzy_cutoff: f64,

    /// Write the resolved mapping as JSON, reusable with --map.
    #[arg(long = "save-map", value_name = "PATH")]
    pub save_map: Option<PathBuf>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for humans, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

fn parse_cutoff(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{value} is outside 0..=1"))
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

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    const REQUIRED: [&str; 7] = [
        "fastbound-import",
        "--atf",
        "atf.xlsx",
        "--fastbound",
        "template.xlsx",
        "--out",
        "out.xlsx",
    ];

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(REQUIRED).expect("parse");
        assert!(!cli.strict);
        assert_eq!(cli.fuzzy_cutoff, DEFAULT_FUZZY_CUTOFF);
        assert!(cli.map.is_none());
        assert!(cli.atf_sheet.is_none());
    }

    #[test]
    fn cutoff_must_be_a_ratio() {
        let mut args = REQUIRED.to_vec();
        args.extend(["--fuzzy-cutoff", "1.5"]);
        assert!(Cli::try_parse_from(args).is_err());

        let mut args = REQUIRED.to_vec();
        args.extend(["--fuzzy-cutoff", "0.9"]);
        let cli = Cli::try_parse_from(args).expect("parse");
        assert_eq!(cli.fuzzy_cutoff, 0.9);
    }

    #[test]
    fn required_paths() {
        assert!(Cli::try_parse_from(["fastbound-import", "--atf", "atf.xlsx"]).is_err());
    }
}
