//! FastBound importer CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use fb_cli::import::{ImportRequest, run_import};
use fb_cli::logging::{LogConfig, LogFormat, init_logging};
use fb_model::ResolveOptions;
use tracing::info;
use tracing::level_filters::LevelFilter;

mod cli;
mod summary;

use crate::cli::{Cli, LogFormatArg, LogLevelArg};
use crate::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run_import(&import_request(&cli)) {
        Ok(result) => {
            print_summary(&result);
            if result.strict_failure() {
                eprintln!(
                    "error: {} FastBound columns were not mapped. See 'Mapping Report'.",
                    result.unresolved_count()
                );
            } else {
                info!(output = %result.output.display(), "Done");
                info!(
                    total = result.target_columns(),
                    mapped = result.target_columns() - result.unresolved_count(),
                    missing = result.unresolved_count(),
                    "FastBound columns"
                );
            }
            result.exit_code()
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn import_request(cli: &Cli) -> ImportRequest {
    ImportRequest {
        atf: cli.atf.clone(),
        atf_sheet: cli.atf_sheet.clone(),
        fastbound: cli.fastbound.clone(),
        fastbound_sheet: cli.fastbound_sheet.clone(),
        out: cli.out.clone(),
        overrides: cli.map.clone(),
        save_map: cli.save_map.clone(),
        options: ResolveOptions::new().with_fuzzy_cutoff(cli.fuzzy_cutoff),
        strict: cli.strict,
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
