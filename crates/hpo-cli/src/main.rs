//! HPO to FHIR CodeSystem CLI.

use clap::{ColorChoice, Parser};
use hpo_cli::commands::{ConvertOptions, run_convert, run_inspect};
use hpo_cli::config::ConvertConfig;
use hpo_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::summary::{print_convert_summary, print_inspect_summary};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let result = match &cli.command {
        Command::Convert(args) => {
            ConvertConfig::load_or_default(args.source.config.as_deref()).and_then(|mut config| {
                args.apply(&mut config);
                let options = ConvertOptions {
                    config,
                    dry_run: args.dry_run,
                    show_progress: !args.no_progress
                        && cli.log_file.is_none()
                        && io::stderr().is_terminal(),
                };
                run_convert(&options).map(|result| print_convert_summary(&result))
            })
        }
        Command::Inspect(args) => {
            ConvertConfig::load_or_default(args.config.as_deref()).and_then(|mut config| {
                args.apply(&mut config);
                run_inspect(&config.locator()).map(|result| print_inspect_summary(&result))
            })
        }
    };
    if let Err(error) = result {
        tracing::error!(error = %format!("{error:#}"), "run failed");
        eprintln!("error: {error:#}");
        std::process::exit(1);
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
