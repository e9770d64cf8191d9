//! CLI argument definitions for the HPO to FHIR converter.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

use hpo_cli::config::ConvertConfig;

#[derive(Parser)]
#[command(
    name = "hpo-fhir",
    version,
    about = "Convert the Human Phenotype Ontology to a FHIR CodeSystem",
    long_about = "Convert an OBO ontology (by default the Human Phenotype Ontology) into a\n\
                  FHIR R4 CodeSystem resource in JSON format.\n\n\
                  EXACT synonyms become designations; obsolete flag, definition, xrefs,\n\
                  direct parents and children, and subsets become concept properties."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

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
    /// Convert the ontology and write the CodeSystem JSON.
    Convert(ConvertArgs),

    /// Load the ontology and print term statistics.
    Inspect(SourceArgs),
}

/// Where the ontology comes from.
#[derive(Args)]
pub struct SourceArgs {
    /// TOML config file; flags given here override its values.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Download the ontology instead of reading a local file.
    #[arg(long = "fetch", conflicts_with = "source")]
    pub fetch: bool,

    /// Local ontology file (default: hp.obo).
    #[arg(long = "source", value_name = "PATH")]
    pub source: Option<PathBuf>,

    /// Download location used with --fetch.
    #[arg(long = "source-url", value_name = "URL")]
    pub source_url: Option<String>,
}

impl SourceArgs {
    /// Apply these flags on top of `config`.
    pub fn apply(&self, config: &mut ConvertConfig) {
        if self.fetch {
            config.fetch = true;
        }
        if let Some(path) = &self.source {
            config.source_path = path.clone();
            config.fetch = false;
        }
        if let Some(url) = &self.source_url {
            config.source_url = url.clone();
        }
    }
}

#[derive(Args)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output JSON file (default: hp.obo.json).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Canonical CodeSystem url.
    #[arg(long = "url", value_name = "URL")]
    pub url: Option<String>,

    /// Mark the CodeSystem as experimental (true/false).
    #[arg(long = "experimental", value_name = "BOOL")]
    pub experimental: Option<bool>,

    /// Build and render the CodeSystem without writing it.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Do not draw a progress bar.
    #[arg(long = "no-progress")]
    pub no_progress: bool,
}

impl ConvertArgs {
    /// Apply these flags on top of `config`.
    pub fn apply(&self, config: &mut ConvertConfig) {
        self.source.apply(config);
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(url) = &self.url {
            config.codesystem.url = url.clone();
        }
        if let Some(experimental) = self.experimental {
            config.codesystem.experimental = experimental;
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
