// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, Subcommand, ValueEnum};

/// Command-line arguments for `sitepipe`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "sitepipe",
    version,
    about = "Build static-site assets and serve them with live reload.",
    long_about = None
)]
pub struct CliArgs {
    /// Pipeline to run. Omitted means `watch`.
    #[command(subcommand)]
    pub command: Option<PipelineCommand>,

    /// Path to the config file (TOML).
    ///
    /// The project root is the directory containing this file.
    #[arg(long, global = true, value_name = "PATH", default_value = "Sitepipe.toml")]
    pub config: String,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `SITEPIPE_LOG` or a default level will be used.
    #[arg(long, global = true, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// The named pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum PipelineCommand {
    /// Run every transform unit once, in parallel, and exit.
    Build,
    /// Delete everything under the output root.
    Clean,
    /// Run only the HTML unit once.
    Include,
    /// Build once, then watch sources and serve the output with live reload.
    Watch,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
