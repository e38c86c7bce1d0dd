// src/cli.rs

//! CLI argument parsing using `clap`.

use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::parse_delay;
use crate::site::BuildingKind;

/// Command-line arguments for `daemonrun`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "daemonrun",
    version,
    about = "Run an injected action on a background daemon thread.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `Daemonrun.toml` in the current working directory, used only
    /// if it exists.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `DAEMONRUN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    /// What to run; defaults to `daemon`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Start the daemon demo and wait until every run has finished.
    Daemon(DaemonArgs),
    /// Print the construction-site tour.
    Site(SiteArgs),
}

impl Default for Command {
    fn default() -> Self {
        Command::Daemon(DaemonArgs::default())
    }
}

#[derive(Debug, Clone, Args)]
pub struct DaemonArgs {
    /// Delay before and after the action (e.g. `250ms`, `2s`; at most `1h`).
    #[arg(long, value_name = "DURATION", value_parser = parse_delay)]
    pub delay: Option<Duration>,

    /// Text the injected action prints.
    #[arg(long, value_name = "TEXT")]
    pub message: Option<String>,

    /// Number of independent daemons to start side by side.
    #[arg(long, value_name = "N", default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=64))]
    pub runs: u16,

    /// Print the effective settings, but don't start anything.
    #[arg(long)]
    pub dry_run: bool,
}

impl Default for DaemonArgs {
    fn default() -> Self {
        Self {
            delay: None,
            message: None,
            runs: 1,
            dry_run: false,
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct SiteArgs {
    /// Only show buildings of this kind (e.g. `language_school`).
    #[arg(long, value_name = "KIND")]
    pub only: Option<BuildingKind>,
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
