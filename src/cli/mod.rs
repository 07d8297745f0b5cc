//! Command-line interface for goman
//!
//! This module defines the CLI structure using `clap` and dispatches to the
//! per-command modules. Each subcommand lives in its own module with an
//! `execute()` entry point.
//!
//! # Commands
//!
//! - `status`: Show the installed toolchain version
//! - `check`: Compare the installed version against the release feed
//! - `update`: Replace the installation with the newest applicable release
//! - `install`: Install a toolchain into a chosen directory
//! - `available`: List recent releases from the feed
//! - `uninstall`: Remove the installation found on `PATH`
//!
//! # Global Options
//!
//! - `--verbose`: Debug-level logging
//! - `--quiet`: Suppress logging entirely
//! - `--no-progress`: Disable progress bars and spinners

pub mod available;
pub mod check;
pub mod install;
pub mod status;
pub mod uninstall;
pub mod update;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Runtime configuration derived from global CLI flags.
///
/// Translating flags into environment variables once at startup lets the
/// rest of the code read plain env state, and lets tests inject
/// configurations without parsing arguments.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log level for the `RUST_LOG` environment variable.
    ///
    /// When `None`, logging is suppressed entirely.
    pub log_level: Option<String>,

    /// Whether to disable progress indicators and animated output.
    ///
    /// When `true`, sets the `GOMAN_NO_PROGRESS` environment variable so
    /// every progress bar constructor returns a hidden bar.
    pub no_progress: bool,
}

impl CliConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply this configuration to the process environment.
    ///
    /// Sets `RUST_LOG` and `GOMAN_NO_PROGRESS` based on the configuration.
    /// Not thread-safe; call once from the main thread before any tasks
    /// are spawned.
    pub fn apply_to_env(&self) {
        if self.no_progress {
            unsafe {
                std::env::set_var("GOMAN_NO_PROGRESS", "1");
            }
        }

        if let Some(ref level) = self.log_level {
            if std::env::var("RUST_LOG").is_err() {
                unsafe {
                    std::env::set_var("RUST_LOG", level);
                }
            }
        }
    }
}

/// Main CLI structure for goman.
///
/// Uses the `clap` derive API for parsing, help text, and validation.
/// Global options are available to every subcommand.
#[derive(Parser)]
#[command(
    name = "goman",
    about = "Go toolchain manager - install, update, and inspect Go releases",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output for debugging.
    ///
    /// Equivalent to setting `RUST_LOG=debug`. Mutually exclusive with
    /// `--quiet`.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress log output and progress indicators.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable progress bars and spinners.
    ///
    /// Useful for CI pipelines and terminals without ANSI support. The
    /// `GOMAN_NO_PROGRESS` environment variable has the same effect.
    #[arg(long, global = true)]
    no_progress: bool,
}

/// Available subcommands for the goman CLI.
#[derive(Subcommand)]
enum Commands {
    /// Show the installed Go toolchain version.
    Status(status::StatusCommand),

    /// Check whether a newer release is available, without changing anything.
    Check(check::CheckCommand),

    /// Update the installed toolchain in place to the newest applicable release.
    Update(update::UpdateCommand),

    /// Install a Go toolchain into a directory.
    Install(install::InstallCommand),

    /// List recent releases from the feed, newest first.
    Available(available::AvailableCommand),

    /// Remove the Go installation found on PATH.
    Uninstall(uninstall::UninstallCommand),
}

impl Cli {
    /// Execute the parsed command with configuration from the CLI flags.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config).await
    }

    /// Build a [`CliConfig`] from the parsed global flags.
    ///
    /// Verbose maps to "debug", quiet suppresses logging entirely, and
    /// quiet also disables progress output.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            None
        } else {
            Some("warn".to_string())
        };

        CliConfig {
            log_level,
            no_progress: self.no_progress || self.quiet,
        }
    }

    /// Execute with an explicit configuration, for tests and programmatic use.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        config.apply_to_env();
        init_logging();

        match self.command {
            Commands::Status(cmd) => cmd.execute().await,
            Commands::Check(cmd) => cmd.execute().await,
            Commands::Update(cmd) => cmd.execute().await,
            Commands::Install(cmd) => cmd.execute().await,
            Commands::Available(cmd) => cmd.execute().await,
            Commands::Uninstall(cmd) => cmd.execute().await,
        }
    }
}

/// Initialize the tracing subscriber from the environment.
///
/// Quiet mode leaves `RUST_LOG` unset, which yields an empty filter and no
/// output. Initialization failure means a subscriber already exists, which
/// happens in tests and is harmless.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
