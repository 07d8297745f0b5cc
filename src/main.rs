//! goman CLI entry point
//!
//! This is the main executable for the Go toolchain installation manager.
//! It handles command-line argument parsing, error display, and command
//! execution.
//!
//! Supported commands:
//! - `status` - Show the installed Go version
//! - `check` - Check whether an update is available
//! - `update` - Update the installation in place
//! - `install` - Install a specific or latest release into a directory
//! - `available` - List the most recent releases
//! - `uninstall` - Remove the detected installation

use anyhow::Result;
use clap::Parser;
use goman_cli::cli;
use goman_cli::core::error::user_friendly_error;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    // Execute the command
    match cli.execute().await {
        Ok(()) => Ok(()),
        Err(e) => {
            // Convert to user-friendly error with context and suggestions
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
