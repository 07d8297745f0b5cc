//! Show the installed Go toolchain version.

use crate::toolchain::detect_installed;
use anyhow::Result;
use clap::Args;
use colored::Colorize;

/// Command-line arguments for the status command.
///
/// Reports the version and location of the `go` binary on `PATH`. A missing
/// installation is reported as a plain message, not an error, so the command
/// always exits 0 when the host itself is healthy.
///
/// # Examples
///
/// ```bash
/// goman status
/// ```
#[derive(Args, Debug)]
pub struct StatusCommand {}

impl StatusCommand {
    /// Execute the status command.
    pub async fn execute(self) -> Result<()> {
        match detect_installed().await? {
            Some(toolchain) => {
                println!(
                    "go {} ({})",
                    toolchain.version.to_string().green().bold(),
                    toolchain.binary.display()
                );
            }
            None => {
                println!("Could not find a valid go installation.");
            }
        }
        Ok(())
    }
}
