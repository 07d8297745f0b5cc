//! Remove the Go installation found on PATH.

use crate::toolchain::remove_installation;
use anyhow::Result;
use clap::Args;
use colored::Colorize;

/// Command-line arguments for the uninstall command.
///
/// Deletes the installation the `PATH` binary belongs to. Only standard
/// layouts are touched: the binary must live at `<root>/bin/go` with the
/// root directory named `go`. Anything else is left alone and reported.
///
/// # Examples
///
/// ```bash
/// goman uninstall
/// ```
#[derive(Args, Debug)]
pub struct UninstallCommand {}

impl UninstallCommand {
    /// Execute the uninstall command.
    pub async fn execute(self) -> Result<()> {
        match remove_installation()? {
            Some(removed) => {
                println!(
                    "{} Removed go installation at {}",
                    "✓".green(),
                    removed.root.display()
                );
            }
            None => {
                println!("Could not find a valid go installation.");
            }
        }
        Ok(())
    }
}
