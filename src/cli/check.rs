//! Check for a newer Go release without changing anything.

use crate::core::GomanError;
use crate::toolchain::{detect_installed, fetch_release_tags};
use crate::utils::progress::ProgressBar;
use crate::version::selection::{UpdateOutcome, select_update};
use anyhow::Result;
use clap::Args;
use colored::Colorize;

/// Command-line arguments for the check command.
///
/// Compares the installed toolchain against the release feed and reports
/// whether an update would apply. Purely informational; nothing is
/// downloaded or modified.
///
/// # Examples
///
/// ```bash
/// goman check
/// goman check --preview   # also consider beta and rc releases
/// ```
#[derive(Args, Debug)]
pub struct CheckCommand {
    /// Consider beta and release-candidate versions as update candidates.
    #[arg(long)]
    pub preview: bool,
}

impl CheckCommand {
    /// Execute the check command.
    pub async fn execute(self) -> Result<()> {
        let toolchain = detect_installed()
            .await?
            .ok_or(GomanError::ToolchainNotFound)?;

        let spinner = ProgressBar::new_spinner();
        spinner.set_message("Fetching release list...");
        let tags = fetch_release_tags().await?;
        spinner.finish_and_clear();

        match select_update(&toolchain.version, &tags, self.preview) {
            UpdateOutcome::Available(target) => {
                println!(
                    "Update available: go {} -> go {}",
                    toolchain.version.to_string().yellow(),
                    target.to_string().green().bold()
                );
                println!("Run `goman update` to install it");
            }
            UpdateOutcome::AlreadyCurrent => {
                println!(
                    "{} go {} is up to date",
                    "✓".green(),
                    toolchain.version.to_string().green()
                );
            }
            UpdateOutcome::NotInReleaseList => {
                println!(
                    "Installed version go {} does not appear in the release list",
                    toolchain.version.to_string().yellow()
                );
                println!("It may be a custom or source-built toolchain");
            }
        }

        Ok(())
    }
}
