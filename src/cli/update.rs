//! Update the installed Go toolchain in place.

use crate::core::GomanError;
use crate::toolchain::{
    detect_installed, download_artifact, extract_archive, fetch_release_tags, is_extractable,
    remove_installation,
};
use crate::utils::platform::host_artifact_name;
use crate::utils::progress::ProgressBar;
use crate::version::selection::{UpdateOutcome, select_update};
use anyhow::{Result, bail};
use clap::Args;
use colored::Colorize;
use tracing::debug;

/// Command-line arguments for the update command.
///
/// Replaces the installation the `PATH` binary belongs to with the newest
/// applicable release. The sequence is deliberate: the target is resolved
/// and its artifact validated as extractable before anything is downloaded,
/// and the old installation is removed only after the download completes,
/// so a failed download leaves the existing toolchain untouched.
///
/// # Examples
///
/// ```bash
/// goman update
/// goman update --preview   # allow beta and rc targets
/// ```
#[derive(Args, Debug)]
pub struct UpdateCommand {
    /// Consider beta and release-candidate versions as update targets.
    #[arg(long)]
    pub preview: bool,
}

impl UpdateCommand {
    /// Execute the update command.
    pub async fn execute(self) -> Result<()> {
        let toolchain = detect_installed()
            .await?
            .ok_or(GomanError::ToolchainNotFound)?;

        let spinner = ProgressBar::new_spinner();
        spinner.set_message("Fetching release list...");
        let tags = fetch_release_tags().await?;
        spinner.finish_and_clear();

        let target = match select_update(&toolchain.version, &tags, self.preview) {
            UpdateOutcome::Available(target) => target,
            UpdateOutcome::AlreadyCurrent => {
                println!(
                    "{} go {} is up to date",
                    "✓".green(),
                    toolchain.version.to_string().green()
                );
                return Ok(());
            }
            UpdateOutcome::NotInReleaseList => {
                println!(
                    "Installed version go {} does not appear in the release list; not updating",
                    toolchain.version.to_string().yellow()
                );
                return Ok(());
            }
        };

        let artifact = host_artifact_name(&target.raw)?;
        if !is_extractable(&artifact) {
            return Err(GomanError::UnsupportedArchiveFormat { name: artifact }.into());
        }

        println!(
            "Updating go {} -> go {}",
            toolchain.version.to_string().yellow(),
            target.to_string().green().bold()
        );

        let temp_dir = std::env::temp_dir();
        let archive = download_artifact(&artifact, &temp_dir).await?;

        let Some(removed) = remove_installation()? else {
            bail!(
                "the installation at '{}' does not have a standard layout; not replacing it",
                toolchain.binary.display()
            );
        };
        debug!(root = %removed.root.display(), "removed old installation");

        extract_archive(&archive, &removed.parent)?;

        if let Err(e) = std::fs::remove_file(&archive) {
            debug!(archive = %archive.display(), error = %e, "failed to delete downloaded archive");
        }

        println!(
            "{} Updated to go {} in {}",
            "✓".green(),
            target.to_string().green().bold(),
            removed.root.display()
        );
        Ok(())
    }
}
