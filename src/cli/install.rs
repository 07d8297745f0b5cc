//! Install a Go toolchain into a chosen directory.

use crate::core::GomanError;
use crate::toolchain::{
    download_artifact, extract_archive, fetch_release_tags, is_extractable,
};
use crate::utils::platform::host_artifact_name;
use crate::utils::progress::ProgressBar;
use crate::version::GoVersion;
use crate::version::selection::select_install_target;
use anyhow::{Context, Result, bail};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use tracing::debug;

/// Command-line arguments for the install command.
///
/// Downloads a release and extracts it into the given directory. The
/// archive carries its own top-level `go/` directory, so installing into
/// `/usr/local` produces `/usr/local/go`. Without `--version` the newest
/// release from the feed is installed; `--preview` widens the candidate
/// set to beta and release-candidate versions.
///
/// # Examples
///
/// ```bash
/// goman install /usr/local
/// goman install --version 1.21.0 ~/sdk
/// goman install --preview /usr/local
/// ```
#[derive(Args, Debug)]
pub struct InstallCommand {
    /// Directory to extract the toolchain into.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Specific version to install (e.g. "1.21.0" or "go1.21.0").
    #[arg(long, value_name = "VERSION")]
    pub version: Option<String>,

    /// Consider beta and release-candidate versions when picking the
    /// newest release.
    #[arg(long)]
    pub preview: bool,
}

impl InstallCommand {
    /// Execute the install command.
    pub async fn execute(self) -> Result<()> {
        let target = match &self.version {
            Some(requested) => {
                let Some(version) = GoVersion::parse(requested) else {
                    bail!("'{requested}' is not a recognizable go version");
                };
                version
            }
            None => {
                let spinner = ProgressBar::new_spinner();
                spinner.set_message("Fetching release list...");
                let tags = fetch_release_tags().await?;
                spinner.finish_and_clear();

                select_install_target(&tags, self.preview)
                    .ok_or(GomanError::NoInstallCandidate)?
            }
        };

        let artifact = host_artifact_name(&target.raw)?;
        if !is_extractable(&artifact) {
            return Err(GomanError::UnsupportedArchiveFormat { name: artifact }.into());
        }

        std::fs::create_dir_all(&self.path)
            .with_context(|| format!("failed to create {}", self.path.display()))?;

        println!("Installing go {}", target.to_string().green().bold());

        let temp_dir = std::env::temp_dir();
        let archive = download_artifact(&artifact, &temp_dir).await?;

        extract_archive(&archive, &self.path)?;

        if let Err(e) = std::fs::remove_file(&archive) {
            debug!(archive = %archive.display(), error = %e, "failed to delete downloaded archive");
        }

        println!(
            "{} Installed go {} to {}",
            "✓".green(),
            target.to_string().green().bold(),
            self.path.join("go").display()
        );
        println!(
            "Add {} to PATH to use it",
            self.path.join("go").join("bin").display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Wrapper {
        #[command(flatten)]
        cmd: InstallCommand,
    }

    #[test]
    fn test_path_required() {
        assert!(Wrapper::try_parse_from(["test"]).is_err());
    }

    #[test]
    fn test_version_flag() {
        let w = Wrapper::parse_from(["test", "--version", "1.21.0", "/usr/local"]);
        assert_eq!(w.cmd.version.as_deref(), Some("1.21.0"));
        assert_eq!(w.cmd.path, PathBuf::from("/usr/local"));
    }

    #[test]
    fn test_invalid_version_rejected() {
        assert!(GoVersion::parse("not-a-version").is_none());
    }
}
