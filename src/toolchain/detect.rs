//! Installed toolchain detection
//!
//! Locates the active `go` binary on `PATH` and parses its reported
//! version. Absence of a toolchain is an ordinary `None`, not an error;
//! only commands that require an installation promote it to
//! [`crate::core::GomanError::ToolchainNotFound`].

use crate::version::GoVersion;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tokio::process::Command;
use tracing::debug;

/// An installed Go toolchain found on this host.
#[derive(Debug, Clone)]
pub struct InstalledToolchain {
    /// Absolute path to the `go` binary
    pub binary: PathBuf,
    /// Version the binary reports
    pub version: GoVersion,
}

/// Locate the `go` binary on `PATH` and parse its version.
///
/// Runs `go version` and extracts the version from its output line, which
/// looks like `go version go1.21.0 linux/amd64`. Returns `Ok(None)` when
/// no binary is found, when it exits non-zero, or when its output carries
/// no recognizable version.
///
/// # Errors
///
/// Returns an error only when the located binary fails to spawn at all,
/// which indicates a broken installation rather than a missing one.
pub async fn detect_installed() -> Result<Option<InstalledToolchain>> {
    let Ok(binary) = which::which("go") else {
        debug!("no go binary found on PATH");
        return Ok(None);
    };

    let output = Command::new(&binary)
        .arg("version")
        .output()
        .await
        .with_context(|| format!("failed to run '{} version'", binary.display()))?;

    if !output.status.success() {
        debug!(status = %output.status, "go version exited non-zero");
        return Ok(None);
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let Some(version) = GoVersion::parse(&stdout) else {
        debug!(output = %stdout.trim(), "go version output had no parseable version");
        return Ok(None);
    };

    debug!(binary = %binary.display(), version = %version, "detected installed toolchain");
    Ok(Some(InstalledToolchain { binary, version }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_output_parses() {
        let output = "go version go1.21.3 linux/amd64\n";
        let version = GoVersion::parse(output).unwrap();
        assert_eq!(version.raw, "1.21.3");
    }

    #[test]
    fn test_garbage_output_rejected() {
        assert!(GoVersion::parse("command not found").is_none());
    }
}
