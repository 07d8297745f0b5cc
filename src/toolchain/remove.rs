//! Installation removal
//!
//! Derives the installation root from the `go` binary found on `PATH` and
//! deletes it. The binary lives at `<root>/bin/go`, so the root is the
//! grandparent of the binary; as a guard against deleting an unrelated
//! tree, the root must literally be named `go` or nothing is removed.

use crate::core::GomanError;
use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// The result of removing an installation.
#[derive(Debug)]
pub struct RemovedInstallation {
    /// The installation root that was deleted, e.g. `/usr/local/go`
    pub root: PathBuf,
    /// The directory that contained the root, e.g. `/usr/local`
    pub parent: PathBuf,
}

/// Remove the Go installation the `PATH` binary belongs to.
///
/// Returns `Ok(None)` when no `go` binary is on `PATH` or when the binary's
/// layout does not match a standard installation (root directory not named
/// `go`). The returned parent directory is where a replacement toolchain
/// should be extracted.
///
/// # Errors
///
/// Returns [`GomanError::PermissionDenied`] when deletion fails for lack
/// of permission, and other IO errors as-is.
pub fn remove_installation() -> Result<Option<RemovedInstallation>> {
    let Ok(binary) = which::which("go") else {
        debug!("no go binary found on PATH");
        return Ok(None);
    };

    let Some(root) = installation_root(&binary) else {
        debug!(binary = %binary.display(), "binary layout does not match a standard installation");
        return Ok(None);
    };

    let Some(parent) = root.parent().map(Path::to_path_buf) else {
        debug!(root = %root.display(), "installation root has no parent");
        return Ok(None);
    };

    std::fs::remove_dir_all(&root).map_err(|e| {
        if e.kind() == std::io::ErrorKind::PermissionDenied {
            anyhow::Error::from(GomanError::PermissionDenied {
                operation: "remove".to_string(),
                path: root.display().to_string(),
            })
        } else {
            anyhow::Error::from(e)
        }
    })?;

    info!(root = %root.display(), "removed installation");
    Ok(Some(RemovedInstallation { root, parent }))
}

/// Derive the installation root from the binary path.
///
/// Expects `<root>/bin/go` with the root named `go`.
fn installation_root(binary: &Path) -> Option<PathBuf> {
    let bin_dir = binary.parent()?;
    let root = bin_dir.parent()?;
    if root.file_name()? == "go" {
        Some(root.to_path_buf())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_installation_root_standard_layout() {
        let root = installation_root(Path::new("/usr/local/go/bin/go")).unwrap();
        assert_eq!(root, PathBuf::from("/usr/local/go"));
    }

    #[test]
    fn test_installation_root_rejects_other_names() {
        assert!(installation_root(Path::new("/usr/local/golang/bin/go")).is_none());
        assert!(installation_root(Path::new("/usr/bin/go")).is_none());
    }

    #[test]
    fn test_installation_root_too_shallow() {
        assert!(installation_root(Path::new("/go")).is_none());
    }
}
