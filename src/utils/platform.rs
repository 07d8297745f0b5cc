//! Platform detection and release artifact naming
//!
//! Maps host OS and architecture identifiers onto the canonical names the
//! Go download site uses, and assembles full artifact file names like
//! `go1.21.0.linux-amd64.tar.gz`.
//!
//! The mappings are deliberately closed: an identifier with no entry is an
//! error, never a pass-through guess, so install and update halt before
//! requesting an artifact that cannot exist.

use crate::core::GomanError;
use anyhow::Result;

/// Map an operating system identifier to its canonical download-site name.
///
/// Returns `None` for operating systems Go ships no binary release for.
#[must_use]
pub fn canonical_os(os: &str) -> Option<&'static str> {
    match os {
        "linux" => Some("linux"),
        "macos" | "darwin" => Some("darwin"),
        "windows" => Some("windows"),
        _ => None,
    }
}

/// Map a CPU architecture identifier to its canonical download-site name.
///
/// Accepts the spellings reported by `std::env::consts::ARCH`, `uname -m`,
/// and Windows' `PROCESSOR_ARCHITECTURE`.
#[must_use]
pub fn canonical_arch(arch: &str) -> Option<&'static str> {
    match arch {
        "x86_64" | "amd64" | "AMD64" => Some("amd64"),
        "aarch64" | "arm64" | "ARM64" => Some("arm64"),
        "x86" | "i386" | "i686" | "386" => Some("386"),
        "arm" | "armv6l" => Some("armv6l"),
        _ => None,
    }
}

/// The archive extension each canonical OS ships its release under.
///
/// Darwin maps to `.pkg`, which names the artifact correctly but cannot be
/// extracted; callers that intend to extract must check before downloading.
#[must_use]
pub fn archive_extension(canonical_os: &str) -> Option<&'static str> {
    match canonical_os {
        "linux" => Some(".tar.gz"),
        "darwin" => Some(".pkg"),
        "windows" => Some(".zip"),
        _ => None,
    }
}

/// Assemble the canonical artifact file name for a version and platform.
///
/// The version may be given with or without its `go` prefix; the produced
/// name always carries one.
///
/// # Errors
///
/// Returns [`GomanError::UnsupportedPlatform`] when either identifier has
/// no canonical mapping.
pub fn artifact_name(version: &str, os: &str, arch: &str) -> Result<String> {
    let (canon_os, canon_arch, ext) = resolve(os, arch)?;
    let tag = if version.starts_with("go") {
        version.to_string()
    } else {
        format!("go{version}")
    };
    Ok(format!("{tag}.{canon_os}-{canon_arch}{ext}"))
}

/// Assemble the artifact file name for the host platform.
///
/// # Errors
///
/// Returns [`GomanError::UnsupportedPlatform`] when the host has no
/// canonical mapping.
pub fn host_artifact_name(version: &str) -> Result<String> {
    artifact_name(version, std::env::consts::OS, std::env::consts::ARCH)
}

fn resolve(os: &str, arch: &str) -> Result<(&'static str, &'static str, &'static str)> {
    let unsupported = || GomanError::UnsupportedPlatform {
        os: os.to_string(),
        arch: arch.to_string(),
    };

    let canon_os = canonical_os(os).ok_or_else(unsupported)?;
    let canon_arch = canonical_arch(arch).ok_or_else(unsupported)?;
    let ext = archive_extension(canon_os).ok_or_else(unsupported)?;
    Ok((canon_os, canon_arch, ext))
}
