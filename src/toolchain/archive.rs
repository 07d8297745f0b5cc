//! Release archive extraction
//!
//! Opens `.tar.gz` and `.zip` release archives and unpacks them into a
//! destination directory. Go release archives carry a single top-level
//! `go/` directory; that root is preserved, so extracting into `/usr/local`
//! yields `/usr/local/go`.
//!
//! Entries whose paths are absolute or escape the destination are rejected
//! rather than written. The darwin `.pkg` installer is not an archive and
//! is reported as unsupported.

use crate::core::GomanError;
use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::BufReader;
use std::path::{Component, Path};
use tracing::{debug, info};

/// Whether `extract_archive` can open an artifact with this file name.
///
/// Checked before downloading so an update never fetches an artifact it
/// cannot unpack.
#[must_use]
pub fn is_extractable(name: &str) -> bool {
    name.ends_with(".tar.gz") || name.ends_with(".tgz") || name.ends_with(".zip")
}

/// Extract a release archive into `dest`.
///
/// Dispatches on the file extension. The destination directory must
/// already exist.
///
/// # Errors
///
/// Returns [`GomanError::UnsupportedArchiveFormat`] for formats the
/// extractor cannot open, including the darwin `.pkg` installer, and IO
/// errors when an entry cannot be written.
pub fn extract_archive(archive: &Path, dest: &Path) -> Result<()> {
    let name = archive
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();

    if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
        extract_tar_gz(archive, dest)
    } else if name.ends_with(".zip") {
        extract_zip(archive, dest)
    } else {
        Err(GomanError::UnsupportedArchiveFormat {
            name: name.to_string(),
        }
        .into())
    }
}

fn extract_tar_gz(archive: &Path, dest: &Path) -> Result<()> {
    debug!(archive = %archive.display(), dest = %dest.display(), "extracting tar.gz");

    let file = File::open(archive)
        .with_context(|| format!("failed to open {}", archive.display()))?;
    let decoder = GzDecoder::new(BufReader::new(file));
    let mut tar = tar::Archive::new(decoder);

    for entry in tar
        .entries()
        .with_context(|| format!("failed to read {}", archive.display()))?
    {
        let mut entry = entry.context("failed to read archive entry")?;
        let path = entry
            .path()
            .context("archive entry has invalid path")?
            .into_owned();

        if !is_safe_entry_path(&path) {
            anyhow::bail!("archive entry '{}' escapes the destination", path.display());
        }

        let target = dest.join(&path);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        entry
            .unpack(&target)
            .with_context(|| format!("failed to extract {}", target.display()))?;
    }

    info!(dest = %dest.display(), "extraction complete");
    Ok(())
}

fn extract_zip(archive: &Path, dest: &Path) -> Result<()> {
    debug!(archive = %archive.display(), dest = %dest.display(), "extracting zip");

    let file = File::open(archive)
        .with_context(|| format!("failed to open {}", archive.display()))?;
    let mut zip = zip::ZipArchive::new(BufReader::new(file))
        .with_context(|| format!("failed to read {}", archive.display()))?;

    for i in 0..zip.len() {
        let mut entry = zip.by_index(i).context("failed to read archive entry")?;

        let Some(relative) = entry.enclosed_name() else {
            anyhow::bail!("archive entry '{}' escapes the destination", entry.name());
        };
        let target = dest.join(relative);

        if entry.is_dir() {
            std::fs::create_dir_all(&target)
                .with_context(|| format!("failed to create {}", target.display()))?;
        } else {
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            let mut out = File::create(&target)
                .with_context(|| format!("failed to create {}", target.display()))?;
            std::io::copy(&mut entry, &mut out)
                .with_context(|| format!("failed to extract {}", target.display()))?;
        }
    }

    info!(dest = %dest.display(), "extraction complete");
    Ok(())
}

fn is_safe_entry_path(path: &Path) -> bool {
    !path.is_absolute()
        && path
            .components()
            .all(|c| !matches!(c, Component::ParentDir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn build_tar_gz(dir: &Path, files: &[(&str, &str)]) -> std::path::PathBuf {
        let archive_path = dir.join("test.tar.gz");
        let file = File::create(&archive_path).unwrap();
        let encoder = flate2::write::GzEncoder::new(file, flate2::Compression::default());
        let mut builder = tar::Builder::new(encoder);

        for (name, content) in files {
            let mut header = tar::Header::new_gnu();
            header.set_size(content.len() as u64);
            header.set_mode(0o644);
            if header.set_path(name).is_err() {
                // tar refuses to encode `..` paths; write the raw bytes so
                // tests can build a traversal archive.
                header.as_gnu_mut().unwrap().name[..name.len()]
                    .copy_from_slice(name.as_bytes());
            }
            header.set_cksum();
            builder.append(&header, content.as_bytes()).unwrap();
        }

        builder.into_inner().unwrap().finish().unwrap();
        archive_path
    }

    fn build_zip(dir: &Path, files: &[(&str, &str)]) -> std::path::PathBuf {
        let archive_path = dir.join("test.zip");
        let file = File::create(&archive_path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        let options = zip::write::SimpleFileOptions::default();

        for (name, content) in files {
            writer.start_file(*name, options).unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }

        writer.finish().unwrap();
        archive_path
    }

    #[test]
    fn test_is_extractable() {
        assert!(is_extractable("go1.21.0.linux-amd64.tar.gz"));
        assert!(is_extractable("go1.21.0.windows-amd64.zip"));
        assert!(is_extractable("something.tgz"));
        assert!(!is_extractable("go1.21.0.darwin-arm64.pkg"));
        assert!(!is_extractable("readme.txt"));
    }

    #[test]
    fn test_extract_tar_gz_preserves_root() {
        let tmp = TempDir::new().unwrap();
        let archive = build_tar_gz(
            tmp.path(),
            &[
                ("go/bin/go", "binary"),
                ("go/VERSION", "go1.21.0"),
            ],
        );

        let dest = tmp.path().join("out");
        std::fs::create_dir_all(&dest).unwrap();
        extract_archive(&archive, &dest).unwrap();

        assert!(dest.join("go/bin/go").exists());
        assert_eq!(
            std::fs::read_to_string(dest.join("go/VERSION")).unwrap(),
            "go1.21.0"
        );
    }

    #[test]
    fn test_extract_zip() {
        let tmp = TempDir::new().unwrap();
        let archive = build_zip(
            tmp.path(),
            &[("go/bin/go.exe", "binary"), ("go/VERSION", "go1.22.1")],
        );

        let dest = tmp.path().join("out");
        std::fs::create_dir_all(&dest).unwrap();
        extract_archive(&archive, &dest).unwrap();

        assert!(dest.join("go/bin/go.exe").exists());
        assert_eq!(
            std::fs::read_to_string(dest.join("go/VERSION")).unwrap(),
            "go1.22.1"
        );
    }

    #[test]
    fn test_extract_rejects_traversal() {
        let tmp = TempDir::new().unwrap();
        let archive = build_tar_gz(tmp.path(), &[("../escape.txt", "bad")]);

        let dest = tmp.path().join("out");
        std::fs::create_dir_all(&dest).unwrap();
        assert!(extract_archive(&archive, &dest).is_err());
        assert!(!tmp.path().join("escape.txt").exists());
    }

    #[test]
    fn test_extract_pkg_unsupported() {
        let tmp = TempDir::new().unwrap();
        let pkg = tmp.path().join("go1.21.0.darwin-arm64.pkg");
        std::fs::write(&pkg, b"not an archive").unwrap();

        let err = extract_archive(&pkg, tmp.path()).unwrap_err();
        let goman = err.downcast_ref::<GomanError>().unwrap();
        match goman {
            GomanError::UnsupportedArchiveFormat { name } => {
                assert_eq!(name, "go1.21.0.darwin-arm64.pkg");
            }
            other => panic!("Expected UnsupportedArchiveFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_safe_entry_path() {
        assert!(is_safe_entry_path(Path::new("go/bin/go")));
        assert!(!is_safe_entry_path(Path::new("../outside")));
        assert!(!is_safe_entry_path(Path::new("/etc/passwd")));
    }
}
