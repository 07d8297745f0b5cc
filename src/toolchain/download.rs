//! Release artifact downloads
//!
//! Streams release archives from the Go download site to disk, with a byte
//! progress bar when the server reports a content length. Downloads land
//! in a `.part` file that is renamed into place only on success, so a
//! partial download never masquerades as a complete archive; a transfer
//! that fails midway deletes its `.part` file instead of leaving it behind.

use crate::constants::{DOWNLOAD_BASE_URL, download_timeout};
use crate::core::GomanError;
use crate::utils::progress::ProgressBar;
use anyhow::{Context, Result};
use futures::{Stream, StreamExt};
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

/// Download a release artifact by name into `dest_dir`.
///
/// Fetches `{DOWNLOAD_BASE_URL}/{artifact}` and returns the path of the
/// completed file, `dest_dir/artifact`.
///
/// # Errors
///
/// Returns [`GomanError::NetworkError`] when the request fails or the
/// server responds with a non-success status, and IO errors when the
/// destination cannot be written.
pub async fn download_artifact(artifact: &str, dest_dir: &Path) -> Result<PathBuf> {
    let url = format!("{DOWNLOAD_BASE_URL}/{artifact}");
    debug!(%url, "starting download");

    let client = reqwest::Client::builder()
        .user_agent(concat!("goman/", env!("CARGO_PKG_VERSION")))
        .timeout(download_timeout())
        .build()
        .map_err(|e| GomanError::NetworkError {
            operation: "download".to_string(),
            reason: e.to_string(),
        })?;

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| GomanError::NetworkError {
            operation: "download".to_string(),
            reason: e.to_string(),
        })?;

    if !response.status().is_success() {
        return Err(GomanError::NetworkError {
            operation: "download".to_string(),
            reason: format!("'{url}' responded with status {}", response.status()),
        }
        .into());
    }

    let total = response.content_length().unwrap_or(0);
    let progress = ProgressBar::new_download(total);
    progress.set_prefix(artifact.to_string());

    let final_path = dest_dir.join(artifact);
    let part_path = final_path.with_extension("part");

    write_stream_to_file(response.bytes_stream(), &part_path, &progress).await?;

    tokio::fs::rename(&part_path, &final_path)
        .await
        .with_context(|| format!("failed to finalize {}", final_path.display()))?;

    progress.finish_and_clear();
    info!(path = %final_path.display(), "download complete");
    Ok(final_path)
}

/// Write a byte stream to `path`, advancing `progress` per chunk.
///
/// On any failure the partially written file is deleted (best effort)
/// before the error is propagated, so failed transfers leave nothing
/// behind.
async fn write_stream_to_file<S, B, E>(
    mut stream: S,
    path: &Path,
    progress: &ProgressBar,
) -> Result<()>
where
    S: Stream<Item = std::result::Result<B, E>> + Unpin,
    B: AsRef<[u8]>,
    E: std::fmt::Display,
{
    let result = async {
        let mut file = tokio::fs::File::create(path)
            .await
            .with_context(|| format!("failed to create {}", path.display()))?;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| GomanError::NetworkError {
                operation: "download".to_string(),
                reason: e.to_string(),
            })?;
            file.write_all(chunk.as_ref())
                .await
                .with_context(|| format!("failed to write to {}", path.display()))?;
            progress.inc(chunk.as_ref().len() as u64);
        }

        file.flush()
            .await
            .with_context(|| format!("failed to flush {}", path.display()))?;
        Ok(())
    }
    .await;

    if result.is_err() {
        if let Err(e) = tokio::fs::remove_file(path).await {
            debug!(path = %path.display(), error = %e, "failed to clean up partial download");
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    type ChunkResult = std::result::Result<Vec<u8>, std::io::Error>;

    #[tokio::test]
    async fn test_stream_written_to_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("artifact.part");
        let progress = ProgressBar::new_download(8);

        let chunks: Vec<ChunkResult> = vec![Ok(b"goesgo".to_vec()), Ok(b"od".to_vec())];
        let stream = futures::stream::iter(chunks);

        write_stream_to_file(stream, &path, &progress).await.unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"goesgood");
    }

    #[tokio::test]
    async fn test_failed_stream_cleans_up_partial_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("artifact.part");
        let progress = ProgressBar::new_download(0);

        let chunks: Vec<ChunkResult> = vec![
            Ok(b"partial".to_vec()),
            Err(std::io::Error::other("connection reset")),
        ];
        let stream = futures::stream::iter(chunks);

        let result = write_stream_to_file(stream, &path, &progress).await;
        assert!(result.is_err());
        assert!(!path.exists(), "partial file must be removed on failure");
    }

    #[test]
    fn test_part_path_naming() {
        let final_path = PathBuf::from("/tmp/go1.21.0.linux-amd64.tar.gz");
        let part_path = final_path.with_extension("part");
        assert_eq!(
            part_path,
            PathBuf::from("/tmp/go1.21.0.linux-amd64.tar.part")
        );
        assert_ne!(part_path, final_path);
    }

    #[test]
    fn test_download_url_format() {
        let artifact = "go1.21.0.linux-amd64.tar.gz";
        let url = format!("{DOWNLOAD_BASE_URL}/{artifact}");
        assert_eq!(url, "https://go.dev/dl/go1.21.0.linux-amd64.tar.gz");
    }
}
