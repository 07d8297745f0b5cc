//! Release feed client
//!
//! Fetches the list of Go release tags from the upstream Git reference
//! feed. The feed returns JSON objects whose `ref` fields look like
//! `refs/tags/go1.21.0`; only the final path segment is kept. Tags arrive
//! in the feed's own order, oldest first, and that order is preserved
//! because the selection logic depends on feed position.

use crate::constants::{RELEASE_FEED_URL, feed_timeout};
use crate::core::GomanError;
use anyhow::Result;
use serde::Deserialize;
use tracing::debug;

/// One Git reference entry from the release feed.
///
/// The feed carries more fields per entry; only the reference name matters
/// here and the rest is ignored during deserialization.
#[derive(Debug, Deserialize)]
struct TagRef {
    #[serde(rename = "ref")]
    name: String,
}

/// Fetch all Go release tags from the upstream feed, in feed order.
///
/// Each returned string is a bare tag like `go1.21.0` or `go1.22rc1`, with
/// the `refs/tags/` prefix stripped.
///
/// # Errors
///
/// Returns [`GomanError::NetworkError`] when the request fails or the feed
/// responds with a non-success status, and
/// [`GomanError::ReleaseFeedParseError`] when the payload is not the
/// expected JSON shape.
pub async fn fetch_release_tags() -> Result<Vec<String>> {
    let client = reqwest::Client::builder()
        .user_agent(concat!("goman/", env!("CARGO_PKG_VERSION")))
        .timeout(feed_timeout())
        .build()
        .map_err(|e| GomanError::NetworkError {
            operation: "release feed fetch".to_string(),
            reason: e.to_string(),
        })?;

    let response = client
        .get(RELEASE_FEED_URL)
        .send()
        .await
        .map_err(|e| GomanError::NetworkError {
            operation: "release feed fetch".to_string(),
            reason: e.to_string(),
        })?;

    if !response.status().is_success() {
        return Err(GomanError::NetworkError {
            operation: "release feed fetch".to_string(),
            reason: format!("feed responded with status {}", response.status()),
        }
        .into());
    }

    let refs: Vec<TagRef> = response
        .json()
        .await
        .map_err(|e| GomanError::ReleaseFeedParseError {
            reason: e.to_string(),
        })?;

    let tags: Vec<String> = refs
        .into_iter()
        .filter_map(|r| r.name.rsplit('/').next().map(str::to_string))
        .collect();

    debug!(count = tags.len(), "fetched release tags");
    Ok(tags)
}
