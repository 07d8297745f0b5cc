//! Global constants used throughout the goman codebase.
//!
//! This module contains endpoint URLs, timeout durations, and other values
//! that are used across multiple modules. Defining them centrally improves
//! maintainability and makes magic numbers more discoverable.

use std::time::Duration;

/// Release feed endpoint listing all `go*` tags of the golang/go repository.
///
/// The GitHub matching-refs API returns tags in ascending chronological
/// order, which the update-selection logic relies on.
pub const RELEASE_FEED_URL: &str =
    "https://api.github.com/repos/golang/go/git/matching-refs/tags/go";

/// Base URL for release artifact downloads.
pub const DOWNLOAD_BASE_URL: &str = "https://go.dev/dl";

/// Default number of releases shown by `goman available`.
pub const DEFAULT_AVAILABLE_COUNT: usize = 10;

/// Timeout for release feed requests (30 seconds).
///
/// The feed response is a moderately sized JSON document; anything slower
/// than this indicates a connectivity problem worth surfacing.
pub fn feed_timeout() -> Duration {
    Duration::from_secs(30)
}

/// Timeout for artifact downloads (10 minutes).
///
/// Release archives are in the 60-250 MB range, so the download timeout
/// must accommodate slow links.
pub fn download_timeout() -> Duration {
    Duration::from_secs(600)
}
