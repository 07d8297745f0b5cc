//! Three-way ordering of parsed Go versions.
//!
//! The ordering rule is lexicographic tuple comparison of
//! `(major, minor, patch)`, with the release channel used strictly as a
//! final tie-break when the numeric triples are equal. An earlier variant of
//! this tool combined the components arithmetically with positional weights
//! (100000 x major + 10 x minor + patch, plus small channel adjustments);
//! that scheme lets a large minor or patch difference bleed into a more
//! significant component and lets the channel adjustment flip comparisons it
//! must not touch. Tuple comparison has neither failure mode.
//!
//! # Examples
//!
//! ```rust
//! use std::cmp::Ordering;
//! use goman_cli::version::GoVersion;
//! use goman_cli::version::comparison::{compare, compare_releases};
//!
//! let a = GoVersion::parse("1.9.0").unwrap();
//! let b = GoVersion::parse("1.10.0").unwrap();
//! assert_eq!(compare(&a, &b), Ordering::Less);
//!
//! // Channel only matters at an equal numeric triple
//! let stable = GoVersion::parse("1.22.0").unwrap();
//! let rc = GoVersion::parse("1.22rc1").unwrap();
//! assert_eq!(compare(&stable, &rc), Ordering::Equal);
//! assert_eq!(compare_releases(&stable, &rc), Ordering::Greater);
//! ```

use std::cmp::Ordering;

use super::GoVersion;

/// Compares two versions by their numeric triple only.
///
/// This is the comparison that update decisions are based on: a release
/// supersedes another only when it is strictly newer here, regardless of
/// channel. Returns [`Ordering::Equal`] for releases that differ only in
/// their suffix (e.g. `1.22beta1` vs `1.22rc1`).
#[must_use]
pub fn compare(a: &GoVersion, b: &GoVersion) -> Ordering {
    (a.major, a.minor, a.patch).cmp(&(b.major, b.minor, b.patch))
}

/// Compares two versions, breaking numeric ties by release channel.
///
/// The channel tie-break orders stable above release candidates, release
/// candidates above betas, and betas above unrecognized suffixes. It is
/// applied only when the numeric triples are equal, so it can never reverse
/// an ordering established by [`compare`].
#[must_use]
pub fn compare_releases(a: &GoVersion, b: &GoVersion) -> Ordering {
    compare(a, b).then_with(|| a.channel.rank().cmp(&b.channel.rank()))
}

/// Whether `candidate` is strictly newer than `current` by numeric triple.
#[must_use]
pub fn is_newer(candidate: &GoVersion, current: &GoVersion) -> bool {
    compare(current, candidate) == Ordering::Less
}
