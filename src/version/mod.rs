//! Version parsing, ordering, and update selection for Go release tags.
//!
//! This module is the core of goman: a pure, I/O-free engine that turns raw
//! release tags into structured values and decides which release, if any,
//! should be installed.
//!
//! # Tag Format
//!
//! Go releases are tagged `go<major>.<minor>[.<patch>][suffix]`, where the
//! suffix marks a pre-release channel (`beta1`, `rc2`). This is *not* semver:
//! the patch component may be absent and pre-release suffixes are attached
//! directly to the numeric triple, so the parser here targets exactly this
//! scheme rather than delegating to a general-purpose version library.
//!
//! # Submodules
//!
//! - [`comparison`] - Three-way ordering of parsed versions, with the
//!   release channel used strictly as a tie-break at equal numeric triples.
//! - [`selection`] - Update and install-target selection over the
//!   chronologically ordered release list.
//!
//! # Examples
//!
//! ```rust
//! use goman_cli::version::{Channel, GoVersion};
//!
//! let v = GoVersion::parse("go1.21.3").unwrap();
//! assert_eq!((v.major, v.minor, v.patch), (1, 21, 3));
//! assert_eq!(v.channel, Channel::Stable);
//!
//! let rc = GoVersion::parse("1.22rc1").unwrap();
//! assert_eq!(rc.patch, 0);
//! assert_eq!(rc.channel, Channel::ReleaseCandidate);
//!
//! // Absence, never a zero-valued tag
//! assert!(GoVersion::parse("not a version").is_none());
//! ```

pub mod comparison;
pub mod selection;

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// Release channel derived from the tag suffix.
///
/// A tag without a suffix is a stable release. A non-empty suffix matching
/// neither `beta` nor `rc` is classified as [`Channel::Unknown`] and ranks
/// below every recognized channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Final release, no suffix (`go1.21.3`).
    Stable,
    /// Release candidate (`go1.22rc1`).
    ReleaseCandidate,
    /// Beta pre-release (`go1.22beta1`).
    Beta,
    /// Unrecognized non-empty suffix.
    Unknown,
}

impl Channel {
    /// Ordering rank used to break ties between releases with identical
    /// numeric triples: stable > rc > beta > unknown.
    pub(crate) const fn rank(self) -> u8 {
        match self {
            Self::Stable => 3,
            Self::ReleaseCandidate => 2,
            Self::Beta => 1,
            Self::Unknown => 0,
        }
    }

    /// Whether this channel is a pre-release (beta or release candidate).
    ///
    /// Pre-releases are skipped by update and install selection unless the
    /// user opted in with `--preview`.
    #[must_use]
    pub const fn is_preview(self) -> bool {
        matches!(self, Self::Beta | Self::ReleaseCandidate)
    }
}

/// A parsed Go version tag.
///
/// Immutable once constructed. A `GoVersion` can only be obtained through
/// [`GoVersion::parse`], which guarantees the presence of at least a numeric
/// `major.minor` prefix; there is no way to construct a zero-valued tag from
/// an invalid string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoVersion {
    /// The exact substring matched from the input, without any `go` or `v`
    /// prefix (e.g. `1.22rc1` out of `go1.22rc1`).
    pub raw: String,
    /// Major version component.
    pub major: u32,
    /// Minor version component.
    pub minor: u32,
    /// Patch version component; 0 when absent from the tag.
    pub patch: u32,
    /// Release channel derived from the suffix.
    pub channel: Channel,
}

/// Pattern matching `major.minor[.patch][suffix]` anywhere in the input.
///
/// Matching is deliberately not anchored: release tags carry a `go` prefix
/// and `go version` output embeds the tag in a longer line.
fn tag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(\d+)\.(\d+)(?:\.(\d+))?([0-9A-Za-z]+)?").expect("tag pattern is valid")
    })
}

impl GoVersion {
    /// Parses a version tag out of an arbitrary string.
    ///
    /// Locates the first `digits.digits[.digits][suffix]` pattern anywhere in
    /// the input. Major and minor are mandatory; patch defaults to 0. A
    /// trailing alphanumeric suffix selects the channel: containing `beta`
    /// means beta, containing `rc` means release candidate, anything else is
    /// unknown; no suffix means stable.
    ///
    /// Returns `None` when no `major.minor` numeric prefix exists. Callers
    /// must treat this as "not a valid version", never as a zero version.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use goman_cli::version::{Channel, GoVersion};
    ///
    /// let v = GoVersion::parse("go version go1.21.0 linux/amd64").unwrap();
    /// assert_eq!(v.raw, "1.21.0");
    /// assert_eq!(v.channel, Channel::Stable);
    ///
    /// assert!(GoVersion::parse("").is_none());
    /// assert!(GoVersion::parse("gopher").is_none());
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let captures = tag_pattern().captures(input)?;

        let raw = captures.get(0)?.as_str().to_string();
        let major = captures.get(1)?.as_str().parse().ok()?;
        let minor = captures.get(2)?.as_str().parse().ok()?;
        let patch = match captures.get(3) {
            Some(m) => m.as_str().parse().ok()?,
            None => 0,
        };

        let channel = match captures.get(4) {
            Some(suffix) if suffix.as_str().contains("beta") => Channel::Beta,
            Some(suffix) if suffix.as_str().contains("rc") => Channel::ReleaseCandidate,
            Some(_) => Channel::Unknown,
            None => Channel::Stable,
        };

        Some(Self {
            raw,
            major,
            minor,
            patch,
            channel,
        })
    }

    /// The canonical release tag name, with the `go` prefix the official
    /// feed and download site use (e.g. `go1.21.3`).
    #[must_use]
    pub fn tag_name(&self) -> String {
        format!("go{}", self.raw)
    }

    /// Whether two parsed versions refer to the same release tag.
    ///
    /// Compares the matched tag text rather than the numeric triple, so
    /// `1.22rc1` and `1.22rc2` are distinct even though their triples and
    /// channels are equal.
    #[must_use]
    pub fn same_release(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl fmt::Display for GoVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
