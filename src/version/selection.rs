//! Update and install-target selection over the release list.
//!
//! The release feed returns tags in ascending chronological order. Update
//! selection scopes its candidates to the entries strictly after the
//! installed version's position, which both avoids re-evaluating historical
//! releases and guarantees a release older than the installed one is never
//! proposed, however stable it may be.

use tracing::debug;

use super::GoVersion;
use super::comparison::is_newer;

/// Outcome of scanning the release list for an update.
///
/// The two "no update" cases are deliberately distinct: an installed tag
/// missing from the feed means goman cannot reason about it (and saying
/// "up to date" would be wrong), while [`UpdateOutcome::AlreadyCurrent`]
/// means the tag was found and nothing newer qualifies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// A newer qualifying release was found.
    Available(GoVersion),
    /// The installed tag was found, but no later entry passes the channel
    /// policy (or none exists).
    AlreadyCurrent,
    /// The installed tag does not appear in the release list at all.
    NotInReleaseList,
}

/// Decides whether `candidate` should replace `installed`.
///
/// The candidate must be strictly newer by numeric triple; releases that
/// differ only in suffix never supersede each other, and downgrades are
/// never proposed. Beta and release-candidate candidates qualify only when
/// `allow_preview` is set; a candidate with an unrecognized suffix is
/// treated like a stable release, matching the behavior of the official
/// feed where such tags do not occur in practice.
#[must_use]
pub fn supersedes(installed: &GoVersion, candidate: &GoVersion, allow_preview: bool) -> bool {
    if !is_newer(candidate, installed) {
        return false;
    }
    if candidate.channel.is_preview() {
        return allow_preview;
    }
    true
}

/// Selects the best applicable upgrade target from the release list.
///
/// Locates the installed version's tag in `releases` (comparing parsed tags,
/// so a `go` or `v` prefix on either side is irrelevant), takes every entry
/// strictly after that position as a candidate, and scans the candidates
/// from most recent to least recent, returning the first one
/// [`supersedes`] approves.
///
/// Entries that do not parse as versions are skipped.
pub fn select_update(
    installed: &GoVersion,
    releases: &[String],
    allow_preview: bool,
) -> UpdateOutcome {
    let position = releases.iter().position(|tag| {
        GoVersion::parse(tag).is_some_and(|parsed| parsed.same_release(installed))
    });

    let Some(position) = position else {
        debug!(tag = %installed, "installed version not present in release list");
        return UpdateOutcome::NotInReleaseList;
    };

    for tag in releases[position + 1..].iter().rev() {
        let Some(candidate) = GoVersion::parse(tag) else {
            debug!(%tag, "skipping unparsable release tag");
            continue;
        };
        if supersedes(installed, &candidate, allow_preview) {
            return UpdateOutcome::Available(candidate);
        }
    }

    UpdateOutcome::AlreadyCurrent
}

/// Selects the release a fresh install should target.
///
/// Scans the list from most recent to least recent and returns the first
/// stable entry, or the first entry of any channel when `allow_preview` is
/// set. Returns `None` when the list is empty or no entry satisfies the
/// channel policy.
pub fn select_install_target(releases: &[String], allow_preview: bool) -> Option<GoVersion> {
    for tag in releases.iter().rev() {
        let Some(candidate) = GoVersion::parse(tag) else {
            debug!(%tag, "skipping unparsable release tag");
            continue;
        };
        if allow_preview || !candidate.channel.is_preview() {
            return Some(candidate);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(tag: &str) -> GoVersion {
        GoVersion::parse(tag).unwrap()
    }

    fn releases(tags: &[&str]) -> Vec<String> {
        tags.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_supersedes_newer_patch() {
        assert!(supersedes(&v("1.21.0"), &v("1.21.1"), false));
    }

    #[test]
    fn test_supersedes_preview_gated() {
        assert!(!supersedes(&v("1.21.0"), &v("1.22beta1"), false));
        assert!(supersedes(&v("1.21.0"), &v("1.22beta1"), true));
        assert!(!supersedes(&v("1.21.0"), &v("1.22rc1"), false));
        assert!(supersedes(&v("1.21.0"), &v("1.22rc1"), true));
    }

    #[test]
    fn test_supersedes_never_downgrades() {
        assert!(!supersedes(&v("1.21.1"), &v("1.21.0"), false));
        assert!(!supersedes(&v("1.21.1"), &v("1.21.0"), true));
        assert!(!supersedes(&v("1.21.0"), &v("1.21.0"), true));
    }

    #[test]
    fn test_supersedes_equal_triple_different_channel() {
        // 1.22.0 vs 1.22rc1 share a numeric triple; neither supersedes
        assert!(!supersedes(&v("1.22rc1"), &v("1.22.0"), true));
        assert!(!supersedes(&v("1.22.0"), &v("1.22rc1"), true));
    }

    #[test]
    fn test_select_update_skips_trailing_preview() {
        let list = releases(&["go1.20.0", "go1.21.0", "go1.21.1", "go1.22beta1"]);
        let outcome = select_update(&v("go1.21.0"), &list, false);
        assert_eq!(outcome, UpdateOutcome::Available(v("1.21.1")));
    }

    #[test]
    fn test_select_update_prefers_preview_when_allowed() {
        let list = releases(&["go1.20.0", "go1.21.0", "go1.21.1", "go1.22beta1"]);
        let outcome = select_update(&v("go1.21.0"), &list, true);
        assert_eq!(outcome, UpdateOutcome::Available(v("1.22beta1")));
    }

    #[test]
    fn test_select_update_not_in_release_list() {
        let list = releases(&["go1.20.0", "go1.21.0"]);
        let outcome = select_update(&v("1.21.2"), &list, false);
        assert_eq!(outcome, UpdateOutcome::NotInReleaseList);
    }

    #[test]
    fn test_select_update_already_current() {
        let list = releases(&["go1.20.0", "go1.21.0"]);
        assert_eq!(
            select_update(&v("go1.21.0"), &list, false),
            UpdateOutcome::AlreadyCurrent
        );

        // Later entries exist but are all previews
        let list = releases(&["go1.21.0", "go1.22beta1", "go1.22rc1"]);
        assert_eq!(
            select_update(&v("go1.21.0"), &list, false),
            UpdateOutcome::AlreadyCurrent
        );
    }

    #[test]
    fn test_select_update_ignores_prefix_differences() {
        // Installed tag parsed from `go version` output, feed uses go-prefix
        let installed = GoVersion::parse("go version go1.21.0 linux/amd64").unwrap();
        let list = releases(&["go1.20.0", "go1.21.0", "go1.21.1"]);
        assert_eq!(
            select_update(&installed, &list, false),
            UpdateOutcome::Available(v("1.21.1"))
        );
    }

    #[test]
    fn test_select_update_ignores_older_entries() {
        // Everything before the installed position is out of scope, even
        // entries newer by version number (defensive against feed reordering)
        let list = releases(&["go1.21.1", "go1.21.0"]);
        assert_eq!(
            select_update(&v("go1.21.1"), &list, false),
            UpdateOutcome::AlreadyCurrent
        );
    }

    #[test]
    fn test_select_install_target_latest_stable() {
        let list = releases(&["go1.20.0", "go1.21.0", "go1.22beta1"]);
        assert_eq!(select_install_target(&list, false), Some(v("1.21.0")));
    }

    #[test]
    fn test_select_install_target_preview() {
        let list = releases(&["go1.20.0", "go1.21.0", "go1.22beta1"]);
        assert_eq!(select_install_target(&list, true), Some(v("1.22beta1")));
    }

    #[test]
    fn test_select_install_target_empty_list() {
        assert_eq!(select_install_target(&[], false), None);
        assert_eq!(select_install_target(&[], true), None);
    }

    #[test]
    fn test_select_install_target_all_previews_without_flag() {
        let list = releases(&["go1.22beta1", "go1.22rc1"]);
        assert_eq!(select_install_target(&list, false), None);
    }
}
