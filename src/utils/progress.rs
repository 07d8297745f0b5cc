//! Progress indicators for goman operations
//!
//! Wraps the `indicatif` crate with goman styling so downloads and feed
//! queries look the same everywhere, and so progress output can be disabled
//! uniformly for scripts and CI.
//!
//! # Environment Variables
//!
//! - `GOMAN_NO_PROGRESS`: Set to any value to disable all progress indicators
//!
//! # Examples
//!
//! ## Download Progress
//!
//! ```rust
//! use goman_cli::utils::progress::ProgressBar;
//!
//! let progress = ProgressBar::new_download(2 * 1024 * 1024);
//! progress.set_prefix("go1.21.0.linux-amd64.tar.gz");
//!
//! // As chunks arrive:
//! progress.inc(65536);
//!
//! progress.finish_and_clear();
//! ```
//!
//! ## Spinner for Indeterminate Work
//!
//! ```rust
//! use goman_cli::utils::progress::ProgressBar;
//!
//! let spinner = ProgressBar::new_spinner();
//! spinner.set_message("Fetching release list...");
//! spinner.finish_and_clear();
//! ```

use indicatif::{ProgressBar as IndicatifBar, ProgressStyle as IndicatifStyle};
use std::time::Duration;

/// Checks if progress bars should be disabled.
///
/// Progress bars are disabled when the `GOMAN_NO_PROGRESS` environment
/// variable is set to any value. The `--no-progress` and `--quiet` flags
/// set this variable at startup.
fn is_progress_disabled() -> bool {
    std::env::var("GOMAN_NO_PROGRESS").is_ok()
}

/// A progress bar with consistent styling and cross-platform behavior.
///
/// Wraps the `indicatif` progress bar with goman styling. When progress is
/// disabled via the environment, every constructor returns a hidden bar
/// that silently ignores all operations, so call sites never branch.
#[derive(Clone)]
pub struct ProgressBar {
    inner: IndicatifBar,
}

impl ProgressBar {
    /// Creates a progress bar for a byte transfer of known total size.
    ///
    /// Displays bytes transferred, total bytes, and ETA:
    ///
    /// ```text
    /// go1.21.0.linux-amd64.tar.gz [━━━━━━━━╸       ] 24.1MB/67.0MB (00:12)
    /// ```
    #[must_use]
    pub fn new_download(total_bytes: u64) -> Self {
        let bar = if is_progress_disabled() {
            IndicatifBar::hidden()
        } else {
            let bar = IndicatifBar::new(total_bytes);
            bar.set_style(download_style());
            bar
        };
        Self { inner: bar }
    }

    /// Creates a spinner for operations of unknown duration.
    ///
    /// Used while waiting on the release feed, where no byte count is
    /// available. The animation ticks every 100ms.
    #[must_use]
    pub fn new_spinner() -> Self {
        let bar = if is_progress_disabled() {
            IndicatifBar::hidden()
        } else {
            let bar = IndicatifBar::new_spinner();
            bar.set_style(spinner_style());
            bar.enable_steady_tick(Duration::from_millis(100));
            bar
        };
        Self { inner: bar }
    }

    /// Sets the message displayed alongside the indicator.
    pub fn set_message(&self, msg: impl Into<String>) {
        self.inner.set_message(msg.into());
    }

    /// Sets the prefix shown at the start of the line, typically the
    /// artifact file name.
    pub fn set_prefix(&self, prefix: impl Into<String>) {
        self.inner.set_prefix(prefix.into());
    }

    /// Increments the progress by `delta` work units.
    pub fn inc(&self, delta: u64) {
        self.inner.inc(delta);
    }

    /// Finishes the indicator and replaces it with a completion message.
    pub fn finish_with_message(&self, msg: impl Into<String>) {
        self.inner.finish_with_message(msg.into());
    }

    /// Finishes the indicator and removes it from the terminal.
    pub fn finish_and_clear(&self) {
        self.inner.finish_and_clear();
    }
}

fn download_style() -> IndicatifStyle {
    IndicatifStyle::default_bar()
        .template("{prefix:.bold.cyan} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
        .unwrap()
        .progress_chars("━╸━")
}

fn spinner_style() -> IndicatifStyle {
    IndicatifStyle::default_spinner()
        .template("{prefix:.bold} {spinner:.cyan} {msg}")
        .unwrap()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_bar() {
        let pb = ProgressBar::new_download(1024);
        pb.set_prefix("go1.21.0.linux-amd64.tar.gz");
        pb.inc(512);
        pb.finish_with_message("Done");
    }

    #[test]
    fn test_spinner() {
        let spinner = ProgressBar::new_spinner();
        spinner.set_message("Fetching release list...");
        spinner.finish_and_clear();
    }

    #[test]
    fn test_styles_build() {
        let _download = download_style();
        let _spinner = spinner_style();
    }

    #[test]
    fn test_progress_respects_no_progress_flag() {
        unsafe {
            std::env::set_var("GOMAN_NO_PROGRESS", "1");
        }

        let pb = ProgressBar::new_download(100);
        pb.set_message("Should be hidden");
        pb.inc(50);
        pb.finish_and_clear();

        unsafe {
            std::env::remove_var("GOMAN_NO_PROGRESS");
        }
    }
}
