//! List recent Go releases from the feed.

use crate::constants::DEFAULT_AVAILABLE_COUNT;
use crate::toolchain::fetch_release_tags;
use crate::utils::progress::ProgressBar;
use crate::version::GoVersion;
use anyhow::Result;
use clap::Args;
use colored::Colorize;

/// Command-line arguments for the available command.
///
/// Prints the most recent release tags, newest first, exactly as the feed
/// lists them. No channel filtering: beta and release-candidate tags appear
/// alongside stable ones (colored differently), and tags the version parser
/// does not recognize are printed uncolored rather than hidden.
///
/// # Examples
///
/// ```bash
/// goman available
/// goman available --count 25
/// ```
#[derive(Args, Debug)]
pub struct AvailableCommand {
    /// Number of releases to list.
    #[arg(long, short = 'n', default_value_t = DEFAULT_AVAILABLE_COUNT)]
    pub count: usize,
}

impl AvailableCommand {
    /// Execute the available command.
    pub async fn execute(self) -> Result<()> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_message("Fetching release list...");
        let tags = fetch_release_tags().await?;
        spinner.finish_and_clear();

        let recent = recent_tags(&tags, self.count);
        if recent.is_empty() {
            println!("No releases found");
            return Ok(());
        }

        for tag in recent {
            match GoVersion::parse(tag) {
                Some(v) if v.channel.is_preview() => println!("{}", tag.yellow()),
                Some(_) => println!("{}", tag.green()),
                None => println!("{tag}"),
            }
        }
        Ok(())
    }
}

/// The `count` most recent tags from the chronologically ascending feed,
/// newest first, with no filtering.
fn recent_tags(tags: &[String], count: usize) -> Vec<&str> {
    tags.iter().rev().take(count).map(String::as_str).collect()
}
