//! Utility modules for goman.

pub mod platform;
pub mod progress;

pub use platform::{archive_extension, artifact_name, canonical_arch, canonical_os, host_artifact_name};
pub use progress::ProgressBar;
