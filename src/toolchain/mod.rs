//! Go toolchain I/O operations
//!
//! Everything that touches the outside world lives here: locating the
//! installed toolchain, querying the release feed, downloading artifacts,
//! extracting archives, and removing installations. The version-resolution
//! logic in [`crate::version`] stays pure; these modules feed it.

pub mod archive;
pub mod detect;
pub mod download;
pub mod releases;
pub mod remove;

pub use archive::{extract_archive, is_extractable};
pub use detect::detect_installed;
pub use download::download_artifact;
pub use releases::fetch_release_tags;
pub use remove::remove_installation;
