//! goman - Go toolchain installation manager
//!
//! A command-line utility that manages a single local installation of the Go
//! toolchain: it detects the installed version, queries the official release
//! feed, decides whether an update is warranted, and performs the
//! download/replace/extract flow to install or update Go in place.
//!
//! # Architecture Overview
//!
//! The heart of goman is a small, pure version-resolution engine; everything
//! around it is I/O plumbing:
//!
//! - [`version`] - Parse heterogeneous release tags (`go1.21.3`, `1.22rc1`)
//!   into a structured [`version::GoVersion`], order them (including
//!   pre-release channels), and decide which release, if any, supersedes the
//!   installed one.
//! - [`toolchain`] - The side-effecting collaborators: invoking the installed
//!   `go` binary, fetching the tag list from the release feed, streaming
//!   artifact downloads with progress, extracting archives, and removing the
//!   existing installation.
//! - [`cli`] - Command-line surface (`status`, `check`, `update`, `install`,
//!   `available`, `uninstall`) built on clap.
//! - [`core`] - Error types and user-friendly error reporting.
//! - [`utils`] - Platform/artifact naming and progress indicators.
//!
//! The core never performs I/O and never panics on bad input: unparseable
//! version strings are represented as absence, and all decision functions are
//! pure over their arguments. Only the I/O layer produces errors.
//!
//! # Command-Line Usage
//!
//! ```bash
//! # Show the installed Go version
//! goman status
//!
//! # Check whether an update is available (including pre-releases)
//! goman check --preview
//!
//! # Update the installation in place
//! goman update
//!
//! # Install the latest stable release into a directory
//! goman install ~/sdk
//!
//! # List the ten most recent releases
//! goman available
//!
//! # Remove the detected installation
//! goman uninstall
//! ```
//!
//! # Persisted State
//!
//! None. Every invocation re-derives its view of the world from the live
//! environment (`go version` output) and the network; there is no cache and
//! no configuration file.

pub mod cli;
pub mod constants;
pub mod core;
pub mod toolchain;
pub mod utils;
pub mod version;
