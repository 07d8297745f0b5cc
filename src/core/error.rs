//! Error handling for goman
//!
//! This module provides the error types and user-friendly error reporting
//! for the Go toolchain manager. The error system is designed around two
//! principles:
//! 1. **Strongly-typed errors** for precise handling in code
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! Two main types:
//! - [`GomanError`] - Enumerated error kinds for all I/O-layer failures
//! - [`ErrorContext`] - Wrapper that adds a suggestion and details for display
//!
//! The pure version-resolution core never produces these errors: invalid
//! version strings are `None`, and "no update" outcomes are ordinary values.
//! Only the I/O layer (process invocation, network, filesystem, archives)
//! raises, and [`user_friendly_error`] converts whatever reaches `main` into
//! a single-line colored message. Raw stack traces never reach the terminal.
//!
//! # Examples
//!
//! ```rust
//! use goman_cli::core::{ErrorContext, GomanError, user_friendly_error};
//!
//! let error = GomanError::UnsupportedPlatform {
//!     os: "plan9".to_string(),
//!     arch: "mips".to_string(),
//! };
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! assert!(ctx.suggestion.is_some());
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for goman operations
///
/// Each variant represents a specific failure mode in the I/O layer and
/// carries the details needed for an accurate user-facing message.
#[derive(Error, Debug)]
pub enum GomanError {
    /// No Go installation could be located on this host
    ///
    /// Raised when a command needs the installed toolchain (update, check)
    /// but no `go` binary is found on `PATH` or it does not report a
    /// parseable version.
    #[error("Could not find a valid go installation")]
    ToolchainNotFound,

    /// The host OS/architecture has no release artifact mapping
    ///
    /// Raised before any download is attempted. Install and update must
    /// halt on this error rather than fetching an artifact that cannot
    /// exist.
    #[error("No release artifact exists for this platform ({os}/{arch})")]
    UnsupportedPlatform {
        /// Operating system identifier that failed to map
        os: String,
        /// CPU architecture identifier that failed to map
        arch: String,
    },

    /// A downloaded artifact is not in a format the extractor can open
    ///
    /// Notably the darwin `.pkg` installer, which is not an archive.
    #[error("Cannot extract '{name}': unsupported archive format")]
    UnsupportedArchiveFormat {
        /// File name of the artifact
        name: String,
    },

    /// A network operation failed
    #[error("Network error during {operation}")]
    NetworkError {
        /// The operation that failed (e.g. "release feed fetch", "download")
        operation: String,
        /// Underlying reason
        reason: String,
    },

    /// The release feed responded but its payload could not be interpreted
    #[error("Could not read release information from the feed")]
    ReleaseFeedParseError {
        /// Underlying reason
        reason: String,
    },

    /// No release satisfies the requested channel policy
    ///
    /// Raised by `install` when the feed is empty or contains only
    /// pre-releases and `--preview` was not given.
    #[error("Could not find an installable go release")]
    NoInstallCandidate,

    /// Insufficient filesystem permission for removal or extraction
    #[error("Failed. Need privileged permission to {operation} {path}")]
    PermissionDenied {
        /// The operation that was denied (e.g. "remove", "extract into")
        operation: String,
        /// The path involved
        path: String,
    },

    /// General filesystem operation failure
    #[error("File system error during {operation}: {path}")]
    FileSystemError {
        /// The filesystem operation that failed
        operation: String,
        /// The path involved
        path: String,
    },

    /// IO error wrapper
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Generic error with a message
    #[error("{message}")]
    Other {
        /// The error message
        message: String,
    },
}

/// Error with user-friendly context for terminal display
///
/// Wraps a [`GomanError`] with an optional suggestion (actionable next step,
/// shown in green) and optional details (why this happened, shown in
/// yellow).
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: GomanError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: GomanError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add an actionable suggestion for resolving the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining why the error occurred.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors.
    ///
    /// Error message in red and bold, details in yellow, suggestion in
    /// green. This is the only way goman presents failures to users.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into a user-friendly [`ErrorContext`]
///
/// Recognizes [`GomanError`] variants and attaches tailored suggestions;
/// maps bare [`std::io::Error`] and [`reqwest::Error`] values onto the
/// closest goman error kind; and falls back to a generic context for
/// everything else.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(goman_error) = error.downcast_ref::<GomanError>() {
        return create_error_context(goman_error);
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(GomanError::PermissionDenied {
                    operation: "access".to_string(),
                    path: "the installation".to_string(),
                })
                .with_suggestion(permission_suggestion())
                .with_details(
                    "goman does not have permission to modify the installation directory",
                );
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(GomanError::FileSystemError {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion("Check that the file or directory exists and the path is correct");
            }
            _ => {}
        }
    }

    if let Some(http_error) = error.downcast_ref::<reqwest::Error>() {
        return ErrorContext::new(GomanError::NetworkError {
            operation: "request".to_string(),
            reason: http_error.to_string(),
        })
        .with_suggestion("Check your network connection and try again");
    }

    ErrorContext::new(GomanError::Other {
        message: error.to_string(),
    })
}

/// Build an [`ErrorContext`] with suggestions tailored to each error kind.
fn create_error_context(error: &GomanError) -> ErrorContext {
    match error {
        GomanError::ToolchainNotFound => ErrorContext::new(GomanError::ToolchainNotFound)
            .with_suggestion("Install Go first with 'goman install <path>', or add its bin directory to PATH")
            .with_details("goman locates the installation by running 'go version' on the binary found in PATH"),

        GomanError::UnsupportedPlatform { os, arch } => {
            ErrorContext::new(GomanError::UnsupportedPlatform {
                os: os.clone(),
                arch: arch.clone(),
            })
            .with_suggestion("Check https://go.dev/dl/ for the platforms Go ships binaries for")
            .with_details(format!(
                "goman knows no canonical artifact name for os '{os}' with architecture '{arch}'"
            ))
        }

        GomanError::UnsupportedArchiveFormat { name } => {
            ErrorContext::new(GomanError::UnsupportedArchiveFormat { name: name.clone() })
                .with_suggestion(if name.ends_with(".pkg") {
                    "The darwin release ships as a macOS installer package; open it with the system installer instead"
                } else {
                    "Only .tar.gz and .zip release archives can be extracted"
                })
        }

        GomanError::NetworkError { operation, reason } => {
            ErrorContext::new(GomanError::NetworkError {
                operation: operation.clone(),
                reason: reason.clone(),
            })
            .with_suggestion("Check your network connection and try again")
            .with_details(reason.clone())
        }

        GomanError::ReleaseFeedParseError { reason } => {
            ErrorContext::new(GomanError::ReleaseFeedParseError {
                reason: reason.clone(),
            })
            .with_suggestion("The release feed may be temporarily unavailable; try again later")
            .with_details(reason.clone())
        }

        GomanError::NoInstallCandidate => ErrorContext::new(GomanError::NoInstallCandidate)
            .with_suggestion("Pass --preview to consider beta and release-candidate versions"),

        GomanError::PermissionDenied { operation, path } => {
            ErrorContext::new(GomanError::PermissionDenied {
                operation: operation.clone(),
                path: path.clone(),
            })
            .with_suggestion(permission_suggestion())
        }

        GomanError::FileSystemError { operation, path } => {
            ErrorContext::new(GomanError::FileSystemError {
                operation: operation.clone(),
                path: path.clone(),
            })
        }

        GomanError::IoError(e) => ErrorContext::new(GomanError::Other {
            message: e.to_string(),
        }),

        GomanError::Other { message } => ErrorContext::new(GomanError::Other {
            message: message.clone(),
        }),
    }
}

const fn permission_suggestion() -> &'static str {
    if cfg!(windows) {
        "Run the command again as Administrator"
    } else {
        "Run the command again with 'sudo' or check directory ownership with 'ls -la'"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = GomanError::ToolchainNotFound;
        assert_eq!(error.to_string(), "Could not find a valid go installation");

        let error = GomanError::UnsupportedPlatform {
            os: "plan9".to_string(),
            arch: "mips".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "No release artifact exists for this platform (plan9/mips)"
        );

        let error = GomanError::UnsupportedArchiveFormat {
            name: "go1.21.0.darwin-arm64.pkg".to_string(),
        };
        assert!(error.to_string().contains("unsupported archive format"));
    }

    #[test]
    fn test_error_context_builders() {
        let ctx = ErrorContext::new(GomanError::NoInstallCandidate)
            .with_suggestion("Test suggestion")
            .with_details("Test details");

        assert_eq!(ctx.suggestion, Some("Test suggestion".to_string()));
        assert_eq!(ctx.details, Some("Test details".to_string()));
    }

    #[test]
    fn test_error_context_display_format() {
        let ctx = ErrorContext::new(GomanError::ToolchainNotFound).with_suggestion("Install Go");

        let display = format!("{ctx}");
        assert!(display.contains("Could not find a valid go installation"));
        assert!(display.contains("Install Go"));
    }

    #[test]
    fn test_user_friendly_error_permission_denied() {
        use std::io::{Error, ErrorKind};

        let io_error = Error::new(ErrorKind::PermissionDenied, "access denied");
        let ctx = user_friendly_error(anyhow::Error::from(io_error));

        match ctx.error {
            GomanError::PermissionDenied { .. } => {}
            other => panic!("Expected PermissionDenied, got {other:?}"),
        }
        assert!(ctx.suggestion.is_some());
    }

    #[test]
    fn test_user_friendly_error_unsupported_platform() {
        let error = GomanError::UnsupportedPlatform {
            os: "plan9".to_string(),
            arch: "mips".to_string(),
        };
        let ctx = user_friendly_error(anyhow::Error::from(error));
        assert!(ctx.suggestion.is_some());
        assert!(ctx.details.unwrap().contains("plan9"));
    }

    #[test]
    fn test_user_friendly_error_pkg_suggestion() {
        let error = GomanError::UnsupportedArchiveFormat {
            name: "go1.21.0.darwin-arm64.pkg".to_string(),
        };
        let ctx = user_friendly_error(anyhow::Error::from(error));
        assert!(ctx.suggestion.unwrap().contains("installer"));
    }

    #[test]
    fn test_user_friendly_error_generic() {
        let ctx = user_friendly_error(anyhow::anyhow!("something went wrong"));
        match ctx.error {
            GomanError::Other { message } => assert_eq!(message, "something went wrong"),
            other => panic!("Expected Other, got {other:?}"),
        }
    }

    #[test]
    fn test_from_io_error() {
        let io_error = std::io::Error::other("test error");
        let goman_error = GomanError::from(io_error);
        match goman_error {
            GomanError::IoError(_) => {}
            other => panic!("Expected IoError, got {other:?}"),
        }
    }
}
