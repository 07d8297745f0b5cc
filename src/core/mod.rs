//! Core types and error handling for goman.
//!
//! This module hosts the error taxonomy shared by the whole crate:
//! [`GomanError`] for strongly-typed failure cases, [`ErrorContext`] for
//! attaching user-facing suggestions, and [`user_friendly_error`] for
//! turning any error into a single-line terminal message.

pub mod error;

pub use error::{ErrorContext, GomanError, user_friendly_error};
