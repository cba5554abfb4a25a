//! Core types shared by the whole crate.
//!
//! Currently this is the error system:
//! - [`VracfgError`] - enumerated failure modes of reshaping, input and config handling
//! - [`ErrorContext`] - user-facing wrapper with suggestions and details
//! - [`user_friendly_error`] - turn any `anyhow::Error` into an [`ErrorContext`]
//!
//! Library functions that can fail return `Result<_, VracfgError>`; application
//! code (CLI, config loading) uses `anyhow::Result` and converts at the edge.

pub mod error;

pub use error::{ErrorContext, VracfgError, user_friendly_error};
