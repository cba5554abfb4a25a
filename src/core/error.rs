//! Error handling for vracfg
//!
//! The error system follows two principles:
//! 1. **Strongly-typed errors** ([`VracfgError`]) for the places where reshaping can fail
//! 2. **User-friendly messages** ([`ErrorContext`]) with suggestions for CLI users
//!
//! The transformation core is mostly infallible: lenient flattening degrades
//! unsupported leaves to empty strings. Errors come from three places:
//! - **Expansion**: a `resource_configuration` entry that does not match the
//!   record shape ([`VracfgError::InvalidResourceConfiguration`])
//! - **Strict flattening**: a leaf with no string form or a `data` payload with
//!   an unexpected shape ([`VracfgError::UnsupportedValue`],
//!   [`VracfgError::UnexpectedShape`])
//! - **Application flow**: unreadable inputs and config files
//!
//! # Examples
//!
//! ```rust,no_run
//! use vracfg::core::{VracfgError, user_friendly_error};
//!
//! let error = VracfgError::UnsupportedValue {
//!     path: "NETWORK_LIST.0.NETWORK_MAC_ADDRESS".to_string(),
//!     kind: "null",
//! };
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for vracfg operations.
///
/// ## Reshaping
/// - [`InvalidResourceConfiguration`] - an input record is not `{ name, configuration }`
/// - [`UnsupportedValue`] - a leaf has no canonical string form (strict mode)
/// - [`UnexpectedShape`] - a container holds the wrong kind of value (strict mode)
///
/// ## Input and configuration
/// - [`InputParseError`] - a JSON/YAML document could not be parsed
/// - [`ConfigError`] - the adapter config is invalid
///
/// I/O and TOML failures travel as `anyhow` errors with file context and are
/// classified by [`user_friendly_error`].
///
/// [`InvalidResourceConfiguration`]: VracfgError::InvalidResourceConfiguration
/// [`UnsupportedValue`]: VracfgError::UnsupportedValue
/// [`UnexpectedShape`]: VracfgError::UnexpectedShape
/// [`InputParseError`]: VracfgError::InputParseError
/// [`ConfigError`]: VracfgError::ConfigError
#[derive(Error, Debug, Clone)]
pub enum VracfgError {
    /// A `resource_configuration` entry does not have the expected record shape.
    #[error("Invalid resource configuration at index {index}: {reason}")]
    InvalidResourceConfiguration {
        /// Position of the entry in the input sequence
        index: usize,
        /// What is wrong with the entry
        reason: String,
    },

    /// A leaf value cannot be rendered as a string.
    #[error("Unsupported {kind} value at '{path}'")]
    UnsupportedValue {
        /// Dotted path of the offending leaf
        path: String,
        /// Kind of the value, as returned by [`crate::scalar::value_kind`]
        kind: &'static str,
    },

    /// A container holds a value of the wrong kind.
    #[error("Expected {expected} at '{path}', found {found}")]
    UnexpectedShape {
        /// Dotted path of the offending value
        path: String,
        /// Kind that was required
        expected: &'static str,
        /// Kind that was found
        found: &'static str,
    },

    /// An input document could not be parsed.
    #[error("Failed to parse input from {source_name}: {reason}")]
    InputParseError {
        /// File path or `<stdin>`
        source_name: String,
        /// Parser message
        reason: String,
    },

    /// The adapter configuration is invalid.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the problem
        message: String,
    },

    /// Anything else
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

/// Error wrapper that adds a suggestion and details for CLI display.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: VracfgError,
    /// What the user can do about it
    pub suggestion: Option<String>,
    /// Additional explanation
    pub details: Option<String>,
}

impl ErrorContext {
    /// Wrap an error without any extra context.
    #[must_use]
    pub const fn new(error: VracfgError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Attach a suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Attach details.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr with colours.
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

/// Convert any error into an [`ErrorContext`] with suggestions where we know some.
///
/// Recognizes [`VracfgError`], [`std::io::Error`], [`toml::de::Error`],
/// [`serde_json::Error`] and [`serde_yaml::Error`] anywhere in the chain.
/// Anything else becomes [`VracfgError::Other`] carrying the full cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(vracfg_error) = error.downcast_ref::<VracfgError>() {
        return create_error_context(vracfg_error.clone());
    }

    for cause in error.chain() {
        if let Some(io_error) = cause.downcast_ref::<std::io::Error>() {
            match io_error.kind() {
                std::io::ErrorKind::NotFound => {
                    return ErrorContext::new(VracfgError::Other {
                        message: chain_message(&error),
                    })
                    .with_suggestion("Check that the input file exists and the path is correct");
                }
                std::io::ErrorKind::PermissionDenied => {
                    return ErrorContext::new(VracfgError::Other {
                        message: chain_message(&error),
                    })
                    .with_suggestion("Check the file permissions of the input or config file");
                }
                _ => {}
            }
        }

        if cause.downcast_ref::<toml::de::Error>().is_some() {
            return ErrorContext::new(VracfgError::ConfigError {
                message: chain_message(&error),
            })
            .with_suggestion(
                "Check the TOML syntax of the config file. Run 'vracfg config init --force' to regenerate it",
            )
            .with_details("Supported keys: strict, use_builtin_mappings and a [mappings] table");
        }

        if cause.downcast_ref::<serde_json::Error>().is_some()
            || cause.downcast_ref::<serde_yaml::Error>().is_some()
        {
            return ErrorContext::new(VracfgError::Other {
                message: chain_message(&error),
            })
            .with_suggestion("Check that the input is a valid JSON or YAML document");
        }
    }

    ErrorContext::new(VracfgError::Other {
        message: chain_message(&error),
    })
}

fn chain_message(error: &anyhow::Error) -> String {
    let mut message = error.to_string();

    let chain: Vec<String> =
        error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    message
}

fn create_error_context(error: VracfgError) -> ErrorContext {
    match &error {
        VracfgError::InvalidResourceConfiguration {
            ..
        } => ErrorContext::new(error)
            .with_suggestion(
                "Each resource_configuration entry must be a map with a string 'name' and a map 'configuration'",
            )
            .with_details("Entries are expanded in order; the index points at the first bad entry"),

        VracfgError::UnsupportedValue {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Drop --strict (or set strict = false) to render such values as empty strings")
            .with_details("Only strings, numbers and booleans have a canonical string form"),

        VracfgError::UnexpectedShape {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Drop --strict (or set strict = false) to flatten whatever shape is found")
            .with_details("Array elements with a 'data' field are expected to wrap a map of properties"),

        VracfgError::InputParseError {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Check that the input is a valid JSON or YAML document"),

        VracfgError::ConfigError {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Run 'vracfg config show' to inspect the effective configuration"),

        _ => ErrorContext::new(error),
    }
}
