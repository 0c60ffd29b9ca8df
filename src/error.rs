//! Error types for crate configuration.
//!
//! This module contains the error type used for configuration and
//! validation failures.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use spotify_session::{ClientId, ConfigError};
//!
//! let result = ClientId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyClientId)));
//! ```

use thiserror::Error;

/// Errors that can occur while constructing configuration values.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Client ID cannot be empty.
    #[error("Client ID cannot be empty. Please provide your Spotify application's client ID.")]
    EmptyClientId,

    /// Client secret cannot be empty.
    #[error(
        "Client secret cannot be empty. Please provide your Spotify application's client secret."
    )]
    EmptyClientSecret,

    /// An endpoint URL is invalid.
    #[error("Invalid endpoint URL '{url}'. Please provide a URL with a scheme (e.g., 'https://accounts.spotify.com/api/token').")]
    InvalidUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
