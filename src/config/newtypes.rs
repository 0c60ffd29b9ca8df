//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Spotify application client ID.
///
/// This newtype ensures the client ID is non-empty and provides type safety
/// to prevent accidental misuse of raw strings.
///
/// # Example
///
/// ```rust
/// use spotify_session::ClientId;
///
/// let id = ClientId::new("my-client-id").unwrap();
/// assert_eq!(id.as_ref(), "my-client-id");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientId(String);

impl ClientId {
    /// Creates a new validated client ID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientId`] if the ID is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ConfigError::EmptyClientId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for ClientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated Spotify application client secret.
///
/// This newtype ensures the secret is non-empty and masks its value
/// in debug output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the secret value, displaying only
/// `ClientSecret(*****)` instead of the actual secret.
///
/// # Example
///
/// ```rust
/// use spotify_session::ClientSecret;
///
/// let secret = ClientSecret::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "ClientSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ClientSecret(String);

impl ClientSecret {
    /// Creates a new validated client secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyClientSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for ClientSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClientSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClientSecret(*****)")
    }
}

/// A validated endpoint URL.
///
/// This newtype validates that the URL has a proper format with a scheme
/// and a non-empty host. Trailing slashes are stripped so URLs can be
/// joined with path segments safely.
///
/// # Serialization
///
/// `ApiUrl` serializes to and deserializes from the URL string.
///
/// # Example
///
/// ```rust
/// use spotify_session::ApiUrl;
///
/// let url = ApiUrl::new("https://api.spotify.com").unwrap();
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.as_ref(), "https://api.spotify.com");
///
/// // Trailing slash is normalized away
/// let url = ApiUrl::new("https://api.spotify.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.spotify.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiUrl {
    url: String,
    scheme_end: usize,
}

impl ApiUrl {
    /// Creates a new validated endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidUrl { url: url.clone() });
        }

        // Host starts after "://" and must be non-empty
        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(ConfigError::InvalidUrl { url: url.clone() });
        }

        Ok(Self { url, scheme_end })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }
}

impl AsRef<str> for ApiUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl Serialize for ApiUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.url)
    }
}

impl<'de> Deserialize<'de> for ApiUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_id_rejects_empty_string() {
        let result = ClientId::new("");
        assert!(matches!(result, Err(ConfigError::EmptyClientId)));
    }

    #[test]
    fn test_client_secret_rejects_empty_string() {
        let result = ClientSecret::new("");
        assert!(matches!(result, Err(ConfigError::EmptyClientSecret)));
    }

    #[test]
    fn test_client_secret_masks_value_in_debug() {
        let secret = ClientSecret::new("super-secret-key").unwrap();
        let debug_output = format!("{:?}", secret);
        assert_eq!(debug_output, "ClientSecret(*****)");
        assert!(!debug_output.contains("super-secret-key"));
    }

    #[test]
    fn test_api_url_validates_format() {
        let url = ApiUrl::new("https://accounts.spotify.com/api/token").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.as_ref(), "https://accounts.spotify.com/api/token");

        // With port (wiremock-style)
        let url = ApiUrl::new("http://localhost:3000").unwrap();
        assert_eq!(url.scheme(), "http");
    }

    #[test]
    fn test_api_url_strips_trailing_slash() {
        let url = ApiUrl::new("https://api.spotify.com/").unwrap();
        assert_eq!(url.as_ref(), "https://api.spotify.com");
    }

    #[test]
    fn test_api_url_rejects_invalid() {
        // No scheme
        assert!(ApiUrl::new("api.spotify.com").is_err());

        // Empty host
        assert!(ApiUrl::new("https://").is_err());

        // Invalid scheme
        assert!(ApiUrl::new("://spotify.com").is_err());
    }

    #[test]
    fn test_api_url_serializes_to_string() {
        let url = ApiUrl::new("https://api.spotify.com").unwrap();
        let json = serde_json::to_string(&url).unwrap();
        assert_eq!(json, r#""https://api.spotify.com""#);
    }

    #[test]
    fn test_api_url_deserializes_from_string() {
        let json = r#""https://accounts.spotify.com/api/token""#;
        let url: ApiUrl = serde_json::from_str(json).unwrap();
        assert_eq!(url.as_ref(), "https://accounts.spotify.com/api/token");
    }
}
