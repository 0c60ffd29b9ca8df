//! Configuration types for the Spotify session core.
//!
//! This module provides the core configuration types used to initialize
//! the crate for communication with the Spotify accounts service and
//! Web API.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`SpotifyConfig`]: The main configuration struct holding all settings
//! - [`SpotifyConfigBuilder`]: A builder for constructing [`SpotifyConfig`] instances
//! - [`ClientId`]: A validated client ID newtype
//! - [`ClientSecret`]: A validated client secret newtype with masked debug output
//! - [`ApiUrl`]: A validated endpoint URL
//!
//! # Example
//!
//! ```rust
//! use spotify_session::{SpotifyConfig, ClientId, ClientSecret};
//!
//! let config = SpotifyConfig::builder()
//!     .client_id(ClientId::new("my-client-id").unwrap())
//!     .client_secret(ClientSecret::new("my-secret").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiUrl, ClientId, ClientSecret};

use crate::error::ConfigError;

/// Default Spotify accounts token endpoint.
const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Default Spotify Web API base URL.
const DEFAULT_API_URL: &str = "https://api.spotify.com";

/// Configuration for the Spotify session core.
///
/// This struct holds the application credentials used for token refresh
/// plus the endpoint URLs for the accounts service and Web API. The URLs
/// default to Spotify's production endpoints and are overridable for
/// testing against a local mock server.
///
/// # Thread Safety
///
/// `SpotifyConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use spotify_session::{SpotifyConfig, ClientId, ClientSecret};
///
/// let config = SpotifyConfig::builder()
///     .client_id(ClientId::new("my-client-id").unwrap())
///     .client_secret(ClientSecret::new("my-secret").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.token_url().as_ref(), "https://accounts.spotify.com/api/token");
/// ```
#[derive(Clone, Debug)]
pub struct SpotifyConfig {
    client_id: ClientId,
    client_secret: ClientSecret,
    token_url: ApiUrl,
    api_url: ApiUrl,
}

impl SpotifyConfig {
    /// Creates a new builder for constructing a `SpotifyConfig`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use spotify_session::{SpotifyConfig, ClientId, ClientSecret};
    ///
    /// let config = SpotifyConfig::builder()
    ///     .client_id(ClientId::new("id").unwrap())
    ///     .client_secret(ClientSecret::new("secret").unwrap())
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> SpotifyConfigBuilder {
        SpotifyConfigBuilder::new()
    }

    /// Returns the client ID.
    #[must_use]
    pub const fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Returns the client secret.
    #[must_use]
    pub const fn client_secret(&self) -> &ClientSecret {
        &self.client_secret
    }

    /// Returns the token endpoint URL.
    #[must_use]
    pub const fn token_url(&self) -> &ApiUrl {
        &self.token_url
    }

    /// Returns the Web API base URL.
    #[must_use]
    pub const fn api_url(&self) -> &ApiUrl {
        &self.api_url
    }
}

// Verify SpotifyConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SpotifyConfig>();
};

/// Builder for constructing [`SpotifyConfig`] instances.
///
/// Required fields are `client_id` and `client_secret`. The endpoint URLs
/// default to Spotify's production endpoints.
///
/// # Defaults
///
/// - `token_url`: `https://accounts.spotify.com/api/token`
/// - `api_url`: `https://api.spotify.com`
///
/// # Example
///
/// ```rust
/// use spotify_session::{SpotifyConfig, ClientId, ClientSecret, ApiUrl};
///
/// let config = SpotifyConfig::builder()
///     .client_id(ClientId::new("id").unwrap())
///     .client_secret(ClientSecret::new("secret").unwrap())
///     .token_url(ApiUrl::new("http://localhost:8080/api/token").unwrap())
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct SpotifyConfigBuilder {
    client_id: Option<ClientId>,
    client_secret: Option<ClientSecret>,
    token_url: Option<ApiUrl>,
    api_url: Option<ApiUrl>,
}

impl SpotifyConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the client ID (required).
    #[must_use]
    pub fn client_id(mut self, id: ClientId) -> Self {
        self.client_id = Some(id);
        self
    }

    /// Sets the client secret (required).
    #[must_use]
    pub fn client_secret(mut self, secret: ClientSecret) -> Self {
        self.client_secret = Some(secret);
        self
    }

    /// Overrides the token endpoint URL.
    ///
    /// Useful for pointing the refresh service at a mock server in tests.
    #[must_use]
    pub fn token_url(mut self, url: ApiUrl) -> Self {
        self.token_url = Some(url);
        self
    }

    /// Overrides the Web API base URL.
    #[must_use]
    pub fn api_url(mut self, url: ApiUrl) -> Self {
        self.api_url = Some(url);
        self
    }

    /// Builds the [`SpotifyConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `client_id` or
    /// `client_secret` are not set.
    pub fn build(self) -> Result<SpotifyConfig, ConfigError> {
        let client_id = self
            .client_id
            .ok_or(ConfigError::MissingRequiredField { field: "client_id" })?;
        let client_secret = self
            .client_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "client_secret",
            })?;

        // The defaults are compile-time constants and always parse.
        let token_url = match self.token_url {
            Some(url) => url,
            None => ApiUrl::new(DEFAULT_TOKEN_URL)?,
        };
        let api_url = match self.api_url {
            Some(url) => url,
            None => ApiUrl::new(DEFAULT_API_URL)?,
        };

        Ok(SpotifyConfig {
            client_id,
            client_secret,
            token_url,
            api_url,
        })
    }
}
