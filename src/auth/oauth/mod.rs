//! OAuth token lifecycle for the Spotify session core.
//!
//! The initial authorization-code exchange happens in the surrounding
//! application (it owns the redirect UI); this module picks up from the
//! moment a [`crate::Session`] holds credentials and keeps the access
//! token alive:
//!
//! - [`refresh_if_needed`]: check expiry and refresh lazily, in one call
//! - [`refresh_access_token`]: the raw refresh-grant exchange
//!
//! # Failure model
//!
//! A refusal from the token endpoint ([`OAuthError::RefreshFailed`]) is
//! logged and leaves the session untouched; transport failures
//! ([`OAuthError::Network`]) propagate to the caller. Nothing is retried
//! automatically, and every failure is recoverable by re-authorizing.
//!
//! # Example
//!
//! ```rust,ignore
//! use spotify_session::auth::oauth::{refresh_if_needed, RefreshStatus};
//!
//! // Before any Web API call:
//! if let RefreshStatus::Refreshed(token) = refresh_if_needed(&config, &mut session).await? {
//!     tracing::debug!("access token rotated");
//! }
//! ```

mod error;
mod token_refresh;

pub use error::OAuthError;
pub use token_refresh::{refresh_access_token, refresh_if_needed, RefreshStatus};
