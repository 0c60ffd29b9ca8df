//! Session state for an authenticated Spotify user.
//!
//! This module provides the [`Session`] type holding the credential and
//! cached-playlist state for the lifetime of a client session, plus the
//! [`Credentials`] value produced by the initial OAuth exchange.
//!
//! # Invariant
//!
//! `access_token`, `expires_in`, and `expiration_start` are always set and
//! cleared together. All mutation funnels through the methods on
//! [`Session`], so the invariant cannot be broken from outside.
//!
//! # Example
//!
//! ```rust
//! use spotify_session::{Credentials, Session};
//!
//! let mut session = Session::new();
//! assert!(!session.is_authorized());
//!
//! session.set_credentials(Credentials {
//!     access_token: "T1".to_string(),
//!     refresh_token: "R1".to_string(),
//!     expires_in: 3600,
//! });
//!
//! assert!(session.is_authorized());
//! assert!(!session.is_expired());
//!
//! session.clear();
//! assert!(!session.is_authorized());
//! ```

use crate::playlists::SimplifiedPlaylist;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Safety margin, in seconds, subtracted from the provider's expiry window.
///
/// A token is treated as expired 100 seconds before it actually is, so a
/// request started near the boundary does not fail mid-flight.
const EXPIRY_MARGIN_SECS: i64 = 100;

/// Credentials returned by the initial OAuth authorization exchange.
///
/// Setting these on a [`Session`] stamps the expiry clock, so construct
/// this value immediately after receiving the provider response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Credentials {
    /// Short-lived bearer token for Web API calls.
    pub access_token: String,
    /// Long-lived token used to obtain new access tokens.
    pub refresh_token: String,
    /// Access token lifetime in seconds, as reported by the provider.
    pub expires_in: i64,
}

/// Successful response body from the token endpoint.
///
/// Both the initial exchange and the refresh grant return this shape;
/// the refresh grant omits a new refresh token.
#[derive(Clone, Debug, Deserialize)]
pub struct AccessTokenResponse {
    /// The new access token.
    pub access_token: String,
    /// Lifetime of the new token in seconds.
    pub expires_in: i64,
}

/// Per-session credential and cached-playlist state.
///
/// A `Session` is an owned value with no global registry behind it; pass
/// it (or a mutable reference) to whichever component needs it. The whole
/// struct serializes for persistence, and the field names match the
/// storage format of the original browser app (`camelCase`).
///
/// # Thread Safety
///
/// `Session` is `Send + Sync`. Mutation is not internally synchronized;
/// concurrent writers are last-writer-wins.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Session {
    access_token: Option<String>,
    refresh_token: Option<String>,
    expires_in: Option<i64>,
    expiration_start: Option<i64>,
    playlists: Option<Vec<SimplifiedPlaylist>>,
}

impl Session {
    /// Creates an empty, unauthorized session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the credentials from the initial OAuth exchange.
    ///
    /// Sets the access token, refresh token, and expiry window together,
    /// and stamps `expiration_start` with the current wall-clock time.
    pub fn set_credentials(&mut self, credentials: Credentials) {
        self.access_token = Some(credentials.access_token);
        self.refresh_token = Some(credentials.refresh_token);
        self.expires_in = Some(credentials.expires_in);
        self.expiration_start = Some(Utc::now().timestamp_millis());
    }

    /// Applies the result of a token refresh.
    ///
    /// Replaces the access token and expiry fields and re-stamps the
    /// expiry clock. The refresh token is left untouched; Spotify does
    /// not rotate it on refresh.
    pub fn apply_refresh(&mut self, access_token: impl Into<String>, expires_in: i64) {
        self.access_token = Some(access_token.into());
        self.expires_in = Some(expires_in);
        self.expiration_start = Some(Utc::now().timestamp_millis());
    }

    /// Clears all session state (logout).
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Replaces the cached playlist list wholesale.
    pub fn set_playlists(&mut self, playlists: Vec<SimplifiedPlaylist>) {
        self.playlists = Some(playlists);
    }

    /// Appends a page of playlists to the cached list.
    ///
    /// A no-op when no list has been set yet; pagination only ever
    /// extends an existing first page.
    pub fn append_playlists(&mut self, playlists: Vec<SimplifiedPlaylist>) {
        if let Some(existing) = &mut self.playlists {
            existing.extend(playlists);
        }
    }

    /// Returns the access token, if present.
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Returns the refresh token, if present.
    #[must_use]
    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    /// Returns the cached playlists, if any have been fetched.
    #[must_use]
    pub fn playlists(&self) -> Option<&[SimplifiedPlaylist]> {
        self.playlists.as_deref()
    }

    /// Returns `true` if an access token is present.
    ///
    /// This is presence only; an authorized session may still hold an
    /// expired token. Route guarding keys off this check.
    #[must_use]
    pub fn is_authorized(&self) -> bool {
        self.access_token.is_some()
    }

    /// Returns `true` if the access token is past its safety margin.
    ///
    /// A session with no credentials reports `false`; there is nothing
    /// to refresh.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now().timestamp_millis())
    }

    /// Expiry check against an explicit clock reading (ms since epoch).
    ///
    /// The token counts as expired once more than `expires_in - 100`
    /// seconds have elapsed since `expiration_start`.
    #[must_use]
    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        match (self.expiration_start, self.expires_in) {
            (Some(start), Some(expires_in)) => {
                now_ms - start > (expires_in - EXPIRY_MARGIN_SECS) * 1000
            }
            _ => false,
        }
    }

    #[cfg(test)]
    pub(crate) fn expiration_start(&self) -> Option<i64> {
        self.expiration_start
    }
}

// Verify Session is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
};
