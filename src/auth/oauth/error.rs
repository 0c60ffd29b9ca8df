//! OAuth-specific error types for the Spotify session core.
//!
//! This module contains the error type for token refresh failures.
//!
//! # Error Types
//!
//! - [`OAuthError::RefreshFailed`]: The token endpoint answered without an access token
//! - [`OAuthError::MissingRefreshToken`]: Refresh requested on a session with no refresh token
//! - [`OAuthError::Network`]: The request itself failed in transit
//!
//! # Example
//!
//! ```rust
//! use spotify_session::OAuthError;
//!
//! let error = OAuthError::RefreshFailed {
//!     status: 400,
//!     body: r#"{"error":"invalid_grant"}"#.to_string(),
//! };
//! assert!(error.to_string().contains("invalid_grant"));
//! ```

use thiserror::Error;

/// Errors that can occur during a token refresh.
///
/// Every variant is local and recoverable; a failed refresh leaves the
/// session untouched and a subsequent re-authorization restores service.
/// There is no retry policy in this crate.
///
/// # Thread Safety
///
/// `OAuthError` is `Send + Sync`, making it safe to use across async
/// boundaries.
#[derive(Debug, Error)]
pub enum OAuthError {
    /// The token endpoint was reachable but did not return an access token.
    ///
    /// Typical causes are a revoked refresh token (`invalid_grant`) or bad
    /// application credentials (`invalid_client`). The raw response body is
    /// carried for diagnostics; the session is left unchanged.
    #[error("Token refresh failed with status {status}: {body}")]
    RefreshFailed {
        /// The HTTP status code returned.
        status: u16,
        /// The raw response body.
        body: String,
    },

    /// The session holds no refresh token, so no refresh can be attempted.
    ///
    /// This happens when refresh is requested after logout or before the
    /// initial authorization completed.
    #[error("Session has no refresh token; the user must re-authorize")]
    MissingRefreshToken,

    /// The refresh request failed in transit.
    ///
    /// Connection errors, DNS failures, and malformed response bodies all
    /// surface here, wrapped from the HTTP client.
    #[error(transparent)]
    Network(#[from] reqwest::Error),
}

// Verify OAuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OAuthError>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_failed_includes_status_and_body() {
        let error = OAuthError::RefreshFailed {
            status: 400,
            body: r#"{"error":"invalid_grant"}"#.to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("400"));
        assert!(message.contains("invalid_grant"));
    }

    #[test]
    fn test_missing_refresh_token_message() {
        let error = OAuthError::MissingRefreshToken;
        assert!(error.to_string().contains("re-authorize"));
    }

    #[test]
    fn test_oauth_error_implements_std_error() {
        let error: &dyn std::error::Error = &OAuthError::MissingRefreshToken;
        let _ = error;

        let error: &dyn std::error::Error = &OAuthError::RefreshFailed {
            status: 500,
            body: "oops".to_string(),
        };
        let _ = error;
    }

    #[test]
    fn test_oauth_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OAuthError>();
    }
}
