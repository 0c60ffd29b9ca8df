//! Lazy token refresh against the Spotify accounts service.
//!
//! This module provides the refresh half of the session lifecycle: checking
//! whether the stored access token is stale and, if so, exchanging the
//! stored refresh token for a new access token.
//!
//! # Overview
//!
//! Refresh is checked lazily, on demand; there are no background timers.
//! The flow is:
//!
//! 1. A caller about to hit the Web API calls [`refresh_if_needed`]
//! 2. If the token is inside its safety margin, nothing happens
//! 3. Otherwise one POST goes to the token endpoint with
//!    `grant_type=refresh_token` and the application credentials in a
//!    Basic authorization header
//! 4. On success the session's access token and expiry clock are updated
//!    in place; on failure the session is left untouched
//!
//! Concurrent callers are not coordinated: two tasks that both observe an
//! expired token will both issue refresh calls. The exchange is idempotent
//! on the provider side, so the duplicate call is wasteful but harmless;
//! last writer wins on the session.
//!
//! # Example
//!
//! ```rust,ignore
//! use spotify_session::auth::oauth::{refresh_if_needed, RefreshStatus};
//!
//! match refresh_if_needed(&config, &mut session).await? {
//!     RefreshStatus::Fresh => {}
//!     RefreshStatus::Refreshed(token) => {
//!         println!("New access token: {token}");
//!     }
//! }
//! ```

use crate::auth::oauth::OAuthError;
use crate::auth::session::{AccessTokenResponse, Session};
use crate::config::SpotifyConfig;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::Serialize;

/// Grant type for refresh token requests (RFC 6749 §6).
const REFRESH_TOKEN_GRANT_TYPE: &str = "refresh_token";

/// Form body for a token refresh request.
///
/// The application credentials travel in the `Authorization` header, not
/// the body, so only the grant fields appear here.
#[derive(Debug, Serialize)]
struct TokenRefreshRequest<'a> {
    grant_type: &'a str,
    refresh_token: &'a str,
}

/// Outcome of a [`refresh_if_needed`] call.
///
/// Distinguishes "the token was still valid" from "a refresh happened",
/// so callers cannot mistake one for the other. Failed refreshes surface
/// as [`OAuthError`] instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RefreshStatus {
    /// The access token is inside its safety margin; no call was made.
    Fresh,
    /// The token was exchanged; the session now holds this access token.
    Refreshed(String),
}

/// Refreshes the session's access token if it is past its safety margin.
///
/// When the token is still fresh this returns immediately without any
/// network traffic or session mutation. When it is stale, a single
/// refresh call goes out; on success the session is updated in place and
/// the new token is returned.
///
/// # Errors
///
/// - [`OAuthError::MissingRefreshToken`] if the session holds no refresh
///   token (no call is made)
/// - [`OAuthError::RefreshFailed`] if the endpoint answers without an
///   access token; the failure is logged and the session left unchanged
/// - [`OAuthError::Network`] if the request fails in transit; the session
///   is left unchanged
///
/// No failed refresh is retried; the caller decides whether to surface a
/// re-authorization prompt.
pub async fn refresh_if_needed(
    config: &SpotifyConfig,
    session: &mut Session,
) -> Result<RefreshStatus, OAuthError> {
    if !session.is_expired() {
        return Ok(RefreshStatus::Fresh);
    }

    let refresh_token = session
        .refresh_token()
        .ok_or(OAuthError::MissingRefreshToken)?
        .to_string();

    let response = refresh_access_token(config, &refresh_token).await?;
    session.apply_refresh(response.access_token.clone(), response.expires_in);

    Ok(RefreshStatus::Refreshed(response.access_token))
}

/// Exchanges a refresh token for a new access token.
///
/// Performs the raw token-endpoint call without consulting or mutating any
/// session; [`refresh_if_needed`] is the usual entry point.
///
/// The request matches Spotify's refresh grant: a url-encoded form body
/// with `grant_type=refresh_token`, authenticated with
/// `Basic base64(client_id:client_secret)`.
///
/// # Errors
///
/// - [`OAuthError::RefreshFailed`] if the response body carries no access
///   token (e.g. `{"error": "invalid_grant"}`)
/// - [`OAuthError::Network`] if the request fails in transit
pub async fn refresh_access_token(
    config: &SpotifyConfig,
    refresh_token: &str,
) -> Result<AccessTokenResponse, OAuthError> {
    let request_body = TokenRefreshRequest {
        grant_type: REFRESH_TOKEN_GRANT_TYPE,
        refresh_token,
    };

    let authorization = format!(
        "Basic {}",
        BASE64.encode(format!(
            "{}:{}",
            config.client_id().as_ref(),
            config.client_secret().as_ref()
        ))
    );

    tracing::debug!(token_url = %config.token_url(), "requesting access token refresh");

    let client = reqwest::Client::new();
    let response = client
        .post(config.token_url().as_ref())
        .header(reqwest::header::AUTHORIZATION, authorization)
        .form(&request_body)
        .send()
        .await?;

    let status = response.status().as_u16();
    let body = response.text().await?;

    // The provider signals refusal either with a non-success status or a
    // success status whose body lacks `access_token`; both land here.
    match serde_json::from_str::<AccessTokenResponse>(&body) {
        Ok(tokens) => Ok(tokens),
        Err(_) => {
            tracing::warn!(status, body = %body, "token endpoint did not return an access token");
            Err(OAuthError::RefreshFailed { status, body })
        }
    }
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TokenRefreshRequest<'_>>();
    assert_send_sync::<RefreshStatus>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::session::Credentials;
    use crate::config::{ClientId, ClientSecret};

    fn create_config() -> SpotifyConfig {
        SpotifyConfig::builder()
            .client_id(ClientId::new("test-client-id").unwrap())
            .client_secret(ClientSecret::new("test-secret").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_refresh_request_serializes_with_correct_grant_type() {
        let request = TokenRefreshRequest {
            grant_type: REFRESH_TOKEN_GRANT_TYPE,
            refresh_token: "test-refresh-token",
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"grant_type\":\"refresh_token\""));
        assert!(json.contains("\"refresh_token\":\"test-refresh-token\""));
    }

    #[test]
    fn test_refresh_token_grant_type_constant_is_correct() {
        assert_eq!(REFRESH_TOKEN_GRANT_TYPE, "refresh_token");
    }

    #[tokio::test]
    async fn test_fresh_session_short_circuits_without_network() {
        let config = create_config();
        let mut session = Session::new();
        session.set_credentials(Credentials {
            access_token: "T1".to_string(),
            refresh_token: "R1".to_string(),
            expires_in: 3600,
        });

        // The config points at the real accounts service; a network call
        // would fail, so Fresh proves no call was attempted.
        let before = session.clone();
        let result = refresh_if_needed(&config, &mut session).await;

        assert_eq!(result.unwrap(), RefreshStatus::Fresh);
        assert_eq!(session, before);
    }

    #[tokio::test]
    async fn test_expired_session_without_refresh_token_errors_without_network() {
        let config = create_config();
        // A stale snapshot can hold an access token without a refresh
        // token; rebuild that state through deserialization.
        let mut session: Session = serde_json::from_str(
            r#"{"accessToken":"T1","expiresIn":60,"expirationStart":0}"#,
        )
        .unwrap();
        assert!(session.is_expired());

        let result = refresh_if_needed(&config, &mut session).await;
        assert!(matches!(result, Err(OAuthError::MissingRefreshToken)));
        assert_eq!(session.access_token(), Some("T1"));
    }

    #[test]
    fn test_refresh_status_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RefreshStatus>();
    }
}
