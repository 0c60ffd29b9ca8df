//! Integration tests for the token refresh service.
//!
//! These tests run the refresh flow against a mock token endpoint,
//! verifying the wire format, the session mutations on success, and the
//! leave-untouched guarantee on every failure path.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use spotify_session::{
    refresh_if_needed, ApiUrl, ClientId, ClientSecret, OAuthError, RefreshStatus, Session,
    SpotifyConfig,
};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CLIENT_ID: &str = "test-client-id";
const CLIENT_SECRET: &str = "test-client-secret";

/// Creates a config pointed at the mock server's token endpoint.
fn config_for(server: &MockServer) -> SpotifyConfig {
    SpotifyConfig::builder()
        .client_id(ClientId::new(CLIENT_ID).unwrap())
        .client_secret(ClientSecret::new(CLIENT_SECRET).unwrap())
        .token_url(ApiUrl::new(format!("{}/api/token", server.uri())).unwrap())
        .build()
        .unwrap()
}

/// A session whose access token expired long ago (expiry clock at epoch).
fn expired_session() -> Session {
    serde_json::from_str(
        r#"{
            "accessToken": "T1",
            "refreshToken": "R1",
            "expiresIn": 3600,
            "expirationStart": 0
        }"#,
    )
    .unwrap()
}

/// A session whose credentials were just set.
fn fresh_session() -> Session {
    let mut session = Session::new();
    session.set_credentials(spotify_session::Credentials {
        access_token: "T1".to_string(),
        refresh_token: "R1".to_string(),
        expires_in: 3600,
    });
    session
}

#[tokio::test]
async fn test_successful_refresh_updates_session_and_returns_new_token() {
    let server = MockServer::start().await;
    let config = config_for(&server);

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "T2",
            "token_type": "Bearer",
            "expires_in": 3600,
            "scope": "playlist-read-private"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = expired_session();
    let result = refresh_if_needed(&config, &mut session).await.unwrap();

    assert_eq!(result, RefreshStatus::Refreshed("T2".to_string()));
    assert_eq!(session.access_token(), Some("T2"));
    assert_eq!(session.refresh_token(), Some("R1"));
    // The expiry clock was re-stamped to the call time
    assert!(!session.is_expired());
}

#[tokio::test]
async fn test_refresh_sends_basic_auth_and_urlencoded_grant() {
    let server = MockServer::start().await;
    let config = config_for(&server);

    let expected_auth = format!(
        "Basic {}",
        BASE64.encode(format!("{CLIENT_ID}:{CLIENT_SECRET}"))
    );

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .and(header("authorization", expected_auth.as_str()))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("grant_type=refresh_token"))
        .and(body_string_contains("refresh_token=R1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "T2",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = expired_session();
    let result = refresh_if_needed(&config, &mut session).await;

    // The mock's matchers are the real assertion; expect(1) fails the
    // test on drop if the request shape was wrong.
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_fresh_token_makes_no_network_call() {
    let server = MockServer::start().await;
    let config = config_for(&server);

    // Any request at all would violate this expectation
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let mut session = fresh_session();
    let before = session.clone();
    let result = refresh_if_needed(&config, &mut session).await.unwrap();

    assert_eq!(result, RefreshStatus::Fresh);
    assert_eq!(session, before);
}

#[tokio::test]
async fn test_error_response_leaves_session_untouched() {
    let server = MockServer::start().await;
    let config = config_for(&server);

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": "invalid_grant",
            "error_description": "Refresh token revoked"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = expired_session();
    let before = session.clone();
    let result = refresh_if_needed(&config, &mut session).await;

    match result {
        Err(OAuthError::RefreshFailed { status, body }) => {
            assert_eq!(status, 400);
            assert!(body.contains("invalid_grant"));
        }
        other => panic!("Expected RefreshFailed, got {other:?}"),
    }
    assert_eq!(session, before);
    assert_eq!(session.access_token(), Some("T1"));
}

#[tokio::test]
async fn test_success_status_without_access_token_is_refresh_failed() {
    let server = MockServer::start().await;
    let config = config_for(&server);

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "error": "invalid_grant" })),
        )
        .mount(&server)
        .await;

    let mut session = expired_session();
    let before = session.clone();
    let result = refresh_if_needed(&config, &mut session).await;

    assert!(matches!(
        result,
        Err(OAuthError::RefreshFailed { status: 200, .. })
    ));
    assert_eq!(session, before);
}

#[tokio::test]
async fn test_unreachable_endpoint_is_network_error() {
    // Bind a listener just to reserve a port, then shut it down.
    // (A dropped wiremock MockServer returns to a pool and keeps
    // listening, so it cannot serve as an unreachable endpoint.)
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let dead_uri = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let config = SpotifyConfig::builder()
        .client_id(ClientId::new(CLIENT_ID).unwrap())
        .client_secret(ClientSecret::new(CLIENT_SECRET).unwrap())
        .token_url(ApiUrl::new(format!("{dead_uri}/api/token")).unwrap())
        .build()
        .unwrap();

    let mut session = expired_session();
    let before = session.clone();
    let result = refresh_if_needed(&config, &mut session).await;

    assert!(matches!(result, Err(OAuthError::Network(_))));
    assert_eq!(session, before);
}

#[tokio::test]
async fn test_expired_session_without_refresh_token_fails_before_network() {
    let server = MockServer::start().await;
    let config = config_for(&server);

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let mut session: Session = serde_json::from_str(
        r#"{ "accessToken": "T1", "expiresIn": 3600, "expirationStart": 0 }"#,
    )
    .unwrap();

    let result = refresh_if_needed(&config, &mut session).await;
    assert!(matches!(result, Err(OAuthError::MissingRefreshToken)));
}
