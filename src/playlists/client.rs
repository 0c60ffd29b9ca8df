//! Web API client for the current user's playlists.

use crate::config::{ApiUrl, SpotifyConfig};
use crate::playlists::{Page, SimplifiedPlaylist};
use serde::Deserialize;
use thiserror::Error;

/// Page size used by [`PlaylistsClient::fetch_all`]; Spotify's maximum.
const FETCH_ALL_PAGE_SIZE: u32 = 50;

/// Errors from the playlists Web API.
///
/// # Thread Safety
///
/// `PlaylistsError` is `Send + Sync`, making it safe to use across async
/// boundaries.
#[derive(Debug, Error)]
pub enum PlaylistsError {
    /// The API answered with a non-success status.
    ///
    /// A 401 here usually means the access token expired mid-session;
    /// refresh and retry is the caller's call.
    #[error("Playlists request failed with status {status}: {message}")]
    Api {
        /// The HTTP status code returned.
        status: u16,
        /// The provider's error message, or the raw body if unparseable.
        message: String,
    },

    /// The request failed in transit.
    #[error(transparent)]
    Network(#[from] reqwest::Error),
}

/// Error body shape used by the Spotify Web API.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Client for the "current user's playlists" listing.
///
/// Holds a bearer token captured at construction; after a token refresh,
/// build a new client with the new token. The base URL comes from
/// [`SpotifyConfig`], so tests can point it at a mock server.
///
/// # Example
///
/// ```rust,ignore
/// use spotify_session::PlaylistsClient;
///
/// let client = PlaylistsClient::new(&config, access_token);
/// let page = client.fetch_page(20, 0).await?;
/// session.set_playlists(page.items);
/// ```
#[derive(Clone, Debug)]
pub struct PlaylistsClient {
    client: reqwest::Client,
    api_url: ApiUrl,
    access_token: String,
}

impl PlaylistsClient {
    /// Creates a client for the given configuration and access token.
    #[must_use]
    pub fn new(config: &SpotifyConfig, access_token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: config.api_url().clone(),
            access_token: access_token.into(),
        }
    }

    /// Fetches one page of the current user's playlists.
    ///
    /// # Errors
    ///
    /// - [`PlaylistsError::Api`] if the API answers with a non-success status
    /// - [`PlaylistsError::Network`] if the request fails in transit
    pub async fn fetch_page(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<Page<SimplifiedPlaylist>, PlaylistsError> {
        let url = format!(
            "{}/v1/me/playlists?limit={limit}&offset={offset}",
            self.api_url
        );
        self.get_page(&url).await
    }

    /// Fetches every playlist, following `next` links to exhaustion.
    ///
    /// # Errors
    ///
    /// Same as [`fetch_page`](Self::fetch_page); a failure partway
    /// through discards the pages already fetched.
    pub async fn fetch_all(&self) -> Result<Vec<SimplifiedPlaylist>, PlaylistsError> {
        let mut items = Vec::new();
        let mut next = Some(format!(
            "{}/v1/me/playlists?limit={FETCH_ALL_PAGE_SIZE}&offset=0",
            self.api_url
        ));

        while let Some(url) = next {
            let mut page = self.get_page(&url).await?;
            items.append(&mut page.items);
            next = page.next;
        }

        Ok(items)
    }

    async fn get_page(&self, url: &str) -> Result<Page<SimplifiedPlaylist>, PlaylistsError> {
        tracing::debug!(url, "fetching playlist page");

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map_or(body, |parsed| parsed.error.message);

            tracing::warn!(status = status.as_u16(), %message, "playlists request rejected");

            return Err(PlaylistsError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PlaylistsClient>();
    assert_send_sync::<PlaylistsError>();
};
