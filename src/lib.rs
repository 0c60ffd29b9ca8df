//! # Spotify Session Core
//!
//! A client-side core for Spotify playlist managers, providing type-safe
//! configuration, session and token-refresh handling, session persistence,
//! route guarding, and playlist fetching with pagination.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`SpotifyConfig`] and [`SpotifyConfigBuilder`]
//! - Validated newtypes for application credentials and endpoint URLs
//! - Owned [`Session`] state with funneled mutation and a persist-on-mutation
//!   [`SessionStore`]
//! - Lazy token refresh with a 100-second expiry safety margin via
//!   [`auth::oauth`]
//! - A pure navigation guard via [`check_navigation`]
//! - An async playlists client with paging via [`PlaylistsClient`]
//!
//! It is the systems half of a browser-style front end: all durable state
//! lives with Spotify and in session-scoped storage, and view rendering,
//! routing tables, and the initial OAuth redirect dance belong to the host
//! application.
//!
//! ## Quick Start
//!
//! ```rust
//! use spotify_session::{ClientId, ClientSecret, SpotifyConfig};
//!
//! // Create configuration using the builder pattern
//! let config = SpotifyConfig::builder()
//!     .client_id(ClientId::new("your-client-id").unwrap())
//!     .client_secret(ClientSecret::new("your-client-secret").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Session Lifecycle
//!
//! A session starts empty, receives credentials from the host's OAuth
//! exchange, and is cleared on logout. Wrapping it in a [`SessionStore`]
//! mirrors every mutation to storage and rehydrates on startup:
//!
//! ```rust
//! use spotify_session::{Credentials, MemoryStorage, SessionStore};
//!
//! let mut store = SessionStore::open(MemoryStorage::new()).unwrap();
//!
//! // After the host completes the authorization-code exchange:
//! store.set_credentials(Credentials {
//!     access_token: "access".to_string(),
//!     refresh_token: "refresh".to_string(),
//!     expires_in: 3600,
//! }).unwrap();
//!
//! assert!(store.session().is_authorized());
//!
//! // Logout clears both the session and the stored snapshot
//! store.clear().unwrap();
//! ```
//!
//! ## Token Refresh
//!
//! Refresh is lazy: call [`refresh_if_needed`] before hitting the Web API
//! and it does nothing until the token is within 100 seconds of expiry.
//!
//! ```rust,ignore
//! use spotify_session::{refresh_if_needed, RefreshStatus};
//!
//! match refresh_if_needed(&config, &mut session).await? {
//!     RefreshStatus::Fresh => {}
//!     RefreshStatus::Refreshed(token) => println!("rotated to {token}"),
//! }
//! ```
//!
//! ## Route Guarding
//!
//! ```rust
//! use spotify_session::{check_navigation, GuardDecision, RouteName, RouteTable, Session};
//!
//! let table = RouteTable::default();
//! let session = Session::new();
//!
//! // Unauthorized users get sent to the authorization view
//! let target = table.get(RouteName::Playlists).unwrap();
//! assert_eq!(
//!     check_navigation(target, &session),
//!     GuardDecision::Redirect(RouteName::Authorization)
//! );
//! ```
//!
//! ## Fetching Playlists
//!
//! ```rust,ignore
//! use spotify_session::PlaylistsClient;
//!
//! let token = session.access_token().unwrap();
//! let client = PlaylistsClient::new(&config, token);
//!
//! let first_page = client.fetch_page(20, 0).await?;
//! session.set_playlists(first_page.items);
//!
//! if first_page.next.is_some() {
//!     let rest = client.fetch_page(20, 20).await?;
//!     session.append_playlists(rest.items);
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: the session is an owned value passed to whoever
//!   needs it; mutation funnels through its methods
//! - **Fail-fast validation**: all newtypes validate on construction
//! - **Lazy refresh, no retries**: one refresh attempt per observation of
//!   an expired token; failures leave the session untouched
//! - **Thread-safe types**: public types are `Send + Sync`, though the
//!   intended host is a single-threaded event loop

pub mod auth;
pub mod config;
pub mod error;
pub mod playlists;
pub mod routing;

// Re-export public types at crate root for convenience
pub use auth::{AccessTokenResponse, Credentials, Session};
pub use auth::{MemoryStorage, SessionStorage, SessionStore, StorageError};
pub use config::{ApiUrl, ClientId, ClientSecret, SpotifyConfig, SpotifyConfigBuilder};
pub use error::ConfigError;

// Re-export OAuth types for convenience
pub use auth::oauth::{refresh_access_token, refresh_if_needed, OAuthError, RefreshStatus};

// Re-export routing types
pub use routing::{check_navigation, GuardDecision, Route, RouteName, RouteTable};

// Re-export playlist types
pub use playlists::{Image, Page, PlaylistOwner, PlaylistsClient, PlaylistsError, SimplifiedPlaylist, TracksLink};
