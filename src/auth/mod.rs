//! Authentication and session state for the Spotify session core.
//!
//! This module owns the credential side of the crate:
//!
//! - [`Session`]: per-session credential and cached-playlist state
//! - [`Credentials`]: the result of the initial OAuth exchange
//! - [`SessionStore`] / [`SessionStorage`]: persist-on-mutation storage seam
//! - [`oauth`]: token expiry checking and lazy refresh
//!
//! # Lifecycle
//!
//! A session is created empty, populated by the initial OAuth exchange
//! (performed by the surrounding application), kept fresh by the refresh
//! service, and cleared entirely on logout. Every mutation is mirrored to
//! storage; the snapshot is read back once at startup.
//!
//! # Example
//!
//! ```rust
//! use spotify_session::{Credentials, MemoryStorage, SessionStore};
//!
//! let mut store = SessionStore::open(MemoryStorage::new()).unwrap();
//! store.set_credentials(Credentials {
//!     access_token: "access".to_string(),
//!     refresh_token: "refresh".to_string(),
//!     expires_in: 3600,
//! }).unwrap();
//!
//! assert!(store.session().is_authorized());
//! assert!(!store.session().is_expired());
//! ```

pub mod oauth;
pub mod session;
mod storage;

pub use session::{AccessTokenResponse, Credentials, Session};
pub use storage::{MemoryStorage, SessionStorage, SessionStore, StorageError};
