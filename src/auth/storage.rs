//! Session persistence.
//!
//! The session survives page reloads (or process restarts) by being
//! serialized wholesale after every mutation and rehydrated once at
//! startup. The storage medium itself is pluggable through
//! [`SessionStorage`]; the crate ships [`MemoryStorage`] as the
//! session-scoped default and test double.
//!
//! [`SessionStore`] is the piece that wires the two together: it owns a
//! [`Session`] plus a backend and mirrors each mutation to storage, the
//! way the original browser app's persisted-state plugin did.

use crate::auth::session::{Credentials, Session};
use crate::playlists::SimplifiedPlaylist;
use std::cell::RefCell;
use thiserror::Error;

/// Errors from the persistence seam.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The stored snapshot could not be serialized or deserialized.
    #[error("Session snapshot is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backend could not be read or written.
    #[error("Session storage backend failed: {reason}")]
    Backend {
        /// Description of the backend failure.
        reason: String,
    },
}

/// A place to keep the serialized session between page loads.
///
/// Implementations store at most one snapshot; `save` replaces any
/// previous one. Backends are expected to be session-scoped (cleared
/// when the tab or process ends), mirroring browser `sessionStorage`.
pub trait SessionStorage {
    /// Persists a snapshot of the session, replacing any previous one.
    fn save(&self, session: &Session) -> Result<(), StorageError>;

    /// Loads the stored snapshot, if one exists.
    fn load(&self) -> Result<Option<Session>, StorageError>;

    /// Removes the stored snapshot.
    fn clear(&self) -> Result<(), StorageError>;
}

/// In-memory [`SessionStorage`] backend.
///
/// Holds the snapshot as a JSON string, exercising the same
/// serialization path a real backend would. Single-threaded by design,
/// like the UI event loop it stands in for.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    snapshot: RefCell<Option<String>>,
}

impl MemoryStorage {
    /// Creates an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn save(&self, session: &Session) -> Result<(), StorageError> {
        let json = serde_json::to_string(session)?;
        *self.snapshot.borrow_mut() = Some(json);
        Ok(())
    }

    fn load(&self) -> Result<Option<Session>, StorageError> {
        self.snapshot
            .borrow()
            .as_deref()
            .map(serde_json::from_str)
            .transpose()
            .map_err(StorageError::from)
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.snapshot.borrow_mut() = None;
        Ok(())
    }
}

/// A [`Session`] bound to a storage backend.
///
/// Every mutating method forwards to the session and then persists the
/// result, so storage always mirrors the live state. There is no
/// transaction around the pair; concurrent writers are last-writer-wins,
/// same as the in-memory session itself.
///
/// # Example
///
/// ```rust
/// use spotify_session::{Credentials, MemoryStorage, SessionStore};
///
/// let mut store = SessionStore::open(MemoryStorage::new()).unwrap();
/// store.set_credentials(Credentials {
///     access_token: "T1".to_string(),
///     refresh_token: "R1".to_string(),
///     expires_in: 3600,
/// }).unwrap();
///
/// assert!(store.session().is_authorized());
/// ```
#[derive(Debug)]
pub struct SessionStore<S: SessionStorage> {
    session: Session,
    storage: S,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Opens a store, rehydrating the session from storage if a snapshot
    /// exists and starting empty otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend fails or holds a corrupt
    /// snapshot.
    pub fn open(storage: S) -> Result<Self, StorageError> {
        let session = storage.load()?.unwrap_or_default();
        Ok(Self { session, storage })
    }

    /// Returns the live session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Stores initial OAuth credentials and persists.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if persisting fails; the in-memory
    /// session keeps the new value either way.
    pub fn set_credentials(&mut self, credentials: Credentials) -> Result<(), StorageError> {
        self.session.set_credentials(credentials);
        self.persist()
    }

    /// Applies a token refresh and persists.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if persisting fails.
    pub fn apply_refresh(
        &mut self,
        access_token: impl Into<String>,
        expires_in: i64,
    ) -> Result<(), StorageError> {
        self.session.apply_refresh(access_token, expires_in);
        self.persist()
    }

    /// Logs out: clears the session and removes the snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend fails to clear.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.session.clear();
        self.storage.clear()
    }

    /// Replaces the cached playlists and persists.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if persisting fails.
    pub fn set_playlists(
        &mut self,
        playlists: Vec<SimplifiedPlaylist>,
    ) -> Result<(), StorageError> {
        self.session.set_playlists(playlists);
        self.persist()
    }

    /// Appends a playlist page and persists.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if persisting fails.
    pub fn append_playlists(
        &mut self,
        playlists: Vec<SimplifiedPlaylist>,
    ) -> Result<(), StorageError> {
        self.session.append_playlists(playlists);
        self.persist()
    }

    /// Runs an arbitrary session mutation and persists afterwards.
    ///
    /// The escape hatch for callers that refresh through
    /// [`crate::auth::oauth::refresh_if_needed`], which mutates the
    /// session directly.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if persisting fails.
    pub fn with_session_mut<T>(
        &mut self,
        f: impl FnOnce(&mut Session) -> T,
    ) -> Result<T, StorageError> {
        let value = f(&mut self.session);
        self.persist()?;
        Ok(value)
    }

    fn persist(&self) -> Result<(), StorageError> {
        self.storage.save(&self.session)
    }
}

// Backends can be shared by reference (several stores, one medium).
impl<S: SessionStorage + ?Sized> SessionStorage for &S {
    fn save(&self, session: &Session) -> Result<(), StorageError> {
        (**self).save(session)
    }

    fn load(&self) -> Result<Option<Session>, StorageError> {
        (**self).load()
    }

    fn clear(&self) -> Result<(), StorageError> {
        (**self).clear()
    }
}
