//! Session token storage.
//!
//! This module provides the [`TokenStore`] type, which holds the current
//! access/refresh token pair for one client and mirrors it to a durable
//! [`TokenStorage`] backend.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};

use crate::auth::storage::{
    MemoryStorage, StorageError, TokenStorage, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY,
};

/// An access/refresh token pair.
///
/// Both values are opaque bearer credentials. The `Debug` implementation
/// masks them to keep tokens out of logs.
#[derive(Clone, PartialEq, Eq)]
pub struct TokenPair {
    /// The access token sent as `Authorization: Bearer <token>`.
    pub access_token: String,
    /// The refresh token exchanged for a new pair at `/auth/refresh`.
    pub refresh_token: String,
}

impl TokenPair {
    /// Creates a new token pair.
    #[must_use]
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        }
    }
}

impl fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TokenPair { access_token: *****, refresh_token: ***** }")
    }
}

#[derive(Default)]
struct TokenState {
    access_token: Option<String>,
    refresh_token: Option<String>,
    expires_at: Option<DateTime<Utc>>,
}

/// Holds the session tokens for a storefront client.
///
/// At most one session is active per store. [`set`](Self::set) overwrites
/// the previous pair and [`clear`](Self::clear) removes both tokens from
/// memory and from the backend.
///
/// Getters serve the in-memory value when present. Otherwise they make one
/// attempt to hydrate from the backend and cache whatever they find, so a
/// store built over previously persisted storage picks up the old session.
///
/// Token expiry is never checked locally; an expired access token is only
/// detected when the server rejects it.
///
/// # Thread Safety
///
/// `TokenStore` is `Send + Sync`. The internal lock is never held across an
/// `.await`.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use storefront_api::auth::{MemoryStorage, TokenStore};
///
/// let storage = Arc::new(MemoryStorage::new());
/// let store = TokenStore::new(storage.clone());
/// store.set("access", "refresh").unwrap();
///
/// // A new store over the same storage sees the persisted session
/// let reloaded = TokenStore::new(storage);
/// assert_eq!(reloaded.access_token().as_deref(), Some("access"));
/// assert!(reloaded.is_authenticated());
/// ```
pub struct TokenStore {
    state: Mutex<TokenState>,
    storage: Arc<dyn TokenStorage>,
}

// Verify TokenStore is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TokenStore>();
};

impl TokenStore {
    /// Creates a store over the given persistence backend.
    ///
    /// Nothing is read from the backend until a getter needs it.
    #[must_use]
    pub fn new(storage: Arc<dyn TokenStorage>) -> Self {
        Self {
            state: Mutex::new(TokenState::default()),
            storage,
        }
    }

    /// Creates a store over a fresh [`MemoryStorage`].
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    fn state(&self) -> MutexGuard<'_, TokenState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Stores a new token pair, replacing any previous session.
    ///
    /// The in-memory pair is replaced first, so it is visible even if the
    /// backend write fails.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend rejects either write.
    pub fn set(
        &self,
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> Result<(), StorageError> {
        let access_token = access_token.into();
        let refresh_token = refresh_token.into();

        {
            let mut state = self.state();
            state.access_token = Some(access_token.clone());
            state.refresh_token = Some(refresh_token.clone());
            state.expires_at = None;
        }

        self.storage.save(ACCESS_TOKEN_KEY, &access_token)?;
        self.storage.save(REFRESH_TOKEN_KEY, &refresh_token)?;
        Ok(())
    }

    /// Stores a token pair received from the server together with its
    /// advertised lifetime in seconds.
    ///
    /// The resulting [`expires_at`](Self::expires_at) is informational only.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend rejects either write.
    pub fn set_with_lifetime(
        &self,
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
        expires_in: i64,
    ) -> Result<(), StorageError> {
        let result = self.set(access_token, refresh_token);
        self.state().expires_at = chrono::Duration::try_seconds(expires_in)
            .and_then(|lifetime| Utc::now().checked_add_signed(lifetime));
        result
    }

    /// Returns the current token pair, if both tokens are available.
    #[must_use]
    pub fn tokens(&self) -> Option<TokenPair> {
        Some(TokenPair {
            access_token: self.access_token()?,
            refresh_token: self.refresh_token()?,
        })
    }

    /// Returns the access token, hydrating it from storage if needed.
    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.get_or_hydrate(ACCESS_TOKEN_KEY, |state| &mut state.access_token)
    }

    /// Returns the refresh token, hydrating it from storage if needed.
    #[must_use]
    pub fn refresh_token(&self) -> Option<String> {
        self.get_or_hydrate(REFRESH_TOKEN_KEY, |state| &mut state.refresh_token)
    }

    /// Returns when the access token was advertised to expire, if known.
    ///
    /// Only set by [`set_with_lifetime`](Self::set_with_lifetime); a session
    /// hydrated from storage has no known expiry.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.state().expires_at
    }

    /// Returns `true` if an access token is held.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    /// Removes both tokens from memory and from storage.
    ///
    /// Memory is always cleared. Both storage keys are attempted even if the
    /// first removal fails; the first failure is returned.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend rejects a removal.
    pub fn clear(&self) -> Result<(), StorageError> {
        *self.state() = TokenState::default();

        let access = self.storage.clear(ACCESS_TOKEN_KEY);
        let refresh = self.storage.clear(REFRESH_TOKEN_KEY);
        access.and(refresh)
    }

    /// Clears the session only if it still holds `refresh_token`.
    ///
    /// Used when the server rejects a refresh: a session replaced while the
    /// request was in flight is left alone. Returns `true` if it cleared.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend rejects a removal.
    pub fn clear_if_refresh_token(&self, refresh_token: &str) -> Result<bool, StorageError> {
        let mut state = self.state();
        if state.refresh_token.as_deref() != Some(refresh_token) {
            return Ok(false);
        }
        *state = TokenState::default();

        // Still under the lock so a concurrent `set` cannot interleave
        let access = self.storage.clear(ACCESS_TOKEN_KEY);
        let refresh = self.storage.clear(REFRESH_TOKEN_KEY);
        access.and(refresh).map(|()| true)
    }

    fn get_or_hydrate<F>(&self, key: &str, slot: F) -> Option<String>
    where
        F: Fn(&mut TokenState) -> &mut Option<String>,
    {
        let mut state = self.state();
        let value = slot(&mut *state);
        if value.is_some() {
            return value.clone();
        }

        match self.storage.load(key) {
            Ok(loaded) => {
                if loaded.is_some() {
                    tracing::debug!("Hydrated {} from token storage", key);
                }
                value.clone_from(&loaded);
                loaded
            }
            Err(e) => {
                tracing::warn!("Failed to load {} from token storage: {}", key, e);
                None
            }
        }
    }
}

impl fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state();
        f.debug_struct("TokenStore")
            .field("has_access_token", &state.access_token.is_some())
            .field("has_refresh_token", &state.refresh_token.is_some())
            .field("expires_at", &state.expires_at)
            .field("storage", &self.storage)
            .finish()
    }
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::in_memory()
    }
}
