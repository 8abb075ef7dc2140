//! Session token handling for the Storefront API client.
//!
//! # Overview
//!
//! - [`TokenStore`]: The current access/refresh token pair for one client
//! - [`TokenPair`]: An access/refresh token pair with masked debug output
//! - [`TokenStorage`]: The durable key-value backend a store mirrors to
//! - [`MemoryStorage`] and [`FileStorage`]: Bundled backends
//!
//! The session lifecycle is driven by [`AuthApi`](crate::api::AuthApi):
//! login and refresh write the store, logout clears it.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use storefront_api::auth::{FileStorage, TokenStore};
//!
//! let dir = tempfile::TempDir::new().unwrap();
//! let store = TokenStore::new(Arc::new(FileStorage::new(dir.path().join("session.json"))));
//! store.set("access", "refresh").unwrap();
//! assert!(store.is_authenticated());
//!
//! store.clear().unwrap();
//! assert!(!store.is_authenticated());
//! ```

pub mod storage;
mod token_store;

pub use storage::{
    FileStorage, MemoryStorage, StorageError, TokenStorage, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY,
};
pub use token_store::{TokenPair, TokenStore};
