//! # Storefront API Rust Client
//!
//! A Rust client for a headless storefront REST API, covering session
//! handling, the product catalog and the customer wishlist.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`StorefrontConfig`] and [`StorefrontConfigBuilder`]
//! - A session [`TokenStore`] mirrored to a pluggable [`TokenStorage`] backend
//! - An authenticated JSON request wrapper ([`HttpClient`]) that parses the
//!   standard `{success, data, meta, errors}` [`Envelope`]
//! - Resource clients for auth, products and wishlist via [`StorefrontClient`]
//! - Pagination and sort helpers for rendering listings
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use storefront_api::{StorefrontClient, StorefrontConfig};
//! use storefront_api::types::ProductFilters;
//!
//! let config = StorefrontConfig::from_env()?;
//! let client = StorefrontClient::new(&config)?;
//!
//! let filters = ProductFilters {
//!     category: Some("hoodies".to_string()),
//!     on_sale: Some(true),
//!     ..Default::default()
//! };
//! let page = client.products().get_products(&filters).await?;
//! println!("{} hoodies on sale", page.products.len());
//! ```
//!
//! ## Sessions
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use storefront_api::{FileStorage, StorefrontClient, StorefrontConfig, TokenStore};
//!
//! // Tokens survive restarts when the store is backed by a file
//! let tokens = Arc::new(TokenStore::new(Arc::new(FileStorage::new("session.json"))));
//! let client = StorefrontClient::with_token_store(&config, tokens)?;
//!
//! if !client.auth().is_authenticated() {
//!     client.auth().login("ada", "secret").await?;
//! }
//!
//! client.wishlist().add_to_wishlist(42).await?;
//! client.auth().logout().await?; // local tokens are cleared even if this fails
//! ```
//!
//! ## Errors
//!
//! Every call returns `Result<_, ApiError>`. The error's `Display` output is
//! the message to show: the first envelope error for failed responses,
//! `"API request failed"` when there is none.
//!
//! ## Design Principles
//!
//! - **No global state**: The session lives in an explicit, shareable [`TokenStore`]
//! - **Fail-fast validation**: Configuration newtypes validate on construction
//! - **Thread-safe**: All client types are `Send + Sync`
//! - **No hidden retries**: A 401 is reported, never silently refreshed and replayed

pub mod api;
pub mod auth;
mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod types;

pub use client::StorefrontClient;
pub use config::{ApiBaseUrl, StorefrontConfig, StorefrontConfigBuilder};
pub use error::ConfigError;

// Re-export session types
pub use auth::{FileStorage, MemoryStorage, StorageError, TokenPair, TokenStorage, TokenStore};

// Re-export HTTP client types
pub use clients::{
    ApiError, ApiErrorDetail, Envelope, HttpClient, HttpMethod, HttpRequest, HttpRequestBuilder,
    InvalidHttpRequestError, PageLink, PaginationMeta,
};

// Re-export resource clients
pub use api::{AuthApi, ProductPage, ProductsApi, WishlistApi};
