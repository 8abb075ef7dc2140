//! The top-level storefront client.

use std::sync::Arc;

use crate::api::{AuthApi, ProductsApi, WishlistApi};
use crate::auth::TokenStore;
use crate::clients::{ApiError, HttpClient};
use crate::config::StorefrontConfig;

/// Entry point bundling the HTTP client, the session and the resource clients.
///
/// One `StorefrontClient` holds exactly one session. Clients that should
/// share a session (or persist it) are built over the same
/// [`TokenStore`] with [`with_token_store`](Self::with_token_store).
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use storefront_api::{ApiBaseUrl, MemoryStorage, StorefrontClient, StorefrontConfig, TokenStore};
///
/// let config = StorefrontConfig::builder()
///     .base_url(ApiBaseUrl::new("https://shop.example.com/api").unwrap())
///     .build()
///     .unwrap();
///
/// let tokens = Arc::new(TokenStore::new(Arc::new(MemoryStorage::new())));
/// let client = StorefrontClient::with_token_store(&config, tokens).unwrap();
/// assert!(!client.auth().is_authenticated());
/// ```
#[derive(Debug)]
pub struct StorefrontClient {
    http_client: HttpClient,
}

// Verify StorefrontClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StorefrontClient>();
};

impl StorefrontClient {
    /// Creates a client with a fresh in-memory session.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the HTTP client cannot be created.
    pub fn new(config: &StorefrontConfig) -> Result<Self, ApiError> {
        Self::with_token_store(config, Arc::new(TokenStore::in_memory()))
    }

    /// Creates a client over an existing token store.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the HTTP client cannot be created.
    pub fn with_token_store(
        config: &StorefrontConfig,
        tokens: Arc<TokenStore>,
    ) -> Result<Self, ApiError> {
        Ok(Self {
            http_client: HttpClient::new(config, tokens)?,
        })
    }

    /// Returns the auth resource client.
    #[must_use]
    pub const fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(&self.http_client)
    }

    /// Returns the products resource client.
    #[must_use]
    pub const fn products(&self) -> ProductsApi<'_> {
        ProductsApi::new(&self.http_client)
    }

    /// Returns the wishlist resource client.
    #[must_use]
    pub const fn wishlist(&self) -> WishlistApi<'_> {
        WishlistApi::new(&self.http_client)
    }

    /// Returns the session token store.
    #[must_use]
    pub const fn tokens(&self) -> &Arc<TokenStore> {
        self.http_client.tokens()
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }
}
