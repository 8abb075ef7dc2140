//! Wishlist resource client.
//!
//! The wishlist belongs to the authenticated user and lives on the server.
//! Every call returns what the server reports; nothing is reconciled locally,
//! so two concurrent mutations of the same product race and the caller sees
//! whichever response arrives last.

use serde_json::json;

use crate::clients::{ApiError, HttpClient, HttpMethod, HttpRequest};
use crate::types::{ClearWishlistResponse, Wishlist, WishlistCheck, WishlistIds, WishlistResponse};

/// Wishlist endpoints under `/wishlist`. All require an access token.
#[derive(Clone, Copy, Debug)]
pub struct WishlistApi<'a> {
    client: &'a HttpClient,
}

impl<'a> WishlistApi<'a> {
    /// Creates the wishlist namespace over an HTTP client.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Fetches the wishlist with full product records.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_wishlist(&self) -> Result<Wishlist, ApiError> {
        self.get("/wishlist".to_string()).await
    }

    /// Fetches the ids of products on the wishlist.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_wishlist_ids(&self) -> Result<WishlistIds, ApiError> {
        self.get("/wishlist/ids".to_string()).await
    }

    /// Adds a product to the wishlist.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn add_to_wishlist(&self, product_id: u64) -> Result<WishlistResponse, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Post, "/wishlist")
            .body(json!({ "product_id": product_id }))
            .build()?;
        self.client
            .request::<WishlistResponse>(request)
            .await?
            .into_data()
    }

    /// Removes a product from the wishlist.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn remove_from_wishlist(
        &self,
        product_id: u64,
    ) -> Result<WishlistResponse, ApiError> {
        self.delete(format!("/wishlist/{product_id}")).await
    }

    /// Removes every product from the wishlist.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn clear_wishlist(&self) -> Result<ClearWishlistResponse, ApiError> {
        self.delete("/wishlist/clear".to_string()).await
    }

    /// Asks the server whether a product is on the wishlist.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn is_in_wishlist(&self, product_id: u64) -> Result<WishlistCheck, ApiError> {
        self.get(format!("/wishlist/check/{product_id}")).await
    }

    async fn get<T>(&self, path: String) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        let request = HttpRequest::builder(HttpMethod::Get, path).build()?;
        self.client.request::<T>(request).await?.into_data()
    }

    async fn delete<T>(&self, path: String) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        let request = HttpRequest::builder(HttpMethod::Delete, path).build()?;
        self.client.request::<T>(request).await?.into_data()
    }
}
