//! Products resource client.

use crate::clients::{ApiError, HttpClient, HttpMethod, HttpRequest, PaginationMeta};
use crate::types::{Product, ProductFilters};

/// Default page size for search results.
pub const DEFAULT_SEARCH_PER_PAGE: u32 = 12;

/// Default number of related products requested.
pub const DEFAULT_RELATED_LIMIT: u32 = 4;

/// One page of a product listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductPage {
    /// Products on this page.
    pub products: Vec<Product>,
    /// Pagination info, when the server sends it.
    pub meta: Option<PaginationMeta>,
}

/// Catalog endpoints under `/products`.
///
/// # Example
///
/// ```rust,ignore
/// use storefront_api::types::{ProductFilters, SortKey};
///
/// let filters = ProductFilters::new()
///     .with_category("hoodies")
///     .with_sort("price-ASC".parse::<SortKey>()?);
/// let page = client.products().get_products(&filters).await?;
///
/// for product in &page.products {
///     println!("{} {}", product.name, product.price);
/// }
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ProductsApi<'a> {
    client: &'a HttpClient,
}

impl<'a> ProductsApi<'a> {
    /// Creates the products namespace over an HTTP client.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Lists products matching `filters`.
    ///
    /// Unset filters are omitted from the query string.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_products(&self, filters: &ProductFilters) -> Result<ProductPage, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Get, "/products")
            .query(filters.query_pairs())
            .build()?;
        self.fetch_page(request).await
    }

    /// Fetches a single product by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the product does not exist.
    pub async fn get_product(&self, id: u64) -> Result<Product, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Get, format!("/products/{id}")).build()?;
        self.client.request::<Product>(request).await?.into_data()
    }

    /// Fetches a single product by its URL slug.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the product does not exist.
    pub async fn get_product_by_slug(&self, slug: &str) -> Result<Product, ApiError> {
        let path = format!("/products/slug/{}", urlencoding::encode(slug));
        let request = HttpRequest::builder(HttpMethod::Get, path).build()?;
        self.client.request::<Product>(request).await?.into_data()
    }

    /// Searches products by free text.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn search_products(
        &self,
        query: &str,
        page: u32,
        per_page: u32,
    ) -> Result<ProductPage, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Get, "/products/search")
            .query_param("q", query)
            .query_param("page", page.to_string())
            .query_param("per_page", per_page.to_string())
            .build()?;
        self.fetch_page(request).await
    }

    /// Searches products, returning the first page of 12 results.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn search_products_default(&self, query: &str) -> Result<ProductPage, ApiError> {
        self.search_products(query, 1, DEFAULT_SEARCH_PER_PAGE).await
    }

    /// Fetches up to `limit` products related to `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_related_products(
        &self,
        id: u64,
        limit: u32,
    ) -> Result<Vec<Product>, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Get, format!("/products/{id}/related"))
            .query_param("limit", limit.to_string())
            .build()?;
        self.client.request::<Vec<Product>>(request).await?.into_data()
    }

    /// Fetches up to four products related to `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_related_products_default(&self, id: u64) -> Result<Vec<Product>, ApiError> {
        self.get_related_products(id, DEFAULT_RELATED_LIMIT).await
    }

    async fn fetch_page(&self, request: HttpRequest) -> Result<ProductPage, ApiError> {
        let (products, meta) = self
            .client
            .request::<Vec<Product>>(request)
            .await?
            .into_parts()?;
        Ok(ProductPage { products, meta })
    }
}
