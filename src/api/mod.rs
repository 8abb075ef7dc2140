//! Resource clients for the storefront API.
//!
//! Each namespace borrows an [`HttpClient`](crate::clients::HttpClient) and
//! maps one endpoint family to typed calls:
//!
//! - [`AuthApi`]: login, refresh, logout, current user
//! - [`ProductsApi`]: listing, lookup by id or slug, search, related products
//! - [`WishlistApi`]: the authenticated user's wishlist
//!
//! Usually obtained through [`StorefrontClient`](crate::StorefrontClient).

mod auth;
mod products;
mod wishlist;

pub use auth::AuthApi;
pub use products::{ProductPage, ProductsApi, DEFAULT_RELATED_LIMIT, DEFAULT_SEARCH_PER_PAGE};
pub use wishlist::WishlistApi;
