//! Records exchanged with the storefront API.
//!
//! - [`product`]: Catalog records ([`Product`], [`Category`], [`ProductImage`], ...)
//! - [`filters`]: Listing filters ([`ProductFilters`]) and sort keys ([`SortKey`])
//! - [`user`]: Account records ([`User`], [`AuthResponse`])
//! - [`wishlist`]: Wishlist records ([`Wishlist`], [`WishlistIds`], ...)

pub mod filters;
pub mod product;
pub mod user;
pub mod wishlist;

pub use filters::{OrderBy, ParseSortKeyError, ProductFilters, SortKey, SortOrder};
pub use product::{
    AttributeOption, AttributeOptions, Category, Product, ProductAttribute, ProductImage,
    ProductVariation, Tag,
};
pub use user::{AuthResponse, User};
pub use wishlist::{ClearWishlistResponse, Wishlist, WishlistCheck, WishlistIds, WishlistResponse};
