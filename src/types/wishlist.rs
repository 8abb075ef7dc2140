//! Wishlist records returned by the wishlist endpoints.
//!
//! The wishlist is owned by the server; these types only carry what it last
//! reported.

use serde::{Deserialize, Serialize};

use crate::types::Product;

/// The full wishlist with product records.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Wishlist {
    /// Products on the wishlist.
    #[serde(default)]
    pub products: Vec<Product>,
    /// Number of products on the wishlist.
    #[serde(default)]
    pub count: u64,
}

/// The wishlist as bare product ids.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct WishlistIds {
    /// Ids of products on the wishlist.
    #[serde(default)]
    pub product_ids: Vec<u64>,
    /// Number of products on the wishlist.
    #[serde(default)]
    pub count: u64,
}

impl WishlistIds {
    /// Returns `true` if the server reported `product_id` as saved.
    #[must_use]
    pub fn contains(&self, product_id: u64) -> bool {
        self.product_ids.contains(&product_id)
    }
}

/// Result of adding or removing a wishlist entry.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct WishlistResponse {
    /// Whether the mutation took effect.
    #[serde(default)]
    pub success: bool,
    /// Human-readable outcome.
    #[serde(default)]
    pub message: String,
    /// The wishlist after the mutation, when the server includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wishlist: Option<Wishlist>,
}

/// Result of clearing the wishlist.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ClearWishlistResponse {
    /// Whether the wishlist was cleared.
    #[serde(default)]
    pub success: bool,
    /// Human-readable outcome.
    #[serde(default)]
    pub message: String,
}

/// Result of a wishlist membership check.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct WishlistCheck {
    /// The product that was checked.
    pub product_id: u64,
    /// Whether it is on the wishlist.
    pub in_wishlist: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wishlist_response_with_embedded_wishlist() {
        let response: WishlistResponse = serde_json::from_value(json!({
            "success": true,
            "message": "Product added to wishlist",
            "wishlist": {"products": [{"id": 42, "name": "Blue Hoodie"}], "count": 1}
        }))
        .unwrap();

        let wishlist = response.wishlist.unwrap();
        assert_eq!(wishlist.count, 1);
        assert_eq!(wishlist.products[0].id, 42);
    }

    #[test]
    fn test_wishlist_ids_contains() {
        let ids: WishlistIds =
            serde_json::from_value(json!({"product_ids": [3, 5, 8], "count": 3})).unwrap();
        assert!(ids.contains(5));
        assert!(!ids.contains(4));
    }
}
