//! Catalog records returned by the product endpoints.
//!
//! These mirror the upstream catalog verbatim and are never mutated locally.
//! Prices are kept as the decimal strings the API sends.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Category {
    /// Upstream category id.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// URL slug, also accepted by the `category` product filter.
    pub slug: String,
}

/// A product tag.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Tag {
    /// Upstream tag id.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
}

/// An image attached to a product or variation.
///
/// # Example
///
/// ```rust
/// use storefront_api::types::ProductImage;
///
/// let image = ProductImage {
///     src: "https://cdn.example.com/hoodie.jpg".to_string(),
///     alt: "Blue hoodie".to_string(),
///     is_main: true,
///     ..Default::default()
/// };
/// assert!(image.is_main);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductImage {
    /// Upstream attachment id.
    #[serde(default)]
    pub id: u64,
    /// Full-size image URL.
    #[serde(default)]
    pub src: String,
    /// Thumbnail URL.
    #[serde(default)]
    pub thumbnail: String,
    /// Medium-size image URL.
    #[serde(default)]
    pub medium: String,
    /// Alternative text.
    #[serde(default)]
    pub alt: String,
    /// Whether this is the product's main image.
    #[serde(default)]
    pub is_main: bool,
}

/// A named option value of a product attribute.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AttributeOption {
    /// Upstream term id.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
}

/// The options of a product attribute.
///
/// Taxonomy attributes carry full term records while custom attributes are
/// plain strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum AttributeOptions {
    /// Taxonomy-backed options.
    Terms(Vec<AttributeOption>),
    /// Free-form options.
    Names(Vec<String>),
}

impl AttributeOptions {
    /// Returns the display names of all options.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        match self {
            Self::Terms(terms) => terms.iter().map(|t| t.name.as_str()).collect(),
            Self::Names(names) => names.iter().map(String::as_str).collect(),
        }
    }
}

impl Default for AttributeOptions {
    fn default() -> Self {
        Self::Names(Vec::new())
    }
}

/// A product attribute such as size or color.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductAttribute {
    /// Upstream attribute id (0 for custom attributes).
    #[serde(default)]
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Sort position.
    #[serde(default)]
    pub position: i64,
    /// Whether the attribute is shown on the product page.
    #[serde(default)]
    pub visible: bool,
    /// Whether the attribute defines variations.
    #[serde(default)]
    pub variation: bool,
    /// The attribute's options.
    #[serde(default)]
    pub options: AttributeOptions,
}

/// A purchasable variation of a variable product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductVariation {
    /// Upstream variation id.
    pub id: u64,
    /// Stock keeping unit.
    #[serde(default)]
    pub sku: String,
    /// Current price.
    #[serde(default)]
    pub price: String,
    /// Regular price.
    #[serde(default)]
    pub regular_price: String,
    /// Sale price, empty when not on sale.
    #[serde(default)]
    pub sale_price: String,
    /// Whether the variation can be purchased.
    #[serde(default)]
    pub in_stock: bool,
    /// Stock quantity when managed.
    #[serde(default)]
    pub stock_quantity: Option<i64>,
    /// Attribute name to selected option.
    #[serde(default)]
    pub attributes: HashMap<String, String>,
    /// Variation image.
    #[serde(default)]
    pub image: Option<ProductImage>,
}

/// A catalog product.
///
/// List endpoints return the summary fields; the single-product endpoints
/// also fill the optional detail fields.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Product {
    /// Upstream product id.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// URL slug, accepted by `/products/slug/:slug`.
    #[serde(default)]
    pub slug: String,
    /// Product type (e.g., "simple", "variable").
    #[serde(rename = "type", default)]
    pub product_type: String,
    /// Publication status.
    #[serde(default)]
    pub status: String,
    /// Canonical storefront URL.
    #[serde(default)]
    pub permalink: String,
    /// Stock keeping unit.
    #[serde(default)]
    pub sku: String,
    /// Current price.
    #[serde(default)]
    pub price: String,
    /// Regular price.
    #[serde(default)]
    pub regular_price: String,
    /// Sale price, empty when not on sale.
    #[serde(default)]
    pub sale_price: String,
    /// Server-rendered price markup.
    #[serde(default)]
    pub price_html: String,
    /// Whether the product is on sale.
    #[serde(default)]
    pub on_sale: bool,
    /// Whether the product is featured.
    #[serde(default)]
    pub featured: bool,
    /// Stock status (e.g., "instock", "outofstock").
    #[serde(default)]
    pub stock_status: String,
    /// Stock quantity when managed.
    #[serde(default)]
    pub stock_quantity: Option<i64>,
    /// Whether the product can be purchased.
    #[serde(default)]
    pub in_stock: bool,
    /// Short description markup.
    #[serde(default)]
    pub short_description: String,
    /// Full description markup (detail endpoints only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Assigned categories.
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Assigned tags.
    #[serde(default)]
    pub tags: Vec<Tag>,
    /// Product images, main image first.
    #[serde(default)]
    pub images: Vec<ProductImage>,
    /// Average rating as a decimal string.
    #[serde(default)]
    pub average_rating: String,
    /// Number of ratings.
    #[serde(default)]
    pub rating_count: u64,
    /// Creation timestamp as sent by the server.
    #[serde(default)]
    pub date_created: String,
    /// Product attributes (detail endpoints only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<ProductAttribute>>,
    /// Default attribute selections (detail endpoints only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_attributes: Option<HashMap<String, String>>,
    /// Gallery images (detail endpoints only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery_images: Option<Vec<ProductImage>>,
    /// Related product ids (detail endpoints only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_ids: Option<Vec<u64>>,
    /// Variations of a variable product (detail endpoints only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variations: Option<Vec<ProductVariation>>,
    /// Attribute name to available options (detail endpoints only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variation_attributes: Option<HashMap<String, Vec<String>>>,
}

impl Product {
    /// Returns the main image, falling back to the first image.
    #[must_use]
    pub fn main_image(&self) -> Option<&ProductImage> {
        self.images
            .iter()
            .find(|image| image.is_main)
            .or_else(|| self.images.first())
    }

    /// Returns `true` if this product has purchasable variations.
    #[must_use]
    pub fn is_variable(&self) -> bool {
        self.variations.as_ref().is_some_and(|v| !v.is_empty())
    }
}
