//! Product listing filters and sort keys.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Field a product listing is ordered by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderBy {
    /// Publication date.
    #[default]
    Date,
    /// Current price.
    Price,
    /// Number of sales.
    Popularity,
    /// Average rating.
    Rating,
    /// Product name.
    Title,
    /// Manual catalog order.
    MenuOrder,
}

impl OrderBy {
    /// Returns the wire value used in query strings.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Price => "price",
            Self::Popularity => "popularity",
            Self::Rating => "rating",
            Self::Title => "title",
            Self::MenuOrder => "menu_order",
        }
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction of a product listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending.
    #[default]
    Desc,
}

impl SortOrder {
    /// Returns the wire value used in query strings.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a sort key string cannot be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid sort key '{0}'. Expected '<orderby>-<ASC|DESC>', e.g. 'price-ASC'.")]
pub struct ParseSortKeyError(pub String);

/// A combined sort selection, encoded as `"<orderby>-<ORDER>"`.
///
/// This is the single value a sort dropdown carries, e.g. `price-ASC` for
/// "price: low to high".
///
/// # Example
///
/// ```rust
/// use storefront_api::types::{OrderBy, SortKey, SortOrder};
///
/// let key: SortKey = "price-ASC".parse().unwrap();
/// assert_eq!(key.orderby, OrderBy::Price);
/// assert_eq!(key.order, SortOrder::Asc);
/// assert_eq!(SortKey::default().to_string(), "date-DESC");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SortKey {
    /// Field to order by.
    pub orderby: OrderBy,
    /// Sort direction.
    pub order: SortOrder,
}

impl SortKey {
    /// Creates a new sort key.
    #[must_use]
    pub const fn new(orderby: OrderBy, order: SortOrder) -> Self {
        Self { orderby, order }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.orderby, self.order)
    }
}

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseSortKeyError(s.to_string());
        // menu_order contains no '-', so the last '-' splits the key
        let (orderby, order) = s.trim().rsplit_once('-').ok_or_else(err)?;

        let orderby = match orderby {
            "date" => OrderBy::Date,
            "price" => OrderBy::Price,
            "popularity" => OrderBy::Popularity,
            "rating" => OrderBy::Rating,
            "title" => OrderBy::Title,
            "menu_order" => OrderBy::MenuOrder,
            _ => return Err(err()),
        };
        let order = match order.to_ascii_uppercase().as_str() {
            "ASC" => SortOrder::Asc,
            "DESC" => SortOrder::Desc,
            _ => return Err(err()),
        };

        Ok(Self { orderby, order })
    }
}

/// A sparse set of product listing filters.
///
/// Unset fields, and empty `category` strings, are left out of the query
/// string entirely.
///
/// # Example
///
/// ```rust
/// use storefront_api::types::ProductFilters;
///
/// let filters = ProductFilters {
///     category: Some("hoodies".to_string()),
///     on_sale: Some(true),
///     ..Default::default()
/// };
/// assert_eq!(
///     filters.query_pairs(),
///     vec![("category", "hoodies".to_string()), ("on_sale", "true".to_string())]
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductFilters {
    /// Page number, starting at 1.
    pub page: Option<u32>,
    /// Products per page.
    pub per_page: Option<u32>,
    /// Category slug.
    pub category: Option<String>,
    /// Field to order by.
    pub orderby: Option<OrderBy>,
    /// Sort direction.
    pub order: Option<SortOrder>,
    /// Lowest price to include.
    pub min_price: Option<f64>,
    /// Highest price to include.
    pub max_price: Option<f64>,
    /// Only featured products.
    pub featured: Option<bool>,
    /// Only products on sale.
    pub on_sale: Option<bool>,
}

impl ProductFilters {
    /// Creates an empty filter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets both `orderby` and `order` from a sort key.
    #[must_use]
    pub const fn with_sort(mut self, key: SortKey) -> Self {
        self.orderby = Some(key.orderby);
        self.order = Some(key.order);
        self
    }

    /// Sets the page number.
    #[must_use]
    pub const fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the category slug.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Returns the set filters as query pairs, in declaration order.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        let mut push = |key: &'static str, value: Option<String>| {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                pairs.push((key, value));
            }
        };

        push("page", self.page.map(|v| v.to_string()));
        push("per_page", self.per_page.map(|v| v.to_string()));
        push("category", self.category.clone());
        push("orderby", self.orderby.map(|v| v.as_str().to_string()));
        push("order", self.order.map(|v| v.as_str().to_string()));
        push("min_price", self.min_price.map(|v| v.to_string()));
        push("max_price", self.max_price.map(|v| v.to_string()));
        push("featured", self.featured.map(|v| v.to_string()));
        push("on_sale", self.on_sale.map(|v| v.to_string()));

        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filters_produce_no_pairs() {
        assert!(ProductFilters::new().query_pairs().is_empty());
    }

    #[test]
    fn test_query_pairs_skip_empty_category() {
        let filters = ProductFilters {
            category: Some(String::new()),
            featured: Some(false),
            ..Default::default()
        };
        assert_eq!(filters.query_pairs(), vec![("featured", "false".to_string())]);
    }

    #[test]
    fn test_query_pairs_full_set_in_order() {
        let filters = ProductFilters {
            page: Some(2),
            per_page: Some(24),
            category: Some("tees".to_string()),
            min_price: Some(10.0),
            max_price: Some(99.5),
            featured: Some(true),
            on_sale: Some(false),
            ..Default::default()
        }
        .with_sort(SortKey::new(OrderBy::MenuOrder, SortOrder::Asc));

        let keys: Vec<_> = filters.query_pairs().into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec![
                "page",
                "per_page",
                "category",
                "orderby",
                "order",
                "min_price",
                "max_price",
                "featured",
                "on_sale"
            ]
        );

        let pairs = filters.query_pairs();
        assert_eq!(pairs[3].1, "menu_order");
        assert_eq!(pairs[4].1, "ASC");
        assert_eq!(pairs[5].1, "10");
        assert_eq!(pairs[6].1, "99.5");
    }

    #[test]
    fn test_sort_key_round_trips_through_string() {
        for key in [
            "date-DESC",
            "price-ASC",
            "popularity-DESC",
            "rating-DESC",
            "title-ASC",
            "menu_order-ASC",
        ] {
            let parsed: SortKey = key.parse().unwrap();
            assert_eq!(parsed.to_string(), key);
        }
    }

    #[test]
    fn test_sort_key_parse_is_case_insensitive_on_direction() {
        let key: SortKey = "price-desc".parse().unwrap();
        assert_eq!(key, SortKey::new(OrderBy::Price, SortOrder::Desc));
    }

    #[test]
    fn test_sort_key_rejects_invalid_values() {
        assert!("price".parse::<SortKey>().is_err());
        assert!("weight-ASC".parse::<SortKey>().is_err());
        assert!("price-UP".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_order_enums_serialize_to_wire_values() {
        assert_eq!(serde_json::to_string(&OrderBy::MenuOrder).unwrap(), r#""menu_order""#);
        assert_eq!(serde_json::to_string(&SortOrder::Asc).unwrap(), r#""ASC""#);
    }
}
