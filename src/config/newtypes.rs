//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A validated base URL for the storefront API.
///
/// All endpoint paths are appended to this URL. Trailing slashes are
/// trimmed so that `https://api.example.com/v1/` and
/// `https://api.example.com/v1` produce identical request URLs.
///
/// # Example
///
/// ```rust
/// use storefront_api::ApiBaseUrl;
///
/// let url = ApiBaseUrl::new("https://shop.example.com/wp-json/storefront/v1/").unwrap();
/// assert_eq!(url.as_ref(), "https://shop.example.com/wp-json/storefront/v1");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "shop.example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiBaseUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl ApiBaseUrl {
    /// Creates a new validated base URL.
    ///
    /// Only `http` and `https` schemes are accepted. Query strings and
    /// fragments are rejected since endpoint paths are appended verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidBaseUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(invalid());
        }

        let remainder = &url[host_start..];
        if remainder.contains(['?', '#']) {
            return Err(invalid());
        }

        // Host ends at port, path, or end of string
        let host_end = remainder
            .find([':', '/'])
            .map_or(url.len(), |i| host_start + i);

        let host = &url[host_start..host_end];
        if host.is_empty() || host.contains(char::is_whitespace) {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }

    /// Joins an endpoint path (which must start with `/`) onto this base.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}{path}", self.url)
    }
}

impl AsRef<str> for ApiBaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl std::str::FromStr for ApiBaseUrl {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ApiBaseUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.url)
    }
}

impl<'de> Deserialize<'de> for ApiBaseUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}
