//! Configuration types for the Storefront API client.
//!
//! This module provides the configuration types used to point the client at
//! a storefront API deployment.
//!
//! # Overview
//!
//! - [`StorefrontConfig`]: The main configuration struct holding all client settings
//! - [`StorefrontConfigBuilder`]: A builder for constructing [`StorefrontConfig`] instances
//! - [`ApiBaseUrl`]: A validated API origin that every endpoint is relative to
//!
//! # Example
//!
//! ```rust
//! use storefront_api::{ApiBaseUrl, StorefrontConfig};
//!
//! let config = StorefrontConfig::builder()
//!     .base_url(ApiBaseUrl::new("https://shop.example.com/wp-json/storefront/v1").unwrap())
//!     .user_agent_prefix("MyShop/1.0")
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::ApiBaseUrl;

use crate::error::ConfigError;

/// Environment variable holding the API base URL.
pub const BASE_URL_ENV: &str = "STOREFRONT_API_URL";

/// Fallback variable name shared with the web frontend.
pub const LEGACY_BASE_URL_ENV: &str = "NEXT_PUBLIC_API_URL";

/// Configuration for the Storefront API client.
///
/// # Thread Safety
///
/// `StorefrontConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone, Debug)]
pub struct StorefrontConfig {
    base_url: ApiBaseUrl,
    user_agent_prefix: Option<String>,
}

impl StorefrontConfig {
    /// Creates a new builder for constructing a `StorefrontConfig`.
    #[must_use]
    pub fn builder() -> StorefrontConfigBuilder {
        StorefrontConfigBuilder::new()
    }

    /// Reads the configuration from process environment variables.
    ///
    /// `STOREFRONT_API_URL` is consulted first, then `NEXT_PUBLIC_API_URL`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if neither variable is set, or
    /// [`ConfigError::InvalidBaseUrl`] if the value is not a valid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Same as [`StorefrontConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = [BASE_URL_ENV, LEGACY_BASE_URL_ENV]
            .into_iter()
            .filter_map(&lookup)
            .find(|value| !value.trim().is_empty())
            .ok_or(ConfigError::MissingEnvVar { name: BASE_URL_ENV })?;

        tracing::debug!("Storefront API base URL loaded from environment: {}", raw);

        Self::builder().base_url(ApiBaseUrl::new(raw)?).build()
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &ApiBaseUrl {
        &self.base_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify StorefrontConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StorefrontConfig>();
};

/// Builder for constructing [`StorefrontConfig`] instances.
///
/// `base_url` is required. `user_agent_prefix` defaults to `None`.
#[derive(Debug, Default)]
pub struct StorefrontConfigBuilder {
    base_url: Option<ApiBaseUrl>,
    user_agent_prefix: Option<String>,
}

impl StorefrontConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL (required).
    #[must_use]
    pub fn base_url(mut self, url: ApiBaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`StorefrontConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` is not set.
    pub fn build(self) -> Result<StorefrontConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;

        Ok(StorefrontConfig {
            base_url,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
