//! Error types for the Storefront API client.
//!
//! This module contains error types used for configuration and validation
//! errors. Request-time failures live in [`crate::clients::ApiError`].
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use storefront_api::{ApiBaseUrl, ConfigError};
//!
//! let result = ApiBaseUrl::new("not a url");
//! assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Base URL is invalid.
    #[error("Invalid API base URL '{url}'. Please provide a URL with scheme (e.g., 'https://shop.example.com/wp-json/storefront/v1').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// None of the environment variables naming the API origin are set.
    #[error("Environment variable '{name}' is not set. It must hold the storefront API base URL.")]
    MissingEnvVar {
        /// The primary variable that was looked up.
        name: &'static str,
    },
}
