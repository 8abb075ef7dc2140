//! Error types for storefront API calls.
//!
//! This module contains the error returned by every API call, plus the
//! validation error raised while building a request.
//!
//! # Error Handling
//!
//! Every failure surfaces as a single [`ApiError`]. Its `Display` output is
//! the human-readable message a view would show:
//!
//! - [`ApiError::Network`]: The request never completed
//! - [`ApiError::Response`]: Non-2xx status; message from the envelope's first error
//! - [`ApiError::Envelope`]: 2xx status but `success: false`
//! - [`ApiError::MissingRefreshToken`]: Refresh attempted with no stored refresh token
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_api::ApiError;
//!
//! match client.products().get_product(42).await {
//!     Ok(product) => println!("{}", product.name),
//!     Err(ApiError::Response { status: 404, .. }) => println!("No such product"),
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::auth::StorageError;

/// Message used when a failed response carries no envelope errors.
pub const GENERIC_FAILURE_MESSAGE: &str = "API request failed";

/// Error returned when a request fails validation before it is sent.
///
/// # Example
///
/// ```rust
/// use storefront_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::RelativePath {
///     path: "products".to_string(),
/// };
/// assert_eq!(error.to_string(), "Request path 'products' must start with '/'.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request path is empty.
    #[error("Request path cannot be empty.")]
    EmptyPath,

    /// The request path is not rooted at the base URL.
    #[error("Request path '{path}' must start with '/'.")]
    RelativePath {
        /// The path that was provided.
        path: String,
    },

    /// A body was attached to a method that does not carry one.
    #[error("Cannot send a body with {method}.")]
    BodyNotAllowed {
        /// The HTTP method of the request.
        method: String,
    },
}

/// Unified error type for storefront API calls.
///
/// The variants keep enough structure for callers that want it, but each
/// one also renders as a single readable message via `Display` or
/// [`ApiError::message`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or connection error; the request never completed.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Response {
        /// The HTTP status code.
        status: u16,
        /// The first envelope error's message, or a generic message.
        message: String,
        /// The first envelope error's code, if any.
        code: Option<String>,
        /// The request field the first envelope error refers to, if any.
        field: Option<String>,
    },

    /// The server answered 2xx but the envelope reports `success: false`.
    #[error("{message}")]
    Envelope {
        /// The first envelope error's message, or a generic message.
        message: String,
    },

    /// A successful envelope arrived without a `data` payload.
    #[error("API response did not include data")]
    MissingData,

    /// A token refresh was attempted with no refresh token stored.
    #[error("No refresh token")]
    MissingRefreshToken,

    /// The request failed validation before it was sent.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// The response body could not be decoded into the expected type.
    #[error("Failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Persisting session tokens failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ApiError {
    /// Returns the human-readable failure message.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Returns the HTTP status code, if the server answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if the server rejected the request as unauthenticated.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Response { status: 401, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_error_displays_envelope_message() {
        let error = ApiError::Response {
            status: 404,
            message: "Not found".to_string(),
            code: Some("not_found".to_string()),
            field: None,
        };
        assert_eq!(error.to_string(), "Not found");
        assert_eq!(error.message(), "Not found");
        assert_eq!(error.status(), Some(404));
        assert!(!error.is_unauthorized());
    }

    #[test]
    fn test_envelope_error_has_no_status() {
        let error = ApiError::Envelope {
            message: "Product is out of stock".to_string(),
        };
        assert_eq!(error.to_string(), "Product is out of stock");
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_missing_refresh_token_message() {
        assert_eq!(ApiError::MissingRefreshToken.to_string(), "No refresh token");
    }

    #[test]
    fn test_unauthorized_detection() {
        let error = ApiError::Response {
            status: 401,
            message: "Token expired".to_string(),
            code: None,
            field: None,
        };
        assert!(error.is_unauthorized());
    }

    #[test]
    fn test_invalid_request_error_is_transparent() {
        let error: ApiError = InvalidHttpRequestError::EmptyPath.into();
        assert_eq!(error.to_string(), "Request path cannot be empty.");
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let api_error: &dyn std::error::Error = &ApiError::MissingData;
        let _ = api_error;

        let invalid_error: &dyn std::error::Error = &InvalidHttpRequestError::EmptyPath;
        let _ = invalid_error;
    }
}
