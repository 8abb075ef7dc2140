//! HTTP client types for storefront API communication.
//!
//! This module provides the authenticated request wrapper that the resource
//! clients in [`crate::api`] are built on.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client that attaches bearer tokens and parses envelopes
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, DELETE)
//! - [`Envelope`]: The `{success, data, meta, errors}` wrapper around every response
//! - [`PaginationMeta`]: Pagination info for list endpoints, with page-window rendering
//! - [`ApiError`]: The single failure type surfaced by every call
//!
//! # Failure Behavior
//!
//! - **Non-2xx status**: fails with the first envelope error's message, or
//!   `"API request failed"` if there is none
//! - **2xx with `success: false`**: returned as-is by [`HttpClient::request`];
//!   [`Envelope::into_data`] turns it into [`ApiError::Envelope`]
//! - **Transport failure**: [`ApiError::Network`]
//!
//! No request is ever retried.

mod envelope;
mod errors;
mod http_client;
mod http_request;

pub use envelope::{ApiErrorDetail, Envelope, PageLink, PaginationMeta};
pub use errors::{ApiError, InvalidHttpRequestError, GENERIC_FAILURE_MESSAGE};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
