//! HTTP request types for the Storefront API client.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests against the storefront API.

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the storefront API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources and auth actions.
    Post,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// An HTTP request to be sent to the storefront API.
///
/// Query parameters keep their insertion order, so the rendered URL is
/// deterministic.
///
/// # Example
///
/// ```rust
/// use storefront_api::clients::{HttpRequest, HttpMethod};
/// use serde_json::json;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/products/search")
///     .query_param("q", "blue hoodie")
///     .query_param("page", "1")
///     .build()
///     .unwrap();
/// assert_eq!(request.path_and_query(), "/products/search?q=blue%20hoodie&page=1");
///
/// let login = HttpRequest::builder(HttpMethod::Post, "/auth/login")
///     .body(json!({"username": "ada", "password": "secret"}))
///     .build()
///     .unwrap();
/// assert!(login.body.is_some());
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path (relative to the base URL), starting with `/`.
    pub path: String,
    /// The JSON request body, if any.
    pub body: Option<serde_json::Value>,
    /// Query parameters in insertion order.
    pub query: Vec<(String, String)>,
    /// Additional headers to include in the request.
    pub extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `path` is empty or does not start with `/`
    /// - `http_method` is `Get` and a body is present
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.path.is_empty() {
            return Err(InvalidHttpRequestError::EmptyPath);
        }

        if !self.path.starts_with('/') {
            return Err(InvalidHttpRequestError::RelativePath {
                path: self.path.clone(),
            });
        }

        if self.http_method == HttpMethod::Get && self.body.is_some() {
            return Err(InvalidHttpRequestError::BodyNotAllowed {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }

    /// Renders the path with its percent-encoded query string.
    #[must_use]
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }

        let query = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{query}", self.path)
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<serde_json::Value>,
    query: Vec<(String, String)>,
    extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            query: Vec::new(),
            extra_headers: None,
        }
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Appends all query parameters from an iterator.
    #[must_use]
    pub fn query<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.query
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Appends a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            query: self.query,
            extra_headers: self.extra_headers,
        };
        request.verify()?;
        Ok(request)
    }
}
