//! HTTP client for storefront API communication.
//!
//! This module provides the [`HttpClient`] type, the authenticated request
//! wrapper every resource client goes through.

use std::collections::HashMap;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::auth::TokenStore;
use crate::clients::envelope::{failure_from_body, Envelope};
use crate::clients::errors::ApiError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::config::{ApiBaseUrl, StorefrontConfig};

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the storefront API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers including User-Agent and JSON content negotiation
/// - Bearer authentication from the shared [`TokenStore`]
/// - Envelope parsing and failure extraction
///
/// There is no retry, no timeout beyond the transport's defaults, and no
/// automatic token refresh: a 401 surfaces as an ordinary
/// [`ApiError::Response`].
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use storefront_api::{ApiBaseUrl, StorefrontConfig, TokenStore};
/// use storefront_api::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let config = StorefrontConfig::builder()
///     .base_url(ApiBaseUrl::new("https://shop.example.com/api").unwrap())
///     .build()
///     .unwrap();
/// let client = HttpClient::new(&config, Arc::new(TokenStore::in_memory()))?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/products/42").build()?;
/// let envelope = client.request::<serde_json::Value>(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL every path is appended to.
    base_url: ApiBaseUrl,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Session tokens shared with the auth resource client.
    tokens: Arc<TokenStore>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &StorefrontConfig, tokens: Arc<TokenStore>) -> Result<Self, ApiError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Storefront API Library v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            base_url: config.base_url().clone(),
            default_headers,
            tokens,
        })
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &ApiBaseUrl {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the token store consulted for bearer authentication.
    #[must_use]
    pub const fn tokens(&self) -> &Arc<TokenStore> {
        &self.tokens
    }

    /// Returns the full URL a request will be sent to.
    #[must_use]
    pub fn url_for(&self, request: &HttpRequest) -> String {
        self.base_url.join(&request.path_and_query())
    }

    /// Computes the headers that will be sent with `request`.
    ///
    /// The `Authorization` header is present only when the token store
    /// holds an access token at the time of the call.
    #[must_use]
    pub fn request_headers(&self, request: &HttpRequest) -> HashMap<String, String> {
        let mut headers = self.default_headers.clone();
        if let Some(token) = self.tokens.access_token() {
            headers.insert("Authorization".to_string(), format!("Bearer {token}"));
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }
        headers
    }

    /// Sends a request and parses the response envelope.
    ///
    /// The body is parsed as JSON regardless of status. On a 2xx status the
    /// envelope is returned unmodified, even if it reports `success: false`;
    /// use [`Envelope::into_data`] to apply that check.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The request cannot be completed (`Network`)
    /// - A non-2xx status is received (`Response`), carrying the first
    ///   envelope error's message or `"API request failed"`
    /// - A 2xx body is not a valid envelope for `T` (`Decode`)
    pub async fn request<T>(&self, request: HttpRequest) -> Result<Envelope<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        request.verify()?;

        let url = self.url_for(&request);
        let headers = self.request_headers(&request);

        let method = match request.http_method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut req_builder = self.client.request(method, &url);
        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        tracing::debug!("{} {}", request.http_method, request.path);
        let res = req_builder.send().await?;

        let status = res.status();
        let code = status.as_u16();
        let body_text = res.text().await?;
        tracing::debug!("{} {} -> {}", request.http_method, request.path, code);

        let body: serde_json::Value = if body_text.trim().is_empty() {
            serde_json::json!({})
        } else {
            match serde_json::from_str(&body_text) {
                Ok(value) => value,
                Err(e) if status.is_success() => return Err(ApiError::Decode(e)),
                Err(_) => serde_json::json!({}),
            }
        };

        if !status.is_success() {
            return Err(failure_from_body(code, &body));
        }

        Ok(serde_json::from_value(body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config(prefix: Option<&str>) -> StorefrontConfig {
        let builder = StorefrontConfig::builder()
            .base_url(ApiBaseUrl::new("https://shop.example.com/api/").unwrap());
        match prefix {
            Some(prefix) => builder.user_agent_prefix(prefix),
            None => builder,
        }
        .build()
        .unwrap()
    }

    fn create_test_client() -> HttpClient {
        HttpClient::new(&create_test_config(None), Arc::new(TokenStore::in_memory())).unwrap()
    }

    fn get(path: &str) -> HttpRequest {
        HttpRequest::builder(HttpMethod::Get, path).build().unwrap()
    }

    #[test]
    fn test_client_construction() {
        let client = create_test_client();
        assert_eq!(client.base_url().as_ref(), "https://shop.example.com/api");
    }

    #[test]
    fn test_url_for_joins_base_path_and_query() {
        let client = create_test_client();
        let request = HttpRequest::builder(HttpMethod::Get, "/products/7/related")
            .query_param("limit", "4")
            .build()
            .unwrap();

        assert_eq!(
            client.url_for(&request),
            "https://shop.example.com/api/products/7/related?limit=4"
        );
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = create_test_client();
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("Storefront API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let client = HttpClient::new(
            &create_test_config(Some("MyShop/1.0")),
            Arc::new(TokenStore::in_memory()),
        )
        .unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyShop/1.0 | "));
    }

    #[test]
    fn test_json_headers_always_present() {
        let client = create_test_client();
        let headers = client.request_headers(&get("/products"));
        assert_eq!(headers.get("Content-Type"), Some(&"application/json".to_string()));
        assert_eq!(headers.get("Accept"), Some(&"application/json".to_string()));
    }

    #[test]
    fn test_bearer_header_injected_when_token_present() {
        let client = create_test_client();
        client.tokens().set("access-123", "refresh-456").unwrap();

        let headers = client.request_headers(&get("/auth/me"));
        assert_eq!(
            headers.get("Authorization"),
            Some(&"Bearer access-123".to_string())
        );
    }

    #[test]
    fn test_no_authorization_header_without_token() {
        let client = create_test_client();
        let headers = client.request_headers(&get("/products"));
        assert!(headers.get("Authorization").is_none());

        client.tokens().set("access", "refresh").unwrap();
        client.tokens().clear().unwrap();
        let headers = client.request_headers(&get("/products"));
        assert!(headers.get("Authorization").is_none());
    }

    #[test]
    fn test_extra_headers_override_defaults() {
        let client = create_test_client();
        let request = HttpRequest::builder(HttpMethod::Get, "/products")
            .header("Accept", "application/vnd.storefront+json")
            .build()
            .unwrap();

        let headers = client.request_headers(&request);
        assert_eq!(
            headers.get("Accept"),
            Some(&"application/vnd.storefront+json".to_string())
        );
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
