//! Auth resource client.
//!
//! [`AuthApi`] drives the session lifecycle: [`login`](AuthApi::login) and
//! [`refresh`](AuthApi::refresh) write the shared
//! [`TokenStore`](crate::auth::TokenStore), and [`logout`](AuthApi::logout)
//! clears it.
//!
//! # Example
//!
//! ```rust,ignore
//! let client = StorefrontClient::new(&StorefrontConfig::from_env()?)?;
//!
//! let auth = client.auth().login("ada", "secret").await?;
//! println!("Welcome, {}", auth.user.preferred_name());
//!
//! match client.auth().me().await {
//!     Err(e) if e.is_unauthorized() => {
//!         client.auth().refresh().await?;
//!     }
//!     other => { other?; }
//! }
//!
//! client.auth().logout().await?;
//! ```

use serde_json::json;

use crate::clients::{ApiError, Envelope, HttpClient, HttpMethod, HttpRequest};
use crate::types::{AuthResponse, User};

/// Auth endpoints: `/auth/login`, `/auth/refresh`, `/auth/logout`, `/auth/me`.
#[derive(Clone, Copy, Debug)]
pub struct AuthApi<'a> {
    client: &'a HttpClient,
}

impl<'a> AuthApi<'a> {
    /// Creates the auth namespace over an HTTP client.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Logs in with a username and password.
    ///
    /// On success the returned tokens replace any stored session.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the credentials are rejected, the request
    /// fails, or the new session cannot be persisted.
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Post, "/auth/login")
            .body(json!({ "username": username, "password": password }))
            .build()?;

        let auth = self
            .client
            .request::<AuthResponse>(request)
            .await?
            .into_data()?;

        self.store(&auth)?;
        tracing::info!("Logged in as user {}", auth.user.id);
        Ok(auth)
    }

    /// Exchanges the stored refresh token for a new token pair.
    ///
    /// Fails locally with [`ApiError::MissingRefreshToken`], without any
    /// network call, when no refresh token is held. If the server rejects
    /// the refresh token the local session is cleared, unless a login or
    /// another refresh replaced it while the request was in flight. A
    /// transport failure leaves it in place.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if no refresh token is held, the refresh is
    /// rejected, the request fails, or the new session cannot be persisted.
    pub async fn refresh(&self) -> Result<AuthResponse, ApiError> {
        let refresh_token = self
            .client
            .tokens()
            .refresh_token()
            .ok_or(ApiError::MissingRefreshToken)?;

        let request = HttpRequest::builder(HttpMethod::Post, "/auth/refresh")
            .body(json!({ "refresh_token": refresh_token.as_str() }))
            .build()?;

        let result = self
            .client
            .request::<AuthResponse>(request)
            .await
            .and_then(Envelope::into_data);

        match result {
            Ok(auth) => {
                self.store(&auth)?;
                tracing::info!("Refreshed session for user {}", auth.user.id);
                Ok(auth)
            }
            Err(e @ (ApiError::Response { .. } | ApiError::Envelope { .. })) => {
                match self.client.tokens().clear_if_refresh_token(&refresh_token) {
                    Ok(true) => tracing::info!("Refresh rejected, cleared session: {}", e),
                    Ok(false) => tracing::info!("Refresh rejected for a replaced session: {}", e),
                    Err(storage_error) => {
                        tracing::warn!("Failed to clear token storage: {}", storage_error);
                    }
                }
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    /// Notifies the server of logout and clears the local session.
    ///
    /// Local tokens are cleared whatever the outcome of the network call.
    /// The network result is returned after the clear; a storage failure
    /// during the clear is logged rather than returned.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the logout notification fails.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let outcome = async {
            let request = HttpRequest::builder(HttpMethod::Post, "/auth/logout").build()?;
            self.client.request::<serde_json::Value>(request).await?;
            Ok::<(), ApiError>(())
        }
        .await;

        if let Err(e) = self.client.tokens().clear() {
            tracing::warn!("Failed to clear token storage on logout: {}", e);
        }

        match &outcome {
            Ok(()) => tracing::info!("Logged out"),
            Err(e) => tracing::info!("Logged out locally; server notification failed: {}", e),
        }
        outcome
    }

    /// Fetches the currently authenticated user.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or is unauthenticated.
    pub async fn me(&self) -> Result<User, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Get, "/auth/me").build()?;
        self.client.request::<User>(request).await?.into_data()
    }

    /// Returns `true` if an access token is held.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.client.tokens().is_authenticated()
    }

    fn store(&self, auth: &AuthResponse) -> Result<(), ApiError> {
        self.client.tokens().set_with_lifetime(
            auth.access_token.as_str(),
            auth.refresh_token.as_str(),
            auth.expires_in,
        )?;
        Ok(())
    }
}
