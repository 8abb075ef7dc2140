//! Account records returned by the auth endpoints.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A storefront customer account.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct User {
    /// Upstream user id.
    pub id: u64,
    /// Email address.
    #[serde(default)]
    pub email: String,
    /// Login name.
    #[serde(default)]
    pub username: String,
    /// Public display name.
    #[serde(default)]
    pub display_name: String,
    /// Given name.
    #[serde(default)]
    pub first_name: String,
    /// Family name.
    #[serde(default)]
    pub last_name: String,
    /// Avatar image URL.
    #[serde(default)]
    pub avatar_url: String,
    /// Role names assigned to the account.
    #[serde(default)]
    pub roles: Vec<String>,
}

impl User {
    /// Returns the best available name for display.
    ///
    /// Prefers `display_name`, then "first last", then `username`.
    #[must_use]
    pub fn preferred_name(&self) -> String {
        if !self.display_name.is_empty() {
            return self.display_name.clone();
        }
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }

    /// Returns `true` if the account has the given role.
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

/// Payload of a successful login or refresh.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    /// New access token.
    pub access_token: String,
    /// New refresh token.
    pub refresh_token: String,
    /// Token type, normally "Bearer".
    #[serde(default)]
    pub token_type: String,
    /// Access token lifetime in seconds.
    #[serde(default)]
    pub expires_in: i64,
    /// The authenticated account.
    pub user: User,
}

impl fmt::Debug for AuthResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthResponse")
            .field("access_token", &"*****")
            .field("refresh_token", &"*****")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("user", &self.user)
            .finish()
    }
}
