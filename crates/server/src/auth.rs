//! Bearer-token resolution against the external identity service.
//!
//! The provider is injected through `AppState` so route handlers never touch
//! the auth backend directly and tests can substitute a fixed mapping.

use async_trait::async_trait;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;

pub const DEFAULT_IDENTITY_BASE_URL: &str = "https://identitytoolkit.googleapis.com";

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolve a bearer token to a stable user id; `None` means anonymous.
    async fn resolve(&self, token: &str) -> Option<String>;
}

pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Verifies ID tokens through the identity-toolkit `accounts:lookup` call.
pub struct IdentityToolkitProvider {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<LookupUser>,
}

#[derive(Deserialize)]
struct LookupUser {
    #[serde(rename = "localId")]
    local_id: String,
}

impl IdentityToolkitProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_IDENTITY_BASE_URL, api_key)
    }

    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl IdentityProvider for IdentityToolkitProvider {
    async fn resolve(&self, token: &str) -> Option<String> {
        let url = format!(
            "{}/v1/accounts:lookup?key={}",
            self.base_url, self.api_key
        );

        let response = self
            .client
            .post(url)
            .json(&json!({ "idToken": token }))
            .send()
            .await;

        let response = match response {
            Ok(response) if response.status().is_success() => response,
            Ok(response) => {
                tracing::debug!(status = %response.status(), "token lookup rejected");
                return None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "token lookup request failed");
                return None;
            }
        };

        let lookup: LookupResponse = response.json().await.ok()?;
        lookup.users.into_iter().next().map(|user| user.local_id)
    }
}

/// Never resolves a user; used when no identity backend is configured.
pub struct AnonymousIdentity;

#[async_trait]
impl IdentityProvider for AnonymousIdentity {
    async fn resolve(&self, _token: &str) -> Option<String> {
        None
    }
}

/// Fixed token-to-user mapping for tests and local development.
pub struct StaticIdentityProvider {
    users: HashMap<String, String>,
}

impl StaticIdentityProvider {
    pub fn new(users: HashMap<String, String>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    async fn resolve(&self, token: &str) -> Option<String> {
        self.users.get(token).cloned()
    }
}
