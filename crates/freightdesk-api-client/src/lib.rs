//! Shared HTTP client for the Freightdesk backend.
//!
//! Provides a client with bearer-token auth backed by a [`TokenStore`],
//! generic GET/POST/PUT/PATCH/DELETE helpers, and domain methods (auth,
//! shipments, clearance requests, document uploads). On HTTP 401 the client
//! refreshes the token pair once and retries the request; a failed refresh
//! clears the store, after which the user must log in again. CLI and scripts
//! use this client directly.

pub mod api;
pub mod token_store;
pub mod upload;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use freightdesk_core::models::{StoredCredentials, TokenPair};
use freightdesk_core::{AppError, ClientConfig};

pub use api::{AuthSession, MessageResponse, SignupRequest, UpdateProfileRequest};
pub use token_store::{FileTokenStore, MemoryTokenStore, TokenStore};
pub use upload::{upload_documents, DocumentUploader};

// Re-export response models for convenience.
pub use freightdesk_core::models::{
    ClearanceRequestResponse, LocationPoint, ShipmentResponse, UserResponse,
};

const REFRESH_PATH: &str = "/auth/refresh";

/// HTTP client for the Freightdesk API.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    store: Arc<dyn TokenStore>,
}

impl ApiClient {
    pub fn new(base_url: String, store: Arc<dyn TokenStore>, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(ApiClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            store,
        })
    }

    /// Create a client from [`ClientConfig`], with a file-backed token store
    /// at the configured credentials path.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let store = Arc::new(FileTokenStore::new(config.credentials_path()));
        Self::new(
            config.api_url().to_string(),
            store,
            config.http_timeout_secs(),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn token_store(&self) -> &Arc<dyn TokenStore> {
        &self.store
    }

    fn access_token(&self) -> Result<Option<String>> {
        Ok(self.store.load()?.map(|c| c.tokens.access_token))
    }

    pub(crate) fn save_session(
        &self,
        tokens: TokenPair,
        user: Option<freightdesk_core::models::UserResponse>,
    ) -> Result<()> {
        self.store.save(&StoredCredentials { tokens, user })
    }

    async fn send_once(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
        token: Option<&str>,
    ) -> Result<reqwest::Response> {
        let url = self.build_url(path);
        let mut request = self.client.request(method, &url);
        if let Some(token) = token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        request.send().await.context("Failed to send request")
    }

    /// Send with the stored access token; on 401, refresh once and retry.
    async fn send_with_refresh(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<reqwest::Response> {
        let token = self.access_token()?;
        let response = self
            .send_once(method.clone(), path, query, body, token.as_deref())
            .await?;

        if response.status() == StatusCode::UNAUTHORIZED
            && token.is_some()
            && path != REFRESH_PATH
        {
            tracing::debug!(path, "access token rejected, refreshing");
            let pair = self.refresh_tokens().await?;
            let retried = self
                .send_once(method, path, query, body, Some(&pair.access_token))
                .await?;
            return check_status(retried).await;
        }

        check_status(response).await
    }

    /// Exchange the stored refresh token for a new pair. A rejected refresh
    /// clears the store so the next command asks the user to log in.
    async fn refresh_tokens(&self) -> Result<TokenPair> {
        let creds = self
            .store
            .load()?
            .context("Not logged in. Run `freightdesk login` first")?;

        let response = self
            .client
            .post(self.build_url(REFRESH_PATH))
            .json(&serde_json::json!({ "refreshToken": creds.tokens.refresh_token }))
            .send()
            .await
            .context("Failed to send refresh request")?;

        if !response.status().is_success() {
            self.store.clear()?;
            return Err(AppError::Unauthorized(
                "Session expired. Please log in again".to_string(),
            )
            .into());
        }

        let pair: TokenPair = response
            .json()
            .await
            .context("Failed to parse refresh response")?;
        self.store.save(&StoredCredentials {
            tokens: pair.clone(),
            user: creds.user,
        })?;
        Ok(pair)
    }

    async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<T> {
        let response = self.send_with_refresh(method, path, query, body).await?;
        response
            .json()
            .await
            .context("Failed to parse response as JSON")
    }

    /// GET request with optional query parameters. Deserializes JSON response.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        self.request_json(Method::GET, path, query, None).await
    }

    /// POST JSON body and deserialize response.
    pub async fn post_json<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let value = serde_json::to_value(body).context("Serialize request body")?;
        self.request_json(Method::POST, path, &[], Some(&value))
            .await
    }

    /// PUT JSON body and deserialize response.
    pub async fn put_json<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let value = serde_json::to_value(body).context("Serialize request body")?;
        self.request_json(Method::PUT, path, &[], Some(&value))
            .await
    }

    /// PATCH with an optional JSON body.
    pub async fn patch_json<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<T> {
        let value = body
            .map(serde_json::to_value)
            .transpose()
            .context("Serialize request body")?;
        self.request_json(Method::PATCH, path, &[], value.as_ref())
            .await
    }

    /// POST a multipart form. `make_form` is called again if the request is
    /// retried after a token refresh (forms are single-use).
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        make_form: impl Fn() -> Result<reqwest::multipart::Form>,
    ) -> Result<T> {
        let url = self.build_url(path);
        let token = self.access_token()?;

        let mut request = self.client.post(&url).multipart(make_form()?);
        if let Some(token) = &token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }
        let response = request.send().await.context("Failed to send request")?;

        let response = if response.status() == StatusCode::UNAUTHORIZED && token.is_some() {
            tracing::debug!(path, "access token rejected, refreshing");
            let pair = self.refresh_tokens().await?;
            self.client
                .post(&url)
                .multipart(make_form()?)
                .header("Authorization", format!("Bearer {}", pair.access_token))
                .send()
                .await
                .context("Failed to send request")?
        } else {
            response
        };

        let response = check_status(response).await?;
        response
            .json()
            .await
            .context("Failed to parse response as JSON")
    }

    /// DELETE request. Returns Ok(()) on success, body ignored.
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.send_with_refresh(Method::DELETE, path, &[], None)
            .await
            .map(|_| ())
    }
}

/// Surface non-2xx responses as [`AppError::Api`] carrying the backend's
/// `error`/`message` field (generic fallback otherwise).
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(AppError::Api {
        status: status.as_u16(),
        message: extract_error_message(&body),
    }
    .into())
}

fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .or_else(|| value.get("message"))
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| {
            if body.trim().is_empty() {
                "Unknown error".to_string()
            } else {
                body.to_string()
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_error_message_prefers_error_field() {
        assert_eq!(
            extract_error_message(r#"{"error":"Shipment not found"}"#),
            "Shipment not found"
        );
        assert_eq!(
            extract_error_message(r#"{"message":"Invalid token"}"#),
            "Invalid token"
        );
        assert_eq!(
            extract_error_message(r#"{"error":"first","message":"second"}"#),
            "first"
        );
    }

    #[test]
    fn test_extract_error_message_fallbacks() {
        assert_eq!(extract_error_message("plain text"), "plain text");
        assert_eq!(extract_error_message(""), "Unknown error");
        assert_eq!(extract_error_message(r#"{"code":500}"#), r#"{"code":500}"#);
    }

    #[test]
    fn test_base_url_trimmed() {
        let client = ApiClient::new(
            "http://localhost:3000/".to_string(),
            Arc::new(MemoryTokenStore::new()),
            60,
        )
        .unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(
            client.build_url("/shipments"),
            "http://localhost:3000/shipments"
        );
    }
}
