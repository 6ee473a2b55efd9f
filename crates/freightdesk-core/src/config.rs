//! Configuration module
//!
//! Client configuration loaded from the environment (with `.env` support).
//! The backend base URL is fixed per deployment; credentials live in a JSON
//! file playing the role browser local storage played in the original client.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

const DEFAULT_API_URL: &str = "http://localhost:3000";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 60;

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_http_timeout_secs() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECS
}

/// Client configuration, deserialized from environment variables
/// (FREIGHTDESK_API_URL, FREIGHTDESK_CREDENTIALS_PATH, FREIGHTDESK_HTTP_TIMEOUT_SECS).
#[derive(Clone, Debug, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_api_url")]
    pub freightdesk_api_url: String,
    pub freightdesk_credentials_path: Option<String>,
    #[serde(default = "default_http_timeout_secs")]
    pub freightdesk_http_timeout_secs: u64,
}

impl ClientConfig {
    /// Load configuration from the environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<ClientConfig>().context("Failed to load client configuration from env")
    }

    pub fn api_url(&self) -> &str {
        &self.freightdesk_api_url
    }

    pub fn http_timeout_secs(&self) -> u64 {
        self.freightdesk_http_timeout_secs
    }

    /// Path of the credentials file. Defaults to
    /// `$HOME/.config/freightdesk/credentials.json` when unset.
    pub fn credentials_path(&self) -> PathBuf {
        if let Some(path) = &self.freightdesk_credentials_path {
            return PathBuf::from(path);
        }
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home)
            .join(".config")
            .join("freightdesk")
            .join("credentials.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_path_override() {
        let config = ClientConfig {
            freightdesk_api_url: default_api_url(),
            freightdesk_credentials_path: Some("/tmp/creds.json".to_string()),
            freightdesk_http_timeout_secs: default_http_timeout_secs(),
        };
        assert_eq!(config.credentials_path(), PathBuf::from("/tmp/creds.json"));
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig {
            freightdesk_api_url: default_api_url(),
            freightdesk_credentials_path: None,
            freightdesk_http_timeout_secs: default_http_timeout_secs(),
        };
        assert_eq!(config.api_url(), "http://localhost:3000");
        assert_eq!(config.http_timeout_secs(), 60);
        assert!(config
            .credentials_path()
            .ends_with(".config/freightdesk/credentials.json"));
    }
}
