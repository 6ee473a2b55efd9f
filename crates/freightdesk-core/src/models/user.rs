//! User and auth token models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub email_verified: bool,
    pub created_at: DateTime<Utc>,
}

/// Access/refresh token pair as issued by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// What the client keeps between sessions: the token pair plus a cached copy
/// of the signed-in user (the analog of the original's browser local storage).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredCredentials {
    pub tokens: TokenPair,
    #[serde(default)]
    pub user: Option<UserResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_pair_camel_case() {
        let json = r#"{"accessToken":"a","refreshToken":"r"}"#;
        let pair: TokenPair = serde_json::from_str(json).unwrap();
        assert_eq!(pair.access_token, "a");
        assert_eq!(pair.refresh_token, "r");
    }

    #[test]
    fn test_stored_credentials_roundtrip_without_user() {
        let creds = StoredCredentials {
            tokens: TokenPair {
                access_token: "a".to_string(),
                refresh_token: "r".to_string(),
            },
            user: None,
        };
        let json = serde_json::to_string(&creds).unwrap();
        let back: StoredCredentials = serde_json::from_str(&json).unwrap();
        assert!(back.user.is_none());
        assert_eq!(back.tokens.refresh_token, "r");
    }
}
