//! Persistent token storage.
//!
//! The original client kept two tokens and a cached user object in browser
//! local storage; here that is a JSON file on disk (CLI) or an in-memory
//! store (tests). Stores are synchronous: the payload is two strings and a
//! small user record.

use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use freightdesk_core::models::StoredCredentials;

pub trait TokenStore: Send + Sync {
    fn load(&self) -> Result<Option<StoredCredentials>>;
    fn save(&self, creds: &StoredCredentials) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// File-backed store at a fixed path (default:
/// `$HOME/.config/freightdesk/credentials.json`).
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: PathBuf) -> Self {
        FileTokenStore { path }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<StoredCredentials>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read credentials file: {}", self.path.display()))?;
        let creds = serde_json::from_str(&raw)
            .with_context(|| format!("Malformed credentials file: {}", self.path.display()))?;
        Ok(Some(creds))
    }

    fn save(&self, creds: &StoredCredentials) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create credentials dir: {}", parent.display())
            })?;
        }
        let raw = serde_json::to_string_pretty(creds).context("Serialize credentials")?;
        std::fs::write(&self.path, raw)
            .with_context(|| format!("Failed to write credentials file: {}", self.path.display()))
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path).with_context(|| {
                format!("Failed to remove credentials file: {}", self.path.display())
            })?;
        }
        Ok(())
    }
}

/// In-memory store for tests and one-shot scripted use.
#[derive(Default)]
pub struct MemoryTokenStore {
    inner: Mutex<Option<StoredCredentials>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credentials(creds: StoredCredentials) -> Self {
        MemoryTokenStore {
            inner: Mutex::new(Some(creds)),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<StoredCredentials>> {
        Ok(self.inner.lock().expect("token store poisoned").clone())
    }

    fn save(&self, creds: &StoredCredentials) -> Result<()> {
        *self.inner.lock().expect("token store poisoned") = Some(creds.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.inner.lock().expect("token store poisoned") = None;
        Ok(())
    }
}
