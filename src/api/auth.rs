//! Bearer-token storage.
//!
//! The admin token lives in a plain file under the app's config
//! directory, the desktop counterpart of the browser's local storage.
//! The token is read on every request batch so a rotated token is picked
//! up without restarting the app.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

/// Opaque bearer token. `Display` is intentionally not derived so the
/// token does not end up in log output by accident.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AuthToken(***)")
    }
}

/// Reads the bearer token from disk.
#[derive(Debug, Clone)]
pub struct TokenStore {
    token_path: PathBuf,
}

impl TokenStore {
    /// Store rooted at the XDG config directory.
    pub fn new() -> Result<Self> {
        let project_dirs = ProjectDirs::from("dev", "insight", "insight-chat")
            .context("Failed to get project directories")?;
        let token_path = project_dirs.config_dir().join("token");
        Ok(Self { token_path })
    }

    /// Store backed by an explicit file, used by tests.
    pub fn with_path(token_path: impl Into<PathBuf>) -> Self {
        Self {
            token_path: token_path.into(),
        }
    }

    pub fn token_path(&self) -> &PathBuf {
        &self.token_path
    }

    /// Read the token file. Surrounding whitespace is stripped; a missing
    /// or empty file is an error.
    pub fn load(&self) -> Result<AuthToken> {
        let raw = fs::read_to_string(&self.token_path).with_context(|| {
            format!("Failed to read token file: {}", self.token_path.display())
        })?;

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            anyhow::bail!("Token file is empty: {}", self.token_path.display());
        }

        Ok(AuthToken::new(trimmed))
    }

    /// Write the token, creating the config directory if needed.
    pub fn save(&self, token: &AuthToken) -> Result<()> {
        if let Some(parent) = self.token_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        fs::write(&self.token_path, token.as_str()).with_context(|| {
            format!("Failed to write token file: {}", self.token_path.display())
        })?;

        tracing::info!("💾 Auth token saved to: {}", self.token_path.display());
        Ok(())
    }
}
