//! Token persistence between CLI invocations.
//!
//! Lookup order: `DELPRESENCE_TOKEN` environment variable, then the token
//! file (`DELPRESENCE_TOKEN_FILE`, default `~/.delpresence/token`).

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AuthError;
use crate::token::decode_unverified;

pub const TOKEN_ENV: &str = "DELPRESENCE_TOKEN";
pub const TOKEN_FILE_ENV: &str = "DELPRESENCE_TOKEN_FILE";
const DEFAULT_DIR: &str = ".delpresence";
const DEFAULT_FILE: &str = "token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStore {
    path: PathBuf,
    env_token: Option<String>,
}

impl TokenStore {
    /// A store backed only by the file at `path`.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            env_token: None,
        }
    }

    pub fn from_env() -> Result<Self, AuthError> {
        let env_token = std::env::var(TOKEN_ENV)
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        let path = match std::env::var(TOKEN_FILE_ENV) {
            Ok(path) if !path.trim().is_empty() => PathBuf::from(path.trim()),
            _ => dirs::home_dir()
                .ok_or_else(|| AuthError::TokenStore("cannot determine home directory".into()))?
                .join(DEFAULT_DIR)
                .join(DEFAULT_FILE),
        };

        Ok(Self { path, env_token })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the token, preferring the environment over the file.
    #[must_use]
    pub fn load(&self) -> Option<String> {
        if let Some(token) = &self.env_token {
            return Some(token.clone());
        }

        match fs::read_to_string(&self.path) {
            Ok(contents) => Some(contents.trim().to_string()).filter(|t| !t.is_empty()),
            Err(error) => {
                tracing::debug!(%error, path = %self.path.display(), "no stored token");
                None
            }
        }
    }

    /// Loads the token or fails with [`AuthError::NotAuthenticated`].
    pub fn require(&self) -> Result<String, AuthError> {
        self.load().ok_or(AuthError::NotAuthenticated)
    }

    /// Writes `token` to the token file after checking it decodes as a JWT.
    pub fn store(&self, token: &str) -> Result<(), AuthError> {
        let token = token.trim();
        decode_unverified(token)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AuthError::TokenStore(format!("failed to create {}: {e}", parent.display()))
            })?;
        }
        fs::write(&self.path, token).map_err(|e| {
            AuthError::TokenStore(format!("failed to write {}: {e}", self.path.display()))
        })?;
        restrict_permissions(&self.path)?;

        tracing::info!(path = %self.path.display(), "token stored");
        Ok(())
    }

    /// Removes the token file. Missing files are not an error.
    pub fn delete(&self) -> Result<(), AuthError> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| {
                AuthError::TokenStore(format!("failed to delete {}: {e}", self.path.display()))
            })?;
        }
        Ok(())
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<(), AuthError> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(|e| {
        AuthError::TokenStore(format!("failed to set permissions on {}: {e}", path.display()))
    })
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<(), AuthError> {
    Ok(())
}
