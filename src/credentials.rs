//! Credential loading
//!
//! Reads the Moltbook API key from its well-known file locations.

use std::path::{Path, PathBuf};

use crate::error::CredentialError;

/// Bearer token for the Moltbook API
///
/// Loaded once at process start and passed by value into the API client.
/// There is no write path; the token is provisioned out-of-band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials(String);

impl Credentials {
    /// Wrap an already-known token (used by tests to inject fakes)
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Load the API key from an explicit path, or search the defaults
    ///
    /// With an explicit path the default search is skipped entirely, so a
    /// missing override surfaces as an unreadable file rather than falling
    /// back to another token.
    pub fn load(override_path: Option<&Path>) -> Result<Self, CredentialError> {
        if let Some(path) = override_path {
            return Self::read_file(path);
        }

        let searched = Self::default_paths();
        for path in &searched {
            if path.exists() {
                return Self::read_file(path);
            }
        }

        Err(CredentialError::NotFound { searched })
    }

    /// Candidate credential file locations, first match wins
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // User config
        if let Some(config) = dirs::config_dir() {
            paths.push(config.join("moltbook").join("credentials"));
        }

        // Current directory
        paths.push(PathBuf::from(".credentials"));

        paths
    }

    /// The raw bearer token
    pub fn token(&self) -> &str {
        &self.0
    }

    fn read_file(path: &Path) -> Result<Self, CredentialError> {
        let contents =
            std::fs::read_to_string(path).map_err(|source| CredentialError::Unreadable {
                path: path.to_path_buf(),
                source,
            })?;

        let token = contents.trim();
        if token.is_empty() {
            return Err(CredentialError::Empty {
                path: path.to_path_buf(),
            });
        }

        log::debug!("Loaded API key from {}", path.display());
        Ok(Self(token.to_string()))
    }
}
