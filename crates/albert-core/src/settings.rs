// Rust guideline compliant 2026-10-17

//! Runtime settings for talking to the collections catalog.

use crate::{Error, Result};
use std::path::Path;
use std::time::Duration;

/// Env file consulted at startup when present.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const API_URL_VAR: &str = "API_URL";
const API_KEY_VAR: &str = "API_KEY";
const API_TIMEOUT_VAR: &str = "API_TIMEOUT_SECS";

/// Read-only settings shared by the catalog client for one run.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    /// Base URL of the catalog service, without trailing slash.
    pub api_url: String,

    /// Bearer credential sent with every request.
    pub api_key: String,

    /// Per-request timeout.
    pub timeout: Duration,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("api_url", &self.api_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Settings {
    /// Loads settings from an optional env file and the process environment.
    ///
    /// Settings are resolved in the following order:
    /// 1. Variables from `env_file`, when the file exists (already-set process
    ///    variables are not overridden)
    /// 2. The process environment (`API_URL`, `API_KEY`, `API_TIMEOUT_SECS`)
    ///
    /// # Arguments
    ///
    /// * `env_file` - Path to a dotenv-style file, usually `.env`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The env file exists but cannot be parsed
    /// - `API_URL` or `API_KEY` is missing
    /// - A value fails validation
    pub fn load(env_file: &Path) -> Result<Self> {
        if env_file.exists() {
            dotenvy::from_path(env_file).map_err(|e| Error::EnvFile {
                path: env_file.to_path_buf(),
                message: e.to_string(),
            })?;
            tracing::debug!(path = %env_file.display(), "Loaded env file");
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from a variable lookup function.
    ///
    /// Empty values are treated as missing.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a value is invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &'static str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_url = read(API_URL_VAR).ok_or(Error::MissingSetting(API_URL_VAR))?;
        let api_key = read(API_KEY_VAR).ok_or(Error::MissingSetting(API_KEY_VAR))?;

        let timeout_secs = match read(API_TIMEOUT_VAR) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| Error::InvalidSetting {
                key: API_TIMEOUT_VAR,
                message: format!("expected a whole number of seconds, got '{}'", raw),
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let settings = Self {
            api_url: api_url.trim().trim_end_matches('/').to_string(),
            api_key: api_key.trim().to_string(),
            timeout: Duration::from_secs(timeout_secs),
        };
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(Error::InvalidSetting {
                key: API_URL_VAR,
                message: format!("'{}' must start with http:// or https://", self.api_url),
            });
        }

        if self.timeout.is_zero() {
            return Err(Error::InvalidSetting {
                key: API_TIMEOUT_VAR,
                message: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    /// Returns the collections listing endpoint.
    #[must_use]
    pub fn collections_url(&self) -> String {
        format!("{}/collections", self.api_url)
    }
}
