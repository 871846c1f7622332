// Rust guideline compliant 2026-10-17

//! Error types for the Albert core library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Albert operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of errors, stable across message changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The catalog could not be reached or answered with a non-2xx status.
    Transport,
    /// The catalog answered with a body that is not the expected JSON.
    Parse,
    /// The local collections configuration is missing or malformed.
    ConfigLoad,
    /// Runtime settings are missing or invalid.
    Settings,
    /// Writing the output artifact failed.
    Io,
}

/// Error types for Albert operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration file could not be read.
    #[error("Cannot read configuration {path}: {source}")]
    ConfigRead {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON.
    #[error("Invalid JSON in configuration {path}: {source}")]
    ConfigParse {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying JSON failure.
        #[source]
        source: serde_json::Error,
    },

    /// The configuration parsed but has the wrong shape.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A required setting is absent from the environment.
    #[error("Missing setting: {0} is not set")]
    MissingSetting(&'static str),

    /// A setting is present but unusable.
    #[error("Invalid setting {key}: {message}")]
    InvalidSetting {
        /// Environment variable name.
        key: &'static str,
        /// What is wrong with the value.
        message: String,
    },

    /// The env file exists but could not be loaded.
    #[error("Cannot load env file {path}: {message}")]
    EnvFile {
        /// Path of the env file.
        path: PathBuf,
        /// Loader message.
        message: String,
    },

    /// Network-level failure talking to the catalog.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The catalog answered with a non-success status.
    #[error("Catalog returned HTTP {status} for {url}")]
    HttpStatus {
        /// Response status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// The catalog body is not valid JSON of the expected shape.
    #[error("Invalid catalog response: {0}")]
    CatalogParse(#[source] serde_json::Error),

    /// IO error occurred while writing the artifact.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the classification for this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ConfigRead { .. } | Error::ConfigParse { .. } | Error::InvalidConfig(_) => {
                ErrorKind::ConfigLoad
            }
            Error::MissingSetting(_) | Error::InvalidSetting { .. } | Error::EnvFile { .. } => {
                ErrorKind::Settings
            }
            Error::Transport(_) | Error::HttpStatus { .. } => ErrorKind::Transport,
            Error::CatalogParse(_) => ErrorKind::Parse,
            Error::Io(_) | Error::Json(_) => ErrorKind::Io,
        }
    }

    /// Returns true for failures that happened while talking to the catalog.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(self.kind(), ErrorKind::Transport | ErrorKind::Parse)
    }
}
