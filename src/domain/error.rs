//! Domain error types

use thiserror::Error;

/// Error when a hook payload cannot be decoded
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("Payload is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Error when an unknown backend name is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid backend: \"{input}\". Valid backends are: notify-rust, notify-send")]
pub struct InvalidBackendError {
    pub input: String,
}

/// Error when configuration fails.
/// File errors carry the path so the user knows which file to fix.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {message}")]
    Read { path: String, message: String },

    #[error("Failed to parse config file {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Failed to write config file {path}: {message}")]
    Write { path: String, message: String },

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
