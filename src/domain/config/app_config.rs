//! Application configuration value object

use serde::{Deserialize, Serialize};

use super::backend::{BackendKind, ALL_BACKENDS};
use crate::domain::error::ConfigError;
use crate::domain::notification::TOOL_NAME;

/// Application identity used when none is configured
pub const DEFAULT_APP_NAME: &str = TOOL_NAME;

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub log_path: Option<String>,
    pub app_name: Option<String>,
    pub backends: Option<Vec<BackendKind>>,
}

impl AppConfig {
    /// Create config with default values.
    /// There is no default log path: the diagnostic log is off unless set.
    pub fn defaults() -> Self {
        Self {
            log_path: None,
            app_name: Some(DEFAULT_APP_NAME.to_string()),
            backends: Some(ALL_BACKENDS.to_vec()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            log_path: other.log_path.or(self.log_path),
            app_name: other.app_name.or(self.app_name),
            backends: other.backends.or(self.backends),
        }
    }

    /// Check values that parse but cannot be used.
    ///
    /// An explicit empty backend list would make every run fail, and an
    /// empty app name would hide the notification's origin.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if matches!(self.backends.as_deref(), Some([])) {
            return Err(ConfigError::ValidationError {
                key: "backends".to_string(),
                message: "At least one backend is required".to_string(),
            });
        }
        if matches!(self.app_name.as_deref(), Some(name) if name.trim().is_empty()) {
            return Err(ConfigError::ValidationError {
                key: "app_name".to_string(),
                message: "Value must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Get the log path, treating an empty string as unset
    pub fn log_path_or_none(&self) -> Option<&str> {
        self.log_path.as_deref().filter(|p| !p.is_empty())
    }

    /// Get the application identity, or the default if not set
    pub fn app_name_or_default(&self) -> &str {
        self.app_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_APP_NAME)
    }

    /// Get the backend fallback order without duplicates, or the default order
    pub fn backends_or_default(&self) -> Vec<BackendKind> {
        match self.backends.as_deref() {
            Some(order) => BackendKind::dedup_order(order),
            None => ALL_BACKENDS.to_vec(),
        }
    }
}
