//! Delivery backend identifiers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::InvalidBackendError;

/// All backends, in default fallback order
pub const ALL_BACKENDS: &[BackendKind] = &[BackendKind::NotifyRust, BackendKind::NotifySend];

/// Delivery backends that can appear in the fallback chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackendKind {
    /// Persistent desktop notification through the notification server
    NotifyRust,
    /// Transient notification through the `notify-send` executable
    NotifySend,
}

impl BackendKind {
    /// Get the string identifier for this backend
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotifyRust => "notify-rust",
            Self::NotifySend => "notify-send",
        }
    }

    /// Remove repeated entries, keeping the first occurrence of each
    pub fn dedup_order(order: &[BackendKind]) -> Vec<BackendKind> {
        let mut result = Vec::with_capacity(order.len());
        for kind in order {
            if !result.contains(kind) {
                result.push(*kind);
            }
        }
        result
    }
}

impl FromStr for BackendKind {
    type Err = InvalidBackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "notify-rust" => Ok(Self::NotifyRust),
            "notify-send" => Ok(Self::NotifySend),
            _ => Err(InvalidBackendError { input: s.to_string() }),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
