//! Configuration value objects

mod app_config;
mod backend;

pub use app_config::{AppConfig, DEFAULT_APP_NAME};
pub use backend::{BackendKind, ALL_BACKENDS};
