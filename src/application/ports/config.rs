//! Configuration port interface

use std::path::Path;

use async_trait::async_trait;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Port for the persisted configuration layer.
///
/// Implementations validate on both load and save, so a config that
/// passes through the store is always usable by the runner.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Location of the backing file
    fn path(&self) -> &Path;

    /// Load the stored config. A missing file yields an empty config.
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Replace the stored config
    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;

    /// Write the defaults, failing with `AlreadyExists` if a file is present
    async fn init(&self) -> Result<(), ConfigError>;
}
