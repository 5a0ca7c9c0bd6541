//! TOML config file under the user's config directory

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Environment variable that points the store at another file
pub const CONFIG_PATH_ENV: &str = "HOOK_NOTIFY_CONFIG";

const APP_DIR: &str = "hook-notify";
const FILE_NAME: &str = "config.toml";

/// Config store backed by `<config_dir>/hook-notify/config.toml`.
///
/// `HOOK_NOTIFY_CONFIG` replaces the whole path when set and non-empty.
pub struct XdgConfigStore {
    path: PathBuf,
}

impl XdgConfigStore {
    pub fn new() -> Self {
        let path = std::env::var_os(CONFIG_PATH_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(Self::default_path);
        Self { path }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join(APP_DIR)
            .join(FILE_NAME)
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }

    fn read_error(&self, err: impl ToString) -> ConfigError {
        ConfigError::Read {
            path: self.display_path(),
            message: err.to_string(),
        }
    }

    fn write_error(&self, err: impl ToString) -> ConfigError {
        ConfigError::Write {
            path: self.display_path(),
            message: err.to_string(),
        }
    }

    /// Parse and validate file content
    fn decode(&self, content: &str) -> Result<AppConfig, ConfigError> {
        let config: AppConfig = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: self.display_path(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    fn encode(&self, config: &AppConfig) -> Result<String, ConfigError> {
        toml::to_string_pretty(config).map_err(|e| self.write_error(e))
    }

    async fn ensure_parent(&self) -> Result<(), ConfigError> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
                .await
                .map_err(|e| self.write_error(e)),
            _ => Ok(()),
        }
    }

    /// Sibling file the new content is staged in before the rename
    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Default for XdgConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigStore for XdgConfigStore {
    fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<AppConfig, ConfigError> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => self.decode(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(AppConfig::empty()),
            Err(e) => Err(self.read_error(e)),
        }
    }

    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        config.validate()?;
        let content = self.encode(config)?;
        self.ensure_parent().await?;

        // A crash mid-write leaves the old file intact
        let staging = self.staging_path();
        fs::write(&staging, content)
            .await
            .map_err(|e| self.write_error(e))?;
        if let Err(e) = fs::rename(&staging, &self.path).await {
            let _ = fs::remove_file(&staging).await;
            return Err(self.write_error(e));
        }
        Ok(())
    }

    async fn init(&self) -> Result<(), ConfigError> {
        let content = self.encode(&AppConfig::defaults())?;
        self.ensure_parent().await?;

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => ConfigError::AlreadyExists(self.display_path()),
                _ => self.write_error(e),
            })?;
        file.write_all(content.as_bytes())
            .await
            .map_err(|e| self.write_error(e))?;
        file.flush().await.map_err(|e| self.write_error(e))
    }
}
