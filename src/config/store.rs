//! Load/save boundary for the CLI configuration

use std::fs;
use std::path::{Path, PathBuf};

use super::Config;
use crate::error::{ModuleError, Result, config as config_error};

/// Directory name under the user's config directory
const CONFIG_DIR: &str = "cb";

/// Configuration file name
pub const CONFIG_FILE: &str = "config.yaml";

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "CB_CONFIG_DIR";

/// Somewhere a [`Config`] can be loaded from and saved to
pub trait ConfigStore {
    fn load(&self) -> Result<Config>;
    fn save(&self, config: &Config) -> Result<()>;
}

/// Configuration stored as YAML on disk
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform config location (e.g. `~/.config/cb/config.yaml`)
    ///
    /// `CB_CONFIG_DIR` overrides the directory.
    pub fn default_location() -> Result<Self> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(Self::new(PathBuf::from(dir).join(CONFIG_FILE)));
        }
        let base = dirs::config_dir().ok_or(ModuleError::ConfigDirUnavailable)?;
        Ok(Self::new(base.join(CONFIG_DIR).join(CONFIG_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Result<Config> {
        if !self.path.is_file() {
            tracing::debug!(path = %self.path.display(), "no configuration file, using defaults");
            return Ok(Config::default());
        }
        let content = fs::read_to_string(&self.path)
            .map_err(|e| config_error::parse_failed(&self.path, e))?;
        Config::from_yaml(&content).map_err(|e| config_error::parse_failed(&self.path, e))
    }

    fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| config_error::write_failed(&self.path, e))?;
        }
        let yaml = config.to_yaml()?;
        fs::write(&self.path, yaml).map_err(|e| config_error::write_failed(&self.path, e))?;
        tracing::debug!(path = %self.path.display(), "configuration saved");
        Ok(())
    }
}

/// In-memory store for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    saved: std::cell::RefCell<Option<Config>>,
}

#[cfg(test)]
impl MemoryConfigStore {
    pub fn saved(&self) -> Option<Config> {
        self.saved.borrow().clone()
    }
}

#[cfg(test)]
impl ConfigStore for MemoryConfigStore {
    fn load(&self) -> Result<Config> {
        Ok(self.saved.borrow().clone().unwrap_or_default())
    }

    fn save(&self, config: &Config) -> Result<()> {
        *self.saved.borrow_mut() = Some(config.clone());
        Ok(())
    }
}
