//! CLI configuration (config.yaml)
//!
//! The configuration is loaded once per invocation through a [`ConfigStore`]
//! and handed around inside [`crate::context::Context`]; nothing reads it
//! from global state.

mod store;

pub use store::{ConfigStore, FileConfigStore};
#[cfg(test)]
pub use store::MemoryConfigStore;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{Result, config as config_error};

pub const OPTED_IN_KEY: &str = "opted-in";
pub const HAS_ASKED_OPT_IN_KEY: &str = "has-asked-opt-in";
pub const HOST_KEY: &str = "host";
pub const ENVIRONMENT_VERSIONS_KEY: &str = "environment-versions";

/// Persisted CLI settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Usage analytics opt-in flag
    #[serde(default)]
    pub opted_in: bool,

    /// Whether the first-run opt-in notice was already shown
    #[serde(default)]
    pub has_asked_opt_in: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Cached versions of external tools, keyed by tool name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub environment_versions: BTreeMap<String, String>,

    /// Free-form keys set through `cb config set`
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(config_error::parse_failed(
            key,
            format!("expected true or false, got '{value}'"),
        )),
    }
}

impl Config {
    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Serialize configuration to a YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Look up a key as displayed by `cb config get`
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            OPTED_IN_KEY => Some(self.opted_in.to_string()),
            HAS_ASKED_OPT_IN_KEY => Some(self.has_asked_opt_in.to_string()),
            HOST_KEY => self.host.clone(),
            ENVIRONMENT_VERSIONS_KEY => {
                if self.environment_versions.is_empty() {
                    return None;
                }
                let lines: Vec<String> = self
                    .environment_versions
                    .iter()
                    .map(|(tool, version)| format!("{tool}: {version}"))
                    .collect();
                Some(lines.join("\n"))
            }
            _ => self.extra.get(key).cloned(),
        }
    }

    /// Set a key from its string form
    ///
    /// # Errors
    ///
    /// Fails for non-boolean values of boolean keys and for the read-only
    /// `environment-versions` cache.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            OPTED_IN_KEY => self.opted_in = parse_bool(key, value)?,
            HAS_ASKED_OPT_IN_KEY => self.has_asked_opt_in = parse_bool(key, value)?,
            HOST_KEY => self.host = Some(value.to_string()),
            ENVIRONMENT_VERSIONS_KEY => {
                return Err(config_error::parse_failed(
                    key,
                    "environment versions are detected automatically",
                ));
            }
            _ => {
                self.extra.insert(key.to_string(), value.to_string());
            }
        }
        Ok(())
    }
}
