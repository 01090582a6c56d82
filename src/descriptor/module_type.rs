//! Module types and the slugs derived from them

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ModuleError, module};

/// Kind of module, deciding which generators apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModuleType {
    /// React Native and Django parts
    All,
    ReactNative,
    Django,
    /// No generated scaffolding
    Custom,
}

impl ModuleType {
    pub const ALL: [ModuleType; 4] = [
        ModuleType::All,
        ModuleType::ReactNative,
        ModuleType::Django,
        ModuleType::Custom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ModuleType::All => "all",
            ModuleType::ReactNative => "react-native",
            ModuleType::Django => "django",
            ModuleType::Custom => "custom",
        }
    }

    /// Directory name for a module called `name` of this type
    pub fn slug(self, name: &str) -> String {
        match self {
            ModuleType::All | ModuleType::Custom => name.to_string(),
            ModuleType::ReactNative => format!("react-native-{name}"),
            ModuleType::Django => format!("django-{name}"),
        }
    }

    /// Install root written into freshly created descriptors
    pub fn default_root(self, name: &str) -> String {
        match self {
            ModuleType::Django => format!("backend/modules/{name}"),
            ModuleType::All | ModuleType::ReactNative | ModuleType::Custom => {
                format!("modules/{name}")
            }
        }
    }
}

impl fmt::Display for ModuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModuleType {
    type Err = ModuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModuleType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| module::invalid_type(s))
    }
}
