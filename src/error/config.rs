//! Configuration errors

use std::path::Path;

use super::ModuleError;

/// Creates a config parse failed error
pub fn parse_failed(path: impl AsRef<Path>, reason: impl ToString) -> ModuleError {
    ModuleError::ConfigParseFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a config write failed error
pub fn write_failed(path: impl AsRef<Path>, reason: impl ToString) -> ModuleError {
    ModuleError::ConfigWriteFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates an unknown config key error
pub fn unknown_key(key: impl Into<String>) -> ModuleError {
    ModuleError::ConfigKeyNotFound { key: key.into() }
}
