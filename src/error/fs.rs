//! File system errors

use std::path::Path;

use super::ModuleError;

/// Creates a path not found error
pub fn not_found(path: impl AsRef<Path>) -> ModuleError {
    ModuleError::NotFound {
        path: path.as_ref().display().to_string(),
    }
}

/// Creates a file read failed error
pub fn read_failed(path: impl AsRef<Path>, reason: impl ToString) -> ModuleError {
    ModuleError::FileReadFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl AsRef<Path>, reason: impl ToString) -> ModuleError {
    ModuleError::FileWriteFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}
