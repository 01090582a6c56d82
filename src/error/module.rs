//! Module descriptor and scaffolding errors

use super::ModuleError;

/// Creates a malformed descriptor error
pub fn malformed(path: impl Into<String>, detail: impl Into<String>) -> ModuleError {
    ModuleError::MalformedDescriptor {
        path: path.into(),
        detail: detail.into(),
    }
}

/// Creates a module already exists error
pub fn already_exists(slug: impl Into<String>) -> ModuleError {
    ModuleError::AlreadyExists { slug: slug.into() }
}

/// Creates an invalid module name error
pub fn invalid_name(name: impl Into<String>) -> ModuleError {
    ModuleError::InvalidModuleName { name: name.into() }
}

/// Creates an invalid module type error
pub fn invalid_type(module_type: impl Into<String>) -> ModuleError {
    ModuleError::InvalidModuleType {
        module_type: module_type.into(),
    }
}
