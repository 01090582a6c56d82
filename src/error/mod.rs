//! Error types and handling for cb
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`module`]: Module descriptor and scaffolding errors
//! - [`fs`]: File system errors
//! - [`config`]: Configuration file errors

pub mod config;
pub mod fs;
pub mod module;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for cb operations
#[derive(Error, Diagnostic, Debug)]
pub enum ModuleError {
    // Path errors
    #[error("Path not found: {path}")]
    #[diagnostic(
        code(cb::fs::not_found),
        help("Check that the path exists and is a directory")
    )]
    NotFound { path: String },

    // Module errors
    #[error("Malformed module descriptor at {path}: {detail}")]
    #[diagnostic(
        code(cb::module::malformed_descriptor),
        help("A meta.json needs at least the name, type and root fields")
    )]
    MalformedDescriptor { path: String, detail: String },

    #[error("Module named \"{slug}\" already exists")]
    #[diagnostic(code(cb::module::already_exists))]
    AlreadyExists { slug: String },

    #[error(
        "Invalid module name provided: '{name}'. Use only alphanumeric characters, dashes and underscores."
    )]
    #[diagnostic(code(cb::module::invalid_name))]
    InvalidModuleName { name: String },

    #[error("Invalid module type provided: {module_type}")]
    #[diagnostic(
        code(cb::module::invalid_type),
        help("Valid types: all, react-native, django, custom")
    )]
    InvalidModuleType { module_type: String },

    #[error("Validation failed with {errors} error(s)")]
    #[diagnostic(code(cb::module::validation_failed))]
    ValidationFailed { errors: usize },

    #[error("{failed} module(s) could not be processed")]
    #[diagnostic(code(cb::module::modules_failed))]
    ModulesFailed { failed: usize },

    // Argument errors
    #[error("Missing required argument: {argument}")]
    #[diagnostic(code(cb::cli::missing_argument))]
    MissingArgument { argument: String },

    // External tool errors
    #[error("Command failed: {command}: {reason}")]
    #[diagnostic(code(cb::tool::command_failed))]
    ExternalCommand { command: String, reason: String },

    #[error("{tool} is not available in your system")]
    #[diagnostic(
        code(cb::tool::missing),
        help(
            "Visit https://github.com/crowdbotics/modules#requirements-for-contributing for environment requirements"
        )
    )]
    MissingTool { tool: String },

    // Git errors
    #[error("This command must be executed inside a git repository")]
    #[diagnostic(
        code(cb::git::not_in_repo),
        help("Run 'cb init --name <name>' to create a modules repository")
    )]
    NotInGitRepository,

    #[error("Git operation failed: {message}")]
    #[diagnostic(code(cb::git::operation_failed))]
    Git { message: String },

    // Configuration errors
    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(cb::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Failed to write configuration file: {path}: {reason}")]
    #[diagnostic(code(cb::config::write_failed))]
    ConfigWriteFailed { path: String, reason: String },

    #[error("Unknown configuration key: {key}")]
    #[diagnostic(code(cb::config::unknown_key))]
    ConfigKeyNotFound { key: String },

    #[error("Could not determine configuration directory")]
    #[diagnostic(
        code(cb::config::no_dir),
        help("Set CB_CONFIG_DIR to choose where the configuration is stored")
    )]
    ConfigDirUnavailable,

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(cb::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(cb::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(cb::fs::io_error))]
    Io { message: String },
}

impl From<std::io::Error> for ModuleError {
    fn from(err: std::io::Error) -> Self {
        ModuleError::Io {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ModuleError {
    fn from(err: serde_json::Error) -> Self {
        ModuleError::MalformedDescriptor {
            path: "unknown".to_string(),
            detail: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for ModuleError {
    fn from(err: serde_yaml::Error) -> Self {
        ModuleError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<git2::Error> for ModuleError {
    fn from(err: git2::Error) -> Self {
        ModuleError::Git {
            message: err.message().to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ModuleError>;
