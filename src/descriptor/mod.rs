//! Module descriptor (meta.json) data structures
//!
//! A descriptor is the JSON metadata file at the top of every module
//! directory. Only `name`, `type` and `root` are required; unknown keys are
//! kept in [`ModuleDescriptor::extra`] so they survive a snapshot round-trip.

mod module_type;

pub use module_type::ModuleType;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, module};

/// File name of the descriptor inside a module directory
pub const DESCRIPTOR_FILE: &str = "meta.json";

/// Name scope used by packages that refer to sibling modules
pub const SIBLING_SCOPE: &str = "@modules/";

/// Path segments of an install root, ignoring `.` and empty segments
///
/// A leading `/` does not make a root absolute: roots always live inside
/// the target app.
pub fn root_components(root: &str) -> Vec<&str> {
    root.split(['/', '\\'])
        .filter(|part| !part.is_empty() && *part != ".")
        .collect()
}

/// Validated module set keyed by module name, as written by `parse --write`
pub type Snapshot = BTreeMap<String, ModuleDescriptor>;

/// Module descriptor from meta.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    /// Module name (unique within a modules directory)
    pub name: String,

    /// Which generators apply to this module
    #[serde(rename = "type")]
    pub module_type: ModuleType,

    /// Install path relative to the target app
    pub root: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acceptance_criteria: Option<String>,

    /// External packages required by the module (package name -> version range)
    #[serde(
        rename = "x-dependencies",
        default,
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub dependencies: BTreeMap<String, String>,

    /// Any other descriptor keys, passed through untouched
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl ModuleDescriptor {
    /// Create a descriptor with the default root for its type
    pub fn new(name: impl Into<String>, module_type: ModuleType) -> Self {
        let name = name.into();
        Self {
            root: module_type.default_root(&name),
            name,
            module_type,
            search_description: None,
            acceptance_criteria: None,
            dependencies: BTreeMap::new(),
            extra: BTreeMap::new(),
        }
    }

    /// Directory name this module is expected to live in
    pub fn slug(&self) -> String {
        self.module_type.slug(&self.name)
    }

    /// Dependencies that point at sibling modules (`@modules/<name>`)
    pub fn sibling_dependencies(&self) -> impl Iterator<Item = &str> {
        self.dependencies
            .keys()
            .filter_map(|key| key.strip_prefix(SIBLING_SCOPE))
    }

    /// Directory the module is installed to inside `base`
    pub fn install_path(&self, base: &Path) -> PathBuf {
        root_components(&self.root)
            .into_iter()
            .fold(base.to_path_buf(), |path, part| path.join(part))
    }

    /// External dependencies formatted as `name@range` for a node package manager
    ///
    /// Sibling references are installed from their own module, not the registry.
    pub fn package_specs(&self) -> Vec<String> {
        self.dependencies
            .iter()
            .filter(|(name, _)| !name.starts_with(SIBLING_SCOPE))
            .map(|(name, range)| format!("{name}@{range}"))
            .collect()
    }

    /// Parse a descriptor from a JSON string
    ///
    /// `origin` is only used in error messages.
    pub fn from_json(json: &str, origin: &Path) -> Result<Self> {
        let descriptor: Self = serde_json::from_str(json)
            .map_err(|e| module::malformed(origin.display().to_string(), e.to_string()))?;
        descriptor.validate(origin)?;
        Ok(descriptor)
    }

    /// Serialize the descriptor as pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn validate(&self, origin: &Path) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(module::malformed(
                origin.display().to_string(),
                "field `name` must not be empty",
            ));
        }
        let parts = root_components(&self.root);
        if parts.is_empty() || parts.iter().any(|part| *part == ".." || part.contains(':')) {
            return Err(module::malformed(
                origin.display().to_string(),
                format!(
                    "field `root` must name a directory inside the app, got \"{}\"",
                    self.root
                ),
            ));
        }
        Ok(())
    }
}

/// Read the descriptor of the module at `module_dir`
///
/// # Errors
///
/// Returns `ModuleError::MalformedDescriptor` when meta.json is missing,
/// unreadable, not valid JSON, lacks a required field or names an unknown type.
pub fn read_descriptor(module_dir: &Path) -> Result<ModuleDescriptor> {
    let path = module_dir.join(DESCRIPTOR_FILE);
    if !path.is_file() {
        return Err(module::malformed(
            path.display().to_string(),
            format!("{DESCRIPTOR_FILE} not found"),
        ));
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| module::malformed(path.display().to_string(), e.to_string()))?;

    ModuleDescriptor::from_json(&content, &path)
}

/// Read a snapshot written by `parse --write`
///
/// Every entry goes through the same checks as [`read_descriptor`].
#[cfg_attr(not(test), allow(dead_code))]
pub fn read_snapshot(path: &Path) -> Result<Snapshot> {
    let content = fs::read_to_string(path)
        .map_err(|e| module::malformed(path.display().to_string(), e.to_string()))?;
    let raw: BTreeMap<String, serde_json::Value> = serde_json::from_str(&content)
        .map_err(|e| module::malformed(path.display().to_string(), e.to_string()))?;

    raw.into_iter()
        .map(|(name, value)| {
            let origin = PathBuf::from(format!("{}#{name}", path.display()));
            let descriptor = ModuleDescriptor::from_json(&value.to_string(), &origin)?;
            Ok((name, descriptor))
        })
        .collect()
}

#[cfg(test)]
mod tests;
