//! Create operation: scaffold a new module
//!
//! The module directory is named after the slug of its name and type. Nothing
//! is written when that directory already exists, and a partially generated
//! module is removed again if any write fails.

pub mod templates;

use std::fs;
use std::path::{Path, PathBuf};

use crate::descriptor::{DESCRIPTOR_FILE, ModuleDescriptor, ModuleType};
use crate::error::{Result, fs as fs_error, module};
use templates::GeneratedFile;

/// Subdirectory holding the Django part of an `all` module
const BACKEND_DIR: &str = "backend";

#[derive(Debug, Clone)]
pub struct CreateOptions {
    pub name: String,
    pub module_type: ModuleType,
    /// Directory the module directory is created in
    pub target: PathBuf,
    pub search_description: Option<String>,
    pub acceptance_criteria: Option<String>,
}

pub struct CreateOperation {
    options: CreateOptions,
}

/// Letter first, then letters, digits, `_` or `-`
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        }
        _ => false,
    }
}

impl CreateOperation {
    pub fn new(options: CreateOptions) -> Self {
        Self { options }
    }

    /// Create the module and return its directory
    ///
    /// # Errors
    ///
    /// Returns `ModuleError::InvalidModuleName` for a bad name and
    /// `ModuleError::AlreadyExists` when the slug directory is taken.
    pub fn execute(&self) -> Result<PathBuf> {
        let options = &self.options;
        if !is_valid_name(&options.name) {
            return Err(module::invalid_name(&options.name));
        }

        let descriptor = self.descriptor();
        let slug = descriptor.slug();
        let dir = options.target.join(&slug);
        if dir.exists() {
            return Err(module::already_exists(slug));
        }

        tracing::debug!(
            name = %options.name,
            module_type = %options.module_type,
            dir = %dir.display(),
            "creating module"
        );

        if let Err(e) = generate(&dir, &descriptor) {
            if dir.exists() {
                if let Err(cleanup) = fs::remove_dir_all(&dir) {
                    tracing::warn!(dir = %dir.display(), error = %cleanup, "cleanup failed");
                }
            }
            return Err(e);
        }
        Ok(dir)
    }

    fn descriptor(&self) -> ModuleDescriptor {
        let options = &self.options;
        let mut descriptor = ModuleDescriptor::new(&options.name, options.module_type);
        descriptor.search_description = options.search_description.clone();
        descriptor.acceptance_criteria = options.acceptance_criteria.clone();
        descriptor.extra.insert(
            "title".to_string(),
            serde_json::Value::String(options.name.clone()),
        );
        descriptor
    }
}

/// Files generated for each module type
fn scaffold(descriptor: &ModuleDescriptor) -> Vec<GeneratedFile> {
    let name = &descriptor.name;
    match descriptor.module_type {
        ModuleType::ReactNative => templates::react_native_files(name),
        ModuleType::Django => templates::django_files(name),
        ModuleType::All => templates::react_native_files(name)
            .into_iter()
            .chain(
                templates::django_files(name)
                    .into_iter()
                    .map(|file| file.under(BACKEND_DIR)),
            )
            .collect(),
        ModuleType::Custom => Vec::new(),
    }
}

fn generate(dir: &Path, descriptor: &ModuleDescriptor) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| fs_error::write_failed(dir, e))?;

    let meta = dir.join(DESCRIPTOR_FILE);
    fs::write(&meta, format!("{}\n", descriptor.to_json()?))
        .map_err(|e| fs_error::write_failed(&meta, e))?;

    for file in scaffold(descriptor) {
        let path = dir.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| fs_error::write_failed(parent, e))?;
        }
        fs::write(&path, &file.contents).map_err(|e| fs_error::write_failed(&path, e))?;
    }
    Ok(())
}
