//! Parse operation: discover, read and validate every module of a source

use std::path::PathBuf;

use crate::descriptor::read_descriptor;
use crate::discovery::{dir_name, discover_modules};
use crate::error::Result;
use crate::validator::{ModuleEntry, ValidationResult, validate};

pub struct ParseOperation {
    source: PathBuf,
}

impl ParseOperation {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Validate every module directory under the source
    ///
    /// Malformed descriptors are reported as violations, not returned as errors.
    ///
    /// # Errors
    ///
    /// Returns `ModuleError::NotFound` when the source is not a directory.
    pub fn execute(&self) -> Result<ValidationResult> {
        let entries: Vec<ModuleEntry> = discover_modules(&self.source)?
            .map(|dir| {
                let dir_name = dir_name(&dir);
                match read_descriptor(&dir) {
                    Ok(descriptor) => ModuleEntry::Parsed {
                        dir_name,
                        descriptor,
                    },
                    Err(error) => ModuleEntry::Malformed { dir_name, error },
                }
            })
            .collect();
        tracing::debug!(
            source = %self.source.display(),
            modules = entries.len(),
            "discovered modules"
        );

        Ok(validate(&entries))
    }
}
