//! Cross-module validation
//!
//! Checks the whole set of modules found in one `parse` run:
//! - malformed descriptors (reported by the reader)
//! - duplicate module names
//! - colliding install roots
//! - `@modules/` dependencies that match no sibling module
//! - directory names that differ from the module slug
//!
//! Every violation is collected; nothing stops at the first hit. Violations
//! are ordered by the discovery order of the module directories and, within
//! one directory, by the rule order above.

mod rules;

use serde::Serialize;
use std::fmt;

use crate::descriptor::{ModuleDescriptor, Snapshot};
use crate::error::ModuleError;

/// One discovered module directory, parsed or not
#[derive(Debug)]
pub enum ModuleEntry {
    Parsed {
        dir_name: String,
        descriptor: ModuleDescriptor,
    },
    Malformed {
        dir_name: String,
        error: ModuleError,
    },
}

impl ModuleEntry {
    pub fn dir_name(&self) -> &str {
        match self {
            ModuleEntry::Parsed { dir_name, .. } | ModuleEntry::Malformed { dir_name, .. } => {
                dir_name
            }
        }
    }

    pub fn descriptor(&self) -> Option<&ModuleDescriptor> {
        match self {
            ModuleEntry::Parsed { descriptor, .. } => Some(descriptor),
            ModuleEntry::Malformed { .. } => None,
        }
    }

    /// Name used when reporting violations for this entry
    fn owner(&self) -> &str {
        match self {
            ModuleEntry::Parsed { descriptor, .. } => &descriptor.name,
            ModuleEntry::Malformed { dir_name, .. } => dir_name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    MalformedDescriptor,
    DuplicateName,
    RootCollision,
    MissingDependency,
    SlugMismatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl Rule {
    pub fn severity(self) -> Severity {
        match self {
            Rule::MalformedDescriptor | Rule::DuplicateName | Rule::RootCollision => {
                Severity::Error
            }
            Rule::MissingDependency | Rule::SlugMismatch => Severity::Warning,
        }
    }
}

/// A single rule hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub module: String,
    pub rule: Rule,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.module, self.message)
    }
}

/// Outcome of validating one modules directory
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<Violation>,
    pub warnings: Vec<Violation>,
    /// Modules that parsed and hit no error-level rule
    pub modules: Snapshot,
}

impl ValidationResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn record(&mut self, violation: Violation) {
        match violation.rule.severity() {
            Severity::Error => self.errors.push(violation),
            Severity::Warning => self.warnings.push(violation),
        }
    }
}

/// Validate every discovered module entry
pub fn validate(entries: &[ModuleEntry]) -> ValidationResult {
    let mut found = rules::Findings::new(entries.len());

    rules::check_malformed(entries, &mut found);
    rules::check_unique_names(entries, &mut found);
    rules::check_root_collisions(entries, &mut found);
    rules::check_sibling_dependencies(entries, &mut found);
    rules::check_slugs(entries, &mut found);

    let mut result = ValidationResult::default();
    for (index, entry) in entries.iter().enumerate() {
        for violation in found.take(index) {
            result.record(violation);
        }
        if let Some(descriptor) = entry.descriptor() {
            if !found.is_failed(index) {
                result
                    .modules
                    .insert(descriptor.name.clone(), descriptor.clone());
            }
        }
    }

    tracing::debug!(
        modules = result.modules.len(),
        errors = result.errors.len(),
        warnings = result.warnings.len(),
        "validation finished"
    );

    result
}

#[cfg(test)]
mod tests;
