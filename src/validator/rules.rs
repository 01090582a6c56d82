//! Individual validation rules

use std::collections::{BTreeMap, HashSet};

use super::{ModuleEntry, Rule, Violation};
use crate::descriptor::root_components;

/// Violations collected per entry, plus which entries are excluded
pub(super) struct Findings {
    per_entry: Vec<Vec<Violation>>,
    failed: Vec<bool>,
}

impl Findings {
    pub(super) fn new(len: usize) -> Self {
        Self {
            per_entry: vec![Vec::new(); len],
            failed: vec![false; len],
        }
    }

    fn push(&mut self, index: usize, module: &str, rule: Rule, message: String) {
        self.per_entry[index].push(Violation {
            module: module.to_string(),
            rule,
            message,
        });
    }

    fn fail(&mut self, index: usize) {
        self.failed[index] = true;
    }

    pub(super) fn is_failed(&self, index: usize) -> bool {
        self.failed[index]
    }

    pub(super) fn take(&mut self, index: usize) -> Vec<Violation> {
        std::mem::take(&mut self.per_entry[index])
    }
}

pub(super) fn check_malformed(entries: &[ModuleEntry], found: &mut Findings) {
    for (index, entry) in entries.iter().enumerate() {
        if let ModuleEntry::Malformed { dir_name, error } = entry {
            found.push(index, dir_name, Rule::MalformedDescriptor, error.to_string());
            found.fail(index);
        }
    }
}

/// One error per shared name, recorded where the name first appears
pub(super) fn check_unique_names(entries: &[ModuleEntry], found: &mut Findings) {
    let mut by_name: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (index, entry) in entries.iter().enumerate() {
        if let Some(descriptor) = entry.descriptor() {
            by_name
                .entry(descriptor.name.as_str())
                .or_default()
                .push(index);
        }
    }

    for (name, indices) in by_name {
        if indices.len() < 2 {
            continue;
        }
        let dirs: Vec<&str> = indices.iter().map(|&i| entries[i].dir_name()).collect();
        found.push(
            indices[0],
            name,
            Rule::DuplicateName,
            format!(
                "module name \"{name}\" is declared by more than one directory: {}",
                dirs.join(", ")
            ),
        );
        for index in indices {
            found.fail(index);
        }
    }
}

/// Roots collide when equal or when one contains the other
pub(super) fn roots_collide(a: &str, b: &str) -> bool {
    let a = root_components(a);
    let b = root_components(b);
    a.starts_with(&b) || b.starts_with(&a)
}

pub(super) fn check_root_collisions(entries: &[ModuleEntry], found: &mut Findings) {
    let parsed: Vec<(usize, &crate::descriptor::ModuleDescriptor)> = entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| entry.descriptor().map(|d| (index, d)))
        .collect();

    for (pos, (first, a)) in parsed.iter().enumerate() {
        for (second, b) in &parsed[pos + 1..] {
            if !roots_collide(&a.root, &b.root) {
                continue;
            }
            found.push(
                *first,
                &a.name,
                Rule::RootCollision,
                format!(
                    "root \"{}\" collides with root \"{}\" of module \"{}\" ({})",
                    a.root,
                    b.root,
                    b.name,
                    entries[*second].dir_name()
                ),
            );
            found.fail(*first);
            found.fail(*second);
        }
    }
}

pub(super) fn check_sibling_dependencies(entries: &[ModuleEntry], found: &mut Findings) {
    let mut known: HashSet<&str> = HashSet::new();
    for entry in entries {
        known.insert(entry.dir_name());
        if let Some(descriptor) = entry.descriptor() {
            known.insert(descriptor.name.as_str());
        }
    }

    for (index, entry) in entries.iter().enumerate() {
        let Some(descriptor) = entry.descriptor() else {
            continue;
        };
        for sibling in descriptor.sibling_dependencies() {
            if known.contains(sibling) {
                continue;
            }
            found.push(
                index,
                entry.owner(),
                Rule::MissingDependency,
                format!(
                    "dependency \"{}{sibling}\" does not match any module in the source directory",
                    crate::descriptor::SIBLING_SCOPE
                ),
            );
        }
    }
}

pub(super) fn check_slugs(entries: &[ModuleEntry], found: &mut Findings) {
    for (index, entry) in entries.iter().enumerate() {
        let Some(descriptor) = entry.descriptor() else {
            continue;
        };
        let expected = descriptor.slug();
        if entry.dir_name() != expected {
            found.push(
                index,
                entry.owner(),
                Rule::SlugMismatch,
                format!(
                    "directory \"{}\" should be named \"{expected}\" for a {} module",
                    entry.dir_name(),
                    descriptor.module_type
                ),
            );
        }
    }
}
