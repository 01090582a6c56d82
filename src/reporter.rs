//! Validation report rendering and snapshot writing

use console::Style;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

use crate::error::{Result, fs as fs_error};
use crate::ui;
use crate::validator::{ValidationResult, Violation};

fn module_label(violation: &Violation) -> String {
    Style::new()
        .bold()
        .apply_to(format!("[{}]", violation.module))
        .to_string()
}

/// Render warnings, then errors, then a summary line
///
/// Findings are printed together once the whole source has been validated.
pub fn render(result: &ValidationResult, out: &mut impl Write) -> io::Result<()> {
    for warning in &result.warnings {
        writeln!(
            out,
            "{}",
            ui::warning_line(format!("{} {}", module_label(warning), warning.message))
        )?;
    }
    for error in &result.errors {
        writeln!(
            out,
            "{}",
            ui::invalid_line(format!("{} {}", module_label(error), error.message))
        )?;
    }

    let summary = format!(
        "{} module(s) parsed, {} error(s), {} warning(s)",
        result.modules.len(),
        result.errors.len(),
        result.warnings.len()
    );
    if result.has_errors() {
        writeln!(out, "{}", ui::invalid_line(summary))
    } else {
        writeln!(out, "{}", ui::valid_line(summary))
    }
}

/// Print the report to stdout
pub fn print_report(result: &ValidationResult) -> Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    render(result, &mut lock)?;
    Ok(())
}

/// Whether the surviving module set should be persisted
///
/// A run where nothing survived and errors were recorded writes nothing;
/// partial failures persist the valid subset.
pub fn should_write(result: &ValidationResult) -> bool {
    !(result.modules.is_empty() && result.has_errors())
}

/// Write the surviving modules as pretty JSON to `dest`
///
/// Parent directories are created as needed and the file is replaced
/// atomically. Returns `false` when nothing was written.
pub fn write_snapshot(result: &ValidationResult, dest: &Path) -> Result<bool> {
    if !should_write(result) {
        tracing::debug!(dest = %dest.display(), "nothing valid to write, skipping snapshot");
        return Ok(false);
    }

    let parent = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => std::env::current_dir()?,
    };
    fs::create_dir_all(&parent).map_err(|e| fs_error::write_failed(&parent, e))?;

    let mut json = serde_json::to_string_pretty(&result.modules)?;
    json.push('\n');

    let mut temp = NamedTempFile::new_in(&parent).map_err(|e| fs_error::write_failed(dest, e))?;
    temp.write_all(json.as_bytes())
        .map_err(|e| fs_error::write_failed(dest, e))?;
    temp.persist(dest)
        .map_err(|e| fs_error::write_failed(dest, e.error))?;

    tracing::debug!(dest = %dest.display(), modules = result.modules.len(), "snapshot written");
    Ok(true)
}
