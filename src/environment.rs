//! External tool availability checks
//!
//! Commands that shell out declare which tools they need. Detected versions
//! are cached in the configuration so later runs skip the probes.

use crate::context::Context;
use crate::error::{ModuleError, Result};
use crate::runner::ToolRunner;
use crate::ui;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    Yarn,
    Git,
    Python,
    Pipenv,
    Cookiecutter,
}

impl Tool {
    /// Executable name, also the cache key in the configuration
    pub fn program(self) -> &'static str {
        match self {
            Tool::Yarn => "yarn",
            Tool::Git => "git",
            Tool::Python => "python",
            Tool::Pipenv => "pipenv",
            Tool::Cookiecutter => "cookiecutter",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Tool::Python => "Python 3.x",
            other => other.program(),
        }
    }

    /// Extract a version from `<tool> --version` output
    pub fn parse_version(self, stdout: &str) -> Option<String> {
        match self {
            Tool::Python => {
                let mut words = stdout.split_whitespace();
                while let Some(word) = words.next() {
                    if word != "Python" {
                        continue;
                    }
                    let version = words.next()?;
                    if !version.starts_with("3.") {
                        return None;
                    }
                    let major_minor: Vec<&str> = version.split('.').take(2).collect();
                    return Some(major_minor.join("."));
                }
                None
            }
            _ => {
                let version = stdout.replace('\n', "");
                let version = version.trim();
                (!version.is_empty()).then(|| version.to_string())
            }
        }
    }
}

/// Make sure every tool in `tools` is installed
///
/// Cached versions are trusted unless `force` is set; new findings are
/// written back to the configuration.
///
/// # Errors
///
/// Returns `ModuleError::MissingTool` for the first tool that is not available.
pub fn check_environment(
    ctx: &mut Context,
    runner: &dyn ToolRunner,
    tools: &[Tool],
    force: bool,
) -> Result<()> {
    ui::section("Checking environment compatibility");
    tracing::debug!(?tools, force, "validating environment dependencies");

    if force {
        for tool in tools {
            ctx.config.environment_versions.remove(tool.program());
        }
    }

    let mut probed = false;
    for tool in tools {
        if ctx.config.environment_versions.contains_key(tool.program()) {
            continue;
        }
        probed = true;
        if let Some(version) = runner.probe_version(*tool) {
            ctx.config
                .environment_versions
                .insert(tool.program().to_string(), version);
        }
    }
    if probed {
        ctx.save_config()?;
    }

    for tool in tools {
        match ctx.config.environment_versions.get(tool.program()) {
            Some(version) => ui::valid(format!("{} {version}", tool.program())),
            None => {
                return Err(ModuleError::MissingTool {
                    tool: tool.label().to_string(),
                });
            }
        }
    }
    Ok(())
}
