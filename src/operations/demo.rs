//! Demo operation: regenerate the demo app from the scaffold templates

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ModuleError, Result, fs as fs_error};
use crate::runner::ToolRunner;
use crate::ui;

const REACT_NATIVE_SCAFFOLD: &str = "gh:crowdbotics/react-native-scaffold";
const DJANGO_SCAFFOLD: &str = "gh:crowdbotics/django-scaffold";

/// Branch or tag of the scaffolds used when none is given
pub const DEFAULT_SCAFFOLD_REF: &str = "master";

/// Template variables for the generated app
const EXTRA_CONTEXT: [(&str, &str); 8] = [
    ("project_name", "demo"),
    ("project_slug", "demo"),
    ("project_generated_name", "demo"),
    ("owner_email", "demo@crowdbotics.com"),
    ("custom_domain", "demo.botics.co"),
    ("repo_url", "https://github.com/crowdbotics/modules"),
    ("heroku_dyno_size", "free"),
    ("is_mobile", "y"),
];

pub struct DemoOperation<'a> {
    runner: &'a dyn ToolRunner,
    scaffold_ref: String,
}

fn extra_context() -> impl Iterator<Item = String> {
    EXTRA_CONTEXT.iter().map(|(key, value)| format!("{key}={value}"))
}

impl<'a> DemoOperation<'a> {
    pub fn new(runner: &'a dyn ToolRunner, scaffold_ref: Option<&str>) -> Self {
        Self {
            runner,
            scaffold_ref: scaffold_ref.unwrap_or(DEFAULT_SCAFFOLD_REF).to_string(),
        }
    }

    /// Replace `dir` with a freshly generated app
    ///
    /// The React Native scaffold is rendered into `dir` and the Django
    /// scaffold ends up in `dir/backend`.
    pub fn execute(&self, dir: &Path) -> Result<PathBuf> {
        let parent = dir.parent().ok_or_else(|| fs_error::not_found(dir))?;
        let dir_name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| fs_error::not_found(dir))?;

        if dir.exists() {
            ui::section("Removing previous demo app");
            fs::remove_dir_all(dir).map_err(|e| fs_error::write_failed(dir, e))?;
        }

        ui::section("Preparing environment");
        self.runner.prepare_python(parent)?;

        ui::section("Generating React Native app from scaffold");
        let mut react_native_args: Vec<String> = [
            "--directory",
            "dist/cookie",
            "--checkout",
            self.scaffold_ref.as_str(),
            "--no-input",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        react_native_args.extend(extra_context());
        self.runner
            .run_cookiecutter(parent, REACT_NATIVE_SCAFFOLD, &react_native_args)?;

        ui::section("Installing dependencies");
        self.runner.yarn_install(dir)?;

        ui::section("Generating Django app from scaffold");
        let mut django_args: Vec<String> = [
            "--checkout",
            self.scaffold_ref.as_str(),
            "--output-dir",
            dir_name.as_str(),
            "--no-input",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        django_args.extend(extra_context());
        self.runner
            .run_cookiecutter(parent, DJANGO_SCAFFOLD, &django_args)?;

        let generated = dir.join(&dir_name);
        let backend = dir.join("backend");
        if !generated.is_dir() {
            return Err(ModuleError::ExternalCommand {
                command: format!("cookiecutter {DJANGO_SCAFFOLD}"),
                reason: format!("{} was not generated", generated.display()),
            });
        }
        fs::rename(&generated, &backend).map_err(|e| fs_error::write_failed(&backend, e))?;

        ui::valid(format!("Demo app generated at {}", dir.display()));
        Ok(dir.to_path_buf())
    }
}
