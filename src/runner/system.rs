//! Runner backed by real processes and libgit2

use git2::{IndexAddOption, Repository, Signature};
use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use super::ToolRunner;
use crate::environment::Tool;
use crate::error::{ModuleError, Result};

/// Python version pinned for module environments
const PYTHON_VERSION: &str = "3.8.17";

/// Upper bound for a `<tool> --version` probe
const PROBE_TIMEOUT: Duration = Duration::from_secs(10);
const PROBE_POLL: Duration = Duration::from_millis(50);

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

fn describe(command: &Command) -> String {
    let mut parts = vec![command.get_program().to_string_lossy().into_owned()];
    parts.extend(command.get_args().map(|a| a.to_string_lossy().into_owned()));
    parts.join(" ")
}

/// Run to completion, turning a non-zero exit into `ExternalCommand`
fn run(command: &mut Command) -> Result<()> {
    let described = describe(command);
    tracing::debug!(command = %described, "running external command");

    let output = command.output().map_err(|e| ModuleError::ExternalCommand {
        command: described.clone(),
        reason: e.to_string(),
    })?;

    if output.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    let reason = match stderr.trim() {
        "" => format!("exited with {}", output.status),
        trimmed => trimmed.to_string(),
    };
    Err(ModuleError::ExternalCommand {
        command: described,
        reason,
    })
}

fn probe(tool: Tool) -> Option<String> {
    let mut child = Command::new(tool.program())
        .arg("--version")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .ok()?;

    let deadline = Instant::now() + PROBE_TIMEOUT;
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) if Instant::now() < deadline => thread::sleep(PROBE_POLL),
            Ok(None) => {
                tracing::warn!(tool = tool.program(), "version probe timed out");
                let _ = child.kill();
                let _ = child.wait();
                return None;
            }
            Err(e) => {
                tracing::debug!(tool = tool.program(), error = %e, "version probe failed");
                return None;
            }
        }
    };

    let mut stdout = String::new();
    child.stdout.take()?.read_to_string(&mut stdout).ok()?;
    let mut stderr = String::new();
    if let Some(mut pipe) = child.stderr.take() {
        let _ = pipe.read_to_string(&mut stderr);
    }
    tracing::debug!(
        tool = tool.program(),
        %status,
        stdout = stdout.trim(),
        stderr = stderr.trim(),
        "version probe"
    );

    if !status.success() || !stderr.trim().is_empty() {
        return None;
    }
    tool.parse_version(&stdout)
}

impl ToolRunner for SystemRunner {
    fn install_python_package(&self, backend_dir: &Path, package: &str) -> Result<()> {
        run(Command::new("pipenv")
            .args(["install", "-e", package])
            .current_dir(backend_dir))
    }

    fn install_node_packages(&self, app_dir: &Path, packages: &[String]) -> Result<()> {
        run(Command::new("yarn")
            .arg("add")
            .args(packages)
            .current_dir(app_dir))
    }

    fn remove_node_package(&self, app_dir: &Path, package: &str) -> Result<()> {
        run(Command::new("yarn")
            .args(["remove", package])
            .current_dir(app_dir))
    }

    fn yarn_install(&self, app_dir: &Path) -> Result<()> {
        run(Command::new("yarn").arg("install").current_dir(app_dir))
    }

    fn prepare_python(&self, dir: &Path) -> Result<()> {
        run(Command::new("pipenv")
            .args(["--python", PYTHON_VERSION])
            .current_dir(dir))?;
        run(Command::new("pipenv")
            .args(["install", "cookiecutter"])
            .current_dir(dir))
    }

    fn run_cookiecutter(&self, dir: &Path, template: &str, args: &[String]) -> Result<()> {
        run(Command::new("pipenv")
            .args(["run", "cookiecutter", template])
            .args(args)
            .current_dir(dir))
    }

    fn init_repo(&self, dir: &Path) -> Result<()> {
        Repository::init(dir)?;
        Ok(())
    }

    fn commit_paths(&self, dir: &Path, paths: &[&str], message: &str) -> Result<()> {
        let repo = Repository::open(dir)?;
        let mut index = repo.index()?;
        index.add_all(paths.iter().copied(), IndexAddOption::DEFAULT, None)?;
        index.write()?;

        let tree = repo.find_tree(index.write_tree()?)?;
        let signature = repo
            .signature()
            .or_else(|_| Signature::now("cb", "cb@localhost"))?;

        let parent = match repo.head() {
            Ok(head) => Some(head.peel_to_commit()?),
            Err(_) => None,
        };
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &parents,
        )?;
        Ok(())
    }

    fn probe_version(&self, tool: Tool) -> Option<String> {
        probe(tool)
    }
}
