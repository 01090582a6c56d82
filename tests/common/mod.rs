//! Common test utilities for cb integration tests

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// A scratch modules repository for integration tests
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a workspace that is also a git repository
    pub fn with_git() -> Self {
        let workspace = Self::new();
        git2::Repository::init(&workspace.path).expect("Failed to init git repository");
        workspace
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Write `modules/<dir>/meta.json`
    pub fn write_module(&self, dir: &str, descriptor: &str) {
        self.write_file(&format!("modules/{dir}/meta.json"), descriptor);
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// The cb binary running inside this workspace with an isolated config directory
    pub fn cb_cmd(&self) -> Command {
        let mut cmd = cb_cmd();
        cmd.current_dir(&self.path)
            .env("CB_CONFIG_DIR", self.path.join(".cb-config"));
        cmd
    }
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn cb_cmd() -> Command {
    let mut cmd = Command::cargo_bin("cb").unwrap();
    cmd.env("CI", "1").env_remove("RUST_LOG");
    cmd
}
