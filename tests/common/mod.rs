//! Common test utilities for ownui integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A project directory plus a local registry mirror to install from
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Project root the command runs in
    pub path: PathBuf,
    /// Registry mirror passed as `--source`
    pub mirror: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace with an empty mirror
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("project");
        let mirror = temp.path().join("mirror");
        std::fs::create_dir_all(&path).expect("Failed to create project directory");
        std::fs::create_dir_all(&mirror).expect("Failed to create mirror directory");
        Self { temp, path, mirror }
    }

    /// Publish a file of an artifact in the mirror
    pub fn publish(&self, artifact: &str, file: &str, content: &str) {
        write(&self.mirror.join(artifact).join(file), content);
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        write(&self.path.join(path), content);
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// `ownui` running in the project, installing from the mirror
    pub fn add(&self, args: &[&str]) -> Command {
        let mut cmd = ownui_cmd();
        cmd.current_dir(&self.path)
            .arg("add")
            .args(args)
            .arg("--source")
            .arg(&self.mirror);
        cmd
    }
}

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

/// The real ownui binary with a clean environment
#[allow(deprecated)]
pub fn ownui_cmd() -> Command {
    let mut cmd = Command::cargo_bin("ownui").expect("ownui binary should be built");
    cmd.env_remove("OWNUI_SOURCE").env_remove("RUST_LOG");
    cmd
}
