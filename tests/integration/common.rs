//! Helpers shared by the integration tests.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch directory with an isolated config location.
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Config path the binary is pointed at through `VRACFG_CONFIG`.
    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    pub fn write_config(&self, content: &str) {
        std::fs::write(self.config_path(), content).unwrap();
    }

    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    /// `vracfg` with logging off and the config isolated to this project.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("vracfg").unwrap();
        cmd.current_dir(self.path())
            .env("VRACFG_CONFIG", self.config_path())
            .env_remove("RUST_LOG")
            .arg("--quiet");
        cmd
    }
}

/// Parse command stdout as JSON.
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
