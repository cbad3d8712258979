//! Test environment for isolated Dockcraft runs.
//!
//! Every run gets its own working directory and config home, no colors, a
//! closed stdin and a runtime binary that does not exist, so no test can
//! reach a real container engine.

use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Runtime binary name guaranteed not to resolve
pub const MISSING_RUNTIME: &str = "dockcraft-test-missing-runtime";

/// Result of running a Dockcraft CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

pub struct TestEnv {
    /// Working directory holding data.json and the rendered tree
    pub project_root: TempDir,
    /// `DOCKCRAFT_CONFIG_HOME`, empty unless a test writes a user config
    pub config_home: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().expect("Failed to create project dir"),
            config_home: tempfile::tempdir().expect("Failed to create config home"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_dockcraft")),
        }
    }

    /// Working directory already holding `content` as data.json
    pub fn with_document(content: &str) -> Self {
        let env = Self::new();
        env.write_project_file("data.json", content);
        env
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .stdin(Stdio::null())
            .env("NO_COLOR", "1")
            .env("DOCKCRAFT_CONFIG_HOME", self.config_home.path())
            .env("DOCKCRAFT_RUNTIME", MISSING_RUNTIME)
            .env_remove("DOCKCRAFT_DOCUMENT")
            .env_remove("DOCKCRAFT_BACKUP_DIR")
            .env_remove("DOCKCRAFT_COLOR")
            .env_remove("RUST_LOG");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute dockcraft");
        Self::output_to_result(output)
    }

    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    pub fn read_project_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.project_path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    pub fn write_project_file(&self, relative: &str, content: &str) {
        let full_path = self.project_path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.project_path(relative).exists()
    }
}
