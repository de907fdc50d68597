//! Test environment builder for isolated paintrack testing.
//!
//! Provides `TestEnv` - an isolated environment with a temp HOME (where the
//! default `~/.paintrack` storage lives) and a temp working directory, plus
//! helpers to run the paintrack binary.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Environment variables that would leak the developer's settings into tests
const SCRUBBED_VARS: &[&str] = &[
    "PAINTRACK_STORAGE_DIR",
    "PAINTRACK_CATALOG",
    "PAINTRACK_EXPORT_DIR",
    "PAINTRACK_VERBOSITY",
    "PAINTRACK_REJECT_DUPLICATES",
    "RUST_LOG",
];

/// Result of running a paintrack CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as JSON
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}):\n{}", self.stdout))
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Temporary working directory (exports land here by default)
    pub work_dir: TempDir,
    /// Temporary directory for HOME
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            work_dir: tempfile::tempdir().expect("create work dir"),
            home_dir: tempfile::tempdir().expect("create home dir"),
        }
    }

    /// Default storage directory under the temp HOME
    pub fn storage_dir(&self) -> PathBuf {
        self.home_dir.path().join(".paintrack")
    }

    /// Stored JSON for one entity, if written
    pub fn stored(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.storage_dir().join(format!("{key}.json"))).ok()
    }

    /// Write raw content for one entity, bypassing the tracker
    pub fn write_stored(&self, key: &str, content: &str) {
        std::fs::create_dir_all(self.storage_dir()).expect("create storage dir");
        std::fs::write(self.storage_dir().join(format!("{key}.json")), content)
            .expect("write stored state");
    }

    /// Write a file relative to the working directory
    pub fn write_work_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(&path, content).expect("write work file");
        path
    }

    pub fn work_path(&self, relative: &str) -> PathBuf {
        self.work_dir.path().join(relative)
    }

    /// Run paintrack from the working directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run paintrack with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_paintrack"));
        cmd.current_dir(self.work_dir.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"));
        for var in SCRUBBED_VARS {
            cmd.env_remove(var);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        to_result(cmd.output().expect("failed to execute paintrack"))
    }

    /// Run and assert success, with the output in the failure message
    pub fn run_ok(&self, args: &[&str]) -> TestResult {
        let result = self.run(args);
        assert!(
            result.success,
            "paintrack {:?} failed (exit {}):\n{}",
            args,
            result.exit_code,
            result.combined_output()
        );
        result
    }

    pub fn home(&self) -> &Path {
        self.home_dir.path()
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
