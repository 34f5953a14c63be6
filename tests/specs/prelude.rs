//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for running the streak CLI against an isolated
//! config directory.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// 2023-11-14T22:13:20Z
pub const START_MS: u64 = 1_700_000_000_000;

/// START_MS + 5d 3h 20m 15s
pub const FIVE_DAYS_LATER_MS: u64 = START_MS + 444_015_000;

/// Returns the path to a workspace binary. Checks the llvm-cov target
/// directory, then the standard one, then falls back to the directory
/// the test binary itself was built into.
///
/// The binary lives in `crates/cli`, so it is built by a workspace-wide
/// `cargo test`, not by this package.
fn binary_path(name: &str) -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));

    let llvm_cov_path = manifest_dir.join("target/llvm-cov-target/debug").join(name);
    if llvm_cov_path.exists() {
        return llvm_cov_path;
    }

    let standard = manifest_dir.join("target/debug").join(name);
    if standard.exists() {
        return standard;
    }

    // The test binary lives at target/debug/deps/specs-<hash>
    if let Ok(exe) = std::env::current_exe() {
        if let Some(debug_dir) = exe.parent().and_then(|d| d.parent()) {
            let fallback = debug_dir.join(name);
            if fallback.exists() {
                return fallback;
            }
        }
    }

    standard
}

/// Returns the path to the streak binary.
fn streak_binary() -> PathBuf {
    binary_path(&format!("streak{}", std::env::consts::EXE_SUFFIX))
}

/// Create a CLI builder for streak commands
pub fn cli() -> CliBuilder {
    CliBuilder::new()
}

/// High-level CLI builder for fluent test assertions
pub struct CliBuilder {
    args: Vec<String>,
    envs: Vec<(String, String)>,
}

impl CliBuilder {
    fn new() -> Self {
        Self {
            args: Vec::new(),
            envs: Vec::new(),
        }
    }

    /// Add CLI arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Set environment variable
    pub fn env(mut self, key: &str, value: impl AsRef<Path>) -> Self {
        self.envs.push((
            key.to_string(),
            value.as_ref().to_string_lossy().to_string(),
        ));
        self
    }

    /// Build the command without running it
    pub fn command(self) -> Command {
        let mut cmd = Command::new(streak_binary());
        cmd.args(&self.args);

        // Keep the caller's environment from redirecting files or logs.
        for key in ["STREAK_PREFS", "STREAK_CONFIG", "STREAK_LOG"] {
            cmd.env_remove(key);
        }

        for (key, value) in self.envs {
            cmd.env(key, value);
        }

        cmd
    }

    /// Run and expect success (exit code 0)
    pub fn passes(self) -> RunAssert {
        let mut cmd = self.command();
        let output = cmd.output().expect("command should run");
        assert!(
            output.status.success(),
            "expected command to pass, got exit code {:?}\nstdout: {}\nstderr: {}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }

    /// Run and expect failure with exit code 1
    pub fn fails(self) -> RunAssert {
        let mut cmd = self.command();
        let output = cmd.output().expect("command should run");
        assert_eq!(
            output.status.code(),
            Some(1),
            "expected exit code 1\nstdout: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }
}

/// Result of a CLI run for chaining assertions
pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Parse stdout as JSON
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout()).expect("stdout should be JSON")
    }

    /// Assert stdout equals expected exactly (with diff on failure).
    /// **Prefer this for format specs** - catches format regressions.
    pub fn stdout_eq(self, expected: &str) -> Self {
        let stdout = self.stdout();
        similar_asserts::assert_eq!(stdout, expected);
        self
    }

    /// Assert stdout contains substring.
    pub fn stdout_has(self, expected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            stdout.contains(expected),
            "stdout does not contain '{}'\nstdout: {}",
            expected,
            stdout
        );
        self
    }

    /// Assert stderr contains substring.
    pub fn stderr_has(self, expected: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            stderr.contains(expected),
            "stderr does not contain '{}'\nstderr: {}",
            expected,
            stderr
        );
        self
    }

    /// Assert stderr does not contain substring.
    pub fn stderr_lacks(self, unexpected: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            !stderr.contains(unexpected),
            "stderr should not contain '{}'\nstderr: {}",
            unexpected,
            stderr
        );
        self
    }
}

// =============================================================================
// Home
// =============================================================================

/// Isolated XDG config home holding the preference file and config.
pub struct Home {
    dir: tempfile::TempDir,
}

impl Home {
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// A subscriber whose streak started at [`START_MS`].
    pub fn subscribed() -> Self {
        let home = Self::empty();
        home.prefs(serde_json::json!({
            "streak_start_timestamp": START_MS,
            "widget_has_active_subscription": true,
        }));
        home
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Default preference file location under this home
    pub fn prefs_path(&self) -> PathBuf {
        self.path().join("streak").join("widget_prefs.json")
    }

    /// Write the preference file
    pub fn prefs(&self, prefs: serde_json::Value) {
        self.file("streak/widget_prefs.json", &prefs.to_string());
    }

    /// Read the preference file back
    pub fn read_prefs(&self) -> serde_json::Value {
        let content = std::fs::read_to_string(self.prefs_path()).unwrap();
        serde_json::from_str(&content).unwrap()
    }

    /// Write the config file
    pub fn config(&self, content: &str) {
        self.file("streak/config.toml", content);
    }

    /// Write a file at the given path (parent directories created automatically)
    pub fn file(&self, path: impl AsRef<Path>, content: &str) {
        let full_path = self.path().join(path.as_ref());
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full_path, content).unwrap();
    }

    /// Run streak with this home as XDG_CONFIG_HOME
    pub fn streak(&self) -> CliBuilder {
        cli().env("XDG_CONFIG_HOME", self.path())
    }
}
