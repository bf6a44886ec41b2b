//! Common test utilities for git-browse integration tests
//!
//! `TestRepo` creates real temporary git repositories so remote discovery
//! runs against the same on-disk layout git itself writes.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Get path to compiled binary (built by cargo test)
pub fn git_browse_bin() -> &'static str {
    env!("CARGO_BIN_EXE_git-browse")
}

/// A test repository with an initial commit on main
pub struct TestRepo {
    dir: TempDir,
    /// Private config home so a developer's own config file never leaks in
    config_home: TempDir,
}

#[allow(dead_code)]
impl TestRepo {
    /// Create a new test repository with git init and an initial commit on main
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let config_home = TempDir::new().expect("Failed to create config dir");
        let repo = Self { dir, config_home };

        repo.git(&["init", "-b", "main"]);
        repo.git(&["config", "user.email", "test@test.com"]);
        repo.git(&["config", "user.name", "Test User"]);

        fs::write(repo.path().join("README.md"), "# Test Repo\n").expect("Failed to write README");
        repo.git(&["add", "-A"]);
        repo.git(&["commit", "-m", "Initial commit"]);

        repo
    }

    /// Create a new test repository with the given remotes added in order
    pub fn with_remotes(remotes: &[(&str, &str)]) -> Self {
        let repo = Self::new();
        for (name, url) in remotes {
            repo.add_remote(name, url);
        }
        repo
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    pub fn add_remote(&self, name: &str, url: &str) {
        let output = self.git(&["remote", "add", name, url]);
        assert!(output.status.success(), "Failed to add remote {}", name);
    }

    /// Append another URL to an existing remote
    pub fn add_remote_url(&self, name: &str, url: &str) {
        let key = format!("remote.{}.url", name);
        let output = self.git(&["config", "--add", &key, url]);
        assert!(output.status.success(), "Failed to add url to {}", name);
    }

    /// Create a subdirectory inside the working tree and return its path
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::create_dir_all(&path).expect("Failed to create dir");
        path
    }

    /// Add a linked worktree next to the repository and return its path
    pub fn add_worktree(&self, parent: &Path, name: &str) -> PathBuf {
        let path = parent.join(name);
        let output = self.git(&["worktree", "add", "-b", name, path.to_str().unwrap()]);
        assert!(
            output.status.success(),
            "Failed to add worktree: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        path
    }

    /// Write the git-browse config file used by `run_git_browse`
    pub fn write_config(&self, content: &str) {
        let dir = self.config_dir();
        fs::create_dir_all(&dir).expect("Failed to create config dir");
        fs::write(dir.join("config.toml"), content).expect("Failed to write config");
    }

    fn config_dir(&self) -> PathBuf {
        self.config_home.path().join("git-browse")
    }

    /// Run git-browse from the repository root
    pub fn run_git_browse(&self, args: &[&str]) -> Output {
        self.run_git_browse_in(&self.path(), args)
    }

    /// Run git-browse from an arbitrary directory
    pub fn run_git_browse_in(&self, dir: &Path, args: &[&str]) -> Output {
        Command::new(git_browse_bin())
            .args(args)
            .current_dir(dir)
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to execute git-browse")
    }

    pub fn stdout(output: &Output) -> String {
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn stderr(output: &Output) -> String {
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    pub fn git(&self, args: &[&str]) -> Output {
        Command::new("git")
            .args(args)
            .current_dir(self.path())
            .output()
            .expect("Failed to execute git")
    }
}

/// Assertion helpers for command output
#[allow(dead_code)]
pub trait OutputAssertions {
    fn assert_success(&self) -> &Self;
    fn assert_failure(&self) -> &Self;
    fn assert_stdout_contains(&self, s: &str) -> &Self;
    fn assert_stderr_contains(&self, s: &str) -> &Self;
}

#[allow(dead_code)]
impl OutputAssertions for Output {
    fn assert_success(&self) -> &Self {
        assert!(
            self.status.success(),
            "Expected success but got failure.\nstdout: {}\nstderr: {}",
            String::from_utf8_lossy(&self.stdout),
            String::from_utf8_lossy(&self.stderr)
        );
        self
    }

    fn assert_failure(&self) -> &Self {
        assert!(
            !self.status.success(),
            "Expected failure but got success.\nstdout: {}\nstderr: {}",
            String::from_utf8_lossy(&self.stdout),
            String::from_utf8_lossy(&self.stderr)
        );
        self
    }

    fn assert_stdout_contains(&self, s: &str) -> &Self {
        let stdout = String::from_utf8_lossy(&self.stdout);
        assert!(
            stdout.contains(s),
            "Expected stdout to contain '{}'\nActual stdout: {}",
            s,
            stdout
        );
        self
    }

    fn assert_stderr_contains(&self, s: &str) -> &Self {
        let stderr = String::from_utf8_lossy(&self.stderr);
        assert!(
            stderr.contains(s),
            "Expected stderr to contain '{}'\nActual stderr: {}",
            s,
            stderr
        );
        self
    }
}
