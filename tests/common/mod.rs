// Shared helpers for integration tests.
//
// Provides a pair of temporary directories standing in for the repository
// checkout and the home directory, plus helpers to populate and inspect them.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use dotfile_sync::commands::CommandSetup;
use dotfile_sync::platform::Platform;
use dotfile_sync::sync::Roots;

/// An isolated repository and home directory backed by
/// [`tempfile::TempDir`]s, deleted on drop.
pub struct SyncTestContext {
    /// Temporary repository checkout.
    pub repo: tempfile::TempDir,
    /// Temporary home directory.
    pub home: tempfile::TempDir,
}

impl SyncTestContext {
    /// Create a context with an empty repository and an empty home.
    pub fn new() -> Self {
        Self {
            repo: tempfile::tempdir().expect("create repo dir"),
            home: tempfile::tempdir().expect("create home dir"),
        }
    }

    /// Path to the repository root.
    pub fn repo_path(&self) -> &Path {
        self.repo.path()
    }

    /// Path to the home root.
    pub fn home_path(&self) -> &Path {
        self.home.path()
    }

    /// Write `content` to `rel` under the repository, creating parents.
    pub fn with_repo_file(self, rel: &str, content: &str) -> Self {
        write_file(&self.repo.path().join(rel), content);
        self
    }

    /// Write `content` to `rel` under the home directory, creating parents.
    pub fn with_home_file(self, rel: &str, content: &str) -> Self {
        write_file(&self.home.path().join(rel), content);
        self
    }

    /// Create an empty directory `rel` under the repository.
    pub fn with_repo_dir(self, rel: &str) -> Self {
        std::fs::create_dir_all(self.repo.path().join(rel)).expect("create repo dir");
        self
    }

    /// Command setup for the given platform identifier over this context.
    pub fn setup(&self, identifier: &str) -> CommandSetup {
        CommandSetup {
            platform: Platform::from_identifier(identifier),
            roots: Roots::new(self.repo_path().to_path_buf(), self.home_path().to_path_buf()),
        }
    }

    /// Read a file under the home directory.
    pub fn read_home(&self, rel: &str) -> String {
        std::fs::read_to_string(self.home.path().join(rel)).expect("read home file")
    }

    /// Read a file under the repository.
    pub fn read_repo(&self, rel: &str) -> String {
        std::fs::read_to_string(self.repo.path().join(rel)).expect("read repo file")
    }

    /// Run the compiled binary with the repository as working directory and
    /// the home directory as `HOME`/`USERPROFILE`.
    pub fn run_binary(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_dotfile-sync"))
            .args(args)
            .current_dir(self.repo_path())
            .env("HOME", self.home_path())
            .env("USERPROFILE", self.home_path())
            .env_remove("DOTFILE_SYNC_LOG")
            .output()
            .expect("run dotfile-sync")
    }
}

/// Write `content` to `path`, creating parent directories.
pub fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent dir");
    }
    std::fs::write(path, content).expect("write file");
}

/// Every file and directory under `root`, relative and sorted.
pub fn tree(root: &Path) -> Vec<PathBuf> {
    fn walk(root: &Path, dir: &Path, out: &mut Vec<PathBuf>) {
        for entry in std::fs::read_dir(dir).expect("read dir") {
            let path = entry.expect("dir entry").path();
            out.push(path.strip_prefix(root).expect("under root").to_path_buf());
            if path.is_dir() {
                walk(root, &path, out);
            }
        }
    }
    let mut out = Vec::new();
    walk(root, root, &mut out);
    out.sort();
    out
}
