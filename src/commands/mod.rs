//! Command-line entry points: environment setup followed by a sync run.
use anyhow::{Context as _, Result};

use crate::catalog::CATALOG;
use crate::copy::FsCopier;
use crate::logging::Log;
use crate::platform::Platform;
use crate::sync::{self, Direction, Roots, SyncReport};

/// Shared state produced before any file is touched.
///
/// Encapsulates platform detection and root resolution so a run can also be
/// driven with explicit values.
#[derive(Debug, Clone)]
pub struct CommandSetup {
    /// Platform the catalog is filtered by.
    pub platform: Platform,
    /// Repository and home roots.
    pub roots: Roots,
}

impl CommandSetup {
    /// Detect the platform and resolve the roots from the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory or the home directory
    /// cannot be determined.
    pub fn init() -> Result<Self> {
        let platform = Platform::detect();
        let roots = Roots::resolve().context("resolving repository and home directories")?;
        Ok(Self { platform, roots })
    }
}

/// Run `direction` against the process environment.
///
/// # Errors
///
/// Returns an error only if the environment cannot be resolved; per-entry
/// copy failures are logged and reported in the returned [`SyncReport`].
pub fn run(direction: Direction, log: &dyn Log) -> Result<SyncReport> {
    let setup = CommandSetup::init()?;
    Ok(execute(direction, &setup, log))
}

/// Run `direction` with an already prepared [`CommandSetup`].
pub fn execute(direction: Direction, setup: &CommandSetup, log: &dyn Log) -> SyncReport {
    log.info(&format!(
        "os: {} ({})",
        setup.platform.os, setup.platform.identifier
    ));
    log.info(&format!("repo root: {}", setup.roots.repo.display()));
    log.info(&format!("home root: {}", setup.roots.home.display()));
    log.info(&format!("command: {direction}"));

    log.stage(match direction {
        Direction::Write => "Writing dotfiles to home directory",
        Direction::Sync => "Syncing dotfiles into repository",
    });

    let copier = FsCopier::new(log);
    sync::run(
        direction,
        &setup.roots,
        setup.platform.os,
        CATALOG,
        &copier,
        log,
    )
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::fs;

    use super::*;
    use crate::logging::MemoryLog;

    fn setup(identifier: &str, repo: &std::path::Path, home: &std::path::Path) -> CommandSetup {
        CommandSetup {
            platform: Platform::from_identifier(identifier),
            roots: Roots::new(repo.to_path_buf(), home.to_path_buf()),
        }
    }

    #[test]
    fn startup_lines_describe_the_run() {
        let repo = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        let log = MemoryLog::default();

        execute(Direction::Sync, &setup("linux", repo.path(), home.path()), &log);

        let info = log.at(tracing::Level::INFO);
        assert_eq!(info[0], "os: linux (linux)");
        assert_eq!(info[1], format!("repo root: {}", repo.path().display()));
        assert_eq!(info[2], format!("home root: {}", home.path().display()));
        assert_eq!(info[3], "command: sync");
        assert_eq!(info[4], "Syncing dotfiles into repository");
    }

    #[test]
    fn empty_repository_skips_every_applicable_entry() {
        let repo = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        let log = MemoryLog::default();

        let report = execute(
            Direction::Write,
            &setup("Windows 11", repo.path(), home.path()),
            &log,
        );

        assert_eq!(report.skipped_count(), 7);
        assert_eq!(report.failure_count(), 0);
        assert_eq!(fs::read_dir(home.path()).unwrap().count(), 0);
    }
}
