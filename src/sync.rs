//! Runs the copy engine over the catalog in one direction.
//!
//! Entries are processed strictly in catalog order. A failing entry is logged
//! and skipped; it never stops the remaining entries.
use std::fmt;
use std::path::PathBuf;

use crate::catalog::{self, Entry};
use crate::copy::{Copier, CopyOutcome};
use crate::error::{CopyError, EnvironmentError};
use crate::logging::Log;
use crate::platform::Os;

/// Which way files flow between the repository and the home directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Direction {
    /// Repository → home directory.
    Write,
    /// Home directory → repository.
    Sync,
}

impl Direction {
    /// Absolute `(source, target)` paths for `entry`.
    #[must_use]
    pub fn endpoints(self, entry: &Entry, roots: &Roots) -> (PathBuf, PathBuf) {
        let repo = roots.repo.join(entry.repo_path);
        let home = roots.home.join(entry.home_path);
        match self {
            Self::Write => (repo, home),
            Self::Sync => (home, repo),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Write => write!(f, "write"),
            Self::Sync => write!(f, "sync"),
        }
    }
}

/// The two directories every catalog path is resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roots {
    /// Repository checkout (the working directory).
    pub repo: PathBuf,
    /// The invoking user's home directory.
    pub home: PathBuf,
}

impl Roots {
    /// Create roots from explicit paths.
    #[must_use]
    pub const fn new(repo: PathBuf, home: PathBuf) -> Self {
        Self { repo, home }
    }

    /// Resolve the working directory and the home directory of the current
    /// process.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be read or no home
    /// directory variable is set.
    pub fn resolve() -> Result<Self, EnvironmentError> {
        let cwd = std::env::current_dir().map_err(EnvironmentError::CurrentDir)?;
        let repo = dunce::canonicalize(&cwd).unwrap_or(cwd);
        Ok(Self::new(repo, home_dir()?))
    }
}

/// `HOME`, or on Windows `USERPROFILE` falling back to `HOME`.
fn home_dir() -> Result<PathBuf, EnvironmentError> {
    let home = if cfg!(target_os = "windows") {
        std::env::var_os("USERPROFILE")
            .or_else(|| std::env::var_os("HOME"))
            .ok_or(EnvironmentError::HomeNotSet("USERPROFILE"))?
    } else {
        std::env::var_os("HOME").ok_or(EnvironmentError::HomeNotSet("HOME"))?
    };
    Ok(PathBuf::from(home))
}

/// Result of processing one catalog entry.
#[derive(Debug)]
pub enum EntryStatus {
    /// The entry does not apply to the current platform and was not touched.
    NotApplicable,
    /// The source did not exist.
    SkippedMissing,
    /// The entry was copied.
    Copied(CopyOutcome),
    /// The copy failed part-way; earlier files of the entry may have been
    /// written.
    Failed(CopyError),
}

/// One processed entry.
#[derive(Debug)]
pub struct EntryReport {
    /// The catalog entry.
    pub entry: Entry,
    /// What happened to it.
    pub status: EntryStatus,
}

/// Per-entry results of a run, in catalog order.
#[derive(Debug, Default)]
pub struct SyncReport {
    /// One report per catalog entry, including those not applicable.
    pub entries: Vec<EntryReport>,
}

impl SyncReport {
    /// Number of entries that failed.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.count(|s| matches!(s, EntryStatus::Failed(_)))
    }

    /// Number of entries copied.
    #[must_use]
    pub fn copied_count(&self) -> usize {
        self.count(|s| matches!(s, EntryStatus::Copied(_)))
    }

    /// Number of entries skipped because their source was missing.
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.count(|s| matches!(s, EntryStatus::SkippedMissing))
    }

    fn count(&self, pred: impl Fn(&EntryStatus) -> bool) -> usize {
        self.entries.iter().filter(|r| pred(&r.status)).count()
    }
}

/// Copy every entry of `entries` that applies to `os` in `direction`.
///
/// Overlapping entries are reported as warnings before any copy starts.
pub fn run(
    direction: Direction,
    roots: &Roots,
    os: Os,
    entries: &[Entry],
    copier: &dyn Copier,
    log: &dyn Log,
) -> SyncReport {
    for overlap in catalog::overlapping_targets(entries, os) {
        log.warn(&format!("{overlap}; their copies will overwrite each other"));
    }

    let mut report = SyncReport::default();
    for entry in entries {
        let status = if entry.applies_to(os) {
            process(direction, roots, entry, copier, log)
        } else {
            log.debug(&format!("not applicable on {os}: {entry}"));
            EntryStatus::NotApplicable
        };
        report.entries.push(EntryReport {
            entry: *entry,
            status,
        });
    }
    report
}

fn process(
    direction: Direction,
    roots: &Roots,
    entry: &Entry,
    copier: &dyn Copier,
    log: &dyn Log,
) -> EntryStatus {
    let (source, target) = direction.endpoints(entry, roots);
    match copier.copy(&source, &target) {
        Ok(CopyOutcome::SkippedMissing) => EntryStatus::SkippedMissing,
        Ok(outcome) => EntryStatus::Copied(outcome),
        Err(e) => {
            log.error(&format!("failed to process {entry}: {}", ErrorChain(&e)));
            EntryStatus::Failed(e)
        }
    }
}

/// Borrowed view of a [`CopyError`] that renders its full source chain.
struct ErrorChain<'a>(&'a CopyError);

impl fmt::Display for ErrorChain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut current: Option<&dyn std::error::Error> = Some(self.0);
        let mut first = true;
        while let Some(err) = current {
            if !first {
                write!(f, ": ")?;
            }
            write!(f, "{err}")?;
            first = false;
            current = err.source();
        }
        Ok(())
    }
}
