//! Domain-specific error types.
//!
//! Internal modules return typed errors built with [`thiserror`]; the command
//! boundary converts them to [`anyhow::Error`] via the `?` operator.
//!
//! ```text
//! CopyError        : a single catalog entry could not be copied
//! EnvironmentError : the repository or home root could not be resolved
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while copying one catalog entry.
///
/// Each variant names the path the underlying I/O call failed on.
#[derive(Error, Debug)]
pub enum CopyError {
    /// The source exists but its metadata could not be read.
    #[error("reading metadata of {}", .path.display())]
    Inspect {
        /// Path that could not be inspected.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A target directory could not be created.
    #[error("creating directory {}", .path.display())]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A source directory could not be listed.
    #[error("reading directory {}", .path.display())]
    ReadDir {
        /// Directory that could not be listed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// An existing target file could not be replaced.
    #[error("removing existing {}", .path.display())]
    RemoveExisting {
        /// Target path that could not be removed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A file could not be copied.
    #[error("copying {} to {}", .from.display(), .to.display())]
    CopyFile {
        /// Source file.
        from: PathBuf,
        /// Target file.
        to: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

/// Errors raised while resolving the roots a run operates on.
#[derive(Error, Debug)]
pub enum EnvironmentError {
    /// The working directory could not be determined.
    #[error("cannot determine the current directory")]
    CurrentDir(#[source] io::Error),

    /// No home directory variable is set.
    #[error("{0} environment variable is not set")]
    HomeNotSet(&'static str),
}
