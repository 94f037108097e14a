//! Recursive file and directory copy.
//!
//! Copies are additive: existing target files are replaced, but nothing that
//! exists only on the target side is ever removed.
use std::fs;
use std::io;
use std::path::Path;

use crate::error::CopyError;
use crate::logging::Log;

/// What a single [`Copier::copy`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The source does not exist; the target was left untouched.
    SkippedMissing,
    /// A single file was copied.
    File,
    /// A directory tree was copied.
    Directory {
        /// Directories created or reused on the target side, root included.
        dirs: usize,
        /// Files copied.
        files: usize,
    },
}

/// Copies one source path onto one target path.
#[cfg_attr(test, mockall::automock)]
pub trait Copier {
    /// Copy `source` to `target`, recursing into directories.
    ///
    /// # Errors
    ///
    /// Returns an error if a target directory cannot be created, a source
    /// directory cannot be read, or a file cannot be copied.
    fn copy(&self, source: &Path, target: &Path) -> Result<CopyOutcome, CopyError>;
}

/// [`Copier`] backed by [`std::fs`].
pub struct FsCopier<'a> {
    log: &'a dyn Log,
}

impl std::fmt::Debug for FsCopier<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FsCopier").field("log", &"<dyn Log>").finish()
    }
}

impl<'a> FsCopier<'a> {
    /// Create a copier that reports progress to `log`.
    #[must_use]
    pub const fn new(log: &'a dyn Log) -> Self {
        Self { log }
    }

    /// Pre-order walk: `dst` is created before anything inside `src` is
    /// visited.
    ///
    /// Symlinks inside the tree are never descended into. A link to a file is
    /// copied as that file's content; a link to a directory is reproduced as
    /// an empty directory.
    fn copy_dir(
        &self,
        src: &Path,
        dst: &Path,
        dirs: &mut usize,
        files: &mut usize,
    ) -> Result<(), CopyError> {
        fs::create_dir_all(dst).map_err(|source| CopyError::CreateDir {
            path: dst.to_path_buf(),
            source,
        })?;
        *dirs += 1;

        let read_dir_err = |source: io::Error| CopyError::ReadDir {
            path: src.to_path_buf(),
            source,
        };
        for entry in fs::read_dir(src).map_err(read_dir_err)? {
            let entry = entry.map_err(read_dir_err)?;
            let file_type = entry.file_type().map_err(read_dir_err)?;
            let src_path = entry.path();
            let dst_path = dst.join(entry.file_name());
            if file_type.is_dir() {
                self.copy_dir(&src_path, &dst_path, dirs, files)?;
            } else if file_type.is_symlink() && src_path.is_dir() {
                fs::create_dir_all(&dst_path).map_err(|source| CopyError::CreateDir {
                    path: dst_path.clone(),
                    source,
                })?;
                self.log.debug(&format!(
                    "created {} for linked directory {}",
                    dst_path.display(),
                    src_path.display()
                ));
                *dirs += 1;
            } else {
                self.copy_file(&src_path, &dst_path)?;
                self.log.debug(&format!("copied {}", dst_path.display()));
                *files += 1;
            }
        }
        Ok(())
    }

    /// Replace `dst` with a copy of `src` and carry timestamps over.
    fn copy_file(&self, src: &Path, dst: &Path) -> Result<(), CopyError> {
        remove_existing(dst)?;
        fs::copy(src, dst).map_err(|source| CopyError::CopyFile {
            from: src.to_path_buf(),
            to: dst.to_path_buf(),
            source,
        })?;
        if let Err(e) = copy_times(src, dst) {
            self.log.debug(&format!(
                "could not preserve timestamps on {}: {e}",
                dst.display()
            ));
        }
        Ok(())
    }
}

impl Copier for FsCopier<'_> {
    fn copy(&self, source: &Path, target: &Path) -> Result<CopyOutcome, CopyError> {
        if !source.exists() {
            self.log
                .info(&format!("skipping missing source: {}", source.display()));
            return Ok(CopyOutcome::SkippedMissing);
        }

        let meta = fs::metadata(source).map_err(|e| CopyError::Inspect {
            path: source.to_path_buf(),
            source: e,
        })?;

        if meta.is_dir() {
            let (mut dirs, mut files) = (0, 0);
            self.copy_dir(source, target, &mut dirs, &mut files)?;
            self.log.info(&format!(
                "copied directory: {} -> {}",
                source.display(),
                target.display()
            ));
            Ok(CopyOutcome::Directory { dirs, files })
        } else {
            ensure_parent_dir(target)?;
            self.copy_file(source, target)?;
            self.log.info(&format!(
                "copied file: {} -> {}",
                source.display(),
                target.display()
            ));
            Ok(CopyOutcome::File)
        }
    }
}

/// Ensure the parent directory of `path` exists, creating it (and any
/// ancestors) if necessary.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_parent_dir(path: &Path) -> Result<(), CopyError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| CopyError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Remove an existing file or symlink at `path`, including broken symlinks.
///
/// Does nothing if `path` does not exist.
///
/// # Errors
///
/// Returns an error if the path exists but cannot be removed, which includes
/// the case where it is a directory.
pub fn remove_existing(path: &Path) -> Result<(), CopyError> {
    if path.symlink_metadata().is_ok() {
        fs::remove_file(path).map_err(|source| CopyError::RemoveExisting {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Copy access and modification times from `src` to `dst`.
///
/// Permission bits are already carried over by [`fs::copy`].
fn copy_times(src: &Path, dst: &Path) -> io::Result<()> {
    let meta = fs::metadata(src)?;
    let mut times = fs::FileTimes::new().set_modified(meta.modified()?);
    if let Ok(accessed) = meta.accessed() {
        times = times.set_accessed(accessed);
    }
    // Windows needs write access to change file times; Unix only needs
    // ownership.
    let file = if cfg!(windows) {
        fs::File::options().write(true).open(dst)?
    } else {
        fs::File::open(dst)?
    };
    file.set_times(times)
}
