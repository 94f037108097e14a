//! Dotfile synchronisation between a repository checkout and `$HOME`.
//!
//! A compiled-in catalog maps repository paths to home paths per platform.
//! `write` publishes the repository copies into the home directory; `sync`
//! pulls the home copies back into the repository.
//!
//! - **[`catalog`]**: the entry list and overlap checks
//! - **[`platform`]**: operating system detection
//! - **[`copy`]**: recursive, additive file and directory copy
//! - **[`sync`]**: per-entry orchestration with failure isolation
//! - **[`commands`]**: environment setup for the CLI
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod copy;
pub mod error;
pub mod logging;
pub mod platform;
pub mod sync;

/// Version string reported by `--version`.
///
/// Uses the `DOTFILE_SYNC_VERSION` value captured at build time, falling back
/// to the package version.
#[must_use]
pub const fn version() -> &'static str {
    match option_env!("DOTFILE_SYNC_VERSION") {
        Some(v) => v,
        None => env!("CARGO_PKG_VERSION"),
    }
}
