//! Console logging built on [`tracing`].

mod logger;
mod subscriber;

pub use logger::Logger;
pub use subscriber::{LOG_ENV, init_subscriber};

#[cfg(test)]
pub(crate) use logger::MemoryLog;

/// Abstraction over logging backends.
///
/// The orchestrator and copy engine log through this trait so tests can
/// capture output with an in-memory implementation.
pub trait Log: Send + Sync {
    /// Log a stage header (major section).
    fn stage(&self, msg: &str);
    /// Log an informational message.
    fn info(&self, msg: &str);
    /// Log a debug message (shown on the console only with `--verbose`).
    fn debug(&self, msg: &str);
    /// Log a warning message.
    fn warn(&self, msg: &str);
    /// Log an error message.
    fn error(&self, msg: &str);
}
