//! [`Log`] implementations.
use super::Log;

/// Logger that forwards every message to the global [`tracing`] dispatcher.
#[derive(Debug, Default, Clone, Copy)]
pub struct Logger;

impl Logger {
    /// Create a new logger.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Log for Logger {
    fn stage(&self, msg: &str) {
        tracing::info!(target: "dotfile_sync::stage", "{msg}");
    }

    fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }
}

/// Captures messages in memory for assertions in unit tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryLog {
    lines: std::sync::Mutex<Vec<(tracing::Level, String)>>,
}

#[cfg(test)]
impl MemoryLog {
    fn push(&self, level: tracing::Level, msg: &str) {
        self.lines
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push((level, msg.to_string()));
    }

    /// Messages recorded at `level`, in emission order.
    pub fn at(&self, level: tracing::Level) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

#[cfg(test)]
impl Log for MemoryLog {
    fn stage(&self, msg: &str) {
        self.push(tracing::Level::INFO, msg);
    }

    fn info(&self, msg: &str) {
        self.push(tracing::Level::INFO, msg);
    }

    fn debug(&self, msg: &str) {
        self.push(tracing::Level::DEBUG, msg);
    }

    fn warn(&self, msg: &str) {
        self.push(tracing::Level::WARN, msg);
    }

    fn error(&self, msg: &str) {
        self.push(tracing::Level::ERROR, msg);
    }
}
