//! Operating system detection.
use std::fmt;

/// Detected operating system platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Os {
    /// Linux, and any platform that is not recognised as macOS or Windows.
    Linux,
    /// Apple macOS.
    MacOs,
    /// Microsoft Windows.
    Windows,
}

impl Os {
    /// Every supported platform, in declaration order.
    pub const ALL: [Self; 3] = [Self::Linux, Self::MacOs, Self::Windows];

    /// Classify a platform identifier string such as `"Windows 11"` or
    /// `"macos"`.
    ///
    /// Matching is case-insensitive and substring based. `darwin` is checked
    /// before `win` since the former contains the latter. Anything that is
    /// not recognised falls back to [`Os::Linux`].
    ///
    /// # Examples
    ///
    /// ```
    /// use dotfile_sync::platform::Os;
    ///
    /// assert_eq!(Os::from_identifier("Windows 11"), Os::Windows);
    /// assert_eq!(Os::from_identifier("Darwin"), Os::MacOs);
    /// assert_eq!(Os::from_identifier("FreeBSD"), Os::Linux);
    /// ```
    #[must_use]
    pub fn from_identifier(identifier: &str) -> Self {
        let id = identifier.to_lowercase();
        if id.contains("darwin") {
            Self::MacOs
        } else if id.contains("win") {
            Self::Windows
        } else if id.contains("mac") {
            Self::MacOs
        } else {
            Self::Linux
        }
    }

    /// Single-bit mask used by [`OsSet`](crate::catalog::OsSet).
    pub(crate) const fn bit(self) -> u8 {
        match self {
            Self::Linux => 0b001,
            Self::MacOs => 0b010,
            Self::Windows => 0b100,
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linux => write!(f, "linux"),
            Self::MacOs => write!(f, "macos"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

/// Platform information for the current system.
#[derive(Debug, Clone)]
pub struct Platform {
    /// Operating system the catalog is filtered by.
    pub os: Os,
    /// Raw identifier the OS was classified from.
    pub identifier: String,
}

impl Platform {
    /// Detect the current platform from the identifier reported by the Rust
    /// runtime.
    #[must_use]
    pub fn detect() -> Self {
        Self::from_identifier(std::env::consts::OS)
    }

    /// Build a platform from an explicit identifier string.
    #[must_use]
    pub fn from_identifier(identifier: &str) -> Self {
        Self {
            os: Os::from_identifier(identifier),
            identifier: identifier.to_string(),
        }
    }
}
