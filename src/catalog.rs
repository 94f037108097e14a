//! The compiled-in list of dotfiles and the platforms each applies to.
use std::fmt;
use std::path::Path;

use crate::platform::Os;

/// A small fixed-size set of [`Os`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OsSet(u8);

impl OsSet {
    /// Linux, macOS and Windows.
    pub const ALL: Self = Self::of(&Os::ALL);
    /// Linux and macOS.
    pub const UNIX: Self = Self::of(&[Os::Linux, Os::MacOs]);
    /// Windows only.
    pub const WINDOWS: Self = Self::of(&[Os::Windows]);

    /// Build a set from a list of platforms. Duplicates are ignored.
    #[must_use]
    pub const fn of(platforms: &[Os]) -> Self {
        let mut bits = 0u8;
        let mut rest = platforms;
        while let [os, tail @ ..] = rest {
            bits |= os.bit();
            rest = tail;
        }
        Self(bits)
    }

    /// Whether `os` is a member of this set.
    #[must_use]
    pub const fn contains(self, os: Os) -> bool {
        self.0 & os.bit() != 0
    }

    /// Whether the set has no members.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over the members in [`Os::ALL`] order.
    pub fn iter(self) -> impl Iterator<Item = Os> {
        Os::ALL.into_iter().filter(move |os| self.contains(*os))
    }
}

impl fmt::Display for OsSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.iter().map(|os| os.to_string()).collect();
        write!(f, "{}", names.join(","))
    }
}

/// One mapping between a repository-relative path and a home-relative path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    /// Path relative to the repository root.
    pub repo_path: &'static str,
    /// Path relative to the home directory.
    pub home_path: &'static str,
    /// Platforms the entry is synchronised on.
    pub supported_os: OsSet,
}

impl Entry {
    /// Create a catalog entry.
    #[must_use]
    pub const fn new(repo_path: &'static str, home_path: &'static str, supported_os: OsSet) -> Self {
        Self {
            repo_path,
            home_path,
            supported_os,
        }
    }

    /// Whether the entry applies to `os`.
    #[must_use]
    pub const fn applies_to(&self, os: Os) -> bool {
        self.supported_os.contains(os)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} <-> ~/{} [{}]",
            self.repo_path, self.home_path, self.supported_os
        )
    }
}

/// Every dotfile managed by the tool, in processing order.
pub const CATALOG: &[Entry] = &[
    // All platforms
    Entry::new("git/.gitconfig", ".gitconfig", OsSet::ALL),
    Entry::new("git/.gitignore_global", ".gitignore_global", OsSet::ALL),
    // Unix
    Entry::new("nvim", ".config/nvim", OsSet::UNIX),
    Entry::new(".zprofile", ".zprofile", OsSet::UNIX),
    Entry::new(".zshrc", ".zshrc", OsSet::UNIX),
    Entry::new(".tmux.conf", ".tmux.conf", OsSet::UNIX),
    // Windows
    Entry::new("glazewm", ".glzr/glazewm", OsSet::WINDOWS),
    Entry::new("zebar", ".glzr/zebar", OsSet::WINDOWS),
    Entry::new("powershell", "Documents/PowerShell", OsSet::WINDOWS),
    Entry::new("nvim", "AppData/Local/nvim", OsSet::WINDOWS),
    Entry::new("idea/.ideavimrc", ".ideavimrc", OsSet::WINDOWS),
];

/// Entries of `entries` that apply to `os`, in declaration order.
pub fn entries_for(entries: &[Entry], os: Os) -> impl Iterator<Item = &Entry> {
    entries.iter().filter(move |e| e.applies_to(os))
}

/// Which side of an [`Entry`] two paths collide on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Both entries write into the same part of the repository.
    Repo,
    /// Both entries write into the same part of the home directory.
    Home,
}

/// A pair of entries active on the same platform whose paths overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlap {
    /// Side the overlap occurs on.
    pub side: Side,
    /// Earlier entry in catalog order.
    pub first: Entry,
    /// Later entry in catalog order.
    pub second: Entry,
}

impl fmt::Display for Overlap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b) = match self.side {
            Side::Repo => (self.first.repo_path, self.second.repo_path),
            Side::Home => (self.first.home_path, self.second.home_path),
        };
        let side = match self.side {
            Side::Repo => "repository",
            Side::Home => "home",
        };
        write!(f, "{side} paths '{a}' and '{b}' overlap")
    }
}

/// Find entry pairs active for `os` whose repository or home paths are equal
/// or nested inside one another.
///
/// Two such entries would write over each other's output within a single run
/// in one of the two directions.
#[must_use]
pub fn overlapping_targets(entries: &[Entry], os: Os) -> Vec<Overlap> {
    let active: Vec<&Entry> = entries_for(entries, os).collect();
    let mut overlaps = Vec::new();
    for (i, first) in active.iter().enumerate() {
        for second in active.iter().skip(i + 1) {
            if paths_overlap(first.repo_path, second.repo_path) {
                overlaps.push(Overlap {
                    side: Side::Repo,
                    first: **first,
                    second: **second,
                });
            }
            if paths_overlap(first.home_path, second.home_path) {
                overlaps.push(Overlap {
                    side: Side::Home,
                    first: **first,
                    second: **second,
                });
            }
        }
    }
    overlaps
}

fn paths_overlap(a: &str, b: &str) -> bool {
    let (a, b) = (Path::new(a), Path::new(b));
    a.starts_with(b) || b.starts_with(a)
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_eleven_entries() {
        assert_eq!(CATALOG.len(), 11);
    }

    #[test]
    fn every_entry_supports_some_platform() {
        for entry in CATALOG {
            assert!(!entry.supported_os.is_empty(), "{entry} has no platform");
        }
    }

    #[test]
    fn every_entry_uses_relative_paths() {
        for entry in CATALOG {
            assert!(Path::new(entry.repo_path).is_relative(), "{entry}");
            assert!(Path::new(entry.home_path).is_relative(), "{entry}");
            assert!(!entry.repo_path.starts_with('/'), "{entry}");
            assert!(!entry.home_path.starts_with('/'), "{entry}");
        }
    }

    #[test]
    fn catalog_has_no_overlaps_on_any_platform() {
        for os in Os::ALL {
            let overlaps = overlapping_targets(CATALOG, os);
            assert!(overlaps.is_empty(), "{os}: {overlaps:?}");
        }
    }

    #[test]
    fn nvim_entries_are_mutually_exclusive() {
        let nvim: Vec<&Entry> = CATALOG.iter().filter(|e| e.repo_path == "nvim").collect();
        assert_eq!(nvim.len(), 2);
        for os in Os::ALL {
            assert_eq!(nvim.iter().filter(|e| e.applies_to(os)).count(), 1);
        }
    }

    #[test]
    fn linux_and_macos_share_entries() {
        let linux: Vec<&Entry> = entries_for(CATALOG, Os::Linux).collect();
        let macos: Vec<&Entry> = entries_for(CATALOG, Os::MacOs).collect();
        assert_eq!(linux, macos);
        assert_eq!(linux.len(), 6);
    }

    #[test]
    fn windows_entries_in_declaration_order() {
        let listing: Vec<String> = entries_for(CATALOG, Os::Windows)
            .map(|e| format!("{} -> {}", e.repo_path, e.home_path))
            .collect();
        insta::assert_snapshot!(listing.join("\n"), @r"
        git/.gitconfig -> .gitconfig
        git/.gitignore_global -> .gitignore_global
        glazewm -> .glzr/glazewm
        zebar -> .glzr/zebar
        powershell -> Documents/PowerShell
        nvim -> AppData/Local/nvim
        idea/.ideavimrc -> .ideavimrc
        ");
    }

    #[test]
    fn os_set_membership() {
        assert!(OsSet::ALL.contains(Os::Linux));
        assert!(OsSet::ALL.contains(Os::MacOs));
        assert!(OsSet::ALL.contains(Os::Windows));
        assert!(OsSet::UNIX.contains(Os::MacOs));
        assert!(!OsSet::UNIX.contains(Os::Windows));
        assert!(!OsSet::WINDOWS.contains(Os::Linux));
        assert!(OsSet::of(&[]).is_empty());
        assert_eq!(OsSet::of(&[Os::Windows, Os::Windows]), OsSet::WINDOWS);
    }

    #[test]
    fn os_set_display() {
        assert_eq!(OsSet::ALL.to_string(), "linux,macos,windows");
        assert_eq!(OsSet::WINDOWS.to_string(), "windows");
    }

    #[test]
    fn entry_display_names_both_paths() {
        let entry = CATALOG[0];
        assert_eq!(
            entry.to_string(),
            "git/.gitconfig <-> ~/.gitconfig [linux,macos,windows]"
        );
    }

    #[test]
    fn detects_duplicate_targets() {
        let entries = [
            Entry::new("nvim", ".config/nvim", OsSet::ALL),
            Entry::new("nvim-alt", ".config/nvim", OsSet::UNIX),
        ];
        let overlaps = overlapping_targets(&entries, Os::Linux);
        assert_eq!(overlaps.len(), 1);
        assert_eq!(overlaps[0].side, Side::Home);
        assert!(overlapping_targets(&entries, Os::Windows).is_empty());
    }

    #[test]
    fn detects_nested_targets() {
        let entries = [
            Entry::new("config", ".config", OsSet::ALL),
            Entry::new("config/nvim", ".config/nvim", OsSet::ALL),
        ];
        let overlaps = overlapping_targets(&entries, Os::Windows);
        assert_eq!(overlaps.len(), 2);
        assert_eq!(
            overlaps[1].to_string(),
            "home paths '.config' and '.config/nvim' overlap"
        );
    }

    #[test]
    fn sibling_prefixes_do_not_overlap() {
        let entries = [
            Entry::new(".zsh", ".zsh", OsSet::ALL),
            Entry::new(".zshrc", ".zshrc", OsSet::ALL),
        ];
        assert!(overlapping_targets(&entries, Os::Linux).is_empty());
    }
}
