//! Name-based exclusion of filesystem entries.

use std::collections::HashSet;
use std::ffi::{OsStr, OsString};

/// Entry names every scan skips: version-control and editor metadata.
pub const DEFAULT_EXCLUDES: [&str; 4] = [".git", ".idea", ".vscode", ".gitignore"];

/// Immutable set of entry base names excluded from traversal.
///
/// Matching is by exact base name, independent of depth or parent path.
/// When a matching entry is a directory the walker prunes the whole
/// subtree; a matching file is omitted while its siblings are still
/// visited.
#[derive(Debug, Clone)]
pub struct ExcludeSet {
    names: HashSet<OsString>,
}

impl ExcludeSet {
    /// Create the set with the built-in default names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the set from the default names plus caller-supplied extras.
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut set = Self::default();
        set.names.extend(extra.into_iter().map(Into::into));
        set
    }

    /// Check whether an entry name is excluded.
    pub fn is_excluded(&self, name: &OsStr) -> bool {
        self.names.contains(name)
    }

    /// Number of excluded names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the set has no names at all.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for ExcludeSet {
    fn default() -> Self {
        Self {
            names: DEFAULT_EXCLUDES.iter().map(OsString::from).collect(),
        }
    }
}
