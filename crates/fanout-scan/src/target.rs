//! Target-tree destination enumeration.

use std::path::{Path, PathBuf};

use fanout_core::{ExcludeSet, ScanError};

use crate::walk::{excluded_walker, walk_error};

/// Depth below the target root at which a directory becomes a destination.
const QUALIFYING_DEPTH: usize = 2;

/// Walks a target tree once, collecting destination folders.
///
/// Only directories nested at least two levels below the target root
/// qualify. The root's immediate children are category folders, not
/// destinations, and are skipped along with every file.
#[derive(Debug, Clone)]
pub struct TargetScanner {
    excludes: ExcludeSet,
}

impl TargetScanner {
    /// Create a scanner with the given exclusion set.
    pub fn new(excludes: ExcludeSet) -> Self {
        Self { excludes }
    }

    /// Enumerate qualifying folders under `root` in lexical depth-first
    /// order.
    ///
    /// Paths are absolute. Files are never recorded, and excluded
    /// directories are pruned together with their subtrees. The first
    /// traversal error aborts the scan with no partial result.
    pub fn scan(&self, root: &Path) -> Result<Vec<PathBuf>, ScanError> {
        let root = root.canonicalize().map_err(|e| ScanError::io(root, e))?;
        if !root.is_dir() {
            return Err(ScanError::NotADirectory { path: root });
        }
        if root
            .file_name()
            .is_some_and(|name| self.excludes.is_excluded(name))
        {
            return Ok(Vec::new());
        }

        let mut folders = Vec::new();
        for entry in excluded_walker(&root, &self.excludes) {
            let mut entry = entry.map_err(|e| walk_error(&root, e))?;
            // A directory whose children could not be listed arrives as an
            // `Ok` entry with the failure stashed inside it.
            if let Some(err) = entry.read_children_error.take() {
                return Err(walk_error(&root, err));
            }
            if entry.file_type().is_dir() && entry.depth() >= QUALIFYING_DEPTH {
                folders.push(entry.path());
            }
        }

        tracing::debug!(root = %root.display(), count = folders.len(), "target scan complete");
        Ok(folders)
    }
}
