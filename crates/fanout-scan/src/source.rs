//! Source-tree file enumeration.

use std::path::{Path, PathBuf};

use fanout_core::{ExcludeSet, ScanError};

use crate::walk::{excluded_walker, walk_error};

/// Walks a source tree once, collecting every regular file eligible for
/// distribution.
#[derive(Debug, Clone)]
pub struct SourceScanner {
    excludes: ExcludeSet,
}

impl SourceScanner {
    /// Create a scanner with the given exclusion set.
    pub fn new(excludes: ExcludeSet) -> Self {
        Self { excludes }
    }

    /// Enumerate files under `root` in lexical depth-first order.
    ///
    /// Paths are absolute. Directories are never recorded; excluded
    /// directories contribute nothing, excluded files are skipped while
    /// their siblings are still visited. The first traversal error aborts
    /// the scan with no partial result.
    pub fn scan(&self, root: &Path) -> Result<Vec<PathBuf>, ScanError> {
        let root = root.canonicalize().map_err(|e| ScanError::io(root, e))?;
        if !root.is_dir() {
            return Err(ScanError::NotADirectory { path: root });
        }
        // The walker filters children as each directory is read; the root is
        // checked here so a root with an excluded name yields nothing.
        if root
            .file_name()
            .is_some_and(|name| self.excludes.is_excluded(name))
        {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in excluded_walker(&root, &self.excludes) {
            let mut entry = entry.map_err(|e| walk_error(&root, e))?;
            // A directory whose children could not be listed arrives as an
            // `Ok` entry with the failure stashed inside it.
            if let Some(err) = entry.read_children_error.take() {
                return Err(walk_error(&root, err));
            }
            if entry.file_type().is_file() {
                files.push(entry.path());
            }
        }

        tracing::debug!(root = %root.display(), count = files.len(), "source scan complete");
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_source_tree() -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        fs::create_dir(root.join("docs")).unwrap();
        fs::create_dir(root.join("docs/drafts")).unwrap();
        fs::write(root.join("b.txt"), "b").unwrap();
        fs::write(root.join("a.txt"), "a").unwrap();
        fs::write(root.join("docs/notes.md"), "notes").unwrap();
        fs::write(root.join("docs/drafts/wip.md"), "wip").unwrap();

        temp
    }

    #[test]
    fn test_scan_collects_files_in_lexical_depth_first_order() {
        let temp = create_source_tree();
        let root = temp.path().canonicalize().unwrap();

        let files = SourceScanner::new(ExcludeSet::new()).scan(temp.path()).unwrap();

        assert_eq!(
            files,
            vec![
                root.join("a.txt"),
                root.join("b.txt"),
                root.join("docs/drafts/wip.md"),
                root.join("docs/notes.md"),
            ]
        );
    }

    #[test]
    fn test_scan_never_records_directories() {
        let temp = create_source_tree();

        let files = SourceScanner::new(ExcludeSet::new()).scan(temp.path()).unwrap();

        assert!(files.iter().all(|p| p.is_file()));
    }

    #[test]
    fn test_excluded_directory_contributes_nothing() {
        let temp = create_source_tree();
        let git = temp.path().join(".git");
        fs::create_dir_all(git.join("objects")).unwrap();
        fs::write(git.join("HEAD"), "ref: refs/heads/main").unwrap();
        fs::write(git.join("objects/pack"), "data").unwrap();

        let files = SourceScanner::new(ExcludeSet::new()).scan(temp.path()).unwrap();

        assert_eq!(files.len(), 4);
        assert!(files.iter().all(|p| !p.components().any(|c| c.as_os_str() == ".git")));
    }

    #[test]
    fn test_excluded_file_skipped_but_siblings_kept() {
        let temp = create_source_tree();
        fs::write(temp.path().join(".gitignore"), "target/").unwrap();

        let files = SourceScanner::new(ExcludeSet::new()).scan(temp.path()).unwrap();

        assert!(files.iter().all(|p| p.file_name().unwrap() != ".gitignore"));
        assert!(files.iter().any(|p| p.file_name().unwrap() == "a.txt"));
        assert_eq!(files.len(), 4);
    }

    #[test]
    fn test_hidden_files_are_not_excluded_by_name_alone() {
        let temp = create_source_tree();
        fs::write(temp.path().join(".env"), "SECRET=1").unwrap();

        let files = SourceScanner::new(ExcludeSet::new()).scan(temp.path()).unwrap();

        assert!(files.iter().any(|p| p.file_name().unwrap() == ".env"));
    }

    #[test]
    fn test_extra_exclude_names_prune_too() {
        let temp = create_source_tree();

        let excludes = ExcludeSet::with_extra(["docs"]);
        let files = SourceScanner::new(excludes).scan(temp.path()).unwrap();

        let root = temp.path().canonicalize().unwrap();
        assert_eq!(files, vec![root.join("a.txt"), root.join("b.txt")]);
    }

    #[test]
    fn test_root_with_excluded_name_yields_empty_list() {
        let temp = TempDir::new().unwrap();
        let git_root = temp.path().join(".git");
        fs::create_dir(&git_root).unwrap();
        fs::write(git_root.join("config"), "core").unwrap();

        let files = SourceScanner::new(ExcludeSet::new()).scan(&git_root).unwrap();

        assert!(files.is_empty());
    }

    #[test]
    fn test_missing_root_is_not_found() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");

        let err = SourceScanner::new(ExcludeSet::new()).scan(&missing).unwrap_err();

        assert!(matches!(err, ScanError::NotFound { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_subdirectory_aborts_the_scan() {
        use std::os::unix::fs::PermissionsExt;

        let temp = create_source_tree();
        let locked = temp.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::write(locked.join("secret.txt"), "secret").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // A privileged process can list the directory anyway; nothing to
        // test then.
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let result = SourceScanner::new(ExcludeSet::new()).scan(temp.path());

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        assert!(matches!(result, Err(ScanError::PermissionDenied { .. })));
    }

    #[test]
    fn test_file_root_is_not_a_directory() {
        let temp = create_source_tree();
        let file = temp.path().join("a.txt");

        let err = SourceScanner::new(ExcludeSet::new()).scan(&file).unwrap_err();

        assert!(matches!(err, ScanError::NotADirectory { .. }));
    }
}
