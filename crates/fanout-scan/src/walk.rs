//! Shared walker configuration for both scanners.

use std::path::Path;

use jwalk::{Parallelism, WalkDir};

use fanout_core::{ExcludeSet, ScanError};

/// Build the serial, name-sorted walker used by both scanners.
///
/// Excluded entries are dropped while each directory is read: an excluded
/// file never reaches the iterator, and an excluded directory is removed
/// before the walker can descend into it. Read failures reach the caller on
/// two paths: a failed entry is kept as an `Err` item, while a directory
/// whose children cannot be listed is yielded as `Ok` carrying the failure
/// in `read_children_error`. The scanners abort on either.
pub(crate) fn excluded_walker(root: &Path, excludes: &ExcludeSet) -> WalkDir {
    let excludes = excludes.clone();
    WalkDir::new(root)
        .parallelism(Parallelism::Serial)
        .sort(true)
        .skip_hidden(false)
        .follow_links(false)
        .process_read_dir(move |_depth, _dir_path, _state, children| {
            children.retain(|child| {
                child
                    .as_ref()
                    .map(|entry| !excludes.is_excluded(&entry.file_name))
                    .unwrap_or(true)
            });
        })
}

/// Convert a walker error into a [`ScanError`], attributed to the failing
/// path when known and to the scan root otherwise.
pub(crate) fn walk_error(root: &Path, err: jwalk::Error) -> ScanError {
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.to_path_buf());
    match err.into_io_error() {
        Some(io) => ScanError::io(path, io),
        None => ScanError::io(path, std::io::Error::other("directory walk failed")),
    }
}
