//! Recursive enumeration of candidate log files.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Every file under `root` whose name ends in `.log`, sorted by file name at
/// each directory level so report order is stable across filesystems.
/// Unreadable directory entries are logged and skipped.
pub fn find_log_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("skipping unreadable entry: {e}");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "log"))
        .map(|entry| entry.into_path())
        .collect()
}
