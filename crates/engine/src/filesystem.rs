use crate::error::{EngineError, Result};
use ignore::{DirEntry, WalkBuilder};
use std::path::{Path, PathBuf};

/// Depth-first walk of `root` yielding every regular file below it.
///
/// Parents come before their children and siblings are visited in file-name
/// order. Directories are descended but not yielded; symlinks, devices and
/// other special files are skipped. No ignore files or hidden-file rules
/// apply. A root that is itself a regular file yields just that file.
pub fn regular_files(root: &Path) -> impl Iterator<Item = Result<PathBuf>> {
    WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build()
        .filter_map(|entry| match entry {
            Ok(entry) => classify(entry).map(Ok),
            Err(e) => Some(Err(EngineError::Walk(e))),
        })
}

fn classify(entry: DirEntry) -> Option<PathBuf> {
    let file_type = entry.file_type()?;
    if file_type.is_dir() {
        return None;
    }
    if !file_type.is_file() {
        log::debug!("skipping non-regular entry {}", entry.path().display());
        return None;
    }
    Some(entry.path().to_path_buf())
}
