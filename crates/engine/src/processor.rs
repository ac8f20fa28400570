use crate::counter::count_lines_with_capacity;
use crate::error::{EngineError, Result};
use crate::stats::FileEntry;
use std::fs::File;
use std::path::Path;

/// Open `path`, count its newlines and close it again.
///
/// The handle is dropped before returning, on success and on failure.
///
/// # Errors
/// `EngineError::FileRead` if the file cannot be opened or read.
pub fn process_file(path: &Path, buffer_size: usize) -> Result<FileEntry> {
    let file = File::open(path).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let count = count_lines_with_capacity(file, buffer_size).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    log::trace!("{count}\t{}", path.display());
    Ok(FileEntry::new(path.to_path_buf(), count))
}
