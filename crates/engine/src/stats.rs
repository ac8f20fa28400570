use crate::error::EngineError;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Newline count of one regular file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    pub count: usize,
}

impl FileEntry {
    pub const fn new(path: PathBuf, count: usize) -> Self {
        Self { path, count }
    }
}

/// Everything a single run produced.
#[derive(Debug, Default)]
pub struct RunResult {
    /// Files in visitation order.
    pub files: Vec<FileEntry>,
    /// Accumulated count per root label, keyed by the label as given.
    pub roots: BTreeMap<String, usize>,
    /// Errors tolerated in non-strict mode. Always empty in strict mode.
    pub errors: Vec<EngineError>,
}

impl RunResult {
    /// Register an existing root so it is reported even when it holds no files.
    pub fn open_root(&mut self, label: &str) {
        self.roots.entry(label.to_owned()).or_insert(0);
    }

    pub fn record(&mut self, label: &str, entry: FileEntry) {
        *self.roots.entry(label.to_owned()).or_insert(0) += entry.count;
        self.files.push(entry);
    }

    pub fn files_total(&self) -> usize {
        self.files.iter().map(|f| f.count).sum()
    }

    pub fn roots_total(&self) -> usize {
        self.roots.values().sum()
    }
}
