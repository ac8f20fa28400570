use crate::error::{EngineError, Result};
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

/// Resolve a root label against `base` without touching the filesystem.
///
/// Absolute labels are returned untouched. Relative labels are joined to
/// `base` and lexically cleaned; symlinks are never resolved.
pub fn resolve_root(label: &str, base: &Path) -> PathBuf {
    let path = Path::new(label);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        lexical_clean(&base.join(path))
    }
}

/// Drop `.` components and fold `..` into its parent.
pub fn lexical_clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `/..` is `/`
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// Whether `path` exists. Symlinks are followed.
///
/// # Errors
/// Any metadata failure other than `NotFound`.
pub fn root_exists(path: &Path) -> Result<bool> {
    match std::fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(source) => Err(EngineError::RootMetadata {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Whether `path` itself is a symlink. The final component is not followed.
///
/// # Errors
/// Any metadata failure.
pub fn is_symlink(path: &Path) -> Result<bool> {
    std::fs::symlink_metadata(path)
        .map(|meta| meta.file_type().is_symlink())
        .map_err(|source| EngineError::RootMetadata {
            path: path.to_path_buf(),
            source,
        })
}
