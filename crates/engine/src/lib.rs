// crates/engine/src/lib.rs
use std::path::PathBuf;

pub mod config;
pub mod counter;
pub mod error;
pub mod filesystem;
pub mod paths;
pub mod processor;
pub mod stats;

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::stats::RunResult;

/// Walk every configured root and count the newlines of each regular file.
///
/// Roots are processed in the order given. Relative roots are resolved
/// against `config.base_dir` (or the working directory) and roots that do
/// not exist are skipped, as are roots that are themselves symlinks. Results
/// are keyed by the root label as given, so two labels naming the same
/// directory are tallied separately.
///
/// # Errors
///
/// In strict mode the first walk or read error aborts the run. Otherwise
/// those errors are collected in `RunResult::errors` and the run continues.
/// Failing to determine the working directory, or to stat a root for any
/// reason other than it being absent, is always fatal.
pub fn run(config: &Config) -> Result<RunResult> {
    config.validate()?;

    let base_dir = match &config.base_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().map_err(EngineError::CurrentDir)?,
    };

    let mut result = RunResult::default();

    for label in &config.roots {
        let absolute = paths::resolve_root(label, &base_dir);
        if !paths::root_exists(&absolute)? {
            log::debug!("skipping missing root {label} ({})", absolute.display());
            continue;
        }
        if paths::is_symlink(&absolute)? {
            log::debug!("skipping symlinked root {label} ({})", absolute.display());
            continue;
        }
        let walk_root = paths::lexical_clean(&absolute);
        log::info!("walking {}", walk_root.display());
        result.open_root(label);

        for item in filesystem::regular_files(&walk_root) {
            let outcome =
                item.and_then(|path: PathBuf| processor::process_file(&path, config.buffer_size));
            match outcome {
                Ok(entry) => result.record(label, entry),
                Err(e) if config.strict => return Err(e),
                Err(e) => {
                    log::debug!("continuing after error: {e}");
                    result.errors.push(e);
                }
            }
        }
    }

    Ok(result)
}
