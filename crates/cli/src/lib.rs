// crates/cli/src/lib.rs
pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod parsers;
pub mod presentation;

use crate::config::Config;
use crate::error::Result;
use std::process::ExitCode;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run the engine and print its results.
///
/// Nothing is printed unless the engine finishes. Errors tolerated in
/// keep-going mode are reported on stderr after the results and turn the
/// exit code into a failure.
///
/// # Errors
/// Fatal engine errors and output write failures.
pub fn execute(config: &Config) -> Result<ExitCode> {
    let result = lu_engine::run(&config.engine)?;
    presentation::print_results(&result, config)?;

    for err in &result.errors {
        eprintln!("lu: {err}");
    }

    if result.errors.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
