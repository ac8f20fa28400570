// crates/cli/src/presentation.rs
use crate::config::Config;
use lu_engine::stats::RunResult;
use std::io::{self, BufWriter, Write};

/// Write the selected view as `<count>\t<label>` rows, plus a `total` row if asked.
///
/// Per-file rows keep visitation order; per-root rows are sorted by label.
///
/// # Errors
/// Propagates write failures from `out`.
pub fn write_results<W: Write>(out: &mut W, result: &RunResult, config: &Config) -> io::Result<()> {
    let total = if config.summarize {
        for (label, count) in &result.roots {
            writeln!(out, "{count}\t{label}")?;
        }
        result.roots_total()
    } else {
        for entry in &result.files {
            writeln!(out, "{}\t{}", entry.count, entry.path.display())?;
        }
        result.files_total()
    };

    if config.grand_total {
        writeln!(out, "{total}\ttotal")?;
    }
    Ok(())
}

/// Print results to stdout in one buffered pass.
///
/// # Errors
/// Propagates write failures, including a closed pipe.
pub fn print_results(result: &RunResult, config: &Config) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_results(&mut out, result, config)?;
    out.flush()
}
