// crates/cli/src/config.rs
use crate::args::Args;
pub use lu_engine::config::Config as EngineConfig;

/// Engine settings plus the output choices that only matter to the CLI.
#[derive(Debug, Clone)]
pub struct Config {
    pub engine: EngineConfig,
    /// One row per root label instead of one per file.
    pub summarize: bool,
    /// Append a `total` row.
    pub grand_total: bool,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let engine = EngineConfig {
            roots: args.dirs,
            buffer_size: args.buffer_size,
            strict: !args.keep_going,
            ..EngineConfig::default()
        };

        Self {
            engine,
            summarize: args.summarize,
            grand_total: args.grand_total,
        }
    }
}
