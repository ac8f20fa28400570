// crates/cli/src/args.rs
use crate::parsers;
use clap::{ArgAction, Parser, ValueHint};
use lu_engine::counter::DEFAULT_BUFFER_SIZE;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(name = "lu", version = crate::VERSION, about = "Display line usage statistics")]
pub struct Args {
    /// Directories to analyze
    #[arg(value_name = "DIRS", required = true, value_hint = ValueHint::DirPath)]
    pub dirs: Vec<String>,

    /// Display a grand total
    #[arg(short = 'c', long = "total")]
    pub grand_total: bool,

    /// Display an entry for each specified directory instead of each file
    #[arg(short = 's', long)]
    pub summarize: bool,

    /// Report unreadable files and keep counting instead of aborting
    #[arg(short = 'k', long)]
    pub keep_going: bool,

    /// Read buffer size per file (e.g. 4096, 64K, 1MiB)
    #[arg(
        short = 'b',
        long,
        value_name = "SIZE",
        default_value_t = DEFAULT_BUFFER_SIZE,
        value_parser = parsers::parse_buffer_size
    )]
    pub buffer_size: usize,

    /// Increase log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,
}
