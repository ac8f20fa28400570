use clap::Parser;
use lu_cli::args::Args;
use lu_cli::config::Config;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    lu_cli::logging::init(args.verbose);

    let config = Config::from(args);

    match lu_cli::execute(&config) {
        Ok(code) => code,
        Err(e) => {
            log::debug!("aborting: {e:?}");
            eprintln!("lu: {e}");
            ExitCode::FAILURE
        }
    }
}
