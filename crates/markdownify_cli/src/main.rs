use std::io;
use std::process::ExitCode;

use clap::Parser;

mod cli;
mod logging;

fn main() -> ExitCode {
    let args = cli::Args::parse();
    logging::initialize(args.log_level, args.log_file.as_deref());

    let stdout = io::stdout();
    match cli::run(&args, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
