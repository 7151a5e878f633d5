use std::io;
use std::process::ExitCode;

use clap::Parser;

use imgcheck::cli::{self, Cli};
use imgcheck::logging;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(logging::DEFAULT_LEVEL);

    let stdout = io::stdout();
    match cli::run(&cli, &mut stdout.lock()) {
        Ok(status) => ExitCode::from(status),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
