use clap::Parser;
use tikdl_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Initialize logging as early as possible; verbosity comes from the CLI.
    if let Err(err) = logging::init_logging(cli.verbose) {
        eprintln!("tikdl: {:#}", err);
    }

    if let Err(err) = cli.run() {
        eprintln!("tikdl error: {:#}", err);
        std::process::exit(1);
    }
}
