use clap::Parser;

use framevision_roi::cli::Cli;
use framevision_roi::{commands, init_tracing};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = commands::run(cli) {
        tracing::debug!(exit_code = err.exit_code(), "Command failed");
        eprintln!("error: {}", err);
        std::process::exit(err.exit_code());
    }
}
