//! shlerp - dev project backups made easy
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error
//! - 2: No rule could be detected, pass one with `--rule`

use clap::Parser;

use shlerp::exit_codes::EXIT_ERROR;
use shlerp::logging::configure_logging;
use shlerp::{run, Cli, RunOutcome};

fn main() {
    let cli = Cli::parse();
    configure_logging(cli.debug, cli.quiet);

    let exit_code = match run(&cli) {
        Ok(outcome) => {
            if let RunOutcome::Detected(name) = &outcome {
                println!("{}", name);
            }
            outcome.exit_code()
        }
        Err(e) => {
            tracing::error!("{:#}", e);
            EXIT_ERROR
        }
    };
    std::process::exit(exit_code);
}
