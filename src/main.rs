//! automerge - GitHub Action entry point

mod cli;

use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, error};

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::Cli::parse();

    cli::logging::init(args.verbose);
    debug!(dry_run = args.dry_run, "starting automerge");

    match cli::run_merge(args).await {
        Ok(outcome) if outcome.is_failure() => {
            error!("{outcome}");
            ExitCode::FAILURE
        }
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("An unexpected error occurred: {e:#}");
            ExitCode::FAILURE
        }
    }
}
