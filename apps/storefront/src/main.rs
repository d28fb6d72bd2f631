//! # Storefront Entry Point
//!
//! Parses the command line and hands off to `storefront_lib::run`.
//! A failed command prints its `ApiError` as JSON on stderr and exits 1.

use std::process::ExitCode;

use clap::Parser;
use storefront_lib::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match storefront_lib::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let report = serde_json::to_string(&err).unwrap_or_else(|_| err.to_string());
            eprintln!("{}", report);
            ExitCode::FAILURE
        }
    }
}
