//! Command-line and HTTP front end for the behavioral deduction engine.

mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use deduction_ai::error::AppError;

/// Parses the command line and dispatches to the selected subcommand.
pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
