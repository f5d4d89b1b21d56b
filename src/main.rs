//! Fundscout CLI entrypoint.
//!
//! Checks GitHub repositories for Potlock `FUNDING.json` manifests, proposes
//! new manifests, and checks a list of repositories at once, listing them by
//! star count.

use std::io;
use std::process::ExitCode;

use fundscout::{FundscoutConfig, OperationMode, ResolutionError};
use ortho_config::OrthoConfig;
use tracing_subscriber::EnvFilter;

mod cli;

const DEFAULT_LOG_FILTER: &str = "warn";

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::debug!(%error, "run failed");
            if cli::output::write_error(&mut io::stderr().lock(), &error).is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ResolutionError> {
    let config = load_config()?;

    match config.operation_mode() {
        OperationMode::Check => cli::check::run(&config).await,
        OperationMode::Propose => cli::propose::run(&config).await,
        OperationMode::Leaderboard => cli::leaderboard::run(&config).await,
    }
}

/// Installs a stderr subscriber filtered by `RUST_LOG`, defaulting to
/// warnings only.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ResolutionError::Configuration`] when ortho-config fails to
/// parse arguments or load configuration files.
fn load_config() -> Result<FundscoutConfig, ResolutionError> {
    FundscoutConfig::load().map_err(|error| ResolutionError::Configuration {
        message: error.to_string(),
    })
}
