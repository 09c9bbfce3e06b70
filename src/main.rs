//! Paperdeck CLI entrypoint: browse or print the paper collection.

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use ortho_config::OrthoConfig;
use paperdeck::telemetry::StderrJsonlTelemetrySink;
use paperdeck::tui::set_telemetry_sink;
use paperdeck::{BrowseError, OperationMode, PaperdeckConfig};

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), BrowseError> {
    let config = load_config()?;

    if config.telemetry && !set_telemetry_sink(Arc::new(StderrJsonlTelemetrySink)) {
        tracing::debug!("telemetry sink already configured");
    }

    match config.operation_mode() {
        OperationMode::Browse => cli::browse_tui::run(&config).await,
        OperationMode::Print => cli::print::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`BrowseError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<PaperdeckConfig, BrowseError> {
    PaperdeckConfig::load().map_err(|error| BrowseError::Configuration {
        message: error.to_string(),
    })
}
