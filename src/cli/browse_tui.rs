//! TUI mode for browsing papers.
//!
//! This module provides the entry point for the interactive terminal user
//! interface that shows the collection as cards with search and source
//! filtering.

use std::io::{self, Write};

use bubbletea_rs::Program;

use paperdeck::tui::{BrowserSettings, PaperApp, set_browser_settings, set_paper_gateway};
use paperdeck::{BrowseError, PaperdeckConfig, gateway_for};

/// Runs the TUI mode.
///
/// The load itself happens inside the program, so a retrieval failure is
/// shown in the status bar rather than returned here.
///
/// # Errors
///
/// Returns an error if:
/// - The data source or request timeout is invalid
/// - The HTTP client cannot be built
/// - The TUI fails to initialise
pub async fn run(config: &PaperdeckConfig) -> Result<(), BrowseError> {
    let source = config.resolve_data_source()?;
    let gateway = gateway_for(&source, config.request_timeout()?)?;

    // Store startup context in global state for Model::init() to retrieve.
    // If already set, the existing values remain.
    if !set_paper_gateway(gateway) {
        tracing::debug!("paper gateway already configured");
    }
    let settings = BrowserSettings {
        query: config.initial_query().to_owned(),
        source: config.initial_source().to_owned(),
        source_options: config.source_option_list(),
    };
    if !set_browser_settings(settings) {
        tracing::debug!("browser settings already configured");
    }

    run_tui().await.map_err(|error| BrowseError::Tui {
        message: error.to_string(),
    })
}

/// Runs the bubbletea-rs program with the `PaperApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    let program = Program::<PaperApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    io::stdout().flush().ok();

    Ok(())
}
