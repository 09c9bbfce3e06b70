//! Print mode: load once, filter with the configured controls and write the
//! matching papers to stdout.

use std::io::{self, Write};

use paperdeck::tui::load_with;
use paperdeck::{BrowseError, OutputFormat, PaperFilter, PaperGateway, PaperdeckConfig, gateway_for};

use super::output::{write_cards, write_jsonl};

/// Runs print mode against the configured data source.
///
/// # Errors
///
/// Returns the load error unchanged, a configuration error for an invalid
/// source, timeout or format, or [`BrowseError::Io`] if writing fails.
pub async fn run(config: &PaperdeckConfig) -> Result<(), BrowseError> {
    let format = config.output_format()?;
    let source = config.resolve_data_source()?;
    let gateway = gateway_for(&source, config.request_timeout()?)?;
    let filter = PaperFilter::new(config.initial_query(), config.initial_source());

    let mut stdout = io::stdout().lock();
    print_papers(gateway.as_ref(), &filter, format, &mut stdout).await?;
    stdout.flush().map_err(BrowseError::from)
}

/// Loads through `gateway` and writes the filtered papers to `writer`.
///
/// # Errors
///
/// Returns the gateway's error, or [`BrowseError::Io`] if writing fails.
pub async fn print_papers<W: Write>(
    gateway: &dyn PaperGateway,
    filter: &PaperFilter,
    format: OutputFormat,
    writer: &mut W,
) -> Result<(), BrowseError> {
    let (papers, _latency_ms) = load_with(gateway).await?;
    let matching = filter.apply(&papers);
    match format {
        OutputFormat::Text => write_cards(writer, &matching),
        OutputFormat::Json => write_jsonl(writer, &matching),
    }
}
