//! Startup context storage and load helpers for the paper browser TUI.
//!
//! bubbletea-rs requires `Model::init()` to be a static function, so the
//! values it needs (the gateway to load from, the initial control values and
//! the telemetry sink) are stored in module-level `OnceLock`s before the
//! program starts.

use std::sync::{Arc, OnceLock};
use std::time::Instant;

use crate::error::BrowseError;
use crate::papers::{PaperGateway, PaperRecord};
use crate::telemetry::{NoopTelemetrySink, TelemetryEvent, TelemetrySink};

/// Global storage for the gateway used by the single startup load.
static PAPER_GATEWAY: OnceLock<Arc<dyn PaperGateway>> = OnceLock::new();

/// Global storage for the initial control values.
static BROWSER_SETTINGS: OnceLock<BrowserSettings> = OnceLock::new();

/// Global storage for the telemetry sink.
static TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

/// Static fallback telemetry sink to avoid allocations on each call.
static DEFAULT_TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

/// Initial values for the search field and source selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowserSettings {
    /// Text placed in the search field at startup.
    pub query: String,
    /// Source tag selected at startup (empty for all sources).
    pub source: String,
    /// Source tags offered by the selector before data arrives.
    pub source_options: Vec<String>,
}

/// Sets the gateway the TUI loads papers from.
///
/// This must be called before starting the bubbletea-rs program. Without it
/// the startup load fails with a configuration error shown in the status
/// bar.
///
/// # Returns
///
/// `true` if the gateway was set, `false` if it was already set.
pub fn set_paper_gateway(gateway: Arc<dyn PaperGateway>) -> bool {
    PAPER_GATEWAY.set(gateway).is_ok()
}

/// Sets the initial control values for the TUI application.
///
/// # Returns
///
/// `true` if the settings were set, `false` if they were already set.
pub fn set_browser_settings(settings: BrowserSettings) -> bool {
    BROWSER_SETTINGS.set(settings).is_ok()
}

/// Sets the telemetry sink for the TUI application.
///
/// Without this, a no-op sink is used.
///
/// # Returns
///
/// `true` if the sink was set, `false` if it was already set.
pub fn set_telemetry_sink(sink: Arc<dyn TelemetrySink>) -> bool {
    TELEMETRY_SINK.set(sink).is_ok()
}

/// Returns a clone of the configured initial control values.
pub(crate) fn get_browser_settings() -> BrowserSettings {
    BROWSER_SETTINGS.get().cloned().unwrap_or_default()
}

/// Returns the configured telemetry sink, or the no-op sink.
pub(crate) fn get_telemetry_sink() -> Arc<dyn TelemetrySink> {
    TELEMETRY_SINK.get().cloned().unwrap_or_else(|| {
        Arc::clone(DEFAULT_TELEMETRY_SINK.get_or_init(|| Arc::new(NoopTelemetrySink)))
    })
}

/// Loads the paper collection through the configured gateway.
///
/// Returns the records and the elapsed time in milliseconds.
pub(crate) async fn fetch_papers() -> Result<(Vec<PaperRecord>, u64), BrowseError> {
    load_configured(PAPER_GATEWAY.get().map(|gateway| gateway.as_ref())).await
}

async fn load_configured(
    gateway: Option<&dyn PaperGateway>,
) -> Result<(Vec<PaperRecord>, u64), BrowseError> {
    let gateway = gateway.ok_or_else(|| BrowseError::Configuration {
        message: "paper gateway not configured".to_owned(),
    })?;
    load_with(gateway).await
}

/// Loads through a specific gateway, recording telemetry to the configured
/// sink.
///
/// # Errors
///
/// Propagates the gateway's error unchanged.
pub async fn load_with(
    gateway: &dyn PaperGateway,
) -> Result<(Vec<PaperRecord>, u64), BrowseError> {
    let sink = get_telemetry_sink();
    load_and_record(gateway, sink.as_ref()).await
}

/// Loads through a specific gateway, timing the retrieval and recording the
/// outcome to `sink`.
///
/// Returns the records and the elapsed time in milliseconds.
///
/// # Errors
///
/// Propagates the gateway's error unchanged.
pub async fn load_and_record(
    gateway: &dyn PaperGateway,
    sink: &dyn TelemetrySink,
) -> Result<(Vec<PaperRecord>, u64), BrowseError> {
    let start = Instant::now();
    match gateway.load_papers().await {
        Ok(papers) => {
            let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
            tracing::debug!(paper_count = papers.len(), latency_ms, "papers loaded");
            sink.record(TelemetryEvent::PapersLoaded {
                paper_count: papers.len(),
                latency_ms,
            });
            Ok((papers, latency_ms))
        }
        Err(error) => {
            tracing::warn!("paper load failed: {error}");
            sink.record(TelemetryEvent::PapersLoadFailed {
                message: error.to_string(),
            });
            Err(error)
        }
    }
}
