//! Application telemetry events and sinks.
//!
//! Paperdeck is a local tool, but it still records a couple of operational
//! signals (how long the collection took to load, and why it failed) to
//! support debugging. Nothing is transmitted anywhere.

use std::io;

use serde::{Deserialize, Serialize};

/// A structured telemetry event emitted by Paperdeck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// Records a successful load of the paper collection.
    PapersLoaded {
        /// Number of records in the collection.
        paper_count: usize,
        /// Time taken by the retrieval, in milliseconds.
        latency_ms: u64,
    },
    /// Records a failed load of the paper collection.
    PapersLoadFailed {
        /// Human-readable failure description.
        message: String,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Records telemetry events to stderr as JSON lines (JSONL).
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        if let Err(error) = writeln_stderr(&serialised) {
            tracing::debug!("failed to write telemetry event: {error}");
        }
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}

/// Telemetry helpers for tests.
#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    use std::sync::Mutex;

    use super::{TelemetryEvent, TelemetrySink};

    /// Sink that keeps every recorded event in memory.
    #[derive(Debug, Default)]
    pub struct RecordingTelemetrySink {
        events: Mutex<Vec<TelemetryEvent>>,
    }

    impl RecordingTelemetrySink {
        /// Returns a copy of the events recorded so far.
        #[must_use]
        pub fn events(&self) -> Vec<TelemetryEvent> {
            self.events
                .lock()
                .map(|events| events.clone())
                .unwrap_or_default()
        }
    }

    impl TelemetrySink for RecordingTelemetrySink {
        fn record(&self, event: TelemetryEvent) {
            if let Ok(mut events) = self.events.lock() {
                events.push(event);
            }
        }
    }
}
