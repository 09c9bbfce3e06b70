//! Behavioural tests for the single paper collection load.

mod support;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use bubbletea_rs::Model;
use camino::Utf8PathBuf;
use paperdeck::telemetry::TelemetryEvent;
use paperdeck::telemetry::test_support::RecordingTelemetrySink;
use paperdeck::tui::messages::AppMsg;
use paperdeck::tui::{LoadPhase, PaperApp, load_and_record};
use paperdeck::{BrowseError, FilePaperGateway, HttpPaperGateway, PaperGateway, PaperRecord};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use serde_json::json;
use support::runtime::{SharedRuntime, ensure_runtime, start_paper_server};
use tempfile::TempDir;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const COLLECTION_PATH: &str = "/data/papers.json";

#[derive(ScenarioState, Default)]
struct LoadingState {
    runtime: Slot<SharedRuntime>,
    server: Slot<MockServer>,
    telemetry_sink: Slot<Arc<RecordingTelemetrySink>>,
    temp_dir: Slot<TempDir>,
    file_path: Slot<Utf8PathBuf>,
    papers: Slot<Vec<PaperRecord>>,
    error: Slot<BrowseError>,
}

#[fixture]
fn loading_state() -> LoadingState {
    LoadingState::default()
}

fn paper_json(count: usize) -> serde_json::Value {
    let records: Vec<_> = (1..=count)
        .map(|n| {
            json!({
                "source": "arXiv",
                "title": format!("Paper {n}"),
                "link": format!("https://arxiv.org/abs/2403.0000{n}"),
                "published": "2024-03-05T10:00:00+00:00",
                "authors": ["A. Smith"],
                "summary": null,
                "keywords_matched": ["\\bneural\\b"]
            })
        })
        .collect();
    json!(records)
}

fn mount(loading_state: &LoadingState, response: ResponseTemplate) -> io::Result<()> {
    let runtime = start_paper_server(&loading_state.runtime, &loading_state.server)?;
    let mock = Mock::given(method("GET"))
        .and(path(COLLECTION_PATH))
        .respond_with(response)
        .expect(1);

    loading_state
        .server
        .with_ref(|server| runtime.block_on(mock.mount(server)))
        .ok_or_else(|| io::Error::other("mock server not initialised"))
}

fn record_outcome(loading_state: &LoadingState, result: Result<Vec<PaperRecord>, BrowseError>) {
    match result {
        Ok(papers) => {
            drop(loading_state.error.take());
            loading_state.papers.set(papers);
        }
        Err(error) => {
            drop(loading_state.papers.take());
            loading_state.error.set(error);
        }
    }
}

fn load_through(loading_state: &LoadingState, gateway: &dyn PaperGateway) -> io::Result<()> {
    let runtime = ensure_runtime(&loading_state.runtime)?;
    let sink = loading_state
        .telemetry_sink
        .get()
        .ok_or_else(|| io::Error::other("telemetry sink not initialised"))?;

    let result = runtime
        .block_on(load_and_record(gateway, sink.as_ref()))
        .map(|(papers, _latency_ms)| papers);
    record_outcome(loading_state, result);
    Ok(())
}

// Given steps

#[given("a recording telemetry sink")]
fn given_recording_sink(loading_state: &LoadingState) {
    loading_state
        .telemetry_sink
        .set(Arc::new(RecordingTelemetrySink::default()));
}

#[given("a paper server returning {count:usize} papers")]
fn given_server_with_papers(loading_state: &LoadingState, count: usize) -> io::Result<()> {
    mount(
        loading_state,
        ResponseTemplate::new(200).set_body_json(paper_json(count)),
    )
}

#[given("a paper server responding with status {status:u16}")]
fn given_server_with_status(loading_state: &LoadingState, status: u16) -> io::Result<()> {
    mount(loading_state, ResponseTemplate::new(status))
}

#[given("a paper server returning invalid JSON")]
fn given_server_with_invalid_json(loading_state: &LoadingState) -> io::Result<()> {
    mount(
        loading_state,
        ResponseTemplate::new(200).set_body_string("<html>not a paper list</html>"),
    )
}

#[given("a papers file containing {count:usize} papers")]
fn given_papers_file(loading_state: &LoadingState, count: usize) -> io::Result<()> {
    let dir = TempDir::new()?;
    let file = Utf8PathBuf::try_from(dir.path().join("papers.json"))
        .map_err(|error| io::Error::other(error.to_string()))?;
    std::fs::write(&file, paper_json(count).to_string())?;

    loading_state.file_path.set(file);
    loading_state.temp_dir.set(dir);
    Ok(())
}

// When steps

#[when("the papers are loaded over HTTP")]
fn when_loaded_over_http(loading_state: &LoadingState) -> io::Result<()> {
    let uri = loading_state
        .server
        .with_ref(MockServer::uri)
        .ok_or_else(|| io::Error::other("mock server not initialised"))?;
    let url = Url::parse(&format!("{uri}{COLLECTION_PATH}"))
        .map_err(|error| io::Error::other(error.to_string()))?;
    let gateway = HttpPaperGateway::new(url, Duration::from_secs(5))
        .map_err(|error| io::Error::other(error.to_string()))?;

    load_through(loading_state, &gateway)
}

#[when("the papers are loaded from the file")]
fn when_loaded_from_file(loading_state: &LoadingState) -> io::Result<()> {
    let file = loading_state
        .file_path
        .get()
        .ok_or_else(|| io::Error::other("papers file not created"))?;

    load_through(loading_state, &FilePaperGateway::new(file))
}

// Then steps

#[then("{count:usize} papers are loaded")]
#[expect(clippy::expect_used, reason = "BDD test step; panics are acceptable")]
fn then_papers_loaded(loading_state: &LoadingState, count: usize) {
    let papers = loading_state
        .papers
        .with_ref(Clone::clone)
        .expect("papers were not loaded");

    assert_eq!(papers.len(), count);
    let first = papers.first().expect("at least one paper");
    assert_eq!(first.title, "Paper 1");
    assert_eq!(first.summary, None);
    assert_eq!(first.keywords_matched, ["\\bneural\\b"]);
}

#[then("a papers loaded event is recorded for {count:usize} papers")]
#[expect(clippy::expect_used, reason = "BDD test step; panics are acceptable")]
fn then_loaded_event(loading_state: &LoadingState, count: usize) {
    let events = loading_state
        .telemetry_sink
        .with_ref(|sink| sink.events())
        .expect("telemetry sink not initialised");

    assert!(
        matches!(
            events.as_slice(),
            [TelemetryEvent::PapersLoaded { paper_count, .. }] if *paper_count == count
        ),
        "unexpected events: {events:?}"
    );
}

#[then("the load fails with status {status:u16}")]
#[expect(clippy::expect_used, reason = "BDD test step; panics are acceptable")]
fn then_load_fails_with_status(loading_state: &LoadingState, status: u16) {
    let error = loading_state
        .error
        .with_ref(Clone::clone)
        .expect("load did not fail");

    assert_eq!(error, BrowseError::Status { status });
}

#[then("the load fails with a decode error")]
#[expect(clippy::expect_used, reason = "BDD test step; panics are acceptable")]
fn then_load_fails_with_decode_error(loading_state: &LoadingState) {
    let error = loading_state
        .error
        .with_ref(Clone::clone)
        .expect("load did not fail");

    assert!(
        matches!(error, BrowseError::Decode { .. }),
        "unexpected error: {error:?}"
    );
}

#[then("a load failure event is recorded")]
#[expect(clippy::expect_used, reason = "BDD test step; panics are acceptable")]
fn then_failure_event(loading_state: &LoadingState) {
    let events = loading_state
        .telemetry_sink
        .with_ref(|sink| sink.events())
        .expect("telemetry sink not initialised");

    assert!(
        matches!(
            events.as_slice(),
            [TelemetryEvent::PapersLoadFailed { message }] if message.contains("404")
        ),
        "unexpected events: {events:?}"
    );
}

#[then("the browser shows the load error and stays loading")]
#[expect(clippy::expect_used, reason = "BDD test step; panics are acceptable")]
fn then_browser_shows_error(loading_state: &LoadingState) {
    let error = loading_state
        .error
        .with_ref(Clone::clone)
        .expect("load did not fail");
    let mut app = PaperApp::empty();

    app.handle_message(&AppMsg::from_error(&error));

    assert_eq!(app.phase(), LoadPhase::Loading);
    assert_eq!(app.filtered_count(), 0);
    assert!(app.view().contains(&format!("Error: {error}")));
}

// Scenario bindings

#[scenario(path = "tests/features/paper_loading.feature", index = 0)]
fn papers_load_from_remote_collection(loading_state: LoadingState) {
    let _ = loading_state;
}

#[scenario(path = "tests/features/paper_loading.feature", index = 1)]
fn missing_collection_is_reported(loading_state: LoadingState) {
    let _ = loading_state;
}

#[scenario(path = "tests/features/paper_loading.feature", index = 2)]
fn invalid_body_is_decode_failure(loading_state: LoadingState) {
    let _ = loading_state;
}

#[scenario(path = "tests/features/paper_loading.feature", index = 3)]
fn papers_load_from_local_file(loading_state: LoadingState) {
    let _ = loading_state;
}
