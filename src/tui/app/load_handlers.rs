//! Startup load command and result handlers.
//!
//! The collection is retrieved exactly once. A successful result moves the
//! app from Loading to Ready; a failure is shown in the status bar and the
//! app stays in Loading with its empty list.

use std::any::Any;

use bubbletea_rs::Cmd;

use super::{LoadPhase, PaperApp};
use crate::papers::PaperRecord;
use crate::tui::messages::AppMsg;

impl PaperApp {
    /// Creates the command that performs the single startup load.
    pub(super) fn load_cmd() -> Cmd {
        Box::pin(async {
            let msg = match crate::tui::fetch_papers().await {
                Ok((papers, latency_ms)) => AppMsg::LoadComplete { papers, latency_ms },
                Err(error) => AppMsg::from_error(&error),
            };
            Some(Box::new(msg) as Box<dyn Any + Send>)
        })
    }

    /// Dispatches load result messages to their handlers.
    pub(super) fn handle_data_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::LoadComplete { papers, latency_ms } => {
                self.handle_load_complete(papers, *latency_ms)
            }
            AppMsg::LoadFailed(message) => self.handle_load_failed(message),
            _ => {
                debug_assert!(false, "non-data message routed to handle_data_msg");
                None
            }
        }
    }

    fn handle_load_complete(&mut self, papers: &[PaperRecord], latency_ms: u64) -> Option<Cmd> {
        if self.is_ready() {
            tracing::debug!("ignoring repeated load result");
            return None;
        }
        tracing::debug!(paper_count = papers.len(), latency_ms, "rendering loaded papers");
        self.apply_loaded(papers.to_vec());
        None
    }

    fn handle_load_failed(&mut self, message: &str) -> Option<Cmd> {
        if !self.is_ready() {
            self.error = Some(message.to_owned());
        }
        None
    }

    /// Retains the loaded collection and renders it through the current
    /// controls.
    pub(super) fn apply_loaded(&mut self, papers: Vec<PaperRecord>) {
        self.filter_state
            .merge_source_options(papers.iter().map(|paper| paper.source.as_str()));
        self.papers = papers;
        self.phase = LoadPhase::Ready;
        self.error = None;
        self.filter_state.cursor_position = 0;
        self.filter_state.scroll_offset = 0;
        self.rebuild_filter_cache();
    }
}
