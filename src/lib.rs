//! Paperdeck library crate: a terminal browser for academic paper feeds.
//!
//! The library loads a static JSON collection of paper records over HTTP or
//! from disk, filters it by free text and source tag, and renders each record
//! as a card in an interactive terminal interface.

pub mod config;
pub mod error;
pub mod papers;
pub mod telemetry;
pub mod tui;

pub use config::{OperationMode, OutputFormat, PaperdeckConfig};
pub use error::BrowseError;
pub use papers::{
    DataSource, FilePaperGateway, HttpPaperGateway, PaperCard, PaperFilter, PaperGateway,
    PaperRecord, gateway_for,
};
