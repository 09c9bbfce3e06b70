//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.paperdeck.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `PAPERDECK_DATA_SOURCE`, `PAPERDECK_QUERY`,
//!    `PAPERDECK_SOURCE`, and friends
//! 4. **Command-line arguments** – `--data-source`/`-d`, `--query`/`-q`,
//!    `--source`/`-s`, `--print`/`-p`, `--format`/`-f`
//!
//! # Configuration File
//!
//! ```toml
//! data_source = "https://example.org/site/data/papers.json"
//! source = "arXiv"
//! query = "senescence"
//! source_options = "arXiv,bioRxiv,medRxiv,PubMed,ChemRxiv"
//! request_timeout_seconds = 10
//! ```

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::error::BrowseError;
use crate::papers::source::{DEFAULT_DATA_SOURCE, DataSource};

/// Source tags offered by the selector before any data is loaded.
///
/// These are the tags written by the upstream collectors.
pub const DEFAULT_SOURCE_OPTIONS: &str = "arXiv,bioRxiv,medRxiv,PubMed,ChemRxiv";

const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

/// Operation mode determined by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Interactive terminal browser.
    Browse,
    /// Print the filtered collection to stdout and exit.
    Print,
}

/// Output format used by print mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Card text, one blank line between cards.
    #[default]
    Text,
    /// One JSON record per line.
    Json,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use paperdeck::PaperdeckConfig;
///
/// let config = PaperdeckConfig::load().expect("failed to load configuration");
/// let source = config.resolve_data_source().expect("data source should parse");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "PAPERDECK",
    discovery(
        dotfile_name = ".paperdeck.toml",
        config_file_name = "paperdeck.toml",
        app_name = "paperdeck"
    )
)]
pub struct PaperdeckConfig {
    /// Location of the paper collection: an `http(s)` URL or a file path.
    ///
    /// Can be provided via:
    /// - CLI: `--data-source <LOCATION>` or `-d <LOCATION>`
    /// - Environment: `PAPERDECK_DATA_SOURCE`
    /// - Config file: `data_source = "..."`
    ///
    /// Defaults to `data/papers.json`.
    #[ortho_config(cli_short = 'd')]
    pub data_source: Option<String>,

    /// Initial search text.
    ///
    /// Can be provided via:
    /// - CLI: `--query <TEXT>` or `-q <TEXT>`
    /// - Environment: `PAPERDECK_QUERY`
    /// - Config file: `query = "..."`
    #[ortho_config(cli_short = 'q')]
    pub query: Option<String>,

    /// Initial source tag selection.
    ///
    /// Can be provided via:
    /// - CLI: `--source <TAG>` or `-s <TAG>`
    /// - Environment: `PAPERDECK_SOURCE`
    /// - Config file: `source = "..."`
    #[ortho_config(cli_short = 's')]
    pub source: Option<String>,

    /// Comma-separated source tags offered by the source selector.
    ///
    /// Tags found in the data but missing from this list are appended after
    /// loading.
    #[ortho_config()]
    pub source_options: Option<String>,

    /// Timeout for the HTTP retrieval, in seconds.
    ///
    /// Defaults to 30 seconds.
    #[ortho_config()]
    pub request_timeout_seconds: u64,

    /// Prints the filtered collection and exits instead of starting the TUI.
    ///
    /// Can be provided via:
    /// - CLI: `--print` / `-p`
    /// - Config file: `print = true`
    ///
    /// Note: the environment is not consulted because `ortho_config` does
    /// not load boolean values from the environment.
    #[ortho_config(cli_short = 'p')]
    pub print: bool,

    /// Print mode output format: `text` or `json`.
    ///
    /// Can be provided via:
    /// - CLI: `--format <FORMAT>` or `-f <FORMAT>`
    /// - Environment: `PAPERDECK_FORMAT`
    /// - Config file: `format = "json"`
    #[ortho_config(cli_short = 'f')]
    pub format: Option<String>,

    /// Emits telemetry events to stderr as JSON lines.
    #[ortho_config()]
    pub telemetry: bool,
}

impl Default for PaperdeckConfig {
    fn default() -> Self {
        Self {
            data_source: None,
            query: None,
            source: None,
            source_options: None,
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
            print: false,
            format: None,
            telemetry: false,
        }
    }
}

impl PaperdeckConfig {
    /// Resolves the configured data source, falling back to the well-known
    /// relative path.
    ///
    /// # Errors
    ///
    /// Returns [`BrowseError::InvalidDataSource`] when the configured
    /// location cannot be interpreted.
    pub fn resolve_data_source(&self) -> Result<DataSource, BrowseError> {
        DataSource::parse(self.data_source.as_deref().unwrap_or(DEFAULT_DATA_SOURCE))
    }

    /// Returns the HTTP request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`BrowseError::Configuration`] when the timeout is zero.
    pub fn request_timeout(&self) -> Result<Duration, BrowseError> {
        if self.request_timeout_seconds == 0 {
            return Err(BrowseError::Configuration {
                message: "request timeout must be at least one second".to_owned(),
            });
        }
        Ok(Duration::from_secs(self.request_timeout_seconds))
    }

    /// Returns the configured source options, trimmed and without blanks or
    /// duplicates.
    #[must_use]
    pub fn source_option_list(&self) -> Vec<String> {
        let raw = self
            .source_options
            .as_deref()
            .unwrap_or(DEFAULT_SOURCE_OPTIONS);
        let mut options: Vec<String> = Vec::new();
        for tag in raw.split(',').map(str::trim).filter(|tag| !tag.is_empty()) {
            if !options.iter().any(|existing| existing == tag) {
                options.push(tag.to_owned());
            }
        }
        options
    }

    /// Returns the initial search text, or an empty string.
    #[must_use]
    pub fn initial_query(&self) -> &str {
        self.query.as_deref().unwrap_or_default()
    }

    /// Returns the initial source selection, or an empty string for all
    /// sources.
    #[must_use]
    pub fn initial_source(&self) -> &str {
        self.source.as_deref().map(str::trim).unwrap_or_default()
    }

    /// Parses the print mode output format.
    ///
    /// # Errors
    ///
    /// Returns [`BrowseError::Configuration`] for formats other than `text`
    /// and `json`.
    pub fn output_format(&self) -> Result<OutputFormat, BrowseError> {
        match self.format.as_deref().map(str::trim) {
            None | Some("" | "text") => Ok(OutputFormat::Text),
            Some("json") => Ok(OutputFormat::Json),
            Some(other) => Err(BrowseError::Configuration {
                message: format!("unknown output format '{other}' (expected text or json)"),
            }),
        }
    }

    /// Determines the operation mode.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.print {
            OperationMode::Print
        } else {
            OperationMode::Browse
        }
    }
}
