//! Error types exposed by the paper browser.

use thiserror::Error;

/// Errors surfaced while configuring the browser or loading papers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BrowseError {
    /// Configuration could not be loaded or contained an invalid value.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The configured data source could not be interpreted.
    #[error("invalid data source '{source_text}': {message}")]
    InvalidDataSource {
        /// The location string as configured.
        source_text: String,
        /// Why the location was rejected.
        message: String,
    },

    /// Networking failed while retrieving the paper collection.
    #[error("network error fetching papers: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The server answered the retrieval with a non-success status.
    #[error("paper collection request failed with status {status}")]
    Status {
        /// HTTP status code returned by the server.
        status: u16,
    },

    /// The retrieved body was not a JSON array of paper records.
    #[error("paper collection is not valid JSON: {message}")]
    Decode {
        /// Parser error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// The system browser could not be launched for a paper link.
    #[error("could not open link {link}: {message}")]
    OpenLink {
        /// The link that was being opened.
        link: String,
        /// Error detail from the launcher.
        message: String,
    },

    /// The terminal interface failed to start or run.
    #[error("TUI error: {message}")]
    Tui {
        /// Error detail from the TUI runtime.
        message: String,
    },
}

impl From<std::io::Error> for BrowseError {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}
