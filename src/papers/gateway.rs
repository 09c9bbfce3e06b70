//! Gateways for loading the paper collection.
//!
//! Loading is a single retrieval with no retry: the collection is a static
//! file co-located with the browser. The trait-based design enables mocking
//! in tests while the HTTP and file implementations perform real reads.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use reqwest::Client;
use url::Url;

use crate::error::BrowseError;

use super::models::PaperRecord;
use super::source::DataSource;

/// Default timeout for the single HTTP retrieval.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Gateway that can load the full paper collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaperGateway: Send + Sync {
    /// Retrieves and decodes the collection, preserving document order.
    async fn load_papers(&self) -> Result<Vec<PaperRecord>, BrowseError>;
}

/// Loads papers with one HTTP GET.
#[derive(Debug, Clone)]
pub struct HttpPaperGateway {
    client: Client,
    url: Url,
}

impl HttpPaperGateway {
    /// Creates a gateway for the given URL.
    ///
    /// # Errors
    ///
    /// Returns [`BrowseError::Configuration`] when the HTTP client cannot be
    /// built.
    pub fn new(url: Url, timeout: Duration) -> Result<Self, BrowseError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| BrowseError::Configuration {
                message: format!("failed to configure HTTP client: {error}"),
            })?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl PaperGateway for HttpPaperGateway {
    async fn load_papers(&self) -> Result<Vec<PaperRecord>, BrowseError> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|error| BrowseError::Network {
                message: error.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(BrowseError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|error| BrowseError::Network {
                message: format!("failed to read response body: {error}"),
            })?;

        decode_papers(&body)
    }
}

/// Loads papers from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FilePaperGateway {
    path: Utf8PathBuf,
}

impl FilePaperGateway {
    /// Creates a gateway for the given file path.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_contents(&self) -> Result<String, BrowseError> {
        let parent = self
            .path
            .parent()
            .filter(|dir| !dir.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));
        let file_name = self.path.file_name().ok_or_else(|| BrowseError::Io {
            message: format!("invalid data path '{}': no file name", self.path),
        })?;

        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|error| {
            BrowseError::Io {
                message: format!("failed to open directory '{parent}': {error}"),
            }
        })?;

        dir.read_to_string(file_name)
            .map_err(|error| BrowseError::Io {
                message: format!("failed to read '{}': {error}", self.path),
            })
    }
}

#[async_trait]
impl PaperGateway for FilePaperGateway {
    async fn load_papers(&self) -> Result<Vec<PaperRecord>, BrowseError> {
        let contents = self.read_contents()?;
        decode_papers(&contents)
    }
}

/// Builds the gateway matching a data source.
///
/// # Errors
///
/// Returns [`BrowseError::Configuration`] when the HTTP client cannot be
/// built for a remote source.
pub fn gateway_for(
    source: &DataSource,
    timeout: Duration,
) -> Result<Arc<dyn PaperGateway>, BrowseError> {
    match source {
        DataSource::Remote(url) => Ok(Arc::new(HttpPaperGateway::new(url.clone(), timeout)?)),
        DataSource::File(path) => Ok(Arc::new(FilePaperGateway::new(path.clone()))),
    }
}

/// Decodes a JSON array of paper records.
///
/// # Errors
///
/// Returns [`BrowseError::Decode`] when the text is not valid JSON or its
/// root value is not an array of objects.
pub fn decode_papers(body: &str) -> Result<Vec<PaperRecord>, BrowseError> {
    serde_json::from_str(body).map_err(|error| BrowseError::Decode {
        message: error.to_string(),
    })
}

#[cfg(test)]
#[path = "gateway_tests.rs"]
mod tests;
