//! Resolution of the configured paper collection location.

use std::fmt;

use camino::Utf8PathBuf;
use url::Url;

use crate::error::BrowseError;

/// Location of the paper collection used when nothing is configured.
pub const DEFAULT_DATA_SOURCE: &str = "data/papers.json";

/// Where the paper collection is retrieved from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// An `http` or `https` URL fetched with a single GET.
    Remote(Url),
    /// A file on the local filesystem, relative to the working directory
    /// unless absolute.
    File(Utf8PathBuf),
}

impl DataSource {
    /// Interprets a configured location string.
    ///
    /// Strings that parse as `http`/`https` URLs are remote; anything that
    /// does not parse as a URL is treated as a filesystem path.
    ///
    /// # Errors
    ///
    /// Returns [`BrowseError::InvalidDataSource`] when the string is blank or
    /// is a URL with a scheme other than `http`, `https` or `file`.
    pub fn parse(input: &str) -> Result<Self, BrowseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(BrowseError::InvalidDataSource {
                source_text: input.to_owned(),
                message: "location must not be empty".to_owned(),
            });
        }

        match Url::parse(trimmed) {
            Ok(url) => Self::from_url(url, input),
            // Relative paths have no scheme and fail URL parsing.
            Err(_) => Ok(Self::File(Utf8PathBuf::from(trimmed))),
        }
    }

    fn from_url(url: Url, input: &str) -> Result<Self, BrowseError> {
        match url.scheme() {
            "http" | "https" => Ok(Self::Remote(url)),
            "file" => url
                .to_file_path()
                .ok()
                .and_then(|path| Utf8PathBuf::from_path_buf(path).ok())
                .map(Self::File)
                .ok_or_else(|| BrowseError::InvalidDataSource {
                    source_text: input.to_owned(),
                    message: "file URL does not name a UTF-8 local path".to_owned(),
                }),
            // Windows drive letters parse as single-letter schemes.
            scheme if scheme.len() == 1 => Ok(Self::File(Utf8PathBuf::from(input.trim()))),
            scheme => Err(BrowseError::InvalidDataSource {
                source_text: input.to_owned(),
                message: format!("unsupported scheme '{scheme}'"),
            }),
        }
    }
}

impl Default for DataSource {
    fn default() -> Self {
        Self::File(Utf8PathBuf::from(DEFAULT_DATA_SOURCE))
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote(url) => write!(f, "{url}"),
            Self::File(path) => write!(f, "{path}"),
        }
    }
}
