//! Launching paper links in the system browser.
//!
//! Links are handed to the platform's URL opener as a single argument with no
//! shell involved. The launcher runs detached: its standard streams are
//! closed and the browser keeps no reference back to this process.

use std::process::{Command, Stdio};

use url::Url;

use crate::error::BrowseError;

/// Function used by the app to open a link.
pub type LinkOpener = fn(&str) -> Result<(), BrowseError>;

/// Opens `link` in a new browsing context of the system browser.
///
/// # Errors
///
/// Returns [`BrowseError::OpenLink`] when the link is not an absolute
/// `http`, `https` or `file` URL, or when the platform opener cannot be
/// spawned.
pub fn open_in_browser(link: &str) -> Result<(), BrowseError> {
    let url = validate_link(link)?;
    let mut child = opener_command(url.as_str())
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|error| BrowseError::OpenLink {
            link: link.to_owned(),
            message: error.to_string(),
        })?;

    // Reap the launcher without blocking the update loop.
    std::thread::spawn(move || {
        if let Err(error) = child.wait() {
            tracing::debug!("link opener did not exit cleanly: {error}");
        }
    });
    Ok(())
}

/// Parses a link and checks that it is safe to hand to the opener.
///
/// # Errors
///
/// Returns [`BrowseError::OpenLink`] for blank, relative or non-web links.
pub fn validate_link(link: &str) -> Result<Url, BrowseError> {
    let reject = |message: &str| BrowseError::OpenLink {
        link: link.to_owned(),
        message: message.to_owned(),
    };

    if link.trim().is_empty() {
        return Err(reject("paper has no link"));
    }
    let url = Url::parse(link.trim()).map_err(|error| reject(&error.to_string()))?;
    match url.scheme() {
        "http" | "https" | "file" => Ok(url),
        other => Err(reject(&format!("unsupported scheme '{other}'"))),
    }
}

#[cfg(target_os = "windows")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("explorer");
    command.arg(url);
    command
}

#[cfg(target_os = "macos")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}
