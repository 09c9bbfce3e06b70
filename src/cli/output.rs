//! Output writers for print mode.

use std::io::Write;

use paperdeck::{BrowseError, PaperCard, PaperRecord};

/// Writes each paper as its card text, separated by blank lines.
///
/// Empty author and keyword lines are left out.
///
/// # Errors
///
/// Returns [`BrowseError::Io`] if writing to the output fails.
pub fn write_cards<W: Write>(writer: &mut W, papers: &[&PaperRecord]) -> Result<(), BrowseError> {
    for (index, paper) in papers.iter().enumerate() {
        if index > 0 {
            writeln!(writer).map_err(|e| io_error(&e))?;
        }
        let card = PaperCard::from_record(paper);
        for line in card.lines().iter().filter(|line| !line.is_empty()) {
            writeln!(writer, "{line}").map_err(|e| io_error(&e))?;
        }
    }
    Ok(())
}

/// Writes papers in JSON Lines format, one record per line.
///
/// # Errors
///
/// Returns [`BrowseError::Io`] if writing to the output fails, or if
/// JSON serialisation fails.
pub fn write_jsonl<W: Write>(writer: &mut W, papers: &[&PaperRecord]) -> Result<(), BrowseError> {
    for paper in papers {
        serde_json::to_writer(&mut *writer, paper).map_err(|e| BrowseError::Io {
            message: format!("JSON serialisation failed: {e}"),
        })?;
        writeln!(writer).map_err(|e| io_error(&e))?;
    }
    Ok(())
}

fn io_error(error: &std::io::Error) -> BrowseError {
    BrowseError::Io {
        message: error.to_string(),
    }
}
