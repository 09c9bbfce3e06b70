//! Display projection of a paper record.
//!
//! A [`PaperCard`] holds exactly what a rendered card shows, already cleaned
//! and formatted, so the terminal list and the plain-text printer draw the
//! same card from the same values. Every displayed field has its whitespace
//! runs collapsed to single spaces, so a card never spans more rows than it
//! has fields.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

use super::models::PaperRecord;

/// Text shown in place of a publication date that cannot be parsed.
pub const UNKNOWN_DATE: &str = "unknown date";

/// Escape sequence left behind by the upstream keyword matcher.
const BOUNDARY_ESCAPE: &str = "\\b";

/// ISO-8601 date-time layouts with an offset that RFC 3339 parsing rejects,
/// such as a missing seconds field or an offset without a colon.
const OFFSET_LAYOUTS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M%#z"];

/// Date-time layouts without an offset; these are taken as UTC.
const NAIVE_LAYOUTS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// The displayed fields of one paper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperCard {
    /// Source badge text.
    pub source: String,
    /// Calendar date (`YYYY-MM-DD`, UTC) or [`UNKNOWN_DATE`].
    pub date: String,
    /// Title text.
    pub title: String,
    /// Link target of the title.
    pub link: String,
    /// Authors joined with `", "`.
    pub authors: String,
    /// Keyword badge texts with escape artefacts removed.
    pub keywords: Vec<String>,
}

impl PaperCard {
    /// Projects a record into its card.
    #[must_use]
    pub fn from_record(paper: &PaperRecord) -> Self {
        Self {
            source: collapse_whitespace(&paper.source),
            date: calendar_date(&paper.published).unwrap_or_else(|| UNKNOWN_DATE.to_owned()),
            title: collapse_whitespace(&paper.title),
            link: collapse_whitespace(&paper.link),
            authors: paper
                .authors
                .iter()
                .map(|author| collapse_whitespace(author))
                .collect::<Vec<_>>()
                .join(", "),
            keywords: paper
                .keywords_matched
                .iter()
                .map(|keyword| collapse_whitespace(&strip_boundary_escapes(keyword)))
                .collect(),
        }
    }

    /// Renders the card as plain text lines.
    ///
    /// Line order: source badge and date, title, link, authors, keyword
    /// badges. The authors and keyword lines are present even when empty so
    /// every card has the same height.
    #[must_use]
    pub fn lines(&self) -> [String; 5] {
        [
            format!("[{}] {}", self.source, self.date),
            self.title.clone(),
            self.link.clone(),
            self.authors.clone(),
            self.keyword_badges(),
        ]
    }

    /// Renders keyword badges separated by spaces.
    #[must_use]
    pub fn keyword_badges(&self) -> String {
        self.keywords
            .iter()
            .map(|keyword| format!("[{keyword}]"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Removes every literal two-character `\b` sequence from a keyword.
///
/// This is plain substring removal; the text is never interpreted as a
/// regular expression.
#[must_use]
pub fn strip_boundary_escapes(keyword: &str) -> String {
    keyword.replace(BOUNDARY_ESCAPE, "")
}

/// Replaces every run of whitespace (including line breaks) with one space
/// and trims both ends.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Derives the UTC calendar date of an ISO-8601 timestamp.
///
/// Accepts RFC 3339 timestamps, other ISO-8601 date-times with an offset
/// (`Z`, `+0000`, minutes precision), naive date-times (taken as UTC) and
/// bare dates. Returns `None` when the value matches none of these.
#[must_use]
pub fn calendar_date(published: &str) -> Option<String> {
    let trimmed = published.trim();
    let date = DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .or_else(|| parse_with_offset(trimmed))
        .map(|timestamp| timestamp.with_timezone(&Utc).date_naive())
        .or_else(|| {
            NAIVE_LAYOUTS.iter().find_map(|layout| {
                NaiveDateTime::parse_from_str(trimmed, layout)
                    .ok()
                    .map(|timestamp| timestamp.and_utc().date_naive())
            })
        })
        .or_else(|| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok())?;
    Some(date.format("%Y-%m-%d").to_string())
}

fn parse_with_offset(text: &str) -> Option<DateTime<FixedOffset>> {
    OFFSET_LAYOUTS
        .iter()
        .find_map(|layout| DateTime::parse_from_str(text, layout).ok())
}
