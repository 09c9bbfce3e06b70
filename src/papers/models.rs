//! Paper record data model.
//!
//! Records arrive as a JSON array produced by an upstream collector. The
//! model is deliberately lenient: unknown fields are ignored and every field
//! falls back to an empty value when it is missing or `null`, so a malformed
//! record never aborts a load.

use serde::{Deserialize, Deserializer, Serialize};

/// One publication entry from the paper collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaperRecord {
    /// Upstream identifier, when the collector supplied one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Short tag naming the feed the record came from (e.g. `arXiv`).
    #[serde(deserialize_with = "null_as_default")]
    pub source: String,
    /// Paper title.
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    /// Landing page URL.
    #[serde(deserialize_with = "null_as_default")]
    pub link: String,
    /// Publication timestamp as an ISO-8601 string.
    #[serde(deserialize_with = "null_as_default")]
    pub published: String,
    /// Last update timestamp as an ISO-8601 string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    /// Author names in byline order.
    #[serde(deserialize_with = "null_as_default")]
    pub authors: Vec<String>,
    /// Abstract text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Digital object identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    /// Subject categories assigned by the source.
    #[serde(deserialize_with = "null_as_default")]
    pub categories: Vec<String>,
    /// Keyword patterns the collector matched against the paper.
    #[serde(deserialize_with = "null_as_default")]
    pub keywords_matched: Vec<String>,
}

impl PaperRecord {
    /// Returns the summary text, or an empty string when absent.
    #[must_use]
    pub fn summary_text(&self) -> &str {
        self.summary.as_deref().unwrap_or_default()
    }
}

/// Deserializes `null` as the type's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Helpers for constructing `PaperRecord` fixtures in tests.
#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    use super::PaperRecord;

    /// Constructs a record with the fields the browser displays.
    ///
    /// # Examples
    ///
    /// ```
    /// use paperdeck::papers::models::test_support::paper;
    ///
    /// let record = paper("arXiv", "Deep Nets", "neural review", "2024-03-05T10:00:00Z");
    /// assert_eq!(record.summary.as_deref(), Some("neural review"));
    /// ```
    #[must_use]
    pub fn paper(source: &str, title: &str, summary: &str, published: &str) -> PaperRecord {
        PaperRecord {
            source: source.to_owned(),
            title: title.to_owned(),
            link: format!("https://example.org/{}", title.to_lowercase().replace(' ', "-")),
            published: published.to_owned(),
            summary: Some(summary.to_owned()),
            ..PaperRecord::default()
        }
    }

    /// Returns the two-record collection used throughout the browser tests.
    ///
    /// The first record is an arXiv paper with one author and one keyword;
    /// the second is a bioRxiv paper with neither.
    #[must_use]
    pub fn sample_papers() -> Vec<PaperRecord> {
        vec![
            PaperRecord {
                authors: vec!["A. Smith".to_owned()],
                keywords_matched: vec!["neural".to_owned()],
                ..paper("arxiv", "Deep Nets", "neural review", "2024-03-05T10:00:00Z")
            },
            paper("biorxiv", "Gene Study", "", "2023-11-20T00:00:00Z"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::PaperRecord;

    #[rstest]
    fn decodes_full_record() {
        let record: PaperRecord = serde_json::from_value(serde_json::json!({
            "id": "arxiv:2403.01234",
            "source": "arXiv",
            "title": "Deep Nets",
            "link": "https://arxiv.org/abs/2403.01234",
            "published": "2024-03-05T10:00:00+00:00",
            "updated": null,
            "authors": ["A. Smith", "B. Jones"],
            "summary": "neural review",
            "doi": null,
            "categories": ["q-bio.NC"],
            "keywords_matched": ["\\bneural\\b"]
        }))
        .expect("record should decode");

        assert_eq!(record.id.as_deref(), Some("arxiv:2403.01234"));
        assert_eq!(record.source, "arXiv");
        assert_eq!(record.authors, vec!["A. Smith", "B. Jones"]);
        assert_eq!(record.keywords_matched, vec!["\\bneural\\b"]);
        assert!(record.updated.is_none());
        assert!(record.doi.is_none());
    }

    #[rstest]
    fn missing_optional_fields_default_to_empty() {
        let record: PaperRecord = serde_json::from_value(serde_json::json!({
            "source": "bioRxiv",
            "title": "Gene Study",
            "link": "https://biorxiv.org/x",
            "published": "2023-11-20"
        }))
        .expect("record without optional fields should decode");

        assert!(record.authors.is_empty());
        assert!(record.keywords_matched.is_empty());
        assert!(record.summary.is_none());
        assert_eq!(record.summary_text(), "");
    }

    #[rstest]
    fn null_lists_and_unknown_fields_are_tolerated() {
        let record: PaperRecord = serde_json::from_value(serde_json::json!({
            "source": "PubMed",
            "title": null,
            "authors": null,
            "keywords_matched": null,
            "citation_count": 12
        }))
        .expect("null fields should decode as defaults");

        assert_eq!(record.title, "");
        assert!(record.authors.is_empty());
        assert!(record.keywords_matched.is_empty());
    }

    #[rstest]
    fn serialization_omits_absent_optionals() {
        let record = PaperRecord {
            source: "arXiv".to_owned(),
            title: "Deep Nets".to_owned(),
            ..PaperRecord::default()
        };

        let value = serde_json::to_value(&record).expect("record should serialize");

        assert!(value.get("summary").is_none(), "summary should be omitted");
        assert!(value.get("doi").is_none(), "doi should be omitted");
        assert_eq!(
            value.get("source").and_then(serde_json::Value::as_str),
            Some("arXiv")
        );
    }
}
