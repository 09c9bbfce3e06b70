//! Free-text and source filtering over the paper collection.
//!
//! Both criteria are optional and combine with AND semantics. Filtering
//! borrows the collection and yields an order-preserving subsequence; the
//! collection itself is never modified.

use super::models::PaperRecord;

/// Live values of the search field and source selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaperFilter {
    query: String,
    source: String,
}

impl PaperFilter {
    /// Creates a filter from raw control values.
    ///
    /// The query is kept as typed; trimming and case folding happen when
    /// matching. An empty `source` selects every source.
    #[must_use]
    pub fn new(query: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            source: source.into(),
        }
    }

    /// Returns the raw query text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the selected source tag (empty when unfiltered).
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns true when neither criterion narrows the collection.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.source.is_empty() && self.query.trim().is_empty()
    }

    /// Applies the filter, returning matching records in collection order.
    #[must_use]
    pub fn apply<'a>(&self, papers: &'a [PaperRecord]) -> Vec<&'a PaperRecord> {
        self.matching_indices(papers)
            .into_iter()
            .filter_map(|index| papers.get(index))
            .collect()
    }

    /// Returns the positions of matching records in collection order.
    ///
    /// The query is normalised once per call rather than once per record.
    #[must_use]
    pub fn matching_indices(&self, papers: &[PaperRecord]) -> Vec<usize> {
        let query = self.normalized_query();
        papers
            .iter()
            .enumerate()
            .filter(|(_, paper)| self.matches_source(paper) && matches_query(paper, &query))
            .map(|(index, _)| index)
            .collect()
    }

    fn matches_source(&self, paper: &PaperRecord) -> bool {
        self.source.is_empty() || paper.source == self.source
    }

    fn normalized_query(&self) -> String {
        self.query.trim().to_lowercase()
    }
}

/// Matches a normalised query against title and summary.
///
/// The fields are joined with a newline so a query cannot span the boundary
/// between them.
fn matches_query(paper: &PaperRecord, normalized_query: &str) -> bool {
    if normalized_query.is_empty() {
        return true;
    }
    let haystack = format!("{}\n{}", paper.title, paper.summary_text()).to_lowercase();
    haystack.contains(normalized_query)
}
