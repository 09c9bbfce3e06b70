//! Card list component for displaying filtered papers.
//!
//! Each paper is drawn as a fixed-height card: a source badge and date, the
//! title, its link, the author list and the keyword badges, followed by a
//! blank separator line. The whole list is rebuilt on every frame from the
//! filtered indices, so drawing the same state twice yields the same text.

use crate::papers::{PaperCard, PaperRecord};

use super::text_truncate::truncate_to_width;

/// Lines occupied by one card, including the separator.
pub const CARD_HEIGHT: usize = 6;

/// Default visible height for the card list, in lines.
const DEFAULT_VISIBLE_HEIGHT: usize = 18;

/// Context for rendering the card list view.
///
/// Bundles the data needed to render the filtered list without requiring
/// per-frame allocations of the filtered records.
#[derive(Debug, Clone)]
pub struct PaperListViewContext<'a> {
    /// Full slice of all loaded papers.
    pub papers: &'a [PaperRecord],
    /// Indices of papers matching the current filter.
    pub filtered_indices: &'a [usize],
    /// Current cursor position (0-indexed) within the filtered list.
    pub cursor_position: usize,
    /// Index of the first visible card.
    pub scroll_offset: usize,
    /// Maximum visible height in lines.
    pub visible_height: usize,
    /// Maximum line width in columns (0 disables truncation).
    pub max_width: usize,
}

/// Component for displaying papers as cards.
#[derive(Debug, Clone)]
pub struct PaperListComponent {
    /// Visible height in lines (for scrolling calculations).
    visible_height: usize,
}

impl Default for PaperListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl PaperListComponent {
    /// Creates a new card list component.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            visible_height: DEFAULT_VISIBLE_HEIGHT,
        }
    }

    /// Updates the visible height for scrolling calculations.
    pub const fn set_visible_height(&mut self, height: usize) {
        self.visible_height = height;
    }

    /// Returns how many whole cards fit in the visible height (at least one).
    #[must_use]
    pub fn visible_cards(&self) -> usize {
        cards_for_height(self.visible_height)
    }

    /// Renders the card list as a string.
    ///
    /// Only the cards within the visible window (from the scroll offset) are
    /// drawn.
    #[must_use]
    pub fn view(&self, ctx: &PaperListViewContext<'_>) -> String {
        if ctx.filtered_indices.is_empty() {
            return "  No papers match the current filters.\n".to_owned();
        }

        let visible_height = if ctx.visible_height > 0 {
            ctx.visible_height
        } else {
            self.visible_height
        };

        let mut output = String::new();
        for (display_index, &paper_index) in ctx
            .filtered_indices
            .iter()
            .enumerate()
            .skip(ctx.scroll_offset)
            .take(cards_for_height(visible_height))
        {
            let Some(paper) = ctx.papers.get(paper_index) else {
                continue;
            };
            let is_selected = display_index == ctx.cursor_position;
            for line in format_card(paper, is_selected) {
                output.push_str(&truncate_to_width(&line, ctx.max_width));
                output.push('\n');
            }
        }

        output
    }
}

/// Formats one card as its display lines, including the separator.
///
/// The selected card is marked with `>` before its badge line.
#[must_use]
pub fn format_card(paper: &PaperRecord, is_selected: bool) -> Vec<String> {
    let card = PaperCard::from_record(paper);
    let marker = if is_selected { ">" } else { " " };
    let [header, title, link, authors, keywords] = card.lines();

    vec![
        format!("{marker} {header}"),
        indent(&title),
        indent(&format!("<{link}>")),
        indent(&authors),
        indent(&keywords),
        String::new(),
    ]
}

fn indent(text: &str) -> String {
    if text.is_empty() {
        String::new()
    } else {
        format!("    {text}")
    }
}

fn cards_for_height(height: usize) -> usize {
    height.checked_div(CARD_HEIGHT).unwrap_or(0).max(1)
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::{CARD_HEIGHT, PaperListComponent, PaperListViewContext, format_card};
    use crate::papers::PaperRecord;
    use crate::papers::models::test_support::sample_papers;

    #[fixture]
    fn papers() -> Vec<PaperRecord> {
        sample_papers()
    }

    fn context<'a>(
        papers: &'a [PaperRecord],
        filtered_indices: &'a [usize],
    ) -> PaperListViewContext<'a> {
        PaperListViewContext {
            papers,
            filtered_indices,
            cursor_position: 0,
            scroll_offset: 0,
            visible_height: 40,
            max_width: 0,
        }
    }

    #[rstest]
    fn view_renders_one_card_per_paper_in_order(papers: Vec<PaperRecord>) {
        let indices = vec![0, 1];
        let output = PaperListComponent::new().view(&context(&papers, &indices));

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2 * CARD_HEIGHT);
        assert_eq!(lines.first().copied(), Some("> [arxiv] 2024-03-05"));
        assert_eq!(lines.get(1).copied(), Some("    Deep Nets"));
        assert_eq!(lines.get(3).copied(), Some("    A. Smith"));
        assert_eq!(lines.get(4).copied(), Some("    [neural]"));
        assert_eq!(lines.get(CARD_HEIGHT).copied(), Some("  [biorxiv] 2023-11-20"));
        assert_eq!(lines.get(CARD_HEIGHT + 3).copied(), Some(""));
        assert_eq!(lines.get(CARD_HEIGHT + 4).copied(), Some(""));
    }

    #[rstest]
    fn view_is_idempotent(papers: Vec<PaperRecord>) {
        let indices = vec![0, 1];
        let component = PaperListComponent::new();
        let ctx = context(&papers, &indices);

        assert_eq!(component.view(&ctx), component.view(&ctx));
    }

    #[rstest]
    fn view_shows_empty_message_when_nothing_matches(papers: Vec<PaperRecord>) {
        let indices: Vec<usize> = Vec::new();
        let output = PaperListComponent::new().view(&context(&papers, &indices));
        assert!(output.contains("No papers match"));
    }

    #[rstest]
    fn view_marks_cursor_card(papers: Vec<PaperRecord>) {
        let indices = vec![0, 1];
        let ctx = PaperListViewContext {
            cursor_position: 1,
            ..context(&papers, &indices)
        };
        let output = PaperListComponent::new().view(&ctx);

        assert!(output.contains("  [arxiv] 2024-03-05"));
        assert!(output.contains("> [biorxiv] 2023-11-20"));
    }

    #[rstest]
    fn view_only_draws_cards_that_fit(papers: Vec<PaperRecord>) {
        let indices = vec![0, 1];
        let ctx = PaperListViewContext {
            visible_height: CARD_HEIGHT,
            scroll_offset: 1,
            cursor_position: 1,
            ..context(&papers, &indices)
        };
        let output = PaperListComponent::new().view(&ctx);

        assert!(!output.contains("Deep Nets"), "scrolled-out card drawn");
        assert!(output.contains("Gene Study"));
    }

    #[rstest]
    fn view_truncates_long_lines(papers: Vec<PaperRecord>) {
        let indices = vec![0];
        let ctx = PaperListViewContext {
            max_width: 12,
            ..context(&papers, &indices)
        };
        let output = PaperListComponent::new().view(&ctx);

        assert!(output.lines().all(|line| line.chars().count() <= 12));
    }

    #[rstest]
    fn card_shows_link_of_title(papers: Vec<PaperRecord>) {
        let first = papers.first().expect("sample has papers");
        let lines = format_card(first, false);
        assert_eq!(
            lines.get(2).map(String::as_str),
            Some("    <https://example.org/deep-nets>")
        );
    }

    #[rstest]
    #[case(0, 1)]
    #[case(5, 1)]
    #[case(12, 2)]
    #[case(20, 3)]
    fn visible_cards_rounds_down_with_minimum_of_one(
        #[case] height: usize,
        #[case] expected: usize,
    ) {
        let mut component = PaperListComponent::new();
        component.set_visible_height(height);
        assert_eq!(component.visible_cards(), expected);
    }
}
