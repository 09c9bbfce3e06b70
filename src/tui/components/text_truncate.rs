//! Width truncation helpers for terminal card lines.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";

/// Truncates a line to at most `max_width` display columns.
///
/// Lines that fit are returned unchanged. Longer lines are cut at a character
/// boundary and end with `...` when there is room for it. A `max_width` of
/// zero disables truncation.
pub(crate) fn truncate_to_width(line: &str, max_width: usize) -> String {
    if max_width == 0 || line.width() <= max_width {
        return line.to_owned();
    }

    let ellipsis_width = ELLIPSIS.width();
    let (budget, suffix) = if max_width > ellipsis_width {
        (max_width.saturating_sub(ellipsis_width), ELLIPSIS)
    } else {
        (max_width, "")
    };

    let mut output = String::new();
    let mut visible_width = 0_usize;
    for ch in line.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if visible_width.saturating_add(char_width) > budget {
            break;
        }
        output.push(ch);
        visible_width = visible_width.saturating_add(char_width);
    }
    output.push_str(suffix);
    output
}
