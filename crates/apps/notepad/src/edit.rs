//! Pure text-edit operations over character offsets.
//!
//! Offsets come from the textarea selection API and are treated as character
//! indices. Cut, delete, and range-replacing paste remove the character
//! *after* the selection end as well: those menu actions treat the selection
//! end as inclusive while copy treats it as exclusive. This asymmetry is
//! long-standing observed behavior of the editor; it is pinned by the tests
//! below rather than silently corrected (see DESIGN.md).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Character-offset selection span reported by the editor surface.
pub struct SelectionSpan {
    /// First selected character index.
    pub start: usize,
    /// Selection end offset (exclusive for copy, inclusive for cut/delete).
    pub end: usize,
}

impl SelectionSpan {
    /// Whether the span selects no characters.
    pub const fn is_collapsed(&self) -> bool {
        self.start == self.end
    }
}

fn char_to_byte(content: &str, index: usize) -> usize {
    content
        .char_indices()
        .nth(index)
        .map(|(byte, _)| byte)
        .unwrap_or(content.len())
}

/// Returns the selected text, end-exclusive (the copy path).
pub fn selected_text(content: &str, span: SelectionSpan) -> String {
    let start = char_to_byte(content, span.start);
    let end = char_to_byte(content, span.end);
    content.get(start..end).unwrap_or("").to_string()
}

/// Removes the selection plus the character at `end` (the cut/delete path).
pub fn remove_selection(content: &str, span: SelectionSpan) -> String {
    let start = char_to_byte(content, span.start);
    let resume = char_to_byte(content, span.end.saturating_add(1));
    let mut next = String::with_capacity(content.len());
    next.push_str(content.get(..start).unwrap_or(""));
    next.push_str(content.get(resume..).unwrap_or(""));
    next
}

/// Inserts `clip` at the selection.
///
/// A collapsed span is a plain insertion; a range span replaces the selection
/// through the inclusive end, mirroring [`remove_selection`].
pub fn paste_over(content: &str, span: SelectionSpan, clip: &str) -> String {
    let start = char_to_byte(content, span.start);
    let resume = if span.is_collapsed() {
        char_to_byte(content, span.end)
    } else {
        char_to_byte(content, span.end.saturating_add(1))
    };
    let mut next = String::with_capacity(content.len() + clip.len());
    next.push_str(content.get(..start).unwrap_or(""));
    next.push_str(clip);
    next.push_str(content.get(resume..).unwrap_or(""));
    next
}

/// Returns the 1-based (line, column) of a caret given the text before it.
pub fn caret_position(text_before_caret: &str) -> (usize, usize) {
    let lines: Vec<&str> = text_before_caret.split('\n').collect();
    let row = lines.len();
    let col = lines
        .last()
        .map(|line| line.chars().count())
        .unwrap_or(0)
        + 1;
    (row, col)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const fn span(start: usize, end: usize) -> SelectionSpan {
        SelectionSpan { start, end }
    }

    #[test]
    fn copy_is_end_exclusive() {
        assert_eq!(selected_text("hello world", span(0, 5)), "hello");
        assert_eq!(selected_text("hello world", span(6, 11)), "world");
    }

    #[test]
    fn cut_also_removes_the_character_at_the_selection_end() {
        // The copy path would take "hello"; the removal path additionally
        // consumes the space at offset 5. Pinned, not fixed.
        assert_eq!(remove_selection("hello world", span(0, 5)), "world");
        assert_eq!(remove_selection("abcdef", span(2, 4)), "abf");
    }

    #[test]
    fn removal_at_the_end_of_the_buffer_is_safe() {
        assert_eq!(remove_selection("abc", span(1, 3)), "a");
        assert_eq!(remove_selection("abc", span(0, 99)), "");
    }

    #[test]
    fn collapsed_paste_inserts_without_removing_anything() {
        assert_eq!(paste_over("abcdef", span(2, 2), "XY"), "abXYcdef");
        assert_eq!(paste_over("", span(0, 0), "text"), "text");
    }

    #[test]
    fn range_paste_replaces_through_the_inclusive_end() {
        // Mirrors remove_selection: "cd" plus the following "e" are gone.
        assert_eq!(paste_over("abcdef", span(2, 4), "XY"), "abXYf");
    }

    #[test]
    fn offsets_are_character_based_for_multibyte_text() {
        assert_eq!(selected_text("héllo wörld", span(0, 5)), "héllo");
        assert_eq!(remove_selection("héllo wörld", span(0, 5)), "wörld");
    }

    #[test]
    fn caret_position_is_one_based_line_and_column() {
        assert_eq!(caret_position(""), (1, 1));
        assert_eq!(caret_position("one"), (1, 4));
        assert_eq!(caret_position("one\ntwo"), (2, 4));
        assert_eq!(caret_position("one\n"), (2, 1));
    }
}
