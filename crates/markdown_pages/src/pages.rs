//! Splitting a markdown source into pages.

use crate::divider::dividers;
use std::ops::Range;

/// Returns the byte span of each page in `source`, in document order.
///
/// There is always at least one span. Spans never overlap and never cover any
/// part of a divider, including the divider's bounding newlines.
pub fn page_spans(source: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut start = 0;
    for divider in dividers(source) {
        spans.push(start..divider.start);
        start = divider.end;
    }
    spans.push(start..source.len());
    spans
}

/// Splits `source` into pages on every divider line.
///
/// The dividers are discarded. An empty source, or one without dividers, is a
/// single page. A divider at the very start or end yields an empty page on that
/// side.
///
/// # Example
///
/// ```
/// use markdown_pages::split_to_pages;
///
/// assert_eq!(split_to_pages("page1\n---\npage2"), vec!["page1", "page2"]);
/// assert_eq!(split_to_pages("---\nPage 2\n---"), vec!["", "Page 2", ""]);
/// assert_eq!(split_to_pages(""), vec![""]);
/// ```
pub fn split_to_pages(source: &str) -> Vec<&str> {
    page_spans(source)
        .into_iter()
        .map(|span| &source[span])
        .collect()
}

/// Returns the number of pages in `source`, which is at least 1.
pub fn page_count(source: &str) -> usize {
    dividers(source).count() + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    const MD: &str = "\n# Title\n---\npage 1\n------\npage 2\n***\npage 3\n******\npage 4\n";

    #[test]
    fn test_split_by_horizontal_rules() {
        let pages = split_to_pages(MD);
        assert_eq!(pages.len(), 5);
        assert_eq!(
            pages,
            vec!["\n# Title", "page 1", "page 2", "page 3", "page 4\n"]
        );
        assert_eq!(page_count(MD), 5);
    }

    #[test]
    fn test_single_page() {
        assert_eq!(split_to_pages("# Hello World"), vec!["# Hello World"]);
        assert_eq!(split_to_pages(""), vec![""]);
        assert_eq!(page_count(""), 1);
    }

    #[test]
    fn test_divider_markers() {
        assert_eq!(split_to_pages("page1\n---\npage2"), vec!["page1", "page2"]);
        assert_eq!(split_to_pages("page1\n***\npage2"), vec!["page1", "page2"]);
        assert_eq!(split_to_pages("a\n------\nb\n******\nc").len(), 3);
    }

    #[test]
    fn test_edge_dividers_yield_empty_pages() {
        assert_eq!(split_to_pages("---\nPage 2\n---"), vec!["", "Page 2", ""]);
        assert_eq!(split_to_pages("---"), vec!["", ""]);
        assert_eq!(split_to_pages("a\n---\n"), vec!["a", ""]);
    }

    #[test]
    fn test_mixed_markers_are_content() {
        assert_eq!(split_to_pages("a\n-*-\nb"), vec!["a\n-*-\nb"]);
        assert_eq!(split_to_pages("a\n-**\nb"), vec!["a\n-**\nb"]);
    }

    #[test]
    fn test_back_to_back_dividers() {
        assert_eq!(split_to_pages("a\n---\n---\nb"), vec!["a", "---\nb"]);
        assert_eq!(split_to_pages("a\n---\n\n---\nb"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_gaps_between_pages_are_dividers() {
        let spans = page_spans(MD);
        assert_eq!(spans.first().map(|s| s.start), Some(0));
        assert_eq!(spans.last().map(|s| s.end), Some(MD.len()));
        for pair in spans.windows(2) {
            let gap = &MD[pair[0].end..pair[1].start];
            assert!(crate::is_divider_line(gap.trim_matches('\n')), "{gap:?}");
        }
    }
}
