//! Mapping between page indices and offsets in the original source.
//!
//! The mapper counts dividers from the start of the source instead of calling
//! the paginator, as it needs offsets into the un-split text. It walks the same
//! [`dividers`] iterator, so for every valid index
//! `&source[range_for_page(source, i)] == split_to_pages(source)[i]`.

use crate::divider::dividers;
use std::ops::Range;

/// Returns the length of the prefix of `source` made of exactly `units`
/// complete page-plus-divider units, trailing divider included.
///
/// Returns `None` if `source` holds fewer than `units` dividers. Zero units is
/// the empty prefix.
///
/// ```
/// use markdown_pages::prefix_len;
///
/// assert_eq!(prefix_len("P1\n---\nP2", 0), Some(0));
/// assert_eq!(prefix_len("P1\n---\nP2", 1), Some(7));
/// assert_eq!(prefix_len("P1\n---\nP2", 2), None);
/// ```
pub fn prefix_len(source: &str, units: usize) -> Option<usize> {
    match units.checked_sub(1) {
        None => Some(0),
        Some(n) => dividers(source).nth(n).map(|divider| divider.end),
    }
}

/// Returns the byte range of page `index` in `source`, dividers excluded.
///
/// An index past the last page, or a negative one, yields the empty range
/// `len..len` rather than an error.
///
/// # Example
///
/// ```
/// use markdown_pages::range_for_page;
///
/// let md = "P1\n---\nP2";
/// assert_eq!(range_for_page(md, 0), 0..2);
/// assert_eq!(range_for_page(md, 1), 7..9);
/// assert_eq!(range_for_page(md, 2), 9..9);
/// assert_eq!(range_for_page(md, -1), 9..9);
/// ```
pub fn range_for_page(source: &str, index: isize) -> Range<usize> {
    let len = source.len();
    let Ok(index) = usize::try_from(index) else {
        return len..len;
    };

    // The prefix of `index + 1` units minus its trailing divider. Without
    // enough dividers the page runs to the end of the source.
    let end = dividers(source)
        .nth(index)
        .map(|divider| divider.start)
        .unwrap_or(len);
    let start = prefix_len(source, index).unwrap_or(len);

    start..end
}

/// Returns the index of the page containing `offset`.
///
/// Both ends of a page's range belong to that page. An offset inside a divider
/// belongs to the page before it, an offset past the end of the source to the
/// last page.
///
/// ```
/// use markdown_pages::page_at_offset;
///
/// let md = "P1\n---\nP2";
/// assert_eq!(page_at_offset(md, 0), 0);
/// assert_eq!(page_at_offset(md, 4), 0);
/// assert_eq!(page_at_offset(md, 7), 1);
/// ```
pub fn page_at_offset(source: &str, offset: usize) -> usize {
    dividers(source)
        .take_while(|divider| divider.end <= offset)
        .count()
}
