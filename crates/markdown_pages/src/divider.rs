//! The page divider rule shared by the paginator and the offset mapper.

use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

/// A line of three or more `-`, or three or more `*`, bounded by newlines.
///
/// The start and the end of the source stand in for the bounding newline, so a
/// divider on the first or last line still splits. The bounding newlines are
/// part of the match.
static DIVIDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\A|\n)(?:-{3,}|\*{3,})(?:\n|\z)").unwrap());

/// Returns the byte spans of every divider in `source`, left to right.
///
/// Matches never overlap: a newline consumed as the trailing bound of one
/// divider can not open the next one, hence `"a\n---\n---\nb"` holds a single
/// divider.
///
/// # Example
///
/// ```
/// use markdown_pages::dividers;
///
/// let spans = dividers("P1\n---\nP2").collect::<Vec<_>>();
/// assert_eq!(spans, vec![2..7]);
/// ```
pub fn dividers(source: &str) -> impl Iterator<Item = Range<usize>> + '_ {
    DIVIDER.find_iter(source).map(|m| m.range())
}

/// Returns `true` if `line`, without its line ending, is a divider line.
///
/// Mixed markers such as `-*-` are not dividers.
pub fn is_divider_line(line: &str) -> bool {
    DIVIDER
        .find(line)
        .map(|m| m.range() == (0..line.len()))
        .unwrap_or(false)
}
