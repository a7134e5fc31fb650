//! Conversions between UTF-8 byte offsets and UTF-16 code unit offsets.
//!
//! Browser text areas report selections in UTF-16 code units while the rest of
//! this crate speaks byte offsets.

use crate::range::range_for_page;
use std::ops::Range;

/// Converts a byte offset into a UTF-16 offset.
///
/// An offset inside a multi-byte character is floored to that character's
/// start; an offset past the end is clamped to the end.
///
/// ```
/// use markdown_pages::utf16_offset;
///
/// assert_eq!(utf16_offset("héllo", 3), 2);
/// assert_eq!(utf16_offset("😀a", 4), 2);
/// ```
pub fn utf16_offset(source: &str, byte_offset: usize) -> usize {
    let mut end = byte_offset.min(source.len());
    while !source.is_char_boundary(end) {
        end -= 1;
    }
    source[..end].encode_utf16().count()
}

/// Converts a UTF-16 offset into a byte offset.
///
/// An offset that falls between the two halves of a surrogate pair is floored
/// to the start of that character; an offset past the end is clamped to the
/// end.
///
/// ```
/// use markdown_pages::byte_offset;
///
/// assert_eq!(byte_offset("héllo", 2), 3);
/// assert_eq!(byte_offset("😀a", 2), 4);
/// ```
pub fn byte_offset(source: &str, utf16_offset: usize) -> usize {
    let mut units = 0;
    for (index, ch) in source.char_indices() {
        units += ch.len_utf16();
        if units > utf16_offset {
            return index;
        }
    }
    source.len()
}

/// Same as [`range_for_page`] but in UTF-16 code units.
pub fn utf16_range_for_page(source: &str, index: isize) -> Range<usize> {
    let Range { start, end } = range_for_page(source, index);
    utf16_offset(source, start)..utf16_offset(source, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_is_identity() {
        let md = "P1\n---\nP2";
        for offset in 0..=md.len() {
            assert_eq!(utf16_offset(md, offset), offset);
            assert_eq!(byte_offset(md, offset), offset);
        }
    }

    #[test]
    fn test_multi_byte() {
        let md = "日本\n---\n😀 end";
        // "日本" is 6 bytes and 2 code units, the divider 5 of each.
        assert_eq!(utf16_offset(md, 6), 2);
        assert_eq!(utf16_offset(md, 11), 7);
        assert_eq!(utf16_offset(md, 15), 9);
        assert_eq!(byte_offset(md, 7), 11);
        assert_eq!(byte_offset(md, 9), 15);
        // Inside a character or a surrogate pair.
        assert_eq!(utf16_offset(md, 1), 0);
        assert_eq!(byte_offset(md, 8), 11);
    }

    #[test]
    fn test_clamped_to_end() {
        assert_eq!(utf16_offset("ab", 10), 2);
        assert_eq!(byte_offset("ab", 10), 2);
        assert_eq!(byte_offset("", 0), 0);
    }

    #[test]
    fn test_utf16_range_for_page() {
        let md = "日本\n---\n😀 end";
        assert_eq!(utf16_range_for_page(md, 0), 0..2);
        assert_eq!(utf16_range_for_page(md, 1), 7..13);
        assert_eq!(utf16_range_for_page(md, 2), 13..13);
    }
}
