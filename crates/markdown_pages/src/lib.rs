//! Pagination of a markdown document into slide pages.
//!
//! A deck is a single markdown source where pages are separated by horizontal
//! rules (`---`, `***`, or longer runs of the same marker) standing on a line of
//! their own. This crate provides the two views of that split the host needs:
//!
//! - [`split_to_pages`] - the ordered page texts, for rendering.
//! - [`range_for_page`] - where a page lives in the original source, for moving
//!   the editor selection when switching between presenting and editing.
//!
//! Both are derived from the single divider definition in [`divider`], so they
//! always agree on what a page is.
//!
//! All offsets are UTF-8 byte offsets into the source. See [`utf16`] for
//! converting them for editors that count UTF-16 code units.

pub mod divider;
pub mod pages;
pub mod range;
pub mod utf16;

pub use divider::{dividers, is_divider_line};
pub use pages::{page_count, page_spans, split_to_pages};
pub use range::{page_at_offset, prefix_len, range_for_page};
pub use utf16::{byte_offset, utf16_offset, utf16_range_for_page};
