//! Deck state: the source text, the current page and the presentation mode.

use deck_config::DeckConfig;
use markdown_pages::{page_at_offset, page_spans, range_for_page};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// What the deck is currently showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// One page at a time.
    #[default]
    Presenting,
    /// The raw markdown next to the current page.
    Editing,
    /// All the pages laid out at once.
    Printing,
}

/// Navigation target, always clamped to the existing pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Next,
    Prev,
    First,
    Last,
    To(isize),
}

/// Serializable view of a [`Deck`] for the host UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckSnapshot {
    pub index: usize,
    pub page_count: usize,
    pub mode: Mode,
    pub invert: bool,
    /// Progress in percent, only when the progress bar is shown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
    /// Location hash, only with hash sync enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Deck {
    markdown: String,
    /// Spans of the pages in `markdown`, never empty.
    pages: Vec<Range<usize>>,
    index: usize,
    mode: Mode,
    invert: bool,
    hotkey: bool,
    hash_sync: bool,
    progress_bar: bool,
}

impl Deck {
    /// Creates a deck at the first page with the default options.
    pub fn new(markdown: impl Into<String>) -> Self {
        Self::with_config(markdown, &DeckConfig::default())
    }

    pub fn with_config(markdown: impl Into<String>, config: &DeckConfig) -> Self {
        let mode = match (config.editing, config.printing) {
            (true, true) => {
                tracing::warn!("Both editing and printing are enabled, starting in editing mode");
                Mode::Editing
            }
            (true, false) => Mode::Editing,
            (false, true) => Mode::Printing,
            (false, false) => Mode::Presenting,
        };

        let mut deck = Self {
            markdown: String::new(),
            pages: vec![0..0],
            index: 0,
            mode,
            invert: config.invert,
            hotkey: config.hotkey,
            hash_sync: config.hash_sync,
            progress_bar: config.progress_bar,
        };
        deck.set_markdown(markdown);
        deck.navigate(Navigation::To(
            isize::try_from(config.index).unwrap_or(isize::MAX),
        ));
        deck
    }

    pub fn markdown(&self) -> &str {
        &self.markdown
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_inverted(&self) -> bool {
        self.invert
    }

    pub fn hotkey_enabled(&self) -> bool {
        self.hotkey
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn page(&self, index: usize) -> Option<&str> {
        self.pages
            .get(index)
            .map(|span| &self.markdown[span.clone()])
    }

    pub fn current_page(&self) -> &str {
        &self.markdown[self.pages[self.index].clone()]
    }

    pub fn pages(&self) -> Vec<&str> {
        self.pages
            .iter()
            .map(|span| &self.markdown[span.clone()])
            .collect()
    }

    /// Pages to render: all of them while printing, otherwise the current one.
    pub fn visible_pages(&self) -> Vec<&str> {
        match self.mode {
            Mode::Printing => self.pages(),
            Mode::Presenting | Mode::Editing => vec![self.current_page()],
        }
    }

    /// Replaces the source and re-paginates it.
    ///
    /// The current index is kept, clamped to the new last page.
    pub fn set_markdown(&mut self, markdown: impl Into<String>) {
        self.markdown = markdown.into();
        self.pages = page_spans(&self.markdown);
        self.index = self.index.min(self.last_index());
        tracing::debug!(
            len = self.markdown.len(),
            pages = self.pages.len(),
            index = self.index,
            "Paginated markdown"
        );
    }

    /// Applies an edit from the editor and follows the caret.
    ///
    /// `caret` is a byte offset into `markdown`.
    pub fn edit(&mut self, markdown: impl Into<String>, caret: usize) -> usize {
        self.set_markdown(markdown);
        self.index = page_at_offset(&self.markdown, caret).min(self.last_index());
        self.index
    }

    /// Moves to `to` and returns the new index.
    pub fn navigate(&mut self, to: Navigation) -> usize {
        let last = self.last_index() as isize;
        let current = self.index as isize;
        let target = match to {
            Navigation::Next => current.saturating_add(1),
            Navigation::Prev => current.saturating_sub(1),
            Navigation::First => 0,
            Navigation::Last => last,
            Navigation::To(index) => index,
        };
        self.index = target.clamp(0, last) as usize;
        tracing::debug!(?to, index = self.index, "Navigated");
        self.index
    }

    /// Selection to apply to the editor, the range of the current page.
    ///
    /// Only available while editing.
    pub fn selection(&self) -> Option<Range<usize>> {
        (self.mode == Mode::Editing)
            .then(|| range_for_page(&self.markdown, self.index as isize))
    }

    /// Opens or closes the editor, leaving printing mode if needed.
    pub fn toggle_editing(&mut self) -> Mode {
        self.mode = match self.mode {
            Mode::Editing => Mode::Presenting,
            Mode::Presenting | Mode::Printing => Mode::Editing,
        };
        self.mode
    }

    /// Enters or leaves printing mode, closing the editor if needed.
    pub fn toggle_printing(&mut self) -> Mode {
        self.mode = match self.mode {
            Mode::Printing => Mode::Presenting,
            Mode::Presenting | Mode::Editing => Mode::Printing,
        };
        self.mode
    }

    pub fn toggle_invert(&mut self) -> bool {
        self.invert = !self.invert;
        self.invert
    }

    /// Progress through the deck in percent.
    ///
    /// `None` unless the progress bar is enabled and the deck is not printing.
    pub fn progress(&self) -> Option<f64> {
        if !self.progress_bar || self.mode == Mode::Printing {
            return None;
        }
        let last = self.last_index();
        if last == 0 {
            Some(100.0)
        } else {
            Some(self.index as f64 / last as f64 * 100.0)
        }
    }

    /// Location hash for the current page, e.g. `#2`, with hash sync enabled.
    pub fn location_hash(&self) -> Option<String> {
        self.hash_sync.then(|| format!("#{}", self.index))
    }

    /// Navigates to the page named by a location hash, with hash sync enabled.
    ///
    /// A hash without a leading number goes to the first page.
    pub fn sync_from_hash(&mut self, hash: &str) -> Option<usize> {
        if !self.hash_sync {
            return None;
        }
        Some(self.navigate(Navigation::To(parse_hash_index(hash))))
    }

    pub fn snapshot(&self) -> DeckSnapshot {
        DeckSnapshot {
            index: self.index,
            page_count: self.page_count(),
            mode: self.mode,
            invert: self.invert,
            progress: self.progress(),
            hash: self.location_hash(),
        }
    }

    fn last_index(&self) -> usize {
        self.pages.len() - 1
    }
}

/// Parses the leading integer of a location hash such as `#3` or `#12-intro`.
fn parse_hash_index(hash: &str) -> isize {
    let s = hash.strip_prefix('#').unwrap_or(hash).trim_start();
    let sign_len = usize::from(s.starts_with(['-', '+']));
    let digits_len = s[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return 0;
    }
    let number = &s[..sign_len + digits_len];
    number.parse().unwrap_or_else(|_| {
        if number.starts_with('-') {
            isize::MIN
        } else {
            isize::MAX
        }
    })
}
