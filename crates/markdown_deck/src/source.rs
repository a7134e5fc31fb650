//! Loading and saving the markdown source of a deck.

use crate::deck::Deck;
use crate::error::DeckError;
use deck_config::DeckConfig;
use std::path::Path;

/// Lowercase extensions recognized as markdown.
const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown", "mdown", "mkdn", "mkd"];

/// Returns `true` if `path` has a markdown extension (case-insensitive).
///
/// # Examples
///
/// ```
/// use markdown_deck::is_markdown_path;
/// use std::path::Path;
///
/// assert!(is_markdown_path(Path::new("slides.md")));
/// assert!(is_markdown_path(Path::new("talk.MARKDOWN")));
/// assert!(!is_markdown_path(Path::new("slides.pdf")));
/// assert!(!is_markdown_path(Path::new("slides")));
/// ```
pub fn is_markdown_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            MARKDOWN_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

impl Deck {
    /// Opens the markdown file at `path` as a deck.
    pub fn open(path: impl AsRef<Path>, config: &DeckConfig) -> Result<Self, DeckError> {
        let path = path.as_ref();
        if !is_markdown_path(path) {
            return Err(DeckError::UnsupportedFile(path.to_path_buf()));
        }
        let markdown = std::fs::read_to_string(path)?;
        let deck = Self::with_config(markdown, config);
        tracing::info!(path = ?path, pages = deck.page_count(), "Opened deck");
        Ok(deck)
    }

    /// Writes the current source to `path`, returns the number of bytes written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<usize, DeckError> {
        let path = path.as_ref();
        std::fs::write(path, self.markdown())?;
        tracing::info!(path = ?path, bytes = self.markdown().len(), "Saved deck");
        Ok(self.markdown().len())
    }
}
