use std::path::PathBuf;

/// Error type for loading and saving a deck.
#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    /// I/O error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a markdown document.
    #[error("Unsupported file: {}", .0.display())]
    UnsupportedFile(PathBuf),
}
