//! Host-side state of a markdown slide deck.
//!
//! [`Deck`] holds the markdown source and the page being presented. Every text
//! change re-paginates the source from scratch through [`markdown_pages`], and
//! the editor selection is derived from the same page boundaries, so the
//! presented page and the edited text never drift apart.
//!
//! # Modules
//!
//! - [`command`] - Hotkey and swipe mapping to deck commands
//! - [`deck`] - Deck state, navigation and modes
//! - [`source`] - Loading and saving the markdown source

pub mod command;
pub mod deck;
mod error;
pub mod source;

pub use command::{Command, KeyInput};
pub use deck::{Deck, DeckSnapshot, Mode, Navigation};
pub use error::DeckError;
pub use source::is_markdown_path;

pub use deck_config::{Config, DeckConfig};
