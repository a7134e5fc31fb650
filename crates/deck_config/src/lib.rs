use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Result of reading a config file.
///
/// A config that fails to parse falls back to the defaults, the parse error is
/// kept around so that the caller can report it.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    pub file_path: PathBuf,
    pub maybe_error: Option<toml::de::Error>,
}

/// Loads the config from `config_file`.
///
/// A missing or unreadable file silently yields the default config.
pub fn load_config(config_file: impl AsRef<Path>) -> LoadedConfig {
    let file_path = config_file.as_ref().to_path_buf();

    let mut maybe_error = None;
    let config = match std::fs::read_to_string(&file_path) {
        Ok(contents) => Config::from_toml_str(&contents).unwrap_or_else(|err| {
            tracing::warn!(path = ?file_path, %err, "Invalid deck config, using defaults");
            maybe_error.replace(err);
            Config::default()
        }),
        Err(err) => {
            tracing::debug!(path = ?file_path, ?err, "No deck config loaded");
            Config::default()
        }
    };

    LoadedConfig {
        config,
        file_path,
        maybe_error,
    }
}

/// Presentation options of a deck.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct DeckConfig {
    /// Whether keyboard shortcuts drive the deck.
    pub hotkey: bool,

    /// Keep the page index in sync with the location hash (`#3`).
    pub hash_sync: bool,

    /// Whether to display the progress bar.
    pub progress_bar: bool,

    /// Start in printing mode, with all the pages laid out at once.
    pub printing: bool,

    /// Start with the editor open.
    ///
    /// Takes precedence over `printing` when both are set.
    pub editing: bool,

    /// Start with inverted colors.
    pub invert: bool,

    /// Page to open the deck at, clamped to the last page.
    pub index: usize,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Config {
    /// Deck config.
    ///
    /// ```toml
    /// [deck]
    /// hotkey = true
    /// progress-bar = true
    /// ```
    pub deck: DeckConfig,
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}
