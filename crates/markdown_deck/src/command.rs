//! Mapping of keyboard and touch input to deck commands.

use crate::deck::{Deck, Navigation};
use serde::{Deserialize, Serialize};

/// A keyboard event as reported by the host.
///
/// `code` is the physical key code, e.g. `ArrowRight` or `KeyL`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyInput {
    pub code: String,
    pub shift: bool,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyInput {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            ..Default::default()
        }
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Navigate(Navigation),
    ToggleInvert,
    ToggleEditing,
    TogglePrinting,
}

impl Command {
    /// Returns the command bound to `key`, if any.
    ///
    /// Keys held with ctrl or meta are left to the host (e.g. save shortcuts).
    pub fn from_key(key: &KeyInput) -> Option<Self> {
        if key.ctrl || key.meta {
            return None;
        }

        let (forward, backward) = if key.shift {
            (Navigation::Prev, Navigation::Next)
        } else {
            (Navigation::Next, Navigation::Prev)
        };

        let command = match key.code.as_str() {
            "Space" | "ArrowRight" | "KeyL" => Self::Navigate(forward),
            "ArrowLeft" | "KeyJ" => Self::Navigate(backward),
            "ArrowUp" => Self::Navigate(Navigation::First),
            "ArrowDown" => Self::Navigate(Navigation::Last),
            "KeyI" | "KeyD" => Self::ToggleInvert,
            "Escape" => Self::ToggleEditing,
            "KeyP" => Self::TogglePrinting,
            _ => return None,
        };

        Some(command)
    }

    /// Returns the command for a swipe of `(dx, dy)` pixels.
    ///
    /// Only mostly horizontal swipes count: swiping right goes back, swiping
    /// left goes forward.
    pub fn from_swipe(dx: f64, dy: f64) -> Option<Self> {
        if dx.abs() <= dy.abs() {
            return None;
        }
        if dx > 0.0 {
            Some(Self::Navigate(Navigation::Prev))
        } else {
            Some(Self::Navigate(Navigation::Next))
        }
    }
}

impl Deck {
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Navigate(to) => {
                self.navigate(to);
            }
            Command::ToggleInvert => {
                self.toggle_invert();
            }
            Command::ToggleEditing => {
                self.toggle_editing();
            }
            Command::TogglePrinting => {
                self.toggle_printing();
            }
        }
    }

    /// Handles a key press, returns `true` if it was consumed.
    ///
    /// Always `false` unless hotkeys are enabled for this deck.
    pub fn handle_key(&mut self, key: &KeyInput) -> bool {
        if !self.hotkey_enabled() {
            return false;
        }
        match Command::from_key(key) {
            Some(command) => {
                tracing::trace!(?key, ?command, "Hotkey");
                self.apply(command);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Mode;
    use deck_config::DeckConfig;

    const MD: &str = "one\n---\ntwo\n---\nthree";

    fn hotkey_deck() -> Deck {
        Deck::with_config(
            MD,
            &DeckConfig {
                hotkey: true,
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_key_bindings() {
        let next = Some(Command::Navigate(Navigation::Next));
        let prev = Some(Command::Navigate(Navigation::Prev));

        assert_eq!(Command::from_key(&KeyInput::new("Space")), next);
        assert_eq!(Command::from_key(&KeyInput::new("ArrowRight")), next);
        assert_eq!(Command::from_key(&KeyInput::new("KeyL")), next);
        assert_eq!(Command::from_key(&KeyInput::new("ArrowLeft")), prev);
        assert_eq!(Command::from_key(&KeyInput::new("KeyJ")), prev);
        assert_eq!(
            Command::from_key(&KeyInput::new("ArrowUp")),
            Some(Command::Navigate(Navigation::First))
        );
        assert_eq!(
            Command::from_key(&KeyInput::new("ArrowDown")),
            Some(Command::Navigate(Navigation::Last))
        );
        assert_eq!(
            Command::from_key(&KeyInput::new("KeyD")),
            Some(Command::ToggleInvert)
        );
        assert_eq!(
            Command::from_key(&KeyInput::new("Escape")),
            Some(Command::ToggleEditing)
        );
        assert_eq!(
            Command::from_key(&KeyInput::new("KeyP")),
            Some(Command::TogglePrinting)
        );
        assert_eq!(Command::from_key(&KeyInput::new("KeyX")), None);
    }

    #[test]
    fn test_shift_reverses_direction() {
        assert_eq!(
            Command::from_key(&KeyInput::new("Space").with_shift()),
            Some(Command::Navigate(Navigation::Prev))
        );
        assert_eq!(
            Command::from_key(&KeyInput::new("KeyJ").with_shift()),
            Some(Command::Navigate(Navigation::Next))
        );
    }

    #[test]
    fn test_modifier_keys_are_ignored() {
        let save = KeyInput {
            code: "KeyS".into(),
            ctrl: true,
            ..Default::default()
        };
        assert_eq!(Command::from_key(&save), None);

        let next = KeyInput {
            code: "ArrowRight".into(),
            meta: true,
            ..Default::default()
        };
        assert_eq!(Command::from_key(&next), None);
    }

    #[test]
    fn test_swipe() {
        assert_eq!(
            Command::from_swipe(80.0, 10.0),
            Some(Command::Navigate(Navigation::Prev))
        );
        assert_eq!(
            Command::from_swipe(-80.0, -10.0),
            Some(Command::Navigate(Navigation::Next))
        );
        assert_eq!(Command::from_swipe(10.0, 80.0), None);
        assert_eq!(Command::from_swipe(0.0, 0.0), None);
    }

    #[test]
    fn test_handle_key() {
        let mut deck = hotkey_deck();
        assert!(deck.handle_key(&KeyInput::new("ArrowRight")));
        assert_eq!(deck.index(), 1);
        assert!(deck.handle_key(&KeyInput::new("ArrowDown")));
        assert_eq!(deck.index(), 2);
        assert!(deck.handle_key(&KeyInput::new("Escape")));
        assert_eq!(deck.mode(), Mode::Editing);
        assert!(deck.handle_key(&KeyInput::new("KeyP")));
        assert_eq!(deck.mode(), Mode::Printing);
        assert!(!deck.handle_key(&KeyInput::new("KeyZ")));
    }

    #[test]
    fn test_hotkeys_disabled() {
        let mut deck = Deck::new(MD);
        assert!(!deck.handle_key(&KeyInput::new("ArrowRight")));
        assert_eq!(deck.index(), 0);

        // Commands still apply when driven by the host directly.
        deck.apply(Command::Navigate(Navigation::Last));
        assert_eq!(deck.index(), 2);
    }

    #[test]
    fn test_key_input_deserialize() {
        let key: KeyInput = serde_json::from_str(r#"{"code":"KeyL","shift":true}"#).unwrap();
        assert_eq!(key, KeyInput::new("KeyL").with_shift());
    }
}
