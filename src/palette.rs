//! The emoji button grid.
//!
//! The grid always ends with one unconfigured "+" slot. Pressing it opens
//! the picker; picking an emoji configures that slot and appends a fresh
//! "+" slot after it, so the grid grows one button at a time.

use crate::error::SimulationError;

/// Label shown on the unconfigured slot.
pub const ADD_LABEL: &str = "+";

/// One button of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmojiButton {
    /// Fires a burst of this emoji.
    Configured(String),
    /// Opens the picker.
    Unconfigured,
}

impl EmojiButton {
    /// Text drawn on the button.
    pub fn label(&self) -> &str {
        match self {
            EmojiButton::Configured(emoji) => emoji,
            EmojiButton::Unconfigured => ADD_LABEL,
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, EmojiButton::Configured(_))
    }
}

/// What the host should do in response to a button press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteAction {
    /// Spawn a burst of this emoji.
    Explode(String),
    /// Show the picker for the slot at this index.
    Configure(usize),
    /// The press hit nothing.
    None,
}

/// Ordered list of emoji buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiPalette {
    buttons: Vec<EmojiButton>,
}

impl EmojiPalette {
    /// A grid with only the "+" slot.
    pub fn new() -> Self {
        Self {
            buttons: vec![EmojiButton::Unconfigured],
        }
    }

    /// A grid preconfigured with `emojis`, followed by the "+" slot.
    ///
    /// Empty strings are skipped.
    pub fn with_emojis<I, S>(emojis: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut buttons: Vec<EmojiButton> = emojis
            .into_iter()
            .map(Into::<String>::into)
            .filter(|e| !e.is_empty())
            .map(EmojiButton::Configured)
            .collect();
        buttons.push(EmojiButton::Unconfigured);
        Self { buttons }
    }

    pub fn buttons(&self) -> &[EmojiButton] {
        &self.buttons
    }

    /// Resolve a press on the button at `index`.
    pub fn press(&self, index: usize) -> PaletteAction {
        match self.buttons.get(index) {
            Some(EmojiButton::Configured(emoji)) => PaletteAction::Explode(emoji.clone()),
            Some(EmojiButton::Unconfigured) => PaletteAction::Configure(index),
            None => PaletteAction::None,
        }
    }

    /// Configure the slot at `index` with `emoji`.
    ///
    /// Configuring the trailing "+" slot appends a new "+" slot. Returns
    /// `false` if `index` is out of range.
    pub fn assign(&mut self, index: usize, emoji: &str) -> Result<bool, SimulationError> {
        if emoji.is_empty() {
            return Err(SimulationError::EmptyEmoji);
        }
        let Some(slot) = self.buttons.get_mut(index) else {
            return Ok(false);
        };

        let was_add_slot = !slot.is_configured();
        *slot = EmojiButton::Configured(emoji.to_owned());
        if was_add_slot && index + 1 == self.buttons.len() {
            self.buttons.push(EmojiButton::Unconfigured);
        }
        Ok(true)
    }

    /// Configured emojis, in grid order.
    pub fn emojis(&self) -> impl Iterator<Item = &str> {
        self.buttons.iter().filter_map(|b| match b {
            EmojiButton::Configured(emoji) => Some(emoji.as_str()),
            EmojiButton::Unconfigured => None,
        })
    }
}

impl Default for EmojiPalette {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_palette_has_only_add_slot() {
        let palette = EmojiPalette::new();
        assert_eq!(palette.buttons(), &[EmojiButton::Unconfigured]);
        assert_eq!(palette.buttons()[0].label(), "+");
        assert_eq!(palette.press(0), PaletteAction::Configure(0));
    }

    #[test]
    fn test_assigning_add_slot_appends_new_one() {
        let mut palette = EmojiPalette::new();
        assert_eq!(palette.assign(0, "🎉"), Ok(true));
        assert_eq!(
            palette.buttons(),
            &[
                EmojiButton::Configured("🎉".into()),
                EmojiButton::Unconfigured
            ]
        );
        assert_eq!(palette.press(0), PaletteAction::Explode("🎉".into()));
        assert_eq!(palette.press(1), PaletteAction::Configure(1));
    }

    #[test]
    fn test_reassigning_configured_slot_keeps_length() {
        let mut palette = EmojiPalette::with_emojis(["🔥", "⭐"]);
        assert_eq!(palette.buttons().len(), 3);
        palette.assign(0, "💥").unwrap();
        assert_eq!(palette.buttons().len(), 3);
        assert_eq!(palette.emojis().collect::<Vec<_>>(), vec!["💥", "⭐"]);
    }

    #[test]
    fn test_out_of_range() {
        let mut palette = EmojiPalette::new();
        assert_eq!(palette.press(5), PaletteAction::None);
        assert_eq!(palette.assign(5, "🎉"), Ok(false));
        assert_eq!(palette.buttons().len(), 1);
    }

    #[test]
    fn test_empty_emoji_rejected() {
        let mut palette = EmojiPalette::new();
        assert_eq!(palette.assign(0, ""), Err(SimulationError::EmptyEmoji));
        let palette = EmojiPalette::with_emojis(["", "🐱"]);
        assert_eq!(palette.emojis().collect::<Vec<_>>(), vec!["🐱"]);
    }

    #[test]
    fn test_always_exactly_one_trailing_add_slot() {
        let mut palette = EmojiPalette::new();
        for emoji in ["🍕", "🍩", "🍓"] {
            let last = palette.buttons().len() - 1;
            palette.assign(last, emoji).unwrap();
        }
        let unconfigured = palette.buttons().iter().filter(|b| !b.is_configured()).count();
        assert_eq!(unconfigured, 1);
        assert_eq!(palette.buttons().last(), Some(&EmojiButton::Unconfigured));
    }
}
