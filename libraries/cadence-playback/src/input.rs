//! User intents and key bindings

use crate::types::{TrackId, TrackRef};
use crate::ui::ShuffleScope;

/// Something the user (or another view) asked the player to do
#[derive(Debug, Clone, PartialEq)]
pub enum UserIntent {
    Play,
    Pause,
    TogglePlayback,
    Next,
    Previous,
    /// Seek bar dragged to a value in `[0, 100]`
    Seek(f64),
    ToggleRepeat,
    ToggleAlbumRepeat,
    Shuffle(ShuffleScope),
    SetVolume(u8),
    ToggleMute,
    /// "Track selected by id" signal
    SelectTrack(TrackId),
    /// "Play this track" signal, possibly from outside the catalog
    PlayTrack(TrackRef),
    /// Any click or key press; releases a pending resume
    Gesture,
}

/// Where keyboard focus is when a key arrives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Page,
    /// A text field; keys belong to it
    TextInput,
}

/// A key press with its focus context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub key: char,
    pub focus: Focus,
}

impl KeyInput {
    pub fn new(key: char, focus: Focus) -> Self {
        Self { key, focus }
    }

    /// Global binding for this key, if any
    ///
    /// Space toggles playback unless a text input has focus.
    pub fn intent(&self) -> Option<UserIntent> {
        match (self.key, self.focus) {
            (' ', Focus::Page) => Some(UserIntent::TogglePlayback),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_toggles_playback_on_page() {
        assert_eq!(
            KeyInput::new(' ', Focus::Page).intent(),
            Some(UserIntent::TogglePlayback)
        );
    }

    #[test]
    fn space_ignored_in_text_input() {
        assert_eq!(KeyInput::new(' ', Focus::TextInput).intent(), None);
    }

    #[test]
    fn other_keys_unbound() {
        assert_eq!(KeyInput::new('x', Focus::Page).intent(), None);
    }
}
