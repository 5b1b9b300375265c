//! Keyboard mapping shared by the controllers

/// Keys the page reacts to. Everything else maps to [`Key::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Escape,
    Tab,
    Other,
}

impl Key {
    /// Map a `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_key_value(key: &str) -> Self {
        match key {
            "Enter" => Self::Enter,
            " " | "Spacebar" => Self::Space,
            "Escape" | "Esc" => Self::Escape,
            "Tab" => Self::Tab,
            _ => Self::Other,
        }
    }

    /// Keys that activate a focused toggle control the same way a click does.
    #[must_use]
    pub const fn is_activation(self) -> bool {
        matches!(self, Self::Enter | Self::Space)
    }
}

/// A key plus the modifier that reverses focus navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub shift: bool,
}

impl KeyPress {
    #[must_use]
    pub const fn new(key: Key) -> Self {
        Self { key, shift: false }
    }

    #[must_use]
    pub const fn with_shift(key: Key) -> Self {
        Self { key, shift: true }
    }
}
