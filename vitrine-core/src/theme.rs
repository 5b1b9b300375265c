//! Light/dark theme preference
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::Messages;
use crate::store::PreferenceStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    /// Parse a stored value; anything but the two exact names is rejected.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve the theme to start with: the stored value when valid, else the
/// system preference. Read failures count as "nothing stored".
pub fn load_theme<S: PreferenceStore>(store: &S, key: &str, prefers_dark: bool) -> Theme {
    match store.get(key) {
        Ok(Some(saved)) => Theme::parse(&saved).unwrap_or_else(|| {
            log::debug!("ignoring unrecognized stored theme {saved:?}");
            Theme::from_system(prefers_dark)
        }),
        Ok(None) => Theme::from_system(prefers_dark),
        Err(err) => {
            log::debug!("theme preference unreadable, using system preference: {err}");
            Theme::from_system(prefers_dark)
        }
    }
}

/// What the page should show for a theme. The toggle describes the action a
/// click will take, not the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePresentation<'a> {
    pub dark: bool,
    pub label: &'a str,
    pub title: &'a str,
    pub pressed: bool,
}

impl<'a> ThemePresentation<'a> {
    #[must_use]
    pub fn for_theme(theme: Theme, messages: &'a Messages) -> Self {
        match theme {
            Theme::Dark => Self {
                dark: true,
                label: &messages.theme_to_light,
                title: &messages.theme_to_light_title,
                pressed: true,
            },
            Theme::Light => Self {
                dark: false,
                label: &messages.theme_to_dark,
                title: &messages.theme_to_dark_title,
                pressed: false,
            },
        }
    }

    #[must_use]
    pub const fn aria_pressed(&self) -> &'static str {
        if self.pressed { "true" } else { "false" }
    }
}

/// Owns the current theme and persists every change.
#[derive(Debug)]
pub struct ThemeController<S: PreferenceStore> {
    store: S,
    key: String,
    current: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn load(store: S, key: impl Into<String>, prefers_dark: bool) -> Self {
        let key = key.into();
        let current = load_theme(&store, &key, prefers_dark);
        Self {
            store,
            key,
            current,
        }
    }

    #[must_use]
    pub const fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme and persist it. Persistence is best effort.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        if let Err(err) = self.store.set(&self.key, self.current.as_str()) {
            log::warn!("could not persist theme {}: {err}", self.current);
        }
        self.current
    }

    #[must_use]
    pub fn presentation<'a>(&self, messages: &'a Messages) -> ThemePresentation<'a> {
        ThemePresentation::for_theme(self.current, messages)
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
