//! Collapsible navigation menu
use crate::input::Key;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    #[must_use]
    pub const fn aria_expanded(self) -> &'static str {
        if self.is_open() { "true" } else { "false" }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// Pointer activation of the toggle control.
    ToggleActivated,
    /// Key pressed while the toggle control has focus.
    ToggleKey(Key),
    /// An in-page navigation link inside the menu was followed.
    LinkSelected,
    /// Key pressed anywhere in the document.
    DocumentKey(Key),
    /// Pointer interaction anywhere in the document.
    Pointer {
        inside_menu: bool,
        inside_toggle: bool,
    },
}

/// Result of feeding an event to the menu. The state should be re-applied
/// even when unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuTransition {
    pub state: MenuState,
    pub prevent_default: bool,
}

#[derive(Debug, Clone, Default)]
pub struct MenuController {
    state: MenuState,
}

impl MenuController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> MenuState {
        self.state
    }

    pub fn handle(&mut self, event: MenuEvent) -> MenuTransition {
        let mut prevent_default = false;
        match event {
            MenuEvent::ToggleActivated => self.flip(),
            MenuEvent::ToggleKey(key) if key.is_activation() => {
                prevent_default = true;
                self.flip();
            }
            MenuEvent::ToggleKey(_) => {}
            MenuEvent::LinkSelected | MenuEvent::DocumentKey(Key::Escape) => {
                self.state = MenuState::Closed;
            }
            MenuEvent::DocumentKey(_) => {}
            MenuEvent::Pointer {
                inside_menu,
                inside_toggle,
            } => {
                if !inside_menu && !inside_toggle {
                    self.state = MenuState::Closed;
                }
            }
        }
        MenuTransition {
            state: self.state,
            prevent_default,
        }
    }

    fn flip(&mut self) {
        self.state = match self.state {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opened() -> MenuController {
        let mut menu = MenuController::new();
        menu.handle(MenuEvent::ToggleActivated);
        menu
    }

    #[test]
    fn starts_closed_and_toggle_flips() {
        let mut menu = MenuController::new();
        assert_eq!(menu.state(), MenuState::Closed);
        assert!(menu.handle(MenuEvent::ToggleActivated).state.is_open());
        assert!(!menu.handle(MenuEvent::ToggleActivated).state.is_open());
    }

    #[test]
    fn activation_keys_match_pointer_and_suppress_default() {
        let mut menu = MenuController::new();
        let t = menu.handle(MenuEvent::ToggleKey(Key::Enter));
        assert!(t.state.is_open());
        assert!(t.prevent_default);
        let t = menu.handle(MenuEvent::ToggleKey(Key::Space));
        assert!(!t.state.is_open());
        assert!(t.prevent_default);

        let t = menu.handle(MenuEvent::ToggleKey(Key::Tab));
        assert!(!t.prevent_default);
        assert_eq!(t.state, MenuState::Closed);
    }

    #[test]
    fn link_escape_and_outside_pointer_close() {
        let mut menu = opened();
        assert_eq!(menu.handle(MenuEvent::LinkSelected).state, MenuState::Closed);

        let mut menu = opened();
        assert_eq!(
            menu.handle(MenuEvent::DocumentKey(Key::Escape)).state,
            MenuState::Closed
        );

        let mut menu = opened();
        let t = menu.handle(MenuEvent::Pointer {
            inside_menu: false,
            inside_toggle: false,
        });
        assert_eq!(t.state, MenuState::Closed);
    }

    #[test]
    fn pointer_inside_menu_or_toggle_keeps_it_open() {
        let mut menu = opened();
        let inside_menu = MenuEvent::Pointer {
            inside_menu: true,
            inside_toggle: false,
        };
        let inside_toggle = MenuEvent::Pointer {
            inside_menu: false,
            inside_toggle: true,
        };
        assert!(menu.handle(inside_menu).state.is_open());
        assert!(menu.handle(inside_toggle).state.is_open());
        assert!(menu.handle(MenuEvent::DocumentKey(Key::Enter)).state.is_open());
    }

    #[test]
    fn aria_expanded_tracks_state() {
        assert_eq!(MenuState::Open.aria_expanded(), "true");
        assert_eq!(MenuState::Closed.aria_expanded(), "false");
    }
}
