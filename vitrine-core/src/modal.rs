//! Confirmation modal with focus trapping
//!
//! The controller is generic over the element handle so the focus rules can
//! be exercised without a document. The caller supplies the modal's
//! focusable descendants in document order and the currently focused
//! element; the controller answers with where focus should go.
//!
//! While open, focus must stay inside the modal: stray focus is pulled back
//! to the first focusable descendant, and Tab / Shift+Tab wrap at the ends.

use crate::input::{Key, KeyPress};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

impl ModalState {
    /// Value for the container's `aria-hidden` attribute.
    #[must_use]
    pub const fn aria_hidden(self) -> &'static str {
        match self {
            Self::Open => "false",
            Self::Closed => "true",
        }
    }
}

/// Response to a key press while the modal is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction<E> {
    /// Let the browser handle the key.
    Ignore,
    /// The modal closed; focus should return to the carried element, if any.
    Close(Option<E>),
    /// Suppress the default navigation and focus this element instead.
    Focus(E),
}

/// Response to focus landing somewhere while the modal is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusDecision<E> {
    Allow,
    /// Stop the focus event and move focus to `target` when there is one.
    Contain { target: Option<E> },
}

#[derive(Debug, Clone)]
pub struct ModalController<E> {
    state: ModalState,
    previous_focus: Option<E>,
}

impl<E> Default for ModalController<E> {
    fn default() -> Self {
        Self {
            state: ModalState::Closed,
            previous_focus: None,
        }
    }
}

impl<E: Clone + PartialEq> ModalController<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> ModalState {
        self.state
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open)
    }

    #[must_use]
    pub const fn previous_focus(&self) -> Option<&E> {
        self.previous_focus.as_ref()
    }

    /// Show the modal and return the element that should receive focus.
    ///
    /// Re-opening an open modal keeps the originally remembered element so
    /// that closing still returns focus to where the user started.
    pub fn open(&mut self, active: Option<E>, focusables: &[E]) -> Option<E> {
        if !self.is_open() {
            self.previous_focus = active;
            self.state = ModalState::Open;
        }
        focusables.first().cloned()
    }

    /// Hide the modal and hand back the element to restore focus to.
    /// Closing a closed modal is a no-op.
    pub fn close(&mut self) -> Option<E> {
        if !self.is_open() {
            return None;
        }
        self.state = ModalState::Closed;
        self.previous_focus.take()
    }

    #[must_use]
    pub fn on_focus(&self, inside_modal: bool, focusables: &[E]) -> FocusDecision<E> {
        if !self.is_open() || inside_modal {
            return FocusDecision::Allow;
        }
        FocusDecision::Contain {
            target: focusables.first().cloned(),
        }
    }

    pub fn on_key(
        &mut self,
        press: KeyPress,
        active: Option<&E>,
        focusables: &[E],
    ) -> KeyAction<E> {
        if !self.is_open() {
            return KeyAction::Ignore;
        }
        match press.key {
            Key::Escape => KeyAction::Close(self.close()),
            Key::Tab => {
                let (Some(first), Some(last)) = (focusables.first(), focusables.last()) else {
                    return KeyAction::Ignore;
                };
                match (press.shift, active) {
                    (true, Some(current)) if current == first => KeyAction::Focus(last.clone()),
                    (false, Some(current)) if current == last => KeyAction::Focus(first.clone()),
                    _ => KeyAction::Ignore,
                }
            }
            _ => KeyAction::Ignore,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIGGER: &str = "submit";
    const ITEMS: [&str; 3] = ["close", "link", "ok"];

    fn opened() -> ModalController<&'static str> {
        let mut modal = ModalController::new();
        assert_eq!(modal.open(Some(TRIGGER), &ITEMS), Some("close"));
        modal
    }

    #[test]
    fn open_focuses_first_and_remembers_trigger() {
        let modal = opened();
        assert!(modal.is_open());
        assert_eq!(modal.state().aria_hidden(), "false");
        assert_eq!(modal.previous_focus(), Some(&TRIGGER));
    }

    #[test]
    fn open_without_focusables_has_no_target() {
        let mut modal: ModalController<&str> = ModalController::new();
        assert_eq!(modal.open(None, &[]), None);
        assert!(modal.is_open());
    }

    #[test]
    fn tab_wraps_both_directions() {
        let mut modal = opened();
        assert_eq!(
            modal.on_key(KeyPress::new(Key::Tab), Some(&"ok"), &ITEMS),
            KeyAction::Focus("close")
        );
        assert_eq!(
            modal.on_key(KeyPress::with_shift(Key::Tab), Some(&"close"), &ITEMS),
            KeyAction::Focus("ok")
        );
        assert_eq!(
            modal.on_key(KeyPress::new(Key::Tab), Some(&"link"), &ITEMS),
            KeyAction::Ignore
        );
        assert_eq!(
            modal.on_key(KeyPress::with_shift(Key::Tab), Some(&"ok"), &ITEMS),
            KeyAction::Ignore
        );
    }

    #[test]
    fn tab_without_focusables_is_left_alone() {
        let mut modal: ModalController<&str> = ModalController::new();
        modal.open(Some(TRIGGER), &[]);
        assert_eq!(
            modal.on_key(KeyPress::new(Key::Tab), Some(&TRIGGER), &[]),
            KeyAction::Ignore
        );
    }

    #[test]
    fn escape_closes_and_restores() {
        let mut modal = opened();
        assert_eq!(
            modal.on_key(KeyPress::new(Key::Escape), Some(&"link"), &ITEMS),
            KeyAction::Close(Some(TRIGGER))
        );
        assert!(!modal.is_open());
        assert_eq!(modal.previous_focus(), None);
    }

    #[test]
    fn close_restores_once() {
        let mut modal = opened();
        assert_eq!(modal.close(), Some(TRIGGER));
        assert_eq!(modal.state().aria_hidden(), "true");
        assert_eq!(modal.close(), None);
    }

    #[test]
    fn reopen_keeps_original_trigger() {
        let mut modal = opened();
        modal.open(Some("close"), &ITEMS);
        assert_eq!(modal.close(), Some(TRIGGER));
    }

    #[test]
    fn stray_focus_is_contained_only_while_open() {
        let mut modal = opened();
        assert_eq!(modal.on_focus(true, &ITEMS), FocusDecision::Allow);
        assert_eq!(
            modal.on_focus(false, &ITEMS),
            FocusDecision::Contain {
                target: Some("close")
            }
        );
        modal.close();
        assert_eq!(modal.on_focus(false, &ITEMS), FocusDecision::Allow);
    }

    #[test]
    fn keys_ignored_when_closed() {
        let mut modal: ModalController<&str> = ModalController::new();
        assert_eq!(
            modal.on_key(KeyPress::new(Key::Escape), None, &ITEMS),
            KeyAction::Ignore
        );
    }
}
