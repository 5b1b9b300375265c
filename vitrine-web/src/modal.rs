//! Confirmation modal wiring
//!
//! Document-wide focus and key listeners exist only while the modal is open.
//! They are held as guards, so closing by any path drops them and removes
//! them from the document.
//!
//! The focus trap refocuses from inside its own handler, which re-enters it.
//! gloo's `FnMut` listeners cannot be re-entered, so that one is an `Fn`.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::events::{EventListener, EventListenerOptions};
use vitrine_core::{FocusDecision, Key, KeyAction, KeyPress, ModalController, PageConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, KeyboardEvent};

use crate::dom;

/// A capture-phase listener backed by a re-entrant closure. Removed on drop.
struct CaptureListener {
    target: EventTarget,
    event_type: &'static str,
    callback: Closure<dyn Fn(Event)>,
}

impl CaptureListener {
    fn new(
        target: &EventTarget,
        event_type: &'static str,
        handler: impl Fn(Event) + 'static,
    ) -> Self {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn Fn(Event)>);
        if let Err(err) = target.add_event_listener_with_callback_and_bool(
            event_type,
            callback.as_ref().unchecked_ref(),
            true,
        ) {
            log::warn!("{event_type} trap not installed: {}", dom::js_error_message(&err));
        }
        Self {
            target: target.clone(),
            event_type,
            callback,
        }
    }
}

impl Drop for CaptureListener {
    fn drop(&mut self) {
        if let Err(err) = self.target.remove_event_listener_with_callback_and_bool(
            self.event_type,
            self.callback.as_ref().unchecked_ref(),
            true,
        ) {
            log::debug!(
                "{} trap not removed: {}",
                self.event_type,
                dom::js_error_message(&err)
            );
        }
    }
}

struct ModalInner {
    container: Element,
    controller: RefCell<ModalController<HtmlElement>>,
    focus_trap: RefCell<Option<CaptureListener>>,
    key_trap: RefCell<Option<EventListener>>,
    affordances: RefCell<Vec<EventListener>>,
}

/// Cheap to clone; every clone drives the same modal.
#[derive(Clone)]
pub struct ModalBinding {
    inner: Rc<ModalInner>,
}

impl ModalBinding {
    pub fn bind(doc: &Document, config: &PageConfig) -> Option<Self> {
        let container = dom::query::<Element>(doc, &config.selectors.modal)?;
        let inner = Rc::new(ModalInner {
            container,
            controller: RefCell::new(ModalController::new()),
            focus_trap: RefCell::new(None),
            key_trap: RefCell::new(None),
            affordances: RefCell::new(Vec::new()),
        });

        let close_targets = [
            dom::query::<Element>(doc, &config.selectors.modal_close),
            dom::query_in::<Element>(&inner.container, &config.selectors.modal_backdrop),
        ];
        for target in close_targets.into_iter().flatten() {
            let weak = Rc::downgrade(&inner);
            let listener = EventListener::new(&target, "click", move |_| {
                if let Some(inner) = weak.upgrade() {
                    inner.close();
                }
            });
            inner.affordances.borrow_mut().push(listener);
        }

        Some(Self { inner })
    }

    pub fn open(&self) {
        ModalInner::open(&self.inner);
    }

    pub fn close(&self) {
        self.inner.close();
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.inner.controller.borrow().is_open()
    }

    #[must_use]
    pub fn container(&self) -> &Element {
        &self.inner.container
    }
}

impl ModalInner {
    fn open(this: &Rc<Self>) {
        let Some(doc) = dom::document() else {
            return;
        };
        let focusables = dom::focusables(&this.container);
        let was_open = this.controller.borrow().is_open();
        let target = this
            .controller
            .borrow_mut()
            .open(dom::active_element(&doc), &focusables);

        let hidden = this.controller.borrow().state().aria_hidden();
        dom::set_attr(&this.container, "aria-hidden", hidden);
        if let Some(first) = target {
            dom::focus(&first);
        }
        if !was_open {
            Self::attach_traps(this, &doc);
            log::debug!("modal opened with {} focusable elements", focusables.len());
        }
    }

    fn close(&self) {
        let restore = {
            let mut controller = self.controller.borrow_mut();
            if !controller.is_open() {
                return;
            }
            controller.close()
        };
        self.finish_close(restore);
    }

    /// Runs after the controller has closed: hides the container, drops the
    /// traps, then hands focus back if the old element is still in the page.
    fn finish_close(&self, restore: Option<HtmlElement>) {
        let hidden = self.controller.borrow().state().aria_hidden();
        dom::set_attr(&self.container, "aria-hidden", hidden);
        self.focus_trap.borrow_mut().take();
        self.key_trap.borrow_mut().take();
        if let Some(el) = restore.filter(|el| el.is_connected()) {
            dom::focus(&el);
        }
        log::debug!("modal closed");
    }

    fn attach_traps(this: &Rc<Self>, doc: &Document) {
        let on_focus = {
            let weak: Weak<Self> = Rc::downgrade(this);
            CaptureListener::new(doc, "focus", move |event| {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                let inside = dom::contains(&inner.container, event.target().as_ref());
                let focusables = dom::focusables(&inner.container);
                let decision = inner.controller.borrow().on_focus(inside, &focusables);
                if let FocusDecision::Contain { target } = decision {
                    event.stop_propagation();
                    if let Some(first) = target {
                        dom::focus(&first);
                    }
                }
            })
        };

        let on_keydown = {
            let weak: Weak<Self> = Rc::downgrade(this);
            let owner = doc.clone();
            EventListener::new_with_options(
                doc,
                "keydown",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    let Some(inner) = weak.upgrade() else {
                        return;
                    };
                    let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    let press = KeyPress {
                        key: Key::from_key_value(&key_event.key()),
                        shift: key_event.shift_key(),
                    };
                    let focusables = dom::focusables(&inner.container);
                    let active = dom::active_element(&owner);
                    let action = inner.controller.borrow_mut().on_key(
                        press,
                        active.as_ref(),
                        &focusables,
                    );
                    match action {
                        KeyAction::Ignore => {}
                        KeyAction::Close(restore) => inner.finish_close(restore),
                        KeyAction::Focus(target) => {
                            event.prevent_default();
                            dom::focus(&target);
                        }
                    }
                },
            )
        };

        *this.focus_trap.borrow_mut() = Some(on_focus);
        *this.key_trap.borrow_mut() = Some(on_keydown);
    }
}
