//! Navigation menu wiring
use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use vitrine_core::{Key, MenuController, MenuEvent, MenuState, PageConfig};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent};

use crate::dom;

#[derive(Clone)]
struct MenuView {
    menu: Element,
    toggle: HtmlElement,
    open_class: String,
}

impl MenuView {
    fn apply(&self, state: MenuState) {
        dom::toggle_class(&self.menu, &self.open_class, state.is_open());
        dom::set_attr(&self.toggle, "aria-expanded", state.aria_expanded());
    }
}

pub struct MenuBinding {
    controller: Rc<RefCell<MenuController>>,
    _listeners: Vec<EventListener>,
}

impl MenuBinding {
    /// Returns `None` unless both the menu and its toggle exist.
    pub fn bind(doc: &Document, config: &PageConfig) -> Option<Self> {
        let menu = dom::query::<Element>(doc, &config.selectors.menu)?;
        let Some(toggle) = dom::query::<HtmlElement>(doc, &config.selectors.menu_toggle) else {
            log::debug!("menu present without a toggle; leaving it static");
            return None;
        };
        let view = MenuView {
            menu,
            toggle,
            open_class: config.classes.menu_open.clone(),
        };
        let controller = Rc::new(RefCell::new(MenuController::new()));

        let dispatch = {
            let controller = Rc::clone(&controller);
            let view = view.clone();
            Rc::new(move |event: MenuEvent| {
                let transition = controller.borrow_mut().handle(event);
                view.apply(transition.state);
                transition.prevent_default
            })
        };

        let mut listeners = Vec::new();

        listeners.push({
            let dispatch = Rc::clone(&dispatch);
            EventListener::new(&view.toggle, "click", move |_| {
                dispatch(MenuEvent::ToggleActivated);
            })
        });

        listeners.push({
            let dispatch = Rc::clone(&dispatch);
            EventListener::new_with_options(
                &view.toggle,
                "keydown",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    if dispatch(MenuEvent::ToggleKey(Key::from_key_value(&key_event.key()))) {
                        event.prevent_default();
                    }
                },
            )
        });

        for link in dom::query_all(doc, &config.selectors.menu_links) {
            let dispatch = Rc::clone(&dispatch);
            listeners.push(EventListener::new(&link, "click", move |_| {
                dispatch(MenuEvent::LinkSelected);
            }));
        }

        listeners.push({
            let dispatch = Rc::clone(&dispatch);
            EventListener::new(doc, "keydown", move |event| {
                if let Some(key_event) = event.dyn_ref::<KeyboardEvent>() {
                    dispatch(MenuEvent::DocumentKey(Key::from_key_value(&key_event.key())));
                }
            })
        });

        listeners.push({
            let dispatch = Rc::clone(&dispatch);
            let view = view.clone();
            EventListener::new(doc, "click", move |event| {
                let target = event.target();
                dispatch(MenuEvent::Pointer {
                    inside_menu: dom::contains(&view.menu, target.as_ref()),
                    inside_toggle: dom::contains(&view.toggle, target.as_ref()),
                });
            })
        });

        Some(Self {
            controller,
            _listeners: listeners,
        })
    }

    #[must_use]
    pub fn state(&self) -> MenuState {
        self.controller.borrow().state()
    }
}
