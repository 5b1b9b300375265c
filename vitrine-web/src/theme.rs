//! Theme toggle wiring
use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use vitrine_core::{Key, PageConfig, PreferenceStore, Theme, ThemeController, ThemePresentation};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, KeyboardEvent};

use crate::dom;

pub struct ThemeBinding<S: PreferenceStore> {
    controller: Rc<RefCell<ThemeController<S>>>,
    _listeners: Vec<EventListener>,
}

impl<S: PreferenceStore + 'static> ThemeBinding<S> {
    /// Load the theme, apply it, and listen on the toggle control.
    /// Returns `None` when the page has no toggle.
    pub fn bind(
        doc: &Document,
        config: &Rc<PageConfig>,
        store: S,
        prefers_dark: bool,
    ) -> Option<Self> {
        let Some(toggle) = dom::query::<HtmlElement>(doc, &config.selectors.theme_toggle) else {
            log::debug!("no theme toggle on page");
            return None;
        };
        let body = doc.body();
        let controller = Rc::new(RefCell::new(ThemeController::load(
            store,
            config.theme_storage_key.as_str(),
            prefers_dark,
        )));
        apply(
            &toggle,
            body.as_ref(),
            &controller.borrow().presentation(&config.messages),
            &config.classes.dark,
        );

        let on_click = {
            let controller = Rc::clone(&controller);
            let config = Rc::clone(config);
            let toggle_el = toggle.clone();
            EventListener::new(&toggle, "click", move |_| {
                let mut controller = controller.borrow_mut();
                let theme = controller.toggle();
                log::debug!("theme switched to {theme}");
                apply(
                    &toggle_el,
                    body.as_ref(),
                    &controller.presentation(&config.messages),
                    &config.classes.dark,
                );
            })
        };

        let on_keydown = {
            let toggle_el = toggle.clone();
            EventListener::new_with_options(
                &toggle,
                "keydown",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    if Key::from_key_value(&event.key()).is_activation() {
                        event.prevent_default();
                        toggle_el.click();
                    }
                },
            )
        };

        Some(Self {
            controller,
            _listeners: vec![on_click, on_keydown],
        })
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.controller.borrow().current()
    }
}

fn apply(
    toggle: &HtmlElement,
    body: Option<&HtmlElement>,
    presentation: &ThemePresentation<'_>,
    dark_class: &str,
) {
    if let Some(body) = body {
        dom::toggle_class(body, dark_class, presentation.dark);
    }
    toggle.set_text_content(Some(presentation.label));
    dom::set_attr(toggle, "aria-pressed", presentation.aria_pressed());
    dom::set_attr(toggle, "title", presentation.title);
}
