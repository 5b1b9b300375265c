//! Scroll-position highlighting of menu links
use std::cell::RefCell;
use std::rc::Rc;

use vitrine_core::{PageConfig, SectionHighlighter};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::dom;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

pub struct HighlightBinding {
    observer: IntersectionObserver,
    highlighter: Rc<RefCell<SectionHighlighter>>,
    _callback: ObserverCallback,
}

impl HighlightBinding {
    /// Observe every configured section. Returns `None` when the browser has
    /// no `IntersectionObserver`, which leaves the menu unhighlighted.
    pub fn bind(doc: &Document, config: &PageConfig) -> Option<Self> {
        if !observer_supported() {
            log::debug!("IntersectionObserver unavailable; section highlighting disabled");
            return None;
        }

        let highlighter = Rc::new(RefCell::new(SectionHighlighter::new()));
        let callback: ObserverCallback = {
            let highlighter = Rc::clone(&highlighter);
            let doc = doc.clone();
            let menu_selector = config.selectors.menu.clone();
            let active_class = config.classes.link_active.clone();
            Closure::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let section_id = entry.target().id();
                    let Some(mark) = highlighter
                        .borrow_mut()
                        .observe(&section_id, entry.is_intersecting())
                    else {
                        continue;
                    };
                    let selector = mark.link_selector(&menu_selector);
                    if let Some(link) = dom::query::<Element>(&doc, &selector) {
                        dom::toggle_class(&link, &active_class, mark.active);
                    }
                }
            })
        };

        let init = IntersectionObserverInit::new();
        init.set_root_margin(&config.observer.root_margin);
        init.set_threshold(&JsValue::from_f64(config.observer.threshold));
        let observer =
            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                Ok(observer) => observer,
                Err(err) => {
                    log::debug!(
                        "IntersectionObserver rejected options: {}",
                        dom::js_error_message(&err)
                    );
                    return None;
                }
            };

        let sections = dom::query_all(doc, &config.selectors.sections);
        log::debug!("observing {} sections", sections.len());
        for section in &sections {
            observer.observe(section);
        }

        Some(Self {
            observer,
            highlighter,
            _callback: callback,
        })
    }

    #[must_use]
    pub fn is_active(&self, section_id: &str) -> bool {
        self.highlighter.borrow().is_active(section_id)
    }
}

impl Drop for HighlightBinding {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observer_supported() -> bool {
    dom::window().is_some_and(|win| {
        js_sys::Reflect::has(&win, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
    })
}
