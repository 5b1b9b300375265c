use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, EventTarget, HtmlElement, Node, Storage, Window};

/// Elements that can take keyboard focus inside a container.
pub const FOCUSABLE_QUERY: &str =
    "button, [href], input, textarea, select, [tabindex]:not([tabindex='-1'])";

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// First element matching `selector`, cast to the requested type.
#[must_use]
pub fn query<T: JsCast>(doc: &Document, selector: &str) -> Option<T> {
    doc.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// First descendant of `root` matching `selector`, cast to the requested type.
#[must_use]
pub fn query_in<T: JsCast>(root: &Element, selector: &str) -> Option<T> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// Every element matching `selector` in document order.
#[must_use]
pub fn query_all(doc: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = doc.query_selector_all(selector) else {
        log::debug!("invalid selector {selector:?}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Focusable descendants of `container` in document order.
#[must_use]
pub fn focusables(container: &Element) -> Vec<HtmlElement> {
    let Ok(list) = container.query_selector_all(FOCUSABLE_QUERY) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

#[must_use]
pub fn active_element(doc: &Document) -> Option<HtmlElement> {
    doc.active_element()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Whether an event target sits inside `container` (inclusive).
#[must_use]
pub fn contains(container: &Element, target: Option<&EventTarget>) -> bool {
    target
        .and_then(|t| t.dyn_ref::<Node>())
        .is_some_and(|node| container.contains(Some(node)))
}

/// Whether the environment reports a dark color-scheme preference.
#[must_use]
pub fn prefers_dark() -> bool {
    window()
        .and_then(|win| win.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|mq| mq.matches())
}

#[must_use]
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("window unavailable"))?
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}

/// Set or clear a class, logging instead of failing.
pub fn toggle_class(el: &Element, class: &str, on: bool) {
    if let Err(err) = el.class_list().toggle_with_force(class, on) {
        log::debug!("class {class:?} not applied: {}", js_error_message(&err));
    }
}

/// Set an attribute, logging instead of failing.
pub fn set_attr(el: &Element, name: &str, value: &str) {
    if let Err(err) = el.set_attribute(name, value) {
        log::debug!("attribute {name:?} not set: {}", js_error_message(&err));
    }
}

/// Move focus, logging instead of failing.
pub fn focus(el: &HtmlElement) {
    if let Err(err) = el.focus() {
        log::debug!("focus failed: {}", js_error_message(&err));
    }
}
