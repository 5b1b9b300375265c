//! Page startup: wires every controller to the document once it is parsed
use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use vitrine_core::{PageConfig, PreferenceStore};
use web_sys::{Document, Element};

use crate::dom;
use crate::form::FormBinding;
use crate::highlight::HighlightBinding;
use crate::menu::MenuBinding;
use crate::modal::ModalBinding;
use crate::storage::LocalStorageStore;
use crate::theme::ThemeBinding;

thread_local! {
    static PAGE: RefCell<Option<Page<LocalStorageStore>>> = const { RefCell::new(None) };
}

/// Every binding the page owns. Dropping it detaches all listeners.
pub struct Page<S: PreferenceStore> {
    pub theme: Option<ThemeBinding<S>>,
    pub menu: Option<MenuBinding>,
    pub highlight: Option<HighlightBinding>,
    pub modal: Option<ModalBinding>,
    pub form: Option<FormBinding>,
}

impl<S: PreferenceStore + 'static> Page<S> {
    /// Wire every controller whose elements are present in `doc`.
    pub fn mount(
        doc: &Document,
        config: &Rc<PageConfig>,
        store: S,
        prefers_dark: bool,
    ) -> Self {
        if let Some(root) = doc.document_element() {
            dom::toggle_class(&root, &config.classes.no_js, false);
        }

        let modal = ModalBinding::bind(doc, config);
        let page = Self {
            theme: ThemeBinding::bind(doc, config, store, prefers_dark),
            menu: MenuBinding::bind(doc, config),
            highlight: HighlightBinding::bind(doc, config),
            form: FormBinding::bind(doc, config, modal.clone()),
            modal,
        };
        stamp_year(doc, &config.selectors.year);

        log::info!(
            "page wired: theme={} menu={} highlight={} modal={} form={}",
            page.theme.is_some(),
            page.menu.is_some(),
            page.highlight.is_some(),
            page.modal.is_some(),
            page.form.is_some(),
        );
        page
    }
}

fn stamp_year(doc: &Document, selector: &str) {
    if let Some(el) = dom::query::<Element>(doc, selector) {
        el.set_text_content(Some(&dom::current_year().to_string()));
    }
}

/// Mount the page with the embedded configuration and browser storage.
pub fn mount_page() {
    let Some(doc) = dom::document() else {
        log::warn!("no document; page behavior not installed");
        return;
    };
    let config = Rc::new(PageConfig::load_from_static());
    let page = Page::mount(&doc, &config, LocalStorageStore, dom::prefers_dark());
    PAGE.with(|slot| *slot.borrow_mut() = Some(page));
}

/// Mount now if the document is parsed, otherwise on `DOMContentLoaded`.
pub fn on_ready() {
    let Some(doc) = dom::document() else {
        return;
    };
    if doc.ready_state() == "loading" {
        EventListener::once(&doc, "DOMContentLoaded", |_| mount_page()).forget();
    } else {
        mount_page();
    }
}
