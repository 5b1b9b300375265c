//! Contact form wiring: validation feedback and the simulated send
use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use vitrine_core::{
    Feedback, Field, FieldValues, PageConfig, SubmissionGuard, SubmitDecision, ValidationError,
};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlTextAreaElement,
};

use crate::dom;
use crate::feedback;
use crate::modal::ModalBinding;

/// A text control that may be either `<input>` or `<textarea>`.
enum TextField {
    Input(HtmlInputElement),
    Area(HtmlTextAreaElement),
}

impl TextField {
    fn find(doc: &Document, selector: &str) -> Option<Self> {
        let el = dom::query::<Element>(doc, selector)?;
        match el.dyn_into::<HtmlInputElement>() {
            Ok(input) => Some(Self::Input(input)),
            Err(el) => el.dyn_into::<HtmlTextAreaElement>().ok().map(Self::Area),
        }
    }

    fn value(&self) -> String {
        match self {
            Self::Input(el) => el.value(),
            Self::Area(el) => el.value(),
        }
    }

    fn set_custom_validity(&self, message: &str) {
        match self {
            Self::Input(el) => el.set_custom_validity(message),
            Self::Area(el) => el.set_custom_validity(message),
        }
    }

    /// Show the native validity bubble. Returns `true` when the field is valid.
    fn report_validity(&self) -> bool {
        match self {
            Self::Input(el) => el.report_validity(),
            Self::Area(el) => el.report_validity(),
        }
    }

    fn element(&self) -> &HtmlElement {
        match self {
            Self::Input(el) => el.as_ref(),
            Self::Area(el) => el.as_ref(),
        }
    }
}

struct FormInner {
    form: HtmlFormElement,
    name: TextField,
    email: TextField,
    message: TextField,
    submit: HtmlButtonElement,
    feedback: Option<Element>,
    modal: Option<ModalBinding>,
    config: Rc<PageConfig>,
    guard: RefCell<SubmissionGuard>,
    submit_label: RefCell<Option<String>>,
}

pub struct FormBinding {
    inner: Rc<FormInner>,
    _listener: EventListener,
}

impl FormBinding {
    /// Returns `None` unless the form, its three fields and the submit
    /// button all exist. The feedback region and modal are optional.
    pub fn bind(
        doc: &Document,
        config: &Rc<PageConfig>,
        modal: Option<ModalBinding>,
    ) -> Option<Self> {
        let selectors = &config.selectors;
        let Some(form) = dom::query::<HtmlFormElement>(doc, &selectors.form) else {
            log::debug!("no contact form on page");
            return None;
        };
        let inner = Rc::new(FormInner {
            form,
            name: TextField::find(doc, &selectors.name)?,
            email: TextField::find(doc, &selectors.email)?,
            message: TextField::find(doc, &selectors.message)?,
            submit: dom::query::<HtmlButtonElement>(doc, &selectors.submit)?,
            feedback: dom::query::<Element>(doc, &selectors.feedback),
            modal,
            config: Rc::clone(config),
            guard: RefCell::new(SubmissionGuard::new(config.min_message_len)),
            submit_label: RefCell::new(None),
        });

        let listener = {
            let handle = Rc::clone(&inner);
            EventListener::new_with_options(
                &inner.form,
                "submit",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    event.prevent_default();
                    FormInner::on_submit(&handle);
                },
            )
        };

        Some(Self {
            inner,
            _listener: listener,
        })
    }

    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.inner.guard.borrow().is_in_flight()
    }
}

impl FormInner {
    fn on_submit(this: &Rc<Self>) {
        if this.guard.borrow().is_in_flight() {
            log::debug!("submission already in flight; trigger dropped");
            return;
        }
        let classes = &this.config.classes;
        feedback::clear(this.feedback.as_ref(), classes);

        let values = FieldValues::new(this.name.value(), this.email.value(), this.message.value());
        for field in [&this.name, &this.email, &this.message] {
            field.set_custom_validity("");
        }

        let decision = this.guard.borrow_mut().submit(&values);
        match decision {
            SubmitDecision::Dropped => {}
            SubmitDecision::Rejected(err) => this.reject(&err),
            SubmitDecision::Started(_) => Self::start_sending(this),
        }
    }

    fn field(&self, field: Field) -> &TextField {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn reject(&self, err: &ValidationError) {
        log::debug!("contact form rejected: {err}");
        let messages = &self.config.messages;
        let field = self.field(err.field());
        field.set_custom_validity(&err.validity_message(messages));
        if field.report_validity() {
            log::debug!("{:?} still reports valid after rejection", err.field());
        }
        dom::focus(field.element());
        feedback::show(
            self.feedback.as_ref(),
            &Feedback::error(err.feedback_message(messages)),
            &self.config.classes,
        );
    }

    fn start_sending(this: &Rc<Self>) {
        let config = &this.config;
        this.submit.set_disabled(true);
        dom::toggle_class(&this.submit, &config.classes.loading, true);
        *this.submit_label.borrow_mut() = this.submit.text_content();
        this.submit.set_text_content(Some(&config.messages.sending_label));
        feedback::show(
            this.feedback.as_ref(),
            &Feedback::success(&config.messages.sending_status),
            &config.classes,
        );

        log::debug!("simulated send scheduled in {} ms", config.submit_delay_ms);
        let handle = Rc::clone(this);
        Timeout::new(config.submit_delay_ms, move || handle.finish_sending()).forget();
    }

    fn finish_sending(&self) {
        let config = &self.config;
        self.form.reset();
        self.submit.set_disabled(false);
        dom::toggle_class(&self.submit, &config.classes.loading, false);
        let label = self.submit_label.borrow_mut().take();
        self.submit.set_text_content(label.as_deref());

        if !self.guard.borrow_mut().complete() {
            log::warn!("send completed with no submission in flight");
        }
        if let Some(modal) = &self.modal {
            modal.open();
        }
        feedback::show(
            self.feedback.as_ref(),
            &Feedback::success(&config.messages.sent_status),
            &config.classes,
        );
        log::info!("contact message sent");
    }
}
