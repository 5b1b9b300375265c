//! Rendering for the form's feedback region
use vitrine_core::{ClassNames, Feedback};
use web_sys::Element;

use crate::dom;

pub fn show(region: Option<&Element>, feedback: &Feedback, classes: &ClassNames) {
    let Some(region) = region else {
        return;
    };
    region.set_text_content(Some(&feedback.text));
    region.set_class_name(&feedback.class_name(classes));
    dom::set_attr(region, "role", feedback.role());
}

pub fn clear(region: Option<&Element>, classes: &ClassNames) {
    let Some(region) = region else {
        return;
    };
    region.set_text_content(Some(""));
    region.set_class_name(&classes.feedback);
}
