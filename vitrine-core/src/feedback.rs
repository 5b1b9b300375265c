//! Status messages shown in the form's feedback region
use crate::config::ClassNames;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

impl FeedbackKind {
    /// Role announced to assistive technology: errors interrupt, progress does not.
    #[must_use]
    pub const fn role(self) -> &'static str {
        match self {
            Self::Success => "status",
            Self::Error => "alert",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub text: String,
    pub kind: FeedbackKind,
}

impl Feedback {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: FeedbackKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: FeedbackKind::Error,
        }
    }

    /// Full `class` attribute for the feedback region.
    #[must_use]
    pub fn class_name(&self, classes: &ClassNames) -> String {
        let modifier = match self.kind {
            FeedbackKind::Success => &classes.feedback_success,
            FeedbackKind::Error => &classes.feedback_error,
        };
        format!("{} {modifier}", classes.feedback)
    }

    #[must_use]
    pub const fn role(&self) -> &'static str {
        self.kind.role()
    }
}
