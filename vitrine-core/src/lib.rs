//! Vitrine Core
//!
//! Platform-agnostic behavior for the Vitrine contact page: theme preference,
//! navigation menu, section highlighting, form validation, the single-flight
//! submission guard and the confirmation modal's focus rules.
//! This crate has no browser dependencies; `vitrine-web` drives it from DOM events.

pub mod config;
pub mod feedback;
pub mod highlight;
pub mod input;
pub mod menu;
pub mod modal;
pub mod store;
pub mod submission;
pub mod theme;
pub mod validation;

// Re-export commonly used types
pub use config::{ClassNames, ConfigError, Messages, ObserverConfig, PageConfig, Selectors};
pub use feedback::{Feedback, FeedbackKind};
pub use highlight::{LinkMark, SectionHighlighter, link_selector};
pub use input::{Key, KeyPress};
pub use menu::{MenuController, MenuEvent, MenuState, MenuTransition};
pub use modal::{FocusDecision, KeyAction, ModalController, ModalState};
pub use store::{MemoryStore, MemoryStoreError, PreferenceStore};
pub use submission::{SubmissionGuard, SubmissionState, SubmitDecision};
pub use theme::{Theme, ThemeController, ThemePresentation, load_theme};
pub use validation::{
    ContactMessage, Field, FieldValues, ValidationError, is_valid_email, validate,
};
