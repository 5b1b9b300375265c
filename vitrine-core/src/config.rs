//! Page configuration: selectors, class names, strings and timing
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_PAGE_CONFIG: &str = include_str!("../data/page.json");

/// Errors raised when page configuration invariants are violated.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} must be between {min:.2} and {max:.2} (got {value:.2})")]
    RangeViolation {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },
    #[error("{field} must be at least {min} (got {value})")]
    MinViolation {
        field: &'static str,
        min: usize,
        value: usize,
    },
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default)]
    pub selectors: Selectors,
    #[serde(default)]
    pub classes: ClassNames,
    #[serde(default)]
    pub messages: Messages,
    #[serde(default)]
    pub observer: ObserverConfig,
    #[serde(default = "PageConfig::default_theme_storage_key")]
    pub theme_storage_key: String,
    #[serde(default = "PageConfig::default_submit_delay_ms")]
    pub submit_delay_ms: u32,
    #[serde(default = "PageConfig::default_min_message_len")]
    pub min_message_len: usize,
}

impl PageConfig {
    fn default_theme_storage_key() -> String {
        "site-theme".to_string()
    }

    const fn default_submit_delay_ms() -> u32 {
        800
    }

    const fn default_min_message_len() -> usize {
        10
    }

    /// Parse and validate a configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a value is out of range.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the configuration embedded at build time, falling back to the
    /// built-in defaults when it cannot be used.
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(DEFAULT_PAGE_CONFIG).unwrap_or_else(|err| {
            log::warn!("embedded page config rejected, using defaults: {err}");
            Self::default()
        })
    }

    /// Check the invariants the controllers rely on.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.theme_storage_key.trim().is_empty() {
            return Err(ConfigError::Empty {
                field: "theme_storage_key",
            });
        }
        if self.min_message_len == 0 {
            return Err(ConfigError::MinViolation {
                field: "min_message_len",
                min: 1,
                value: self.min_message_len,
            });
        }
        self.observer.validate()
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            classes: ClassNames::default(),
            messages: Messages::default(),
            observer: ObserverConfig::default(),
            theme_storage_key: Self::default_theme_storage_key(),
            submit_delay_ms: Self::default_submit_delay_ms(),
            min_message_len: Self::default_min_message_len(),
        }
    }
}

/// CSS selectors locating the page's collaborating elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub menu: String,
    pub menu_toggle: String,
    pub menu_links: String,
    pub theme_toggle: String,
    pub form: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub feedback: String,
    pub submit: String,
    pub modal: String,
    pub modal_close: String,
    /// Looked up inside the modal container.
    pub modal_backdrop: String,
    pub sections: String,
    pub year: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            menu: ".menu".into(),
            menu_toggle: "#menuToggle".into(),
            menu_links: ".menu a[href^=\"#\"]".into(),
            theme_toggle: "#themeToggle".into(),
            form: "#contactForm".into(),
            name: "#nome".into(),
            email: "#email".into(),
            message: "#mensagem".into(),
            feedback: "#formFeedback".into(),
            submit: "#submitBtn".into(),
            modal: "#confirmModal".into(),
            modal_close: "#modalCloseBtn".into(),
            modal_backdrop: ".modal-backdrop".into(),
            sections: "main section[id]".into(),
            year: "#ano".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassNames {
    pub menu_open: String,
    pub dark: String,
    pub link_active: String,
    pub loading: String,
    pub feedback: String,
    pub feedback_success: String,
    pub feedback_error: String,
    pub no_js: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            menu_open: "open".into(),
            dark: "dark".into(),
            link_active: "active".into(),
            loading: "loading".into(),
            feedback: "feedback".into(),
            feedback_success: "success".into(),
            feedback_error: "error".into(),
            no_js: "no-js".into(),
        }
    }
}

/// User-facing strings. `{min}` in the message-length texts is replaced by
/// the configured minimum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub name_validity: String,
    pub name_feedback: String,
    pub email_validity: String,
    pub email_feedback: String,
    pub message_validity: String,
    pub message_feedback: String,
    pub sending_label: String,
    pub sending_status: String,
    pub sent_status: String,
    pub theme_to_light: String,
    pub theme_to_dark: String,
    pub theme_to_light_title: String,
    pub theme_to_dark_title: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            name_validity: "Informe seu nome.".into(),
            name_feedback: "Por favor, informe seu nome.".into(),
            email_validity: "E-mail inválido.".into(),
            email_feedback: "Por favor, informe um email válido (ex: usuario@dominio.com).".into(),
            message_validity: "A mensagem deve ter pelo menos {min} caracteres.".into(),
            message_feedback: "A mensagem deve ter pelo menos {min} caracteres.".into(),
            sending_label: "Enviando...".into(),
            sending_status: "Enviando mensagem...".into(),
            sent_status: "Mensagem enviada com sucesso!".into(),
            theme_to_light: "Claro".into(),
            theme_to_dark: "Escuro".into(),
            theme_to_light_title: "Ativar tema claro".into(),
            theme_to_dark_title: "Ativar tema escuro".into(),
        }
    }
}

/// Intersection options for the section highlighter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObserverConfig {
    #[serde(default = "ObserverConfig::default_root_margin")]
    pub root_margin: String,
    #[serde(default = "ObserverConfig::default_threshold")]
    pub threshold: f64,
}

impl ObserverConfig {
    fn default_root_margin() -> String {
        "0px 0px -40% 0px".to_string()
    }

    const fn default_threshold() -> f64 {
        0.15
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigError::RangeViolation {
                field: "observer.threshold",
                min: 0.0,
                max: 1.0,
                value: self.threshold,
            });
        }
        Ok(())
    }
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            root_margin: Self::default_root_margin(),
            threshold: Self::default_threshold(),
        }
    }
}
